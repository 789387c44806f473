//! Built-in school catalog
//!
//! The reference set of school spaces with their map symbols and names in
//! English, isiZulu and Afrikaans.

/// Key of the type used when a learner types an unknown space type
pub const DEFAULT_TYPE_KEY: &str = "classroom";

/// Languages of the built-in catalog, in display order
pub const SCHOOL_LANGUAGES: [&str; 3] = ["en", "zu", "af"];

/// One row of the built-in catalog: key, symbol, names in [`SCHOOL_LANGUAGES`] order
pub type SpaceRow = (&'static str, char, [&'static str; 3]);

/// School spaces with multilingual names
pub const SCHOOL_SPACES: [SpaceRow; 5] = [
    ("classroom", '□', ["Classroom", "Igumbi Lokufunda", "Klaskamer"]),
    ("office", '▣', ["Office", "Ihhovisi", "Kantoor"]),
    ("playground", '○', ["Playground", "Indawo Yokudlala", "Speelterrein"]),
    ("library", '◊', ["Library", "Umtapo Wezincwadi", "Biblioteek"]),
    ("entrance", '△', ["Entrance", "Umnyango", "Ingang"]),
];
