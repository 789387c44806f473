//! Location types and their localized names
//!
//! The catalog is built once at startup and shared read-only by every
//! entry of a map. Entries refer to their type through a [`LocationTypeId`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::config::{CatalogConfig, DEFAULT_TYPE_KEY, SCHOOL_LANGUAGES, SCHOOL_SPACES};

/// Maximum length of a language code in bytes
pub const MAX_LANG_LEN: usize = 8;

/// Maximum length of a location type key in bytes
pub const MAX_TYPE_KEY_LEN: usize = 32;

/// Errors found while building a catalog from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No location types configured
    Empty,
    /// A type has an empty key
    EmptyKey,
    /// Two types share a key (case-insensitive)
    DuplicateType(String),
    /// Type key longer than [`MAX_TYPE_KEY_LEN`]
    KeyTooLong(String),
    /// Language code empty or longer than [`MAX_LANG_LEN`]
    InvalidLangCode(String),
    /// A type has no display names
    MissingNames(String),
    /// The default type is not one of the configured types
    UnknownDefault(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no location types"),
            CatalogError::EmptyKey => write!(f, "location type with an empty key"),
            CatalogError::DuplicateType(key) => write!(f, "location type '{}' defined twice", key),
            CatalogError::KeyTooLong(key) => write!(
                f,
                "location type key '{}' is longer than {} bytes",
                key, MAX_TYPE_KEY_LEN
            ),
            CatalogError::InvalidLangCode(code) => write!(
                f,
                "invalid language code '{}' (1 to {} bytes)",
                code, MAX_LANG_LEN
            ),
            CatalogError::MissingNames(key) => {
                write!(f, "location type '{}' has no display names", key)
            }
            CatalogError::UnknownDefault(key) => {
                write!(f, "default type '{}' is not in the catalog", key)
            }
        }
    }
}

/// Short language identifier such as `en`, `zu` or `af`
///
/// Codes are stored lowercase. The set of codes is open: any code that
/// fits in [`MAX_LANG_LEN`] bytes is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LangCode(heapless::String<MAX_LANG_LEN>);

impl LangCode {
    /// Parse a language code, returning `None` if it is empty or too long
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let mut s = heapless::String::new();
        for c in code.chars() {
            s.push(c.to_ascii_lowercase()).ok()?;
        }
        Some(Self(s))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name of a location type in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedName {
    /// Language of the name
    pub lang: LangCode,
    /// The name itself
    pub name: String,
}

/// Index of a location type within its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocationTypeId(usize);

impl LocationTypeId {
    /// Position of the type in the catalog
    pub fn index(self) -> usize {
        self.0
    }
}

/// A category of place with its map symbol and localized names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationType {
    key: String,
    symbol: char,
    names: Vec<LocalizedName>,
}

impl LocationType {
    /// Lookup key (lowercase)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Single glyph drawn on the map
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// All localized names, in the catalog's language order
    pub fn names(&self) -> &[LocalizedName] {
        &self.names
    }

    /// Name in the given language, if the catalog has one
    pub fn name(&self, lang: &str) -> Option<&str> {
        let lang = LangCode::new(lang)?;
        self.names
            .iter()
            .find(|n| n.lang == lang)
            .map(|n| n.name.as_str())
    }

    /// Name in the given language, falling back to the first name
    pub fn display_name(&self, lang: &str) -> &str {
        self.name(lang)
            .or_else(|| self.names.first().map(|n| n.name.as_str()))
            .unwrap_or(self.key.as_str())
    }
}

/// Registry of location types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
    /// Never empty
    types: Vec<LocationType>,
    default_type: LocationTypeId,
    languages: Vec<LangCode>,
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::school()
    }
}

impl LocationCatalog {
    /// The built-in school catalog (classroom, office, playground, library,
    /// entrance) in English, isiZulu and Afrikaans
    pub fn school() -> Self {
        let languages: Vec<LangCode> = SCHOOL_LANGUAGES
            .iter()
            .filter_map(|code| LangCode::new(code))
            .collect();

        let types: Vec<LocationType> = SCHOOL_SPACES
            .iter()
            .map(|(key, symbol, names)| LocationType {
                key: key.to_string(),
                symbol: *symbol,
                names: languages
                    .iter()
                    .zip(names.iter())
                    .map(|(lang, name)| LocalizedName {
                        lang: lang.clone(),
                        name: name.to_string(),
                    })
                    .collect(),
            })
            .collect();

        let default_type = types
            .iter()
            .position(|t| t.key == DEFAULT_TYPE_KEY)
            .map(LocationTypeId)
            .unwrap_or(LocationTypeId(0));

        Self {
            types,
            default_type,
            languages,
        }
    }

    /// Build and validate a catalog from configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        if config.types.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut languages = Vec::new();
        for code in &config.languages {
            let lang = LangCode::new(code).ok_or_else(|| CatalogError::InvalidLangCode(code.clone()))?;
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }

        let mut types: Vec<LocationType> = Vec::with_capacity(config.types.len());
        for type_config in &config.types {
            let key = normalize_key(&type_config.key);
            if key.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            if key.len() > MAX_TYPE_KEY_LEN {
                return Err(CatalogError::KeyTooLong(key));
            }
            if types.iter().any(|t| t.key == key) {
                return Err(CatalogError::DuplicateType(key));
            }
            if type_config.names.is_empty() {
                return Err(CatalogError::MissingNames(key));
            }

            let mut unordered = Vec::with_capacity(type_config.names.len());
            for (code, name) in &type_config.names {
                let lang =
                    LangCode::new(code).ok_or_else(|| CatalogError::InvalidLangCode(code.clone()))?;
                unordered.push(LocalizedName {
                    lang,
                    name: name.clone(),
                });
            }

            // Listed languages first, in configured order; the rest after
            let mut names = Vec::with_capacity(unordered.len());
            for lang in &languages {
                if let Some(pos) = unordered.iter().position(|n| &n.lang == lang) {
                    names.push(unordered.remove(pos));
                }
            }
            names.extend(unordered);

            types.push(LocationType {
                key,
                symbol: type_config.symbol,
                names,
            });
        }

        let default_key = normalize_key(&config.default_type);
        let default_type = types
            .iter()
            .position(|t| t.key == default_key)
            .map(LocationTypeId)
            .ok_or_else(|| CatalogError::UnknownDefault(config.default_type.clone()))?;

        if languages.is_empty() {
            for name in types.iter().flat_map(|t| t.names.iter()) {
                if !languages.contains(&name.lang) {
                    languages.push(name.lang.clone());
                }
            }
        }

        Ok(Self {
            types,
            default_type,
            languages,
        })
    }

    /// Find a type by key (trimmed, case-insensitive)
    pub fn lookup(&self, key: &str) -> Option<LocationTypeId> {
        let key = normalize_key(key);
        self.types
            .iter()
            .position(|t| t.key == key)
            .map(LocationTypeId)
    }

    /// Find a type by key, falling back to the default type
    ///
    /// Learners type space types by hand; a typo still places the space
    /// on the map rather than failing.
    pub fn resolve(&self, key: &str) -> LocationTypeId {
        self.lookup(key).unwrap_or(self.default_type)
    }

    /// Get a type by id
    pub fn get(&self, id: LocationTypeId) -> Option<&LocationType> {
        self.types.get(id.0)
    }

    /// Get a type by id, falling back to the default type for foreign ids
    pub fn type_of(&self, id: LocationTypeId) -> &LocationType {
        self.get(id).unwrap_or_else(|| self.default_location_type())
    }

    /// Id of the fallback type
    pub fn default_type(&self) -> LocationTypeId {
        self.default_type
    }

    /// The fallback type
    pub fn default_location_type(&self) -> &LocationType {
        &self.types[self.default_type.0]
    }

    /// Language codes in display order
    pub fn languages(&self) -> &[LangCode] {
        &self.languages
    }

    /// Iterate over all types with their ids
    pub fn iter(&self) -> impl Iterator<Item = (LocationTypeId, &LocationType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (LocationTypeId(i), t))
    }

    /// Number of types (always at least one)
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false; a catalog holds at least the default type
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Stored form of a type key: trimmed and lower-cased (Unicode)
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocationTypeConfig;
    use alloc::collections::BTreeMap;

    fn type_config(key: &str, symbol: char, names: &[(&str, &str)]) -> LocationTypeConfig {
        LocationTypeConfig {
            key: key.to_string(),
            symbol,
            names: names
                .iter()
                .map(|(l, n)| (l.to_string(), n.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_school_catalog() {
        let catalog = LocationCatalog::school();
        assert_eq!(catalog.len(), 5);

        let office = catalog.type_of(catalog.lookup("office").unwrap());
        assert_eq!(office.symbol(), '▣');
        assert_eq!(office.name("en"), Some("Office"));
        assert_eq!(office.name("zu"), Some("Ihhovisi"));
        assert_eq!(office.name("af"), Some("Kantoor"));

        let langs: Vec<&str> = catalog.languages().iter().map(|l| l.as_str()).collect();
        assert_eq!(langs, ["en", "zu", "af"]);
    }

    #[test]
    fn test_school_matches_config() {
        let from_config = LocationCatalog::from_config(&CatalogConfig::school()).unwrap();
        assert_eq!(from_config, LocationCatalog::school());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = LocationCatalog::school();
        assert_eq!(catalog.lookup("  Library "), catalog.lookup("library"));
        assert!(catalog.lookup("library").is_some());
    }

    #[test]
    fn test_lookup_folds_non_ascii_case() {
        let mut config = CatalogConfig::school();
        config
            .types
            .push(type_config("Kêrk", '†', &[("af", "Kerk"), ("en", "Church")]));
        let catalog = LocationCatalog::from_config(&config).unwrap();

        let church = catalog.lookup("kêrk");
        assert!(church.is_some());
        assert_eq!(catalog.lookup("KÊRK"), church);
        assert_eq!(catalog.lookup(" Kêrk "), church);
        assert_eq!(catalog.type_of(catalog.resolve("KÊRK")).symbol(), '†');
    }

    #[test]
    fn test_duplicate_differs_only_in_non_ascii_case() {
        let mut config = CatalogConfig::school();
        config.types.push(type_config("Kêrk", '†', &[("af", "Kerk")]));
        config.types.push(type_config("KÊRK", '+', &[("af", "Kerk")]));
        assert_eq!(
            LocationCatalog::from_config(&config),
            Err(CatalogError::DuplicateType("kêrk".to_string()))
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_default() {
        let catalog = LocationCatalog::school();
        assert_eq!(catalog.lookup("dungeon"), None);
        let id = catalog.resolve("dungeon");
        assert_eq!(id, catalog.default_type());
        assert_eq!(catalog.type_of(id).key(), "classroom");
    }

    #[test]
    fn test_open_language_set() {
        let config = CatalogConfig {
            default_type: "hall".to_string(),
            languages: vec!["en".to_string()],
            types: vec![type_config(
                "hall",
                'H',
                &[("en", "Hall"), ("xh", "Iholo"), ("st", "Holo")],
            )],
        };
        let catalog = LocationCatalog::from_config(&config).unwrap();
        let hall = catalog.default_location_type();

        // Listed language first, the rest in key order
        let langs: Vec<&str> = hall.names().iter().map(|n| n.lang.as_str()).collect();
        assert_eq!(langs, ["en", "st", "xh"]);
        assert_eq!(hall.name("XH"), Some("Iholo"));
    }

    #[test]
    fn test_languages_derived_when_not_listed() {
        let config = CatalogConfig {
            default_type: "hall".to_string(),
            languages: Vec::new(),
            types: vec![type_config("hall", 'H', &[("zu", "Ihholo"), ("en", "Hall")])],
        };
        let catalog = LocationCatalog::from_config(&config).unwrap();
        let langs: Vec<&str> = catalog.languages().iter().map(|l| l.as_str()).collect();
        assert_eq!(langs, ["en", "zu"]);
    }

    #[test]
    fn test_display_name_fallback() {
        let catalog = LocationCatalog::school();
        let classroom = catalog.default_location_type();
        assert_eq!(classroom.display_name("zu"), "Igumbi Lokufunda");
        assert_eq!(classroom.display_name("fr"), "Classroom");
    }

    #[test]
    fn test_config_errors() {
        let empty = CatalogConfig {
            default_type: "x".to_string(),
            languages: Vec::new(),
            types: Vec::new(),
        };
        assert_eq!(LocationCatalog::from_config(&empty), Err(CatalogError::Empty));

        let duplicate = CatalogConfig {
            default_type: "hall".to_string(),
            languages: Vec::new(),
            types: vec![
                type_config("hall", 'H', &[("en", "Hall")]),
                type_config("HALL", 'h', &[("en", "Hall")]),
            ],
        };
        assert_eq!(
            LocationCatalog::from_config(&duplicate),
            Err(CatalogError::DuplicateType("hall".to_string()))
        );

        let unknown_default = CatalogConfig {
            default_type: "gym".to_string(),
            languages: Vec::new(),
            types: vec![type_config("hall", 'H', &[("en", "Hall")])],
        };
        assert_eq!(
            LocationCatalog::from_config(&unknown_default),
            Err(CatalogError::UnknownDefault("gym".to_string()))
        );

        let no_names = CatalogConfig {
            default_type: "hall".to_string(),
            languages: Vec::new(),
            types: vec![type_config("hall", 'H', &[])],
        };
        assert_eq!(
            LocationCatalog::from_config(&no_names),
            Err(CatalogError::MissingNames("hall".to_string()))
        );

        let bad_lang = CatalogConfig {
            default_type: "hall".to_string(),
            languages: vec!["much-too-long".to_string()],
            types: vec![type_config("hall", 'H', &[("en", "Hall")])],
        };
        assert_eq!(
            LocationCatalog::from_config(&bad_lang),
            Err(CatalogError::InvalidLangCode("much-too-long".to_string()))
        );
    }
}
