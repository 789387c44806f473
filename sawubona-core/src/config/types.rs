//! Configuration type definitions
//!
//! These types describe a lesson setup: the map size and the catalog of
//! location types with their localized names.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_TYPE_KEY, SCHOOL_LANGUAGES, SCHOOL_SPACES};
use crate::map::DEFAULT_GRID_SIZE;

/// Complete lesson configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LessonConfig {
    /// Map settings
    pub map: MapSettings,
    /// Location type catalog
    pub catalog: CatalogConfig,
}

/// Map settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapSettings {
    /// Width and height of the square grid
    pub grid_size: u16,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

/// Location type catalog configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogConfig {
    /// Key of the type used for unrecognized input
    pub default_type: String,
    /// Language codes in display order
    ///
    /// Codes used by type names but missing here are still accepted; they
    /// are shown after the listed ones.
    #[cfg_attr(feature = "serde", serde(default))]
    pub languages: Vec<String>,
    /// Location types
    pub types: Vec<LocationTypeConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::school()
    }
}

impl CatalogConfig {
    /// The built-in school catalog
    pub fn school() -> Self {
        let types = SCHOOL_SPACES
            .iter()
            .map(|(key, symbol, names)| LocationTypeConfig {
                key: key.to_string(),
                symbol: *symbol,
                names: SCHOOL_LANGUAGES
                    .iter()
                    .zip(names.iter())
                    .map(|(lang, name)| (lang.to_string(), name.to_string()))
                    .collect(),
            })
            .collect();

        Self {
            default_type: DEFAULT_TYPE_KEY.to_string(),
            languages: SCHOOL_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            types,
        }
    }
}

/// A single location type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationTypeConfig {
    /// Lookup key (e.g. "classroom")
    pub key: String,
    /// Map symbol
    pub symbol: char,
    /// Display name per language code
    pub names: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_school() {
        let config = LessonConfig::default();
        assert_eq!(config.map.grid_size, 10);
        assert_eq!(config.catalog.default_type, "classroom");
        assert_eq!(config.catalog.languages, ["en", "zu", "af"]);
        assert_eq!(config.catalog.types.len(), 5);
    }

    #[test]
    fn test_school_names() {
        let catalog = CatalogConfig::school();
        let library = catalog.types.iter().find(|t| t.key == "library").unwrap();
        assert_eq!(library.symbol, '◊');
        assert_eq!(library.names["zu"], "Umtapo Wezincwadi");
        assert_eq!(library.names["af"], "Biblioteek");
    }
}
