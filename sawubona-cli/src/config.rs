//! Lesson configuration loading
//!
//! Without `--config` the bundled `school.toml` is used. A `--grid-size`
//! given on the command line wins over the file.

use std::fs;
use std::path::{Path, PathBuf};

use sawubona_core::config::LessonConfig;
use sawubona_core::map::LocationCatalog;
use tracing::{debug, info};

use crate::error::CliError;

/// The bundled school configuration
pub const BUNDLED_CONFIG: &str = include_str!("../school.toml");

/// Load the lesson configuration
pub fn load(path: Option<&Path>, grid_size: Option<u16>) -> Result<LessonConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading lesson config");
            let text = fs::read_to_string(path).map_err(|error| CliError::ConfigRead {
                path: path.to_path_buf(),
                error,
            })?;
            parse(&text, path)?
        }
        None => parse(BUNDLED_CONFIG, Path::new("school.toml"))?,
    };

    if let Some(size) = grid_size {
        debug!(from = config.map.grid_size, to = size, "Grid size overridden");
        config.map.grid_size = size;
    }
    Ok(config)
}

/// Parse TOML text; `origin` names the source in errors
pub fn parse(text: &str, origin: &Path) -> Result<LessonConfig, CliError> {
    toml::from_str(text).map_err(|error| CliError::ConfigParse {
        path: PathBuf::from(origin),
        error,
    })
}

/// Build the catalog described by a configuration
pub fn catalog(config: &LessonConfig) -> Result<LocationCatalog, CliError> {
    let catalog = LocationCatalog::from_config(&config.catalog)?;
    debug!(
        types = catalog.len(),
        languages = catalog.languages().len(),
        "Catalog ready"
    );
    Ok(catalog)
}
