//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the console, providing consistent
//! formatting and exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use sawubona_core::map::{CatalogError, MapError};
use sawubona_display::DisplayError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read
    ConfigRead { path: PathBuf, error: io::Error },
    /// Configuration file is not valid TOML for a lesson
    ConfigParse { path: PathBuf, error: toml::de::Error },
    /// Catalog in the configuration is inconsistent
    Catalog(CatalogError),
    /// Map could not be created
    Map(MapError),
    /// Drawing to the console failed
    Display(DisplayError),
    /// Reading input or writing output failed
    Io(io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::ConfigParse { .. } | CliError::Catalog(_) => {
                eprintln!();
                eprintln!("The bundled school.toml shows the expected layout:");
                eprintln!("  [catalog] needs default_type and at least one [[catalog.types]]");
                eprintln!("  every type needs a key, a one-character symbol and names");
            }
            CliError::Map(MapError::InvalidGridSize(_)) => {
                eprintln!();
                eprintln!("Use --grid-size between 1 and {}", sawubona_core::map::MAX_GRID_SIZE);
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::ConfigRead { path, error } => {
                write!(f, "Failed to read config '{}': {}", path.display(), error)
            }
            CliError::ConfigParse { path, error } => {
                write!(f, "Invalid config '{}': {}", path.display(), error)
            }
            CliError::Catalog(e) => write!(f, "Invalid catalog: {}", e),
            CliError::Map(e) => write!(f, "Map error: {}", e),
            CliError::Display(e) => write!(f, "Display error: {}", e),
            CliError::Io(e) => write!(f, "Console I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigRead { error, .. } => Some(error),
            CliError::ConfigParse { error, .. } => Some(error),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        CliError::Catalog(e)
    }
}

impl From<MapError> for CliError {
    fn from(e: MapError) -> Self {
        CliError::Map(e)
    }
}

impl From<DisplayError> for CliError {
    fn from(e: DisplayError) -> Self {
        CliError::Display(e)
    }
}
