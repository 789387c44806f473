//! Console front end for the Sawubona lesson kit
//!
//! The binary in `main.rs` only parses arguments and sets up logging;
//! everything that talks to the learner lives here so it can be driven by
//! scripted input in tests.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;

pub use console::Console;
pub use error::CliError;
