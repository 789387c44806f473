//! Configuration types
//!
//! Board-agnostic lesson configuration. Hosts load it from TOML (see the
//! `serde` feature); boards use the built-in school defaults.

pub mod defaults;
pub mod types;

pub use defaults::*;
pub use types::*;
