//! Board-agnostic core logic for the Sawubona lesson kit
//!
//! This crate contains all lesson logic that does not depend on specific
//! hardware or on a console:
//!
//! - Spatial map of the school (grid, legend, distances)
//! - Location catalog with localized names (en, zu, af, ...)
//! - Configuration type definitions
//! - Interactive session state machine
//! - Ubuntu helper game scoring
//! - Hardware capability traits (buttons, buzzer, pixels)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod game;
pub mod map;
pub mod state;
pub mod traits;
