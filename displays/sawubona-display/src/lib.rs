//! Display abstraction traits and shared components for Sawubona
//!
//! This crate provides:
//! - `DisplayBackend` trait for text displays (console, OLED, LCD)
//! - `Screen`, a text buffer implementing `DisplayBackend`
//! - `MapView`, which lays out the school map, legend, listing and
//!   distance reports as text lines
//!
//! # Architecture
//!
//! The map itself returns plain data. `MapView` turns that data into lines
//! without doing any I/O; a backend decides where the lines go.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod screen;
pub mod view;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use screen::Screen;
pub use view::{distance_lines, MapView, DEFAULT_BACKGROUND};
