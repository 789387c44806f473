//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability traits
//! defined in sawubona-core, built on `embedded-hal` pins:
//!
//! - Debounced push buttons and the three-button choice pad
//! - PWM buzzer
//! - Green/yellow/red feedback lights
//! - LED matrix rendering of the school map

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod buzzer;
pub mod lights;
pub mod matrix;

pub use button::{ChoicePad, DebouncedButton};
pub use buzzer::{BuzzerError, PwmBuzzer, PwmPin};
pub use lights::FeedbackLights;
pub use matrix::{render_map, MatrixLayout, Palette};
