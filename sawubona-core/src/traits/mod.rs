//! Hardware capability traits
//!
//! Lessons talk to buttons, buzzers and pixels only through these traits,
//! so the same lesson logic runs against real boards, the console, or test
//! doubles.

pub mod input;
pub mod pixels;
pub mod tone;

pub use input::{TriState, TriStateInput};
pub use pixels::{ColorOutput, PixelError, Rgb};
pub use tone::{Tone, ToneOutput};
