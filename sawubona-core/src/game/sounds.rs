//! Melodies used for game feedback

use crate::traits::Tone;

/// C, E, G when the game starts
pub const STARTUP: [Tone; 3] = [Tone::new(523, 100), Tone::new(659, 100), Tone::new(784, 150)];

/// Rising pair for a good choice
pub const SUCCESS: [Tone; 2] = [Tone::new(784, 100), Tone::new(1047, 150)];

/// Short blip while the machine "thinks"
pub const THINKING: [Tone; 2] = [Tone::new(440, 50), Tone::new(494, 50)];

/// Single note for an okay choice
pub const OKAY: [Tone; 1] = [Tone::new(659, 150)];

/// Low note for a weaker choice
pub const WAIT: [Tone; 1] = [Tone::new(392, 150)];
