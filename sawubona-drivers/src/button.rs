//! Debounced push buttons
//!
//! Lesson buttons are wired with pull-downs (pressed = high) or pull-ups
//! (pressed = low). A reading only counts once it has been the same for
//! a number of consecutive polls.

use embedded_hal::digital::InputPin;
use sawubona_core::game::Choice;
use sawubona_core::traits::{TriState, TriStateInput};

/// Consecutive identical reads before a level is trusted
pub const DEFAULT_SETTLE_READS: u8 = 3;

/// Push button with debouncing
pub struct DebouncedButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
    settle_reads: u8,
    /// Level seen on the last read and how many times in a row
    candidate: Option<bool>,
    count: u8,
    /// Last settled level
    stable: Option<bool>,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a new button
    ///
    /// # Arguments
    /// - `pin`: The GPIO input
    /// - `active_low`: If true, the button reads pressed when the pin is LOW
    /// - `settle_reads`: Identical reads needed before a change is accepted
    pub fn new(pin: P, active_low: bool, settle_reads: u8) -> Self {
        Self {
            pin,
            active_low,
            settle_reads: settle_reads.max(1),
            candidate: None,
            count: 0,
            stable: None,
        }
    }

    /// Button with a pull-down resistor (pressed = HIGH)
    pub fn pull_down(pin: P) -> Self {
        Self::new(pin, false, DEFAULT_SETTLE_READS)
    }

    /// Button with a pull-up resistor (pressed = LOW)
    pub fn pull_up(pin: P) -> Self {
        Self::new(pin, true, DEFAULT_SETTLE_READS)
    }

    /// Forget debounce history
    pub fn reset(&mut self) {
        self.candidate = None;
        self.count = 0;
        self.stable = None;
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> TriStateInput for DebouncedButton<P> {
    fn read(&mut self) -> TriState {
        let level = match self.pin.is_high() {
            Ok(level) => level,
            Err(_) => {
                self.reset();
                return TriState::Unknown;
            }
        };
        let pressed = level != self.active_low;

        if self.candidate == Some(pressed) {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = Some(pressed);
            self.count = 1;
        }

        if self.count >= self.settle_reads {
            self.stable = Some(pressed);
        }

        self.stable.map(TriState::from).unwrap_or(TriState::Unknown)
    }
}

/// Three buttons for the help / share / teach game
pub struct ChoicePad<H, S, T> {
    help: H,
    share: S,
    teach: T,
}

impl<H: TriStateInput, S: TriStateInput, T: TriStateInput> ChoicePad<H, S, T> {
    /// Create a pad from its three buttons
    pub fn new(help: H, share: S, teach: T) -> Self {
        Self { help, share, teach }
    }

    /// Poll the buttons once
    ///
    /// All three are read every poll so their debounce state keeps up.
    /// When several are pressed, the lowest button number wins.
    pub fn poll(&mut self) -> Option<Choice> {
        let help = self.help.read();
        let share = self.share.read();
        let teach = self.teach.read();

        if help.is_high() {
            Some(Choice::Help)
        } else if share.is_high() {
            Some(Choice::Share)
        } else if teach.is_high() {
            Some(Choice::Teach)
        } else {
            None
        }
    }
}
