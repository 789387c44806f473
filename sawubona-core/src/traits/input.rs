//! Tri-state input trait

/// Reading of a digital input that may not be trustworthy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriState {
    /// Input inactive (button released)
    Low,
    /// Input active (button pressed)
    High,
    /// Level not settled yet, or the input could not be read
    Unknown,
}

impl TriState {
    /// Check for a confirmed active reading
    pub fn is_high(&self) -> bool {
        matches!(self, TriState::High)
    }

    /// Check for a confirmed inactive reading
    pub fn is_low(&self) -> bool {
        matches!(self, TriState::Low)
    }

    /// Convert to a plain level, `None` when unknown
    pub fn level(&self) -> Option<bool> {
        match self {
            TriState::Low => Some(false),
            TriState::High => Some(true),
            TriState::Unknown => None,
        }
    }
}

impl From<bool> for TriState {
    fn from(high: bool) -> Self {
        if high {
            TriState::High
        } else {
            TriState::Low
        }
    }
}

/// Trait for inputs read by lessons (push buttons, touch pads, switches)
///
/// Takes `&mut self` because reads typically update debounce state.
pub trait TriStateInput {
    /// Read the current state
    fn read(&mut self) -> TriState;

    /// Check if the input reads as active
    fn is_active(&mut self) -> bool {
        self.read().is_high()
    }
}
