//! Buzzer tone trait

use embedded_hal::delay::DelayNs;

/// A note: frequency and length
///
/// A frequency of zero is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Pitch in Hz (0 = silence)
    pub freq_hz: u32,
    /// Length in milliseconds
    pub duration_ms: u32,
}

impl Tone {
    /// Create a note
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }

    /// Create a rest
    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(0, duration_ms)
    }

    /// Check if this is a rest
    pub const fn is_rest(&self) -> bool {
        self.freq_hz == 0
    }
}

/// Trait for tone outputs (PWM buzzers, speakers)
pub trait ToneOutput {
    /// Error type for tone operations
    type Error;

    /// Start sounding a frequency until [`stop`](Self::stop) is called
    fn start_tone(&mut self, freq_hz: u32) -> Result<(), Self::Error>;

    /// Silence the output
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Play one note, blocking for its duration
    ///
    /// The output is silent when this returns.
    fn play<D: DelayNs>(&mut self, tone: &Tone, delay: &mut D) -> Result<(), Self::Error> {
        if tone.is_rest() {
            self.stop()?;
        } else {
            self.start_tone(tone.freq_hz)?;
        }
        delay.delay_ms(tone.duration_ms);
        self.stop()
    }

    /// Play notes in order
    fn play_melody<D: DelayNs>(&mut self, melody: &[Tone], delay: &mut D) -> Result<(), Self::Error> {
        for tone in melody {
            self.play(tone, delay)?;
        }
        Ok(())
    }
}
