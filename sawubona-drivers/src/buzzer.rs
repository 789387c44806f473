//! PWM buzzer
//!
//! A passive buzzer driven by a PWM channel: the PWM frequency sets the
//! pitch, a small duty cycle makes it sound, duty 0 silences it.

use sawubona_core::traits::ToneOutput;

/// Duty cycle used by the lessons (out of 65535)
pub const AUDIBLE_DUTY: u16 = 1000;

/// Lowest frequency the buzzer is asked to play
pub const MIN_FREQ_HZ: u32 = 20;

/// Highest frequency the buzzer is asked to play
pub const MAX_FREQ_HZ: u32 = 20_000;

/// Trait for PWM channel abstraction
pub trait PwmPin {
    /// Error type for PWM operations
    type Error;

    /// Set the PWM frequency in Hz
    fn set_frequency(&mut self, freq_hz: u32) -> Result<(), Self::Error>;

    /// Set the duty cycle (0 = off, 65535 = always on)
    fn set_duty_u16(&mut self, duty: u16) -> Result<(), Self::Error>;
}

/// Buzzer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerError<E> {
    /// Underlying PWM channel failed
    Pwm(E),
    /// Frequency outside `MIN_FREQ_HZ..=MAX_FREQ_HZ`
    FrequencyOutOfRange(u32),
}

/// Passive buzzer on a PWM channel
pub struct PwmBuzzer<P> {
    pwm: P,
    duty: u16,
    /// Frequency currently sounding
    sounding: Option<u32>,
}

impl<P: PwmPin> PwmBuzzer<P> {
    /// Create a buzzer with the lesson duty cycle
    pub fn new(pwm: P) -> Self {
        Self::with_duty(pwm, AUDIBLE_DUTY)
    }

    /// Create a buzzer with a custom duty cycle (louder or quieter)
    pub fn with_duty(pwm: P, duty: u16) -> Self {
        Self {
            pwm,
            duty,
            sounding: None,
        }
    }

    /// Frequency currently sounding, if any
    pub fn sounding(&self) -> Option<u32> {
        self.sounding
    }

    /// Silence and release the PWM channel
    pub fn release(mut self) -> Result<P, BuzzerError<P::Error>> {
        self.stop()?;
        Ok(self.pwm)
    }
}

impl<P: PwmPin> ToneOutput for PwmBuzzer<P> {
    type Error = BuzzerError<P::Error>;

    fn start_tone(&mut self, freq_hz: u32) -> Result<(), Self::Error> {
        if !(MIN_FREQ_HZ..=MAX_FREQ_HZ).contains(&freq_hz) {
            return Err(BuzzerError::FrequencyOutOfRange(freq_hz));
        }
        self.pwm.set_frequency(freq_hz).map_err(BuzzerError::Pwm)?;
        self.pwm.set_duty_u16(self.duty).map_err(BuzzerError::Pwm)?;
        self.sounding = Some(freq_hz);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.pwm.set_duty_u16(0).map_err(BuzzerError::Pwm)?;
        self.sounding = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::delay::DelayNs;
    use sawubona_core::game::sounds;
    use sawubona_core::traits::Tone;

    /// Mock PWM channel recording the last settings and every tone started
    #[derive(Default)]
    struct MockPwm {
        freq_hz: u32,
        duty: u16,
        started: [u32; 8],
        starts: usize,
    }

    impl PwmPin for MockPwm {
        type Error = Infallible;

        fn set_frequency(&mut self, freq_hz: u32) -> Result<(), Self::Error> {
            self.freq_hz = freq_hz;
            Ok(())
        }

        fn set_duty_u16(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            if duty > 0 {
                self.started[self.starts] = self.freq_hz;
                self.starts += 1;
            }
            Ok(())
        }
    }

    /// Delay that only adds up the requested time
    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_start_and_stop() {
        let mut buzzer = PwmBuzzer::new(MockPwm::default());
        buzzer.start_tone(523).unwrap();
        assert_eq!(buzzer.sounding(), Some(523));
        assert_eq!(buzzer.pwm.duty, AUDIBLE_DUTY);
        assert_eq!(buzzer.pwm.freq_hz, 523);

        buzzer.stop().unwrap();
        assert_eq!(buzzer.sounding(), None);
        assert_eq!(buzzer.pwm.duty, 0);
    }

    #[test]
    fn test_rejects_inaudible_frequency() {
        let mut buzzer = PwmBuzzer::new(MockPwm::default());
        assert_eq!(
            buzzer.start_tone(5),
            Err(BuzzerError::FrequencyOutOfRange(5))
        );
        assert_eq!(buzzer.sounding(), None);
    }

    #[test]
    fn test_play_melody() {
        let mut buzzer = PwmBuzzer::new(MockPwm::default());
        let mut delay = MockDelay::default();
        buzzer.play_melody(&sounds::STARTUP, &mut delay).unwrap();

        assert_eq!(&buzzer.pwm.started[..buzzer.pwm.starts], &[523, 659, 784]);
        assert_eq!(delay.total_ns, 350 * 1_000_000);
        // Silent afterwards
        assert_eq!(buzzer.pwm.duty, 0);
    }

    #[test]
    fn test_rest_is_silent() {
        let mut buzzer = PwmBuzzer::new(MockPwm::default());
        let mut delay = MockDelay::default();
        buzzer.play(&Tone::rest(200), &mut delay).unwrap();
        assert_eq!(buzzer.pwm.starts, 0);
        assert_eq!(delay.total_ns, 200 * 1_000_000);
    }
}
