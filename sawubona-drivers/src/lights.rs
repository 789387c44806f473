//! Feedback lights
//!
//! Three LEDs give game feedback: green for a good choice, yellow for an
//! okay one, red while waiting or for a weak choice.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use sawubona_core::game::Feedback;

/// LED on-time of one flash (ms)
pub const FLASH_ON_MS: u32 = 100;

/// LED off-time between flashes (ms)
pub const FLASH_OFF_MS: u32 = 100;

/// Green, yellow and red feedback LEDs
pub struct FeedbackLights<G, Y, R> {
    good: G,
    okay: Y,
    wait: R,
}

impl<E, G, Y, R> FeedbackLights<G, Y, R>
where
    G: OutputPin<Error = E>,
    Y: OutputPin<Error = E>,
    R: OutputPin<Error = E>,
{
    /// Create the light set; all LEDs start off
    pub fn new(good: G, okay: Y, wait: R) -> Result<Self, E> {
        let mut lights = Self { good, okay, wait };
        lights.all_off()?;
        Ok(lights)
    }

    /// Turn every LED off
    pub fn all_off(&mut self) -> Result<(), E> {
        self.good.set_low()?;
        self.okay.set_low()?;
        self.wait.set_low()
    }

    /// Switch the LED for a feedback level on or off
    pub fn set(&mut self, feedback: Feedback, on: bool) -> Result<(), E> {
        match feedback {
            Feedback::Good => set_pin(&mut self.good, on),
            Feedback::Okay => set_pin(&mut self.okay, on),
            Feedback::Wait => set_pin(&mut self.wait, on),
        }
    }

    /// Flash the LED for a feedback level
    pub fn flash<D: DelayNs>(&mut self, feedback: Feedback, times: u8, delay: &mut D) -> Result<(), E> {
        for _ in 0..times {
            self.set(feedback, true)?;
            delay.delay_ms(FLASH_ON_MS);
            self.set(feedback, false)?;
            delay.delay_ms(FLASH_OFF_MS);
        }
        Ok(())
    }

    /// Flash the LED for a feedback level its usual number of times
    pub fn show<D: DelayNs>(&mut self, feedback: Feedback, delay: &mut D) -> Result<(), E> {
        self.flash(feedback, feedback.flashes(), delay)
    }
}

fn set_pin<P: OutputPin>(pin: &mut P, on: bool) -> Result<(), P::Error> {
    if on {
        pin.set_high()
    } else {
        pin.set_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock LED counting rising edges
    #[derive(Default)]
    struct MockLed {
        high: bool,
        flashes: u8,
    }

    impl ErrorType for MockLed {
        type Error = Infallible;
    }

    impl OutputPin for MockLed {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if !self.high {
                self.flashes += 1;
            }
            self.high = true;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lights() -> FeedbackLights<MockLed, MockLed, MockLed> {
        FeedbackLights::new(MockLed::default(), MockLed::default(), MockLed::default()).unwrap()
    }

    #[test]
    fn test_show_flashes_matching_led() {
        let mut lights = lights();
        lights.show(Feedback::Good, &mut NoDelay).unwrap();
        assert_eq!(lights.good.flashes, 4);
        assert_eq!(lights.okay.flashes, 0);
        assert_eq!(lights.wait.flashes, 0);
        assert!(!lights.good.high);

        lights.show(Feedback::Wait, &mut NoDelay).unwrap();
        assert_eq!(lights.wait.flashes, 2);
    }

    #[test]
    fn test_set_and_all_off() {
        let mut lights = lights();
        lights.set(Feedback::Okay, true).unwrap();
        assert!(lights.okay.high);
        lights.all_off().unwrap();
        assert!(!lights.okay.high);
    }
}
