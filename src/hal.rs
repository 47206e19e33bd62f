//! Hardware seams the game logic is written against.
//!
//! Digital pins and blocking delays come from `embedded-hal` 1.0. The
//! buzzer and the millisecond clock have no `embedded-hal` trait that fits,
//! so they are declared here and implemented by the board glue (or by test
//! fakes on the host).

use core::convert::Infallible;
use embedded_hal::digital::{InputPin, OutputPin};

/// Square-wave tone output driving the piezo buzzer.
///
/// Frequency and duty are independent: `set_frequency` never starts or
/// stops the sound on its own.
pub trait ToneOutput {
    /// Select the pitch (Hz) of the square wave.
    fn set_frequency(&mut self, hz: u32);

    /// Start driving the buzzer at the configured frequency.
    fn set_duty_on(&mut self);

    /// Duty 0 - the buzzer is silent.
    fn set_duty_off(&mut self);

    /// Convenience: set the pitch and start sounding.
    fn play(&mut self, hz: u32) {
        self.set_duty_on();
        self.set_frequency(hz);
    }
}

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;
}

/// Read an active-low, pull-up input: `true` while the button is held.
pub(crate) fn is_held<P>(pin: &mut P) -> bool
where
    P: InputPin<Error = Infallible>,
{
    match pin.is_low() {
        Ok(low) => low,
        Err(never) => match never {},
    }
}

/// Drive an output pin; `true` lights the LED.
pub(crate) fn drive<P>(pin: &mut P, on: bool)
where
    P: OutputPin<Error = Infallible>,
{
    let result = if on { pin.set_high() } else { pin.set_low() };
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
