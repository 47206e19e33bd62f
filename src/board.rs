//! nRF52840-DK bindings for the game's hardware traits.
//!
//! - Buttons are plain `embassy_nrf::gpio::Input`s (already `embedded-hal`).
//! - The on-board LEDs are active-low; [`ActiveLow`] flips them.
//! - The piezo is driven by PWM0 channel 0 ([`Buzzer`]).
//! - Time comes from the embassy RTC1 time driver ([`SysClock`]).

use core::convert::Infallible;

use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, OutputPin};

use simon::config::BUZZER_DUTY_U16;
use simon::{Clock, ToneOutput};

/// PWM counter clock: 16 MHz / 16.
const PWM_CLOCK_HZ: u32 = 1_000_000;

/// COUNTERTOP is a 15-bit register.
const MAX_TOP: u32 = 0x7FFF;

/// Output pin wired so that driving it low lights the LED.
pub struct ActiveLow<'d>(pub Output<'d>);

impl ErrorType for ActiveLow<'_> {
    type Error = Infallible;
}

impl OutputPin for ActiveLow<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_high();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_low();
        Ok(())
    }
}

/// Piezo buzzer on a single PWM channel.
pub struct Buzzer<'d> {
    pwm: SimplePwm<'d, PWM0>,
    top: u16,
    on: bool,
}

impl<'d> Buzzer<'d> {
    pub fn new(pwm: SimplePwm<'d, PWM0>) -> Self {
        pwm.set_prescaler(Prescaler::Div16);
        let top = (PWM_CLOCK_HZ / 1000) as u16;
        pwm.set_max_duty(top);
        pwm.disable();
        Self { pwm, top, on: false }
    }

    fn apply_duty(&mut self) {
        let duty = (u32::from(self.top) * u32::from(BUZZER_DUTY_U16) / u32::from(u16::MAX)) as u16;
        self.pwm.set_duty(0, duty.max(1));
    }
}

impl ToneOutput for Buzzer<'_> {
    fn set_frequency(&mut self, hz: u32) {
        self.top = (PWM_CLOCK_HZ / hz.max(1)).clamp(2, MAX_TOP) as u16;
        self.pwm.set_max_duty(self.top);
        if self.on {
            self.apply_duty();
        }
    }

    fn set_duty_on(&mut self) {
        self.on = true;
        self.pwm.enable();
        self.apply_duty();
    }

    fn set_duty_off(&mut self) {
        self.on = false;
        self.pwm.set_duty(0, 0);
        self.pwm.disable();
    }
}

/// Milliseconds since boot from the embassy time driver.
pub struct SysClock;

impl Clock for SysClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
