//! The game console: every hardware handle the game touches, in one place.
//!
//! Nothing here is global. The four button channels, the tone arbiter, the
//! buzzer, the clock and the delay provider are owned by a `Console` and
//! borrowed by whichever phase runs (playback, capture, feedback). Phases
//! never overlap, so the buzzer always has exactly one user.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::audio::ToneArbiter;
use crate::hal::{Clock, ToneOutput};
use crate::input::{ButtonChannel, ButtonId};

pub struct Console<I, O, T, C, D> {
    pub(crate) channels: [ButtonChannel<I, O>; 4],
    pub(crate) arbiter: ToneArbiter,
    pub(crate) tone: T,
    pub(crate) clock: C,
    pub(crate) delay: D,
}

impl<I, O, T, C, D> Console<I, O, T, C, D>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
    T: ToneOutput,
    C: Clock,
    D: DelayNs,
{
    /// Wire up the console. `buttons[n]` and `leds[n]` belong to button n+1.
    ///
    /// The buzzer is silenced and each LED starts out mirroring its button.
    pub fn new(buttons: [I; 4], leds: [O; 4], mut tone: T, clock: C, delay: D) -> Self {
        let [b1, b2, b3, b4] = buttons;
        let [l1, l2, l3, l4] = leds;
        tone.set_duty_off();
        Self {
            channels: [
                ButtonChannel::new(ButtonId::One, b1, l1),
                ButtonChannel::new(ButtonId::Two, b2, l2),
                ButtonChannel::new(ButtonId::Three, b3, l3),
                ButtonChannel::new(ButtonId::Four, b4, l4),
            ],
            arbiter: ToneArbiter::new(),
            tone,
            clock,
            delay,
        }
    }

    pub fn channel(&self, id: ButtonId) -> &ButtonChannel<I, O> {
        &self.channels[id.index()]
    }

    pub fn arbiter(&self) -> &ToneArbiter {
        &self.arbiter
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    /// Blocking pause; input is not sampled meanwhile.
    pub fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    pub fn set_all_leds(&mut self, on: bool) {
        for channel in self.channels.iter_mut() {
            channel.set_led(on);
        }
    }

    /// Raw held state of every button, indexed by [`ButtonId::index`].
    pub fn held_buttons(&mut self) -> [bool; 4] {
        let mut held = [false; 4];
        for channel in self.channels.iter_mut() {
            held[channel.id().index()] = channel.raw_held();
        }
        held
    }

    /// Block until `id` is let go, consuming the release edge.
    ///
    /// Returns straight away if the button is already settled released.
    pub fn wait_for_release(&mut self, id: ButtonId) {
        let channel = &mut self.channels[id.index()];
        loop {
            let now = self.clock.now_ms();
            if channel.poll_release(now) || channel.is_idle() {
                return;
            }
        }
    }
}
