//! Round-end feedback: victory melody and failure cue.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::audio::{melody, FAIL_NOTE};
use crate::config::{FAIL_REPEATS, MELODY_STEP_MS, MELODY_TAIL_MS, STEP_GAP_MS, STEP_ON_MS};
use crate::console::Console;
use crate::hal::{Clock, ToneOutput};
use crate::input::ButtonId;

impl<I, O, T, C, D> Console<I, O, T, C, D>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
    T: ToneOutput,
    C: Clock,
    D: DelayNs,
{
    /// Victory jingle with the LEDs chasing round, one per note (rests too).
    pub fn play_victory(&mut self) {
        for (step, note) in melody::VICTORY.iter().enumerate() {
            let id = ButtonId::from_index(step);
            self.channels[id.index()].set_led(true);
            match note {
                Some(note) => self.tone.play(note.hz()),
                None => self.tone.set_duty_off(),
            }
            self.delay.delay_ms(MELODY_STEP_MS);
            self.set_all_leds(false);
        }

        self.tone.set_duty_off();
        self.delay.delay_ms(MELODY_TAIL_MS);
    }

    /// All LEDs strobe with the low tone, [`FAIL_REPEATS`] times.
    pub fn play_failure_cue(&mut self) {
        for _ in 0..FAIL_REPEATS {
            self.tone.play(FAIL_NOTE.hz());
            self.set_all_leds(true);
            self.delay.delay_ms(STEP_ON_MS);

            self.tone.set_duty_off();
            self.set_all_leds(false);
            self.delay.delay_ms(STEP_GAP_MS);
        }
    }
}
