//! The target sequence: growing it, playing it back, checking the replay.
//!
//! Capture is a small state machine over the pattern index:
//!
//! ```text
//!   index k --PressEdge(any)---------> index k        (tone follows held buttons)
//!   index k --ReleaseEdge(pattern[k])-> index k+1      (Success once k+1 == len)
//!   index k --ReleaseEdge(other)-----> Failure
//! ```
//!
//! There is no timeout and no way back: one wrong release ends the round.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;
use rand_core::RngCore;

use crate::audio::button_note;
use crate::config::{MAX_PATTERN_LEN, STEP_GAP_MS, STEP_ON_MS};
use crate::console::Console;
use crate::error::Error;
use crate::hal::{Clock, ToneOutput};
use crate::input::{ButtonId, EdgeEvent};

/// Button sequence the player has to repeat.
pub type Pattern = Vec<ButtonId, MAX_PATTERN_LEN>;

/// Append one uniformly random button to `pattern`.
pub fn append_random_step<R: RngCore>(pattern: &mut Pattern, rng: &mut R) -> Result<ButtonId, Error> {
    // 4 divides 2^32, so the modulo is unbiased.
    let id = ButtonId::from_index((rng.next_u32() % 4) as usize);
    pattern.push(id).map_err(|_| Error::PatternFull)?;
    Ok(id)
}

impl<I, O, T, C, D> Console<I, O, T, C, D>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
    T: ToneOutput,
    C: Clock,
    D: DelayNs,
{
    /// Show the pattern one step at a time: LED and tone on, then off, then
    /// a gap. Presses during playback are not seen.
    pub fn playback(&mut self, pattern: &[ButtonId]) {
        for &id in pattern {
            let channel = &mut self.channels[id.index()];
            channel.set_led(true);
            self.tone.play(button_note(id).hz());
            self.delay.delay_ms(STEP_ON_MS);

            self.tone.set_duty_off();
            channel.set_led(false);
            self.delay.delay_ms(STEP_GAP_MS);
        }
    }

    /// Let the player replay `pattern`; `true` when every release matched.
    ///
    /// Polls all four channels back to back without sleeping. Steps are
    /// counted on release, presses only steer the tone. The buzzer is
    /// silent when this returns, whatever the outcome.
    pub fn capture_and_validate(&mut self, pattern: &[ButtonId]) -> bool {
        let mut expected = 0;

        'capture: while expected < pattern.len() {
            let now = self.clock.now_ms();

            for channel in self.channels.iter_mut() {
                match channel.poll_edge(now) {
                    EdgeEvent::None => {}
                    EdgeEvent::PressEdge => self.arbiter.note_held(channel.id()),
                    EdgeEvent::ReleaseEdge if channel.id() == pattern[expected] => {
                        expected += 1;
                        if expected == pattern.len() {
                            break 'capture;
                        }
                    }
                    EdgeEvent::ReleaseEdge => {
                        self.arbiter.silence(&mut self.tone);
                        warn!(
                            "Mismatch at step {}: expected {}, got {}",
                            expected + 1,
                            pattern[expected].number(),
                            channel.id().number()
                        );
                        return false;
                    }
                }
            }

            self.arbiter.resolve_and_play(&mut self.channels, &mut self.tone);
        }

        self.arbiter.silence(&mut self.tone);
        true
    }
}
