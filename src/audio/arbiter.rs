//! "Last pressed wins" tone arbitration across the four buttons.
//!
//! The buzzer can only play one pitch. While several buttons are held the
//! most recently pressed one is heard; when it is let go the tone falls back
//! to the next most recent button that is still down, and full release
//! silences the buzzer.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;

use crate::audio::button_note;
use crate::hal::ToneOutput;
use crate::input::{ButtonChannel, ButtonId};

/// Press order of the buttons, most recent last. Each id appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecencyStack {
    order: Vec<ButtonId, 4>,
}

impl RecencyStack {
    pub const fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Move `id` to the most-recent end, inserting it if absent.
    pub fn promote(&mut self, id: ButtonId) {
        self.order.retain(|&held| held != id);
        if self.order.push(id).is_err() {
            warn!("Recency stack full, button {} dropped", id.number());
        }
    }

    pub fn as_slice(&self) -> &[ButtonId] {
        &self.order
    }

    pub fn most_recent_first(&self) -> impl Iterator<Item = ButtonId> + '_ {
        self.order.iter().rev().copied()
    }
}

/// Resolves which held button the buzzer plays during capture.
#[derive(Debug, Default)]
pub struct ToneArbiter {
    recency: RecencyStack,
    /// What the buzzer is currently playing on our behalf.
    sounding: Option<ButtonId>,
}

impl ToneArbiter {
    pub const fn new() -> Self {
        Self {
            recency: RecencyStack::new(),
            sounding: None,
        }
    }

    pub fn recency(&self) -> &RecencyStack {
        &self.recency
    }

    /// Button currently heard, if any.
    pub fn sounding(&self) -> Option<ButtonId> {
        self.sounding
    }

    /// Record a press: `id` becomes the most recent.
    pub fn note_held(&mut self, id: ButtonId) {
        self.recency.promote(id);
    }

    /// Pick the audible button from the live pin levels and drive the buzzer.
    ///
    /// Returns the button whose tone is now playing. The buzzer is only
    /// written when the result differs from what is already sounding.
    pub fn resolve_and_play<I, O, T>(
        &mut self,
        channels: &mut [ButtonChannel<I, O>; 4],
        tone: &mut T,
    ) -> Option<ButtonId>
    where
        I: InputPin<Error = Infallible>,
        O: OutputPin<Error = Infallible>,
        T: ToneOutput,
    {
        let mut held = [false; 4];
        for channel in channels.iter_mut() {
            held[channel.id().index()] = channel.raw_held();
        }

        let target = if held.iter().any(|&h| h) {
            self.recency.most_recent_first().find(|id| held[id.index()])
        } else {
            None
        };

        if target != self.sounding {
            match target {
                Some(id) => {
                    trace!("Tone: button {}", id.number());
                    tone.play(button_note(id).hz());
                }
                None => tone.set_duty_off(),
            }
            self.sounding = target;
        }
        target
    }

    /// Force the buzzer off, whatever was playing.
    pub fn silence<T: ToneOutput>(&mut self, tone: &mut T) {
        tone.set_duty_off();
        self.sounding = None;
    }
}
