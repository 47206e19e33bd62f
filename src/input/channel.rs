//! One debounced game button and its LED.
//!
//! The channel samples its pin on every poll and compares the sample with
//! the *debounced* state. A differing sample is reported as an edge and
//! opens a debounce window; until that window expires no further edge is
//! reported, however much the contact bounces. The window is a stored
//! deadline checked against the caller's clock, so there is no timer
//! callback and no state shared with interrupt context.
//!
//! The LED follows the raw pin level on every sample, debounced or not,
//! so the player gets immediate feedback.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::hal;
use crate::input::{ButtonId, ButtonState, EdgeEvent};

/// A debounced button bound to its LED.
pub struct ButtonChannel<I, O> {
    id: ButtonId,
    pin: I,
    led: O,
    state: ButtonState,
    /// Edges are suppressed while `now < debounce_until`.
    debounce_until: Option<u64>,
}

impl<I, O> ButtonChannel<I, O>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
{
    /// Bind a pull-up input and an LED output to `id`.
    ///
    /// The initial debounced state is whatever the pin reads right now, so a
    /// button held through power-on does not produce a press edge.
    pub fn new(id: ButtonId, mut pin: I, mut led: O) -> Self {
        let held = hal::is_held(&mut pin);
        hal::drive(&mut led, held);
        Self {
            id,
            pin,
            led,
            state: ButtonState::from_held(held),
            debounce_until: None,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Current debounced state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Read the pin now, bypassing the debouncer. Mirrors the LED.
    pub fn raw_held(&mut self) -> bool {
        self.sample()
    }

    /// `true` when the debounced state is Released and no window is open.
    ///
    /// Only meaningful right after a poll, which is what expires windows.
    pub fn is_idle(&self) -> bool {
        self.state == ButtonState::Released && self.debounce_until.is_none()
    }

    /// Light or clear this button's LED (playback and feedback phases).
    pub fn set_led(&mut self, on: bool) {
        hal::drive(&mut self.led, on);
    }

    /// Sample the pin and report a settled transition, if any.
    pub fn poll_edge(&mut self, now_ms: u64) -> EdgeEvent {
        let held = self.sample();

        if self.window_open(now_ms) {
            return EdgeEvent::None;
        }

        let sampled = ButtonState::from_held(held);
        if sampled == self.state {
            return EdgeEvent::None;
        }

        self.state = sampled;
        self.debounce_until = Some(now_ms + BUTTON_DEBOUNCE_MS);

        match sampled {
            ButtonState::Held => {
                debug!("Button {}: pressed", self.id.number());
                EdgeEvent::PressEdge
            }
            ButtonState::Released => {
                debug!("Button {}: released", self.id.number());
                EdgeEvent::ReleaseEdge
            }
        }
    }

    /// Release-only variant of [`poll_edge`](Self::poll_edge).
    ///
    /// Press edges still update the debounced state and open a window; they
    /// are just not reported.
    pub fn poll_release(&mut self, now_ms: u64) -> bool {
        self.poll_edge(now_ms) == EdgeEvent::ReleaseEdge
    }

    fn sample(&mut self) -> bool {
        let held = hal::is_held(&mut self.pin);
        hal::drive(&mut self.led, held);
        held
    }

    /// Expires the window once its deadline has passed. Safe to call any
    /// number of times.
    fn window_open(&mut self, now_ms: u64) -> bool {
        match self.debounce_until {
            Some(deadline) if now_ms < deadline => true,
            Some(_) => {
                self.debounce_until = None;
                false
            }
            None => false,
        }
    }
}
