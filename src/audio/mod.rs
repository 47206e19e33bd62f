//! Buzzer audio - note table, per-button tones and the recency arbiter.
//!
//! ## Components
//!
//! - **Note**: the handful of pitches the game uses
//! - **ToneArbiter**: picks the audible tone while buttons are held
//! - **melody**: the fixed victory melody

pub mod arbiter;
pub mod melody;

use crate::input::ButtonId;

pub use arbiter::{RecencyStack, ToneArbiter};

/// Equal-tempered pitches (A4 = 440 Hz), rounded to whole Hz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    D5,
    E5,
    G5,
    A5,
    B5,
}

impl Note {
    pub const fn hz(self) -> u32 {
        match self {
            Note::D5 => 587,
            Note::E5 => 659,
            Note::G5 => 784,
            Note::A5 => 880,
            Note::B5 => 988,
        }
    }
}

/// Fixed tone of each button, highest pitch on button 1.
pub const fn button_note(id: ButtonId) -> Note {
    match id {
        ButtonId::One => Note::A5,
        ButtonId::Two => Note::G5,
        ButtonId::Three => Note::E5,
        ButtonId::Four => Note::D5,
    }
}

/// The failure cue sounds the lowest button's pitch.
pub const FAIL_NOTE: Note = Note::D5;
