//! Button input - identities, logical states and debounced edges.
//!
//! ## Components
//!
//! - **ButtonId**: which of the four game buttons
//! - **ButtonChannel**: one debounced button with its LED (see [`channel`])

pub mod channel;

use crate::error::Error;

pub use channel::ButtonChannel;

/// One of the four game buttons, numbered 1..=4 on the enclosure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    One,
    Two,
    Three,
    Four,
}

impl ButtonId {
    /// All buttons in polling order.
    pub const ALL: [ButtonId; 4] = [ButtonId::One, ButtonId::Two, ButtonId::Three, ButtonId::Four];

    /// Zero-based slot, used to index channel and LED arrays.
    pub const fn index(self) -> usize {
        match self {
            ButtonId::One => 0,
            ButtonId::Two => 1,
            ButtonId::Three => 2,
            ButtonId::Four => 3,
        }
    }

    /// Button number as printed on the enclosure (1..=4).
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`ButtonId::index`]; slots wrap modulo 4.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

impl TryFrom<u8> for ButtonId {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(ButtonId::One),
            2 => Ok(ButtonId::Two),
            3 => Ok(ButtonId::Three),
            4 => Ok(ButtonId::Four),
            n => Err(Error::InvalidButton(n)),
        }
    }
}

/// Logical (debounced) button state, distinct from the raw pin level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    #[default]
    Released,
    Held,
}

impl ButtonState {
    pub const fn from_held(held: bool) -> Self {
        if held {
            ButtonState::Held
        } else {
            ButtonState::Released
        }
    }

    pub const fn is_held(self) -> bool {
        matches!(self, ButtonState::Held)
    }
}

/// Result of one poll: a settled transition, or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeEvent {
    None,
    PressEdge,
    ReleaseEdge,
}
