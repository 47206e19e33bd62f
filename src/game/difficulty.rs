//! Difficulty selection: the button held at round start sets the max level.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::console::Console;
use crate::error::Error;
use crate::hal::{Clock, ToneOutput};
use crate::input::ButtonId;

/// How many levels a round lasts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

impl Difficulty {
    pub const fn max_level(self) -> u8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 10,
            Difficulty::Hard => 15,
            Difficulty::Expert => 20,
        }
    }

    /// Button 1 is the easiest, button 4 the hardest.
    pub const fn for_button(id: ButtonId) -> Self {
        match id {
            ButtonId::One => Difficulty::Easy,
            ButtonId::Two => Difficulty::Normal,
            ButtonId::Three => Difficulty::Hard,
            ButtonId::Four => Difficulty::Expert,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(max_level: u8) -> Result<Self, Self::Error> {
        match max_level {
            5 => Ok(Difficulty::Easy),
            10 => Ok(Difficulty::Normal),
            15 => Ok(Difficulty::Hard),
            20 => Ok(Difficulty::Expert),
            n => Err(Error::InvalidMaxLevel(n)),
        }
    }
}

impl<I, O, T, C, D> Console<I, O, T, C, D>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
    T: ToneOutput,
    C: Clock,
    D: DelayNs,
{
    /// Read the difficulty selector.
    ///
    /// The highest-numbered held button wins; with nothing held `current`
    /// is kept. Held selector buttons are then waited out so their release
    /// does not count as the first step of the next replay.
    pub fn select_difficulty(&mut self, current: Difficulty) -> Difficulty {
        let held = self.held_buttons();

        let mut selected = current;
        for id in ButtonId::ALL {
            if held[id.index()] {
                selected = Difficulty::for_button(id);
            }
        }

        for id in ButtonId::ALL {
            if held[id.index()] {
                self.wait_for_release(id);
            }
        }

        if selected != current {
            info!("Difficulty: max level {}", selected.max_level());
        }
        selected
    }
}
