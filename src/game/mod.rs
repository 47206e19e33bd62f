//! Game rules - pattern growth, replay checking, levels and rounds.
//!
//! A *round* runs from difficulty selection until the player either
//! reaches the max level (victory melody) or gets a step wrong (failure
//! cue). Each level adds one random step to the pattern.

pub mod difficulty;
pub mod feedback;
pub mod game_loop;
pub mod pattern;

use crate::input::ButtonId;

pub use difficulty::Difficulty;
pub use game_loop::GameLoop;
pub use pattern::{append_random_step, Pattern};

/// What a single level ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LevelOutcome {
    /// Replay correct, more levels to go.
    Advanced,
    /// Replay correct and the max level was reached.
    Won,
    /// Wrong release; the round is over.
    Failed,
}

/// Progress through the current round. `level` never exceeds the max level.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    level: u8,
    difficulty: Difficulty,
    pattern: Pattern,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            level: 0,
            difficulty,
            pattern: Pattern::new(),
        }
    }

    /// Levels completed in this round.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_level(&self) -> u8 {
        self.difficulty.max_level()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn pattern(&self) -> &[ButtonId] {
        &self.pattern
    }

    pub(crate) fn pattern_mut(&mut self) -> &mut Pattern {
        &mut self.pattern
    }

    /// Change difficulty. Lowering it below the current level ends the round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.level > self.max_level() {
            self.reset();
        }
    }

    /// Count a completed level.
    pub fn complete_level(&mut self) -> LevelOutcome {
        self.level = (self.level + 1).min(self.max_level());
        if self.level == self.max_level() {
            LevelOutcome::Won
        } else {
            LevelOutcome::Advanced
        }
    }

    /// Start over at level 0 with an empty pattern; difficulty is kept.
    pub fn reset(&mut self) {
        self.level = 0;
        self.pattern.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completing_max_level_wins() {
        let mut session = GameSession::new(Difficulty::Easy);
        for _ in 0..4 {
            assert_eq!(session.complete_level(), LevelOutcome::Advanced);
        }
        assert_eq!(session.complete_level(), LevelOutcome::Won);
        assert_eq!(session.level(), 5);

        session.reset();
        assert_eq!(session.level(), 0);
        assert!(session.pattern().is_empty());
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn level_never_exceeds_max() {
        let mut session = GameSession::new(Difficulty::Easy);
        for _ in 0..10 {
            session.complete_level();
        }
        assert_eq!(session.level(), 5);
    }

    #[test]
    fn lowering_difficulty_below_level_resets() {
        let mut session = GameSession::new(Difficulty::Expert);
        for _ in 0..7 {
            session.complete_level();
        }
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.level(), 7);
        session.set_difficulty(Difficulty::Easy);
        assert_eq!(session.level(), 0);
    }

    #[test]
    fn default_session_is_normal_and_empty() {
        let session = GameSession::default();
        assert_eq!(session.max_level(), 10);
        assert_eq!(session.level(), 0);
        assert!(session.pattern().is_empty());
    }
}
