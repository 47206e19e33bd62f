//! Level and round progression.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use rand_core::RngCore;

use crate::config::{FAIL_LEAD_IN_MS, FAIL_PAUSE_MS, SUCCESS_PAUSE_MS};
use crate::console::Console;
use crate::game::{append_random_step, Difficulty, GameSession, LevelOutcome};
use crate::hal::{Clock, ToneOutput};

/// Owns the console and the session; runs for the life of the device.
pub struct GameLoop<I, O, T, C, D, R> {
    console: Console<I, O, T, C, D>,
    rng: R,
    session: GameSession,
}

impl<I, O, T, C, D, R> GameLoop<I, O, T, C, D, R>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
    T: ToneOutput,
    C: Clock,
    D: DelayNs,
    R: RngCore,
{
    /// Start at level 0 on the default difficulty. The selector is not read
    /// until [`run`](Self::run) or [`select_difficulty`](Self::select_difficulty).
    pub fn new(console: Console<I, O, T, C, D>, rng: R) -> Self {
        Self {
            console,
            rng,
            session: GameSession::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn console(&self) -> &Console<I, O, T, C, D> {
        &self.console
    }

    /// Re-read the difficulty selector into the session.
    pub fn select_difficulty(&mut self) -> Difficulty {
        let difficulty = self.console.select_difficulty(self.session.difficulty());
        self.session.set_difficulty(difficulty);
        difficulty
    }

    /// Grow the pattern by one step, show it, and check the replay.
    pub fn play_level(&mut self) -> LevelOutcome {
        if let Err(e) = append_random_step(self.session.pattern_mut(), &mut self.rng) {
            warn!("Cannot extend pattern: {}", e);
            self.session.reset();
            return LevelOutcome::Failed;
        }

        info!(
            "Level {} of {}",
            self.session.level() + 1,
            self.session.max_level()
        );

        self.console.playback(self.session.pattern());

        if self.console.capture_and_validate(self.session.pattern()) {
            self.console.pause(SUCCESS_PAUSE_MS);
            let outcome = self.session.complete_level();
            if outcome == LevelOutcome::Won {
                info!("Round won at level {}", self.session.level());
                self.console.play_victory();
                self.session.reset();
            }
            outcome
        } else {
            warn!("Round lost at level {}", self.session.level() + 1);
            self.console.pause(FAIL_LEAD_IN_MS);
            self.console.play_failure_cue();
            self.console.pause(FAIL_PAUSE_MS);
            self.session.reset();
            self.select_difficulty();
            LevelOutcome::Failed
        }
    }

    /// Read the selector once, then play levels forever.
    pub fn run(mut self) -> ! {
        info!("Simon says: hold 1-4 at power-on to pick 5/10/15/20 levels");
        self.select_difficulty();
        loop {
            self.play_level();
        }
    }
}
