//! Simon Says game logic, independent of the board it runs on.
//!
//! Everything here is written against `embedded-hal` 1.0 pins and delays
//! plus the two small traits in [`hal`], so the same code drives the
//! nRF52840-DK firmware (`src/main.rs`) and the host-based tests.
//!
//! Usage: `cargo test` (host) or `cargo run --release --features embedded`
//! with a probe attached.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs is shared by the binary and the host test suite.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod audio;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod hal;
pub mod input;

#[cfg(test)]
mod testing;

pub use audio::{Note, RecencyStack, ToneArbiter};
pub use console::Console;
pub use error::Error;
pub use game::{Difficulty, GameLoop, GameSession, LevelOutcome, Pattern};
pub use hal::{Clock, ToneOutput};
pub use input::{ButtonChannel, ButtonId, ButtonState, EdgeEvent};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - whole-level flows across modules
// ═══════════════════════════════════════════════════════════════════════════
