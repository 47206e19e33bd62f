//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters and tone settings live here so they can be
//! tuned in one place.

// Input

/// Button debounce window (ms). No second edge is reported on a channel
/// until this much time has passed since the previous one.
pub const BUTTON_DEBOUNCE_MS: u64 = 25;

// Pattern playback

/// How long each pattern step keeps its LED lit and its tone sounding (ms).
pub const STEP_ON_MS: u32 = 450;

/// Silent gap after each pattern step (ms).
pub const STEP_GAP_MS: u32 = 300;

// Round feedback

/// Pause after a correct replay before the next level starts (ms).
pub const SUCCESS_PAUSE_MS: u32 = 1500;

/// Pause between a wrong release and the failure cue (ms).
pub const FAIL_LEAD_IN_MS: u32 = 500;

/// Pause after the failure cue, before difficulty is re-read (ms).
pub const FAIL_PAUSE_MS: u32 = 1500;

/// Number of all-LED strobes in the failure cue.
pub const FAIL_REPEATS: usize = 4;

/// Duration of one note (or rest) in the victory melody (ms).
pub const MELODY_STEP_MS: u32 = 300;

/// Silence held after the victory melody before the next round (ms).
pub const MELODY_TAIL_MS: u32 = 2000;

// Difficulty

/// Longest possible pattern (the Expert difficulty).
pub const MAX_PATTERN_LEN: usize = 20;

// Buzzer

/// Buzzer duty while a tone sounds, out of `u16::MAX` (~7.6%).
pub const BUZZER_DUTY_U16: u16 = 5000;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` are
// picked in `main.rs`. Adjust for a custom PCB.
//
//   Button 1 → P0.11    LED 1 → P0.13
//   Button 2 → P0.12    LED 2 → P0.14
//   Button 3 → P0.24    LED 3 → P0.15
//   Button 4 → P0.25    LED 4 → P0.16
//   Buzzer   → P0.03 (PWM0 channel 0)
//
// Buttons are active-low with internal pull-ups. The DK LEDs are
// active-low as well; `board::ActiveLow` hides that from the game.
