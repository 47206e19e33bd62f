//! Unified error type for the game library.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for on-target logging.
//!
//! Nothing here is a hardware fault: pins are `Infallible` and bounce is
//! absorbed by debouncing. These are value-level conversion failures.

/// Top-level error type used across the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A button number outside `1..=4`.
    InvalidButton(u8),

    /// A max level that is not one of the four difficulties (5/10/15/20).
    InvalidMaxLevel(u8),

    /// The pattern already holds the longest supported sequence.
    PatternFull,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidButton(n) => write!(f, "invalid button number {}", n),
            Error::InvalidMaxLevel(n) => write!(f, "invalid max level {}", n),
            Error::PatternFull => f.write_str("pattern is full"),
        }
    }
}
