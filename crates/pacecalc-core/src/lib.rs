//! # pacecalc-core
//!
//! Pure computation for the running pace calculator: calculation modes,
//! units, the raw input snapshot with its validity gate, the pace engine,
//! and the derived display values. No I/O lives here.

pub mod constants;
pub mod display;
pub mod engine;
pub mod mode;
pub mod snapshot;
pub mod unit;

// Re-exports
pub use constants::exit_codes;
pub use display::{race_comparison, speed_from_pace, RaceComparison, RaceStatus};
pub use engine::{compute, compute_result, CalcResult};
pub use mode::{CalcMode, Field, ParseModeError};
pub use snapshot::InputSnapshot;
pub use unit::{ParseUnitError, Unit};

/// Derive the pace for a distance covered in a given time.
///
/// Convenience wrapper for simple use cases; the full engine entry point
/// is [`compute_result`].
///
/// # Example
/// ```
/// let (minutes, seconds) = pacecalc_core::pace_for(10.0, 3000.0).unwrap();
/// assert_eq!((minutes, seconds), (5, 0));
/// ```
#[must_use]
pub fn pace_for(distance: f64, total_seconds: f64) -> Option<(u32, u32)> {
    match compute_result(
        CalcMode::TimeToPace,
        distance,
        total_seconds,
        0.0,
        Unit::Km,
    ) {
        Some(CalcResult::Pace {
            minutes, seconds, ..
        }) => Some((minutes, seconds)),
        _ => None,
    }
}
