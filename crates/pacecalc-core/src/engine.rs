//! The pace engine: pure mapping from (mode, inputs) to an optional result.
//!
//! A failed precondition yields `None`, not an error. "No result yet" is a
//! normal state for the caller, so nothing here returns `Result`.

use serde::{Deserialize, Serialize};

use crate::constants::{SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::mode::CalcMode;
use crate::snapshot::InputSnapshot;
use crate::unit::Unit;

/// A derived value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalcResult {
    /// Pace per unit distance.
    Pace { minutes: u32, seconds: u32, unit: Unit },
    /// Total running time.
    Time { hours: u32, minutes: u32, seconds: u32 },
    /// Distance covered, rounded to 2 decimal places.
    Distance { value: f64, unit: Unit },
}

/// Round to 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Split a seconds count into floored minutes and a rounded remainder,
/// carrying a rounded-up 60 into the minute component.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_minutes(total_seconds: f64) -> (u32, u32) {
    let mut minutes = (total_seconds / SECS_PER_MINUTE).floor() as u32;
    let mut seconds = (total_seconds % SECS_PER_MINUTE).round() as u32;
    if seconds == 60 {
        seconds = 0;
        minutes += 1;
    }
    (minutes, seconds)
}

/// Compute the derived value for the given mode.
///
/// `distance` is in `unit`s, `total_seconds` is the combined duration,
/// `pace_seconds` is seconds per unit distance. Returns `None` whenever
/// the mode's precondition fails (any required value missing or zero).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_result(
    mode: CalcMode,
    distance: f64,
    total_seconds: f64,
    pace_seconds: f64,
    unit: Unit,
) -> Option<CalcResult> {
    match mode {
        CalcMode::TimeToPace => {
            if distance > 0.0 && total_seconds > 0.0 {
                let pace = total_seconds / distance;
                let (minutes, seconds) = split_minutes(pace);
                tracing::debug!(mode = %mode, pace, "derived pace");
                Some(CalcResult::Pace {
                    minutes,
                    seconds,
                    unit,
                })
            } else {
                None
            }
        }
        CalcMode::PaceToTime => {
            if distance > 0.0 && pace_seconds > 0.0 {
                let total = distance * pace_seconds;
                let hours = (total / SECS_PER_HOUR).floor() as u32;
                let (mut minutes, seconds) = split_minutes(total % SECS_PER_HOUR);
                let hours = if minutes == 60 {
                    minutes = 0;
                    hours + 1
                } else {
                    hours
                };
                tracing::debug!(mode = %mode, total, "derived time");
                Some(CalcResult::Time {
                    hours,
                    minutes,
                    seconds,
                })
            } else {
                None
            }
        }
        CalcMode::DurationToDistance => {
            if total_seconds > 0.0 && pace_seconds > 0.0 {
                let value = round2(total_seconds / pace_seconds);
                tracing::debug!(mode = %mode, value, "derived distance");
                Some(CalcResult::Distance { value, unit })
            } else {
                None
            }
        }
    }
}

/// Compute the derived value for a raw input snapshot.
///
/// Combines the snapshot's parse-or-zero sums and dispatches to
/// [`compute_result`]. Does NOT apply the validity gate; callers that
/// render a result panel must AND this with
/// [`InputSnapshot::has_valid_inputs`].
#[must_use]
pub fn compute(mode: CalcMode, snapshot: &InputSnapshot, unit: Unit) -> Option<CalcResult> {
    compute_result(
        mode,
        snapshot.distance_value(),
        snapshot.total_seconds(),
        snapshot.pace_seconds_per_unit(),
        unit,
    )
}
