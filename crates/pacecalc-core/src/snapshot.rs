//! Raw input snapshot and the validity gate.
//!
//! Fields are kept as the text the user typed. Parsing is deliberately
//! two-faced: a field that fails to parse contributes 0 to the combined
//! sums, but counts as absent for `has_valid_inputs`. An empty string
//! therefore never gates a result in, even though it sums as 0.

use crate::constants::{SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::mode::{CalcMode, Field};

/// The six raw text inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub distance: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub pace_minutes: String,
    pub pace_seconds: String,
}

fn parse_int(s: &str) -> f64 {
    s.trim().parse::<u32>().map_or(0.0, f64::from)
}

fn present(s: &str) -> bool {
    !s.trim().is_empty()
}

impl InputSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed distance, or 0 when absent, unparseable, or non-finite.
    ///
    /// Rust's float parser accepts "inf" and "NaN"; those count as
    /// unparseable here so they fail the engine's positivity check.
    #[must_use]
    pub fn distance_value(&self) -> f64 {
        self.distance
            .trim()
            .parse::<f64>()
            .map_or(0.0, |v| if v.is_finite() { v } else { 0.0 })
    }

    /// Duration fields combined into total seconds.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        parse_int(&self.hours) * SECS_PER_HOUR
            + parse_int(&self.minutes) * SECS_PER_MINUTE
            + parse_int(&self.seconds)
    }

    /// Pace fields combined into seconds per unit distance.
    #[must_use]
    pub fn pace_seconds_per_unit(&self) -> f64 {
        parse_int(&self.pace_minutes) * SECS_PER_MINUTE + parse_int(&self.pace_seconds)
    }

    /// Whether any duration field is present.
    fn duration_present(&self) -> bool {
        present(&self.hours) || present(&self.minutes) || present(&self.seconds)
    }

    /// Mode-specific validity gate.
    ///
    /// Uses presence (non-empty text), not positivity: "0" passes the gate
    /// but still fails the engine's precondition, so callers must AND this
    /// with the engine's option before showing a result.
    #[must_use]
    pub fn has_valid_inputs(&self, mode: CalcMode) -> bool {
        match mode {
            CalcMode::TimeToPace => present(&self.distance) && self.duration_present(),
            CalcMode::PaceToTime => present(&self.distance) && present(&self.pace_minutes),
            CalcMode::DurationToDistance => {
                self.duration_present() && present(&self.pace_minutes)
            }
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Borrow the text of one field mutably (for form editing).
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Distance => &mut self.distance,
            Field::Hours => &mut self.hours,
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
            Field::PaceMinutes => &mut self.pace_minutes,
            Field::PaceSeconds => &mut self.pace_seconds,
        }
    }

    /// Borrow the text of one field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Hours => &self.hours,
            Field::Minutes => &self.minutes,
            Field::Seconds => &self.seconds,
            Field::PaceMinutes => &self.pace_minutes,
            Field::PaceSeconds => &self.pace_seconds,
        }
    }
}
