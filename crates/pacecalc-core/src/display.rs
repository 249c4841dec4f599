//! Derived display values: speed, formatted time/pace, race comparison.
//!
//! All pure. The presentation crates decide where and whether to show
//! these; this module only derives them.

use crate::constants::{RACE_DISTANCES_KM, RACE_DISTANCES_MILE, RACE_NAMES};
use crate::unit::Unit;

/// Speed equivalent of a pace, or `None` for a zero pace.
///
/// Uses the unit's conversion factor over the fractional pace minutes,
/// so a km pace yields mph and a mile pace yields km/h.
#[must_use]
pub fn speed_from_pace(pace_minutes: u32, pace_seconds: u32, unit: Unit) -> Option<f64> {
    let minutes = f64::from(pace_minutes) + f64::from(pace_seconds) / 60.0;
    if minutes > 0.0 {
        Some(unit.speed_factor() / minutes)
    } else {
        None
    }
}

/// Format a time as its non-zero `{H}h {M}m {S}s` components.
///
/// Seconds are shown even when 0 if hours and minutes are both 0, so the
/// output is never empty.
#[must_use]
pub fn format_time(hours: u32, minutes: u32, seconds: u32) -> String {
    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || (hours == 0 && minutes == 0) {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

/// Format a pace as `M:SS`.
#[must_use]
pub fn format_pace(minutes: u32, seconds: u32) -> String {
    format!("{minutes}:{seconds:02}")
}

/// How a computed distance compares to one reference race distance.
#[derive(Debug, Clone, PartialEq)]
pub enum RaceStatus {
    /// Computed distance covers the reference.
    Complete,
    /// Short of the reference by this much (rounded to 1 decimal place).
    Deficit(f64),
}

/// One row of the race comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceComparison {
    pub name: &'static str,
    pub reference: f64,
    pub status: RaceStatus,
}

/// Round to 1 decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Compare a computed distance against the fixed reference races.
#[must_use]
pub fn race_comparison(distance: f64, unit: Unit) -> Vec<RaceComparison> {
    let references = match unit {
        Unit::Km => &RACE_DISTANCES_KM,
        Unit::Mile => &RACE_DISTANCES_MILE,
    };
    RACE_NAMES
        .iter()
        .zip(references.iter())
        .map(|(&name, &reference)| {
            let status = if distance >= reference {
                RaceStatus::Complete
            } else {
                RaceStatus::Deficit(round1(reference - distance))
            };
            RaceComparison {
                name,
                reference,
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_for_five_minute_km_pace() {
        // 5:00/km -> 1.60934 / 5 = 0.321868 per-minute -> displayed as mph
        let speed = speed_from_pace(5, 0, Unit::Km).unwrap();
        assert!((speed - 0.321_868).abs() < 1e-6);
    }

    #[test]
    fn speed_for_mile_pace_uses_unit_factor() {
        let speed = speed_from_pace(8, 0, Unit::Mile).unwrap();
        assert!((speed - 0.125).abs() < 1e-9);
    }

    #[test]
    fn speed_zero_pace_is_none() {
        assert_eq!(speed_from_pace(0, 0, Unit::Km), None);
        assert_eq!(speed_from_pace(0, 0, Unit::Mile), None);
    }

    #[test]
    fn speed_seconds_only_pace_is_some() {
        assert!(speed_from_pace(0, 30, Unit::Km).is_some());
    }

    #[test]
    fn format_time_full() {
        assert_eq!(format_time(1, 56, 3), "1h 56m 3s");
    }

    #[test]
    fn format_time_skips_zero_components() {
        assert_eq!(format_time(2, 0, 5), "2h 5s");
        assert_eq!(format_time(0, 45, 0), "45m");
    }

    #[test]
    fn format_time_never_empty() {
        assert_eq!(format_time(0, 0, 0), "0s");
        assert_eq!(format_time(0, 0, 7), "7s");
    }

    #[test]
    fn format_pace_pads_seconds() {
        assert_eq!(format_pace(5, 0), "5:00");
        assert_eq!(format_pace(5, 30), "5:30");
        assert_eq!(format_pace(12, 5), "12:05");
    }

    #[test]
    fn race_comparison_complete_and_deficit() {
        let rows = race_comparison(10.0, Unit::Km);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].status, RaceStatus::Complete); // 5K
        assert_eq!(rows[1].status, RaceStatus::Complete); // 10K
        assert_eq!(rows[2].status, RaceStatus::Deficit(11.1)); // Half
        assert_eq!(rows[3].status, RaceStatus::Deficit(32.2)); // Full
    }

    #[test]
    fn race_comparison_mile_references() {
        let rows = race_comparison(4.0, Unit::Mile);
        assert_eq!(rows[0].status, RaceStatus::Complete); // 5K (3.11)
        assert_eq!(rows[1].status, RaceStatus::Deficit(2.2)); // 10K (6.21)
    }

    #[test]
    fn race_comparison_deficit_rounded_to_one_place() {
        let rows = race_comparison(20.05, Unit::Km);
        match rows[2].status {
            RaceStatus::Deficit(d) => assert!((d - 1.1).abs() < 1e-9),
            RaceStatus::Complete => panic!("expected deficit"),
        }
    }

    #[test]
    fn race_comparison_exact_reference_is_complete() {
        let rows = race_comparison(21.1, Unit::Km);
        assert_eq!(rows[2].status, RaceStatus::Complete);
    }
}
