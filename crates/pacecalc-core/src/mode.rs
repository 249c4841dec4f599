//! Calculation modes and their field tables.
//!
//! A mode selects which two of {distance, duration, pace} are inputs and
//! which is derived. Each mode carries its required-field and visible-field
//! tables so callers never scatter per-mode conditionals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a mode name cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("unknown mode '{0}' (expected 'time-to-pace', 'pace-to-time', or 'distance')")]
pub struct ParseModeError(String);

/// One of the six input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Hours,
    Minutes,
    Seconds,
    PaceMinutes,
    PaceSeconds,
}

impl Field {
    /// Human-readable label for form rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Hours => "Hours",
            Self::Minutes => "Minutes",
            Self::Seconds => "Seconds",
            Self::PaceMinutes => "Pace minutes",
            Self::PaceSeconds => "Pace seconds",
        }
    }

    /// Whether the field accepts a decimal point.
    #[must_use]
    pub fn is_decimal(self) -> bool {
        matches!(self, Self::Distance)
    }
}

/// Calculation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalcMode {
    /// Distance + finish time -> pace per unit.
    #[default]
    TimeToPace,
    /// Distance + target pace -> finish time.
    PaceToTime,
    /// Duration + pace -> distance covered.
    DurationToDistance,
}

impl CalcMode {
    /// All modes, in selector order.
    pub const ALL: [Self; 3] = [Self::TimeToPace, Self::PaceToTime, Self::DurationToDistance];

    /// Cycle to the next mode in selector order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::TimeToPace => Self::PaceToTime,
            Self::PaceToTime => Self::DurationToDistance,
            Self::DurationToDistance => Self::TimeToPace,
        }
    }

    /// Fields shown on the input form for this mode.
    #[must_use]
    pub fn visible_fields(self) -> &'static [Field] {
        match self {
            Self::TimeToPace => &[
                Field::Distance,
                Field::Hours,
                Field::Minutes,
                Field::Seconds,
            ],
            Self::PaceToTime => &[Field::Distance, Field::PaceMinutes, Field::PaceSeconds],
            Self::DurationToDistance => &[
                Field::Hours,
                Field::Minutes,
                Field::Seconds,
                Field::PaceMinutes,
                Field::PaceSeconds,
            ],
        }
    }

    /// Short description of what to enter, shown under the mode selector.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::TimeToPace => "Enter distance and finish time",
            Self::PaceToTime => "Enter distance and target pace",
            Self::DurationToDistance => "Enter pace and duration",
        }
    }

    /// Label of the derived quantity.
    #[must_use]
    pub fn result_label(self) -> &'static str {
        match self {
            Self::TimeToPace => "Pace required",
            Self::PaceToTime => "Finish time",
            Self::DurationToDistance => "Distance covered",
        }
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TimeToPace => "time-to-pace",
            Self::PaceToTime => "pace-to-time",
            Self::DurationToDistance => "distance",
        };
        f.write_str(name)
    }
}

impl FromStr for CalcMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time-to-pace" | "pace" => Ok(Self::TimeToPace),
            "pace-to-time" | "time" => Ok(Self::PaceToTime),
            "distance" | "pace-to-distance" => Ok(Self::DurationToDistance),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_modes() {
        let mut mode = CalcMode::TimeToPace;
        for expected in [
            CalcMode::PaceToTime,
            CalcMode::DurationToDistance,
            CalcMode::TimeToPace,
        ] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn visible_fields_per_mode() {
        assert!(CalcMode::TimeToPace
            .visible_fields()
            .contains(&Field::Distance));
        assert!(!CalcMode::TimeToPace
            .visible_fields()
            .contains(&Field::PaceMinutes));

        assert!(CalcMode::PaceToTime
            .visible_fields()
            .contains(&Field::PaceMinutes));
        assert!(!CalcMode::PaceToTime.visible_fields().contains(&Field::Hours));

        assert!(!CalcMode::DurationToDistance
            .visible_fields()
            .contains(&Field::Distance));
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!(
            "time-to-pace".parse::<CalcMode>().unwrap(),
            CalcMode::TimeToPace
        );
        assert_eq!(
            "pace-to-time".parse::<CalcMode>().unwrap(),
            CalcMode::PaceToTime
        );
        assert_eq!(
            "distance".parse::<CalcMode>().unwrap(),
            CalcMode::DurationToDistance
        );
    }

    #[test]
    fn parse_mode_aliases() {
        assert_eq!("pace".parse::<CalcMode>().unwrap(), CalcMode::TimeToPace);
        assert_eq!("time".parse::<CalcMode>().unwrap(), CalcMode::PaceToTime);
    }

    #[test]
    fn parse_mode_rejects_unknown() {
        assert!("speed".parse::<CalcMode>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in CalcMode::ALL {
            let parsed: CalcMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn only_distance_field_is_decimal() {
        assert!(Field::Distance.is_decimal());
        assert!(!Field::Hours.is_decimal());
        assert!(!Field::PaceSeconds.is_decimal());
    }
}
