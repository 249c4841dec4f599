//! Distance units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::KM_PER_MILE;

/// Error returned when a unit name cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("unknown unit '{0}' (expected 'km' or 'mile')")]
pub struct ParseUnitError(String);

/// Distance unit. Applies to both distance and pace denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Km,
    Mile,
}

impl Unit {
    /// Switch to the other unit.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Km => Self::Mile,
            Self::Mile => Self::Km,
        }
    }

    /// Short label for display ("km" / "mile").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Mile => "mile",
        }
    }

    /// Numerator of the pace-to-speed conversion.
    ///
    /// Matches the original behaviour: km paces are converted with the
    /// mile factor and labelled mph, mile paces with 1 and labelled km/h.
    #[must_use]
    pub fn speed_factor(self) -> f64 {
        match self {
            Self::Km => KM_PER_MILE,
            Self::Mile => 1.0,
        }
    }

    /// Label for the speed derived from a pace in this unit.
    #[must_use]
    pub fn speed_label(self) -> &'static str {
        match self {
            Self::Km => "mph",
            Self::Mile => "km/h",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometer" | "kilometre" => Ok(Self::Km),
            "mi" | "mile" | "miles" => Ok(Self::Mile),
            other => Err(ParseUnitError(other.to_string())),
        }
    }
}
