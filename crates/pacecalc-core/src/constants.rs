//! Constants for unit conversion and the race comparison table.

/// Kilometres per statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Seconds per minute.
pub const SECS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour.
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Display names of the reference race distances.
pub const RACE_NAMES: [&str; 4] = ["5K", "10K", "Half", "Full"];

/// Reference race distances in kilometres.
pub const RACE_DISTANCES_KM: [f64; 4] = [5.0, 10.0, 21.1, 42.2];

/// Reference race distances in miles.
///
/// Canonical table: 3.11 and 6.21 are used uniformly (the original hint
/// text also carried 3.1/6.2 variants, which are not used).
pub const RACE_DISTANCES_MILE: [f64; 4] = [3.11, 6.21, 13.1, 26.2];

/// Exit codes for the CLI front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Inputs parsed but did not produce a result.
    pub const ERROR_NO_RESULT: i32 = 2;
    /// Invalid configuration (mode, unit, or time/pace format).
    pub const ERROR_CONFIG: i32 = 4;
}
