//! Application configuration from CLI flags and environment.

use clap::Parser;

use crate::errors::CliError;
use crate::version::full_version;

/// pacecalc — running pace calculator.
#[derive(Parser, Debug)]
#[command(name = "pacecalc", version = full_version(), about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Calculation mode: time-to-pace, pace-to-time, or distance.
    #[arg(short, long, default_value = "time-to-pace")]
    pub mode: String,

    /// Distance in the selected unit (e.g. "10" or "21.1").
    #[arg(short, long)]
    pub distance: Option<String>,

    /// Duration as a clock string: "SS", "MM:SS", or "HH:MM:SS".
    #[arg(short, long)]
    pub time: Option<String>,

    /// Pace per unit distance: "M" or "M:SS".
    #[arg(short, long)]
    pub pace: Option<String>,

    /// Distance unit: km or mile.
    #[arg(short, long, default_value = "km", env = "PACECALC_UNIT")]
    pub unit: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

fn digits_part(part: &str, what: &str) -> Result<String, CliError> {
    if !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) {
        Ok(part.to_string())
    } else {
        Err(CliError::Config(format!(
            "invalid {what} component '{part}' (expected digits)"
        )))
    }
}

/// Parse a clock string into (hours, minutes, seconds) field texts.
///
/// Accepts "SS", "MM:SS", or "HH:MM:SS". Components are kept as the text
/// given, so "50:00" yields minutes "50" and seconds "00" — both present
/// for the validity gate.
pub fn parse_clock(s: &str) -> Result<(String, String, String), CliError> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    match parts.as_slice() {
        [secs] => Ok((String::new(), String::new(), digits_part(secs, "time")?)),
        [mins, secs] => Ok((
            String::new(),
            digits_part(mins, "time")?,
            digits_part(secs, "time")?,
        )),
        [hours, mins, secs] => Ok((
            digits_part(hours, "time")?,
            digits_part(mins, "time")?,
            digits_part(secs, "time")?,
        )),
        _ => Err(CliError::Config(format!(
            "invalid time '{s}' (expected SS, MM:SS, or HH:MM:SS)"
        ))),
    }
}

/// Parse a pace string into (minutes, seconds) field texts.
///
/// Accepts "M" or "M:SS".
pub fn parse_pace(s: &str) -> Result<(String, String), CliError> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    match parts.as_slice() {
        [mins] => Ok((digits_part(mins, "pace")?, String::new())),
        [mins, secs] => Ok((digits_part(mins, "pace")?, digits_part(secs, "pace")?)),
        _ => Err(CliError::Config(format!(
            "invalid pace '{s}' (expected M or M:SS)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clock_formats() {
        assert_eq!(
            parse_clock("45").unwrap(),
            (String::new(), String::new(), "45".into())
        );
        assert_eq!(
            parse_clock("50:00").unwrap(),
            (String::new(), "50".into(), "00".into())
        );
        assert_eq!(
            parse_clock("1:30:15").unwrap(),
            ("1".into(), "30".into(), "15".into())
        );
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert!(parse_clock("abc").is_err());
        assert!(parse_clock("1:2:3:4").is_err());
        assert!(parse_clock("5:").is_err());
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn parse_pace_formats() {
        assert_eq!(parse_pace("5").unwrap(), ("5".into(), String::new()));
        assert_eq!(parse_pace("5:30").unwrap(), ("5".into(), "30".into()));
    }

    #[test]
    fn parse_pace_rejects_garbage() {
        assert!(parse_pace("fast").is_err());
        assert!(parse_pace("5:30:00").is_err());
        assert!(parse_pace(":30").is_err());
    }

    #[test]
    fn parse_clock_trims_whitespace() {
        assert_eq!(
            parse_clock(" 50:00 ").unwrap(),
            (String::new(), "50".into(), "00".into())
        );
    }
}
