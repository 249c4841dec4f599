//! CLI output formatting.

use std::io::{self, Write};

use pacecalc_core::display::{format_pace, format_time, RaceStatus};
use pacecalc_core::{race_comparison, speed_from_pace, CalcResult};

/// Format a result as its primary display line.
#[must_use]
pub fn format_result(result: &CalcResult) -> String {
    match result {
        CalcResult::Pace {
            minutes,
            seconds,
            unit,
        } => format!("{} per {unit}", format_pace(*minutes, *seconds)),
        CalcResult::Time {
            hours,
            minutes,
            seconds,
        } => format_time(*hours, *minutes, *seconds),
        CalcResult::Distance { value, unit } => format!("{value:.2} {unit}"),
    }
}

/// Format a result as its bare value (quiet mode).
#[must_use]
pub fn format_result_bare(result: &CalcResult) -> String {
    match result {
        CalcResult::Pace {
            minutes, seconds, ..
        } => format_pace(*minutes, *seconds),
        CalcResult::Time {
            hours,
            minutes,
            seconds,
        } => format_time(*hours, *minutes, *seconds),
        CalcResult::Distance { value, .. } => format!("{value:.2}"),
    }
}

/// Secondary display lines: the speed equivalent for pace results and the
/// race comparison table for distance results.
#[must_use]
pub fn detail_lines(result: &CalcResult) -> Vec<String> {
    match result {
        CalcResult::Pace {
            minutes,
            seconds,
            unit,
        } => speed_from_pace(*minutes, *seconds, *unit)
            .map(|speed| format!("Speed: {speed:.2} {}", unit.speed_label()))
            .into_iter()
            .collect(),
        CalcResult::Time { .. } => Vec::new(),
        CalcResult::Distance { value, unit } => race_comparison(*value, *unit)
            .iter()
            .map(|row| match row.status {
                RaceStatus::Complete => format!("{:<5} complete", row.name),
                RaceStatus::Deficit(d) => format!("{:<5} -{d:.1} {unit}", row.name),
            })
            .collect(),
    }
}

/// Write a result line to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, line: &str) -> io::Result<()> {
    tracing::debug!(path, "writing result");
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}
