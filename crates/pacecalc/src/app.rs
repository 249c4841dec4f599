//! Application entry point and dispatch.

use anyhow::Result;

use pacecalc_cli::output::{format_result_bare, write_to_file};
use pacecalc_cli::CliResultPresenter;
use pacecalc_core::{compute, CalcMode, InputSnapshot, Unit};

use crate::config::{parse_clock, parse_pace, AppConfig};
use crate::errors::CliError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pacecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.tui {
        return run_tui();
    }

    // CLI mode
    run_cli(config)
}

/// Build the engine inputs from the parsed flags.
fn build_snapshot(config: &AppConfig) -> Result<InputSnapshot, CliError> {
    let mut snapshot = InputSnapshot::new();

    if let Some(ref distance) = config.distance {
        let text = distance.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                snapshot.distance = text.to_string();
            }
            _ => {
                return Err(CliError::Config(format!(
                    "invalid distance '{distance}' (expected a finite number)"
                )));
            }
        }
    }

    if let Some(ref time) = config.time {
        let (hours, minutes, seconds) = parse_clock(time)?;
        snapshot.hours = hours;
        snapshot.minutes = minutes;
        snapshot.seconds = seconds;
    }

    if let Some(ref pace) = config.pace {
        let (pace_minutes, pace_seconds) = parse_pace(pace)?;
        snapshot.pace_minutes = pace_minutes;
        snapshot.pace_seconds = pace_seconds;
    }

    Ok(snapshot)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let mode: CalcMode = config
        .mode
        .parse()
        .map_err(|e| CliError::Config(format!("{e}")))?;
    let unit: Unit = config
        .unit
        .parse()
        .map_err(|e| CliError::Config(format!("{e}")))?;

    let snapshot = build_snapshot(config)?;

    if !snapshot.has_valid_inputs(mode) {
        return Err(CliError::Config(format!(
            "missing inputs for mode '{mode}' ({})",
            mode.description().to_lowercase()
        ))
        .into());
    }

    tracing::debug!(%mode, %unit, "running calculation");

    let Some(result) = compute(mode, &snapshot, unit) else {
        return Err(CliError::NoResult.into());
    };

    if config.verbose && !config.quiet && !config.json {
        pacecalc_cli::ui::print_header("Pace Calculator");
    }

    let presenter = CliResultPresenter::new(config.verbose, config.quiet, config.json);
    presenter.present_result(mode, unit, &result);

    if let Some(ref path) = config.output {
        let line = if config.json {
            serde_json::to_string(&result)?
        } else {
            format_result_bare(&result)
        };
        write_to_file(path, &line)?;
    }

    Ok(())
}

fn run_tui() -> Result<()> {
    let mut app = pacecalc_tui::TuiApp::new();
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))
}
