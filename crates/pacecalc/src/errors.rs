//! Application-level errors and exit-code mapping.

use pacecalc_core::exit_codes;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unusable flag or argument value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Inputs were accepted but do not yield a result (e.g. zero distance).
    #[error("the given inputs do not produce a result")]
    NoResult,
}

/// Map an error chain to a process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(CliError::NoResult) => exit_codes::ERROR_NO_RESULT,
        None => exit_codes::ERROR_GENERIC,
    }
}
