//! CLI result presenter.

use pacecalc_core::{CalcMode, CalcResult, Unit};

use crate::output::{detail_lines, format_result, format_result_bare};
use crate::ui::{print_detail, print_result_line};

/// Presents engine results on stdout.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    /// Print a result.
    ///
    /// Quiet mode prints only the bare value; JSON mode prints the tagged
    /// serde encoding; otherwise the labelled line plus detail lines, and
    /// with `--verbose` the mode description as well.
    pub fn present_result(&self, mode: CalcMode, unit: Unit, result: &CalcResult) {
        if self.json {
            match serde_json::to_string(result) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("Error: failed to encode result: {err}"),
            }
            return;
        }

        if self.quiet {
            println!("{}", format_result_bare(result));
            return;
        }

        if self.verbose {
            println!("Mode: {mode}");
            println!("Unit: {unit}");
        }

        print_result_line(mode.result_label(), &format_result(result));
        for line in detail_lines(result) {
            print_detail(&line);
        }
    }
}
