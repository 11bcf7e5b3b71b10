//! Expand command implementation
//!
//! Runs only the octave expansion on explicit frequencies.

use anyhow::Result;
use colored::Colorize;
use justscale_tuning::pipeline::round_to;
use justscale_tuning::{expand_to_audible, ExpandOptions};
use std::process::ExitCode;

use super::json_output::{ExpandResult, JsonError, JsonOutput};
use super::options::{format_frequencies, ExpandArgs, DISPLAY_PRECISION};
use super::scale::print_tuning_error;

/// Run the expand command.
pub fn run(freqs: &[f64], args: ExpandArgs, json_output: bool) -> Result<ExitCode> {
    let options = ExpandOptions::from(args);
    let expanded = expand_to_audible(freqs, &options);

    if json_output {
        let (output, code) = match expanded {
            Ok(audible) => (
                JsonOutput::success(ExpandResult {
                    inputs: freqs.to_vec(),
                    cent_deviation: options.cent_deviation,
                    count: audible.len(),
                    audible: rounded(&audible),
                }),
                ExitCode::SUCCESS,
            ),
            Err(e) => (
                JsonOutput::failure(vec![JsonError::from(&e)]),
                ExitCode::from(1),
            ),
        };
        println!("{}", output.to_json()?);
        return Ok(code);
    }

    match expanded {
        Ok(audible) => {
            println!(
                "{} {} ({} notes)",
                "Audible notes:".green().bold(),
                format_frequencies(&rounded(&audible)),
                audible.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_tuning_error(&e);
            Ok(ExitCode::from(1))
        }
    }
}

fn rounded(freqs: &[f64]) -> Vec<f64> {
    freqs.iter().map(|f| round_to(*f, DISPLAY_PRECISION)).collect()
}
