//! Scale command implementation
//!
//! Resolves a root note, builds its just-intonation scale and prints every
//! audible octave of it.

use anyhow::Result;
use colored::Colorize;
use justscale_tuning::{ExpandOptions, ScaleReport, TuningError};
use std::io;
use std::process::ExitCode;
use tracing::debug;

use super::json_output::{error_codes, JsonError, JsonOutput, ScaleResult};
use super::options::{format_frequencies, ExpandArgs, DISPLAY_PRECISION};
use crate::input::prompt_root_note;

/// Run the scale command.
///
/// # Arguments
/// * `note` - Root note; prompts on stdin when `None`
/// * `args` - Expansion flags
/// * `json_output` - Emit a JSON document instead of text
pub fn run(note: Option<&str>, args: ExpandArgs, json_output: bool) -> Result<ExitCode> {
    let note = match note {
        Some(note) => note.to_string(),
        None => match prompt(json_output) {
            Ok(note) => note,
            Err(e) if json_output => {
                let error = JsonError::new(error_codes::INPUT_READ, format!("{:#}", e));
                println!("{}", JsonOutput::<ScaleResult>::failure(vec![error]).to_json()?);
                return Ok(ExitCode::from(1));
            }
            Err(e) => return Err(e),
        },
    };

    let options = ExpandOptions::from(args);
    debug!(note = %note, ?options, "building scale");

    if json_output {
        run_json(&note, &options)
    } else {
        run_human(&note, &options)
    }
}

/// Ask for the root note. In JSON mode the prompt goes to stderr so stdout
/// holds only the JSON document.
fn prompt(json_output: bool) -> Result<String> {
    let mut stdin = io::stdin().lock();
    if json_output {
        prompt_root_note(&mut stdin, &mut io::stderr())
    } else {
        prompt_root_note(&mut stdin, &mut io::stdout())
    }
}

/// Run scale with human-readable (colored) output
fn run_human(note: &str, options: &ExpandOptions) -> Result<ExitCode> {
    match ScaleReport::build(note, options) {
        Ok(report) => {
            println!("{}", render_text(&report));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_tuning_error(&e);
            Ok(ExitCode::from(1))
        }
    }
}

/// Run scale with machine-readable JSON output
fn run_json(note: &str, options: &ExpandOptions) -> Result<ExitCode> {
    let (output, code) = match ScaleReport::build(note, options) {
        Ok(report) => (
            JsonOutput::success(to_result(&report)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            JsonOutput::failure(vec![JsonError::from(&e)]),
            ExitCode::from(1),
        ),
    };

    println!("{}", output.to_json()?);
    Ok(code)
}

/// The one-line summary printed on success.
pub fn render_text(report: &ScaleReport) -> String {
    format!(
        "{} {} ({} notes)",
        "Audible notes:".green().bold(),
        format_frequencies(&report.rounded_audible(DISPLAY_PRECISION)),
        report.count()
    )
}

pub(crate) fn print_tuning_error(err: &TuningError) {
    eprintln!("{}: {}", "error".red(), err);
}

fn to_result(report: &ScaleReport) -> ScaleResult {
    ScaleResult {
        root: report.root.clone(),
        key: report.key.clone(),
        tonic_hz: report.tonic_hz,
        scale: report.scale.clone(),
        cent_deviation: report.options.cent_deviation,
        audible: report.rounded_audible(DISPLAY_PRECISION),
        count: report.count(),
    }
}
