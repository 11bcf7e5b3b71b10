//! Keys command implementation
//!
//! Lists every root note spelling the resolver accepts.

use anyhow::Result;
use colored::Colorize;
use justscale_tuning::note::REFERENCE_FREQUENCIES;
use justscale_tuning::valid_keys;
use std::process::ExitCode;

use super::json_output::{JsonOutput, KeyEntry, KeysResult};

/// Run the keys command.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = key_entries();

    if json_output {
        let output = JsonOutput::success(KeysResult { keys: entries });
        println!("{}", output.to_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Valid root notes (A4 = 440 Hz):".cyan().bold());
    for entry in &entries {
        println!("  {:<3} {}", entry.key, format!("{:.2} Hz", entry.hz).dimmed());
    }
    Ok(ExitCode::SUCCESS)
}

/// Accepted keys in sorted order with their reference frequency.
pub fn key_entries() -> Vec<KeyEntry> {
    valid_keys()
        .into_iter()
        .filter_map(|key| {
            REFERENCE_FREQUENCIES
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(k, hz)| KeyEntry {
                    key: (*k).to_string(),
                    hz: *hz,
                })
        })
        .collect()
}
