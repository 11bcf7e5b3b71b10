//! justscale CLI - just-intonation scales across the audible range
//!
//! This binary resolves a root note, builds its just-intonation major scale
//! and prints every audible octave of it with near-duplicates removed.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use justscale_cli::commands;
use justscale_cli::commands::options::ExpandArgs;

/// justscale - Just-intonation frequency sets
#[derive(Parser)]
#[command(name = "justscale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the audible just-intonation frequencies for a root note
    Scale {
        /// Root note (e.g. C, D#, Eb, A); prompts on stdin when omitted
        note: Option<String>,

        #[command(flatten)]
        expand: ExpandArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Expand explicit frequencies across the audible range
    Expand {
        /// Frequencies in Hz
        #[arg(required = true, allow_negative_numbers = true)]
        freqs: Vec<f64>,

        #[command(flatten)]
        expand: ExpandArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the accepted root note spellings
    Keys {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    justscale_cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Scale { note, expand, json } => {
            commands::scale::run(note.as_deref(), expand, json)
        }
        Commands::Expand {
            freqs,
            expand,
            json,
        } => commands::expand::run(&freqs, expand, json),
        Commands::Keys { json } => commands::keys::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
