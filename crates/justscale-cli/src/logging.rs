//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr so that stdout stays clean for results and
//! `--json` documents.

use tracing::Level;

/// Install the global fmt subscriber.
///
/// Verbose mode logs at DEBUG, otherwise only warnings are shown. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
