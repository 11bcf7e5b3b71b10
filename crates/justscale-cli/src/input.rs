//! Interactive input for the root note.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Prompt shown when no root note is given on the command line.
pub const ROOT_NOTE_PROMPT: &str = "Please enter root note (e.g., C, D#, Eb, A): ";

/// Write the prompt to `writer` and read one line from `reader`.
///
/// The returned note is trimmed. End of input before any line is an error.
pub fn prompt_root_note<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{}", ROOT_NOTE_PROMPT).context("Failed to write prompt")?;
    writer.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read root note from stdin")?;
    if read == 0 {
        bail!("no root note given (stdin closed)");
    }

    Ok(line.trim().to_string())
}
