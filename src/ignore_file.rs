use std::fs;
use std::path::Path;

use crate::error::Result;

/// Removes every line equal to `entry` from `content`.
///
/// Lines may end in `\n` or `\r\n`; the result is always joined with `\n`.
/// A trailing newline in the input is kept as a trailing `\n`. A `\r` with
/// no `\n` after it is not a line ending and stays part of the last line.
pub fn strip_entry(content: &str, entry: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let last = lines.len() - 1;
    for line in lines[..last].iter_mut() {
        let text = *line;
        if let Some(stripped) = text.strip_suffix('\r') {
            *line = stripped;
        }
    }

    lines
        .into_iter()
        .filter(|line| *line != entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrites the ignore file at `path` without the `entry` lines.
pub fn remove_entry(path: &Path, entry: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;
    fs::write(path, strip_entry(&content, entry))?;
    Ok(())
}
