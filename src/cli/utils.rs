//! Input and output plumbing shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path value meaning "standard stream" on the command line.
const STD_STREAM: &str = "-";

fn is_std_stream(path: &Path) -> bool {
    path.as_os_str() == STD_STREAM
}

/// Inline `--text` wins; otherwise read `--from`, defaulting to stdin.
pub fn read_text_arg(text: Option<String>, from: Option<PathBuf>) -> Result<String> {
    match (text, from) {
        (Some(t), _) => Ok(t),
        (None, Some(path)) => read_source(&path),
        (None, None) => read_source(Path::new(STD_STREAM)),
    }
}

/// Read a message source in full; `-` is stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if !is_std_stream(path) {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Emit rendered results to a file, or stdout for `-`.
pub fn write_sink(path: &Path, content: &str) -> Result<()> {
    if !is_std_stream(path) {
        return fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()));
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}

/// Drop one trailing line terminator (`\n` or `\r\n`).
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}
