use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;

use crate::config::{JsonStyle, OutputTarget};

/// Pure: render a document as JSON text.
///
/// serde_json writes non-ASCII characters literally and pretty-prints with a
/// two-space indent.
pub fn format_json<T: Serialize>(document: &T, style: JsonStyle) -> Result<String> {
    match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(document),
        JsonStyle::Compact => serde_json::to_string(document),
    }
    .context("Failed to serialize scaffold document")
}

/// I/O: write a document to stdout or to a file.
pub fn output_json<T: Serialize>(
    document: &T,
    target: &OutputTarget,
    style: JsonStyle,
) -> Result<()> {
    let json = format_json(document, style)?;
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{json}").context("Failed to write scaffold to stdout")?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{json}")
                .with_context(|| format!("Failed to write scaffold to: {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote scaffold");
        }
    }
    Ok(())
}
