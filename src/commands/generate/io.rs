//! I/O operations for scaffold generation (the imperative shell).

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::RunConfig;
use crate::errors::ScaffoldError;
use crate::output::output_json;
use crate::scaffold::Scaffold;

/// I/O: write the document to the configured target.
pub fn write_document(document: &Scaffold, config: &RunConfig) -> Result<()> {
    output_json(document, &config.output, config.style)
}

/// I/O: print the one-line usage hint for a rejected invocation to stdout.
pub fn print_usage_hint(err: &ScaffoldError) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", err.usage_hint()).context("Failed to write usage hint")?;
    handle.flush().context("Failed to flush stdout")
}
