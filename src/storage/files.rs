//! I/O primitives for the docman pipeline

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

/// Positional document argument meaning "read from standard input"
pub const STDIN_SENTINEL: &str = "-";

/// Where the rendered output goes
#[derive(Debug, Clone)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

/// Reads and parses the bibliography JSON tree
pub fn read_bibliography(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bibliography: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Bibliography is not valid JSON: {}", path.display()))
}

/// Reads the whole document into one string; `-` means standard input
pub fn read_document(source: &str) -> Result<String> {
    if source == STDIN_SENTINEL {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read document: {}", source))
    }
}

/// Writes the rendered output to the chosen sink
pub fn write_output(sink: &OutputSink, rendered: &str) -> Result<()> {
    match sink {
        OutputSink::Stdout => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write output to stdout")?;
        }
        OutputSink::File(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
        }
    }
    Ok(())
}
