//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::output::Output;
use crate::domain::{render_document, resolve_markers, Bibliography};
use crate::resolver::HttpResolver;
use crate::storage::{self, OutputSink};

#[derive(Parser)]
#[command(name = "docman")]
#[command(author, version, about = "Assemble documents with resolved citation references")]
pub struct Cli {
    /// Bibliography JSON file containing citation records
    #[arg(short = 'c', value_name = "BIBLIOGRAPHY")]
    pub citations: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Document to process, or '-' to read from stdin
    #[arg(value_name = "DOCUMENT")]
    pub document: String,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("docman starting");

    let tree = storage::read_bibliography(&cli.citations)?;
    output.verbose_ctx("load", &format!("Parsed bibliography: {}", cli.citations.display()));

    let resolver = HttpResolver::from_env();
    let bibliography = Bibliography::from_value(&tree, &resolver)?;
    output.verbose_ctx("build", &format!("Found {} citation record(s)", bibliography.len()));

    let document = storage::read_document(&cli.document)?;
    let resolved = resolve_markers(&document, &bibliography)?;
    output.verbose_ctx("match", &format!("Resolved {} citation(s)", resolved.len()));

    let rendered = render_document(&document, &resolved);

    let sink = match cli.output {
        Some(path) => OutputSink::File(path),
        None => OutputSink::Stdout,
    };
    storage::write_output(&sink, &rendered)?;
    output.verbose("Done");

    Ok(())
}
