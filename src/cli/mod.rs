//! # Command-Line Interface
//!
//! `docman -c <bibliography.json> [-o <output>] <document|->`
//!
//! - `-c` names the bibliography JSON file.
//! - `-o` routes the rendered output to a file; omitted means stdout.
//! - The positional argument is the document path, or `-` for stdin.
//! - `--verbose` prints pipeline progress to stderr.
//!
//! Call [`run()`] to parse arguments and execute the pipeline.

mod app;
mod output;

pub use app::{run, Cli};
pub use output::Output;
