//! File, stdin, and stdout wrappers
//!
//! Thin I/O boundary around the core pipeline: read the bibliography tree,
//! read the document text, write the rendered output. All failures surface
//! as `anyhow` errors with the offending path attached.

mod files;

pub use files::{read_bibliography, read_document, write_output, OutputSink, STDIN_SENTINEL};
