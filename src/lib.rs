//! docman - A document-citation assembler
//!
//! docman loads a bibliography of heterogeneous reference records from a
//! JSON file, scans a plain-text document for inline `[id]` citation
//! markers, resolves each marker against the bibliography, and emits the
//! document followed by a formatted reference list.

pub mod domain;
pub mod resolver;
pub mod storage;
pub mod cli;

pub use domain::{Bibliography, Citation};
pub use resolver::{BookMeta, MetadataResolver, ResolveError};
