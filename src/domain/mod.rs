//! Domain models for docman
//!
//! Contains the core citation pipeline without any I/O concerns.

mod citation;
mod bibliography;
mod marker;
mod render;

pub use citation::{Citation, CitationError};
pub use bibliography::{Bibliography, BuildError};
pub use marker::{extract_marker_ids, resolve_markers, MarkerError, MatchError};
pub use render::render_document;
