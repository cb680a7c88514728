//! Metadata resolution for book and webpage records
//!
//! Book records carry only an ISBN and webpage records only a URL; the
//! remaining fields come from an external lookup service. The builder takes
//! the resolver as an explicit capability so tests can substitute a mock
//! instead of reaching for a process-wide HTTP client.

mod http;

use serde::Deserialize;
use thiserror::Error;

pub use http::HttpResolver;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Metadata service returned status {0} for {1}")]
    Status(u16, String),

    #[error("Metadata response is missing field '{0}'")]
    MissingField(&'static str),
}

/// Book fields returned by an ISBN lookup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookMeta {
    pub author: String,
    pub title: String,
    pub publisher: String,
    pub year: String,
}

/// Capability for auto-populating citation metadata.
///
/// Failures are fatal to the whole run; no retry happens at this layer.
pub trait MetadataResolver {
    /// Resolves a book's author/title/publisher/year from its ISBN
    fn book_by_isbn(&self, isbn: &str) -> Result<BookMeta, ResolveError>;

    /// Resolves a webpage's title from its URL
    fn title_for_url(&self, url: &str) -> Result<String, ResolveError>;
}
