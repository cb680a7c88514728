//! Citation model
//!
//! A citation is one bibliography entry of a fixed variant: a book, a
//! webpage, or a journal article. The variant set is closed, so dispatch
//! is an enum match rather than trait objects. Each variant renders to
//! exactly one line with a fixed template.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CitationError {
    #[error("Citation id must be a non-empty string")]
    EmptyId,
}

/// One bibliography entry.
///
/// The id is set exactly once at construction and never mutated; all field
/// access goes through the read-only accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum Citation {
    Book {
        id: String,
        author: String,
        title: String,
        publisher: String,
        /// Kept as text to tolerate non-numeric forms (e.g. "forthcoming").
        year: String,
    },
    WebPage {
        id: String,
        title: String,
        url: String,
    },
    Article {
        id: String,
        title: String,
        author: String,
        journal: String,
        year: i64,
        volume: i64,
        issue: i64,
    },
}

impl Citation {
    /// Creates a book citation
    pub fn book(
        id: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Self, CitationError> {
        Ok(Self::Book {
            id: non_empty(id.into())?,
            author: author.into(),
            title: title.into(),
            publisher: publisher.into(),
            year: year.into(),
        })
    }

    /// Creates a webpage citation
    pub fn webpage(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, CitationError> {
        Ok(Self::WebPage {
            id: non_empty(id.into())?,
            title: title.into(),
            url: url.into(),
        })
    }

    /// Creates an article citation
    #[allow(clippy::too_many_arguments)]
    pub fn article(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        journal: impl Into<String>,
        year: i64,
        volume: i64,
        issue: i64,
    ) -> Result<Self, CitationError> {
        Ok(Self::Article {
            id: non_empty(id.into())?,
            title: title.into(),
            author: author.into(),
            journal: journal.into(),
            year,
            volume,
            issue,
        })
    }

    /// Returns the citation id
    pub fn id(&self) -> &str {
        match self {
            Citation::Book { id, .. }
            | Citation::WebPage { id, .. }
            | Citation::Article { id, .. } => id,
        }
    }

    /// Returns the variant name as it appears in record `type` fields
    pub fn kind(&self) -> &'static str {
        match self {
            Citation::Book { .. } => "book",
            Citation::WebPage { .. } => "webpage",
            Citation::Article { .. } => "article",
        }
    }

    /// Renders the citation as one reference-list line (no trailing newline).
    ///
    /// Pure: same fields always produce the same output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Citation::Book {
                id,
                author,
                title,
                publisher,
                year,
            } => write!(
                f,
                "[{}] book: {}, {}, {}, {}",
                id, author, title, publisher, year
            ),
            Citation::WebPage { id, title, url } => {
                write!(f, "[{}] webpage: {}. Available at {}", id, title, url)
            }
            Citation::Article {
                id,
                title,
                author,
                journal,
                year,
                volume,
                issue,
            } => write!(
                f,
                "[{}] article: {}, {}, {}, {}, {}, {}",
                id, author, title, journal, year, volume, issue
            ),
        }
    }
}

fn non_empty(id: String) -> Result<String, CitationError> {
    if id.is_empty() {
        Err(CitationError::EmptyId)
    } else {
        Ok(id)
    }
}
