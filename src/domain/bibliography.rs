//! Bibliography construction
//!
//! The bibliography source is an arbitrarily nested JSON value; citation
//! records can live at any depth. The builder walks the tree depth-first
//! and appends a citation wherever a node passes record interpretation.
//!
//! Interpretation is permissive by contract: a node tagged with a known
//! `type` but missing a required field is *not* an error, it is simply not
//! a record, and its children are still searched. Wrapper objects that
//! look almost like records may legitimately contain valid ones.

use serde_json::Value;
use thiserror::Error;

use super::citation::Citation;
use crate::resolver::{MetadataResolver, ResolveError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to resolve metadata for record '{id}': {source}")]
    Resolve {
        id: String,
        #[source]
        source: ResolveError,
    },
}

/// Insertion-ordered collection of citations.
///
/// Order is the depth-first discovery order of the build walk and is an
/// observable invariant: the matcher's duplicate-id tie-break depends on it.
/// Duplicate ids are legal here; uniqueness is the author's convention, not
/// an enforced rule.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Bibliography(Vec<Citation>);

impl Bibliography {
    /// Creates an empty bibliography
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a bibliography from a parsed JSON tree.
    ///
    /// Book and webpage records need the resolver to fill in their fields;
    /// a resolver failure aborts the whole build.
    pub fn from_value(
        tree: &Value,
        resolver: &dyn MetadataResolver,
    ) -> Result<Self, BuildError> {
        let mut bibliography = Self::new();
        collect(tree, resolver, &mut bibliography.0)?;
        Ok(bibliography)
    }

    /// Returns the number of citations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no citations were found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over citations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Citation> {
        self.0.iter()
    }

    /// Returns every citation with the given id, in insertion order
    pub fn matching(&self, id: &str) -> Vec<&Citation> {
        self.0.iter().filter(|c| c.id() == id).collect()
    }
}

impl FromIterator<Citation> for Bibliography {
    fn from_iter<I: IntoIterator<Item = Citation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Bibliography {
    type Item = &'a Citation;
    type IntoIter = std::slice::Iter<'a, Citation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Depth-first record search.
///
/// A node that interprets as a record is a leaf: its children are not
/// searched. Everything else recurses into object values and array
/// elements that are themselves objects or arrays.
fn collect(
    node: &Value,
    resolver: &dyn MetadataResolver,
    out: &mut Vec<Citation>,
) -> Result<(), BuildError> {
    if let Some(citation) = interpret_record(node, resolver)? {
        out.push(citation);
        return Ok(());
    }

    let children: Box<dyn Iterator<Item = &Value> + '_> = match node {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(items) => Box::new(items.iter()),
        _ => return Ok(()),
    };
    for child in children {
        if child.is_object() || child.is_array() {
            collect(child, resolver, out)?;
        }
    }
    Ok(())
}

/// Attempts to interpret one node as a citation record.
///
/// Returns `Ok(None)` for anything that is not a valid record (wrong shape,
/// unknown type, missing or mistyped fields) so the caller falls back to
/// searching the node's children. Only resolver failures escape as errors.
fn interpret_record(
    node: &Value,
    resolver: &dyn MetadataResolver,
) -> Result<Option<Citation>, BuildError> {
    let (Some(kind), Some(id)) = (string_field(node, "type"), string_field(node, "id")) else {
        return Ok(None);
    };

    let citation = match kind {
        "book" => {
            let Some(isbn) = string_field(node, "isbn") else {
                return Ok(None);
            };
            let meta = resolver.book_by_isbn(isbn).map_err(|source| {
                BuildError::Resolve {
                    id: id.to_string(),
                    source,
                }
            })?;
            Citation::book(id, meta.author, meta.title, meta.publisher, meta.year)
        }
        "webpage" => {
            let Some(url) = string_field(node, "url") else {
                return Ok(None);
            };
            let title = resolver.title_for_url(url).map_err(|source| {
                BuildError::Resolve {
                    id: id.to_string(),
                    source,
                }
            })?;
            Citation::webpage(id, title, url)
        }
        "article" => {
            let (Some(title), Some(author), Some(journal)) = (
                string_field(node, "title"),
                string_field(node, "author"),
                string_field(node, "journal"),
            ) else {
                return Ok(None);
            };
            let (Some(year), Some(volume), Some(issue)) = (
                int_field(node, "year"),
                int_field(node, "volume"),
                int_field(node, "issue"),
            ) else {
                return Ok(None);
            };
            Citation::article(id, title, author, journal, year, volume, issue)
        }
        _ => return Ok(None),
    };

    // Empty ids fail citation construction; treat that as "not a record"
    // like any other field-validation failure.
    Ok(citation.ok())
}

fn string_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

fn int_field(node: &Value, key: &str) -> Option<i64> {
    node.get(key).and_then(Value::as_i64)
}
