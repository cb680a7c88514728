//! Marker extraction and resolution
//!
//! A marker is a bracket-delimited substring naming a citation by id, e.g.
//! `[knuth68]`. Extraction scans the two bracket kinds independently and
//! pairs them up positionally; the document is malformed if the counts
//! differ or markers interleave. Distinct ids are then resolved against the
//! bibliography, keeping every match when the bibliography itself contains
//! duplicate ids.

use thiserror::Error;

use super::bibliography::Bibliography;
use super::citation::Citation;

#[derive(Debug, Error, PartialEq)]
pub enum MarkerError {
    #[error("Unbalanced citation markers: {opening} '[' vs {closing} ']'")]
    UnbalancedBrackets { opening: usize, closing: usize },

    #[error("Malformed citation markers: brackets overlap or interleave")]
    Interleaved,
}

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error(transparent)]
    Marker(#[from] MarkerError),

    #[error("No bibliography entry found for citation marker [{0}]")]
    Unresolved(String),
}

/// Extracts the distinct citation ids referenced by a document.
///
/// The result is sorted lexicographically with duplicates removed; document
/// order is not preserved past this point.
pub fn extract_marker_ids(text: &str) -> Result<Vec<String>, MarkerError> {
    let opening: Vec<usize> = positions(text, '[');
    let closing: Vec<usize> = positions(text, ']');

    if opening.len() != closing.len() {
        return Err(MarkerError::UnbalancedBrackets {
            opening: opening.len(),
            closing: closing.len(),
        });
    }

    // Each pair must close before the next one opens; a closing bracket
    // before its own opening bracket is the same defect.
    for (i, (&left, &right)) in opening.iter().zip(&closing).enumerate() {
        if left > right {
            return Err(MarkerError::Interleaved);
        }
        if i + 1 < opening.len() && right > opening[i + 1] {
            return Err(MarkerError::Interleaved);
        }
    }

    let mut ids: Vec<String> = opening
        .iter()
        .zip(&closing)
        .map(|(&left, &right)| text[left + 1..right].to_string())
        .collect();

    ids.sort();
    ids.dedup();
    Ok(ids)
}

/// Resolves distinct marker ids against a bibliography.
///
/// Every id must match at least one entry; an id may match several when the
/// bibliography contains duplicates, and all matches are kept. Output order
/// is lexicographic by id, bibliography order for ties.
pub fn resolve_markers<'a>(
    text: &str,
    bibliography: &'a Bibliography,
) -> Result<Vec<&'a Citation>, MatchError> {
    let ids = extract_marker_ids(text)?;

    let mut resolved = Vec::with_capacity(ids.len());
    for id in &ids {
        let matches = bibliography.matching(id);
        if matches.is_empty() {
            return Err(MatchError::Unresolved(id.clone()));
        }
        resolved.extend(matches);
    }
    Ok(resolved)
}

fn positions(text: &str, needle: char) -> Vec<usize> {
    text.char_indices()
        .filter(|&(_, c)| c == needle)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bib(ids: &[&str]) -> Bibliography {
        ids.iter()
            .map(|id| Citation::webpage(*id, format!("Title {}", id), "https://x.io").unwrap())
            .collect()
    }

    #[test]
    fn extracts_ids_in_lexicographic_order() {
        assert_eq!(extract_marker_ids("See [a] and [b].").unwrap(), ["a", "b"]);
        assert_eq!(extract_marker_ids("[b] then [a]").unwrap(), ["a", "b"]);
    }

    #[test]
    fn adjacent_markers_extract() {
        assert_eq!(extract_marker_ids("[x][y]").unwrap(), ["x", "y"]);
    }

    #[test]
    fn repeated_markers_deduplicate() {
        assert_eq!(extract_marker_ids("[a] and [a] again [a]").unwrap(), ["a"]);
    }

    #[test]
    fn no_markers_yields_empty_set() {
        assert_eq!(extract_marker_ids("plain text").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn unbalanced_open_fails() {
        assert_eq!(
            extract_marker_ids("[a").unwrap_err(),
            MarkerError::UnbalancedBrackets {
                opening: 1,
                closing: 0
            }
        );
    }

    #[test]
    fn unbalanced_close_fails() {
        assert!(matches!(
            extract_marker_ids("a]").unwrap_err(),
            MarkerError::UnbalancedBrackets { .. }
        ));
    }

    #[test]
    fn nested_markers_fail() {
        assert_eq!(
            extract_marker_ids("[a[b]]").unwrap_err(),
            MarkerError::Interleaved
        );
    }

    #[test]
    fn reversed_brackets_fail() {
        assert_eq!(extract_marker_ids("]a[").unwrap_err(), MarkerError::Interleaved);
    }

    #[test]
    fn resolution_is_lexicographic_with_bibliography_tie_break() {
        let bibliography = bib(&["a", "b", "c"]);
        let resolved = resolve_markers("[b] then [a]", &bibliography).unwrap();

        let ids: Vec<&str> = resolved.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn duplicate_bibliography_ids_all_resolve_in_order() {
        let bibliography: Bibliography = [
            Citation::webpage("dup", "First", "u1").unwrap(),
            Citation::webpage("other", "Other", "u2").unwrap(),
            Citation::webpage("dup", "Second", "u3").unwrap(),
        ]
        .into_iter()
        .collect();

        let resolved = resolve_markers("[dup]", &bibliography).unwrap();
        let titles: Vec<String> = resolved.iter().map(|c| c.render()).collect();
        assert_eq!(
            titles,
            vec![
                "[dup] webpage: First. Available at u1",
                "[dup] webpage: Second. Available at u3"
            ]
        );
    }

    #[test]
    fn repeated_marker_resolves_once() {
        let bibliography = bib(&["a"]);
        let resolved = resolve_markers("[a] twice [a]", &bibliography).unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn unknown_id_fails_resolution() {
        let bibliography = bib(&["a"]);
        assert_eq!(
            resolve_markers("[z]", &bibliography).unwrap_err(),
            MatchError::Unresolved("z".to_string())
        );
    }

    #[test]
    fn empty_marker_fails_resolution() {
        // Citation ids are non-empty by construction, so "[]" can never match.
        let bibliography = bib(&["a"]);
        assert_eq!(
            resolve_markers("[]", &bibliography).unwrap_err(),
            MatchError::Unresolved(String::new())
        );
    }

    #[test]
    fn malformed_markers_fail_before_resolution() {
        let bibliography = bib(&["a"]);
        assert!(matches!(
            resolve_markers("[a", &bibliography).unwrap_err(),
            MatchError::Marker(_)
        ));
    }

    proptest! {
        /// Well-formed non-nested marker sequences always extract every id.
        #[test]
        fn well_formed_sequences_extract(ids in proptest::collection::vec("[a-z]{1,6}", 0..8)) {
            let text: String = ids.iter().map(|id| format!("word [{}] ", id)).collect();
            let extracted = extract_marker_ids(&text).unwrap();

            let mut expected = ids.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(extracted, expected);
        }

        /// Bracket-free text never yields candidates or errors.
        #[test]
        fn bracket_free_text_is_markerless(text in "[^\\[\\]]*") {
            prop_assert_eq!(extract_marker_ids(&text).unwrap(), Vec::<String>::new());
        }
    }
}
