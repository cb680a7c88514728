//! Output assembly
//!
//! The rendered output is the document text verbatim, a fixed separator,
//! then one line per resolved citation in matcher order.

use super::citation::Citation;

const SEPARATOR: &str = "\n\nReferences:\n";

/// Assembles the final output text
pub fn render_document(document: &str, citations: &[&Citation]) -> String {
    let mut out = String::with_capacity(document.len() + SEPARATOR.len() + citations.len() * 64);
    out.push_str(document);
    out.push_str(SEPARATOR);
    for citation in citations {
        out.push_str(&citation.render());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_document_separator_then_lines() {
        let a = Citation::webpage("a", "Alpha", "https://a.io").unwrap();
        let b = Citation::webpage("b", "Beta", "https://b.io").unwrap();

        let out = render_document("Body [b] then [a]", &[&a, &b]);
        assert_eq!(
            out,
            "Body [b] then [a]\n\nReferences:\n\
             [a] webpage: Alpha. Available at https://a.io\n\
             [b] webpage: Beta. Available at https://b.io\n"
        );
    }

    #[test]
    fn document_text_is_verbatim() {
        let out = render_document("line one\nline two", &[]);
        assert!(out.starts_with("line one\nline two\n\nReferences:\n"));
    }

    #[test]
    fn empty_reference_list_still_gets_separator() {
        assert_eq!(render_document("doc", &[]), "doc\n\nReferences:\n");
    }
}
