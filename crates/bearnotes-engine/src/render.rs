//! # Rendering
//!
//! Splices rendered items back into the original note text. Everything
//! outside the item spans is copied byte for byte.

use crate::parsing::span::Span;

/// Rendered text destined to replace one span of the original note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

impl Replacement {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

/// Applies `replacements` to `original` in document order.
///
/// Replacements are stable-sorted by `(start, end)`, so ties keep the
/// order in which they were supplied. Spans are expected not to overlap.
/// When they do, the output is unspecified but this never panics: a gap
/// that would run backwards or outside `original` is skipped.
pub fn splice(original: &str, mut replacements: Vec<Replacement>) -> String {
    replacements.sort_by_key(|r| (r.span.start, r.span.end));

    let extra: usize = replacements.iter().map(|r| r.text.len()).sum();
    let mut out = String::with_capacity(original.len() + extra);
    let mut cursor = 0;

    for r in &replacements {
        if let Some(gap) = Span::new(cursor, r.span.start).slice(original) {
            out.push_str(gap);
        }
        out.push_str(&r.text);
        cursor = cursor.max(r.span.end);
    }
    if let Some(tail) = original.get(cursor..) {
        out.push_str(tail);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_replacements_copies_text() {
        assert_eq!(splice("hello world", vec![]), "hello world");
        assert_eq!(splice("", vec![]), "");
    }

    #[test]
    fn replacements_are_applied_in_span_order() {
        let text = "aaa BBB ccc DDD";
        let out = splice(
            text,
            vec![
                Replacement::new(Span::new(12, 15), "d"),
                Replacement::new(Span::new(4, 7), "b"),
            ],
        );
        assert_eq!(out, "aaa b ccc d");
    }

    #[test]
    fn adjacent_spans() {
        let out = splice(
            "XXYY",
            vec![
                Replacement::new(Span::new(0, 2), "1"),
                Replacement::new(Span::new(2, 4), "2"),
            ],
        );
        assert_eq!(out, "12");
    }

    #[test]
    fn empty_replacement_removes_span() {
        let out = splice("keep DROP keep", vec![Replacement::new(Span::new(5, 10), "")]);
        assert_eq!(out, "keep keep");
    }

    #[test]
    fn ties_keep_supplied_order() {
        let out = splice(
            "[x]",
            vec![
                Replacement::new(Span::new(1, 2), "tag"),
                Replacement::new(Span::new(1, 2), "file"),
                Replacement::new(Span::new(1, 2), "image"),
            ],
        );
        assert_eq!(out, "[tagfileimage]");
    }

    #[test]
    fn equal_starts_order_by_end() {
        let out = splice(
            "abcdef",
            vec![
                Replacement::new(Span::new(1, 4), "<long>"),
                Replacement::new(Span::new(1, 1), "<empty>"),
            ],
        );
        assert_eq!(out, "a<empty><long>ef");
    }

    #[test]
    fn overlapping_spans_do_not_panic() {
        let out = splice(
            "0123456789",
            vec![
                Replacement::new(Span::new(2, 6), "A"),
                Replacement::new(Span::new(4, 8), "B"),
            ],
        );
        assert_eq!(out, "01AB89");
    }

    #[test]
    fn out_of_range_span_does_not_panic() {
        let out = splice("short", vec![Replacement::new(Span::new(3, 40), "!")]);
        assert_eq!(out, "sho!");
    }
}
