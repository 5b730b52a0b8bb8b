/// A byte range `[start, end)` into the note text.
///
/// Parsed items store spans rather than copied source text, so the
/// serializer can splice replacements back into the original bytes and
/// leave everything outside those spans untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span, or `None` when the span is out of
    /// range or does not fall on char boundaries.
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        // Inverted spans never underflow
        assert_eq!(Span::new(7, 3).len(), 0);
    }

    #[test]
    fn slice_in_range() {
        assert_eq!(Span::new(6, 11).slice("hello world"), Some("world"));
    }

    #[test]
    fn slice_out_of_range_is_none() {
        assert_eq!(Span::new(6, 50).slice("hello world"), None);
    }

    #[test]
    fn slice_inside_multibyte_char_is_none() {
        // 'é' is two bytes
        assert_eq!(Span::new(0, 1).slice("é"), None);
    }

    #[test]
    fn ordering_is_by_start_then_end() {
        let mut spans = vec![Span::new(4, 9), Span::new(0, 3), Span::new(4, 5)];
        spans.sort();
        assert_eq!(
            spans,
            vec![Span::new(0, 3), Span::new(4, 5), Span::new(4, 9)]
        );
    }
}
