use std::fmt;

use crate::parsing::{patterns::TAG, span::Span};

/// A Bear tag such as `#foo` or `#foo/bar`.
///
/// The span covers the boundary characters consumed around the tag, which
/// are kept here and written back verbatim when the tag is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name without the leading `#`. An empty name removes the tag from
    /// the rendered note.
    pub name: String,
    span: Span,
    before: Option<char>,
    after: Option<char>,
}

impl Tag {
    pub const MARKER: char = '#';

    /// Builds a tag from the raw text of a tag match and its span.
    ///
    /// Returns `None` unless the tag is surrounded by whitespace or by the
    /// start/end of a line: `part#word` and `#tag#trap` are not tags.
    pub fn from_match(raw: &str, span: Span) -> Option<Tag> {
        let caps = TAG.captures(raw)?;
        let before = boundary(caps.get(1).map_or("", |m| m.as_str()))?;
        let after = boundary(caps.get(3).map_or("", |m| m.as_str()))?;

        Some(Tag {
            name: caps[2].to_string(),
            span,
            before,
            after,
        })
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The character consumed before the `#`, if any.
    pub fn boundary_before(&self) -> Option<char> {
        self.before
    }

    /// The character consumed after the name, if any.
    pub fn boundary_after(&self) -> Option<char> {
        self.after
    }

    pub fn is_removed(&self) -> bool {
        self.name.is_empty()
    }
}

/// `Some(None)` for an absent boundary, `Some(Some(c))` for a whitespace
/// boundary, `None` when the boundary makes the tag invalid.
fn boundary(captured: &str) -> Option<Option<char>> {
    match captured.chars().next() {
        None => Some(None),
        Some(c) if c.is_whitespace() => Some(Some(c)),
        Some(_) => None,
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(c) = self.before {
            write!(f, "{c}")?;
        }
        if !self.name.is_empty() {
            write!(f, "{}{}", Self::MARKER, self.name)?;
        }
        if let Some(c) = self.after {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
