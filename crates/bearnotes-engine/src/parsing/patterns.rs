//! # Inline Patterns
//!
//! The three inline grammars recognised in a Bear note, compiled once on
//! first use and shared read-only afterwards.
//!
//! The `regex` crate has no look-around, so the tag grammar emulates it: it
//! consumes one extra character on each side of the tag (or matches the
//! text boundary) and the builder in [`super::kinds::tag`] rejects matches
//! whose extra characters are not whitespace.

use std::sync::LazyLock;

use regex::Regex;

use super::span::Span;

/// A tag: `#foo`, `#foo/bar`. Group 1 is the character before the `#`,
/// group 2 the name, group 3 the character after the name. `.` never
/// matches a newline, so a tag at the start or end of a line captures an
/// empty boundary.
pub(crate) static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|.?)#(\p{L}[-\p{L}\p{N}/$_§%=+°({\[\\@]*)(.?|$)")
        .expect("tag grammar is valid")
});

/// A file attachment: `<a href='my%20file.pdf'>my file.pdf</a>`.
/// Group 1 is the encoded location, group 2 the display name.
pub(crate) static FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a +href=['"]([^'"]+)['"]>([^<]+)</a>"#).expect("file grammar is valid")
});

/// An embedded image: `![alt](note/image.png)`. Group 1 is the
/// description, group 2 the encoded location. The location may contain
/// balanced parenthesized groups one level deep.
pub(crate) static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(((?:[^()]|\([^()]*\))+)\)").expect("image grammar is valid")
});

/// Selects one of the inline grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Tag,
    File,
    Image,
}

impl Grammar {
    pub(crate) fn regex(self) -> &'static Regex {
        match self {
            Grammar::Tag => &TAG,
            Grammar::File => &FILE,
            Grammar::Image => &IMAGE,
        }
    }
}

/// Yields the spans of all non-overlapping matches of `grammar` in `text`,
/// left to right.
///
/// Tag spans include the boundary characters consumed around the tag, so
/// two tags separated by a single space cannot both claim it: the first
/// match takes the space as its trailing boundary and the second one starts
/// right at its `#`.
pub fn find_spans(text: &str, grammar: Grammar) -> impl Iterator<Item = Span> + '_ {
    grammar.regex().find_iter(text).map(Span::from)
}
