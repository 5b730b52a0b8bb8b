use std::fmt;

use crate::parsing::{
    escape::{escape_path, unescape_path},
    patterns::IMAGE,
    span::Span,
};

/// An embedded image: `![description](note/image.png)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Decoded path of the image.
    pub location: String,
    /// Alternative text, possibly empty.
    pub description: String,
    span: Span,
}

impl ImageRef {
    pub fn from_match(raw: &str, span: Span) -> Option<ImageRef> {
        let caps = IMAGE.captures(raw)?;
        Some(ImageRef {
            location: unescape_path(&caps[2]).into_owned(),
            description: caps[1].to_string(),
            span,
        })
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "![{}]({})", self.description, escape_path(&self.location))
    }
}
