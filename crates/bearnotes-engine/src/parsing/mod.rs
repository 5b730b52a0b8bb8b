//! # Parsing
//!
//! Pattern matching and item building for the three inline constructs of
//! a Bear note. Nothing here models Markdown structure: headings, lists
//! and emphasis are plain text as far as this crate is concerned.

pub mod escape;
pub mod kinds;
pub mod patterns;
pub mod span;

pub use escape::{escape_path, unescape_path};
pub use kinds::{FileRef, ImageRef, Tag};
pub use patterns::{Grammar, find_spans};
pub use span::Span;
