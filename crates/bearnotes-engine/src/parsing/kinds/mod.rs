//! # Inline Kinds
//!
//! Typed records built from raw pattern matches. Each kind owns its
//! decoding on the way in and its canonical rendering (`Display`) on the
//! way out.
//!
//! - **`Tag`**: `#name`, kept only when surrounded by whitespace or a line edge
//! - **`FileRef`**: `<a href='...'>...</a>`, rendered as a Markdown link
//! - **`ImageRef`**: `![...](...)`

pub mod file_ref;
pub mod image_ref;
pub mod tag;

pub use file_ref::FileRef;
pub use image_ref::ImageRef;
pub use tag::Tag;
