//! Bear note rewriting engine.
//!
//! [`Note::parse`] finds the tags, file attachments and embedded images of
//! a note; callers edit them in place and [`Note::render`] writes the note
//! back with only those constructs rewritten. [`discover`] and [`migrate`]
//! drive that over a whole export directory.

pub mod discover;
pub mod io;
pub mod migrate;
pub mod note;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use discover::{Discovery, discover_notes};
pub use migrate::{MigrateError, MigrationReport, NotePlan, migrate_notes, plan_note};
pub use note::{Note, parse, render};
pub use parsing::{FileRef, ImageRef, Span, Tag};
