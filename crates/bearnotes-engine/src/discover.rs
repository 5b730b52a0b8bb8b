//! # Discovery
//!
//! Walks an exported Bear notes directory and proposes a tag
//! configuration: every tag found gets [`TagOptions::for_tag`] defaults,
//! ready to be reviewed by hand before migrating.
//!
//! [`TagOptions::for_tag`]: bearnotes_config::TagOptions::for_tag

use bearnotes_config::TagCatalog;
use std::path::Path;

use crate::io::{self, IoError};
use crate::note::Note;

/// What [`discover_notes`] found.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub note_count: usize,
    pub image_count: usize,
    pub file_count: usize,
    pub tags: TagCatalog,
}

impl Discovery {
    /// Accounts for one parsed note.
    pub fn add_note(&mut self, note: &Note) {
        self.note_count += 1;
        self.image_count += note.images.len();
        self.file_count += note.files.len();
        for tag in &note.tags {
            self.tags.record(&tag.name);
        }
    }

    /// Normalized tag names, sorted.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.names().collect()
    }
}

/// Parses every note under `notes_dir` and collects its tags.
///
/// Notes that cannot be read are logged and skipped.
pub fn discover_notes(notes_dir: &Path) -> Result<Discovery, IoError> {
    io::validate_notes_dir(notes_dir)?;

    let mut discovery = Discovery::default();
    for path in io::scan_markdown_files(notes_dir)? {
        let Some(relative) = io::relative_to_root(&path, notes_dir) else {
            log::warn!("open: {}: not under the notes directory", path.display());
            continue;
        };
        let content = match io::read_file(&relative, notes_dir) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("open: {}: {e}", path.display());
                continue;
            }
        };
        log::debug!("Discovering {}", path.display());
        discovery.add_note(&Note::parse(content));
    }

    log::info!(
        "Found {} notes, {} embedded images, {} attachments and {} unique tags",
        discovery.note_count,
        discovery.image_count,
        discovery.file_count,
        discovery.tags.len()
    );
    Ok(discovery)
}
