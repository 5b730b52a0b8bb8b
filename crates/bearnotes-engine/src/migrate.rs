//! # Migration
//!
//! Rewrites every note of a Bear export into an output directory, following
//! the tag configuration:
//!
//! 1. tags are renamed (or removed) as configured, ignored tags are left alone;
//! 2. the note's tags decide its target directory and handling strategy,
//!    first tag wins and conflicting ones are reported;
//! 3. embedded images and attachments are copied next to the note and their
//!    links rewritten to the bare file name;
//! 4. the rendered note is written to the target directory.
//!
//! A note that cannot be migrated is logged and counted as a failure; the
//! remaining notes are still processed.

use bearnotes_config::{HandlingStrategy, TagCatalog, normalize_tag_name};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

use crate::io::{self, IoError};
use crate::note::Note;

#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("Unknown tag name '{0}'! Re-run the discover command")]
    UnknownTag(String),
    #[error("Invalid note path: {0}")]
    InvalidPath(PathBuf),
    #[error(transparent)]
    Io(#[from] IoError),
}

impl From<std::io::Error> for MigrateError {
    fn from(e: std::io::Error) -> Self {
        MigrateError::Io(IoError::Io(e))
    }
}

/// Outcome of [`migrate_notes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub processed: usize,
    pub succeeded: usize,
}

impl MigrationReport {
    pub fn failed(&self) -> usize {
        self.processed - self.succeeded
    }
}

/// Target directory and handling strategy collected from a note's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePlan {
    /// Relative to the output directory. Empty means the output root.
    pub target_directory: String,
    pub handling_strategy: HandlingStrategy,
}

impl NotePlan {
    /// Folds in the directives of one tag. The first non-empty value wins;
    /// a later, different one is reported and ignored.
    fn merge(&mut self, tag: &str, target_directory: &str, strategy: &HandlingStrategy) {
        if !target_directory.is_empty() {
            if self.target_directory.is_empty() {
                self.target_directory = target_directory.to_string();
            } else if self.target_directory != target_directory {
                log::warn!(
                    "Target directory '{target_directory}' for tag '{tag}' conflicts with directives ({}) from another tag. Continuing with existing value.",
                    self.target_directory
                );
            }
        }

        match strategy {
            HandlingStrategy::None => {}
            HandlingStrategy::Unknown(other) => {
                log::warn!("Unknown handling strategy '{other}' for tag '{tag}'.");
            }
            known if self.handling_strategy.is_none() => {
                self.handling_strategy = known.clone();
            }
            known if *known != self.handling_strategy => {
                log::warn!(
                    "Handling strategy '{}' for tag '{tag}' conflicts with directives ({}) from another tag. Continuing with existing value.",
                    known.as_str(),
                    self.handling_strategy.as_str()
                );
            }
            _ => {}
        }
    }

    /// Directory the note is written to.
    pub fn target_dir(&self, output_root: &Path, note_name: &str) -> PathBuf {
        let tag_dir = || {
            if self.target_directory.is_empty() {
                output_root.to_path_buf()
            } else {
                output_root.join(&self.target_directory)
            }
        };

        match self.handling_strategy {
            HandlingStrategy::OneNotePerFolder => tag_dir().join(note_name),
            HandlingStrategy::SameFolder => tag_dir(),
            HandlingStrategy::None | HandlingStrategy::Unknown(_) => output_root.to_path_buf(),
        }
    }
}

/// Renames the tags of `note` according to `catalog` and collects where the
/// note should go. Fails on the first tag missing from the catalog.
pub fn plan_note(note: &mut Note, catalog: &TagCatalog) -> Result<NotePlan, MigrateError> {
    let mut plan = NotePlan::default();

    for tag in &mut note.tags {
        let name = normalize_tag_name(&tag.name);
        let options = catalog
            .get(&name)
            .ok_or_else(|| MigrateError::UnknownTag(name.clone()))?;

        if options.ignore {
            continue;
        }

        tag.name = options.target_tag_name.clone();
        plan.merge(
            &name,
            &options.target_directory,
            &options.handling_strategy,
        );
    }

    Ok(plan)
}

/// Migrates every note found under `from` into `to`.
///
/// Only an unusable `from` directory is an error; individual note failures
/// are logged and reflected in the report.
pub fn migrate_notes(
    from: &Path,
    to: &Path,
    catalog: &TagCatalog,
) -> Result<MigrationReport, IoError> {
    io::validate_notes_dir(from)?;

    let mut report = MigrationReport::default();
    for path in io::scan_markdown_files(from)? {
        log::info!("Processing {}...", path.display());
        report.processed += 1;

        match migrate_note(from, to, catalog, &path) {
            Ok(written) => {
                log::debug!("Wrote {}", written.display());
                report.succeeded += 1;
            }
            Err(e) => log::error!("{}: {e}", path.display()),
        }
    }

    log::info!(
        "Processed {} notes with {} successes and {} failures",
        report.processed,
        report.succeeded,
        report.failed()
    );
    Ok(report)
}

/// Migrates one note, returning the path of the written file.
fn migrate_note(
    from: &Path,
    to: &Path,
    catalog: &TagCatalog,
    path: &Path,
) -> Result<PathBuf, MigrateError> {
    let invalid_path = || MigrateError::InvalidPath(path.to_path_buf());
    let relative = io::relative_to_root(path, from).ok_or_else(invalid_path)?;
    let file_name = relative.file_name().ok_or_else(invalid_path)?.to_string();
    let note_name = file_name.strip_suffix(".md").unwrap_or(&file_name).to_string();

    let mut note = Note::parse(io::read_file(&relative, from)?);
    let plan = plan_note(&mut note, catalog)?;

    let target_dir = plan.target_dir(to, &note_name);
    fs::create_dir_all(&target_dir)?;

    for image in &mut note.images {
        if let Some(name) = migrate_attachment(&image.location, from, &target_dir, &note_name)? {
            image.location = name;
        }
    }

    let attachments_root = from.join(&note_name);
    for file in &mut note.files {
        if let Some(name) =
            migrate_attachment(&file.location, &attachments_root, &target_dir, &note_name)?
        {
            file.location = name;
        }
    }

    io::write_file(RelativePath::new(&file_name), &target_dir, &note.render())?;
    Ok(target_dir.join(&file_name))
}

/// Copies the attachment at `location` (relative to `source_root`) into
/// `target_dir`, without overwriting anything already there.
///
/// Returns the new location (the bare file name), or `None` when the link
/// is left as is: remote URLs and locations without a file name.
fn migrate_attachment(
    location: &str,
    source_root: &Path,
    target_dir: &Path,
    note_name: &str,
) -> Result<Option<String>, MigrateError> {
    if location.contains("://") {
        log::debug!("Leaving remote link '{location}' in note {note_name} untouched");
        return Ok(None);
    }

    // File names on disk are NFC, Bear links are not always
    let location: String = location.nfc().collect();
    let relative = RelativePath::new(&location);
    let Some(file_name) = relative.file_name() else {
        log::warn!("Attachment '{location}' in note {note_name} has no file name, skipping");
        return Ok(None);
    };

    let source = relative.to_path(source_root);
    let destination = target_dir.join(file_name);

    if destination.try_exists()? {
        log::warn!(
            "Attachment '{file_name}' of note {note_name} already exists in the target directory {}!",
            destination.display()
        );
    } else {
        match io::copy_file(&source, &destination) {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                log::warn!("Source attachment '{file_name}' in note {note_name} cannot be found!");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Some(file_name.to_string()))
}
