//! Tag configuration: how notes carrying a given tag are migrated.
//!
//! The tag file is a YAML map from normalized tag name to [`TagOptions`]:
//!
//! ```yaml
//! work/projects:
//!   ignore: false
//!   handling_strategy: same-folder
//!   target_directory: work/projects
//!   target_tag_name: projects
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

use crate::ConfigError;

/// Where migrated notes carrying a tag are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HandlingStrategy {
    /// No preference: the note goes to the root of the output directory.
    #[default]
    None,
    /// All notes share the tag's target directory, along with their images
    /// and attachments.
    SameFolder,
    /// Each note gets its own sub-folder in the tag's target directory.
    OneNotePerFolder,
    /// Anything else found in a hand-edited tag file.
    Unknown(String),
}

impl HandlingStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            HandlingStrategy::None => "",
            HandlingStrategy::SameFolder => "same-folder",
            HandlingStrategy::OneNotePerFolder => "one-note-per-folder",
            HandlingStrategy::Unknown(other) => other,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, HandlingStrategy::None)
    }
}

impl From<String> for HandlingStrategy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => HandlingStrategy::None,
            "same-folder" => HandlingStrategy::SameFolder,
            "one-note-per-folder" => HandlingStrategy::OneNotePerFolder,
            _ => HandlingStrategy::Unknown(value),
        }
    }
}

impl From<HandlingStrategy> for String {
    fn from(value: HandlingStrategy) -> Self {
        value.as_str().to_string()
    }
}

/// Migration settings for one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOptions {
    /// Number of notes carrying the tag, counted during discovery.
    #[serde(skip)]
    pub count: usize,

    /// The tag is not relevant (e.g. wrongly detected): leave it as is and
    /// let it influence nothing.
    #[serde(default)]
    pub ignore: bool,

    #[serde(default)]
    pub handling_strategy: HandlingStrategy,

    /// Where notes with this tag are stored, relative to the output directory.
    #[serde(default)]
    pub target_directory: String,

    /// New tag name. Empty removes the tag from the note.
    #[serde(default)]
    pub target_tag_name: String,
}

impl TagOptions {
    /// Defaults proposed for a freshly discovered tag. Nested tags
    /// (`#foo/bar`) are flattened to their last component (`#bar`).
    pub fn for_tag(name: &str) -> Self {
        let last_component = name.rsplit('/').next().unwrap_or(name);
        TagOptions {
            count: 1,
            ignore: false,
            handling_strategy: HandlingStrategy::SameFolder,
            target_directory: name.to_string(),
            target_tag_name: last_component.to_string(),
        }
    }
}

/// NFC-normalizes and lowercases a tag name. Bear tags are case
/// insensitive, and file names coming from macOS are often decomposed.
pub fn normalize_tag_name(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

/// All known tags, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    tags: BTreeMap<String, TagOptions>,
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `name`, creating default options on
    /// first sight.
    pub fn record(&mut self, name: &str) {
        let key = normalize_tag_name(name);
        match self.tags.entry(key) {
            btree_map::Entry::Vacant(entry) => {
                let options = TagOptions::for_tag(entry.key());
                entry.insert(options);
            }
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().count += 1,
        }
    }

    pub fn insert(&mut self, name: &str, options: TagOptions) {
        self.tags.insert(normalize_tag_name(name), options);
    }

    /// Looks up a tag by name, normalizing it first.
    pub fn get(&self, name: &str) -> Option<&TagOptions> {
        self.tags.get(&normalize_tag_name(name))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Normalized tag names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn load_from_path<P: AsRef<Path>>(tag_file: P) -> Result<Self, ConfigError> {
        let tag_file = tag_file.as_ref();
        let content =
            std::fs::read_to_string(tag_file).map_err(|source| ConfigError::TagFileReadError {
                tag_file: tag_file.to_path_buf(),
                source,
            })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::TagFileParseError {
            tag_file: tag_file.to_path_buf(),
            source,
        })
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, tag_file: P) -> anyhow::Result<()> {
        let tag_file = tag_file.as_ref();
        if let Some(parent) = tag_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(tag_file, content)?;
        Ok(())
    }
}
