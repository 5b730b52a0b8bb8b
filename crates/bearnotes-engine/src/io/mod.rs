use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Not a regular file: {0}")]
    NotARegularFile(PathBuf),
}

impl IoError {
    /// True when the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            IoError::NotFound(_) => true,
            IoError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a markdown file
pub fn write_file(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(notes_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Copy a regular file to `dest`, replacing it if it exists.
pub fn copy_file(src: &Path, dest: &Path) -> Result<(), IoError> {
    let metadata = match fs::metadata(src) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IoError::NotFound(src.to_path_buf()));
        }
        Err(e) => return Err(IoError::Io(e)),
    };
    if !metadata.is_file() {
        return Err(IoError::NotARegularFile(src.to_path_buf()));
    }

    fs::copy(src, dest)?;
    Ok(())
}

/// Scan for markdown files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("stat: {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();

        if path.is_dir() {
            if let Err(e) = scan_directory_recursive(&path, files) {
                log::warn!("scan: {}: {e}", path.display());
            }
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Path of a scanned file relative to the notes root, or `None` when it
/// lies outside the root or is not valid UTF-8.
pub fn relative_to_root(path: &Path, notes_root: &Path) -> Option<RelativePathBuf> {
    let relative = path.strip_prefix(notes_root).ok()?;
    RelativePathBuf::from_path(relative).ok()
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
