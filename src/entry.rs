use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    /// Final path component, never contains a separator
    pub name: String,
    pub is_directory: bool,
    pub is_file: bool,
    pub is_symlink: bool,
}

#[cfg(test)]
impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            is_file: true,
            is_symlink: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            is_file: false,
            is_symlink: false,
        }
    }
}

impl DirEntry {
    /// Build an entry from a `read_dir` item.
    /// Non-UTF-8 names are converted lossily; a leading `.` or `$` survives the conversion.
    pub fn from_fs(entry: &fs::DirEntry) -> Result<Self> {
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry
            .file_type()
            .context(format!("Failed to read file type of {:?}", entry.path()))?;

        Ok(Self::with_file_type(name, &entry.path(), file_type))
    }

    /// Build an entry from a full path, as the watcher sees it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .context(format!("Could not extract file name from {:?}", path))?
            .to_string_lossy()
            .into_owned();

        let metadata = fs::symlink_metadata(path)
            .context(format!("Failed to read metadata of {:?}", path))?;

        Ok(Self::with_file_type(name, path, metadata.file_type()))
    }

    /// Directory and file flags follow symlinks; a dangling link is neither.
    fn with_file_type(name: String, path: &Path, file_type: fs::FileType) -> Self {
        let (is_directory, is_file) = if file_type.is_symlink() {
            fs::metadata(path)
                .map(|target| (target.is_dir(), target.is_file()))
                .unwrap_or((false, false))
        } else {
            (file_type.is_dir(), file_type.is_file())
        };

        Self {
            name,
            is_directory,
            is_file,
            is_symlink: file_type.is_symlink(),
        }
    }
}
