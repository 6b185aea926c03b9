use super::snapshot::{DirectorySnapshot, VersionTag, FORMAT_VERSION};
use super::traits::DirectoryRepository;
use crate::directory::Directory;
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON file implementation of DirectoryRepository.
///
/// The whole directory is read or written in one call. Writes overwrite the
/// file directly; there is no temporary file or rename.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a saved address book is present at the path.
    pub fn has_saved_book(&self) -> bool {
        self.path.is_file()
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, source: serde_json::Error) -> StorageError {
        StorageError::Corrupt {
            path: self.path.clone(),
            source,
        }
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Directory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book found, starting with a new one");
                return Ok(Directory::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let tag: VersionTag = serde_json::from_slice(&bytes).map_err(|e| self.corrupt(e))?;
        if tag.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: tag.version,
                supported: FORMAT_VERSION,
            });
        }

        let snapshot: DirectorySnapshot =
            serde_json::from_slice(&bytes).map_err(|e| self.corrupt(e))?;
        let directory = Directory::from(snapshot);

        info!(
            path = %self.path.display(),
            records = directory.len(),
            "Address book loaded from disk"
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        let mut bytes = serde_json::to_vec_pretty(&DirectorySnapshot::from(directory))?;
        bytes.push(b'\n');

        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            records = directory.len(),
            "Address book saved to disk"
        );
        Ok(())
    }
}
