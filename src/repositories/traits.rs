use crate::directory::Directory;
use crate::error::StorageResult;

/// Repository for persisting the whole directory.
///
/// Provides abstraction over where the directory snapshot lives,
/// enabling different implementations (JSON file, in-memory mock).
pub trait DirectoryRepository {
    /// Load the persisted directory, or an empty one on first run.
    fn load(&self) -> StorageResult<Directory>;

    /// Persist the whole directory, replacing any previous snapshot.
    fn save(&self, directory: &Directory) -> StorageResult<()>;
}
