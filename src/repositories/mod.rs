mod json_file_repository;
mod snapshot;
mod traits;

pub use json_file_repository::JsonFileRepository;
pub use snapshot::{DirectorySnapshot, FORMAT_VERSION};
pub use traits::DirectoryRepository;
