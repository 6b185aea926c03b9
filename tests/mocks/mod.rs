mod mock_directory_repository;

pub use mock_directory_repository::MockDirectoryRepository;
