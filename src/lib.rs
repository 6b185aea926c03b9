//! Contact Directory - a personal address book with birthday reminders.
//!
//! This library stores contacts (name, phone numbers, birthday), supports
//! lookup, editing and deletion, and computes which contacts have birthdays
//! in an upcoming window, moving weekend dates to the next Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact record and upcoming-birthday rows
//! - **directory**: The name-keyed collection of records and the birthday query
//! - **repositories**: Loading and saving the directory as a versioned JSON file
//! - **shell**: Line-oriented interactive command loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

pub use config::Config;
pub use directory::{Directory, DEFAULT_WINDOW_DAYS};
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, DirectoryError, StorageError};
pub use models::{Record, UpcomingBirthday};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use shell::Shell;
