//! Data models for directory entries.
//!
//! This module contains the contact record and the rows produced by the
//! upcoming-birthday query.

pub mod record;
pub mod upcoming;

pub use record::Record;
pub use upcoming::UpcomingBirthday;
