//! The contact directory.
//!
//! A [`Directory`] owns every [`Record`] keyed by the record's name. The
//! backing map is private; callers go through the operations below, which
//! keep each key equal to the name of the record stored under it.

mod upcoming;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Record, UpcomingBirthday};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Default number of days [`Directory::get_upcoming_birthdays`] looks ahead.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// All contact records, keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is replaced and keeps its
    /// position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.records.insert(key, record) {
            Some(previous) => warn!(name = %previous.name(), "Replaced existing record"),
            None => debug!(count = self.records.len(), "Added record"),
        }
    }

    /// Look up a record by its exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by its exact name for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::RecordNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| DirectoryError::RecordNotFound(name.to_string()))?;
        debug!(count = self.records.len(), "Deleted record");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose birthday falls within `window_days` days of today
    /// (local time), with weekend dates moved to the following Monday.
    pub fn get_upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(Local::now().date_naive(), window_days)
    }

    /// Same as [`get_upcoming_birthdays`](Self::get_upcoming_birthdays)
    /// relative to an explicit `today`.
    pub fn upcoming_birthdays_on(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| upcoming::congratulation_for(record, today, window_days))
            .collect();

        debug!(
            %today,
            window_days,
            result_count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}
