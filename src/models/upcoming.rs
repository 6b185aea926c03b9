//! Result rows of the upcoming-birthday query.

use serde::Serialize;

/// `chrono` layout of [`UpcomingBirthday::congratulation_date`].
pub const CONGRATULATION_FORMAT: &str = "%d-%m-%Y";

/// A contact to congratulate and the working day to do it on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date as `DD-MM-YYYY`
    pub congratulation_date: String,
}
