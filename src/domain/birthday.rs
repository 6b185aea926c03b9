//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` layout for birthdays, both when parsing and rendering.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields such as "1.2.2024".
static LAYOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$")
        .expect("Failed to compile birthday layout regex")
});

/// A contact's birthday.
///
/// Parsed from the fixed `DD.MM.YYYY` layout and stored as a calendar date.
///
/// # Example
///
/// ```
/// use contact_directory::domain::Birthday;
///
/// let birthday = Birthday::parse("29.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2024");
/// assert!(Birthday::parse("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not match the
    /// layout or does not name a real calendar date (year 1 or later).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !LAYOUT_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        match NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT) {
            // The calendar has no year zero.
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidDate(raw.to_string())),
        }
    }

    /// Get the parsed date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Project this birthday's month and day onto `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

// Serde support - serialize in the DD.MM.YYYY layout
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize through the same validation as user input
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
