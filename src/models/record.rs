//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{DirectoryError, DirectoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact in the directory.
///
/// Phones keep their insertion order and duplicates are allowed. Every phone
/// and the birthday are validated before they are stored, so a failed
/// mutation leaves the record as it was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> DirectoryResult<()> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an absent phone is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        debug!(
            name = %self.name,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::PhoneNotFound` if no phone equals `old`
    /// - `DirectoryError::Validation` if `new` is not a valid phone; the old
    ///   phone is kept
    pub fn edit_phone(&mut self, old: &str, new: &str) -> DirectoryResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| DirectoryError::PhoneNotFound(old.to_string()))?;

        let replacement = Phone::new(new)?;
        debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and store the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> DirectoryResult<()> {
        let birthday = Birthday::parse(birthday)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("John");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_phones_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        let result = record.add_phone("12345");
        assert_eq!(
            result,
            Err(DirectoryError::Validation(ValidationError::InvalidPhone(
                "12345".to_string()
            )))
        );
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_removes_every_match() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = record_with_phones(&["1111111111"]);
        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = record_with_phones(&["1234567890"]);
        record.edit_phone("1234567890", "0987654321").unwrap();
        assert!(record.find_phone("0987654321").is_some());
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_edit_phone_replaces_first_match_in_place() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["3333333333", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_missing_phone_fails() {
        let mut record = record_with_phones(&["1234567890"]);
        let result = record.edit_phone("0000000000", "1111111111");
        assert_eq!(
            result,
            Err(DirectoryError::PhoneNotFound("0000000000".to_string()))
        );
        assert_eq!(record, record_with_phones(&["1234567890"]));
    }

    #[test]
    fn test_edit_phone_to_invalid_keeps_old() {
        let mut record = record_with_phones(&["1234567890"]);
        let result = record.edit_phone("1234567890", "bad");
        assert!(matches!(result, Err(DirectoryError::Validation(_))));
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn test_add_birthday() {
        let mut record = Record::new("John");
        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "15.06.1990");
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = Record::new("John");
        record.add_birthday("15.06.1990").unwrap();
        assert!(record.add_birthday("31.02.1990").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "15.06.1990");
    }

    #[test]
    fn test_display() {
        let record = record_with_phones(&["1234567890", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890, 5555555555"
        );
        assert_eq!(Record::new("Jane").to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John","phones":["123"],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
