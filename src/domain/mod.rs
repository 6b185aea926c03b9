//! Field value types.
//!
//! Type-safe wrappers for the scalar fields of a contact: its name, phone
//! numbers, and birthday. Each value is validated at construction time so an
//! invalid phone or date can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
