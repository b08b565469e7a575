//! Domain value objects and types.
//!
//! This module contains the validated value types a contact is built from:
//! names, phone numbers and birthdays. Each type can only be obtained through
//! a constructor that checks its input, so a value that exists is valid.
//! The types share nothing beyond rendering through `Display`.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
