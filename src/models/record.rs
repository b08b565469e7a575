//! Record aggregate: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and duplicates
/// are allowed. Phone and birthday values can only be set from validated
/// domain types, so a record never holds malformed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
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

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Removing an unknown number is a no-op.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// When nothing matches `old` the record is left untouched and no error is
    /// returned, even if `new` is malformed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if at least one phone matches
    /// and `new` is not a valid phone. The record is not modified in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Ok(());
        }

        let replacement = Phone::new(new)?;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
        }
        Ok(())
    }

    /// Replace the first phone with `new`, or add it if the record has none.
    pub fn replace_primary_phone(&mut self, new: &str) -> Result<(), ValidationError> {
        let replacement = Phone::new(new)?;
        match self.phones.first_mut() {
            Some(primary) => *primary = replacement,
            None => self.phones.push(replacement),
        }
        Ok(())
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Set the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join(", "))
    }
}
