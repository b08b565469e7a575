//! Contact service layer.
//!
//! Business logic behind the bot commands: adding contacts, changing phones,
//! storing birthdays and listing upcoming ones.

use crate::birthdays::upcoming_birthdays;
use crate::domain::{Birthday, Name};
use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Contact service trait for business operations.
///
/// Operations run to completion one at a time against a single book.
pub trait ContactService {
    /// Add `phone` to the contact called `name`, creating the contact if needed.
    fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<()>;

    /// Replace the primary phone of `name`.
    ///
    /// Does nothing when the contact does not exist.
    fn change_phone(&mut self, name: &str, new_phone: &str) -> ContactResult<()>;

    /// Look up the record for `name`.
    fn get_phone(&self, name: &str) -> Option<&Record>;

    /// Every contact, keyed by name.
    fn list_all(&self) -> &AddressBook;

    /// Parse `birthday` and store it on the contact called `name`.
    fn add_birthday(&mut self, name: &str, birthday: &str) -> ContactResult<()>;

    /// Birthday of `name`, or `None` if the contact has not set one.
    fn show_birthday(&self, name: &str) -> ContactResult<Option<&Birthday>>;

    /// Names of contacts whose birthday is 1 to 7 days after `today`.
    fn upcoming_birthday_names_on(&self, today: NaiveDate) -> Vec<Name>;

    /// Names of contacts whose birthday falls in the coming week.
    fn upcoming_birthday_names(&self) -> Vec<Name> {
        self.upcoming_birthday_names_on(Local::now().date_naive())
    }
}

/// Default implementation of ContactService, owning the address book.
#[derive(Debug, Default)]
pub struct ContactServiceImpl {
    book: AddressBook,
}

impl ContactServiceImpl {
    /// Create a contact service over an existing book.
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    /// Give the book back, e.g. for saving at shutdown.
    pub fn into_book(self) -> AddressBook {
        self.book
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            debug!(name, "Added phone to existing contact");
            return Ok(());
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        debug!(name, "Created contact");
        Ok(())
    }

    fn change_phone(&mut self, name: &str, new_phone: &str) -> ContactResult<()> {
        match self.book.find_mut(name) {
            Some(record) => {
                record.replace_primary_phone(new_phone)?;
                debug!(name, "Changed primary phone");
            }
            None => debug!(name, "Ignoring phone change for unknown contact"),
        }
        Ok(())
    }

    fn get_phone(&self, name: &str) -> Option<&Record> {
        self.book.find(name)
    }

    fn list_all(&self) -> &AddressBook {
        &self.book
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> ContactResult<()> {
        let record = self.book.find_mut(name).ok_or(ContactError::NotFound)?;
        record.add_birthday(Birthday::new(birthday)?);
        debug!(name, "Set birthday");
        Ok(())
    }

    fn show_birthday(&self, name: &str) -> ContactResult<Option<&Birthday>> {
        self.book
            .find(name)
            .map(Record::birthday)
            .ok_or(ContactError::NotFound)
    }

    fn upcoming_birthday_names_on(&self, today: NaiveDate) -> Vec<Name> {
        upcoming_birthdays(&self.book, today)
            .into_iter()
            .map(|record| record.name().clone())
            .collect()
    }
}
