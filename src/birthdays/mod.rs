//! Upcoming-birthday query.
//!
//! A pure function over an [`AddressBook`]: given the current date, find the
//! records whose next birthday falls within the coming week.

use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// First day (inclusive) of the lookahead window, counted from today.
pub const WINDOW_START_DAYS: i64 = 1;

/// Last day (inclusive) of the lookahead window, counted from today.
pub const WINDOW_END_DAYS: i64 = 7;

/// Records whose next birthday is 1 to 7 days after `today`.
///
/// Only month and day of the stored birthday matter; the birth year is
/// ignored. A birthday that is today is not upcoming. Results follow the
/// book's iteration order.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<&Record> {
    book.records()
        .filter(|record| {
            record.birthday().is_some_and(|birthday| {
                let days = birthday.days_until(today);
                (WINDOW_START_DAYS..=WINDOW_END_DAYS).contains(&days)
            })
        })
        .collect()
}
