//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, the accepted format does not.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date parsed from `DD.MM.YYYY`.
///
/// The date is stored as a [`NaiveDate`], not as text, so date arithmetic on
/// it is exact. It renders back to the same `DD.MM.YYYY` form.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// assert!(Birthday::new("1990-03-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// Day and month must be zero-padded to two digits and the year must have
    /// four digits. The result must be a real calendar date, so `29.02.2023`
    /// is rejected while `29.02.2024` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not parse.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The stored date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is celebrated on in `year`.
    ///
    /// A 29 February birthday is celebrated on 28 February in years that are
    /// not leap years.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    /// Whole days from `today` until the next anniversary; zero when it is today.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
