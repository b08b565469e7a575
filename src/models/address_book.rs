//! AddressBook: every record, keyed by contact name.

use super::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// All records of a session, keyed by the raw name string.
///
/// Every entry satisfies `record.name().as_str() == key`; the only way in is
/// [`AddressBook::add_record`], which derives the key from the record.
/// Iteration is in name order.
///
/// The book serializes as a list of records and is rebuilt through
/// `add_record` when read back, so a name repeated in stored data keeps its
/// last record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    ///
    /// Returns the replaced record. There is no merge: the old phones and
    /// birthday are dropped with it.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All (name, record) pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a String, &'a Record);
    type IntoIter = btree_map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}
