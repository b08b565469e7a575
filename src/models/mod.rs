//! Data model for the address book.
//!
//! - [`Record`]: one contact with its phones and optional birthday
//! - [`AddressBook`]: the collection of records, keyed by name

mod address_book;
mod record;

pub use address_book::AddressBook;
pub use record::Record;
