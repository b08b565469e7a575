use async_trait::async_trait;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book store for testing.
///
/// Keeps the "persisted" book in memory, tracks method calls for
/// verification and can be told to fail on save.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    saved: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(book);
        store
    }

    /// The most recently saved book, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl BookStore for MockBookStore {
    async fn load(&self) -> StoreResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved_book().unwrap_or_default())
    }

    async fn save(&self, book: &AddressBook) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }

        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
