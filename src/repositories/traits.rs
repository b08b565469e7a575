use crate::error::StoreResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository for the persisted address book.
///
/// The whole book is loaded once at startup and written back in one piece
/// at shutdown; there is no partial persistence.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    async fn load(&self) -> StoreResult<AddressBook>;

    /// Replace the stored book with `book`.
    async fn save(&self, book: &AddressBook) -> StoreResult<()>;
}
