use crate::error::StoreResult;
use crate::models::AddressBook;
use crate::repositories::traits::BookStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Address book repository backed by a JSON file.
///
/// The file holds a list of records. Saving writes a sibling temporary file
/// first and renames it over the target, so an interrupted save leaves the
/// previous book intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl BookStore for JsonFileStore {
    async fn load(&self) -> StoreResult<AddressBook> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
        Ok(book)
    }

    async fn save(&self, book: &AddressBook) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(book)?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}
