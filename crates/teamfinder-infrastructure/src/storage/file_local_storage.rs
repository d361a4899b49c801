//! Local storage persisted as a single JSON object on disk.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use teamfinder_core::storage::LocalStorage;
use teamfinder_core::{Result, TeamfinderError};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::paths::TeamfinderPaths;

/// Errors that can occur during local storage operations.
#[derive(Debug)]
pub enum LocalStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// The file exists but is not a JSON object of strings.
    ParseError(serde_json::Error),
    /// Data directory not found.
    DataDirNotFound,
}

impl std::fmt::Display for LocalStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            LocalStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            LocalStorageError::DataDirNotFound => {
                write!(f, "Could not determine data directory")
            }
        }
    }
}

impl std::error::Error for LocalStorageError {}

impl From<std::io::Error> for LocalStorageError {
    fn from(e: std::io::Error) -> Self {
        LocalStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for LocalStorageError {
    fn from(e: serde_json::Error) -> Self {
        LocalStorageError::ParseError(e)
    }
}

impl From<LocalStorageError> for TeamfinderError {
    fn from(e: LocalStorageError) -> Self {
        match e {
            LocalStorageError::IoError(io) => io.into(),
            LocalStorageError::ParseError(json) => json.into(),
            LocalStorageError::DataDirNotFound => {
                TeamfinderError::config("Could not determine data directory")
            }
        }
    }
}

/// Key/value storage backed by one JSON file.
///
/// Responsibilities:
/// - Treat a missing or empty file as an empty store
/// - Serialize writers within the process
/// - Replace the file atomically (tmp file + fsync + rename)
/// - Replace an unparseable file on the next write
pub struct FileLocalStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLocalStorage {
    /// Storage at the default location (`<data_dir>/teamfinder/storage.json`).
    pub fn new() -> std::result::Result<Self, LocalStorageError> {
        let path = TeamfinderPaths::storage_file().map_err(|_| LocalStorageError::DataDirNotFound)?;
        Ok(Self::with_path(path))
    }

    /// Storage at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> std::result::Result<BTreeMap<String, String>, LocalStorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Like `read_all`, but an unparseable file reads as empty so the next
    /// write replaces it. The flag reports whether that happened.
    async fn read_for_write(
        &self,
    ) -> std::result::Result<(BTreeMap<String, String>, bool), LocalStorageError> {
        match self.read_all().await {
            Ok(items) => Ok((items, false)),
            Err(LocalStorageError::ParseError(e)) => {
                tracing::warn!(
                    "[FileLocalStorage] Overwriting unreadable {:?}: {}",
                    self.path,
                    e
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(
        &self,
        items: &BTreeMap<String, String>,
    ) -> std::result::Result<(), LocalStorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(items)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.read_all().await?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut items, _) = self.read_for_write().await?;
        items.insert(key.to_string(), value.to_string());
        self.persist(&items).await?;
        tracing::debug!("[FileLocalStorage] Stored key '{}' in {:?}", key, self.path);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut items, corrupt) = self.read_for_write().await?;
        if items.remove(key).is_some() || corrupt {
            self.persist(&items).await?;
            tracing::debug!("[FileLocalStorage] Removed key '{}' from {:?}", key, self.path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::with_path(temp_dir.path().join("storage.json"));

        assert_eq!(storage.get_item("auth").await.unwrap(), None);
        storage.remove_item("auth").await.unwrap();
    }

    #[tokio::test]
    async fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        let storage = FileLocalStorage::with_path(path.clone());
        storage.set_item("auth", "abc").await.unwrap();
        storage.set_item("theme", "dark").await.unwrap();

        let reopened = FileLocalStorage::with_path(path);
        assert_eq!(reopened.get_item("auth").await.unwrap().as_deref(), Some("abc"));

        reopened.remove_item("auth").await.unwrap();
        assert_eq!(storage.get_item("auth").await.unwrap(), None);
        assert_eq!(storage.get_item("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = FileLocalStorage::with_path(path);
        let err = storage.get_item("auth").await.unwrap_err();
        assert!(matches!(err, TeamfinderError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_set_item_replaces_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = FileLocalStorage::with_path(path.clone());
        storage.set_item("auth", "fresh").await.unwrap();

        assert_eq!(storage.get_item("auth").await.unwrap().as_deref(), Some("fresh"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_remove_item_clears_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = FileLocalStorage::with_path(path);
        storage.remove_item("auth").await.unwrap();

        assert_eq!(storage.get_item("auth").await.unwrap(), None);
    }
}
