use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use teamfinder_core::Result;
use teamfinder_core::storage::LocalStorage;

/// Process-lifetime storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryLocalStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }
}

#[async_trait]
impl LocalStorage for MemoryLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}
