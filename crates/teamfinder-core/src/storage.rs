//! Durable key/value storage trait.

use async_trait::async_trait;

use crate::error::Result;

/// Durable string storage keyed by fixed names, surviving restarts.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
