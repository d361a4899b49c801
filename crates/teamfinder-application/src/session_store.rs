//! Session store: the persisted bearer token and the request default that
//! mirrors it.

use std::sync::Arc;
use teamfinder_core::Result;
use teamfinder_core::auth::{AUTH_STORAGE_KEY, AuthorizationSlot, Session};
use teamfinder_core::storage::LocalStorage;
use teamfinder_core::user::User;

/// Owns the bearer token for the lifetime of the process.
///
/// The token is persisted under [`AUTH_STORAGE_KEY`] and mirrored into the
/// [`AuthorizationSlot`] shared with the HTTP client. This store is the
/// slot's only writer.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn LocalStorage>,
    authorization: AuthorizationSlot,
}

impl SessionStore {
    /// Creates a store over `storage`, writing into `authorization`.
    ///
    /// # Arguments
    ///
    /// * `storage` - Durable key/value storage
    /// * `authorization` - The bearer slot the HTTP client reads
    pub fn new(storage: Arc<dyn LocalStorage>, authorization: AuthorizationSlot) -> Self {
        Self {
            storage,
            authorization,
        }
    }

    pub fn authorization(&self) -> &AuthorizationSlot {
        &self.authorization
    }

    /// Reads the persisted token and, when present, makes it the request
    /// default.
    ///
    /// Unreadable storage is reported and treated as "no token".
    pub async fn get_token(&self) -> Option<String> {
        let token = match self.storage.get_item(AUTH_STORAGE_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("[SessionStore] Failed to read stored token: {}", e);
                None
            }
        };

        if let Some(token) = &token {
            self.authorization.set(token.as_str());
        }
        token
    }

    /// Persists `token` and makes it the request default.
    pub async fn set_token(&self, token: &str, profile: User) -> Result<Session> {
        self.storage.set_item(AUTH_STORAGE_KEY, token).await?;
        self.authorization.set(token);
        tracing::info!("[SessionStore] Session stored for user {}", profile.id);

        Ok(Session {
            access_token: token.to_string(),
            profile,
        })
    }

    /// Removes the persisted token and un-sets the request default.
    ///
    /// The request default is cleared first so no later request can carry
    /// the old token, even if the storage removal fails.
    pub async fn clear(&self) -> Result<()> {
        self.authorization.clear();
        self.storage.remove_item(AUTH_STORAGE_KEY).await?;
        tracing::info!("[SessionStore] Session cleared");
        Ok(())
    }
}
