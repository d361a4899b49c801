use std::fmt;
use std::sync::{Arc, RwLock};

/// The bearer token attached to every outgoing request.
///
/// One slot is shared between the HTTP client, which reads it on every
/// request, and the session store, which is its only writer. Clones share
/// the same underlying value, so a `clear()` is seen by the very next request.
#[derive(Clone, Default)]
pub struct AuthorizationSlot {
    token: Arc<RwLock<Option<String>>>,
}

impl AuthorizationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_set(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Value for the `Authorization` header, if a token is set.
    pub fn header_value(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }
}

impl fmt::Debug for AuthorizationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let slot = AuthorizationSlot::new();
        let reader = slot.clone();

        slot.set("abc");
        assert_eq!(reader.header_value().as_deref(), Some("Bearer abc"));

        slot.clear();
        assert!(!reader.is_set());
        assert!(reader.header_value().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let slot = AuthorizationSlot::new();
        slot.set("secret-token");
        assert!(!format!("{:?}", slot).contains("secret-token"));
    }
}
