use async_trait::async_trait;

use crate::auth::model::{DevIdentity, Session};
use crate::error::Result;
use crate::user::User;

/// Backend calls used by the auth bootstrap.
///
/// Implementations authenticate `fetch_profile` with whatever token is
/// currently in the shared [`AuthorizationSlot`](super::AuthorizationSlot).
/// A 401/403 must surface as `TeamfinderError::Unauthorized`.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// `GET /users/me`
    async fn fetch_profile(&self) -> Result<User>;

    /// `POST /auth/dev-login`
    async fn dev_login(&self, identity: &DevIdentity) -> Result<Session>;

    /// `POST /auth/telegram`
    async fn exchange_init_data(&self, init_data: &str) -> Result<Session>;
}
