use async_trait::async_trait;

use crate::error::Result;
use crate::user::{User, UserMainInfoPatch};

/// Backend calls behind the profile editors.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// `PATCH /users/me`; returns the updated profile.
    async fn edit_main_info(&self, patch: &UserMainInfoPatch) -> Result<User>;
}
