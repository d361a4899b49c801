use async_trait::async_trait;
use teamfinder_core::Result;
use teamfinder_core::user::{ProfileBackend, User, UserMainInfoPatch};
use teamfinder_infrastructure::dto::{UserDto, UserPatchDto};

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /users/me`
    pub async fn get_me(&self) -> Result<User> {
        let dto: UserDto = self.get_json("/users/me", &[]).await?;
        Ok(dto.into())
    }

    /// `GET /users/{id}`
    pub async fn get_user(&self, id: u64) -> Result<User> {
        let dto: UserDto = self.get_json(&format!("/users/{}", id), &[]).await?;
        Ok(dto.into())
    }

    /// `PATCH /users/me`
    pub async fn edit_user_main_info(&self, patch: &UserMainInfoPatch) -> Result<User> {
        let body = UserPatchDto::from(patch);
        let dto: UserDto = self.patch_json("/users/me", &body).await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl ProfileBackend for ApiClient {
    async fn edit_main_info(&self, patch: &UserMainInfoPatch) -> Result<User> {
        self.edit_user_main_info(patch).await
    }
}
