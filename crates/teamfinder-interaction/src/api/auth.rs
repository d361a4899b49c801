use async_trait::async_trait;
use teamfinder_core::Result;
use teamfinder_core::auth::{AuthBackend, DevIdentity, Session};
use teamfinder_core::user::User;
use teamfinder_infrastructure::dto::{AuthResponseDto, TelegramInitDto};

use crate::client::ApiClient;

impl ApiClient {
    /// `POST /auth/dev-login` with a placeholder identity.
    pub async fn auth_dev(&self, identity: &DevIdentity) -> Result<Session> {
        let dto: AuthResponseDto = self.post_json("/auth/dev-login", identity).await?;
        Ok(dto.into())
    }

    /// `POST /auth/telegram`, exchanging the host's signed init data.
    pub async fn auth_telegram(&self, init_data: &str) -> Result<Session> {
        let body = TelegramInitDto { init_data };
        let dto: AuthResponseDto = self.post_json("/auth/telegram", &body).await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn fetch_profile(&self) -> Result<User> {
        self.get_me().await
    }

    async fn dev_login(&self, identity: &DevIdentity) -> Result<Session> {
        self.auth_dev(identity).await
    }

    async fn exchange_init_data(&self, init_data: &str) -> Result<Session> {
        self.auth_telegram(init_data).await
    }
}
