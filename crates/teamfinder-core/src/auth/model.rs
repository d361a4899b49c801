use serde::{Deserialize, Serialize};

use crate::user::User;

/// Local storage key holding the bearer token.
pub const AUTH_STORAGE_KEY: &str = "auth";

/// An authenticated session: the backend-issued bearer token and the
/// profile it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub profile: User,
}

/// Fixed identity exchanged through the dev-login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevIdentity {
    pub telegram_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
}

impl Default for DevIdentity {
    fn default() -> Self {
        Self {
            telegram_id: 0,
            username: "teamfinder".to_string(),
            first_name: "Team".to_string(),
            last_name: "Finder".to_string(),
            avatar_url:
                "https://storage.yandexcloud.net/teamfinder-hackathons-images/hackathons/1/cover.jpg"
                    .to_string(),
        }
    }
}
