use serde::{Deserialize, Serialize};
use teamfinder_core::auth::Session;

use super::user::UserDto;

/// Response of both `/auth/dev-login` and `/auth/telegram`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub profile: UserDto,
}

impl From<AuthResponseDto> for Session {
    fn from(dto: AuthResponseDto) -> Self {
        Session {
            access_token: dto.access_token,
            profile: dto.profile.into(),
        }
    }
}

/// Body of `POST /auth/telegram`.
#[derive(Debug, Clone, Serialize)]
pub struct TelegramInitDto<'a> {
    pub init_data: &'a str,
}
