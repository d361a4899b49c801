use serde::{Deserialize, Serialize};
use teamfinder_core::application::Application;
use teamfinder_core::role::Role;

use super::user::SkillDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: u64,
    pub hackathon_id: u64,
    pub user_id: u64,
    pub role: Role,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
    #[serde(default)]
    pub registration_end_date: Option<String>,
}

impl From<ApplicationDto> for Application {
    fn from(dto: ApplicationDto) -> Self {
        Application {
            id: dto.id,
            hackathon_id: dto.hackathon_id,
            user_id: dto.user_id,
            role: dto.role,
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            skills: dto.skills.into_iter().map(Into::into).collect(),
            registration_end_date: dto.registration_end_date,
        }
    }
}
