use serde::{Deserialize, Serialize};
use teamfinder_core::skill::Skill;
use teamfinder_core::user::{User, UserMainInfoPatch};

use super::achievement::AchievementDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDto {
    pub id: u64,
    pub slug: String,
    pub name: String,
}

impl From<SkillDto> for Skill {
    fn from(dto: SkillDto) -> Self {
        Skill {
            id: dto.id,
            slug: dto.slug,
            name: dto.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub telegram_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
    #[serde(default)]
    pub achievements: Vec<AchievementDto>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            telegram_id: dto.telegram_id,
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            avatar_url: dto.avatar_url,
            bio: dto.bio,
            city: dto.city,
            university: dto.university,
            link: dto.link,
            skills: dto.skills.into_iter().map(Into::into).collect(),
            achievements: dto.achievements.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `PATCH /users/me`. Absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl From<&UserMainInfoPatch> for UserPatchDto {
    fn from(patch: &UserMainInfoPatch) -> Self {
        UserPatchDto {
            bio: patch.bio.clone(),
            city: patch.city.clone(),
            university: patch.university.clone(),
            link: patch.link.clone(),
            skills: patch.skill_slugs.clone(),
        }
    }
}
