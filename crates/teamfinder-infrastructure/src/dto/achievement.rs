use serde::{Deserialize, Serialize};
use teamfinder_core::achievement::{Achievement, AchievementPatch, AchievementPlace};

/// Achievement as returned both inside profiles and by the achievement
/// list endpoints; the two shapes differ only in optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDto {
    pub id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub hackathon_id: Option<u64>,
    #[serde(default)]
    pub hackathon_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
}

impl From<AchievementDto> for Achievement {
    fn from(dto: AchievementDto) -> Self {
        let place = dto.place.as_deref().and_then(|raw| {
            let parsed = AchievementPlace::from_wire(raw);
            if parsed.is_none() {
                tracing::warn!("[AchievementDto] Unknown place '{}' for achievement {}", raw, dto.id);
            }
            parsed
        });

        Achievement {
            id: dto.id,
            hackathon_id: dto.hackathon_id,
            hackathon_name: dto.hackathon_name,
            role: dto.role,
            place,
        }
    }
}

/// Body of `POST /users/me/achievements`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementCreateDto {
    pub hackathon_id: u64,
    pub role: String,
    pub place: AchievementPlace,
}

/// Body of `PATCH /achievements/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AchievementPatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<AchievementPlace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hackathon_id: Option<u64>,
}

impl From<&AchievementPatch> for AchievementPatchDto {
    fn from(patch: &AchievementPatch) -> Self {
        AchievementPatchDto {
            role: patch.role.clone(),
            place: patch.place,
            hackathon_id: patch.hackathon_id,
        }
    }
}
