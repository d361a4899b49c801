use teamfinder_core::Result;
use teamfinder_core::achievement::{Achievement, AchievementDraft, AchievementPatch};
use teamfinder_core::page::Page;
use teamfinder_infrastructure::dto::{
    AchievementCreateDto, AchievementDto, AchievementPatchDto, PageDto,
};

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /users/me/achievements`
    pub async fn list_my_achievements(&self) -> Result<Page<Achievement>> {
        let dto: PageDto<AchievementDto> = self.get_json("/users/me/achievements", &[]).await?;
        Ok(dto.into_page())
    }

    /// `GET /users/{id}/achievements`
    pub async fn list_user_achievements(&self, user_id: u64) -> Result<Page<Achievement>> {
        let dto: PageDto<AchievementDto> = self
            .get_json(&format!("/users/{}/achievements", user_id), &[])
            .await?;
        Ok(dto.into_page())
    }

    /// `POST /users/me/achievements`; the draft is validated first.
    pub async fn create_achievement(&self, draft: AchievementDraft) -> Result<Achievement> {
        let (hackathon_id, role, place) = draft.into_create()?;
        let body = AchievementCreateDto {
            hackathon_id,
            role,
            place,
        };
        let dto: AchievementDto = self.post_json("/users/me/achievements", &body).await?;
        Ok(dto.into())
    }

    /// `PATCH /achievements/{id}`
    pub async fn edit_achievement(&self, id: u64, patch: &AchievementPatch) -> Result<()> {
        let body = AchievementPatchDto::from(patch);
        self.patch_empty(&format!("/achievements/{}", id), &body).await
    }

    /// `DELETE /achievements/{id}`
    pub async fn delete_achievement(&self, id: u64) -> Result<()> {
        self.delete(&format!("/achievements/{}", id)).await
    }
}
