use teamfinder_core::Result;
use teamfinder_core::skill::Skill;
use teamfinder_infrastructure::dto::SkillDto;

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /skills`
    pub async fn list_skills(&self) -> Result<Vec<Skill>> {
        let dtos: Vec<SkillDto> = self.get_json("/skills", &[]).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }
}
