use teamfinder_core::Result;
use teamfinder_core::skill::Skill;
use teamfinder_interaction::ApiClient;

use crate::query::{QueryCell, STALE_PROFILE, query_fn};

/// The skill catalogue.
pub struct SkillService {
    skills: QueryCell<Vec<Skill>>,
}

impl SkillService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            skills: QueryCell::new(
                "skills",
                STALE_PROFILE,
                query_fn(move || {
                    let api = api.clone();
                    async move { api.list_skills().await }
                }),
            ),
        }
    }

    pub async fn skills(&self) -> Result<Vec<Skill>> {
        self.skills.fetch().await
    }

    /// Skills whose slug is in `slugs`, in catalogue order.
    pub async fn resolve(&self, slugs: &[String]) -> Result<Vec<Skill>> {
        let catalogue = self.skills().await?;
        Ok(catalogue
            .into_iter()
            .filter(|skill| slugs.contains(&skill.slug))
            .collect())
    }
}
