use teamfinder_core::Result;
use teamfinder_core::achievement::{Achievement, AchievementDraft, AchievementPatch};
use teamfinder_core::page::Page;
use teamfinder_core::user::User;
use teamfinder_interaction::ApiClient;

use crate::query::{QueryCache, QueryCell, STALE_DEFAULT, query_fn};

/// Achievements of the current user and of other users.
///
/// Profiles embed achievements, so every mutation also invalidates the
/// current-user query.
pub struct AchievementService {
    api: ApiClient,
    mine: QueryCell<Page<Achievement>>,
    by_user: QueryCache<u64, Page<Achievement>>,
    me: QueryCell<User>,
}

impl AchievementService {
    pub fn new(api: ApiClient, me: QueryCell<User>) -> Self {
        let client = api.clone();
        let mine = QueryCell::new(
            "achievements/me",
            STALE_DEFAULT,
            query_fn(move || {
                let client = client.clone();
                async move { client.list_my_achievements().await }
            }),
        );

        Self {
            api,
            mine,
            by_user: QueryCache::new("achievements", STALE_DEFAULT),
            me,
        }
    }

    pub async fn mine(&self) -> Result<Page<Achievement>> {
        self.mine.fetch().await
    }

    pub async fn of_user(&self, user_id: u64) -> Result<Page<Achievement>> {
        let api = self.api.clone();
        self.by_user
            .fetch(&user_id, move |id| {
                let id = *id;
                query_fn(move || {
                    let api = api.clone();
                    async move { api.list_user_achievements(id).await }
                })
            })
            .await
    }

    /// Creates an achievement; the draft is validated before any request.
    pub async fn create(&self, draft: AchievementDraft) -> Result<Achievement> {
        draft.validate(true)?;
        let achievement = self.api.create_achievement(draft).await?;
        self.invalidate_mine();
        Ok(achievement)
    }

    pub async fn edit(&self, id: u64, patch: &AchievementPatch) -> Result<()> {
        self.api.edit_achievement(id, patch).await?;
        self.invalidate_mine();
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api.delete_achievement(id).await?;
        self.invalidate_mine();
        Ok(())
    }

    fn invalidate_mine(&self) {
        self.mine.invalidate();
        self.me.invalidate();
    }
}
