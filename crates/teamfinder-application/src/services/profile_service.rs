use std::sync::Arc;
use std::time::Duration;
use teamfinder_core::Result;
use teamfinder_core::user::{User, UserMainInfoPatch};
use teamfinder_interaction::ApiClient;

use crate::autosave::{BioEditor, SkillsEditor};
use crate::query::{QueryCache, QueryCell, STALE_PROFILE, query_fn};

/// The current user's profile and other users' public profiles.
pub struct ProfileService {
    api: ApiClient,
    me: QueryCell<User>,
    users: QueryCache<u64, User>,
}

impl ProfileService {
    pub fn new(api: ApiClient) -> Self {
        let client = api.clone();
        let me = QueryCell::new(
            "user/me",
            STALE_PROFILE,
            query_fn(move || {
                let client = client.clone();
                async move { client.get_me().await }
            }),
        );

        Self {
            api,
            me,
            users: QueryCache::new("user", STALE_PROFILE),
        }
    }

    /// The `me` query, shared with the editors.
    pub fn me_query(&self) -> QueryCell<User> {
        self.me.clone()
    }

    pub async fn me(&self) -> Result<User> {
        self.me.fetch().await
    }

    pub async fn user(&self, id: u64) -> Result<User> {
        let api = self.api.clone();
        self.users
            .fetch(&id, move |id| {
                let id = *id;
                query_fn(move || {
                    let api = api.clone();
                    async move { api.get_user(id).await }
                })
            })
            .await
    }

    /// Validates and sends a partial update, then stores the returned profile.
    pub async fn edit_main_info(&self, patch: &UserMainInfoPatch) -> Result<User> {
        patch.validate()?;
        let user = self.api.edit_user_main_info(patch).await?;
        self.me.set_data(user.clone());
        self.users.invalidate(&user.id);
        Ok(user)
    }

    pub fn bio_editor(&self, profile: &User, delay: Duration) -> BioEditor {
        BioEditor::new(profile, Arc::new(self.api.clone()), self.me.clone(), delay)
    }

    pub fn skills_editor(&self, profile: &User) -> SkillsEditor {
        SkillsEditor::new(profile, Arc::new(self.api.clone()), self.me.clone())
    }

    /// Drops every cached profile.
    pub fn reset(&self) {
        self.me.reset();
        self.users.clear();
    }
}
