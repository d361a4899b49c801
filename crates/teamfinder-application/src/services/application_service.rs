use teamfinder_core::Result;
use teamfinder_core::application::{Application, ApplicationRequest};
use teamfinder_core::page::Page;
use teamfinder_core::role::Role;
use teamfinder_interaction::ApiClient;

use crate::query::{QueryCache, QueryCell, STALE_DEFAULT, query_fn};

/// Applications to hackathons: the current user's own and each
/// hackathon's pool.
pub struct ApplicationService {
    api: ApiClient,
    mine: QueryCell<Page<Application>>,
    by_hackathon: QueryCache<u64, Page<Application>>,
    mine_by_hackathon: QueryCache<u64, Application>,
}

impl ApplicationService {
    pub fn new(api: ApiClient) -> Self {
        let client = api.clone();
        let mine = QueryCell::new(
            "applications/me",
            STALE_DEFAULT,
            query_fn(move || {
                let client = client.clone();
                async move { client.list_my_applications().await }
            }),
        );

        Self {
            api,
            mine,
            by_hackathon: QueryCache::new("applications", STALE_DEFAULT),
            mine_by_hackathon: QueryCache::new("applications/me/hackathon", STALE_DEFAULT),
        }
    }

    pub async fn mine(&self) -> Result<Page<Application>> {
        self.mine.fetch().await
    }

    pub async fn for_hackathon(&self, hackathon_id: u64) -> Result<Page<Application>> {
        let api = self.api.clone();
        self.by_hackathon
            .fetch(&hackathon_id, move |id| {
                let id = *id;
                query_fn(move || {
                    let api = api.clone();
                    async move { api.list_hackathon_applications(id).await }
                })
            })
            .await
    }

    /// The current user's application to a hackathon; a 404 means none.
    pub async fn mine_for_hackathon(&self, hackathon_id: u64) -> Result<Option<Application>> {
        let api = self.api.clone();
        let result = self
            .mine_by_hackathon
            .fetch(&hackathon_id, move |id| {
                let id = *id;
                query_fn(move || {
                    let api = api.clone();
                    async move { api.get_my_hackathon_application(id).await }
                })
            })
            .await;

        match result {
            Ok(application) => Ok(Some(application)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get(&self, id: u64) -> Result<Application> {
        self.api.get_application(id).await
    }

    pub async fn apply(&self, hackathon_id: u64, role: Role) -> Result<Application> {
        let application = self
            .api
            .create_application(hackathon_id, &ApplicationRequest::new(role))
            .await?;
        self.invalidate_hackathon(hackathon_id);
        Ok(application)
    }

    pub async fn change_role(&self, id: u64, role: Role) -> Result<Application> {
        let application = self
            .api
            .edit_application(id, &ApplicationRequest::new(role))
            .await?;
        self.invalidate_hackathon(application.hackathon_id);
        Ok(application)
    }

    pub async fn withdraw(&self, id: u64) -> Result<()> {
        self.api.delete_application(id).await?;
        self.mine.invalidate();
        self.by_hackathon.invalidate_all();
        self.mine_by_hackathon.invalidate_all();
        Ok(())
    }

    fn invalidate_hackathon(&self, hackathon_id: u64) {
        self.mine.invalidate();
        self.by_hackathon.invalidate(&hackathon_id);
        self.mine_by_hackathon.invalidate(&hackathon_id);
    }
}
