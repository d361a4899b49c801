use teamfinder_core::Result;
use teamfinder_core::hackathon::Hackathon;
use teamfinder_core::page::{Page, PageRequest};
use teamfinder_interaction::ApiClient;

use crate::query::{QueryCache, STALE_DEFAULT, query_fn};

/// Hackathon lists (per search/page) and details (per id).
pub struct HackathonService {
    api: ApiClient,
    lists: QueryCache<PageRequest, Page<Hackathon>>,
    details: QueryCache<u64, Hackathon>,
}

impl HackathonService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            lists: QueryCache::new("hackathons", STALE_DEFAULT),
            details: QueryCache::new("hackathon", STALE_DEFAULT),
        }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<Hackathon>> {
        let api = self.api.clone();
        self.lists
            .fetch(request, move |request| {
                let request = request.clone();
                query_fn(move || {
                    let api = api.clone();
                    let request = request.clone();
                    async move { api.list_hackathons(&request).await }
                })
            })
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Hackathon> {
        let api = self.api.clone();
        self.details
            .fetch(&id, move |id| {
                let id = *id;
                query_fn(move || {
                    let api = api.clone();
                    async move { api.get_hackathon(id).await }
                })
            })
            .await
    }

    pub fn invalidate(&self) {
        self.lists.invalidate_all();
        self.details.invalidate_all();
    }
}
