use teamfinder_core::Result;
use teamfinder_core::hackathon::Hackathon;
use teamfinder_core::page::{Page, PageRequest};
use teamfinder_infrastructure::dto::{HackathonDto, PageDto};

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /hackathons?q&limit&offset`
    pub async fn list_hackathons(&self, request: &PageRequest) -> Result<Page<Hackathon>> {
        let dto: PageDto<HackathonDto> = self
            .get_json("/hackathons", &request.to_query_pairs())
            .await?;
        dto.try_into_page()
    }

    /// `GET /hackathons/{id}`
    pub async fn get_hackathon(&self, id: u64) -> Result<Hackathon> {
        let dto: HackathonDto = self.get_json(&format!("/hackathons/{}", id), &[]).await?;
        Hackathon::try_from(dto)
    }
}
