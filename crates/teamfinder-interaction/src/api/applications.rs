use teamfinder_core::Result;
use teamfinder_core::application::{Application, ApplicationRequest};
use teamfinder_core::page::Page;
use teamfinder_infrastructure::dto::{ApplicationDto, PageDto};

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /hackathons/{id}/applications`
    pub async fn list_hackathon_applications(&self, hackathon_id: u64) -> Result<Page<Application>> {
        let dto: PageDto<ApplicationDto> = self
            .get_json(&format!("/hackathons/{}/applications", hackathon_id), &[])
            .await?;
        Ok(dto.into_page())
    }

    /// `GET /hackathons/{id}/applications/me`
    pub async fn get_my_hackathon_application(&self, hackathon_id: u64) -> Result<Application> {
        let dto: ApplicationDto = self
            .get_json(&format!("/hackathons/{}/applications/me", hackathon_id), &[])
            .await?;
        Ok(dto.into())
    }

    /// `POST /hackathons/{id}/applications`
    pub async fn create_application(
        &self,
        hackathon_id: u64,
        request: &ApplicationRequest,
    ) -> Result<Application> {
        let dto: ApplicationDto = self
            .post_json(&format!("/hackathons/{}/applications", hackathon_id), request)
            .await?;
        Ok(dto.into())
    }

    /// `GET /me/applications`
    pub async fn list_my_applications(&self) -> Result<Page<Application>> {
        let dto: PageDto<ApplicationDto> = self.get_json("/me/applications", &[]).await?;
        Ok(dto.into_page())
    }

    /// `GET /applications/{id}`
    pub async fn get_application(&self, id: u64) -> Result<Application> {
        let dto: ApplicationDto = self.get_json(&format!("/applications/{}", id), &[]).await?;
        Ok(dto.into())
    }

    /// `PATCH /applications/{id}`
    pub async fn edit_application(&self, id: u64, request: &ApplicationRequest) -> Result<Application> {
        let dto: ApplicationDto = self
            .patch_json(&format!("/applications/{}", id), request)
            .await?;
        Ok(dto.into())
    }

    /// `DELETE /applications/{id}`
    pub async fn delete_application(&self, id: u64) -> Result<()> {
        self.delete(&format!("/applications/{}", id)).await
    }
}
