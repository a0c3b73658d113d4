use async_trait::async_trait;
use mockall::mock;

use courtmap_lib::application::ports::CourtApi;
use courtmap_lib::domain::entities::{Court, CourtDraft};
use courtmap_lib::domain::value_objects::{CourtId, MapBounds, VoteType};
use courtmap_lib::shared::error::AppError;

mock! {
    pub CourtApiPort {}

    #[async_trait]
    impl CourtApi for CourtApiPort {
        async fn list_courts(&self, bounds: Option<MapBounds>) -> Result<Vec<Court>, AppError>;
        async fn get_court(&self, id: &CourtId) -> Result<Court, AppError>;
        async fn create_court(&self, draft: &CourtDraft) -> Result<Court, AppError>;
        async fn vote_court(&self, id: &CourtId, vote: VoteType) -> Result<(), AppError>;
    }
}
