use crate::domain::entities::{Court, CourtDraft};
use crate::domain::value_objects::{CourtId, MapBounds, VoteType};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// コート API（一覧・詳細・登録・投票）
#[async_trait]
pub trait CourtApi: Send + Sync {
    /// 範囲指定があればその中のコートのみ返す
    async fn list_courts(&self, bounds: Option<MapBounds>) -> Result<Vec<Court>, AppError>;

    /// 見つからない場合は `AppError::NotFound`
    async fn get_court(&self, id: &CourtId) -> Result<Court, AppError>;

    async fn create_court(&self, draft: &CourtDraft) -> Result<Court, AppError>;

    async fn vote_court(&self, id: &CourtId, vote: VoteType) -> Result<(), AppError>;
}
