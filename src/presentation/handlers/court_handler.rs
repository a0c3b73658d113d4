use crate::{
    application::services::{CourtService, NavigationSync},
    domain::value_objects::{CourtId, MapBounds},
    presentation::dto::{
        Validate,
        court_dto::{CourtListResponse, CourtResponse, CreateCourtRequest, ListCourtsRequest, VoteRequest},
    },
    shared::error::AppError,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct CourtHandler {
    court_service: Arc<CourtService>,
    navigation: Arc<NavigationSync>,
}

impl CourtHandler {
    pub fn new(court_service: Arc<CourtService>, navigation: Arc<NavigationSync>) -> Self {
        Self {
            court_service,
            navigation,
        }
    }

    /// 一覧を読み込み、検索語で絞った結果を返す
    pub async fn list_courts(
        &self,
        request: ListCourtsRequest,
        cancel: &CancellationToken,
    ) -> Result<CourtListResponse, AppError> {
        let bounds = request
            .bounds
            .map(MapBounds::try_from)
            .transpose()
            .map_err(AppError::InvalidInput)?;

        let store = self.court_service.store();
        if let Some(query) = request.query {
            store.set_query(query);
        }
        self.court_service.load_courts(bounds, cancel).await?;

        let courts: Vec<CourtResponse> = store.read(|s| {
            s.visible()
                .into_iter()
                .cloned()
                .map(CourtResponse::from)
                .collect()
        });
        Ok(CourtListResponse {
            total: courts.len(),
            courts,
        })
    }

    pub async fn get_court(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<CourtResponse, AppError> {
        let id = parse_id(id)?;
        let court = self.court_service.resolve_court(&id, cancel).await?;
        Ok(CourtResponse::from(court))
    }

    pub async fn create_court(
        &self,
        request: CreateCourtRequest,
        cancel: &CancellationToken,
    ) -> Result<CourtResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let court = self
            .court_service
            .create_court(request.into(), cancel)
            .await?;
        Ok(CourtResponse::from(court))
    }

    pub async fn vote_court(
        &self,
        request: VoteRequest,
        cancel: &CancellationToken,
    ) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let id = parse_id(&request.court_id)?;
        self.court_service
            .vote_court(&id, request.vote_type, cancel)
            .await
    }

    /// 一覧のクリックなどでコートを選択し、URL を `/court/{id}` にする
    pub async fn select_court(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<CourtResponse, AppError> {
        let id = parse_id(id)?;
        let court = self.court_service.resolve_court(&id, cancel).await?;
        self.navigation.select_court(court.clone());
        Ok(CourtResponse::from(court))
    }

    pub fn clear_selection(&self) {
        self.navigation.clear_selection();
    }
}

fn parse_id(raw: &str) -> Result<CourtId, AppError> {
    CourtId::new(raw.to_string()).map_err(AppError::InvalidInput)
}
