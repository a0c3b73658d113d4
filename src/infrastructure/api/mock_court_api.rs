use crate::application::ports::CourtApi;
use crate::domain::constants::CURRENT_USER;
use crate::domain::entities::{Court, CourtDraft, Vote};
use crate::domain::value_objects::{CourtId, CourtStatus, MapBounds, VoteType};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

struct SampleCourt {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    latitude: f64,
    longitude: f64,
    review: &'static str,
    is_indoor: bool,
    status: CourtStatus,
    day: u32,
}

const SAMPLE_COURTS: [SampleCourt; 5] = [
    SampleCourt {
        id: "1",
        name: "서울농구장",
        address: "서울특별시 강남구 테헤란로 123",
        latitude: 37.5665,
        longitude: 126.978,
        review: "좋은 농구장입니다!",
        is_indoor: true,
        status: CourtStatus::Approved,
        day: 1,
    },
    SampleCourt {
        id: "2",
        name: "강남농구장",
        address: "서울특별시 강남구 역삼동 456",
        latitude: 37.5013,
        longitude: 127.0396,
        review: "실외 농구장이지만 조명이 잘 되어있어요",
        is_indoor: false,
        status: CourtStatus::Approved,
        day: 2,
    },
    SampleCourt {
        id: "3",
        name: "홍대농구장",
        address: "서울특별시 마포구 홍대로 789",
        latitude: 37.5572,
        longitude: 126.9234,
        review: "대학가 근처라 젊은 사람들이 많아요",
        is_indoor: true,
        status: CourtStatus::Pending,
        day: 3,
    },
    SampleCourt {
        id: "4",
        name: "잠실농구장",
        address: "서울특별시 송파구 올림픽로 321",
        latitude: 37.5139,
        longitude: 127.1006,
        review: "올림픽공원 근처의 넓은 농구장",
        is_indoor: false,
        status: CourtStatus::Approved,
        day: 4,
    },
    SampleCourt {
        id: "5",
        name: "강북농구장",
        address: "서울특별시 강북구 도봉로 654",
        latitude: 37.6396,
        longitude: 127.0257,
        review: "조용한 동네의 깔끔한 농구장",
        is_indoor: true,
        status: CourtStatus::Approved,
        day: 5,
    },
];

/// サンプルデータ（ソウル市内の 5 コート）
pub fn sample_courts() -> Vec<Court> {
    SAMPLE_COURTS
        .iter()
        .filter_map(|sample| {
            let id = CourtId::new(sample.id.to_string()).ok()?;
            let created_at = Utc.with_ymd_and_hms(2024, 1, sample.day, 0, 0, 0).single()?;
            Some(Court {
                id,
                name: sample.name.to_string(),
                address: sample.address.to_string(),
                latitude: sample.latitude,
                longitude: sample.longitude,
                review: Some(sample.review.to_string()),
                image_url: Some(format!(
                    "https://picsum.photos/400/300?random={}",
                    sample.id
                )),
                is_indoor: sample.is_indoor,
                status: sample.status,
                created_by: format!("user{}", sample.id),
                created_at,
                updated_at: created_at,
            })
        })
        .collect()
}

/// バックエンドが無い環境向けのインメモリ実装
pub struct MockCourtApi {
    courts: Arc<RwLock<Vec<Court>>>,
    votes: Arc<RwLock<Vec<Vote>>>,
}

impl Default for MockCourtApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCourtApi {
    pub fn new() -> Self {
        Self::with_courts(sample_courts())
    }

    pub fn with_courts(courts: Vec<Court>) -> Self {
        Self {
            courts: Arc::new(RwLock::new(courts)),
            votes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn votes(&self) -> Vec<Vote> {
        self.votes.read().await.clone()
    }
}

#[async_trait]
impl CourtApi for MockCourtApi {
    async fn list_courts(&self, bounds: Option<MapBounds>) -> Result<Vec<Court>, AppError> {
        info!(?bounds, "Fetching courts");
        let courts = self.courts.read().await;
        Ok(match bounds {
            Some(bounds) => courts
                .iter()
                .filter(|c| bounds.contains(c.coordinates()))
                .cloned()
                .collect(),
            None => courts.clone(),
        })
    }

    async fn get_court(&self, id: &CourtId) -> Result<Court, AppError> {
        self.courts
            .read()
            .await
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Court not found: {id}")))
    }

    async fn create_court(&self, draft: &CourtDraft) -> Result<Court, AppError> {
        let court = Court::create(draft.clone()).map_err(AppError::Validation)?;
        info!(court_id = %court.id, name = %court.name, "Creating new court");
        self.courts.write().await.push(court.clone());
        Ok(court)
    }

    async fn vote_court(&self, id: &CourtId, vote: VoteType) -> Result<(), AppError> {
        info!(court_id = %id, %vote, "Voting for court");
        self.votes
            .write()
            .await
            .push(Vote::new(id.clone(), CURRENT_USER.to_string(), vote));
        Ok(())
    }
}
