use super::Validate;
use crate::domain::entities::marker::fill_color;
use crate::domain::entities::{Court, CourtDraft};
use crate::domain::value_objects::{CourtStatus, MapBounds, VoteType};
use serde::{Deserialize, Serialize};

// レスポンスDTO
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourtResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub review: Option<String>,
    pub image_url: Option<String>,
    pub is_indoor: bool,
    pub status: CourtStatus,
    pub status_label: String,
    pub marker_color: String,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Court> for CourtResponse {
    fn from(court: Court) -> Self {
        Self {
            id: court.id.to_string(),
            status_label: court.status.label().to_string(),
            marker_color: fill_color(court.status).to_string(),
            name: court.name,
            address: court.address,
            latitude: court.latitude,
            longitude: court.longitude,
            review: court.review,
            image_url: court.image_url,
            is_indoor: court.is_indoor,
            status: court.status,
            created_by: court.created_by,
            created_at: court.created_at.timestamp(),
            updated_at: court.updated_at.timestamp(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourtListResponse {
    pub courts: Vec<CourtResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct MapBoundsDto {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl TryFrom<MapBoundsDto> for MapBounds {
    type Error = String;

    fn try_from(dto: MapBoundsDto) -> Result<Self, Self::Error> {
        MapBounds::new(dto.north, dto.south, dto.east, dto.west)
    }
}

// リクエストDTO
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCourtsRequest {
    pub bounds: Option<MapBoundsDto>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourtRequest {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub review: Option<String>,
    pub image_url: Option<String>,
    pub is_indoor: bool,
}

impl Validate for CreateCourtRequest {
    fn validate(&self) -> Result<(), String> {
        CourtDraft::from(self.clone()).validate()?;

        // 画像は外部 URL か添付ファイルの data URI のみ
        if let Some(url) = &self.image_url
            && !url.is_empty()
            && !(url.starts_with("http") || url.starts_with("data:"))
        {
            return Err("잘못된 이미지 URL입니다".to_string());
        }
        Ok(())
    }
}

impl From<CreateCourtRequest> for CourtDraft {
    fn from(request: CreateCourtRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            latitude: request.latitude,
            longitude: request.longitude,
            review: request.review,
            image_url: request.image_url,
            is_indoor: request.is_indoor,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub court_id: String,
    pub vote_type: VoteType,
}

impl Validate for VoteRequest {
    fn validate(&self) -> Result<(), String> {
        if self.court_id.trim().is_empty() {
            return Err("코트 ID가 필요합니다".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::REVIEW_MAX_CHARS;

    fn request() -> CreateCourtRequest {
        CreateCourtRequest {
            name: "성수 코트".to_string(),
            address: "서울특별시 성동구 성수동".to_string(),
            latitude: 37.5445,
            longitude: 127.0374,
            review: Some("바닥이 좋아요".to_string()),
            image_url: Some("data:image/png;base64,AAAA".to_string()),
            is_indoor: false,
        }
    }

    #[test]
    fn accepts_data_uri_images() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_long_review() {
        let mut req = request();
        req.review = Some("가".repeat(REVIEW_MAX_CHARS + 1));
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_relative_image_url() {
        let mut req = request();
        req.image_url = Some("images/court.png".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_vote() {
        let vote: VoteRequest =
            serde_json::from_str(r#"{"courtId":"3","voteType":"approve"}"#).unwrap();
        assert_eq!(vote.vote_type, VoteType::Approve);
    }
}
