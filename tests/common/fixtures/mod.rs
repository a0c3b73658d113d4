use chrono::{TimeZone, Utc};
use courtmap_lib::domain::entities::Court;
use courtmap_lib::domain::value_objects::{CourtId, CourtStatus, MapBounds};
use serde_json::json;

pub fn court(id: &str, name: &str, status: CourtStatus, latitude: f64, longitude: f64) -> Court {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    Court {
        id: CourtId::new(id.to_string()).unwrap(),
        name: name.to_string(),
        address: format!("서울특별시 {name}"),
        latitude,
        longitude,
        review: None,
        image_url: None,
        is_indoor: false,
        status,
        created_by: "fixture-user".to_string(),
        created_at,
        updated_at: created_at,
    }
}

/// 承認済み A・検討中 B・却下 C
pub fn abc_courts() -> Vec<Court> {
    vec![
        court("a", "A 코트", CourtStatus::Approved, 37.55, 126.97),
        court("b", "B 코트", CourtStatus::Pending, 37.56, 126.98),
        court("c", "C 코트", CourtStatus::Rejected, 37.57, 126.99),
    ]
}

pub fn seoul_bounds() -> MapBounds {
    MapBounds::new(37.7, 37.4, 127.2, 126.8).unwrap()
}

pub fn court_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "address": "서울특별시 강남구 테헤란로 123",
        "latitude": 37.5665,
        "longitude": 126.978,
        "review": "좋은 농구장입니다!",
        "imageUrl": "https://picsum.photos/400/300?random=1",
        "isIndoor": true,
        "status": status,
        "createdBy": "user1",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}
