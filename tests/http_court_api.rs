mod common;

use common::fixtures::court_json;
use courtmap_lib::application::ports::CourtApi;
use courtmap_lib::domain::entities::CourtDraft;
use courtmap_lib::domain::value_objects::{CourtId, CourtStatus, MapBounds, VoteType};
use courtmap_lib::infrastructure::api::HttpCourtApi;
use courtmap_lib::shared::config::ApiConfig;
use courtmap_lib::shared::error::AppError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpCourtApi {
    HttpCourtApi::new(&ApiConfig {
        base_url: server.uri(),
        use_mock: false,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn list_sends_bounds_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courts"))
        .and(query_param("north", "37.6"))
        .and(query_param("south", "37.5"))
        .and(query_param("east", "127.1"))
        .and(query_param("west", "126.9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            court_json("1", "서울농구장", "approved"),
            court_json("3", "홍대농구장", "pending"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let bounds = MapBounds::new(37.6, 37.5, 127.1, 126.9).unwrap();
    let courts = client(&server).list_courts(Some(bounds)).await.unwrap();

    assert_eq!(courts.len(), 2);
    assert_eq!(courts[1].status, CourtStatus::Pending);
    assert_eq!(courts[0].image_url.as_deref(), Some("https://picsum.photos/400/300?random=1"));
}

#[tokio::test]
async fn unknown_status_fails_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([court_json("9", "이상한 코트", "archived")])),
        )
        .mount(&server)
        .await;

    let err = client(&server).list_courts(None).await.unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
}

#[tokio::test]
async fn missing_court_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courts/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let id = CourtId::new("42".to_string()).unwrap();
    let err = client(&server).get_court(&id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    match client(&server).list_courts(None).await {
        Err(AppError::Http { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn create_posts_camel_case_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/courts"))
        .and(body_json(json!({
            "name": "서울농구장",
            "address": "서울특별시 강남구 테헤란로 123",
            "latitude": 37.5665,
            "longitude": 126.978,
            "isIndoor": true
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(court_json("77", "서울농구장", "pending")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let draft = CourtDraft {
        name: "서울농구장".to_string(),
        address: "서울특별시 강남구 테헤란로 123".to_string(),
        latitude: 37.5665,
        longitude: 126.978,
        review: None,
        image_url: None,
        is_indoor: true,
    };
    let created = client(&server).create_court(&draft).await.unwrap();
    assert_eq!(created.id, "77");
}

#[tokio::test]
async fn vote_posts_vote_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/courts/3/votes"))
        .and(body_json(json!({ "voteType": "reject" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let id = CourtId::new("3".to_string()).unwrap();
    client(&server)
        .vote_court(&id, VoteType::Reject)
        .await
        .unwrap();
}
