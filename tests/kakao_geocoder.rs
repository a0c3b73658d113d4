use courtmap_lib::application::ports::Geocoder;
use courtmap_lib::domain::value_objects::Coordinates;
use courtmap_lib::infrastructure::geocoding::KakaoGeocoder;
use courtmap_lib::shared::config::GeocodingConfig;
use courtmap_lib::shared::error::AppError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoder(server: &MockServer) -> KakaoGeocoder {
    let config = GeocodingConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        cache_ttl_secs: 60,
    };
    KakaoGeocoder::new(&config, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn address_search_returns_first_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .and(query_param("query", "서울특별시 중구 세종대로 110"))
        .and(header("Authorization", "KakaoAK test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                { "x": "126.978", "y": "37.5665", "address_name": "서울 중구 태평로1가 31" },
                { "x": "0", "y": "0" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let coords = geocoder(&server)
        .coordinates_for("서울특별시 중구 세종대로 110")
        .await
        .unwrap();
    assert_eq!(coords, Coordinates::new(37.5665, 126.978).unwrap());
}

#[tokio::test]
async fn empty_documents_is_address_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [] })))
        .mount(&server)
        .await;

    let err = geocoder(&server).coordinates_for("없는 주소").await.unwrap_err();
    match err {
        AppError::NotFound(message) => assert_eq!(message, "Address not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn reverse_lookup_reads_address_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/local/geo/coord2address.json"))
        .and(query_param("x", "127.0396"))
        .and(query_param("y", "37.5013"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{ "address": { "address_name": "서울 강남구 역삼동 456" } }]
        })))
        .mount(&server)
        .await;

    let address = geocoder(&server)
        .address_for(Coordinates::new(37.5013, 127.0396).unwrap())
        .await
        .unwrap();
    assert_eq!(address, "서울 강남구 역삼동 456");
}

#[tokio::test]
async fn unauthorized_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/local/geo/coord2address.json"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let err = geocoder(&server)
        .address_for(Coordinates::new(37.5, 127.0).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Http { status: 401, .. }));
}
