use crate::application::ports::Geocoder;
use crate::domain::value_objects::Coordinates;
use crate::shared::config::GeocodingConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchResponse<T> {
    documents: Vec<T>,
}

/// 住所検索の結果。x が経度、y が緯度で文字列として返る
#[derive(Debug, Deserialize)]
struct AddressDocument {
    x: String,
    y: String,
}

#[derive(Debug, Deserialize)]
struct RegionDocument {
    address: AddressName,
}

#[derive(Debug, Deserialize)]
struct AddressName {
    address_name: String,
}

/// Kakao Local API によるジオコーディング
#[derive(Clone)]
pub struct KakaoGeocoder {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl KakaoGeocoder {
    pub fn new(config: &GeocodingConfig, timeout: Duration) -> Result<Self, AppError> {
        let trimmed = config.base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::Configuration(
                "geocoding base_url is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .clone()
                .filter(|value| !value.trim().is_empty()),
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, AppError> {
        let key = self.api_key.as_ref().ok_or_else(|| {
            AppError::Configuration("Kakao API key is not configured".to_string())
        })?;
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(self
            .http
            .request(method, url)
            .header("Authorization", format!("KakaoAK {key}")))
    }

    async fn fetch<T>(&self, builder: reqwest::RequestBuilder) -> Result<Vec<T>, AppError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let resp = builder.send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                message: format!("geocoding request failed: {body}"),
            });
        }
        let parsed: SearchResponse<T> = resp.json().await?;
        Ok(parsed.documents)
    }
}

#[async_trait]
impl Geocoder for KakaoGeocoder {
    async fn coordinates_for(&self, address: &str) -> Result<Coordinates, AppError> {
        let builder = self
            .request(Method::GET, "/v2/local/search/address.json")?
            .query(&[("query", address)]);
        let documents: Vec<AddressDocument> = self.fetch(builder).await?;
        let first = documents
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))?;

        let longitude = parse_degree(&first.x)?;
        let latitude = parse_degree(&first.y)?;
        debug!(address, latitude, longitude, "address geocoded");
        Coordinates::new(latitude, longitude).map_err(AppError::Serialization)
    }

    async fn address_for(&self, coordinates: Coordinates) -> Result<String, AppError> {
        let builder = self
            .request(Method::GET, "/v2/local/geo/coord2address.json")?
            .query(&[
                ("x", coordinates.longitude.to_string()),
                ("y", coordinates.latitude.to_string()),
            ]);
        let documents: Vec<RegionDocument> = self.fetch(builder).await?;
        documents
            .into_iter()
            .next()
            .map(|doc| doc.address.address_name)
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))
    }
}

fn parse_degree(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| AppError::Serialization(format!("invalid coordinate '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_configuration_error() {
        let config = GeocodingConfig {
            api_key: Some("  ".to_string()),
            base_url: "https://dapi.kakao.com".to_string(),
            cache_ttl_secs: 60,
        };
        let geocoder = KakaoGeocoder::new(&config, Duration::from_secs(5)).unwrap();

        let err = geocoder.coordinates_for("서울").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        let coords = Coordinates::new(37.5, 127.0).unwrap();
        let err = geocoder.address_for(coords).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn parse_degree_rejects_garbage() {
        assert_eq!(parse_degree(" 126.978 ").unwrap(), 126.978);
        assert!(matches!(
            parse_degree("east"),
            Err(AppError::Serialization(_))
        ));
    }
}
