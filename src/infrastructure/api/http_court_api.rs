use crate::application::ports::CourtApi;
use crate::domain::entities::{Court, CourtDraft};
use crate::domain::value_objects::{CourtId, MapBounds, VoteType};
use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoteBody {
    vote_type: VoteType,
}

/// REST バックエンドに対するコート API クライアント
#[derive(Clone)]
pub struct HttpCourtApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCourtApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let trimmed = config.base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::Configuration("API base_url is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.http
            .request(method, url)
            .header("Content-Type", "application/json")
    }
}

#[async_trait]
impl CourtApi for HttpCourtApi {
    async fn list_courts(&self, bounds: Option<MapBounds>) -> Result<Vec<Court>, AppError> {
        let mut builder = self.request(Method::GET, "/courts");
        if let Some(bounds) = bounds {
            builder = builder.query(&bounds.query_pairs());
        }
        let resp = ensure_success(builder.send().await?).await?;
        let courts: Vec<Court> = resp.json().await?;
        debug!(count = courts.len(), "courts fetched");
        Ok(courts)
    }

    async fn get_court(&self, id: &CourtId) -> Result<Court, AppError> {
        let resp = self
            .request(Method::GET, &format!("/courts/{id}"))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Court not found: {id}")));
        }
        let resp = ensure_success(resp).await?;
        Ok(resp.json().await?)
    }

    async fn create_court(&self, draft: &CourtDraft) -> Result<Court, AppError> {
        let resp = self
            .request(Method::POST, "/courts")
            .json(draft)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.json().await?)
    }

    async fn vote_court(&self, id: &CourtId, vote: VoteType) -> Result<(), AppError> {
        let resp = self
            .request(Method::POST, &format!("/courts/{id}/votes"))
            .json(&VoteBody { vote_type: vote })
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string()
    } else {
        body
    };
    Err(AppError::Http {
        status: status.as_u16(),
        message,
    })
}
