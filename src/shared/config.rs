use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::AppError;
use crate::domain::value_objects::{Coordinates, MapBounds, ScreenSize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub geocoding: GeocodingConfig,
    pub map: MapConfig,
    pub context_menu: ContextMenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// 実 API が用意されるまではモックデータを返す
    pub use_mock: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub cache_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub initial_latitude: f64,
    pub initial_longitude: f64,
    pub initial_zoom: f64,
    pub focus_zoom: f64,
    pub fly_duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextMenuConfig {
    pub width: f64,
    pub height: f64,
    pub dismiss_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3001".to_string(),
                use_mock: true,
                timeout_secs: 30,
            },
            geocoding: GeocodingConfig {
                api_key: None,
                base_url: "https://dapi.kakao.com".to_string(),
                cache_ttl_secs: 3600, // 1 hour
            },
            map: MapConfig::default(),
            context_menu: ContextMenuConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        // ソウル市庁
        Self {
            initial_latitude: 37.5665,
            initial_longitude: 126.978,
            initial_zoom: 10.0,
            focus_zoom: 15.0,
            fly_duration_ms: 1000,
        }
    }
}

impl MapConfig {
    /// 初期表示の範囲。中心とズームから画面サイズ分を切り出す
    pub fn initial_bounds(&self, viewport: ScreenSize) -> Result<MapBounds, AppError> {
        let center = Coordinates::new(self.initial_latitude, self.initial_longitude)
            .map_err(AppError::Configuration)?;
        Ok(MapBounds::around(center, self.initial_zoom, viewport))
    }
}

impl Default for ContextMenuConfig {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 40.0,
            dismiss_delay_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Configuration(format!("failed to parse {}: {e}", path.display()))
        })
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 環境変数で既存の設定値を上書きする
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = std::env::var("COURTMAP_API_URL") {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                self.api.base_url = trimmed.to_string();
            }
        }
        if let Ok(v) = std::env::var("COURTMAP_USE_MOCK_API") {
            self.api.use_mock = parse_bool(&v, self.api.use_mock);
        }
        if let Ok(v) = std::env::var("COURTMAP_HTTP_TIMEOUT_SECS")
            && let Some(value) = parse_u64(&v)
        {
            self.api.timeout_secs = value.max(1);
        }
        if let Ok(v) = std::env::var("COURTMAP_KAKAO_API_KEY") {
            let trimmed = v.trim();
            self.geocoding.api_key = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        if let Ok(v) = std::env::var("COURTMAP_GEOCODE_URL") {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                self.geocoding.base_url = trimmed.to_string();
            }
        }
        if let Ok(v) = std::env::var("COURTMAP_GEOCODE_CACHE_TTL_SECS")
            && let Some(value) = parse_u64(&v)
        {
            self.geocoding.cache_ttl_secs = value;
        }
        if let Ok(v) = std::env::var("COURTMAP_FOCUS_ZOOM")
            && let Some(value) = parse_f64(&v)
        {
            self.map.focus_zoom = value;
        }
        if let Ok(v) = std::env::var("COURTMAP_FLY_DURATION_MS")
            && let Some(value) = parse_u64(&v)
        {
            self.map.fly_duration_ms = value;
        }

        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api.use_mock && self.api.base_url.trim().is_empty() {
            return Err("API base_url must be set when the mock API is disabled".to_string());
        }
        if self.api.timeout_secs == 0 {
            return Err("API timeout_secs must be greater than 0".to_string());
        }
        if !(-90.0..=90.0).contains(&self.map.initial_latitude)
            || !(-180.0..=180.0).contains(&self.map.initial_longitude)
        {
            return Err("Map initial center is out of range".to_string());
        }
        if !(0.0..=22.0).contains(&self.map.focus_zoom) {
            return Err("Map focus_zoom must be between 0 and 22".to_string());
        }
        if self.context_menu.width <= 0.0 || self.context_menu.height <= 0.0 {
            return Err("Context menu size must be positive".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}
