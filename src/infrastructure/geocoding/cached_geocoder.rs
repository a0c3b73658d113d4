use crate::application::ports::Geocoder;
use crate::domain::value_objects::Coordinates;
use crate::infrastructure::cache::MemoryCache;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 成功した問い合わせ結果だけを TTL 付きで覚えておく
pub struct CachedGeocoder {
    inner: Arc<dyn Geocoder>,
    by_address: MemoryCache<String, Coordinates>,
    by_location: MemoryCache<String, String>,
}

impl CachedGeocoder {
    pub fn new(inner: Arc<dyn Geocoder>, ttl: Duration) -> Self {
        Self {
            inner,
            by_address: MemoryCache::new(ttl),
            by_location: MemoryCache::new(ttl),
        }
    }
}

// 約 10cm 単位で丸めて同じ地点とみなす
fn location_key(coordinates: Coordinates) -> String {
    format!("{:.6},{:.6}", coordinates.latitude, coordinates.longitude)
}

#[async_trait]
impl Geocoder for CachedGeocoder {
    async fn coordinates_for(&self, address: &str) -> Result<Coordinates, AppError> {
        let key = address.trim().to_string();
        if let Some(hit) = self.by_address.get(&key).await {
            debug!(address = %key, "geocode cache hit");
            return Ok(hit);
        }
        let coordinates = self.inner.coordinates_for(&key).await?;
        self.by_address.set(key, coordinates).await;
        Ok(coordinates)
    }

    async fn address_for(&self, coordinates: Coordinates) -> Result<String, AppError> {
        let key = location_key(coordinates);
        if let Some(hit) = self.by_location.get(&key).await {
            debug!(location = %key, "reverse geocode cache hit");
            return Ok(hit);
        }
        let address = self.inner.address_for(coordinates).await?;
        self.by_location.set(key, address.clone()).await;
        Ok(address)
    }
}
