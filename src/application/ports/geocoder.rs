use crate::domain::value_objects::Coordinates;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// 住所と座標の相互変換
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn coordinates_for(&self, address: &str) -> Result<Coordinates, AppError>;

    async fn address_for(&self, coordinates: Coordinates) -> Result<String, AppError>;
}
