use crate::shared::error::AppError;
use async_trait::async_trait;
use std::path::Path;

/// ローカル画像をフォームに添付できる形へ変換する
#[async_trait]
pub trait ImageAttachments: Send + Sync {
    /// `data:<mime>;base64,...` 形式の URI を返す
    async fn load_data_uri(&self, path: &Path) -> Result<String, AppError>;
}
