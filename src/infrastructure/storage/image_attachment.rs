use crate::application::ports::ImageAttachments;
use crate::shared::error::AppError;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use std::path::Path;
use tracing::debug;

/// 拡張子から MIME タイプを決める（大文字小文字は区別しない）
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

/// ローカルファイルを読み込んで data URI に埋め込む。アップロードはしない
#[derive(Debug, Default, Clone)]
pub struct FileImageAttachments;

#[async_trait]
impl ImageAttachments for FileImageAttachments {
    async fn load_data_uri(&self, path: &Path) -> Result<String, AppError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::Io(format!("failed to read {}: {e}", path.display())))?;
        let mime = mime_for_path(path);
        debug!(path = %path.display(), mime, size = bytes.len(), "image attached");
        Ok(encode_data_uri(mime, &bytes))
    }
}
