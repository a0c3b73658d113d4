use super::error::AppError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// トークンがキャンセルされたら `AppError::Cancelled` で打ち切る
pub async fn run_cancellable<T, F>(cancel: &CancellationToken, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    if cancel.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled),
        result = future => result,
    }
}
