use super::court_store::{CourtStore, Notice};
use crate::application::ports::CourtApi;
use crate::domain::entities::{Court, CourtDraft};
use crate::domain::value_objects::{CourtId, MapBounds, VoteType};
use crate::shared::cancellation::run_cancellable;
use crate::shared::error::AppError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub struct CourtService {
    api: Arc<dyn CourtApi>,
    store: Arc<CourtStore>,
    load_generation: AtomicU64,
}

impl CourtService {
    pub fn new(api: Arc<dyn CourtApi>, store: Arc<CourtStore>) -> Self {
        Self {
            api,
            store,
            load_generation: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &Arc<CourtStore> {
        &self.store
    }

    /// 一覧を取得してストアを差し替える。後から開始した読み込みがあれば結果は捨てる
    pub async fn load_courts(
        &self,
        bounds: Option<MapBounds>,
        cancel: &CancellationToken,
    ) -> Result<usize, AppError> {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(?bounds, generation, "fetching courts");
        self.store.set_loading(true);

        let result = run_cancellable(cancel, self.api.list_courts(bounds)).await;

        if self.load_generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded court list response");
            return Err(AppError::Cancelled);
        }
        self.store.set_loading(false);

        match result {
            Ok(courts) => {
                let count = courts.len();
                self.store.set_courts(courts);
                info!(count, "court list loaded");
                Ok(count)
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                error!("Failed to load courts: {}", e);
                self.store.set_notice(Some(Notice::error(&e)));
                Err(e)
            }
        }
    }

    pub async fn get_court(
        &self,
        id: &CourtId,
        cancel: &CancellationToken,
    ) -> Result<Court, AppError> {
        run_cancellable(cancel, self.api.get_court(id)).await
    }

    /// 読み込み済みの一覧を優先し、無ければ API から取得する
    pub async fn resolve_court(
        &self,
        id: &CourtId,
        cancel: &CancellationToken,
    ) -> Result<Court, AppError> {
        if let Some(court) = self.store.read(|s| s.find(id).cloned()) {
            return Ok(court);
        }
        debug!(court_id = %id, "court not in loaded list, fetching by id");
        self.get_court(id, cancel).await
    }

    /// 登録に成功したらリロードせずにストアへ直接反映する
    pub async fn create_court(
        &self,
        draft: CourtDraft,
        cancel: &CancellationToken,
    ) -> Result<Court, AppError> {
        draft.validate().map_err(AppError::Validation)?;

        match run_cancellable(cancel, self.api.create_court(&draft)).await {
            Ok(court) => {
                info!(court_id = %court.id, name = %court.name, "court registered");
                self.store.upsert_court(court.clone());
                Ok(court)
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                error!("Failed to create court: {}", e);
                self.store.set_notice(Some(Notice::error(&e)));
                Err(e)
            }
        }
    }

    pub async fn vote_court(
        &self,
        id: &CourtId,
        vote: VoteType,
        cancel: &CancellationToken,
    ) -> Result<(), AppError> {
        match run_cancellable(cancel, self.api.vote_court(id, vote)).await {
            Ok(()) => {
                info!(court_id = %id, %vote, "vote submitted");
                Ok(())
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                error!("Failed to vote for court {}: {}", id, e);
                self.store.set_notice(Some(Notice::error(&e)));
                Err(e)
            }
        }
    }
}
