use super::court_service::CourtService;
use crate::application::ports::NavigationHistory;
use crate::domain::entities::Court;
use crate::domain::value_objects::AppRoute;
use crate::shared::error::AppError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// 選択状態と URL パスを同期させる
pub struct NavigationSync {
    courts: Arc<CourtService>,
    history: Arc<dyn NavigationHistory>,
    generation: AtomicU64,
}

impl NavigationSync {
    pub fn new(courts: Arc<CourtService>, history: Arc<dyn NavigationHistory>) -> Self {
        Self {
            courts,
            history,
            generation: AtomicU64::new(0),
        }
    }

    pub fn current_route(&self) -> AppRoute {
        AppRoute::parse(&self.history.current_path())
    }

    pub fn select_court(&self, court: Court) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let route = AppRoute::for_court(&court.id);
        self.history.push_path(&route.to_path());

        let store = self.courts.store();
        store.set_list_open(true);
        store.set_selected(Some(court));
    }

    pub fn clear_selection(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.courts.store().set_selected(None);
        self.history.push_path(&AppRoute::List.to_path());
    }

    /// 現在のパスから選択状態を復元する。取得に失敗しても選択は変えない
    pub async fn apply_location(&self, cancel: &CancellationToken) -> Option<Court> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let store = self.courts.store();

        let id = match self.current_route() {
            AppRoute::List => {
                store.set_selected(None);
                return None;
            }
            AppRoute::Court(id) => id,
        };

        if let Some(current) = store.selected()
            && current.id == id
        {
            return Some(current);
        }

        let court = match self.courts.resolve_court(&id, cancel).await {
            Ok(court) => court,
            Err(AppError::Cancelled) => return None,
            Err(e) => {
                debug!(court_id = %id, "Failed to fetch court for path: {}", e);
                return None;
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(court_id = %id, "discarding stale navigation result");
            return None;
        }
        store.set_list_open(true);
        store.set_selected(Some(court.clone()));
        Some(court)
    }

    /// 戻る・進む
    pub async fn on_history_navigation(&self, cancel: &CancellationToken) -> Option<Court> {
        self.apply_location(cancel).await
    }
}
