use crate::application::ports::{CourtApi, Geocoder, ImageAttachments, MapSurface, NavigationHistory};
use crate::application::services::{
    CourtService, CourtStore, MapAdapter, MapSignal, NavigationSync, RegistrationFlow,
};
use crate::domain::value_objects::ScreenSize;
use crate::infrastructure::api::{HttpCourtApi, MockCourtApi};
use crate::infrastructure::geocoding::{CachedGeocoder, KakaoGeocoder};
use crate::infrastructure::storage::FileImageAttachments;
use crate::presentation::handlers::CourtHandler;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// アプリケーション全体の状態を管理する構造体
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<CourtStore>,
    pub court_service: Arc<CourtService>,
    pub navigation: Arc<NavigationSync>,
    pub court_handler: Arc<CourtHandler>,
    pub geocoder: Option<Arc<dyn Geocoder>>,
    pub attachments: Arc<dyn ImageAttachments>,
}

impl AppState {
    pub fn new(config: AppConfig, history: Arc<dyn NavigationHistory>) -> Result<Self, AppError> {
        config.validate().map_err(AppError::Configuration)?;

        let api: Arc<dyn CourtApi> = if config.api.use_mock {
            info!("Using in-memory court API");
            Arc::new(MockCourtApi::new())
        } else {
            info!(base_url = %config.api.base_url, "Using HTTP court API");
            Arc::new(HttpCourtApi::new(&config.api)?)
        };
        Self::with_api(config, api, history)
    }

    /// API 実装を差し替えて組み立てる
    pub fn with_api(
        config: AppConfig,
        api: Arc<dyn CourtApi>,
        history: Arc<dyn NavigationHistory>,
    ) -> Result<Self, AppError> {
        let geocoder = build_geocoder(&config)?;
        let store = Arc::new(CourtStore::new());
        let court_service = Arc::new(CourtService::new(api, Arc::clone(&store)));
        let navigation = Arc::new(NavigationSync::new(Arc::clone(&court_service), history));
        let court_handler = Arc::new(CourtHandler::new(
            Arc::clone(&court_service),
            Arc::clone(&navigation),
        ));

        Ok(Self {
            config: Arc::new(config),
            store,
            court_service,
            navigation,
            court_handler,
            geocoder,
            attachments: Arc::new(FileImageAttachments),
        })
    }

    /// 初回表示：一覧を読み込んでから現在のパスを反映する。
    /// 一覧の取得に失敗してもパスのコートは個別に取得する
    pub async fn bootstrap(&self, cancel: &CancellationToken) -> Result<(), AppError> {
        let bounds = self.store.read(|s| s.map_bounds);
        let loaded = self.court_service.load_courts(bounds, cancel).await;
        self.navigation.apply_location(cancel).await;
        loaded.map(|_| ())
    }

    pub fn mount_map(
        &self,
        surface: Arc<dyn MapSurface>,
        viewport: ScreenSize,
    ) -> Result<(MapAdapter, mpsc::UnboundedReceiver<MapSignal>), AppError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let adapter = MapAdapter::mount(
            surface,
            Arc::clone(&self.store),
            tx,
            &self.config.map,
            &self.config.context_menu,
            viewport,
        )?;
        Ok((adapter, rx))
    }

    pub fn registration_flow(&self) -> RegistrationFlow {
        RegistrationFlow::new(
            Arc::clone(&self.court_service),
            self.geocoder.clone(),
            Arc::clone(&self.attachments),
        )
    }

    /// 地図からの通知を画面の操作に振り分ける
    pub async fn dispatch_map_signal(
        &self,
        signal: MapSignal,
        registration: &mut RegistrationFlow,
        cancel: &CancellationToken,
    ) {
        match signal {
            MapSignal::CourtClicked(court) => self.navigation.select_court(court),
            MapSignal::RegisterLocation(location) | MapSignal::LocationPicked(location) => {
                registration.begin(location);
                registration.prefill_address(cancel).await;
            }
            MapSignal::BoundsChanged(bounds) => {
                debug!(?bounds, "bounds changed");
            }
        }
    }
}

fn build_geocoder(config: &AppConfig) -> Result<Option<Arc<dyn Geocoder>>, AppError> {
    if config.geocoding.api_key.is_none() {
        warn!("Kakao API key is not configured; address lookup disabled");
        return Ok(None);
    }
    let kakao = KakaoGeocoder::new(
        &config.geocoding,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let cached = CachedGeocoder::new(
        Arc::new(kakao),
        Duration::from_secs(config.geocoding.cache_ttl_secs),
    );
    Ok(Some(Arc::new(cached)))
}
