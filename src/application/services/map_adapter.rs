use super::context_menu::ContextMenu;
use super::court_store::{CourtState, CourtStore};
use crate::application::ports::{CameraTarget, EventDisposition, MapCursor, MapEvent, MapSurface};
use crate::domain::constants::MARKER_LAYER_ID;
use crate::domain::entities::{Court, MarkerFeature, MarkerLayer, MarkerStyle};
use crate::domain::value_objects::{
    Coordinates, CourtId, MapBounds, ScreenPoint, ScreenSize,
};
use crate::shared::config::{ContextMenuConfig, MapConfig};
use crate::shared::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// 地図から上位（画面）へ送られる通知
#[derive(Debug, Clone, PartialEq)]
pub enum MapSignal {
    CourtClicked(Court),
    /// コンテキストメニューの「장소 등록」
    RegisterLocation(Coordinates),
    /// 位置選択モード中のクリック
    LocationPicked(Coordinates),
    BoundsChanged(MapBounds),
}

/// 選択中のコートがあればそれだけ、無ければ表示対象すべてをマーカーにする
pub fn build_marker_layer<'a>(
    visible: impl IntoIterator<Item = &'a Court>,
    selected: Option<&Court>,
) -> MarkerLayer {
    let features = match selected {
        Some(court) => vec![marker_for(court, true)],
        None => visible.into_iter().map(|c| marker_for(c, false)).collect(),
    };
    MarkerLayer {
        id: MARKER_LAYER_ID,
        features,
    }
}

fn marker_for(court: &Court, is_selected: bool) -> MarkerFeature {
    MarkerFeature {
        court_id: court.id.clone(),
        name: court.name.clone(),
        status: court.status,
        is_selected,
        position: court.coordinates().to_lng_lat(),
        style: MarkerStyle::for_status(court.status, is_selected),
    }
}

fn layer_for_state(state: &CourtState) -> MarkerLayer {
    build_marker_layer(state.visible(), state.selected())
}

#[derive(Debug, Clone, Copy)]
struct CameraSettings {
    focus_zoom: f64,
    fly_duration: Duration,
}

impl CameraSettings {
    fn target(&self, center: Coordinates) -> CameraTarget {
        CameraTarget {
            center,
            zoom: self.focus_zoom,
            duration: self.fly_duration,
        }
    }
}

/// ストアの変化を地図に描き、地図のイベントをストアと画面へ伝える
pub struct MapAdapter {
    surface: Arc<dyn MapSurface>,
    store: Arc<CourtStore>,
    signals: mpsc::UnboundedSender<MapSignal>,
    context_menu: ContextMenu,
    viewport: ScreenSize,
    pick_mode: bool,
    hovering: bool,
    shutdown: CancellationToken,
    render_task: Option<JoinHandle<()>>,
}

impl MapAdapter {
    /// 現在の状態を描画し、以降の変化を追従する描画タスクを起動する
    pub fn mount(
        surface: Arc<dyn MapSurface>,
        store: Arc<CourtStore>,
        signals: mpsc::UnboundedSender<MapSignal>,
        map_config: &MapConfig,
        menu_config: &ContextMenuConfig,
        viewport: ScreenSize,
    ) -> Result<Self, AppError> {
        let camera = CameraSettings {
            focus_zoom: map_config.focus_zoom,
            fly_duration: Duration::from_millis(map_config.fly_duration_ms),
        };

        let mut rx = store.subscribe();
        let initial = rx.borrow_and_update().clone();
        surface.set_marker_layer(&layer_for_state(&initial))?;
        let mut focused = None;
        focus_selection(surface.as_ref(), &initial, &mut focused, camera)?;

        let shutdown = CancellationToken::new();
        let render_task = tokio::spawn(render_loop(
            Arc::clone(&surface),
            rx,
            focused,
            camera,
            shutdown.clone(),
        ));
        debug!("map adapter mounted");

        Ok(Self {
            surface,
            store,
            signals,
            context_menu: ContextMenu::from_config(menu_config),
            viewport,
            pick_mode: false,
            hovering: false,
            shutdown,
            render_task: Some(render_task),
        })
    }

    pub fn handle_event(&mut self, event: MapEvent) -> EventDisposition {
        match event {
            MapEvent::Loaded => {
                let layer = self.store.read(layer_for_state);
                if let Err(e) = self.surface.set_marker_layer(&layer) {
                    warn!("Failed to draw markers after load: {}", e);
                }
                EventDisposition::Continue
            }
            MapEvent::Click {
                location,
                feature_id,
                ..
            } => {
                self.context_menu.close();
                if self.pick_mode {
                    self.emit(MapSignal::LocationPicked(location));
                }
                if let Some(id) = feature_id {
                    match self.clicked_court(&id) {
                        Some(court) => self.emit(MapSignal::CourtClicked(court)),
                        None => debug!(feature_id = %id, "clicked marker has no court"),
                    }
                }
                EventDisposition::Continue
            }
            MapEvent::ContextMenu { point, location } => {
                self.context_menu.open(point, location, self.viewport);
                EventDisposition::PreventDefault
            }
            MapEvent::MoveEnd { bounds } => {
                debug!(?bounds, "map moved");
                self.store.set_map_bounds(Some(bounds));
                self.emit(MapSignal::BoundsChanged(bounds));
                EventDisposition::Continue
            }
            MapEvent::MarkerEnter { .. } => {
                self.hovering = true;
                self.surface.set_cursor(MapCursor::Pointer);
                EventDisposition::Continue
            }
            MapEvent::MarkerLeave => {
                self.hovering = false;
                self.surface.set_cursor(self.idle_cursor());
                EventDisposition::Continue
            }
        }
    }

    /// メニューの「장소 등록」を押した
    pub fn choose_context_action(&mut self) -> Option<Coordinates> {
        let location = self.context_menu.choose_action()?;
        self.emit(MapSignal::RegisterLocation(location));
        Some(location)
    }

    pub fn handle_document_click(&mut self) {
        if self.context_menu.document_click() {
            debug!("context menu dismissed");
        }
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu.close();
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.context_menu
    }

    pub fn context_menu_position(&self) -> Option<ScreenPoint> {
        self.context_menu.position()
    }

    pub fn set_pick_mode(&mut self, enabled: bool) {
        self.pick_mode = enabled;
        if !self.hovering {
            self.surface.set_cursor(self.idle_cursor());
        }
    }

    pub fn is_pick_mode(&self) -> bool {
        self.pick_mode
    }

    pub fn set_viewport(&mut self, viewport: ScreenSize) {
        self.viewport = viewport;
    }

    pub fn bounds(&self) -> MapBounds {
        self.surface.bounds()
    }

    /// 描画タスクを止めてレイヤーと地図を解放する
    pub async fn unmount(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.render_task.take()
            && let Err(e) = task.await
        {
            warn!("Map render task ended abnormally: {}", e);
        }
        if let Err(e) = self.surface.remove_marker_layer(MARKER_LAYER_ID) {
            debug!("marker layer already gone: {}", e);
        }
        self.surface.release();
        debug!("map adapter unmounted");
    }

    fn idle_cursor(&self) -> MapCursor {
        if self.pick_mode {
            MapCursor::Crosshair
        } else {
            MapCursor::Default
        }
    }

    /// 一覧から引き、無ければ表示中の選択コート（ID 指定で取得したもの）を使う
    fn clicked_court(&self, feature_id: &str) -> Option<Court> {
        self.store.read(|s| {
            s.courts
                .iter()
                .find(|c| c.id == feature_id)
                .or_else(|| s.selected().filter(|c| c.id == feature_id))
                .cloned()
        })
    }

    fn emit(&self, signal: MapSignal) {
        if self.signals.send(signal).is_err() {
            debug!("map signal dropped: receiver closed");
        }
    }
}

impl Drop for MapAdapter {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn render_loop(
    surface: Arc<dyn MapSurface>,
    mut rx: watch::Receiver<CourtState>,
    mut focused: Option<CourtId>,
    camera: CameraSettings,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    debug!("court store dropped, stopping map render loop");
                    break;
                }
                let state = rx.borrow_and_update().clone();
                if let Err(e) = surface.set_marker_layer(&layer_for_state(&state)) {
                    warn!("Failed to update marker layer: {}", e);
                }
                if let Err(e) = focus_selection(surface.as_ref(), &state, &mut focused, camera) {
                    warn!("Failed to move camera: {}", e);
                }
            }
        }
    }
}

/// 選択が別のコートに変わったときだけカメラを移動する
fn focus_selection(
    surface: &dyn MapSurface,
    state: &CourtState,
    focused: &mut Option<CourtId>,
    camera: CameraSettings,
) -> Result<(), AppError> {
    let selected = state.selected();
    if selected.map(|c| &c.id) == focused.as_ref() {
        return Ok(());
    }
    *focused = selected.map(|c| c.id.clone());
    if let Some(court) = selected {
        surface.fly_to(camera.target(court.coordinates()))?;
    }
    Ok(())
}
