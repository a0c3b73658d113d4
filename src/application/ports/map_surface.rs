use crate::domain::entities::MarkerLayer;
use crate::domain::value_objects::{Coordinates, CourtId, MapBounds, ScreenPoint};
use crate::shared::error::AppError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub center: Coordinates,
    pub zoom: f64,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapCursor {
    #[default]
    Default,
    Pointer,
    Crosshair,
}

/// 地図ウィジェットから届く操作イベント
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Loaded,
    /// 左クリック。マーカー上なら `feature_id` にコート ID が入る
    Click {
        point: ScreenPoint,
        location: Coordinates,
        feature_id: Option<String>,
    },
    /// 右クリック
    ContextMenu {
        point: ScreenPoint,
        location: Coordinates,
    },
    MoveEnd {
        bounds: MapBounds,
    },
    MarkerEnter {
        court_id: CourtId,
    },
    MarkerLeave,
}

/// イベント処理後にウィジェットへ返す指示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Continue,
    /// ブラウザ標準の挙動（右クリックメニューなど）を抑止する
    PreventDefault,
}

/// 地図描画ウィジェットの機能
pub trait MapSurface: Send + Sync {
    /// 同じ ID のソース・レイヤーがあれば置き換える
    fn set_marker_layer(&self, layer: &MarkerLayer) -> Result<(), AppError>;

    fn remove_marker_layer(&self, layer_id: &str) -> Result<(), AppError>;

    fn fly_to(&self, target: CameraTarget) -> Result<(), AppError>;

    fn bounds(&self) -> MapBounds;

    fn set_cursor(&self, cursor: MapCursor);

    /// リスナーを含むすべてのリソースを解放する
    fn release(&self);
}
