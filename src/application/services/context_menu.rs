use crate::domain::value_objects::{Coordinates, ScreenPoint, ScreenSize};
use crate::shared::config::ContextMenuConfig;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// メニューが画面外にはみ出す場合は自身の幅・高さ分だけ反対側へずらす
pub fn place_menu(anchor: ScreenPoint, menu: ScreenSize, viewport: ScreenSize) -> ScreenPoint {
    let mut position = anchor;
    if anchor.x + menu.width > viewport.width {
        position.x = anchor.x - menu.width;
    }
    if anchor.y + menu.height > viewport.height {
        position.y = anchor.y - menu.height;
    }
    position
}

#[derive(Debug, Clone, PartialEq)]
struct OpenMenu {
    position: ScreenPoint,
    location: Coordinates,
    armed_at: Instant,
}

/// 地図の右クリックで開く「장소 등록」メニュー
#[derive(Debug, Clone)]
pub struct ContextMenu {
    size: ScreenSize,
    dismiss_delay: Duration,
    open: Option<OpenMenu>,
}

impl ContextMenu {
    pub fn new(size: ScreenSize, dismiss_delay: Duration) -> Self {
        Self {
            size,
            dismiss_delay,
            open: None,
        }
    }

    pub fn from_config(config: &ContextMenuConfig) -> Self {
        Self::new(
            ScreenSize::new(config.width, config.height),
            Duration::from_millis(config.dismiss_delay_ms),
        )
    }

    /// 既に開いていれば新しい位置で開き直す
    pub fn open(
        &mut self,
        anchor: ScreenPoint,
        location: Coordinates,
        viewport: ScreenSize,
    ) -> ScreenPoint {
        let position = place_menu(anchor, self.size, viewport);
        debug!(?anchor, ?position, %location, "context menu opened");
        self.open = Some(OpenMenu {
            position,
            location,
            armed_at: Instant::now() + self.dismiss_delay,
        });
        position
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn position(&self) -> Option<ScreenPoint> {
        self.open.as_ref().map(|m| m.position)
    }

    pub fn location(&self) -> Option<Coordinates> {
        self.open.as_ref().map(|m| m.location)
    }

    /// アクションを押した。メニューを閉じて対象座標を返す
    pub fn choose_action(&mut self) -> Option<Coordinates> {
        self.open.take().map(|m| m.location)
    }

    /// メニュー自身のクリックはドキュメントへ伝播させない
    pub fn click_inside(&self) {}

    /// ドキュメント上のクリック。開いた直後のクリックは無視する。閉じたら true
    pub fn document_click(&mut self) -> bool {
        match &self.open {
            Some(menu) if Instant::now() >= menu.armed_at => {
                self.open = None;
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}
