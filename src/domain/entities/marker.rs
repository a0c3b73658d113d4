use crate::domain::constants::{
    MARKER_COLOR_APPROVED, MARKER_COLOR_PENDING, MARKER_COLOR_REJECTED, MARKER_RADIUS,
    MARKER_RADIUS_SELECTED, MARKER_STROKE_COLOR, MARKER_STROKE_WIDTH,
};
use crate::domain::value_objects::{CourtId, CourtStatus};
use serde::Serialize;

/// 円マーカーの描画スタイル
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub stroke_width: f64,
}

impl MarkerStyle {
    pub fn for_status(status: CourtStatus, is_selected: bool) -> Self {
        Self {
            radius: if is_selected {
                MARKER_RADIUS_SELECTED
            } else {
                MARKER_RADIUS
            },
            fill_color: fill_color(status),
            stroke_color: MARKER_STROKE_COLOR,
            stroke_width: MARKER_STROKE_WIDTH,
        }
    }
}

/// 状態ごとの塗り色。新しい状態を追加したらここでコンパイルエラーになる
pub fn fill_color(status: CourtStatus) -> &'static str {
    match status {
        CourtStatus::Approved => MARKER_COLOR_APPROVED,
        CourtStatus::Pending => MARKER_COLOR_PENDING,
        CourtStatus::Rejected => MARKER_COLOR_REJECTED,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerFeature {
    pub court_id: CourtId,
    pub name: String,
    pub status: CourtStatus,
    pub is_selected: bool,
    /// GeoJSON 順（経度, 緯度）
    pub position: [f64; 2],
    pub style: MarkerStyle,
}

/// 地図に載せるマーカーレイヤー一式
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub id: &'static str,
    pub features: Vec<MarkerFeature>,
}

impl MarkerLayer {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature(&self, id: &CourtId) -> Option<&MarkerFeature> {
        self.features.iter().find(|f| &f.court_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_its_own_color() {
        let colors = [
            fill_color(CourtStatus::Approved),
            fill_color(CourtStatus::Pending),
            fill_color(CourtStatus::Rejected),
        ];
        assert_eq!(colors, ["#3b82f6", "#f59e0b", "#ef4444"]);
    }

    #[test]
    fn selected_marker_is_larger() {
        assert_eq!(MarkerStyle::for_status(CourtStatus::Pending, true).radius, 8.0);
        assert_eq!(MarkerStyle::for_status(CourtStatus::Pending, false).radius, 6.0);
    }
}
