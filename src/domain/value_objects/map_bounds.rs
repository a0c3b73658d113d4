use super::coordinates::Coordinates;
use super::screen::ScreenSize;
use serde::{Deserialize, Serialize};

/// 地図の表示範囲（北・南・東・西の境界、度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl MapBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, String> {
        if south > north {
            return Err(format!("south ({south}) must not exceed north ({north})"));
        }
        if west > east {
            return Err(format!("west ({west}) must not exceed east ({east})"));
        }
        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// 境界上の点も含む
    pub fn contains(&self, point: Coordinates) -> bool {
        point.latitude >= self.south
            && point.latitude <= self.north
            && point.longitude >= self.west
            && point.longitude <= self.east
    }

    pub fn center(&self) -> Coordinates {
        Coordinates {
            latitude: (self.north + self.south) / 2.0,
            longitude: (self.east + self.west) / 2.0,
        }
    }

    /// Web メルカトルのタイル幅（256px）を基準に、中心から画面サイズ分の範囲を求める。
    /// 緯度方向は中心緯度での縮尺で近似する
    pub fn around(center: Coordinates, zoom: f64, viewport: ScreenSize) -> Self {
        let degrees_per_px = 360.0 / (256.0 * 2f64.powf(zoom));
        let half_lng = viewport.width * degrees_per_px / 2.0;
        let half_lat = viewport.height * degrees_per_px * center.latitude.to_radians().cos() / 2.0;
        Self {
            north: (center.latitude + half_lat).min(90.0),
            south: (center.latitude - half_lat).max(-90.0),
            east: (center.longitude + half_lng).min(180.0),
            west: (center.longitude - half_lng).max(-180.0),
        }
    }

    /// クエリ文字列用のペア
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("north", self.north.to_string()),
            ("south", self.south.to_string()),
            ("east", self.east.to_string()),
            ("west", self.west.to_string()),
        ]
    }
}
