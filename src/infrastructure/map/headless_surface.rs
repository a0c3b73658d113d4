use crate::application::ports::{CameraTarget, MapCursor, MapSurface};
use crate::domain::entities::MarkerLayer;
use crate::domain::value_objects::MapBounds;
use crate::shared::error::AppError;
use std::collections::HashMap;
use std::sync::Mutex as StdMutex;
use tracing::debug;

#[derive(Debug, Default)]
struct SurfaceState {
    layers: HashMap<String, MarkerLayer>,
    flights: Vec<CameraTarget>,
    cursor: MapCursor,
    bounds: Option<MapBounds>,
    layer_updates: usize,
    released: bool,
}

/// 描画せずに状態だけを保持する地図。CLI 出力とテストで使う
#[derive(Debug)]
pub struct HeadlessMapSurface {
    state: StdMutex<SurfaceState>,
}

impl HeadlessMapSurface {
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            state: StdMutex::new(SurfaceState {
                bounds: Some(bounds),
                ..Default::default()
            }),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut SurfaceState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    pub fn layer(&self, layer_id: &str) -> Option<MarkerLayer> {
        self.with_state(|s| s.layers.get(layer_id).cloned())
    }

    pub fn flights(&self) -> Vec<CameraTarget> {
        self.with_state(|s| s.flights.clone())
    }

    pub fn cursor(&self) -> MapCursor {
        self.with_state(|s| s.cursor)
    }

    /// `set_marker_layer` が呼ばれた回数
    pub fn layer_updates(&self) -> usize {
        self.with_state(|s| s.layer_updates)
    }

    pub fn is_released(&self) -> bool {
        self.with_state(|s| s.released)
    }

    /// ユーザーのパン・ズーム操作で表示範囲が変わったことにする
    pub fn set_bounds(&self, bounds: MapBounds) {
        self.with_state(|s| s.bounds = Some(bounds));
    }

    fn ensure_alive(state: &SurfaceState) -> Result<(), AppError> {
        if state.released {
            return Err(AppError::MapSurface("map surface already released".into()));
        }
        Ok(())
    }
}

impl MapSurface for HeadlessMapSurface {
    fn set_marker_layer(&self, layer: &MarkerLayer) -> Result<(), AppError> {
        self.with_state(|s| {
            Self::ensure_alive(s)?;
            s.layers.insert(layer.id.to_string(), layer.clone());
            s.layer_updates += 1;
            Ok(())
        })
    }

    fn remove_marker_layer(&self, layer_id: &str) -> Result<(), AppError> {
        self.with_state(|s| {
            Self::ensure_alive(s)?;
            s.layers.remove(layer_id);
            Ok(())
        })
    }

    fn fly_to(&self, target: CameraTarget) -> Result<(), AppError> {
        self.with_state(|s| {
            Self::ensure_alive(s)?;
            debug!(center = %target.center, zoom = target.zoom, "fly to");
            s.bounds = s.bounds.map(|b| recenter(b, target));
            s.flights.push(target);
            Ok(())
        })
    }

    fn bounds(&self) -> MapBounds {
        self.with_state(|s| {
            s.bounds.unwrap_or(MapBounds {
                north: 90.0,
                south: -90.0,
                east: 180.0,
                west: -180.0,
            })
        })
    }

    fn set_cursor(&self, cursor: MapCursor) {
        self.with_state(|s| s.cursor = cursor);
    }

    fn release(&self) {
        self.with_state(|s| {
            s.layers.clear();
            s.released = true;
        });
    }
}

/// 表示範囲の大きさは保ったまま中心だけ移す
fn recenter(bounds: MapBounds, target: CameraTarget) -> MapBounds {
    let half_lat = (bounds.north - bounds.south) / 2.0;
    let half_lng = (bounds.east - bounds.west) / 2.0;
    let c = target.center;
    MapBounds {
        north: (c.latitude + half_lat).min(90.0),
        south: (c.latitude - half_lat).max(-90.0),
        east: (c.longitude + half_lng).min(180.0),
        west: (c.longitude - half_lng).max(-180.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Coordinates;
    use std::time::Duration;

    fn seoul_bounds() -> MapBounds {
        MapBounds::new(37.7, 37.4, 127.2, 126.8).unwrap()
    }

    #[test]
    fn fly_to_recenters_bounds() {
        let surface = HeadlessMapSurface::new(seoul_bounds());
        surface
            .fly_to(CameraTarget {
                center: Coordinates::new(35.0, 129.0).unwrap(),
                zoom: 15.0,
                duration: Duration::from_millis(1000),
            })
            .unwrap();

        let center = surface.bounds().center();
        assert!((center.latitude - 35.0).abs() < 1e-9);
        assert!((center.longitude - 129.0).abs() < 1e-9);
        assert_eq!(surface.flights().len(), 1);
    }

    #[test]
    fn released_surface_rejects_updates() {
        let surface = HeadlessMapSurface::new(seoul_bounds());
        surface.release();
        let layer = MarkerLayer {
            id: "court-markers",
            features: vec![],
        };
        assert!(matches!(
            surface.set_marker_layer(&layer),
            Err(AppError::MapSurface(_))
        ));
        assert!(surface.is_released());
    }
}
