mod common;

use common::fixtures::{abc_courts, seoul_bounds};
use common::settle;
use courtmap_lib::AppState;
use courtmap_lib::domain::constants::MARKER_LAYER_ID;
use courtmap_lib::domain::value_objects::{CourtId, ScreenSize};
use courtmap_lib::infrastructure::api::MockCourtApi;
use courtmap_lib::infrastructure::map::HeadlessMapSurface;
use courtmap_lib::infrastructure::navigation::MemoryHistory;
use courtmap_lib::shared::AppConfig;
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

async fn booted() -> (AppState, Arc<HeadlessMapSurface>) {
    let state = AppState::with_api(
        AppConfig::default(),
        Arc::new(MockCourtApi::with_courts(abc_courts())),
        Arc::new(MemoryHistory::default()),
    )
    .unwrap();
    state.bootstrap(&CancellationToken::new()).await.unwrap();
    (state, Arc::new(HeadlessMapSurface::new(seoul_bounds())))
}

#[tokio::test]
async fn each_status_gets_a_distinct_colour() {
    let (state, surface) = booted().await;
    let (adapter, _signals) = state
        .mount_map(surface.clone(), ScreenSize::new(1280.0, 800.0))
        .unwrap();

    let layer = surface.layer(MARKER_LAYER_ID).unwrap();
    assert_eq!(layer.len(), 3);
    let colours: HashSet<&str> = layer.features.iter().map(|f| f.style.fill_color).collect();
    assert_eq!(colours.len(), 3);
    assert!(layer.features.iter().all(|f| f.style.radius == 6.0));

    adapter.unmount().await;
}

#[tokio::test]
async fn selecting_b_leaves_single_enlarged_marker() {
    let (state, surface) = booted().await;
    let (adapter, _signals) = state
        .mount_map(surface.clone(), ScreenSize::new(1280.0, 800.0))
        .unwrap();

    let b = state.store.read(|s| {
        s.find(&CourtId::new("b".to_string()).unwrap())
            .cloned()
            .unwrap()
    });
    state.navigation.select_court(b.clone());

    settle(|| surface.layer(MARKER_LAYER_ID).is_some_and(|l| l.len() == 1)).await;
    let layer = surface.layer(MARKER_LAYER_ID).unwrap();
    let marker = &layer.features[0];
    assert_eq!(marker.court_id, b.id);
    assert_eq!(marker.style.radius, 8.0);
    assert!(marker.is_selected);

    settle(|| surface.flights().len() == 1).await;
    assert_eq!(surface.flights()[0].center, b.coordinates());

    state.navigation.clear_selection();
    settle(|| surface.layer(MARKER_LAYER_ID).is_some_and(|l| l.len() == 3)).await;

    adapter.unmount().await;
}

#[tokio::test]
async fn search_query_narrows_markers() {
    let (state, surface) = booted().await;
    let (adapter, _signals) = state
        .mount_map(surface.clone(), ScreenSize::new(1280.0, 800.0))
        .unwrap();

    state.store.set_query("C 코트");
    settle(|| surface.layer(MARKER_LAYER_ID).is_some_and(|l| l.len() == 1)).await;
    assert_eq!(
        surface.layer(MARKER_LAYER_ID).unwrap().features[0].style.fill_color,
        "#ef4444"
    );

    adapter.unmount().await;
}
