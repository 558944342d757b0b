use dioxus::logger::tracing;
use dioxus::prelude::*;
use trip_map_shared::config::MapConfig;
use trip_map_shared::filter::FilterState;
use trip_map_shared::gate::EngineGate;
use trip_map_shared::markers::compose_markers;
use trip_map_shared::models::Location;

use crate::api;
use crate::components::filter_panel::FilterPanel;
use crate::leaflet::{self, LeafletMap};

const MAP_CONTAINER_ID: &str = "trip-map-container";

/// What the map area shows. Failures are terminal; the user reloads the page.
#[derive(Debug, Clone, PartialEq)]
enum MapStatus {
    Loading,
    Failed(String),
    Ready,
}

/// Combine the engine gate, the dataset fetch and any error raised while
/// building the map. An engine failure wins over a dataset failure, and both
/// must succeed before the map is shown.
fn map_status(
    gate: &EngineGate,
    dataset: Option<&Result<Vec<Location>, String>>,
    map_error: Option<&str>,
) -> MapStatus {
    match (gate, dataset, map_error) {
        (EngineGate::Failed(e), _, _) => MapStatus::Failed(format!("Failed to load map: {}", e)),
        (_, Some(Err(e)), _) => MapStatus::Failed(format!("Failed to load locations: {}", e)),
        (_, _, Some(e)) => MapStatus::Failed(e.to_string()),
        (EngineGate::Ready, Some(Ok(_)), None) => MapStatus::Ready,
        _ => MapStatus::Loading,
    }
}

/// The map is created exactly once, after the engine is ready and the
/// container is in the DOM.
fn should_mount(gate: &EngineGate, container_mounted: bool, already_mounted: bool) -> bool {
    gate.is_ready() && container_mounted && !already_mounted
}

#[component]
pub fn MapView() -> Element {
    let config = use_hook(MapConfig::default);
    let leaflet_js = config.leaflet_js;

    // One-shot loads: the mapping engine and the dataset
    let engine = use_resource(move || async move {
        let outcome = leaflet::load(leaflet_js).await;
        match &outcome {
            Ok(()) => tracing::info!("Leaflet ready"),
            Err(e) => tracing::error!(error = %e, "Leaflet failed to load"),
        }
        outcome
    });
    let dataset = use_resource(|| async move {
        let outcome = api::fetch_locations().await;
        if let Err(e) = &outcome {
            tracing::error!(error = %e, "Dataset fetch failed");
        }
        outcome
    });

    let filters = use_signal(FilterState::default);
    let mut container_mounted = use_signal(|| false);
    let mut map = use_signal(|| None::<LeafletMap>);
    let mut map_error = use_signal(|| None::<String>);

    // Markers to draw for the current dataset and filter selection
    let markers = use_memo(move || match &*dataset.read() {
        Some(Ok(locations)) => compose_markers(locations, &filters.read()),
        _ => Vec::new(),
    });

    // Create the Leaflet map once the engine is loaded and the container exists
    let mount_config = config.clone();
    use_effect(move || {
        let gate = EngineGate::from_pending(engine.read().as_ref().cloned());
        if !should_mount(&gate, *container_mounted.read(), map.peek().is_some()) {
            return;
        }
        match LeafletMap::mount(MAP_CONTAINER_ID, &mount_config) {
            Ok(m) => map.set(Some(m)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create map");
                map_error.set(Some(format!("Failed to create map: {}", e)));
            }
        }
    });

    // Redraw markers whenever the visible set changes
    use_effect(move || {
        let markers = markers.read();
        if let Some(m) = map.read().as_ref() {
            match m.draw_markers(&markers) {
                Ok(()) => tracing::debug!(count = markers.len(), "Redrew markers"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to draw markers");
                    map_error.set(Some(format!("Failed to draw markers: {}", e)));
                }
            }
        }
    });

    let gate = EngineGate::from_pending(engine.read().as_ref().cloned());
    let status = map_status(&gate, dataset.read().as_ref(), map_error.read().as_deref());
    let height = config.height_px;

    let body = match status {
        MapStatus::Loading => rsx! {
            div { class: "map-status", "aria-busy": "true", "Loading map..." }
        },
        MapStatus::Failed(message) => rsx! {
            div { class: "map-status map-failed", "role": "alert",
                p { "{message}" }
                p { class: "map-failed-hint", "Reload the page to try again." }
            }
        },
        MapStatus::Ready => rsx! {
            FilterPanel { filters: filters }
            div {
                id: MAP_CONTAINER_ID,
                class: "map-canvas",
                onmounted: move |_| container_mounted.set(true),
            }
        },
    };

    rsx! {
        div { class: "trip-map", style: "height: {height}px;",
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trip_map_shared::models::{Category, LatLng};

    fn one_location() -> Vec<Location> {
        vec![Location {
            id: 1,
            name: "Guruvayur".to_string(),
            category: Category::Krishna,
            coords: LatLng::new(10.5946, 76.0394),
            visited: false,
        }]
    }

    #[test]
    fn test_loading_until_both_ready() {
        let data = Ok(one_location());
        assert_eq!(map_status(&EngineGate::Loading, None, None), MapStatus::Loading);
        assert_eq!(map_status(&EngineGate::Loading, Some(&data), None), MapStatus::Loading);
        assert_eq!(map_status(&EngineGate::Ready, None, None), MapStatus::Loading);
        assert_eq!(map_status(&EngineGate::Ready, Some(&data), None), MapStatus::Ready);
    }

    #[test]
    fn test_engine_failure_is_reported() {
        let status = map_status(&EngineGate::Failed("blocked".to_string()), None, None);
        assert_eq!(status, MapStatus::Failed("Failed to load map: blocked".to_string()));
    }

    #[test]
    fn test_engine_failure_wins_over_dataset_failure() {
        let data = Err("404".to_string());
        let status = map_status(&EngineGate::Failed("blocked".to_string()), Some(&data), None);
        assert_eq!(status, MapStatus::Failed("Failed to load map: blocked".to_string()));
    }

    #[test]
    fn test_dataset_failure_is_reported_while_engine_loads() {
        let data = Err("location 4 has unknown category \"mosque\"".to_string());
        match map_status(&EngineGate::Loading, Some(&data), None) {
            MapStatus::Failed(msg) => assert!(msg.starts_with("Failed to load locations")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset_is_ready() {
        let data = Ok(Vec::new());
        assert_eq!(map_status(&EngineGate::Ready, Some(&data), None), MapStatus::Ready);
    }

    #[test]
    fn test_map_error_is_reported() {
        let data = Ok(one_location());
        let status = map_status(
            &EngineGate::Ready,
            Some(&data),
            Some("Failed to create map: container not found"),
        );
        assert_eq!(
            status,
            MapStatus::Failed("Failed to create map: container not found".to_string())
        );
    }

    #[test]
    fn test_load_failure_wins_over_map_error() {
        let data = Err("404".to_string());
        match map_status(&EngineGate::Ready, Some(&data), Some("Failed to draw markers: x")) {
            MapStatus::Failed(msg) => assert!(msg.starts_with("Failed to load locations")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_mounts_only_when_engine_ready() {
        assert!(!should_mount(&EngineGate::Loading, true, false));
        assert!(!should_mount(&EngineGate::Failed("blocked".to_string()), true, false));
        assert!(!should_mount(&EngineGate::Ready, false, false));
        assert!(should_mount(&EngineGate::Ready, true, false));
    }

    #[test]
    fn test_mounts_once() {
        assert!(!should_mount(&EngineGate::Ready, true, true));
    }
}
