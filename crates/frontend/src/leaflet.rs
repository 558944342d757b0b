//! Minimal wasm-bindgen bindings to the Leaflet global `L`.
//!
//! Leaflet is not bundled: its script is injected once by [`load`], and none
//! of the bound functions may be called before that future resolves.

use trip_map_shared::config::MapConfig;
use trip_map_shared::icons::IconDescriptor;
use trip_map_shared::markers::MarkerSpec;
use trip_map_shared::models::LatLng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn create_map(container_id: &str, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method)]
    fn remove(this: &Map);

    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &Layer);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Whether the Leaflet global is present on the page.
pub fn is_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

/// Inject the Leaflet script and wait for it to finish loading.
///
/// Resolves once; a failed load is reported and never retried.
pub async fn load(script_src: &str) -> Result<(), String> {
    if is_loaded() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document unavailable")?;

    // A previous mount may have injected the tag and still be waiting on it
    let existing = document
        .query_selector(&script_selector(script_src))
        .map_err(js_err)?;
    let (script, injected) = match existing {
        Some(el) => (el, false),
        None => {
            let script: web_sys::HtmlScriptElement = document
                .create_element("script")
                .map_err(js_err)?
                .dyn_into()
                .map_err(|_| "created element is not a <script>".to_string())?;
            script.set_src(script_src);
            (web_sys::Element::from(script), true)
        }
    };

    let mut listen_err = None;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = script
            .add_event_listener_with_callback("load", &resolve)
            .and_then(|_| script.add_event_listener_with_callback("error", &reject))
        {
            listen_err = Some(js_err(e));
        }
    });
    if let Some(e) = listen_err {
        return Err(e);
    }
    if injected {
        let head = document.head().ok_or("document has no <head>")?;
        head.append_child(&script).map_err(js_err)?;
    }

    let outcome = JsFuture::from(loaded)
        .await
        .map_err(|_| format!("failed to load {}", script_src))
        .and_then(|_| {
            if is_loaded() {
                Ok(())
            } else {
                Err(format!("{} loaded but did not define L", script_src))
            }
        });
    if outcome.is_err() {
        // Let a later mount start from a clean document
        script.remove();
    }
    outcome
}

/// CSS selector matching the `<script>` tag for `src`.
fn script_selector(src: &str) -> String {
    format!("script[src=\"{}\"]", src.replace('\\', "\\\\").replace('"', "\\\""))
}

fn js_object(entries: &[(&str, JsValue)]) -> Result<JsValue, String> {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).map_err(js_err)?;
    }
    Ok(obj.into())
}

fn js_lat_lng(p: LatLng) -> JsValue {
    js_sys::Array::of2(&p.lat.into(), &p.lng.into()).into()
}

fn js_point(p: [i32; 2]) -> JsValue {
    js_sys::Array::of2(&p[0].into(), &p[1].into()).into()
}

fn js_icon(desc: &IconDescriptor) -> Result<JsValue, String> {
    let options = js_object(&[
        ("iconUrl", desc.image_url.into()),
        ("iconSize", js_point(desc.size)),
        ("iconAnchor", js_point(desc.anchor)),
        ("popupAnchor", js_point(desc.popup_anchor)),
    ])?;
    Ok(icon(&options))
}

/// A Leaflet map with its base layer and a single layer group holding the
/// current markers. Removed from the page when dropped.
pub struct LeafletMap {
    map: Map,
    markers: LayerGroup,
}

impl LeafletMap {
    pub fn mount(container_id: &str, config: &MapConfig) -> Result<Self, String> {
        let options = js_object(&[
            ("center", js_lat_lng(config.center)),
            ("zoom", config.zoom.into()),
        ])?;
        let map = create_map(container_id, &options).map_err(js_err)?;

        let tile_options = js_object(&[("attribution", config.attribution.into())])?;
        tile_layer(config.tile_url, &tile_options).add_to(&map);

        let markers = layer_group();
        markers.add_to(&map);

        Ok(LeafletMap { map, markers })
    }

    /// Replace the drawn markers with `specs`.
    pub fn draw_markers(&self, specs: &[MarkerSpec]) -> Result<(), String> {
        self.markers.clear_layers();
        for spec in specs {
            let options = js_object(&[
                ("icon", js_icon(&spec.icon)?),
                ("title", spec.popup.name.as_str().into()),
                ("alt", spec.popup.name.as_str().into()),
            ])?;
            let m = marker(&js_lat_lng(spec.position), &options);
            m.bind_popup(&spec.popup.to_html());
            self.markers.add_layer(&m);
        }
        Ok(())
    }
}

impl Drop for LeafletMap {
    fn drop(&mut self) {
        self.map.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trip_map_shared::config::LEAFLET_JS;

    #[test]
    fn test_script_selector_matches_src() {
        assert_eq!(
            script_selector(LEAFLET_JS),
            "script[src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"]"
        );
    }

    #[test]
    fn test_script_selector_escapes_quotes() {
        assert_eq!(script_selector("a\"b"), "script[src=\"a\\\"b\"]");
    }
}
