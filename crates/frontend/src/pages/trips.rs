use dioxus::prelude::*;
use trip_map_shared::config::{MapConfig, PAGE_DESCRIPTION, PAGE_TITLE};

use crate::components::map_view::MapView;

#[component]
pub fn TripsPage() -> Element {
    let leaflet_css = MapConfig::default().leaflet_css;

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }
        document::Link { rel: "stylesheet", href: leaflet_css }

        section { class: "trips-section",
            div { class: "container",
                h2 { class: "trips-heading", "Trip Locations" }
                MapView {}
            }
        }
    }
}
