mod api;
mod components;
mod leaflet;
mod pages;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/trips")]
    Trips {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::trips::TripsPage {}
    }
}

#[component]
fn Trips() -> Element {
    rsx! {
        pages::trips::TripsPage {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
