//! What the map draws for a given dataset and filter selection.

use crate::filter::FilterState;
use crate::icons::{icon_for, IconDescriptor};
use crate::models::{Category, LatLng, Location, Status};

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub icon: IconDescriptor,
    pub popup: PopupContent,
}

/// Text shown in a marker's popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub name: String,
    pub category: Category,
    pub status: Status,
}

impl PopupContent {
    pub fn for_location(location: &Location) -> Self {
        PopupContent {
            name: location.name.clone(),
            category: location.category,
            status: location.status(),
        }
    }

    pub fn status_text(&self) -> String {
        format!("{} {}", self.status.glyph(), self.status.label())
    }

    /// Popup body as HTML. The name comes from the dataset and is escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<strong>{}</strong><br/>Category: {}<br/>Status: {}",
            escape_html(&self.name),
            self.category.key(),
            self.status_text()
        )
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl MarkerSpec {
    pub fn for_location(location: &Location) -> Self {
        MarkerSpec {
            position: location.coords,
            icon: icon_for(location),
            popup: PopupContent::for_location(location),
        }
    }
}

/// One marker per displayed location, in dataset order.
pub fn compose_markers(dataset: &[Location], filters: &FilterState) -> Vec<MarkerSpec> {
    filters
        .visible(dataset)
        .into_iter()
        .map(MarkerSpec::for_location)
        .collect()
}
