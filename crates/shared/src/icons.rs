use thiserror::Error;

use crate::models::{Category, Location};

/// Marker icon in Leaflet's terms. Sizes and anchors are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    pub image_url: &'static str,
    pub size: [i32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

pub const ICON_SIZE: [i32; 2] = [32, 32];
/// Bottom-centre of the image sits on the coordinate.
pub const ICON_ANCHOR: [i32; 2] = [16, 32];
/// Popups open just above the top of the icon.
pub const POPUP_ANCHOR: [i32; 2] = [0, -32];

/// `[not visited, visited]` image paths, indexed like [`Category::ALL`].
const ICON_TABLE: [[&str; 2]; 4] = [
    ["/icons/jyotirlinga.png", "/icons/jyotirlinga-visited.png"],
    ["/icons/jyotipeeth.png", "/icons/jyotipeeth-visited.png"],
    ["/icons/shaktipeeth.png", "/icons/shaktipeeth-visited.png"],
    ["/icons/krishna.png", "/icons/krishna-visited.png"],
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

pub fn resolve_icon(category: Category, visited: bool) -> IconDescriptor {
    IconDescriptor {
        image_url: ICON_TABLE[category.index()][visited as usize],
        size: ICON_SIZE,
        anchor: ICON_ANCHOR,
        popup_anchor: POPUP_ANCHOR,
    }
}

/// String-keyed lookup for callers holding a raw category key.
pub fn resolve_icon_key(category: &str, visited: bool) -> Result<IconDescriptor, UnknownCategory> {
    Category::from_key(category)
        .map(|c| resolve_icon(c, visited))
        .ok_or_else(|| UnknownCategory(category.to_string()))
}

pub fn icon_for(location: &Location) -> IconDescriptor {
    resolve_icon(location.category, location.visited)
}
