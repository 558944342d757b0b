//! Loading and validation of the point-of-interest dataset.
//!
//! The dataset is a JSON array of `{id, name, category, coords: [lat, lng],
//! visited}` records. It is validated as a whole: a file with an unknown
//! category, a repeated id or an impossible coordinate is rejected rather than
//! rendered with broken markers.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Category, LatLng, Location};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("location {id} has unknown category {category:?}")]
    UnknownCategory { id: u64, category: String },
    #[error("location id {0} appears more than once")]
    DuplicateId(u64),
    #[error("location {id} has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoords { id: u64, lat: f64, lng: f64 },
}

/// Record shape as it appears on disk, before the category is checked.
#[derive(Deserialize)]
struct RawLocation {
    id: u64,
    name: String,
    category: String,
    coords: LatLng,
    visited: bool,
}

impl TryFrom<RawLocation> for Location {
    type Error = DatasetError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        let Some(category) = Category::from_key(&raw.category) else {
            return Err(DatasetError::UnknownCategory {
                id: raw.id,
                category: raw.category,
            });
        };
        if !raw.coords.is_valid() {
            return Err(DatasetError::InvalidCoords {
                id: raw.id,
                lat: raw.coords.lat,
                lng: raw.coords.lng,
            });
        }
        Ok(Location {
            id: raw.id,
            name: raw.name,
            category,
            coords: raw.coords,
            visited: raw.visited,
        })
    }
}

/// Parse and validate a dataset, preserving file order.
pub fn parse(json: &str) -> Result<Vec<Location>, DatasetError> {
    let raw: Vec<RawLocation> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .map(|r| {
            if !seen.insert(r.id) {
                return Err(DatasetError::DuplicateId(r.id));
            }
            Location::try_from(r)
        })
        .collect()
}
