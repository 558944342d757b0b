use serde::{Deserialize, Serialize};

/// Pilgrimage site classification. The set is closed: every dataset record
/// must use one of these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jyotirlinga,
    Jyotipeeth,
    Shaktipeeth,
    Krishna,
}

impl Category {
    /// All categories in filter-panel display order.
    pub const ALL: [Category; 4] = [
        Category::Jyotirlinga,
        Category::Jyotipeeth,
        Category::Shaktipeeth,
        Category::Krishna,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Jyotirlinga => "jyotirlinga",
            Category::Jyotipeeth => "jyotipeeth",
            Category::Shaktipeeth => "shaktipeeth",
            Category::Krishna => "krishna",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Jyotirlinga => "Jyotirlinga",
            Category::Jyotipeeth => "Jyotipeeth",
            Category::Shaktipeeth => "Shaktipeeth",
            Category::Krishna => "Krishna",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Jyotirlinga => "\u{1f549}\u{fe0f}",
            Category::Jyotipeeth => "\u{1f338}",
            Category::Shaktipeeth => "\u{1f549}\u{fe0f}",
            Category::Krishna => "\u{1f3b5}",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Position in [`Category::ALL`], used as a table index.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Visited status derived from a location's `visited` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Visited,
    NotVisited,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Visited, Status::NotVisited];

    pub fn of(visited: bool) -> Status {
        if visited {
            Status::Visited
        } else {
            Status::NotVisited
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Status::Visited => "visited",
            Status::NotVisited => "notVisited",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Visited => "Visited",
            Status::NotVisited => "Not Visited",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Status::Visited => "\u{2705}",
            Status::NotVisited => "\u{274c}",
        }
    }

    pub fn from_key(key: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic coordinate. Serialized as a `[lat, lng]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        LatLng { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

/// A point of interest from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub coords: LatLng,
    pub visited: bool,
}

impl Location {
    pub fn status(&self) -> Status {
        Status::of(self.visited)
    }
}
