use std::path::{Path, PathBuf};

use thiserror::Error;
use trip_map_shared::dataset::{self, DatasetError};
use trip_map_shared::models::Location;

#[derive(Debug, Error)]
pub enum AssetsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid dataset {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: DatasetError,
    },
}

/// The point-of-interest dataset, checked once before anything is served.
pub struct Assets {
    pub locations: Vec<Location>,
}

impl Assets {
    pub fn load(dataset_path: &Path) -> Result<Self, AssetsError> {
        let data = std::fs::read_to_string(dataset_path).map_err(|source| AssetsError::Read {
            path: dataset_path.to_path_buf(),
            source,
        })?;
        let locations = dataset::parse(&data).map_err(|source| AssetsError::Invalid {
            path: dataset_path.to_path_buf(),
            source,
        })?;

        let visited = locations.iter().filter(|l| l.visited).count();
        tracing::info!(
            locations = locations.len(),
            visited,
            path = %dataset_path.display(),
            "Loaded dataset"
        );

        Ok(Assets { locations })
    }
}
