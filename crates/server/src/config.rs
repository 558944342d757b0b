use std::path::PathBuf;

/// Server settings, read from the environment with local-dev defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub dataset_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3000,
            assets_dir: PathBuf::from("assets"),
            dist_dir: PathBuf::from("dist"),
            dataset_file: "temples.json".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or unparsable values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();
        ServerConfig {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            dist_dir: lookup("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dist_dir),
            dataset_file: lookup("DATASET_FILE").unwrap_or(defaults.dataset_file),
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.assets_dir.join(&self.dataset_file)
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.assets_dir.join("icons")
    }
}
