use serde::Deserialize;
use std::path::PathBuf;

/// Environment variables read by [`Config::from_env`] carry this prefix,
/// e.g. `SONG_SERVICE_PORT=8080`.
pub const ENV_PREFIX: &str = "SONG_SERVICE_";

/// Directory holding the audio files. The built-in catalog paths start with it.
pub const SONGS_DIR: &str = "songs";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    // Catalog file paths and the working directories below are resolved
    // against this directory.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_dir: default_base_dir(),
            templates_dir: default_templates_dir(),
            index_file: default_index_file(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Config rooted at `base_dir`, everything else at its default.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn songs_path(&self) -> PathBuf {
        self.base_dir.join(SONGS_DIR)
    }

    pub fn templates_path(&self) -> PathBuf {
        self.base_dir.join(&self.templates_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.templates_path().join(&self.index_file)
    }

    /// Resolve a catalog file path. No traversal checks are made, so this
    /// must only ever see paths from the built-in catalog.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.base_dir.join(file)
    }
}

/// Create the songs and templates directories if they are missing.
pub async fn ensure_directories(config: &Config) -> std::io::Result<()> {
    for dir in [config.songs_path(), config.templates_path()] {
        tokio::fs::create_dir_all(&dir).await?;
        tracing::debug!("Ensured directory {}", dir.display());
    }
    Ok(())
}
