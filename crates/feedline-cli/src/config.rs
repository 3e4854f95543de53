use anyhow::{Context, Result};
use feedline_engine::seed::default_viewer;
use feedline_types::Author;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FEEDLINE_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`<config_dir>/feedline/config.toml`)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FEEDLINE_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("feedline").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl From<ViewerConfig> for Author {
    fn from(viewer: ViewerConfig) -> Self {
        Author {
            name: viewer.name,
            role: viewer.role,
            avatar_url: viewer.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed_path: Option<PathBuf>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub viewer: Option<ViewerConfig>,
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Profile used for the sidebar and for new comments.
    pub fn viewer(&self) -> Author {
        self.viewer
            .clone()
            .map(Author::from)
            .unwrap_or_else(default_viewer)
    }
}
