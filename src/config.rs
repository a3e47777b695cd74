use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, StarfolkError};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// ~/.config/starfolk/config.toml (Linux) or ~/Library/Application Support/starfolk/config.toml (macOS)
pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("starfolk").join("config.toml"))
}

impl Config {
    /// Load from `path`, or the default location. Falls back to defaults on any problem.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match Config::parse(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Config::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(content).map_err(|e| StarfolkError::Config(e.to_string()))?;
        if config.api.base_url.trim().is_empty() {
            config.api.base_url = DEFAULT_BASE_URL.to_string();
        }
        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8000/api"

[ui]
tick_rate_ms = 100
"#;
        let config = Config::parse(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::parse("[ui]\n").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn empty_base_url_falls_back() {
        let config = Config::parse("[api]\nbase_url = \"  \"\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = Config::parse("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, StarfolkError::Config(_)));
    }

    #[test]
    fn missing_file_uses_default() {
        let config = Config::load(Some(Path::new("/nonexistent/starfolk/config.toml")));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn cli_override_wins() {
        let config = Config::default().with_api_url(Some("http://127.0.0.1:9000/api".into()));
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");

        let config = Config::default().with_api_url(None);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }
}
