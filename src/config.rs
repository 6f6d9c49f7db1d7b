use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL the `/emails` endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ServerConfig {
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("courier/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Check that `base_url` is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid server base_url: {}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Server base_url must use http or https, got {}",
                url.scheme()
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub keybinding_mode: KeybindingMode,
    #[serde(default)]
    pub theme: ThemeVariant,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeybindingMode {
    #[default]
    Vim,
    Arrows,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("courier");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Deserialize without validating; see [`Config::with_server`]
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply a per-run backend override, then validate the result
    pub fn with_server(mut self, server: Option<String>) -> Result<Self> {
        if let Some(url) = server {
            self.server.base_url = url;
        }
        self.server.validate()?;
        Ok(self)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = Self::config_dir()?;

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [server]
            base_url = "https://mail.example.com/"
            timeout_secs = 3
            user_agent = "tester"

            [ui]
            keybinding_mode = "arrows"
            theme = "high-contrast"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.server.base_url, "https://mail.example.com/");
        assert_eq!(config.server.timeout_secs, 3);
        assert_eq!(config.server.user_agent(), "tester");
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Arrows);
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[ui]\nkeybinding_mode = \"vim\"\n").unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.timeout_secs, 10);
        assert!(config.server.user_agent().starts_with("courier/"));

        let empty = Config::parse("").unwrap();
        assert_eq!(empty.ui.theme, ThemeVariant::Dark);
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let bad = Config::parse("[server]\nbase_url = \"not a url\"\n").unwrap();
        assert!(bad.with_server(None).is_err());
        let ftp = Config::parse("[server]\nbase_url = \"ftp://mail.example.com\"\n").unwrap();
        assert!(ftp.with_server(None).is_err());
    }

    #[test]
    fn test_server_override_replaces_bad_base_url() {
        let bad = Config::parse("[server]\nbase_url = \"not a url\"\n").unwrap();
        assert_eq!(bad.server.base_url, "not a url");

        let config = bad.with_server(Some("http://mail.local:9000".to_string())).unwrap();
        assert_eq!(config.server.base_url, "http://mail.local:9000");

        let config = Config::default().with_server(Some("nope".to_string()));
        assert!(config.is_err());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = Config::default();
        config.server.base_url = "http://10.0.0.2:9000".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.server.base_url, "http://10.0.0.2:9000");
    }
}
