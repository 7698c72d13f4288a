//! Local configuration management.
//!
//! Config is stored at `~/.config/est/config.toml` and contains:
//! - the portal origin every endpoint path is joined to
//! - the session cookie sent with every request
//! - the identity used for role-gated rendering

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::types::Role;

const CONFIG_DIR: &str = "est";
const CONFIG_FILE: &str = "config.toml";

/// Local configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Portal origin (default: http://localhost:3000).
    #[serde(default = "default_portal_url")]
    pub portal_url: String,

    /// Session cookie value authenticating every request.
    #[serde(default)]
    pub session_cookie: Option<String>,

    /// Logged-in user id, used only for client-side rendering decisions.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Role the dashboard renders as. Advisory; the server enforces access.
    #[serde(default)]
    pub role: Option<Role>,
}

fn default_portal_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            portal_url: default_portal_url(),
            session_cookie: None,
            user_id: None,
            role: None,
        }
    }
}

impl LocalConfig {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Get the session cookie as a SecretString.
    pub fn session_cookie_secret(&self) -> Option<SecretString> {
        self.session_cookie.clone().map(SecretString::from)
    }

    /// Check if a session cookie is configured.
    pub fn has_session(&self) -> bool {
        self.session_cookie
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Set the session cookie.
    pub fn set_session(&mut self, cookie: String) {
        self.session_cookie = Some(cookie);
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalConfig::default();
        assert_eq!(config.portal_url, "http://localhost:3000");
        assert!(config.session_cookie.is_none());
        assert!(config.role.is_none());
    }

    #[test]
    fn test_has_session() {
        let mut config = LocalConfig::default();
        assert!(!config.has_session());

        config.set_session("s3ss10n".to_string());
        assert!(config.has_session());

        config.set_session(String::new());
        assert!(!config.has_session());
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut config = LocalConfig::default();
        config.set_session("abc".to_string());
        config.role = Some(Role::Agent);

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LocalConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.session_cookie, config.session_cookie);
        assert_eq!(parsed.portal_url, config.portal_url);
        assert_eq!(parsed.role, Some(Role::Agent));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = LocalConfig::default();
        config.portal_url = "https://portal.example.com".to_string();
        config.user_id = Some("u42".to_string());
        config.save_to(&path).unwrap();

        let loaded = LocalConfig::load_from(&path).unwrap();
        assert_eq!(loaded.portal_url, "https://portal.example.com");
        assert_eq!(loaded.user_id.as_deref(), Some("u42"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: LocalConfig = toml::from_str(r#"session_cookie = "abc""#).unwrap();
        assert_eq!(parsed.portal_url, "http://localhost:3000");
        assert!(parsed.has_session());
    }
}
