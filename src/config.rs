use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default base URL for the iTunes lookup API
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Store country used when none is given
pub const DEFAULT_COUNTRY: &str = "us";

/// Timeout for lookup requests in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with lookup requests
pub const USER_AGENT: &str = "appstore-version";

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "APPSTORE_VERSION_LOG";

/// Configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub country: String,
    pub lookup: LookupConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            lookup: LookupConfig::default(),
        }
    }
}

/// Lookup transport configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupConfig {
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location if it exists.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Returns the path to the config directory for appstore-version.
/// Uses $XDG_CONFIG_HOME/appstore-version if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/appstore-version,
/// or ./appstore-version if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("appstore-version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "lookup": {
                "timeoutMs": 1000
            }
        }))
        .unwrap();

        assert_eq!(result.country, DEFAULT_COUNTRY);
        assert_eq!(result.lookup.timeout_ms, 1000);
        assert_eq!(result.lookup.base_url, DEFAULT_BASE_URL);
        assert_eq!(result.lookup.user_agent, USER_AGENT);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "country": "br",
            "lookup": {
                "baseUrl": "http://localhost:8080",
                "timeoutMs": 5000,
                "userAgent": "my-app/1.0"
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                country: "br".to_string(),
                lookup: LookupConfig {
                    base_url: "http://localhost:8080".to_string(),
                    timeout_ms: 5000,
                    user_agent: "my-app/1.0".to_string(),
                }
            }
        );
    }

    #[test]
    fn load_reads_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "country": "jp" }"#).unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.country, "jp");
        assert_eq!(config.lookup, LookupConfig::default());
    }

    #[test]
    fn load_fails_for_missing_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn load_fails_for_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/appstore-version"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.config/appstore-version"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./appstore-version"));
    }
}
