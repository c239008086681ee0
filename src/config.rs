use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::backend::BackendKind;

// =============================================================================
// Crawl limits
// =============================================================================

/// Default maximum directory depth followed by the crawl backend
pub const DEFAULT_MAX_NESTING_LEVEL: usize = 8;

/// Default number of pages fetched concurrently by the crawl backend
pub const DEFAULT_MAX_WORKERS: usize = 16;

// =============================================================================
// HTTP
// =============================================================================

/// Timeout for a single HTTP request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every request
pub const USER_AGENT: &str = "artifact-finder";

/// Finder configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FinderConfig {
    pub crawl: CrawlConfig,
    pub http: HttpConfig,
    pub default_backend: BackendKind,
}

/// Limits applied by the crawl backend
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CrawlConfig {
    /// Directories deeper than this are not visited
    pub max_nesting_level: usize,
    /// Upper bound on concurrent page fetches
    pub max_workers: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_nesting_level: DEFAULT_MAX_NESTING_LEVEL,
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfig {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Error raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl FinderConfig {
    /// Load a JSON configuration file; missing fields use defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for artifact-finder.
/// Uses $XDG_DATA_HOME/artifact-finder if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/artifact-finder,
/// or ./artifact-finder if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default log file.
pub fn log_path() -> PathBuf {
    data_dir().join("artifact-finder.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("artifact-finder")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn finder_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<FinderConfig>(json!({
            "crawl": {
                "maxWorkers": 4
            }
        }))
        .unwrap();

        assert_eq!(result.crawl.max_workers, 4);
        assert_eq!(result.crawl.max_nesting_level, DEFAULT_MAX_NESTING_LEVEL);
        assert_eq!(result.http, HttpConfig::default());
        assert_eq!(result.default_backend, BackendKind::Structured);
    }

    #[test]
    fn finder_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<FinderConfig>(json!({
            "crawl": {
                "maxNestingLevel": 3,
                "maxWorkers": 2
            },
            "http": {
                "timeoutMs": 500,
                "userAgent": "ci-bot"
            },
            "defaultBackend": "crawl"
        }))
        .unwrap();

        assert_eq!(
            result,
            FinderConfig {
                crawl: CrawlConfig {
                    max_nesting_level: 3,
                    max_workers: 2,
                },
                http: HttpConfig {
                    timeout_ms: 500,
                    user_agent: "ci-bot".to_string(),
                },
                default_backend: BackendKind::Crawl,
            }
        );
    }

    #[test]
    fn load_reads_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finder.json");
        std::fs::write(&path, r#"{ "defaultBackend": "html" }"#).unwrap();

        let config = FinderConfig::load(&path).unwrap();

        assert_eq!(config.default_backend, BackendKind::Crawl);
        assert_eq!(config.crawl, CrawlConfig::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = FinderConfig::load(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_reports_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finder.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            FinderConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/artifact-finder"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/artifact-finder")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./artifact-finder"));
    }
}
