use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Catalog constants
// =============================================================================

/// Default base URL of the Fedora Koji package server
pub const DEFAULT_KOJI_URL: &str = "https://kojipkgs.fedoraproject.org";

/// Timeout for the catalog fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Oldest Fedora release whose repository is still listed
pub const MIN_FEDORA_RELEASE: u32 = 34;

/// Name of the configuration file inside the config directory
const CONFIG_FILE_NAME: &str = "config.json";

/// Tool configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolConfig {
    pub catalog: CatalogConfig,
    pub cargo: CargoConfig,
}

/// Distribution catalog configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Base URL of the Koji package server
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_KOJI_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

/// Cargo invocation configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CargoConfig {
    /// Cargo executable; `$CARGO` or `cargo` when unset
    pub program: Option<PathBuf>,
    /// Leave out path dependencies unless overridden on the command line
    pub skip_path: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolConfig {
    /// Load the configuration from an explicit file, or from the default
    /// location when it exists, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
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

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for relkit.
/// Uses $XDG_DATA_HOME/relkit if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/relkit,
/// or ./relkit if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("relkit.log")
}

/// Returns the path to the default configuration file.
pub fn config_path() -> PathBuf {
    config_path_with_dir(dirs::config_dir())
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("relkit")
}

fn config_path_with_dir(config_dir: Option<PathBuf>) -> PathBuf {
    config_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join("relkit")
        .join(CONFIG_FILE_NAME)
}
