//! Test configuration file (`/etc/stratis/test_config.json`)
//!
//! The file names the block devices a destructive test run may use:
//! ```json
//! {
//!   "ok_to_destroy_dev_array_key": ["/dev/vdb", "/dev/vdc"]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

/// Key holding the devices a test run may destroy
pub const DEVICES_KEY: &str = "ok_to_destroy_dev_array_key";

#[derive(Debug, Serialize, Deserialize)]
struct TestConfig {
    #[serde(rename = "ok_to_destroy_dev_array_key")]
    devices: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TestConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing JSON in {path} failed: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Required JSON key 'ok_to_destroy_dev_array_key' is missing in file {path}")]
    MissingKey { path: PathBuf },
}

/// Render a test configuration naming the given devices, indented by four
/// spaces
pub fn generate(devices: &[String]) -> Result<String, serde_json::Error> {
    let config = TestConfig {
        devices: Some(devices.to_vec()),
    };

    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    config.serialize(&mut serializer)?;

    // serde_json only writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Read the devices named by a test configuration file
pub fn parse(path: &Path) -> Result<Vec<String>, TestConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| TestConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: TestConfig =
        serde_json::from_str(&content).map_err(|source| TestConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    config.devices.ok_or_else(|| TestConfigError::MissingKey {
        path: path.to_path_buf(),
    })
}
