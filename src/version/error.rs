use thiserror::Error;

use crate::config::MIN_FEDORA_RELEASE;
use crate::parser::traits::ParseError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("release must be \"rawhide\" or f<n> where n is an integer, was \"{0}\"")]
    InvalidRelease(String),

    #[error("release number must be at least {minimum}, was {number}")]
    UnsupportedRelease { number: u32, minimum: u32 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Page at URL {url} not found: unexpected status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid version \"{version}\" for distribution package {name}")]
    InvalidVersion { name: String, version: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CatalogError {
    pub(crate) fn unsupported_release(number: u32) -> Self {
        CatalogError::UnsupportedRelease {
            number,
            minimum: MIN_FEDORA_RELEASE,
        }
    }
}
