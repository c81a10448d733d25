//! Fedora Koji repository catalog implementation

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::time::Duration;

use semver::Version;
use tracing::{debug, warn};

use crate::config::{DEFAULT_KOJI_URL, FETCH_TIMEOUT_MS, MIN_FEDORA_RELEASE};
use crate::parser::koji_pkglist::KojiPkglistParser;
use crate::parser::traits::Parser;
use crate::version::error::CatalogError;
use crate::version::registry::DistroCatalog;
use crate::version::semver::parse_rpm_version;

/// A Fedora release whose Koji repository can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The rolling development release
    Rawhide,
    /// A numbered release, e.g. `f40`
    Fedora(u32),
}

impl Release {
    /// Name of the Koji repository holding the latest builds for this release
    pub fn repo_tag(&self) -> String {
        match self {
            Release::Rawhide => "rawhide".to_string(),
            Release::Fedora(number) => format!("f{number}-build"),
        }
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Release::Rawhide => f.write_str("rawhide"),
            Release::Fedora(number) => write!(f, "f{number}"),
        }
    }
}

impl std::str::FromStr for Release {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "rawhide" {
            return Ok(Release::Rawhide);
        }

        let number = s
            .strip_prefix('f')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| CatalogError::InvalidRelease(s.to_string()))?;

        if number < MIN_FEDORA_RELEASE {
            return Err(CatalogError::unsupported_release(number));
        }

        Ok(Release::Fedora(number))
    }
}

/// Catalog implementation backed by the Koji repository pkglist
pub struct KojiCatalog {
    client: reqwest::Client,
    base_url: String,
    parser: KojiPkglistParser,
}

impl KojiCatalog {
    /// Creates a new KojiCatalog with a custom base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent("relkit")
                .timeout(timeout)
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            parser: KojiPkglistParser::new(),
        })
    }

    /// Creates a KojiCatalog pointing at the Fedora Koji instance
    pub fn fedora() -> Result<Self, CatalogError> {
        Self::new(
            DEFAULT_KOJI_URL,
            Duration::from_millis(FETCH_TIMEOUT_MS),
        )
    }

    /// URL of the pkglist for the given release
    pub fn catalog_url(&self, release: &Release) -> String {
        format!(
            "{}/repos/{}/latest/x86_64/pkglist",
            self.base_url,
            release.repo_tag()
        )
    }
}

#[async_trait::async_trait]
impl DistroCatalog for KojiCatalog {
    async fn fetch_versions(
        &self,
        names: &HashSet<String>,
        release: &Release,
    ) -> Result<BTreeMap<String, Version>, CatalogError> {
        let url = self.catalog_url(release);
        debug!("Fetching Koji pkglist: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status != reqwest::StatusCode::OK {
            warn!("Koji returned status {}: {}", status, url);
            return Err(CatalogError::UnexpectedStatus { url, status });
        }

        let body = response.text().await?;

        let entries = self.parser.parse(&body)?;

        let mut versions = BTreeMap::new();
        for entry in entries.into_iter().filter(|e| names.contains(&e.name)) {
            let version =
                parse_rpm_version(&entry.version).ok_or_else(|| CatalogError::InvalidVersion {
                    name: entry.name.clone(),
                    version: entry.version.clone(),
                })?;
            versions.insert(entry.name, version);
        }

        debug!(
            "Found {} of {} requested crates in {}",
            versions.len(),
            names.len(),
            release
        );

        Ok(versions)
    }
}
