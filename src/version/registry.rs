//! Catalog trait for fetching the versions a distribution ships

use std::collections::{BTreeMap, HashSet};

#[cfg(test)]
use mockall::automock;
use semver::Version;

use crate::version::error::CatalogError;
use crate::version::registries::koji::Release;

/// Trait for fetching packaged crate versions from a distribution
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DistroCatalog: Send + Sync {
    /// Fetches the packaged version of every requested crate
    ///
    /// # Arguments
    /// * `names` - Crate names to look for
    /// * `release` - Distribution release whose repository is listed
    ///
    /// # Returns
    /// * `Ok(map)` - Crate name to packaged version; names the distribution
    ///   does not package are absent
    /// * `Err(CatalogError)` - If the fetch or a version parse fails
    async fn fetch_versions(
        &self,
        names: &HashSet<String>,
        release: &Release,
    ) -> Result<BTreeMap<String, Version>, CatalogError>;
}
