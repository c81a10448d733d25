//! Resolved dependency versions

use std::path::Path;

use indexmap::IndexMap;
use semver::Version;
use tracing::debug;

use crate::cargo::error::CargoError;
use crate::cargo::runner::CargoRunner;
use crate::parser::cargo_tree::CargoTreeParser;
use crate::parser::traits::Parser;

/// Read the version the resolver chose for each direct dependency
///
/// The first listing of a crate wins; a crate appearing under several
/// dependency sections is reported once.
pub async fn read_resolved<R: CargoRunner + ?Sized>(
    runner: &R,
    manifest_path: Option<&Path>,
) -> Result<IndexMap<String, Version>, CargoError> {
    let output = runner.tree(manifest_path).await?;

    let mut resolved = IndexMap::new();
    for dep in CargoTreeParser::new().parse(&output)? {
        resolved.entry(dep.name).or_insert(dep.version);
    }

    debug!("Resolved {} direct dependencies", resolved.len());
    Ok(resolved)
}
