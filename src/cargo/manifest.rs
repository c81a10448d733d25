//! Declared dependency requirements

use std::path::Path;

use indexmap::IndexMap;
use semver::VersionReq;
use tracing::debug;

use crate::cargo::error::CargoError;
use crate::cargo::runner::CargoRunner;
use crate::parser::cargo_metadata::CargoMetadataParser;
use crate::parser::traits::Parser;

/// Read the requirement of every direct dependency declared in the manifest
///
/// # Arguments
/// * `manifest_path` - Manifest to read; `None` lets Cargo discover it
/// * `skip_path` - Leave out dependencies that point at a local path
///
/// A crate listed in more than one dependency section keeps the position of
/// its first listing and the requirement of its last.
pub async fn read_declared<R: CargoRunner + ?Sized>(
    runner: &R,
    manifest_path: Option<&Path>,
    skip_path: bool,
) -> Result<IndexMap<String, VersionReq>, CargoError> {
    let output = runner.metadata(manifest_path).await?;
    let dependencies = CargoMetadataParser::new().parse(&output)?;

    let mut declared = IndexMap::new();
    for dep in dependencies {
        if skip_path && dep.is_path {
            debug!("Skipping path dependency {}", dep.name);
            continue;
        }
        if let Some(previous) = declared.insert(dep.name.clone(), dep.requirement) {
            debug!(
                "Replacing requirement {} for {} with its {:?} listing",
                previous, dep.name, dep.kind
            );
        }
    }

    Ok(declared)
}
