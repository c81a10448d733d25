//! Dependency audit coordinator
//!
//! Groups the Cargo runner and the distribution catalog that work together
//! to produce a drift report or a constraint check.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::cargo::error::CargoError;
use crate::cargo::manifest::read_declared;
use crate::cargo::runner::CargoRunner;
use crate::cargo::tree::read_resolved;
use crate::version::checker::{
    ConstraintViolation, DriftReport, check_constraints, compare_dependencies,
};
use crate::version::error::CatalogError;
use crate::version::registries::koji::Release;
use crate::version::registry::DistroCatalog;

/// Errors surfaced by an audit
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(transparent)]
    Cargo(#[from] CargoError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Options shared by every audit
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditOptions<'a> {
    /// Manifest to audit; `None` lets Cargo discover it
    pub manifest_path: Option<&'a Path>,
    /// Leave out dependencies that point at a local path
    pub skip_path: bool,
}

/// Runs dependency audits against one Cargo installation and one catalog
pub struct DependencyAuditor {
    runner: Arc<dyn CargoRunner>,
    catalog: Arc<dyn DistroCatalog>,
}

impl DependencyAuditor {
    /// Create a new DependencyAuditor with the given components
    pub fn new(runner: Arc<dyn CargoRunner>, catalog: Arc<dyn DistroCatalog>) -> Self {
        Self { runner, catalog }
    }

    /// Compare declared, resolved and packaged versions of every direct dependency
    ///
    /// Each step runs to completion before the next starts; the first
    /// failure aborts the audit without a partial report.
    pub async fn drift(
        &self,
        options: AuditOptions<'_>,
        release: &Release,
    ) -> Result<DriftReport, AuditError> {
        let declared =
            read_declared(self.runner.as_ref(), options.manifest_path, options.skip_path).await?;
        let resolved = read_resolved(self.runner.as_ref(), options.manifest_path).await?;

        let names: HashSet<String> = declared.keys().cloned().collect();
        let distro = self.catalog.fetch_versions(&names, release).await?;

        info!(
            "Compared {} dependencies against {} ({} packaged)",
            declared.len(),
            release,
            distro.len()
        );

        Ok(compare_dependencies(&declared, &resolved, &distro))
    }

    /// Check that every declared dependency resolved to a version its
    /// requirement accepts
    pub async fn check(
        &self,
        options: AuditOptions<'_>,
    ) -> Result<Vec<ConstraintViolation>, AuditError> {
        let declared =
            read_declared(self.runner.as_ref(), options.manifest_path, options.skip_path).await?;
        let resolved = read_resolved(self.runner.as_ref(), options.manifest_path).await?;

        let violations = check_constraints(&declared, &resolved);
        info!(
            "Checked {} dependencies, {} violations",
            declared.len(),
            violations.len()
        );

        Ok(violations)
    }
}
