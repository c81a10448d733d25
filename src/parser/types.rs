//! Common types for parsers

use cargo_metadata::DependencyKind;
use semver::{Version, VersionReq};

/// A dependency as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDependency {
    /// Package name (the registry name, not the `package = ...` rename)
    pub name: String,
    /// Declared requirement
    pub requirement: VersionReq,
    /// Section the dependency was declared in (`[dependencies]`,
    /// `[dev-dependencies]` or `[build-dependencies]`)
    pub kind: DependencyKind,
    /// True if the dependency refers to a local path rather than a registry
    pub is_path: bool,
}

/// A direct dependency with the concrete version the resolver chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub name: String,
    pub version: Version,
}

/// A package found in a distribution listing
///
/// The version is kept as raw text: only requested packages get their
/// version normalized and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Crate name with the distribution's `rust-` prefix removed
    pub name: String,
    /// Version text exactly as it appears in the listing path
    pub version: String,
}
