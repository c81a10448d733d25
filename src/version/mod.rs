//! Version management layer for dependency drift auditing
//!
//! This module provides the functionality for fetching distribution package
//! versions and comparing them against what a project declares and resolves.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │     │    Tree     │     │   Catalog   │
//! │ (declared)  │     │ (resolved)  │     │  (distro)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        └───────────────────┼───────────────────┘
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Checker   │
//!                     │  (compare)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Drift classification and constraint checking
//! - [`registry`]: Catalog trait for fetching distribution versions
//! - [`registries`]: Concrete catalog implementations (Koji)
//! - [`error`]: Error types for catalog operations
//! - [`semver`]: Shared semver utilities

pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod semver;
