//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Common types (DeclaredDependency, ResolvedDependency, PackageEntry)
//! - cargo_metadata.rs: `cargo metadata` JSON parser
//! - cargo_tree.rs: `cargo tree` ASCII output parser
//! - koji_pkglist.rs: Koji repository pkglist parser

pub mod cargo_metadata;
pub mod cargo_tree;
pub mod koji_pkglist;
pub mod traits;
pub mod types;

pub use cargo_metadata::CargoMetadataParser;
pub use cargo_tree::CargoTreeParser;
pub use koji_pkglist::KojiPkglistParser;
pub use traits::{ParseError, Parser};
pub use types::{DeclaredDependency, PackageEntry, ResolvedDependency};
