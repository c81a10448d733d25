//! Cargo layer
//! - runner.rs: CargoRunner trait and the subprocess implementation
//! - manifest.rs: declared requirements from `cargo metadata`
//! - tree.rs: resolved versions from `cargo tree`
//! - error.rs: CargoError

pub mod error;
pub mod manifest;
pub mod runner;
pub mod tree;

pub use error::CargoError;
pub use manifest::read_declared;
pub use runner::{CargoRunner, ProcessRunner};
pub use tree::read_resolved;
