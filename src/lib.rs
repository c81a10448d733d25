//! Release-engineering and dependency-auditing tools.
//!
//! The core of the crate is the dependency drift audit: the requirements a
//! Cargo manifest declares, the versions `cargo tree` resolved, and the
//! versions Fedora currently ships are read independently and then compared.

pub mod audit;
pub mod cargo;
pub mod config;
pub mod logging;
pub mod parser;
pub mod report;
pub mod test_config;
pub mod version;
pub mod workflow;
