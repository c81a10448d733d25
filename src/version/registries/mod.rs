//! Catalog implementations for fetching distribution package versions

pub mod koji;

pub use koji::{KojiCatalog, Release};
