#![allow(dead_code)]

mod cargo;
mod koji;
mod metadata;

pub use cargo::FakeCargo;
pub use koji::{PKGLIST, create_koji_server};
pub use metadata::metadata_json;
