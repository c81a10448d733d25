//! Koji pkglist parser
//!
//! A Koji repository pkglist is plain text with one RPM path per line:
//! ```text
//! toplink/packages/rust-serde/1.0.193/1.fc40/noarch/rust-serde-devel-1.0.193-1.fc40.noarch.rpm
//! toplink/packages/rust-nix/0.26.4/1.fc40/noarch/rust-nix+default-devel-0.26.4-1.fc40.noarch.rpm
//! toplink/packages/python3/3.12.1/1.fc40/x86_64/python3-3.12.1-1.fc40.x86_64.rpm
//! ```
//! Only packages built from a `rust-` source package are Rust crates.

use regex::Regex;

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::PackageEntry;

/// Parser for Koji repository pkglist files
pub struct KojiPkglistParser {
    /// Regex for a crate entry: `toplink/packages/rust-<name>/<version>/...`
    entry_re: Regex,
}

impl KojiPkglistParser {
    pub fn new() -> Self {
        Self {
            entry_re: Regex::new(r"^toplink/packages/rust-(?P<name>[^/]+)/(?P<version>[^/]+)/")
                .unwrap(),
        }
    }
}

impl Default for KojiPkglistParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for KojiPkglistParser {
    type Item = PackageEntry;

    fn parse(&self, content: &str) -> Result<Vec<PackageEntry>, ParseError> {
        Ok(content
            .lines()
            .filter_map(|line| self.entry_re.captures(line))
            .map(|caps| PackageEntry {
                name: caps["name"].to_string(),
                version: caps["version"].to_string(),
            })
            .collect())
    }
}
