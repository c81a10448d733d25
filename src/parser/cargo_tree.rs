//! `cargo tree` parser
//!
//! Parses the output of `cargo tree --charset ascii` and extracts the direct
//! dependencies of the root package.
//!
//! Format example:
//! ```text
//! stratisd v3.6.0 (/home/user/stratisd)
//! |-- libc v0.2.150
//! |-- serde v1.0.193
//! |   `-- serde_derive v1.0.193 (proc-macro)
//! `-- uuid v1.6.1
//! [dev-dependencies]
//! `-- loopdev v0.4.0
//! ```
//!
//! Only lines at the first level of indentation are direct dependencies;
//! everything nested deeper is transitive and is not matched.

use regex::Regex;

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::ResolvedDependency;
use crate::version::semver::parse_version;

/// Parser for `cargo tree` output
pub struct CargoTreeParser {
    /// Regex for a direct dependency: `|-- name v1.2.3 [(annotation)]`
    direct_dep_re: Regex,
}

impl CargoTreeParser {
    pub fn new() -> Self {
        Self {
            direct_dep_re: Regex::new(
                r"^[|`]-- (?P<name>[A-Za-z0-9_\-]+) v(?P<version>\S+)(?: \(.*\))?$",
            )
            .unwrap(),
        }
    }
}

impl Default for CargoTreeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for CargoTreeParser {
    type Item = ResolvedDependency;

    fn parse(&self, content: &str) -> Result<Vec<ResolvedDependency>, ParseError> {
        let mut results = Vec::new();

        for line in content.lines() {
            let Some(caps) = self.direct_dep_re.captures(line.trim_end()) else {
                continue;
            };

            let name = &caps["name"];
            let version_text = &caps["version"];
            let version =
                parse_version(version_text).ok_or_else(|| ParseError::InvalidVersion {
                    name: name.to_string(),
                    version: version_text.to_string(),
                })?;

            results.push(ResolvedDependency {
                name: name.to_string(),
                version,
            });
        }

        Ok(results)
    }
}
