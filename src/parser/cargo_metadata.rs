//! `cargo metadata` parser
//!
//! Parses the `--format-version=1 --no-deps` JSON document and extracts the
//! direct dependencies of the first package record.
//!
//! Cargo has emitted requirements with embedded spaces (`>= 0.26.3, < 0.27`),
//! so every `req` is rewritten in its whitespace-free form before the
//! document is read into [`cargo_metadata::Metadata`].

use cargo_metadata::Metadata;
use serde_json::Value;
use tracing::debug;

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::DeclaredDependency;
use crate::version::semver::parse_requirement;

/// Replace each dependency requirement with its parsed, canonical form
fn normalize_requirements(document: &mut Value) -> Result<(), ParseError> {
    let dependencies = document
        .get_mut("packages")
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(|package| package.get_mut("dependencies"))
        .filter_map(Value::as_array_mut)
        .flatten();

    for dependency in dependencies {
        let Some(text) = dependency.get("req").and_then(Value::as_str) else {
            continue;
        };
        let text = text.to_string();
        let requirement =
            parse_requirement(&text).map_err(|source| ParseError::InvalidRequirement {
                name: dependency
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                requirement: text.clone(),
                source,
            })?;
        dependency["req"] = Value::String(requirement.to_string());
    }

    Ok(())
}

/// Parser for `cargo metadata` output
pub struct CargoMetadataParser;

impl CargoMetadataParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CargoMetadataParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for CargoMetadataParser {
    type Item = DeclaredDependency;

    fn parse(&self, content: &str) -> Result<Vec<DeclaredDependency>, ParseError> {
        let mut document: Value = serde_json::from_str(content)?;
        normalize_requirements(&mut document)?;
        let metadata: Metadata = serde_json::from_value(document)?;

        let package = metadata
            .packages
            .into_iter()
            .next()
            .ok_or(ParseError::NoPackage)?;

        debug!(
            "Reading {} declared dependencies of {}",
            package.dependencies.len(),
            package.name
        );

        Ok(package
            .dependencies
            .into_iter()
            .map(|dep| DeclaredDependency {
                name: dep.name,
                requirement: dep.req,
                kind: dep.kind,
                is_path: dep.path.is_some(),
            })
            .collect())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{dependency, document, metadata, package};
    use super::*;
    use cargo_metadata::DependencyKind;
    use semver::VersionReq;

    fn stratisd_metadata() -> String {
        document(vec![package(
            "stratisd",
            vec![
                dependency("serde", "^1.0.185", None, None),
                dependency("nix", ">= 0.26.3, < 0.27", None, None),
                dependency("loopdev", "^0.4.0", Some("dev"), None),
                dependency(
                    "stratisd_proc_macros",
                    "*",
                    None,
                    Some("/home/user/stratisd/stratisd_proc_macros"),
                ),
                dependency("pkg-config", "^0.3.27", Some("build"), None),
            ],
        )])
    }

    #[test]
    fn parse_extracts_all_dependencies_in_order() {
        let result = CargoMetadataParser::new()
            .parse(&stratisd_metadata())
            .unwrap();

        let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["serde", "nix", "loopdev", "stratisd_proc_macros", "pkg-config"]
        );
    }

    #[test]
    fn parse_strips_whitespace_from_requirements() {
        let result = CargoMetadataParser::new()
            .parse(&stratisd_metadata())
            .unwrap();

        assert_eq!(
            result[1].requirement,
            VersionReq::parse(">=0.26.3,<0.27").unwrap()
        );
    }

    #[test]
    fn parse_strips_whitespace_after_operator() {
        let content = metadata(vec![dependency("foo", "^ 1.2", None, None)]);

        let result = CargoMetadataParser::new().parse(&content).unwrap();

        assert_eq!(result[0].requirement, VersionReq::parse("^1.2").unwrap());
    }

    #[test]
    fn parse_records_kind_and_path() {
        let result = CargoMetadataParser::new()
            .parse(&stratisd_metadata())
            .unwrap();

        assert_eq!(result[0].kind, DependencyKind::Normal);
        assert!(!result[0].is_path);
        assert_eq!(result[2].kind, DependencyKind::Development);
        assert!(result[3].is_path);
        assert_eq!(result[4].kind, DependencyKind::Build);
    }

    #[test]
    fn parse_uses_first_package_only() {
        let content = document(vec![
            package("first", vec![dependency("libc", "^0.2", None, None)]),
            package("second", vec![dependency("regex", "^1", None, None)]),
        ]);

        let result = CargoMetadataParser::new().parse(&content).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "libc");
    }

    #[test]
    fn parse_returns_no_package_for_empty_package_list() {
        let result = CargoMetadataParser::new().parse(&document(vec![]));

        assert!(matches!(result, Err(ParseError::NoPackage)));
    }

    #[test]
    fn parse_returns_json_error_for_garbage() {
        let result = CargoMetadataParser::new().parse("error: could not find Cargo.toml");

        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn parse_names_dependency_with_invalid_requirement() {
        let content = metadata(vec![
            dependency("libc", "^0.2", None, None),
            dependency("broken", "^one.two", None, None),
        ]);

        let err = CargoMetadataParser::new().parse(&content).unwrap_err();

        match err {
            ParseError::InvalidRequirement {
                name, requirement, ..
            } => {
                assert_eq!(name, "broken");
                assert_eq!(requirement, "^one.two");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
