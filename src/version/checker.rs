//! Version comparison for declared, resolved and distribution versions

use std::cmp::Ordering;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use semver::{Version, VersionReq};
use serde::Serialize;

/// How the distribution's version relates to the resolved version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistroStatus {
    /// Distribution ships exactly the resolved version
    Matches,
    /// Distribution ships an older version than the resolved one
    Behind,
    /// Distribution ships a newer version than the resolved one
    Ahead,
    /// Distribution does not package the crate
    NotPackaged,
    /// The resolver did not report a version for the crate
    Unresolved,
}

impl DistroStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistroStatus::Matches => "matches",
            DistroStatus::Behind => "behind",
            DistroStatus::Ahead => "ahead",
            DistroStatus::NotPackaged => "not packaged",
            DistroStatus::Unresolved => "unresolved",
        }
    }
}

/// Result of comparing one declared dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyDrift {
    pub name: String,
    /// Requirement declared in the manifest
    pub requirement: VersionReq,
    /// Version chosen by the resolver
    pub resolved: Option<Version>,
    /// Version packaged by the distribution
    pub distro: Option<Version>,
    pub status: DistroStatus,
    /// Whether the resolved version satisfies the requirement
    pub resolved_satisfies: Option<bool>,
    /// Whether the distribution's version satisfies the requirement;
    /// `false` means the package cannot be built against the distribution
    /// without patching the manifest
    pub distro_satisfies: Option<bool>,
}

/// Drift of every declared dependency, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    pub dependencies: Vec<DependencyDrift>,
}

impl DriftReport {
    /// Number of dependencies with the given status
    pub fn count(&self, status: DistroStatus) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.status == status)
            .count()
    }

    /// Dependencies whose requirement rejects the distribution's version
    pub fn distro_incompatible(&self) -> impl Iterator<Item = &DependencyDrift> {
        self.dependencies
            .iter()
            .filter(|d| d.distro_satisfies == Some(false))
    }
}

/// A declared dependency the resolved tree does not honor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintViolation {
    /// No resolved version was reported for the dependency
    Unresolved {
        name: String,
        requirement: VersionReq,
    },
    /// The resolved version falls outside the declared requirement
    Unsatisfied {
        name: String,
        requirement: VersionReq,
        resolved: Version,
    },
}

impl ConstraintViolation {
    pub fn name(&self) -> &str {
        match self {
            ConstraintViolation::Unresolved { name, .. }
            | ConstraintViolation::Unsatisfied { name, .. } => name,
        }
    }
}

/// Classify a distribution version relative to the resolved version
pub fn distro_status(resolved: Option<&Version>, distro: Option<&Version>) -> DistroStatus {
    let Some(resolved) = resolved else {
        return DistroStatus::Unresolved;
    };
    let Some(distro) = distro else {
        return DistroStatus::NotPackaged;
    };

    match distro.cmp(resolved) {
        Ordering::Equal => DistroStatus::Matches,
        Ordering::Less => DistroStatus::Behind,
        Ordering::Greater => DistroStatus::Ahead,
    }
}

/// Compare every declared dependency against its resolved and packaged version
pub fn compare_dependencies(
    declared: &IndexMap<String, VersionReq>,
    resolved: &IndexMap<String, Version>,
    distro: &BTreeMap<String, Version>,
) -> DriftReport {
    let dependencies = declared
        .iter()
        .map(|(name, requirement)| {
            let resolved = resolved.get(name);
            let distro = distro.get(name);

            DependencyDrift {
                name: name.clone(),
                requirement: requirement.clone(),
                resolved: resolved.cloned(),
                distro: distro.cloned(),
                status: distro_status(resolved, distro),
                resolved_satisfies: resolved.map(|v| requirement.matches(v)),
                distro_satisfies: distro.map(|v| requirement.matches(v)),
            }
        })
        .collect();

    DriftReport { dependencies }
}

/// Find declared dependencies that are missing from, or not satisfied by,
/// the resolved tree
pub fn check_constraints(
    declared: &IndexMap<String, VersionReq>,
    resolved: &IndexMap<String, Version>,
) -> Vec<ConstraintViolation> {
    declared
        .iter()
        .filter_map(|(name, requirement)| match resolved.get(name) {
            None => Some(ConstraintViolation::Unresolved {
                name: name.clone(),
                requirement: requirement.clone(),
            }),
            Some(version) if !requirement.matches(version) => {
                Some(ConstraintViolation::Unsatisfied {
                    name: name.clone(),
                    requirement: requirement.clone(),
                    resolved: version.clone(),
                })
            }
            Some(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn req(s: &str) -> VersionReq {
        VersionReq::parse(s).unwrap()
    }

    #[rstest]
    #[case(Some("1.2.3"), Some("1.2.3"), DistroStatus::Matches)]
    #[case(Some("1.2.3"), Some("1.2.0"), DistroStatus::Behind)]
    #[case(Some("1.2.3"), Some("1.3.0"), DistroStatus::Ahead)]
    #[case(Some("1.2.3"), Some("1.2.3-rc.1"), DistroStatus::Behind)]
    #[case(Some("1.2.3"), None, DistroStatus::NotPackaged)]
    #[case(None, Some("1.2.3"), DistroStatus::Unresolved)]
    #[case(None, None, DistroStatus::Unresolved)]
    fn distro_status_returns_expected(
        #[case] resolved: Option<&str>,
        #[case] distro: Option<&str>,
        #[case] expected: DistroStatus,
    ) {
        let resolved = resolved.map(v);
        let distro = distro.map(v);

        assert_eq!(
            distro_status(resolved.as_ref(), distro.as_ref()),
            expected
        );
    }

    #[test]
    fn compare_dependencies_follows_manifest_order_and_checks_requirements() {
        let declared = IndexMap::from([
            ("serde".to_string(), req("^1.0.185")),
            ("nix".to_string(), req(">=0.26.3,<0.27")),
            ("uuid".to_string(), req("^1.6")),
        ]);
        let resolved = IndexMap::from([
            ("nix".to_string(), v("0.26.4")),
            ("serde".to_string(), v("1.0.193")),
            ("uuid".to_string(), v("1.6.1")),
        ]);
        let distro = BTreeMap::from([
            ("serde".to_string(), v("1.0.193")),
            ("nix".to_string(), v("0.27.1")),
        ]);

        let report = compare_dependencies(&declared, &resolved, &distro);

        assert_eq!(
            report.dependencies,
            vec![
                DependencyDrift {
                    name: "serde".to_string(),
                    requirement: req("^1.0.185"),
                    resolved: Some(v("1.0.193")),
                    distro: Some(v("1.0.193")),
                    status: DistroStatus::Matches,
                    resolved_satisfies: Some(true),
                    distro_satisfies: Some(true),
                },
                DependencyDrift {
                    name: "nix".to_string(),
                    requirement: req(">=0.26.3,<0.27"),
                    resolved: Some(v("0.26.4")),
                    distro: Some(v("0.27.1")),
                    status: DistroStatus::Ahead,
                    resolved_satisfies: Some(true),
                    distro_satisfies: Some(false),
                },
                DependencyDrift {
                    name: "uuid".to_string(),
                    requirement: req("^1.6"),
                    resolved: Some(v("1.6.1")),
                    distro: None,
                    status: DistroStatus::NotPackaged,
                    resolved_satisfies: Some(true),
                    distro_satisfies: None,
                },
            ]
        );
        assert_eq!(report.count(DistroStatus::Ahead), 1);
        assert_eq!(
            report
                .distro_incompatible()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>(),
            vec!["nix"]
        );
    }

    #[test]
    fn compare_dependencies_ignores_resolved_entries_not_declared() {
        let declared = IndexMap::from([("libc".to_string(), req("^0.2"))]);
        let resolved = IndexMap::from([
            ("libc".to_string(), v("0.2.150")),
            ("extra".to_string(), v("1.0.0")),
        ]);

        let report = compare_dependencies(&declared, &resolved, &BTreeMap::new());

        assert_eq!(report.dependencies.len(), 1);
        assert_eq!(report.dependencies[0].status, DistroStatus::NotPackaged);
    }

    #[test]
    fn check_constraints_reports_unresolved_and_unsatisfied() {
        let declared = IndexMap::from([
            ("libc".to_string(), req("^0.2.150")),
            ("serde".to_string(), req("^1.0.190")),
            ("loopdev".to_string(), req("^0.4")),
        ]);
        let resolved = IndexMap::from([
            ("libc".to_string(), v("0.2.151")),
            ("serde".to_string(), v("1.0.185")),
        ]);

        let violations = check_constraints(&declared, &resolved);

        assert_eq!(
            violations,
            vec![
                ConstraintViolation::Unsatisfied {
                    name: "serde".to_string(),
                    requirement: req("^1.0.190"),
                    resolved: v("1.0.185"),
                },
                ConstraintViolation::Unresolved {
                    name: "loopdev".to_string(),
                    requirement: req("^0.4"),
                },
            ]
        );
        assert_eq!(violations[1].name(), "loopdev");
    }

    #[test]
    fn check_constraints_returns_empty_when_all_satisfied() {
        let declared = IndexMap::from([("libc".to_string(), req("^0.2"))]);
        let resolved = IndexMap::from([("libc".to_string(), v("0.2.150"))]);

        assert!(check_constraints(&declared, &resolved).is_empty());
    }
}
