use semver::{Version, VersionReq};

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse a declared requirement after removing all whitespace.
///
/// `cargo metadata` renders multi-part requirements as `">= 0.26.3, < 0.27"`;
/// the whitespace-free form is what gets parsed.
pub fn parse_requirement(requirement: &str) -> Result<VersionReq, semver::Error> {
    let compact: String = requirement.chars().filter(|c| !c.is_whitespace()).collect();
    VersionReq::parse(&compact)
}

/// Normalize an RPM version segment into semver text.
///
/// An RPM version never contains `-`, so anything after the first `-` is a
/// release suffix and is dropped. Fedora spells pre-releases with `~`
/// (`1.2.3~beta1`), which becomes the semver separator `-`.
pub fn normalize_rpm_version(raw: &str) -> String {
    let version = raw.split('-').next().unwrap_or(raw);
    version.replace('~', "-")
}

/// Parse a version string as published by the distribution.
pub fn parse_rpm_version(raw: &str) -> Option<Version> {
    parse_version(&normalize_rpm_version(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(Version::new(1, 0, 0)))]
    #[case("1.2", Some(Version::new(1, 2, 0)))]
    #[case("1.2.3", Some(Version::new(1, 2, 3)))]
    #[case("invalid", None)]
    #[case("", None)]
    fn parse_version_returns_expected(#[case] input: &str, #[case] expected: Option<Version>) {
        assert_eq!(parse_version(input), expected);
    }

    #[rstest]
    #[case("^ 1.2", "^1.2")]
    #[case(">= 0.26.3, < 0.27", ">=0.26.3,<0.27")]
    #[case("  ~0.4 ", "~0.4")]
    #[case("*", "*")]
    fn parse_requirement_ignores_whitespace(#[case] spaced: &str, #[case] compact: &str) {
        assert_eq!(
            parse_requirement(spaced).unwrap(),
            VersionReq::parse(compact).unwrap()
        );
    }

    #[test]
    fn parse_requirement_rejects_garbage() {
        assert!(parse_requirement("^one.two").is_err());
    }

    #[rstest]
    #[case("1.2.3~beta1", "1.2.3-beta1")]
    #[case("1.0.0-1", "1.0.0")]
    #[case("0.3.0~alpha.2-3.fc40", "0.3.0-alpha.2")]
    #[case("2.0.0", "2.0.0")]
    fn normalize_rpm_version_returns_expected(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_rpm_version(raw), expected);
    }

    #[test]
    fn parse_rpm_version_with_tilde_equals_direct_parse() {
        assert_eq!(
            parse_rpm_version("1.2.3~beta1"),
            Some(Version::parse("1.2.3-beta1").unwrap())
        );
    }

    #[test]
    fn parse_rpm_version_pads_partial_versions() {
        assert_eq!(parse_rpm_version("0.4"), Some(Version::new(0, 4, 0)));
    }
}
