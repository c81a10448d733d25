//! Human-readable and JSON rendering of audit results

use std::fmt::Write;

use semver::Version;

use crate::version::checker::{ConstraintViolation, DistroStatus, DriftReport};

/// Output format for audit results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn display_version(version: Option<&Version>) -> String {
    version.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Render a drift report as an aligned table followed by a summary line
pub fn render_drift(report: &DriftReport, release: &str) -> String {
    let name_width = report
        .dependencies
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(0);
    let req_width = report
        .dependencies
        .iter()
        .map(|d| d.requirement.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for dep in &report.dependencies {
        let _ = write!(
            out,
            "{:<name_width$}  {:<req_width$}  resolved {:<10}  {} {:<10}  {}",
            dep.name,
            dep.requirement.to_string(),
            display_version(dep.resolved.as_ref()),
            release,
            display_version(dep.distro.as_ref()),
            dep.status.as_str(),
        );
        if dep.distro_satisfies == Some(false) {
            out.push_str(" (requirement rejects packaged version)");
        }
        out.push('\n');
    }

    let statuses = [
        DistroStatus::Matches,
        DistroStatus::Behind,
        DistroStatus::Ahead,
        DistroStatus::NotPackaged,
        DistroStatus::Unresolved,
    ];
    let counts: Vec<String> = statuses
        .iter()
        .map(|s| format!("{} {}", report.count(*s), s.as_str()))
        .collect();
    let _ = writeln!(
        out,
        "{} dependencies: {}",
        report.dependencies.len(),
        counts.join(", ")
    );

    out
}

/// Render a drift report as pretty-printed JSON
pub fn render_drift_json(report: &DriftReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Render constraint violations, one per line
pub fn render_violations(violations: &[ConstraintViolation]) -> String {
    if violations.is_empty() {
        return "All declared requirements are satisfied\n".to_string();
    }

    let mut out = String::new();
    for violation in violations {
        let _ = match violation {
            ConstraintViolation::Unresolved { name, requirement } => writeln!(
                out,
                "{name}: requirement {requirement} has no resolved version"
            ),
            ConstraintViolation::Unsatisfied {
                name,
                requirement,
                resolved,
            } => writeln!(
                out,
                "{name}: resolved version {resolved} does not satisfy {requirement}"
            ),
        };
    }
    out
}
