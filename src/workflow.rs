//! CI workflow configuration updater
//!
//! Workflow files tag the lines carrying a tracked version with a marker
//! comment, two spaces after the version:
//! ```text
//!       toolchain: 1.74.0  # LOWEST SUPPORTED RUST TOOLCHAIN
//!       image: fedora:39  # CURRENT DEVELOPMENT ENVIRONMENT
//! ```
//! Updating a version rewrites only the marked lines.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

/// Rust toolchain tracked in the workflow files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toolchain {
    /// Lowest supported Rust toolchain
    Lowest,
    /// Current development Rust toolchain
    Current,
}

impl Toolchain {
    pub fn marker(&self) -> &'static str {
        match self {
            Toolchain::Lowest => "# LOWEST SUPPORTED RUST TOOLCHAIN",
            Toolchain::Current => "# CURRENT DEVELOPMENT RUST TOOLCHAIN",
        }
    }
}

/// Fedora development environment tracked in the workflow files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// Lowest development environment
    Lowest,
    /// Current development environment
    Current,
    /// Next development environment
    Next,
}

impl Environment {
    pub fn marker(&self) -> &'static str {
        match self {
            Environment::Lowest => "# LOWEST DEVELOPMENT ENVIRONMENT",
            Environment::Current => "# CURRENT DEVELOPMENT ENVIRONMENT",
            Environment::Next => "# NEXT DEVELOPMENT ENVIRONMENT",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Old version \"{old}\" not in file")]
    VersionNotFound { old: String },

    #[error("No line is marked with \"{marker}\"")]
    MarkerNotFound { marker: String },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Replace `old` with `new` on every line tagged with `marker`
///
/// Every marked line must carry the old version; untagged lines and line
/// endings pass through unchanged.
pub fn update_marked_lines(
    content: &str,
    marker: &str,
    old: &str,
    new: &str,
) -> Result<String, WorkflowError> {
    let old_verstring = format!("{old}  {marker}");
    let new_verstring = format!("{new}  {marker}");

    let mut output = String::with_capacity(content.len());
    let mut marked = 0;

    for line in content.split_inclusive('\n') {
        if !line.contains(marker) {
            output.push_str(line);
            continue;
        }

        let replaced = line.replace(&old_verstring, &new_verstring);
        if !replaced.contains(&new_verstring) {
            return Err(WorkflowError::VersionNotFound { old: old_verstring });
        }
        output.push_str(&replaced);
        marked += 1;
    }

    if marked == 0 {
        return Err(WorkflowError::MarkerNotFound {
            marker: marker.to_string(),
        });
    }

    debug!("Updated {} lines marked {}", marked, marker);
    Ok(output)
}

/// Read `input`, update the marked lines and write the result to `output`
pub fn update_file(
    input: &Path,
    output: &Path,
    marker: &str,
    old: &str,
    new: &str,
) -> Result<(), WorkflowError> {
    let content = std::fs::read_to_string(input).map_err(|source| WorkflowError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let updated = update_marked_lines(&content, marker, old, new)?;

    std::fs::write(output, updated).map_err(|source| WorkflowError::Io {
        path: output.to_path_buf(),
        source,
    })
}
