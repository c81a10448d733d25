//! Parser trait definition

/// Trait for parsing the text output of an external tool or service
///
/// Each implementation owns exactly one external format, so a switch to a
/// machine-readable mode only touches that implementation.
pub trait Parser {
    /// One record extracted from the output
    type Item;

    /// Parse the content and extract every record it contains
    fn parse(&self, content: &str) -> Result<Vec<Self::Item>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The output was not the JSON document we expected
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `cargo metadata` returned no package record
    #[error("No package record found in cargo metadata output")]
    NoPackage,

    /// A declared requirement could not be parsed
    #[error("Invalid version requirement \"{requirement}\" for dependency {name}: {source}")]
    InvalidRequirement {
        name: String,
        requirement: String,
        #[source]
        source: semver::Error,
    },

    /// A concrete version could not be parsed
    #[error("Invalid version \"{version}\" for package {name}")]
    InvalidVersion { name: String, version: String },
}
