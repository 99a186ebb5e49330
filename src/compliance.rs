use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Tag names every AWS provider's `default_tags` must declare, in report order.
pub const REQUIRED_TAGS: &[&str] = &[
    "business-unit",
    "application",
    "is-production",
    "owner",
    "namespace",
    "service-area",
    "source-code",
    "slack-channel",
];

/// Returns the entries of `required` absent from `found`, keeping `required` order.
///
/// Matching is exact and case-sensitive.
pub fn missing_tags<S: AsRef<str>>(found: &[S], required: &[&str]) -> Vec<String> {
    let present: HashSet<&str> = found.iter().map(AsRef::as_ref).collect();
    required
        .iter()
        .filter(|tag| !present.contains(*tag))
        .map(|tag| tag.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingTags {
        provider: String,
        missing: Vec<String>,
    },
    NoDefaultTags {
        provider: String,
    },
}

impl Violation {
    pub fn provider(&self) -> &str {
        match self {
            Violation::MissingTags { provider, .. } | Violation::NoDefaultTags { provider } => {
                provider
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingTags { provider, missing } => write!(
                f,
                "❌ Provider '{}' is missing tags: {}",
                provider,
                missing.join(", ")
            ),
            Violation::NoDefaultTags { provider } => write!(
                f,
                "❌ Provider '{}' does not have default_tags block with all required tags",
                provider
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("❌ No AWS providers found in the file")]
    NoProviders,

    #[error("{}", join_violations(.0))]
    Violations(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
