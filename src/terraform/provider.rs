use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{extract_block, extract_tags};
use crate::compliance::{ComplianceError, REQUIRED_TAGS, Violation, missing_tags};

static PROVIDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"provider\s+"aws""#).expect("valid provider pattern"));

static ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alias\s*=\s*"([^"]+)""#).expect("valid alias pattern"));

// Tag maps are flat, so the interior stops at the first closing brace.
static DEFAULT_TAGS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)default_tags\s*\{\s*tags\s*=\s*\{([^}]+)\}")
        .expect("valid default_tags pattern")
});

pub const DEFAULT_PROVIDER_NAME: &str = "aws (default)";

/// A compliant AWS provider and the tag keys its `default_tags` declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderRecord {
    pub name: String,
    pub tags: Vec<String>,
}

/// One `provider "aws"` block as found in the file, before any verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedProvider {
    pub name: String,
    /// `None` when the block has no `default_tags { tags = { ... } }`.
    pub default_tags: Option<Vec<String>>,
    pub missing: Vec<String>,
}

impl ScannedProvider {
    pub fn is_compliant(&self) -> bool {
        self.default_tags.is_some() && self.missing.is_empty()
    }

    fn violation(&self) -> Option<Violation> {
        match &self.default_tags {
            None => Some(Violation::NoDefaultTags {
                provider: self.name.clone(),
            }),
            Some(_) if !self.missing.is_empty() => Some(Violation::MissingTags {
                provider: self.name.clone(),
                missing: self.missing.clone(),
            }),
            Some(_) => None,
        }
    }
}

/// Scans every `provider "aws"` block in `content`, in source order.
pub fn scan_providers(content: &str) -> Vec<ScannedProvider> {
    PROVIDER_PATTERN
        .find_iter(content)
        .map(|m| scan_block(extract_block(&content[m.start()..])))
        .collect()
}

fn scan_block(block: &str) -> ScannedProvider {
    let name = match ALIAS_PATTERN.captures(block) {
        Some(caps) => format!("aws (alias: {})", &caps[1]),
        None => DEFAULT_PROVIDER_NAME.to_string(),
    };

    match DEFAULT_TAGS_PATTERN.captures(block) {
        Some(caps) => {
            let tags = extract_tags(&caps[1]);
            let missing = missing_tags(&tags, REQUIRED_TAGS);
            tracing::debug!(provider = %name, found = tags.len(), missing = missing.len(), "scanned provider");
            ScannedProvider {
                name,
                default_tags: Some(tags),
                missing,
            }
        }
        None => {
            tracing::debug!(provider = %name, "provider has no default_tags block");
            ScannedProvider {
                name,
                default_tags: None,
                missing: REQUIRED_TAGS.iter().map(|tag| tag.to_string()).collect(),
            }
        }
    }
}

/// Scans `content` and requires every AWS provider to declare all required tags.
///
/// All providers are scanned before failing, so the error lists every offender.
pub fn check_providers(content: &str) -> Result<Vec<ProviderRecord>, ComplianceError> {
    let scanned = scan_providers(content);
    if scanned.is_empty() {
        return Err(ComplianceError::NoProviders);
    }

    let violations: Vec<Violation> = scanned.iter().filter_map(ScannedProvider::violation).collect();
    if !violations.is_empty() {
        return Err(ComplianceError::Violations(violations));
    }

    Ok(scanned
        .into_iter()
        .map(|provider| ProviderRecord {
            name: provider.name,
            tags: provider.default_tags.unwrap_or_default(),
        })
        .collect())
}
