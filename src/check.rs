use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::source::SourceResolver;
use crate::terraform::{ProviderRecord, check_providers};

/// Root of the live namespaces tree inside the environments repository.
pub const BASE_PATH: &str = "namespaces/live.cloud-platform.service.justice.gov.uk";

/// The file a run checks and the branch it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub branch: String,
    pub namespace: String,
    pub path: String,
}

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    pub branch: String,
    pub namespace: String,
    pub path: String,
    pub providers: Vec<ProviderRecord>,
}

/// Git tree path of a namespace's `resources/main.tf`.
pub fn resource_path(namespace: &str) -> String {
    format!("{}/{}/resources/main.tf", BASE_PATH, namespace)
}

/// Works out which namespace file to check on `branch`.
///
/// An explicit `namespace` skips the diff against the base branch.
pub fn resolve_target(
    resolver: &dyn SourceResolver,
    branch: &str,
    namespace: Option<&str>,
) -> Result<Target, CheckError> {
    let branch = branch.trim();
    if branch.is_empty() {
        return Err(CheckError::Config("BRANCH_NAME must be set.".to_string()));
    }

    let namespace = match namespace.map(str::trim).filter(|ns| !ns.is_empty()) {
        Some(ns) => ns.to_string(),
        None => resolver
            .resolve_changed_namespace(branch)
            .map_err(CheckError::Resolution)?,
    };

    tracing::info!(%branch, %namespace, "resolved namespace");

    Ok(Target {
        branch: branch.to_string(),
        path: resource_path(&namespace),
        namespace,
    })
}

/// Reads the target file from its branch and checks every AWS provider in it.
pub fn check_target(resolver: &dyn SourceResolver, target: &Target) -> Result<Report, CheckError> {
    let content = resolver
        .read_file_at_branch(&target.branch, &target.path)
        .map_err(CheckError::Retrieval)?;

    let providers = check_providers(&content)?;
    tracing::info!(path = %target.path, count = providers.len(), "all providers compliant");

    Ok(Report {
        branch: target.branch.clone(),
        namespace: target.namespace.clone(),
        path: target.path.clone(),
        providers,
    })
}
