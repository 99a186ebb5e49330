mod git;
mod memory;

pub use git::GitResolver;
pub use memory::MemoryResolver;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NAMESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"namespaces/live\.cloud-platform\.service\.justice\.gov\.uk/([^/]+)/")
        .expect("valid namespace pattern")
});

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed: {status} - {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("could not extract namespace from changed files in branch: {branch}")]
    NamespaceNotFound { branch: String },

    #[error("{path} does not exist on branch {branch}")]
    FileNotFound { branch: String, path: String },

    #[error("{path} on branch {branch} is not valid UTF-8")]
    NotUtf8 { branch: String, path: String },
}

/// Read-only view of a repository's branches.
///
/// Implementations never touch the working tree.
pub trait SourceResolver {
    /// Paths changed on `branch` relative to its base, in the order reported.
    fn changed_paths(&self, branch: &str) -> Result<Vec<String>, SourceError>;

    /// Content of `path` as committed on the tip of `branch`.
    fn read_file_at_branch(&self, branch: &str, path: &str) -> Result<String, SourceError>;

    /// Namespace directory of the first changed path under the live namespaces tree.
    fn resolve_changed_namespace(&self, branch: &str) -> Result<String, SourceError> {
        self.changed_paths(branch)?
            .iter()
            .find_map(|path| namespace_of(path))
            .ok_or_else(|| SourceError::NamespaceNotFound {
                branch: branch.to_string(),
            })
    }
}

/// Namespace segment of `path`, if it lives under the live namespaces tree.
pub fn namespace_of(path: &str) -> Option<String> {
    NAMESPACE_PATTERN
        .captures(path)
        .map(|caps| caps[1].to_string())
}
