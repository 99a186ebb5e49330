use std::collections::HashMap;

use super::{SourceError, SourceResolver};

/// In-memory [`SourceResolver`] for tests and dry runs.
///
/// Every branch reports the same changed paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    changed: Vec<String>,
    files: HashMap<(String, String), String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_changed_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.changed.extend(paths);
        self
    }

    pub fn with_file(
        mut self,
        branch: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files
            .insert((branch.into(), path.into()), content.into());
        self
    }
}

impl SourceResolver for MemoryResolver {
    fn changed_paths(&self, _branch: &str) -> Result<Vec<String>, SourceError> {
        Ok(self.changed.clone())
    }

    fn read_file_at_branch(&self, branch: &str, path: &str) -> Result<String, SourceError> {
        self.files
            .get(&(branch.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| SourceError::FileNotFound {
                branch: branch.to_string(),
                path: path.to_string(),
            })
    }
}
