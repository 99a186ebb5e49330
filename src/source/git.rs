use std::path::PathBuf;
use std::process::{Command, Output};

use super::{SourceError, SourceResolver};

pub const DEFAULT_BASE: &str = "main";

/// [`SourceResolver`] backed by the `git` binary.
///
/// Each call spawns one blocking git process in `repo_dir`. No timeout is applied.
#[derive(Debug, Clone)]
pub struct GitResolver {
    repo_dir: PathBuf,
    base: String,
}

impl GitResolver {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self::with_base(repo_dir, DEFAULT_BASE)
    }

    pub fn with_base(repo_dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn git(&self, args: &[&str]) -> Result<Vec<u8>, SourceError> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, repo = %self.repo_dir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| SourceError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                command,
                status: output.status.to_string(),
                output: combined_output(&output),
            });
        }

        Ok(output.stdout)
    }
}

fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text.trim_end().to_string()
}

impl SourceResolver for GitResolver {
    fn changed_paths(&self, branch: &str) -> Result<Vec<String>, SourceError> {
        let range = format!("{}...{}", self.base, branch);
        let stdout = self.git(&["diff", range.as_str(), "--name-only"])?;
        let paths: Vec<String> = String::from_utf8_lossy(&stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        tracing::debug!(%branch, count = paths.len(), "changed paths");
        Ok(paths)
    }

    fn read_file_at_branch(&self, branch: &str, path: &str) -> Result<String, SourceError> {
        let object = format!("{}:{}", branch, path);
        let stdout = self.git(&["show", object.as_str()])?;
        String::from_utf8(stdout).map_err(|_| SourceError::NotUtf8 {
            branch: branch.to_string(),
            path: path.to_string(),
        })
    }
}
