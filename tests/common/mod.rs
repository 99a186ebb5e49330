#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

pub const LIVE: &str = "namespaces/live.cloud-platform.service.justice.gov.uk";

pub const REQUIRED: [&str; 8] = [
    "business-unit",
    "application",
    "is-production",
    "owner",
    "namespace",
    "service-area",
    "source-code",
    "slack-channel",
];

/// Renders a `provider "aws"` block declaring `tags` in its default_tags.
pub fn aws_provider(alias: Option<&str>, tags: &[&str]) -> String {
    let mut block = String::from("provider \"aws\" {\n  region = \"eu-west-2\"\n");
    if let Some(alias) = alias {
        block.push_str(&format!("  alias  = \"{}\"\n", alias));
    }
    block.push_str("\n  default_tags {\n    tags = {\n");
    for tag in tags {
        block.push_str(&format!("      {} = \"value\"\n", tag));
    }
    block.push_str("    }\n  }\n}\n");
    block
}

/// A throwaway git repository whose default branch is `main`.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");

        run_git(dir.path(), &["init", "--quiet"]);
        run_git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);
        run_git(dir.path(), &["config", "commit.gpgsign", "false"]);

        let repo = Self { dir };
        repo.commit_file("README.md", "# environments\n", "Initial commit");
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn commit_file(&self, path: &str, content: &str, message: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&full, content).expect("write file");
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "--quiet", "-m", message]);
    }

    pub fn checkout_new(&self, branch: &str) {
        run_git(self.path(), &["checkout", "--quiet", "-b", branch]);
    }

    pub fn checkout(&self, branch: &str) {
        run_git(self.path(), &["checkout", "--quiet", branch]);
    }

    /// Creates `branch` off main with `content` as the namespace's main.tf,
    /// then returns to main.
    pub fn branch_with_main_tf(&self, branch: &str, namespace: &str, content: &str) {
        self.checkout_new(branch);
        self.commit_file(
            &format!("{}/{}/resources/main.tf", LIVE, namespace),
            content,
            "Add resources",
        );
        self.checkout("main");
    }
}

pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
