use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use mandatory_tags::output::OutputFormat;

const AFTER_HELP: &str = "\
Environment Variables:
  BRANCH_NAME  - The branch name to search
  NAMESPACE    - The namespace to search (skips changed-file detection)
  BASE_BRANCH  - The branch changes are compared against

Examples:
  mandatory-tags --branch=my-branch
  mandatory-tags --namespace=my-namespace --branch=my-branch
  BRANCH_NAME=my-branch mandatory-tags
  mandatory-tags -h";

/// Branch Default Tags Checker
///
/// Searches a git branch for default_tags in the Terraform main.tf of the
/// namespace it changes, and checks every AWS provider declares the mandatory tags.
#[derive(Parser, Debug)]
#[command(name = "mandatory-tags", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// The branch name to search
    #[arg(short, long, env = "BRANCH_NAME")]
    pub branch: Option<String>,

    /// The namespace to search instead of the one changed on the branch
    #[arg(short, long, env = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Base branch the changed files are computed against
    #[arg(long, env = "BASE_BRANCH", default_value = "main")]
    pub base: String,

    /// Repository to run git in
    #[arg(short = 'C', long = "repo", default_value = ".")]
    pub repo: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// Long flags also accepted with a single dash (`-branch=x`, `-branch x`).
const SINGLE_DASH_LONG: &[&str] = &["branch", "namespace", "base", "repo", "format", "help", "version"];

/// Rewrites single-dash long flags to their `--` form so clap does not read
/// `-branch` as `-b ranch`. Arguments after a `--` terminator are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || terminated {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                terminated = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if SINGLE_DASH_LONG.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
