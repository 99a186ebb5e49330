//! Tests for the git-backed resolver against real temporary repositories.

mod common;

use common::{LIVE, REQUIRED, TestRepo, aws_provider};
use mandatory_tags::{
    GitResolver, SourceError, SourceResolver, check_target, resolve_target, resource_path,
};

#[test]
fn test_changed_paths_against_main() {
    let repo = TestRepo::new();
    repo.branch_with_main_tf("feature", "team-ns", "terraform {}\n");

    let resolver = GitResolver::new(repo.path());
    let paths = resolver.changed_paths("feature").unwrap();

    assert_eq!(paths, vec![format!("{}/team-ns/resources/main.tf", LIVE)]);
    assert_eq!(resolver.resolve_changed_namespace("feature").unwrap(), "team-ns");
}

#[test]
fn test_changes_on_main_after_branching_are_ignored() {
    let repo = TestRepo::new();
    repo.branch_with_main_tf("feature", "team-ns", "terraform {}\n");
    repo.commit_file(&format!("{}/other-ns/00-namespace.yaml", LIVE), "x: 1\n", "Main change");

    let resolver = GitResolver::new(repo.path());

    assert_eq!(resolver.resolve_changed_namespace("feature").unwrap(), "team-ns");
}

#[test]
fn test_read_file_without_checkout() {
    let repo = TestRepo::new();
    let content = aws_provider(None, &REQUIRED);
    repo.branch_with_main_tf("feature", "team-ns", &content);

    let resolver = GitResolver::new(repo.path());
    let read = resolver
        .read_file_at_branch("feature", &resource_path("team-ns"))
        .unwrap();

    assert_eq!(read, content);
    assert!(!repo.path().join(resource_path("team-ns")).exists());
}

#[test]
fn test_read_missing_file_includes_git_output() {
    let repo = TestRepo::new();
    repo.branch_with_main_tf("feature", "team-ns", "terraform {}\n");

    let resolver = GitResolver::new(repo.path());
    let err = resolver
        .read_file_at_branch("feature", "does/not/exist.tf")
        .unwrap_err();

    match err {
        SourceError::CommandFailed { command, output, .. } => {
            assert_eq!(command, "git show feature:does/not/exist.tf");
            assert!(!output.is_empty());
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[test]
fn test_unknown_branch_fails_diff() {
    let repo = TestRepo::new();

    let resolver = GitResolver::new(repo.path());

    assert!(matches!(
        resolver.changed_paths("no-such-branch"),
        Err(SourceError::CommandFailed { .. })
    ));
}

#[test]
fn test_custom_base_branch() {
    let repo = TestRepo::new();
    repo.checkout_new("develop");
    repo.commit_file(&format!("{}/base-ns/resources/main.tf", LIVE), "terraform {}\n", "Base");
    repo.branch_with_main_tf("feature", "team-ns", "terraform {}\n");

    let resolver = GitResolver::with_base(repo.path(), "main");
    assert_eq!(resolver.resolve_changed_namespace("feature").unwrap(), "base-ns");

    let resolver = GitResolver::with_base(repo.path(), "develop");
    assert_eq!(resolver.base(), "develop");
    assert_eq!(resolver.resolve_changed_namespace("feature").unwrap(), "team-ns");
}

#[test]
fn test_end_to_end_pipeline() {
    let repo = TestRepo::new();
    let content = format!(
        "{}\n{}",
        aws_provider(None, &REQUIRED),
        aws_provider(Some("replica"), &REQUIRED)
    );
    repo.branch_with_main_tf("feature", "team-ns", &content);

    let resolver = GitResolver::new(repo.path());
    let target = resolve_target(&resolver, "feature", None).unwrap();
    let report = check_target(&resolver, &target).unwrap();

    assert_eq!(report.path, resource_path("team-ns"));
    assert_eq!(report.providers.len(), 2);
}
