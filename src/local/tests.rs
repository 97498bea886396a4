//! Unit tests for Git metadata lookups against real repositories.

use git2::{Repository, Signature};
use tempfile::TempDir;

use super::error::LocalDiscoveryError;
use super::git_metadata::{Git2Metadata, GitMetadata};

/// Creates a repository with one empty commit on `branch`.
fn create_repo_on_branch(branch: &str) -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let repo = Repository::init(temp_dir.path()).expect("should init repository");
    commit_empty_tree(&repo, &format!("refs/heads/{branch}"));
    repo.set_head(&format!("refs/heads/{branch}"))
        .expect("should point HEAD at branch");
    (temp_dir, repo)
}

fn commit_empty_tree(repo: &Repository, reference: &str) {
    let signature = Signature::now("Test", "test@example.com").expect("valid signature");
    let tree_id = repo
        .index()
        .expect("index should open")
        .write_tree()
        .expect("should write empty tree");
    let tree = repo.find_tree(tree_id).expect("tree should exist");
    repo.commit(Some(reference), &signature, &signature, "initial", &tree, &[])
        .expect("should create commit");
}

#[test]
fn current_branch_reads_checked_out_branch() {
    let (temp_dir, _repo) = create_repo_on_branch("feature/review-fixes");

    let branch = Git2Metadata
        .current_branch(temp_dir.path())
        .expect("branch should resolve");

    assert_eq!(branch, "feature/review-fixes");
}

#[test]
fn current_branch_searches_upward_from_subdirectory() {
    let (temp_dir, _repo) = create_repo_on_branch("main");
    let nested = temp_dir.path().join("src").join("nested");
    std::fs::create_dir_all(&nested).expect("should create nested directory");

    let branch = Git2Metadata
        .current_branch(&nested)
        .expect("branch should resolve from subdirectory");

    assert_eq!(branch, "main");
}

#[test]
fn current_branch_reports_detached_head_as_head() {
    let (temp_dir, repo) = create_repo_on_branch("main");
    let head_id = repo
        .head()
        .expect("head should exist")
        .target()
        .expect("head should point at a commit");
    repo.set_head_detached(head_id)
        .expect("should detach HEAD");

    let branch = Git2Metadata
        .current_branch(temp_dir.path())
        .expect("detached head should resolve");

    assert_eq!(branch, "HEAD");
}

#[test]
fn current_branch_fails_for_unborn_head() {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let _repo = Repository::init(temp_dir.path()).expect("should init repository");

    let result = Git2Metadata.current_branch(temp_dir.path());

    assert_eq!(result, Err(LocalDiscoveryError::UnbornHead));
}

#[test]
fn current_branch_fails_outside_repository() {
    let temp_dir = TempDir::new().expect("should create temp directory");

    let result = Git2Metadata.current_branch(temp_dir.path());

    assert!(
        matches!(result, Err(LocalDiscoveryError::NotARepository { .. })),
        "expected NotARepository, got {result:?}"
    );
}

#[test]
fn remote_url_reads_origin() {
    let (temp_dir, repo) = create_repo_on_branch("main");
    repo.remote("origin", "git@github.com:octo/cat.git")
        .expect("should add origin remote");

    let url = Git2Metadata
        .remote_url(temp_dir.path())
        .expect("origin should resolve");

    assert_eq!(url, "git@github.com:octo/cat.git");
}

#[test]
fn remote_url_ignores_other_remotes() {
    let (temp_dir, repo) = create_repo_on_branch("main");
    repo.remote("upstream", "https://github.com/octo/cat.git")
        .expect("should add upstream remote");

    let result = Git2Metadata.remote_url(temp_dir.path());

    assert_eq!(
        result,
        Err(LocalDiscoveryError::RemoteNotFound {
            name: "origin".to_owned(),
        })
    );
}
