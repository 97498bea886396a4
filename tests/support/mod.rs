//! Shared test utilities.

use git2::{Repository, Signature};
use tempfile::TempDir;

pub mod runtime;

/// Creates a repository with one empty commit on `branch` and the given
/// `origin` URL.
///
/// # Panics
///
/// Panics if the temporary directory or any Git object cannot be created.
pub fn create_repo_on_branch(branch: &str, origin_url: &str) -> TempDir {
    let temp_dir = TempDir::new()
        .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
    let repo = Repository::init(temp_dir.path())
        .unwrap_or_else(|error| panic!("failed to init repository: {error}"));
    commit_empty_tree(&repo, branch);
    repo.remote("origin", origin_url)
        .unwrap_or_else(|error| panic!("failed to add origin remote: {error}"));
    temp_dir
}

/// Creates a plain directory that is not inside any Git repository.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_plain_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

fn commit_empty_tree(repo: &Repository, branch: &str) {
    let signature = Signature::now("Test Author", "author@example.com")
        .unwrap_or_else(|error| panic!("failed to create signature: {error}"));
    let tree_id = repo
        .index()
        .and_then(|mut index| index.write_tree())
        .unwrap_or_else(|error| panic!("failed to write tree: {error}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|error| panic!("failed to find tree: {error}"));
    let reference = format!("refs/heads/{branch}");
    repo.commit(Some(&reference), &signature, &signature, "initial", &tree, &[])
        .unwrap_or_else(|error| panic!("failed to commit: {error}"));
    repo.set_head(&reference)
        .unwrap_or_else(|error| panic!("failed to move HEAD: {error}"));
}
