//! Fixture repositories for tests

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub(crate) fn init_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    (temp, repo)
}

/// Commit an empty tree on HEAD with a fixed author time
pub(crate) fn commit_at(
    repo: &Repository,
    author: &str,
    seconds: i64,
    offset_minutes: i32,
    message: &str,
) -> Oid {
    let sig = Signature::new(
        author,
        "dev@example.com",
        &Time::new(seconds, offset_minutes),
    )
    .unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}
