//! Commit history operations

use chrono::{DateTime, FixedOffset, TimeZone};
use git2::{Repository, Revwalk, Sort};
use tracing::{debug, instrument};

use shiplog_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

/// Lazy walk over the history reachable from HEAD, newest first.
///
/// Commits are only read from the object database as the walk advances, so
/// a consumer that stops early never touches older history.
pub struct CommitWalk<'repo> {
    repo: &'repo Repository,
    revwalk: Revwalk<'repo>,
}

impl Iterator for CommitWalk<'_> {
    type Item = Result<CommitInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = match self.revwalk.next()? {
            Ok(oid) => oid,
            Err(e) => return Some(Err(e.into())),
        };

        Some(
            self.repo
                .find_commit(oid)
                .map_err(GitError::from)
                .and_then(|commit| commit_to_info(&commit)),
        )
    }
}

impl GitRepo {
    /// Walk commits reachable from HEAD, newest first
    #[instrument(skip(self))]
    pub fn walk_from_head(&self) -> Result<CommitWalk<'_>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(head.id())?;

        debug!(head = %head.id(), "starting history walk");
        Ok(CommitWalk {
            repo: &self.repo,
            revwalk,
        })
    }
}

/// Author time of a git signature in its recorded offset
pub(crate) fn signature_time(when: git2::Time) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(when.offset_minutes() * 60)?;
    offset.timestamp_opt(when.seconds(), 0).single()
}

/// Convert a git2 Commit to CommitInfo
pub(crate) fn commit_to_info(commit: &git2::Commit<'_>) -> Result<CommitInfo> {
    let hash = commit.id().to_string();
    let author = commit.author();

    let time = signature_time(author.when())
        .ok_or_else(|| GitError::InvalidTimestamp { hash: hash.clone() })?;
    let name = String::from_utf8_lossy(author.name_bytes()).into_owned();
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

    Ok(CommitInfo::new(hash, name, time, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{commit_at, init_repo};

    #[test]
    fn test_walk_newest_first() {
        let (temp, repo) = init_repo();
        commit_at(&repo, "Alice", 1_700_000_000, 0, "core - first");
        commit_at(&repo, "Bob", 1_700_000_100, 0, "aws - second");
        commit_at(&repo, "Alice", 1_700_000_200, 0, "gcp - third");

        let git = GitRepo::open(temp.path()).unwrap();
        let messages: Vec<String> = git
            .walk_from_head()
            .unwrap()
            .map(|c| c.unwrap().message)
            .collect();

        assert_eq!(messages, vec!["gcp - third", "aws - second", "core - first"]);
    }

    #[test]
    fn test_walk_keeps_author_offset() {
        let (temp, repo) = init_repo();
        commit_at(&repo, "Carol", 1_700_000_000, -300, "tools - offset");

        let git = GitRepo::open(temp.path()).unwrap();
        let commit = git.walk_from_head().unwrap().next().unwrap().unwrap();

        assert_eq!(commit.author, "Carol");
        assert_eq!(commit.time.offset().local_minus_utc(), -300 * 60);
        assert_eq!(commit.utc_time().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_walk_on_empty_repo_fails() {
        let (temp, _repo) = init_repo();
        let git = GitRepo::open(temp.path()).unwrap();
        assert!(git.walk_from_head().is_err());
    }

    #[test]
    fn test_signature_time_rejects_bad_offset() {
        assert!(signature_time(git2::Time::new(0, 60 * 48)).is_none());
    }
}
