//! Tag operations

use chrono::{DateTime, FixedOffset};
use tracing::{debug, instrument};

use shiplog_core::error::GitError;

use crate::commits::signature_time;
use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Author time of the commit a tag points to.
    ///
    /// Returns `None` when no such tag exists or the name is not a valid
    /// reference name, so callers can try other interpretations.
    #[instrument(skip(self))]
    pub fn tag_commit_time(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let tag_ref = format!("refs/tags/{}", name);

        let reference = match self.repo.find_reference(&tag_ref) {
            Ok(reference) => reference,
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec
                ) =>
            {
                debug!(name, "no such tag");
                return Ok(None);
            }
            Err(e) => return Err(GitError::Git2(e)),
        };

        let commit = reference.peel_to_commit()?;
        let time = signature_time(commit.author().when()).ok_or_else(|| {
            GitError::InvalidTimestamp {
                hash: commit.id().to_string(),
            }
        })?;

        debug!(name, commit = %commit.id(), %time, "resolved tag");
        Ok(Some(time))
    }
}
