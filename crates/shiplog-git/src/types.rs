//! Git types

use chrono::{DateTime, FixedOffset, Utc};

/// Information about a git commit
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Author name
    pub author: String,
    /// Author timestamp in the author's recorded offset
    pub time: DateTime<FixedOffset>,
    /// Raw commit message, body included
    pub message: String,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        author: impl Into<String>,
        time: DateTime<FixedOffset>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            author: author.into(),
            time,
            message: message.into(),
        }
    }

    /// Author timestamp normalized to UTC
    pub fn utc_time(&self) -> DateTime<Utc> {
        self.time.with_timezone(&Utc)
    }

    /// First line of the trimmed message
    pub fn summary(&self) -> &str {
        let message = self.message.trim();
        message.split('\n').next().unwrap_or(message)
    }
}
