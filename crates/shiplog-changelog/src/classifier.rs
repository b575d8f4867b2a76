//! Commit classification

use std::convert::Infallible;

use chrono::{DateTime, Utc};
use shiplog_core::config::FALLBACK_CATEGORY;
use shiplog_git::CommitInfo;
use tracing::{debug, info, instrument, warn};

use crate::rules::CategoryRules;
use crate::types::ChangelogGroups;

/// Bounds and filters applied while walking history
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Stop at the first commit at or before this instant
    pub since: Option<DateTime<Utc>>,
    /// Skip commits at or after this instant
    pub end: Option<DateTime<Utc>>,
    /// Only keep commits by these authors (empty keeps everyone)
    pub authors: Vec<String>,
}

impl ClassifyOptions {
    fn filters_authors(&self) -> bool {
        !self.authors.is_empty()
    }
}

/// Buckets commits into changelog categories
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: CategoryRules,
}

impl Classifier {
    /// Create a classifier with the given rules
    pub fn new(rules: CategoryRules) -> Self {
        Self { rules }
    }

    /// Rules in use
    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    /// Classify commits ordered newest first
    pub fn classify<I>(&self, commits: I, options: &ClassifyOptions) -> ChangelogGroups
    where
        I: IntoIterator<Item = CommitInfo>,
    {
        match self.try_classify(commits.into_iter().map(Ok::<_, Infallible>), options) {
            Ok(groups) => groups,
            Err(never) => match never {},
        }
    }

    /// Classify a fallible commit stream ordered newest first.
    ///
    /// The stream is not advanced past the first commit at or before
    /// `since`, and the first error aborts classification.
    #[instrument(skip_all, fields(since = ?options.since, end = ?options.end, authors = options.authors.len()))]
    pub fn try_classify<I, E>(&self, commits: I, options: &ClassifyOptions) -> Result<ChangelogGroups, E>
    where
        I: IntoIterator<Item = Result<CommitInfo, E>>,
    {
        let mut groups = ChangelogGroups::new();

        for commit in commits {
            let commit = commit?;
            let time = commit.utc_time();

            if options.since.is_some_and(|since| time <= since) {
                debug!(hash = %commit.hash, %time, "reached since boundary");
                break;
            }
            if options.end.is_some_and(|end| time >= end) {
                continue;
            }
            if options.filters_authors() && !options.authors.contains(&commit.author) {
                continue;
            }

            let category = self.category_of(&commit);
            if self.rules.is_skipped(&category) {
                debug!(hash = %commit.hash, category, "skipping commit");
                continue;
            }

            let message = if options.filters_authors() {
                format!(
                    "{} - {} - {}",
                    commit.time.format("%Y/%m/%d"),
                    commit.author,
                    commit.summary()
                )
            } else {
                commit.summary().to_string()
            };

            groups.push(category, message);
        }

        info!(total = groups.total(), "classified commits");
        Ok(groups)
    }

    fn category_of(&self, commit: &CommitInfo) -> String {
        match CategoryRules::prefix(&commit.message) {
            Some(prefix) => self.rules.normalize(prefix),
            None => {
                warn!(time = %commit.time, commit_message = %commit.message, "bad commit");
                self.rules.normalize(FALLBACK_CATEGORY)
            }
        }
    }
}
