//! Changelog types

use std::collections::BTreeMap;

/// Commit messages bucketed by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogGroups {
    groups: BTreeMap<String, Vec<String>>,
    total: usize,
}

impl ChangelogGroups {
    /// Create an empty set of groups
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a category and count it
    pub fn push(&mut self, category: impl Into<String>, message: impl Into<String>) {
        self.groups
            .entry(category.into())
            .or_default()
            .push(message.into());
        self.total += 1;
    }

    /// Number of accepted commits
    pub fn total(&self) -> usize {
        self.total
    }

    /// Messages of one category, in insertion order
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Categories in alphabetical order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Per-category message counts
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        self.groups
            .iter()
            .map(|(category, messages)| (category.as_str(), messages.len()))
            .collect()
    }

    /// Categories alphabetically, each with its messages sorted
    pub fn sorted(&self) -> Vec<(&str, Vec<&str>)> {
        self.groups
            .iter()
            .map(|(category, messages)| {
                let mut messages: Vec<&str> = messages.iter().map(String::as_str).collect();
                messages.sort_unstable();
                (category.as_str(), messages)
            })
            .collect()
    }

    /// Check if no commit was accepted
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Everything written to the changelog file
#[derive(Debug, Clone, Default)]
pub struct ChangelogReport {
    /// Grouped commit messages
    pub groups: ChangelogGroups,
    /// Markdown schema diff, when one was computed
    pub schema_diff: Option<String>,
}

impl ChangelogReport {
    /// Create a report without a schema diff
    pub fn new(groups: ChangelogGroups) -> Self {
        Self {
            groups,
            schema_diff: None,
        }
    }

    /// Attach a schema diff
    pub fn with_schema_diff(mut self, diff: impl Into<String>) -> Self {
        self.schema_diff = Some(diff.into());
        self
    }
}
