//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::rules::CategoryRules;
use crate::types::ChangelogReport;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a report; categories in the skip-set are never emitted
    fn format(&self, report: &ChangelogReport, rules: &CategoryRules) -> String;
}
