//! shiplog changelog - commit classification and changelog generation
//!
//! Commits are bucketed by the category prefix in their message (the text
//! before the first `-`), normalized through an alias table and filtered
//! through a skip-set, then rendered as Markdown sections.

pub mod classifier;
pub mod formatter;
pub mod rules;
pub mod types;

pub use classifier::{Classifier, ClassifyOptions};
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use rules::CategoryRules;
pub use types::{ChangelogGroups, ChangelogReport};
