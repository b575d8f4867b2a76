//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::rules::CategoryRules;
use crate::types::ChangelogReport;

/// Heading placed above the schema diff
pub const SCHEMA_DIFF_HEADING: &str = "# schema diff";

/// Markdown changelog formatter.
///
/// One `# <category>` heading per category, messages as ` - ` list items,
/// and each section closed by two empty lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip_all, fields(total = report.groups.total()))]
    fn format(&self, report: &ChangelogReport, rules: &CategoryRules) -> String {
        let mut output = String::new();

        for (category, messages) in report.groups.sorted() {
            if rules.is_skipped(category) {
                continue;
            }

            output.push_str(&format!("# {}\n", category));
            for message in messages {
                output.push_str(&format!(" - {}\n", message.trim()));
            }
            output.push_str("\n\n");
        }

        if let Some(diff) = report.schema_diff.as_deref() {
            if !diff.trim().is_empty() {
                output.push_str(SCHEMA_DIFF_HEADING);
                output.push('\n');
                output.push_str(diff);
                output.push('\n');
            }
        }

        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangelogGroups;

    fn groups() -> ChangelogGroups {
        let mut groups = ChangelogGroups::new();
        groups.push("gcp", "gcp - add bucket filter");
        groups.push("aws", "aws - zeta ");
        groups.push("aws", "aws - alpha");
        groups
    }

    #[test]
    fn test_sections_sorted() {
        let report = ChangelogReport::new(groups());
        let output = MarkdownFormatter::new().format(&report, &CategoryRules::default());

        assert_eq!(
            output,
            "# aws\n - aws - alpha\n - aws - zeta\n\n\n# gcp\n - gcp - add bucket filter\n\n\n"
        );
    }

    #[test]
    fn test_schema_diff_appended() {
        let report = ChangelogReport::new(groups()).with_schema_diff("- `aws.ec2` added\n");
        let output = MarkdownFormatter::new().format(&report, &CategoryRules::default());

        assert!(output.ends_with("\n\n\n# schema diff\n- `aws.ec2` added\n\n"));
    }

    #[test]
    fn test_blank_schema_diff_omitted() {
        let report = ChangelogReport::new(groups()).with_schema_diff("\n");
        let output = MarkdownFormatter::new().format(&report, &CategoryRules::default());

        assert!(!output.contains(SCHEMA_DIFF_HEADING));
    }

    #[test]
    fn test_skipped_categories_not_rendered() {
        let mut groups = ChangelogGroups::new();
        groups.push("release", "release - 1.0");
        groups.push("core", "core - x");
        let output =
            MarkdownFormatter::new().format(&ChangelogReport::new(groups), &CategoryRules::default());

        assert_eq!(output, "# core\n - core - x\n\n\n");
    }

    #[test]
    fn test_empty_report() {
        let output = MarkdownFormatter::new()
            .format(&ChangelogReport::default(), &CategoryRules::default());
        assert!(output.is_empty());
    }
}
