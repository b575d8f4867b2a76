//! Console output for the run summary

use std::path::Path;

use console::style;
use shiplog_changelog::ChangelogGroups;

/// Print the accepted-commit total and per-category counts
pub fn summary(groups: &ChangelogGroups) {
    println!(
        "{} {}",
        style("total commits").bold(),
        style(groups.total()).green().bold()
    );
    for (category, count) in groups.counts() {
        println!("  {}: {}", style(category).dim(), count);
    }
}

/// Confirm where the changelog went
pub fn written(path: &Path) {
    println!(
        "{} Changelog written to {}",
        style("✓").green().bold(),
        style(path.display()).cyan()
    );
}
