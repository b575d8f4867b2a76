//! Changelog generation pipeline

use shiplog_changelog::{CategoryRules, ChangelogGroups, Classifier, ClassifyOptions};
use shiplog_core::config::SchemaConfig;
use shiplog_git::GitRepo;
use shiplog_schema::{released_outline, schema_diff, ContainerRuntime, ResourceCatalog};
use tracing::{info, instrument};

/// What part of history to summarize
#[derive(Debug, Clone, Default)]
pub struct HistoryRange {
    /// Tag or date; older commits are left out
    pub since: Option<String>,
    /// Tag or date; commits at or after it are left out
    pub end: Option<String>,
    /// Authors to keep
    pub users: Vec<String>,
}

impl HistoryRange {
    /// Reference to diff the schema against. Only an open-ended range
    /// (a `since` without an `end`) compares against the current catalog.
    pub fn schema_baseline(&self) -> Option<&str> {
        match (&self.since, &self.end) {
            (Some(since), None) => Some(since),
            _ => None,
        }
    }
}

/// Classify the commits reachable from HEAD within the range
#[instrument(skip(repo, rules))]
pub fn collect_groups(
    repo: &GitRepo,
    rules: &CategoryRules,
    range: &HistoryRange,
) -> anyhow::Result<ChangelogGroups> {
    let since = range
        .since
        .as_deref()
        .map(|r| repo.resolve_dateref(r))
        .transpose()?;
    let end = range
        .end
        .as_deref()
        .map(|r| repo.resolve_dateref(r))
        .transpose()?;

    let options = ClassifyOptions {
        since,
        end,
        authors: range.users.clone(),
    };

    let classifier = Classifier::new(rules.clone());
    let groups = classifier.try_classify(repo.walk_from_head()?, &options)?;
    Ok(groups)
}

/// Diff the outline released under `since` against the current catalog
#[instrument(skip(schema, runtime, catalog))]
pub fn schema_changes(
    since: &str,
    schema: &SchemaConfig,
    runtime: &dyn ContainerRuntime,
    catalog: &mut dyn ResourceCatalog,
) -> anyhow::Result<String> {
    let old = released_outline(runtime, &schema.image_for(since), &schema.image_args)?;

    catalog.load_available()?;
    let new = catalog.outline()?;

    let diff = schema_diff(&old, &new);
    info!(lines = diff.lines().count(), "schema diff ready");
    Ok(diff)
}
