//! CLI definition and command handling

pub mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use shiplog_changelog::{CategoryRules, ChangelogFormatter, ChangelogReport, MarkdownFormatter};
use shiplog_core::config::load_config_or_default;
use shiplog_git::GitRepo;
use shiplog_schema::{CommandCatalog, DockerCli};

use crate::driver::{collect_groups, schema_changes, HistoryRange};

/// shiplog - categorized changelog from git history
#[derive(Debug, Parser)]
#[command(name = "shiplog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository location
    #[arg(long)]
    pub path: PathBuf,

    /// File the changelog is written to
    #[arg(long)]
    pub output: PathBuf,

    /// Tag or date; only newer commits are included
    #[arg(long)]
    pub since: Option<String>,

    /// Tag or date; only older commits are included
    #[arg(long)]
    pub end: Option<String>,

    /// Only include commits by this author (repeatable)
    #[arg(long = "user")]
    pub users: Vec<String>,
}

impl Cli {
    fn range(&self) -> HistoryRange {
        HistoryRange {
            since: self.since.clone(),
            end: self.end.clone(),
            users: self.users.clone(),
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        info!(path = %self.path.display(), output = %self.output.display(), "generating changelog");
        let (config, _) = load_config_or_default(&self.path)?;
        let repo = GitRepo::open(&self.path)?;
        let rules = CategoryRules::from_config(&config.categories);
        let range = self.range();

        let groups = collect_groups(&repo, &rules, &range)?;
        output::summary(&groups);

        let mut report = ChangelogReport::new(groups);
        if let Some(since) = range.schema_baseline() {
            let runtime = DockerCli::new(config.schema.runtime.as_str());
            let mut catalog = CommandCatalog::new(config.schema.catalog_command.clone());
            let diff = schema_changes(since, &config.schema, &runtime, &mut catalog)?;
            report = report.with_schema_diff(diff);
        }

        let changelog = MarkdownFormatter::new().format(&report, &rules);
        std::fs::write(&self.output, changelog)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        output::written(&self.output);
        Ok(())
    }
}
