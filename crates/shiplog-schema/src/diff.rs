//! Structural diff between two schema outlines

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::outline::{ProviderResources, ResourceOutline, SchemaOutline};

/// Action and filter changes on a resource present in both outlines.
///
/// Membership is list containment; member order follows the source lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDelta<'a> {
    pub actions_added: Vec<&'a str>,
    pub actions_removed: Vec<&'a str>,
    pub filters_added: Vec<&'a str>,
    pub filters_removed: Vec<&'a str>,
}

impl<'a> ResourceDelta<'a> {
    /// Compare the old and new outline of one resource
    pub fn between(old: &'a ResourceOutline, new: &'a ResourceOutline) -> Self {
        Self {
            actions_added: missing_from(&new.actions, &old.actions),
            actions_removed: missing_from(&old.actions, &new.actions),
            filters_added: missing_from(&new.filters, &old.filters),
            filters_removed: missing_from(&old.filters, &new.filters),
        }
    }

    /// True when nothing changed
    pub fn is_empty(&self) -> bool {
        self.actions_added.is_empty()
            && self.actions_removed.is_empty()
            && self.filters_added.is_empty()
            && self.filters_removed.is_empty()
    }

    /// Indented list items, one per non-empty group
    pub fn lines(&self) -> Vec<String> {
        [
            ("actions added", &self.actions_added),
            ("actions removed", &self.actions_removed),
            ("filters added", &self.filters_added),
            ("filters removed", &self.filters_removed),
        ]
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(label, members)| format!("  - {}: {}", label, quoted(members)))
        .collect()
    }
}

fn missing_from<'a>(items: &'a [String], other: &[String]) -> Vec<&'a str> {
    items
        .iter()
        .filter(|item| !other.contains(item))
        .map(String::as_str)
        .collect()
}

fn quoted(members: &[&str]) -> String {
    members
        .iter()
        .map(|m| format!("`{}`", m))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the differences between two outlines as a Markdown list.
///
/// Only providers present in `new` are compared. Lines are joined with
/// `\n` and the result always ends with a single newline, so identical
/// outlines produce `"\n"`.
#[instrument(skip_all, fields(old = old.resource_count(), new = new.resource_count()))]
pub fn schema_diff(old: &SchemaOutline, new: &SchemaOutline) -> String {
    let no_resources = ProviderResources::new();
    let mut out: Vec<String> = Vec::new();

    for (provider, resources_new) in new.providers() {
        let resources_old = old.resources(provider).unwrap_or(&no_resources);
        diff_provider(resources_old, resources_new, &mut out);
    }

    debug!(lines = out.len(), "schema diff computed");
    let mut report = out.join("\n");
    report.push('\n');
    report
}

fn diff_provider(
    old: &ProviderResources,
    new: &ProviderResources,
    out: &mut Vec<String>,
) {
    let names: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();

    for name in names {
        match (old.get(name), new.get(name)) {
            (None, _) => out.push(format!("- `{}` added", name)),
            (Some(_), None) => out.push(format!("- `{}` removed", name)),
            (Some(before), Some(after)) => {
                let delta = ResourceDelta::between(before, after);
                if !delta.is_empty() {
                    out.push(format!("- `{}`", name));
                    out.extend(delta.lines());
                }
            }
        }
    }
}
