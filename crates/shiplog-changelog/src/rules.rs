//! Category normalization rules

use std::collections::BTreeMap;

use shiplog_core::config::{default_aliases, default_skip, CategoriesConfig};

/// Alias table and skip-set used to turn commit prefixes into categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    aliases: BTreeMap<String, String>,
    skip: Vec<String>,
}

impl CategoryRules {
    /// Create rules from an explicit alias table and skip-set
    pub fn new(aliases: BTreeMap<String, String>, skip: Vec<String>) -> Self {
        Self { aliases, skip }
    }

    /// Build the effective rules from configuration
    pub fn from_config(config: &CategoriesConfig) -> Self {
        Self::new(config.resolved_aliases(), config.resolved_skip())
    }

    /// Text before the first `-` of the trimmed message, if there is one
    pub fn prefix(message: &str) -> Option<&str> {
        message.trim().split_once('-').map(|(prefix, _)| prefix)
    }

    /// Normalize a raw prefix into a category.
    ///
    /// Trims and lower-cases, cuts at the first `.` and then at the first
    /// `/`, and finally applies the alias table on an exact match.
    pub fn normalize(&self, raw: &str) -> String {
        let mut category = raw.trim().to_lowercase();

        if let Some(pos) = category.find('.') {
            category.truncate(pos);
        }
        if let Some(pos) = category.find('/') {
            category.truncate(pos);
        }

        match self.aliases.get(&category) {
            Some(alias) => alias.clone(),
            None => category,
        }
    }

    /// Whether a category is excluded from the changelog
    pub fn is_skipped(&self, category: &str) -> bool {
        self.skip.iter().any(|s| category.starts_with(s.as_str()))
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new(default_aliases(), default_skip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(CategoryRules::prefix("aws - add ec2 filter"), Some("aws "));
        assert_eq!(CategoryRules::prefix("  gcp-fix - thing"), Some("gcp"));
        assert_eq!(CategoryRules::prefix("no delimiter here"), None);
        assert_eq!(CategoryRules::prefix("-leading"), Some(""));
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        let rules = CategoryRules::default();
        assert_eq!(rules.normalize("  AWS "), "aws");
    }

    #[test]
    fn test_normalize_truncates_dot_then_slash() {
        let rules = CategoryRules::default();
        assert_eq!(rules.normalize("aws.ec2"), "aws");
        assert_eq!(rules.normalize("azure/functions"), "azure");
        // '.' cut first leaves no '/' to cut
        assert_eq!(rules.normalize("gcp.a/b"), "gcp");
        assert_eq!(rules.normalize("k8s/admission.webhook"), "k8s");
    }

    #[test]
    fn test_normalize_applies_aliases_after_truncation() {
        let rules = CategoryRules::default();
        assert_eq!(rules.normalize("c7n_mailer"), "tools");
        assert_eq!(rules.normalize("CI"), "tests");
        assert_eq!(rules.normalize("cli/report"), "core");
        assert_eq!(rules.normalize("Aws Lambda Policy"), "aws");
        assert_eq!(rules.normalize("0.9.3"), "release");
    }

    #[test]
    fn test_is_skipped_by_prefix() {
        let rules = CategoryRules::default();
        assert!(rules.is_skipped("release"));
        assert!(rules.is_skipped("merge"));
        assert!(rules.is_skipped("merge pull request #123 from foo"));
        assert!(rules.is_skipped("releases"));
        assert!(!rules.is_skipped("aws"));
        assert!(!rules.is_skipped("other"));
    }

    #[test]
    fn test_from_config() {
        let mut config = CategoriesConfig {
            skip: Some(vec!["docs".to_string()]),
            ..Default::default()
        };
        config.aliases.insert("doc".to_string(), "docs".to_string());

        let rules = CategoryRules::from_config(&config);
        assert!(rules.is_skipped(&rules.normalize("doc")));
        assert!(!rules.is_skipped("release"));
    }
}
