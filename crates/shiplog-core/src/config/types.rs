//! Configuration types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::{
    default_aliases, default_catalog_command, default_image_args, default_skip, DEFAULT_IMAGE,
    DEFAULT_RUNTIME,
};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category normalization
    pub categories: CategoriesConfig,

    /// Schema diff sources
    pub schema: SchemaConfig,
}

/// Category alias and skip configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesConfig {
    /// Extra aliases, merged over the built-in table
    pub aliases: BTreeMap<String, String>,

    /// Use only the configured aliases instead of merging
    pub replace_aliases: bool,

    /// Skip-set; replaces the built-in one when present
    pub skip: Option<Vec<String>>,
}

impl CategoriesConfig {
    /// Effective alias table
    pub fn resolved_aliases(&self) -> BTreeMap<String, String> {
        let mut aliases = if self.replace_aliases {
            BTreeMap::new()
        } else {
            default_aliases()
        };
        for (alias, category) in &self.aliases {
            aliases.insert(alias.to_lowercase(), category.clone());
        }
        aliases
    }

    /// Effective skip-set
    pub fn resolved_skip(&self) -> Vec<String> {
        self.skip.clone().unwrap_or_else(default_skip)
    }
}

/// Where the old and new schema outlines come from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Image repository; the `since` reference is used as the tag
    pub image: String,

    /// Arguments that make the image print its outline as JSON
    pub image_args: Vec<String>,

    /// Container runtime binary
    pub runtime: String,

    /// Command printing the outline of the locally installed catalog
    pub catalog_command: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE.to_string(),
            image_args: default_image_args(),
            runtime: DEFAULT_RUNTIME.to_string(),
            catalog_command: default_catalog_command(),
        }
    }
}

impl SchemaConfig {
    /// Full image reference for a released tag
    pub fn image_for(&self, tag: &str) -> String {
        format!("{}:{}", self.image, tag)
    }
}
