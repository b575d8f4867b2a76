//! Schema outline types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shiplog_core::error::{Result, SchemaError};

/// Resources of one provider, keyed by resource name
pub type ProviderResources = BTreeMap<String, ResourceOutline>;

/// Actions and filters available on one resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOutline {
    /// Action names, in the order the catalog lists them
    #[serde(default)]
    pub actions: Vec<String>,
    /// Filter names, in the order the catalog lists them
    #[serde(default)]
    pub filters: Vec<String>,
}

impl ResourceOutline {
    /// Create an outline from action and filter names
    pub fn new<A, F>(actions: A, filters: F) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            filters: filters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Provider → resource → outline snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaOutline(BTreeMap<String, ProviderResources>);

impl SchemaOutline {
    /// Create an empty outline
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an outline from JSON bytes; `source` names where they came from
    pub fn from_slice(bytes: &[u8], source: &str) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|error| {
            SchemaError::Decode {
                source_name: source.to_string(),
                error,
            }
            .into()
        })
    }

    /// Ensure a provider exists, possibly without resources
    pub fn add_provider(&mut self, provider: impl Into<String>) -> &mut ProviderResources {
        self.0.entry(provider.into()).or_default()
    }

    /// Add or replace a resource under a provider
    pub fn insert(
        &mut self,
        provider: impl Into<String>,
        resource: impl Into<String>,
        outline: ResourceOutline,
    ) {
        self.add_provider(provider).insert(resource.into(), outline);
    }

    /// Resources of a provider
    pub fn resources(&self, provider: &str) -> Option<&ProviderResources> {
        self.0.get(provider)
    }

    /// Providers with their resources, alphabetically
    pub fn providers(&self) -> impl Iterator<Item = (&str, &ProviderResources)> {
        self.0.iter().map(|(name, resources)| (name.as_str(), resources))
    }

    /// Total number of resources across providers
    pub fn resource_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }
}
