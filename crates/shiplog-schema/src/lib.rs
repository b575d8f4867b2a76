//! shiplog schema - outline retrieval and structural diffing
//!
//! A schema outline lists, per provider, every resource with the actions
//! and filters it supports. The old outline comes from a released container
//! image, the new one from the locally installed resource catalog.

mod catalog;
mod command;
pub mod diff;
pub mod outline;
mod runtime;

pub use catalog::{CommandCatalog, ResourceCatalog};
pub use diff::{schema_diff, ResourceDelta};
pub use outline::{ResourceOutline, SchemaOutline};
pub use runtime::{released_outline, ContainerRuntime, DockerCli};
