//! shiplog core - shared errors and configuration
//!
//! This crate provides the error types and the configuration layer used by
//! the git, changelog and schema crates as well as the CLI.

pub mod config;
pub mod error;

pub use config::{CategoriesConfig, Config, SchemaConfig};
pub use error::{ConfigError, GitError, Result, SchemaError, ShiplogError};
