//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_categories(config)?;
    validate_schema(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_categories(config: &Config) -> Result<()> {
    if let Some(skip) = &config.categories.skip {
        // every category starts with ""
        if skip.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "categories.skip".to_string(),
                message: "entries cannot be empty".to_string(),
            }
            .into());
        }
    }

    for (alias, category) in &config.categories.aliases {
        if alias.trim().is_empty() || category.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "categories.aliases".to_string(),
                message: format!("alias '{}' -> '{}' has an empty side", alias, category),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_schema(config: &Config) -> Result<()> {
    if config.schema.image.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "schema.image".to_string(),
            message: "image cannot be empty".to_string(),
        }
        .into());
    }

    if config.schema.runtime.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "schema.runtime".to_string(),
            message: "runtime cannot be empty".to_string(),
        }
        .into());
    }

    if config.schema.catalog_command.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "schema.catalog_command".to_string(),
            message: "must name a program to run".to_string(),
        }
        .into());
    }

    Ok(())
}
