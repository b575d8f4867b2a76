//! Outline of the currently installed resource catalog

use tracing::{info, instrument};

use shiplog_core::error::{Result, SchemaError};

use crate::command::capture_stdout;
use crate::outline::SchemaOutline;

/// Source of the outline the next release will ship
pub trait ResourceCatalog {
    /// Load every available resource definition
    fn load_available(&mut self) -> Result<()>;

    /// Outline of the loaded catalog
    fn outline(&self) -> Result<SchemaOutline>;
}

/// Catalog read from a local command printing the outline as JSON
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    command: Vec<String>,
    loaded: Option<SchemaOutline>,
}

impl CommandCatalog {
    /// Program followed by its arguments
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            loaded: None,
        }
    }
}

impl ResourceCatalog for CommandCatalog {
    #[instrument(skip(self), fields(command = ?self.command))]
    fn load_available(&mut self) -> Result<()> {
        let (program, args) =
            self.command
                .split_first()
                .ok_or_else(|| SchemaError::CommandFailed {
                    command: String::new(),
                    reason: "no catalog command configured".to_string(),
                })?;

        let stdout = capture_stdout(program, args)?;
        let outline = SchemaOutline::from_slice(&stdout, program)?;
        info!(resources = outline.resource_count(), "loaded resource catalog");
        self.loaded = Some(outline);
        Ok(())
    }

    fn outline(&self) -> Result<SchemaOutline> {
        self.loaded
            .clone()
            .ok_or_else(|| SchemaError::CatalogNotLoaded.into())
    }
}
