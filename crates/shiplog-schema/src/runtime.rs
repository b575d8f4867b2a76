//! Container runtime access

use tracing::{info, instrument};

use shiplog_core::error::{Result, SchemaError};

use crate::command::capture_stdout;
use crate::outline::SchemaOutline;

/// Runs a container image to completion and returns what it printed
pub trait ContainerRuntime {
    /// Run `image` with `args`, blocking until it exits
    fn run(&self, image: &str, args: &[String]) -> Result<Vec<u8>>;
}

/// Container runtime backed by the `docker` command line
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    /// Use the given runtime binary (e.g. `docker` or `podman`)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check that the runtime binary is on PATH
    pub fn ensure_available(&self) -> Result<()> {
        which::which(&self.binary)
            .map(|_| ())
            .map_err(|_| SchemaError::RuntimeNotFound(self.binary.clone()).into())
    }

    fn run_args(image: &str, args: &[String]) -> Vec<String> {
        let mut full = vec!["run".to_string(), "--rm".to_string(), image.to_string()];
        full.extend(args.iter().cloned());
        full
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new("docker")
    }
}

impl ContainerRuntime for DockerCli {
    #[instrument(skip(self, args), fields(runtime = %self.binary))]
    fn run(&self, image: &str, args: &[String]) -> Result<Vec<u8>> {
        self.ensure_available()?;
        info!(image, "running container");
        capture_stdout(&self.binary, &Self::run_args(image, args))
    }
}

/// Fetch the outline a released image reports about itself
#[instrument(skip(runtime, args))]
pub fn released_outline(
    runtime: &dyn ContainerRuntime,
    image: &str,
    args: &[String],
) -> Result<SchemaOutline> {
    let stdout = runtime.run(image, args)?;
    let outline = SchemaOutline::from_slice(&stdout, image)?;
    info!(image, resources = outline.resource_count(), "loaded released outline");
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiplog_core::ShiplogError;
    use std::cell::RefCell;

    struct FakeRuntime {
        output: &'static [u8],
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl ContainerRuntime for FakeRuntime {
        fn run(&self, image: &str, args: &[String]) -> Result<Vec<u8>> {
            self.calls
                .borrow_mut()
                .push((image.to_string(), args.to_vec()));
            Ok(self.output.to_vec())
        }
    }

    #[test]
    fn test_released_outline_decodes_stdout() {
        let runtime = FakeRuntime {
            output: br#"{"aws": {"aws.ec2": {"actions": ["stop"], "filters": []}}}"#,
            calls: RefCell::new(Vec::new()),
        };
        let args = vec!["schema".to_string(), "--outline".to_string(), "--json".to_string()];

        let outline = released_outline(&runtime, "cloudcustodian/c7n:0.9.30", &args).unwrap();

        assert_eq!(outline.resource_count(), 1);
        assert_eq!(
            runtime.calls.borrow().as_slice(),
            [("cloudcustodian/c7n:0.9.30".to_string(), args)]
        );
    }

    #[test]
    fn test_released_outline_rejects_garbage() {
        let runtime = FakeRuntime {
            output: b"Traceback (most recent call last):",
            calls: RefCell::new(Vec::new()),
        };
        let err = released_outline(&runtime, "img:1", &[]).unwrap_err();
        assert!(matches!(err, ShiplogError::Schema(SchemaError::Decode { .. })));
    }

    #[test]
    fn test_docker_run_args() {
        let args = DockerCli::run_args("img:1", &["schema".to_string()]);
        assert_eq!(args, vec!["run", "--rm", "img:1", "schema"]);
    }

    #[test]
    fn test_missing_runtime_binary() {
        let runtime = DockerCli::new("shiplog-no-such-runtime");
        let err = runtime.run("img:1", &[]).unwrap_err();
        assert!(matches!(
            err,
            ShiplogError::Schema(SchemaError::RuntimeNotFound(_))
        ));
    }
}
