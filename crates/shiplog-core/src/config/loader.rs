//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Parse and validate a config file; `.toml` is TOML, anything else YAML
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(ConfigError::TomlError)?,
        _ => serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?,
    };

    validate_config(&config)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Nearest config file at or above `repo_dir`.
///
/// Each directory is checked for the config names, then for the same
/// names under `.github/`.
pub fn find_config(repo_dir: &Path) -> Option<PathBuf> {
    let found = repo_dir.ancestors().find_map(|dir| {
        [dir.to_path_buf(), dir.join(".github")]
            .into_iter()
            .flat_map(|base| config_file_names().into_iter().map(move |name| base.join(name)))
            .find(|candidate| candidate.is_file())
    });
    debug!(repo_dir = %repo_dir.display(), found = ?found, "config lookup");
    found
}

/// Config for the repository at `repo_dir`, or the built-in defaults when
/// there is no config file. A config file that fails to parse or validate
/// is an error.
pub fn load_config_or_default(repo_dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(repo_dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            warn!(repo_dir = %repo_dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_found_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("shiplog.toml");
        std::fs::write(&config_path, "[schema]\nimage = \"example/app\"").unwrap();
        let nested = temp.path().join("tools").join("c7n_mailer");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config(&nested), Some(config_path));
    }

    #[test]
    fn test_repo_root_file_wins_over_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        std::fs::write(github_dir.join("shiplog.toml"), "").unwrap();
        let root_yaml = temp.path().join("shiplog.yaml");
        std::fs::write(&root_yaml, "{}").unwrap();

        assert_eq!(find_config(temp.path()), Some(root_yaml));
    }

    #[test]
    fn test_github_dir_is_searched() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("shiplog.yaml");
        std::fs::write(&config_path, "schema:\n  image: a/b\n").unwrap();

        assert_eq!(find_config(temp.path()), Some(config_path));
    }

    #[test]
    fn test_category_overrides_from_toml() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("shiplog.toml"),
            "[categories]\nskip = [\"release\", \"merge\", \"wip\"]\n\n[categories.aliases]\ngcp = \"google\"\n",
        )
        .unwrap();

        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_some());
        assert_eq!(
            config.categories.skip,
            Some(vec!["release".into(), "merge".into(), "wip".into()])
        );
        let aliases = config.categories.resolved_aliases();
        assert_eq!(aliases.get("gcp").map(String::as_str), Some("google"));
        assert_eq!(aliases.get("ci").map(String::as_str), Some("tests"));
        assert_eq!(config.schema.image, "cloudcustodian/c7n");
    }

    #[test]
    fn test_schema_overrides_from_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("shiplog.yaml");
        std::fs::write(
            &config_path,
            "schema:\n  image: example/app\n  catalog_command: [\"app\", \"outline\"]\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.schema.image, "example/app");
        assert_eq!(config.schema.catalog_command, vec!["app", "outline"]);
        assert_eq!(config.schema.runtime, "docker");
    }

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.schema.image, "cloudcustodian/c7n");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("shiplog.toml"), "[schema]\nimage = \"\"\n").unwrap();
        assert!(load_config_or_default(temp.path()).is_err());

        std::fs::write(temp.path().join("shiplog.toml"), "[schema\n").unwrap();
        assert!(matches!(
            load_config_or_default(temp.path()),
            Err(crate::ShiplogError::Config(ConfigError::TomlError(_)))
        ));
    }
}
