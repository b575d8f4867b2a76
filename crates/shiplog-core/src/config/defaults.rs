//! Default configuration values

use std::collections::BTreeMap;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "shiplog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "shiplog.yaml";

/// Image repository the released schema outline is read from
pub const DEFAULT_IMAGE: &str = "cloudcustodian/c7n";

/// Container runtime binary
pub const DEFAULT_RUNTIME: &str = "docker";

/// Category used for commits without a `-` delimiter
pub const FALLBACK_CATEGORY: &str = "other";

/// Categories dropped from the changelog, matched by prefix
pub const DEFAULT_SKIP: &[&str] = &["release", "merge"];

/// Commit prefix spellings and the category they are filed under
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("c7n", "core"),
    ("cli", "core"),
    ("c7n_mailer", "tools"),
    ("mailer", "tools"),
    ("utils", "core"),
    ("cask", "tools"),
    ("test", "tests"),
    ("docker", "core"),
    ("dockerfile", "tools"),
    ("asg", "aws"),
    ("build", "tests"),
    ("aws lambda policy", "aws"),
    ("tags", "aws"),
    ("notify", "core"),
    ("sechub", "aws"),
    ("sns", "aws"),
    ("actions", "aws"),
    ("serverless", "core"),
    ("packaging", "tests"),
    ("0", "release"),
    ("dep", "core"),
    ("ci", "tests"),
];

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".shiplog.toml",
        ".shiplog.yaml",
    ]
}

/// Default alias table as an owned map
pub fn default_aliases() -> BTreeMap<String, String> {
    DEFAULT_ALIASES
        .iter()
        .map(|(alias, category)| (alias.to_string(), category.to_string()))
        .collect()
}

/// Default skip-set as owned strings
pub fn default_skip() -> Vec<String> {
    DEFAULT_SKIP.iter().map(|s| s.to_string()).collect()
}

/// Arguments passed to the released image to print its outline
pub fn default_image_args() -> Vec<String> {
    vec!["schema".into(), "--outline".into(), "--json".into()]
}

/// Local command printing the outline of the installed resource catalog
pub fn default_catalog_command() -> Vec<String> {
    vec![
        "custodian".into(),
        "schema".into(),
        "--outline".into(),
        "--json".into(),
    ]
}
