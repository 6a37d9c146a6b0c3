//! Configuration file support for the hook.
//!
//! Provides YAML-based configuration through `third-party-license.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "third-party-license.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Interpreter used to create the virtual environment
    pub python: Option<String>,
    /// Interpreter whose installed packages the generator inspects
    pub python_path: Option<String>,
    /// pip requirement for the generator (may pin a version)
    pub package: Option<String>,
    pub requirements_path: Option<String>,
    pub skip_prefixes: Option<Vec<String>>,
    pub do_not_skip_not_required_packages: Option<bool>,
    pub output_file: Option<String>,
    /// Arguments forwarded verbatim to the generator
    pub extra_args: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to null, which means "no settings"
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let scalar_fields = [
        ("python", &config.python),
        ("python_path", &config.python_path),
        ("package", &config.package),
        ("requirements_path", &config.requirements_path),
        ("output_file", &config.output_file),
    ];
    for (name, value) in scalar_fields {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default value.",
                name
            );
        }
    }

    if let Some(ref prefixes) = config.skip_prefixes {
        for (i, prefix) in prefixes.iter().enumerate() {
            if prefix.trim().is_empty() {
                bail!(
                    "Invalid config: skip_prefixes[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a package name prefix (e.g., \"acme\"). Use an empty list to skip nothing.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
