//! Configuration file support for sbom-task.
//!
//! Provides TOML-based configuration through `sbom-task.toml` files,
//! including data structures, file loading, and validation. Config values
//! are defaults only; command-line flags always take precedence, and the
//! resolved values are threaded through the request rather than held as
//! process-global state.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "sbom-task.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Path to the external SBOM tool executable
    pub tool_path: Option<PathBuf>,
    /// Default verbosity token when none is passed on the command line
    pub verbosity: Option<String>,
    /// Default manifest format/version, e.g. "SPDX:2.2"
    pub manifest_info: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

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
    if let Some(ref tool_path) = config.tool_path {
        if tool_path.as_os_str().is_empty() {
            bail!(
                "Invalid config: tool_path must not be empty.\n\n\
                 💡 Hint: Point tool_path at the SBOM tool executable, or remove the key."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
tool_path = "/usr/local/bin/sbom-tool"
verbosity = "Information"
manifest_info = "SPDX:2.2"
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.tool_path.as_deref(),
            Some(Path::new("/usr/local/bin/sbom-tool"))
        );
        assert_eq!(config.verbosity.as_deref(), Some("Information"));
        assert_eq!(config.manifest_info.as_deref(), Some("SPDX:2.2"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "tool_path = [broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_tool_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "tool_path = \"\"").unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("tool_path must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "verbosity = \"Warning\"\nnot_a_real_key = true\n",
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("not_a_real_key"));
    }

    #[test]
    fn test_discover_returns_none_when_absent() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_discover_finds_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "verbosity = \"Error\"").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.verbosity.as_deref(), Some("Error"));
    }
}
