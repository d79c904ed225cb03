//! Run configuration.
//!
//! Values come from command-line flags, then an optional TOML file, then
//! built-in defaults:
//!
//! ```toml
//! user_id = "8e3ddf21-4153-4838-abc6-47d553a5d905"
//! batch_size = 500
//! output_dir = "sql"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use tracker_model::{DEFAULT_MAX_ROWS_PER_STATEMENT, UserId};

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub user_id: Option<String>,
    pub batch_size: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Settings given on the command line; `None` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub user_id: Option<String>,
    pub config: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub user_id: UserId,
    pub batch_size: usize,
    pub output_dir: Option<PathBuf>,
}

impl ImportConfig {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            batch_size: DEFAULT_MAX_ROWS_PER_STATEMENT,
            output_dir: None,
        }
    }

    /// Merge flags over the config file (if any) over defaults.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match &overrides.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Self::merge(overrides, file)
    }

    pub fn merge(overrides: &ConfigOverrides, file: ConfigFile) -> Result<Self> {
        let Some(user_id) = overrides.user_id.clone().or(file.user_id) else {
            bail!("no user id configured; pass --user-id or set user_id in a --config file");
        };
        let user_id: UserId = user_id
            .parse()
            .with_context(|| format!("invalid user id '{user_id}'"))?;
        let batch_size = overrides
            .batch_size
            .or(file.batch_size)
            .unwrap_or(DEFAULT_MAX_ROWS_PER_STATEMENT);
        if batch_size == 0 {
            bail!("batch size must be at least 1");
        }
        Ok(Self {
            user_id,
            batch_size,
            output_dir: overrides.output_dir.clone().or(file.output_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "8e3ddf21-4153-4838-abc6-47d553a5d905";

    #[test]
    fn flags_override_file_values() {
        let file = ConfigFile::parse(&format!(
            "user_id = \"{USER}\"\nbatch_size = 10\noutput_dir = \"from-file\"\n"
        ))
        .unwrap();
        let overrides = ConfigOverrides {
            batch_size: Some(25),
            ..ConfigOverrides::default()
        };
        let config = ImportConfig::merge(&overrides, file).unwrap();
        assert_eq!(config.user_id.to_string(), USER);
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.output_dir, Some(PathBuf::from("from-file")));
    }

    #[test]
    fn defaults_apply_without_file() {
        let overrides = ConfigOverrides {
            user_id: Some(USER.to_string()),
            ..ConfigOverrides::default()
        };
        let config = ImportConfig::merge(&overrides, ConfigFile::default()).unwrap();
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn user_id_is_required_and_validated() {
        let error = ImportConfig::merge(&ConfigOverrides::default(), ConfigFile::default())
            .unwrap_err();
        assert!(error.to_string().contains("no user id configured"));

        let overrides = ConfigOverrides {
            user_id: Some("not-a-uuid".to_string()),
            ..ConfigOverrides::default()
        };
        let error = ImportConfig::merge(&overrides, ConfigFile::default()).unwrap_err();
        assert_eq!(error.to_string(), "invalid user id 'not-a-uuid'");
    }

    #[test]
    fn zero_batch_size_is_invalid() {
        let overrides = ConfigOverrides {
            user_id: Some(USER.to_string()),
            batch_size: Some(0),
            ..ConfigOverrides::default()
        };
        assert!(ImportConfig::merge(&overrides, ConfigFile::default()).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("user = \"x\"\n").is_err());
    }
}
