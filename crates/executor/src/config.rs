//! Store configuration via `memkv.toml`
//!
//! The defaults reproduce the permissive behaviour of the command table:
//! a write against a key of the wrong type silently re-initialises it.
//! Setting `type_mismatch = "reject"` keeps the key intact instead and
//! reports [`Error::WrongType`] through `Store::try_execute`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Config file name used by hosts that keep one next to their data.
pub const CONFIG_FILE_NAME: &str = "memkv.toml";

/// What a typed write does when the key holds another variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Replace the value with an empty one of the required type, then mutate.
    #[default]
    Migrate,
    /// Leave the value untouched and fail the command.
    Reject,
}

/// Store configuration loaded from `memkv.toml`.
///
/// # Example
///
/// ```toml
/// # "migrate" (default) or "reject"
/// type_mismatch = "migrate"
///
/// # initial_capacity = 1024
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Type mismatch policy: `"migrate"` or `"reject"`.
    #[serde(default = "default_type_mismatch_str")]
    pub type_mismatch: String,
    /// Number of keys to reserve room for up front.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_capacity: Option<usize>,
}

fn default_type_mismatch_str() -> String {
    "migrate".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            type_mismatch: default_type_mismatch_str(),
            initial_capacity: None,
        }
    }
}

impl StoreConfig {
    /// Parse the type mismatch string into a [`MismatchPolicy`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"migrate"` or `"reject"`.
    pub fn mismatch_policy(&self) -> Result<MismatchPolicy> {
        match self.type_mismatch.as_str() {
            "migrate" => Ok(MismatchPolicy::Migrate),
            "reject" => Ok(MismatchPolicy::Reject),
            other => Err(Error::InvalidConfig {
                reason: format!(
                    "Invalid type_mismatch '{}'. Expected \"migrate\" or \"reject\".",
                    other
                ),
            }),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# memkv store configuration
#
# What a typed write (SADD, HSET, ZADD, ...) does when the key holds
# another type:
#   "migrate" = replace it with an empty value of the right type (default)
#   "reject"  = keep the key and report a wrong-type error
type_mismatch = "migrate"

# Number of keys to reserve room for up front (optional).
# initial_capacity = 1024
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content).map_err(|e| Error::InvalidConfig {
            reason: format!("Failed to parse config: {}", e),
        })?;
        config.mismatch_policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig { reason } => Error::InvalidConfig {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Io {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Internal {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Io {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
