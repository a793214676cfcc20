//! Infrastructure implementation of the `ConfigSource` port.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::application::ports::ConfigSource;
use crate::domain::error::ConfigError;

/// Production implementation of `ConfigSource` that reads YAML files on disk.
pub struct YamlConfigSource;

impl ConfigSource for YamlConfigSource {
    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        parse(&content, path)
    }
}

/// Parse `content` as a YAML document of type `T`.
///
/// A document that is blank or only comments is reported as empty rather
/// than as a schema error.
///
/// # Errors
///
/// Returns [`ConfigError::Empty`] or [`ConfigError::Invalid`].
pub fn parse<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    let invalid = |e: serde_yaml::Error| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(invalid)?;
    if value.is_null() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }
    serde_yaml::from_str(content).map_err(invalid)
}
