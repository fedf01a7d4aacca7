use std::fs;
use std::path::PathBuf;

use crate::app::shared_config::SharedConfig;

const CONFIG_FILE_NAME: &str = "console.toml";

#[derive(Debug, Clone)]
pub enum ConfigError {
    ReadError(String),
    InvalidFormat(String),
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Loads the opaque shared configuration the rendering layer consults.
pub struct TomlConfigSource {
    config_dir: PathBuf,
}

impl TomlConfigSource {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// A missing file is not an error: embeddings without a console.toml
    /// get an empty pass-through config.
    pub fn load(&self) -> Result<SharedConfig, ConfigError> {
        let path = self.config_file_path();

        if !path.exists() {
            return Ok(SharedConfig::empty());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let values: toml::Table =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        Ok(SharedConfig::new(values))
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| ConfigError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("dbmodal"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let source = TomlConfigSource::with_config_dir(temp_dir.path().to_path_buf());

        let config = source.load().unwrap();

        assert!(config.is_empty());
    }

    #[test]
    fn values_are_passed_through() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "allow_file_upload = true\nmax_rows = 1000\n").unwrap();
        let source = TomlConfigSource::with_config_dir(temp_dir.path().to_path_buf());

        let config = source.load().unwrap();

        assert_eq!(
            config.get("allow_file_upload").and_then(toml::Value::as_bool),
            Some(true)
        );
        assert_eq!(
            config.get("max_rows").and_then(toml::Value::as_integer),
            Some(1000)
        );
    }

    #[test]
    fn invalid_toml_is_an_invalid_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not = = toml").unwrap();
        let source = TomlConfigSource::with_config_dir(temp_dir.path().to_path_buf());

        let err = source.load().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidFormat(_)));
    }
}
