//! Configuration management for imgkey

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::params::AliasTable;
use crate::request::{Normalizer, SourceLocation};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Source location as `bucket[/prefix...]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_bucket: Option<String>,

    /// Prefix every object key must start with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_prefix: Option<String>,

    /// Parameter aliases, replacing the built-in table when present
    #[serde(default)]
    pub aliases: AliasTable,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".imgkey").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if path.is_none() && !resolved.exists() {
            log::debug!("No config at {}, using defaults", resolved.display());
            return Ok(Self::default());
        }
        Self::load_from(&resolved)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parsed source location, empty when not configured
    pub fn source(&self) -> SourceLocation {
        self.source_bucket
            .as_deref()
            .map(SourceLocation::parse)
            .unwrap_or_default()
    }

    /// Build the request normalizer described by this config
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(
            self.source(),
            self.required_prefix.clone(),
            self.aliases.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.source_bucket.is_none());
        assert!(config.required_prefix.is_none());
        assert_eq!(config.aliases, AliasTable::default());
        assert_eq!(config.source(), SourceLocation::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "source_bucket: media/originals/2024\nrequired_prefix: uploads\naliases:\n  w: width\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.source().bucket, "media");
        assert_eq!(config.source().prefix, "originals/2024");
        assert_eq!(config.required_prefix.as_deref(), Some("uploads"));
        assert_eq!(config.aliases.len(), 1);
        assert_eq!(config.normalizer().required_prefix(), Some("uploads"));
    }

    #[test]
    fn test_parse_rejects_chained_aliases() {
        let yaml = "aliases:\n  w: wd\n  wd: width\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_serialize_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");

        let config = Config {
            source_bucket: Some("media/originals".to_string()),
            required_prefix: None,
            aliases: AliasTable::new([("sz", "size")]).unwrap(),
        };
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.yaml");

        let err = Config::load_at(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "aliases: [not, a, map").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::ParseError(_))
        ));
    }
}
