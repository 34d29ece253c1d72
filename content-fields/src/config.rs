//! Serializer configuration using Figment
//!
//! Sources are layered in precedence order: built-in defaults, then an
//! optional configuration file (TOML, YAML or JSON, picked by extension),
//! then `CONTENT_FIELDS_*` environment variables.
//!
//! ```yaml
//! date_format: "%d.%m.%Y"
//! disabled:
//!   - video
//!   - audio
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SerializerError};
use crate::kind::FieldKind;
use crate::serializers::{validate_date_format, DEFAULT_DATE_FORMAT};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "CONTENT_FIELDS_";

/// Settings used to build a [`SerializerManager`](crate::SerializerManager).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerializerConfig {
    /// strftime pattern for persisted dates.
    pub date_format: String,
    /// Built-in kinds, by name, that get no serializer.
    pub disabled: Vec<String>,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            disabled: Vec::new(),
        }
    }
}

impl SerializerConfig {
    /// Load from defaults, the file at `path`, and the environment.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, has an unknown extension, does not
    /// parse, or yields an invalid date format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SerializerError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let file = match extension.as_deref() {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => {
                return Err(SerializerError::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!(?path, "loading serializer configuration");
        Self::from_figment(Self::defaults().merge(file).merge(Self::env()))
    }

    /// Load from defaults and the environment only.
    pub fn from_env() -> Result<Self> {
        Self::from_figment(Self::defaults().merge(Self::env()))
    }

    /// Extract and validate a configuration from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the date format.
    pub fn validate(&self) -> Result<()> {
        validate_date_format(&self.date_format)
    }

    /// The disabled kind names resolved to kinds. Unknown names are skipped.
    pub fn disabled_kinds(&self) -> Vec<FieldKind> {
        self.disabled
            .iter()
            .filter_map(|name| {
                let kind = FieldKind::from_name(name);
                if kind.is_none() {
                    warn!(%name, "ignoring unknown field kind in disabled list");
                }
                kind
            })
            .collect()
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(Self::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = SerializerConfig::default();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert!(config.disabled.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.yaml");
        fs::write(&path, "date_format: \"%d.%m.%Y\"\ndisabled:\n  - video\n").unwrap();

        let config = SerializerConfig::load(&path).unwrap();
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.disabled_kinds(), vec![FieldKind::Video]);
    }

    #[test]
    #[serial]
    fn load_toml_keeps_unset_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.toml");
        fs::write(&path, "disabled = [\"page\", \"post\"]\n").unwrap();

        let config = SerializerConfig::load(&path).unwrap();
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(
            config.disabled_kinds(),
            vec![FieldKind::Page, FieldKind::Post]
        );
    }

    #[test]
    #[serial]
    fn load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.json");
        let json = serde_json::json!({ "date_format": "%Y/%m/%d" });
        fs::write(&path, json.to_string()).unwrap();

        let config = SerializerConfig::load(&path).unwrap();
        assert_eq!(config.date_format, "%Y/%m/%d");
    }

    #[test]
    fn missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = SerializerConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, SerializerError::ConfigNotFound { .. }));
    }

    #[test]
    fn unknown_extension_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.ini");
        fs::write(&path, "date_format=%Y").unwrap();
        let err = SerializerConfig::load(&path).unwrap_err();
        assert!(matches!(err, SerializerError::UnsupportedConfigFormat { .. }));
    }

    #[test]
    #[serial]
    fn invalid_date_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.yaml");
        fs::write(&path, "date_format: \"%Y-%Q\"\n").unwrap();
        let err = SerializerConfig::load(&path).unwrap_err();
        assert!(matches!(err, SerializerError::InvalidDateFormat { .. }));
    }

    #[test]
    #[serial]
    fn malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.yaml");
        fs::write(&path, "disabled: 42\n").unwrap();
        let err = SerializerConfig::load(&path).unwrap_err();
        assert!(matches!(err, SerializerError::Config { .. }));
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.yaml");
        fs::write(&path, "date_format: \"%d.%m.%Y\"\n").unwrap();

        std::env::set_var("CONTENT_FIELDS_DATE_FORMAT", "%m-%d-%Y");
        let result = SerializerConfig::load(&path);
        std::env::remove_var("CONTENT_FIELDS_DATE_FORMAT");

        assert_eq!(result.unwrap().date_format, "%m-%d-%Y");
    }

    #[test]
    #[serial]
    fn invalid_date_format_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.toml");
        fs::write(&path, "date_format = \"%d.%m.%y\"\n").unwrap();
        let err = SerializerConfig::load(&path).unwrap_err();
        assert!(matches!(err, SerializerError::InvalidDateFormat { .. }));
    }

    #[test]
    #[serial]
    fn from_env_without_variables_is_default() {
        std::env::remove_var("CONTENT_FIELDS_DATE_FORMAT");
        std::env::remove_var("CONTENT_FIELDS_DISABLED");
        assert_eq!(SerializerConfig::from_env().unwrap(), SerializerConfig::default());
    }

    #[test]
    #[serial]
    fn from_env_reads_date_format_and_disabled() {
        std::env::set_var("CONTENT_FIELDS_DATE_FORMAT", "%d/%m/%Y");
        std::env::set_var("CONTENT_FIELDS_DISABLED", "[video, audio]");
        let result = SerializerConfig::from_env();
        std::env::remove_var("CONTENT_FIELDS_DATE_FORMAT");
        std::env::remove_var("CONTENT_FIELDS_DISABLED");

        let config = result.unwrap();
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(
            config.disabled_kinds(),
            vec![FieldKind::Video, FieldKind::Audio]
        );
    }

    #[test]
    #[serial]
    fn from_env_rejects_lossy_date_format() {
        std::env::set_var("CONTENT_FIELDS_DATE_FORMAT", "%Y-%m");
        let result = SerializerConfig::from_env();
        std::env::remove_var("CONTENT_FIELDS_DATE_FORMAT");

        assert!(matches!(
            result,
            Err(SerializerError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    #[serial]
    fn environment_disabled_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fields.yaml");
        fs::write(&path, "disabled:\n  - page\n").unwrap();

        std::env::set_var("CONTENT_FIELDS_DISABLED", "[post]");
        let result = SerializerConfig::load(&path);
        std::env::remove_var("CONTENT_FIELDS_DISABLED");

        assert_eq!(result.unwrap().disabled_kinds(), vec![FieldKind::Post]);
    }

    #[test]
    fn unknown_disabled_names_are_skipped() {
        let config = SerializerConfig {
            disabled: vec!["gallery".into(), "Image".into()],
            ..SerializerConfig::default()
        };
        assert_eq!(config.disabled_kinds(), vec![FieldKind::Image]);
    }
}
