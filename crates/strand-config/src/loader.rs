//! Configuration loading and layering
//!
//! Settings resolve in order, later layers winning:
//! 1. Built-in defaults
//! 2. TOML config file (`[namespace]` and `[encoder]` tables)
//! 3. Environment variables (`STRAND_*`)
//!
//! Callers that need explicit overrides (CLI flags, tests) apply them to the
//! returned [`StrandConfig`] directly.

use crate::components::{EncoderConfig, NamespaceConfig};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Overrides `namespace.namespace_property_key`
pub const ENV_NAMESPACE_PROPERTY_KEY: &str = "STRAND_NAMESPACE_PROPERTY_KEY";
/// Overrides `namespace.namespace_value`
pub const ENV_NAMESPACE_VALUE: &str = "STRAND_NAMESPACE_VALUE";
/// Overrides `encoder.traversal_source`
pub const ENV_TRAVERSAL_SOURCE: &str = "STRAND_TRAVERSAL_SOURCE";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrandConfig {
    /// Namespace helper settings
    pub namespace: NamespaceConfig,
    /// Script encoder settings
    pub encoder: EncoderConfig,
}

impl StrandConfig {
    /// Parse configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config file {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Resolve defaults, optional file and process environment, then validate.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `STRAND_*` variables from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored with a warning so an unset-but-exported
    /// variable does not blank out a setting.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets: [(&str, &mut String); 3] = [
            (
                ENV_NAMESPACE_PROPERTY_KEY,
                &mut self.namespace.namespace_property_key,
            ),
            (ENV_NAMESPACE_VALUE, &mut self.namespace.namespace_value),
            (ENV_TRAVERSAL_SOURCE, &mut self.encoder.traversal_source),
        ];

        for (name, slot) in targets {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => {
                    warn!("Ignoring empty environment override {}", name);
                }
                Some(value) => {
                    debug!("Applying environment override {}", name);
                    *slot = value;
                }
                None => {}
            }
        }

        self
    }

    /// Reject settings the encoder cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.namespace.namespace_property_key.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "namespace.namespace_property_key",
                "must not be empty",
            ));
        }
        if self.namespace.namespace_value.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "namespace.namespace_value",
                "must not be empty",
            ));
        }

        self.encoder.validate()
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = StrandConfig::from_toml_str("").unwrap();
        assert_eq!(config, StrandConfig::default());
    }

    #[test]
    fn test_toml_sections() {
        let config = StrandConfig::from_toml_str(
            r#"
[namespace]
namespace_property_key = "tenant"
namespace_value = "acme"

[encoder]
traversal_source = "social"
"#,
        )
        .unwrap();

        assert_eq!(config.namespace.namespace_property_key, "tenant");
        assert_eq!(config.namespace.namespace_value, "acme");
        assert_eq!(config.encoder.traversal_source, "social");
    }

    #[test]
    fn test_invalid_toml() {
        let result = StrandConfig::from_toml_str("[namespace\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_overrides_replace_values() {
        let config = StrandConfig::default().with_overrides_from(lookup(&[
            (ENV_NAMESPACE_VALUE, "acme"),
            (ENV_TRAVERSAL_SOURCE, "g2"),
        ]));

        assert_eq!(config.namespace.namespace_property_key, "namespace");
        assert_eq!(config.namespace.namespace_value, "acme");
        assert_eq!(config.encoder.traversal_source, "g2");
    }

    #[test]
    fn test_empty_override_ignored() {
        let config = StrandConfig::default()
            .with_overrides_from(lookup(&[(ENV_NAMESPACE_PROPERTY_KEY, "  ")]));
        assert_eq!(config.namespace.namespace_property_key, "namespace");
    }

    #[test]
    fn test_validate_rejects_bad_source() {
        let mut config = StrandConfig::default();
        config.encoder.traversal_source = "g.V()".to_string();

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "encoder.traversal_source"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_namespace() {
        let mut config = StrandConfig::default();
        config.namespace.namespace_value.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_output_parses_back() {
        let mut config = StrandConfig::default();
        config.namespace.namespace_value = "acme".to_string();

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[namespace]"));
        assert_eq!(StrandConfig::from_toml_str(&text).unwrap(), config);
    }
}
