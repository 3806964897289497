//! Namespace component configuration
//!
//! Names the vertex property that scopes data to a namespace, and the
//! namespace written and matched by default.

use serde::{Deserialize, Serialize};

/// Property key used when no configuration overrides it
pub const DEFAULT_NAMESPACE_PROPERTY_KEY: &str = "namespace";

/// Namespace value used when no configuration overrides it
pub const DEFAULT_NAMESPACE_VALUE: &str = "default";

/// Namespace component configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Property key holding the namespace on each element
    pub namespace_property_key: String,
    /// Namespace applied by the namespace helpers
    pub namespace_value: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            namespace_property_key: DEFAULT_NAMESPACE_PROPERTY_KEY.to_string(),
            namespace_value: DEFAULT_NAMESPACE_VALUE.to_string(),
        }
    }
}

impl NamespaceConfig {
    /// Create config with explicit key and value
    pub fn new(property_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace_property_key: property_key.into(),
            namespace_value: value.into(),
        }
    }

    /// Same property key, different namespace
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            namespace_property_key: self.namespace_property_key.clone(),
            namespace_value: value.into(),
        }
    }
}
