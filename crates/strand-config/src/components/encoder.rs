//! Encoder component configuration

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Traversal source used when no configuration overrides it
pub const DEFAULT_TRAVERSAL_SOURCE: &str = "g";

/// Encoder component configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Identifier that top-level scripts start from (`g.V()...`)
    pub traversal_source: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            traversal_source: DEFAULT_TRAVERSAL_SOURCE.to_string(),
        }
    }
}

impl EncoderConfig {
    /// Reject a traversal source the encoder cannot seed scripts with.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_traversal_source(&self.traversal_source)
    }
}

/// Check that `source` is a plain identifier (`g`, `social`, `g_2`).
///
/// The source is spliced into the script verbatim, so anything else would
/// either drop the seed or inject extra script text.
pub fn validate_traversal_source(source: &str) -> ConfigResult<()> {
    let is_identifier = source
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && source.chars().all(|c| c.is_alphanumeric() || c == '_');

    if is_identifier {
        Ok(())
    } else {
        Err(ConfigError::invalid_value(
            "encoder.traversal_source",
            format!("'{}' is not an identifier", source),
        ))
    }
}
