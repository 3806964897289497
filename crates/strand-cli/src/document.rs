//! JSON traversal documents
//!
//! ```json
//! {
//!   "source": "g",
//!   "steps": [
//!     {"name": "V", "args": [{"type": "number", "value": 1}]},
//!     {"name": "out", "args": [{"type": "text", "value": "knows"}]}
//!   ]
//! }
//! ```
//!
//! `source` is optional; `args` may be omitted for steps without arguments.
//! Nested traversals use `{"type": "traversal", "value": [<steps>]}`.

use serde::{Deserialize, Serialize};
use strand_config::{validate_traversal_source, ConfigError};
use strand_core::{EncodeError, Script, ScriptEncoder, Traversal};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid traversal document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("traversal cannot be encoded: {0}")]
    Encode(#[from] EncodeError),

    #[error("invalid traversal source: {0}")]
    Source(#[from] ConfigError),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalDocument {
    /// Traversal source named by the document itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub steps: Traversal,
}

impl TraversalDocument {
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode with `fallback_source` unless the document names its own.
    pub fn encode(&self, fallback_source: &str) -> DocumentResult<Script> {
        let source = self.source.as_deref().unwrap_or(fallback_source);
        validate_traversal_source(source)?;
        Ok(ScriptEncoder::with_source(source).encode(&self.steps)?)
    }
}
