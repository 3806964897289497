//! Error types for traversal encoding.

use thiserror::Error;

/// Errors raised while rendering a traversal to script text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The anonymous marker `__` was found after the first step.
    #[error("anonymous marker '__' must be the first step, found at position {position}")]
    MisplacedAnonymousMarker {
        /// Zero-based index of the offending step
        position: usize,
    },

    /// A nested traversal argument failed to encode.
    #[error("nested traversal in argument {argument} of step '{step}': {source}")]
    Nested {
        /// Name of the step holding the nested traversal
        step: String,
        /// Zero-based argument index within that step
        argument: usize,
        /// Underlying failure
        #[source]
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    /// Create a misplaced-marker error
    pub fn misplaced_marker(position: usize) -> Self {
        Self::MisplacedAnonymousMarker { position }
    }

    /// Wrap a failure from a nested traversal argument
    pub fn nested(step: impl Into<String>, argument: usize, source: EncodeError) -> Self {
        Self::Nested {
            step: step.into(),
            argument,
            source: Box::new(source),
        }
    }

    /// The innermost error, following nested wrappers
    pub fn root_cause(&self) -> &EncodeError {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;
