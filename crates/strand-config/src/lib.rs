//! # Strand Configuration Library
//!
//! Settings consumed by the traversal builder and script encoder:
//!
//! - `namespace.namespace_property_key` / `namespace.namespace_value` for the
//!   namespace helpers
//! - `encoder.traversal_source` for the identifier scripts start from
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use strand_config::StrandConfig;
//! use std::path::Path;
//!
//! let config = StrandConfig::load(Some(Path::new("strand.toml")))?;
//! println!("namespace key: {}", config.namespace.namespace_property_key);
//! # Ok::<(), strand_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod components;
mod error;
mod loader;

pub use components::*;
pub use error::*;
pub use loader::*;
