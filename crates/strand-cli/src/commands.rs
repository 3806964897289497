//! Subcommand implementations

use crate::document::TraversalDocument;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use strand_config::StrandConfig;
use tracing::{debug, info};

/// Read a traversal document and return its encoded script.
///
/// Source precedence: `source_override`, then the document's own `source`,
/// then `encoder.traversal_source` from config.
pub fn encode(
    file: Option<&Path>,
    config: &StrandConfig,
    source_override: Option<&str>,
) -> Result<String> {
    let json = read_input(file)?;
    let mut document = TraversalDocument::from_json(&json)?;

    if let Some(source) = source_override {
        debug!("Overriding traversal source with {}", source);
        document.source = Some(source.to_string());
    }

    let script = document.encode(&config.encoder.traversal_source)?;
    info!("Encoded {} steps", document.steps.len());
    Ok(script.into_string())
}

/// Render the effective configuration.
pub fn show_config(config: &StrandConfig) -> Result<String> {
    config
        .to_toml_string()
        .context("Failed to serialize configuration")
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {}", path.display())),
        _ => {
            debug!("Reading document from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            Ok(buf)
        }
    }
}
