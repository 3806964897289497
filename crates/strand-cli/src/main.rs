use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use strand_cli::{
    cli::{Cli, Commands},
    commands,
};
use strand_config::StrandConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the script
    let env_filter = EnvFilter::builder()
        .with_default_directive(cli.level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = StrandConfig::load(cli.config.as_deref())?;
    debug!("Effective config: {:?}", config);

    let output = match &cli.command {
        Commands::Encode { file } => {
            commands::encode(file.as_deref(), &config, cli.source.as_deref())?
        }
        Commands::Config => {
            let mut config = config;
            if let Some(source) = &cli.source {
                config.encoder.traversal_source = source.clone();
                config.encoder.validate()?;
            }
            commands::show_config(&config)?
        }
    };

    println!("{}", output);
    Ok(())
}
