mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Only show warnings by default, use RUST_LOG=info for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cli::commands::init::run(force)?;
        }
        Commands::Draw(args) => {
            cli::commands::draw::run(args).await?;
        }
        Commands::Query { labels, limit } => {
            cli::commands::query::run(&labels, limit);
        }
        Commands::Clean { output_dir, config } => {
            cli::commands::clean::run(output_dir, config)?;
        }
    }

    Ok(())
}
