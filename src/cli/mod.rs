pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cypherviz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render Neo4j query results as interactive vis.js network diagrams", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// Query the graph and write an HTML figure
    Draw(DrawArgs),

    /// Print the Cypher the draw command would run
    Query {
        /// Only match nodes carrying one of these labels (repeatable)
        #[arg(short = 'l', long = "label")]
        labels: Vec<String>,

        /// Maximum number of rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Delete figures accumulated in the output directory
    Clean {
        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Configuration file (defaults to ~/.config/cypherviz/config.toml)
        #[arg(short, long, env = "CYPHERVIZ_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Only match nodes carrying one of these labels (repeatable)
    #[arg(short = 'l', long = "label")]
    pub labels: Vec<String>,

    /// Disable the force-directed layout
    #[arg(long, default_value = "false")]
    pub no_physics: bool,

    /// Exclude edges between different layers from the layout
    #[arg(long, default_value = "false")]
    pub relax_gray_relationships: bool,

    /// Maximum number of rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output directory (defaults to the configured one, then ./figure)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/cypherviz/config.toml)
    #[arg(short, long, env = "CYPHERVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Render rows from a JSON file instead of querying Neo4j
    #[arg(long)]
    pub from_json: Option<PathBuf>,
}
