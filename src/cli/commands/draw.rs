use anyhow::{Context, Result};
use console::{Emoji, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use cypherviz::{DrawOptions, GraphSource, MemorySource, Neo4jClient, draw};

use super::load_config;
use crate::cli::DrawArgs;

static GRAPH: Emoji<'_, '_> = Emoji("🔗 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

pub async fn run(args: DrawArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut output = config
        .as_ref()
        .map(|c| c.output.clone())
        .unwrap_or_default();
    if let Some(dir) = args.output_dir {
        output.dir = dir;
    }

    let options = DrawOptions {
        labels: args.labels,
        physics: !args.no_physics,
        relax_cross_layer: args.relax_gray_relationships,
        limit: args.limit,
        output,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{}{{spinner:.green}} {{msg}}", GRAPH))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let source: Box<dyn GraphSource> = match &args.from_json {
        Some(path) => {
            spinner.set_message(format!("Reading rows from {}...", path.display()));
            Box::new(
                MemorySource::from_json_file(path)
                    .with_context(|| format!("Failed to read rows from {}", path.display()))?,
            )
        }
        None => {
            spinner.set_message("Querying Neo4j...");
            let config = config.context(
                "No configuration found. Run 'cypherviz init' or pass --config.",
            )?;
            Box::new(Neo4jClient::new(&config.neo4j).await?)
        }
    };

    let figure = draw(source.as_ref(), &options)
        .await
        .context("Failed to draw graph")?;

    spinner.finish_and_clear();
    println!(
        "{}Wrote {}",
        CHECK,
        style(figure.path.display()).cyan().underlined()
    );
    println!("{}Embed with:", SPARKLE);
    println!("  {}", figure.iframe());

    Ok(())
}
