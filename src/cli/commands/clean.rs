use anyhow::{Context, Result};
use console::{Emoji, style};
use std::path::PathBuf;

use cypherviz::clean_figures;

use super::load_config;

static BROOM: Emoji<'_, '_> = Emoji("🧹 ", "");

pub fn run(output_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let dir = match output_dir {
        Some(dir) => dir,
        None => load_config(config.as_deref())?
            .map(|c| c.output)
            .unwrap_or_default()
            .dir,
    };

    let removed = clean_figures(&dir)
        .with_context(|| format!("Failed to clean figures in {}", dir.display()))?;

    println!(
        "{}Removed {} figure(s) from {}",
        BROOM,
        style(removed).green().bold(),
        style(dir.display()).cyan()
    );

    Ok(())
}
