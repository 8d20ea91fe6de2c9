use anyhow::{Context, Result};
use console::{Emoji, style};
use std::fs;

use cypherviz::Config;

static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub fn run(force: bool) -> Result<()> {
    println!();
    println!("{}", style(" cypherviz - Initialization ").bold().reverse());
    println!();

    let config_dir = Config::config_dir()?;
    let config_path = config_dir.join("config.toml");

    if config_path.exists() && !force {
        println!(
            "{}Configuration already exists at {}",
            WARN,
            style(config_path.display()).cyan()
        );
        println!("  Use {} to overwrite", style("--force").yellow());
        return Ok(());
    }

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    let config_content = toml::to_string_pretty(&Config::default_template())?;
    fs::write(&config_path, config_content).context("Failed to write config file")?;

    println!(
        "{}Created configuration at {}",
        CHECK,
        style(config_path.display()).cyan()
    );
    println!();
    println!("{}Next steps:", ROCKET);
    println!();
    println!("  Set the Neo4j password:");
    println!("    {} export NEO4J_PASSWORD=...", style("$").dim());
    println!();
    println!("  Draw the graph:");
    println!("    {} cypherviz draw --limit 100", style("$").dim());
    println!();

    Ok(())
}
