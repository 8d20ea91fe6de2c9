pub mod clean;
pub mod draw;
pub mod init;
pub mod query;

use anyhow::{Context, Result};
use std::path::Path;

use cypherviz::Config;

/// Load the explicit config file, or the default one when it exists
pub(crate) fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    if let Some(path) = path {
        return Config::load_from(path).map(Some);
    }

    let default_path = Config::config_path()?;
    if default_path.exists() {
        Config::load()
            .map(Some)
            .context("Failed to load configuration")
    } else {
        Ok(None)
    }
}
