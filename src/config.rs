use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub neo4j: Neo4jConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
}

/// Where figures are written and how they are framed when embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Location of the vis.js `dist` directory, relative to the written file
    #[serde(default = "default_assets")]
    pub assets: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("figure")
}

fn default_width() -> String {
    "100%".to_string()
}

fn default_height() -> u32 {
    400
}

fn default_assets() -> String {
    "../lib/vis/dist".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            width: default_width(),
            height: default_height(),
            assets: default_assets(),
        }
    }
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "${NEO4J_PASSWORD}".to_string(),
            database: Some("neo4j".to_string()),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("cypherviz");
        Ok(config_dir)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Configuration file not found at {}. Run 'cypherviz init' first.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file at {}", config_path.display()))
    }

    /// Parse configuration text, expanding environment references
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.neo4j.password = expand_env_var(&config.neo4j.password);
        Ok(config)
    }

    /// Configuration written by `cypherviz init`
    pub fn default_template() -> Self {
        Self {
            neo4j: Neo4jConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Expand environment variable references like ${VAR_NAME}
fn expand_env_var(value: &str) -> String {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).unwrap_or_default()
    } else if let Some(var_name) = value.strip_prefix('$') {
        std::env::var(var_name).unwrap_or_default()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_var_braces() {
        // SAFETY: test is single-threaded
        unsafe { std::env::set_var("CYPHERVIZ_TEST_VAR_A", "value_a") };
        assert_eq!(expand_env_var("${CYPHERVIZ_TEST_VAR_A}"), "value_a");
        unsafe { std::env::remove_var("CYPHERVIZ_TEST_VAR_A") };
    }

    #[test]
    fn test_expand_env_var_dollar() {
        unsafe { std::env::set_var("CYPHERVIZ_TEST_VAR_B", "value_b") };
        assert_eq!(expand_env_var("$CYPHERVIZ_TEST_VAR_B"), "value_b");
        unsafe { std::env::remove_var("CYPHERVIZ_TEST_VAR_B") };
    }

    #[test]
    fn test_expand_env_var_literal() {
        assert_eq!(expand_env_var("literal_value"), "literal_value");
    }

    #[test]
    fn test_expand_env_var_missing_returns_empty() {
        assert_eq!(expand_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), "");
    }

    #[test]
    fn test_config_output_defaults() {
        let config = Config::parse(
            r#"
            [neo4j]
            uri = "bolt://localhost:7687"
            user = "neo4j"
            password = "test"
        "#,
        )
        .unwrap();
        assert_eq!(config.output.dir, PathBuf::from("figure"));
        assert_eq!(config.output.width, "100%");
        assert_eq!(config.output.height, 400);
        assert_eq!(config.output.assets, "../lib/vis/dist");
        assert!(config.neo4j.database.is_none());
    }

    #[test]
    fn test_config_output_overrides() {
        let config = Config::parse(
            r#"
            [neo4j]
            uri = "bolt://db:7687"
            user = "reader"
            password = "pw"
            database = "models"

            [output]
            dir = "out/graphs"
            height = 600
        "#,
        )
        .unwrap();
        assert_eq!(config.neo4j.database.as_deref(), Some("models"));
        assert_eq!(config.output.dir, PathBuf::from("out/graphs"));
        assert_eq!(config.output.height, 600);
        assert_eq!(config.output.width, "100%");
    }

    #[test]
    fn test_config_requires_neo4j_section() {
        assert!(Config::parse("[output]\ndir = \"x\"\n").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("cypherviz init"));
    }

    #[test]
    fn test_template_roundtrip_toml() {
        let serialized = toml::to_string_pretty(&Config::default_template()).unwrap();
        let back: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(back.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(back.neo4j.password, "${NEO4J_PASSWORD}");
        assert_eq!(back.output.height, 400);
    }
}
