//! Configuration file support

use crate::OutputFormat;
use anyhow::{anyhow, Context, Result};
use compstrat::Algorithm;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Algorithm used by `compress` when `--algorithm` is absent
    pub default_algorithm: String,

    /// Default output format
    pub default_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Gzip.name().to_string(),
            default_output: "text".to_string(),
        }
    }
}

impl Config {
    pub fn default_algorithm(&self) -> Result<Algorithm> {
        self.default_algorithm
            .parse()
            .with_context(|| format!("Invalid default_algorithm in config: {}", self.default_algorithm))
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.default_output.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Invalid default_output in config: {}", other)),
        }
    }
}

fn default_locations() -> Vec<PathBuf> {
    match dirs::home_dir() {
        Some(home) => vec![
            home.join(".compstrat").join("config.toml"),
            home.join(".config").join("compstrat").join("config.toml"),
        ],
        None => Vec::new(),
    }
}

/// Load configuration from file or defaults
///
/// An explicit path must exist. Without one, the first file found in the
/// default locations is used, falling back to built-in defaults.
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.clone(),
        None => match default_locations().into_iter().find(|p| p.exists()) {
            Some(found) => found,
            None => return Ok(Config::default()),
        },
    };

    log::debug!("Loading configuration from {}", config_path.display());
    parse_config(&config_path)
}

fn parse_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_algorithm().unwrap(), Algorithm::Gzip);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("default_algorithm = \"brotli\"").unwrap();
        assert_eq!(config.default_algorithm().unwrap(), Algorithm::Brotli);
        assert_eq!(config.default_output, "text");
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_algorithm().unwrap(), Algorithm::Gzip);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_numeric_algorithm() {
        let config: Config = toml::from_str("default_algorithm = \"6\"").unwrap();
        assert_eq!(config.default_algorithm().unwrap(), Algorithm::Lzp3);
    }

    #[test]
    fn test_invalid_values() {
        let config: Config =
            toml::from_str("default_algorithm = \"lzma\"\ndefault_output = \"csv\"").unwrap();
        assert!(config.default_algorithm().is_err());
        assert!(config.output_format().is_err());
    }
}
