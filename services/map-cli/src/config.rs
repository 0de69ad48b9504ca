//! Configuration loader for map-cli.
//!
//! Loads an optional YAML file holding dataset location, logging and
//! display defaults. Command-line flags override anything set here.
//!
//! Supports environment variable substitution using ${VAR} and
//! ${VAR:-default} syntax outside of comments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use renderer::{HeatmapParams, MapOptions};

use crate::source::FieldNames;

// ============================================================================
// Configuration Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
    pub request: RequestDefaults,
    pub map: MapOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
    pub fields: FieldNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModeName {
    #[default]
    Markers,
    Heatmap,
}

/// Request parameters used when the command line does not give them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub sample_size: usize,
    pub seed: u64,
    pub mode: ModeName,
    pub heatmap: HeatmapParams,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            sample_size: 5000,
            seed: 42,
            mode: ModeName::Markers,
            heatmap: HeatmapParams::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// Requested file was missing
    Missing(PathBuf),
    Defaults,
}

// ============================================================================
// Loading Functions
// ============================================================================

/// Load configuration from `path`, falling back to defaults when no path is
/// given or the file does not exist.
pub fn load_config(path: Option<&Path>) -> Result<(AppConfig, ConfigOrigin)> {
    let path = match path {
        Some(p) => p,
        None => return Ok((AppConfig::default(), ConfigOrigin::Defaults)),
    };

    if !path.exists() {
        return Ok((AppConfig::default(), ConfigOrigin::Missing(path.to_path_buf())));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config from {:?}", path))?;

    Ok((config, ConfigOrigin::File(path.to_path_buf())))
}

/// Parse YAML content with environment variable substitution.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let expanded = expand_env_vars(content)?;
    let config: AppConfig = serde_yaml::from_str(&expanded).context("Invalid config YAML")?;
    config
        .map
        .palette
        .validate()
        .context("Invalid palette in config")?;
    Ok(config)
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand ${VAR} and ${VAR:-default} in YAML content. Comments are copied
/// through untouched.
fn expand_env_vars(content: &str) -> Result<String> {
    let lines = content
        .lines()
        .map(expand_line)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

fn expand_line(line: &str) -> Result<String> {
    let (body, comment) = split_comment(line);
    let expanded = shellexpand::env_with_context(body, lookup_var)
        .with_context(|| format!("Failed to expand variables in: {}", body.trim()))?;

    // Unset variables without a default are left in place by the expander
    if let Some(start) = expanded.find("${") {
        let rest = &expanded[start + 2..];
        if !rest.contains('}') {
            anyhow::bail!("Unclosed variable substitution: ${{{}", rest);
        }
        let name = rest.split(&['}', ':'][..]).next().unwrap_or(rest);
        anyhow::bail!("Environment variable {} not set", name);
    }

    Ok(format!("{}{}", expanded, comment))
}

/// Unset and empty variables both fall back to the default.
fn lookup_var(name: &str) -> std::result::Result<Option<String>, std::env::VarError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => Ok(Some(val)),
        Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Split a YAML line at the first `#` that starts a comment: outside quotes
/// and at the line start or after whitespace.
fn split_comment(line: &str) -> (&str, &str) {
    let mut quote: Option<char> = None;
    let mut prev = ' ';
    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '#' && prev.is_whitespace() => return line.split_at(i),
            None => {}
        }
        prev = c;
    }
    (line, "")
}
