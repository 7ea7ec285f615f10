//! CLI configuration stored in `jugs.toml`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::path::TieBreak;
use crate::render::Language;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "jugs.toml";

/// Output format for `jugs solve`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{other}' (expected text or json)")),
        }
    }
}

/// Jugs configuration (TOML).
///
/// Missing fields default to the values below; command-line flags override
/// whatever the file says.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JugsConfig {
    /// Language for operation labels and reports.
    pub language: Language,

    /// Which goal state to target when several are equally close.
    pub tie_break: TieBreak,

    /// Largest jug capacity the CLI accepts.
    pub max_capacity: u32,

    /// Default output format for `jugs solve`.
    pub format: OutputFormat,
}

impl Default for JugsConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            tie_break: TieBreak::default(),
            max_capacity: 20,
            format: OutputFormat::default(),
        }
    }
}

impl JugsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_capacity == 0 {
            return Err(anyhow!("max_capacity must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `JugsConfig::default()`.
pub fn load_config(path: &Path) -> Result<JugsConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = JugsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: JugsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &JugsConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
