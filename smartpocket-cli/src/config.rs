use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// Parsed transactions below this confidence are never committed
    pub min_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub currency_symbol: String,
    /// Rows shown under "Recent" in `summary`
    pub recent_limit: usize,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self { min_confidence: 0.7 }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            recent_limit: 5,
        }
    }
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

pub fn load_config(home: &Path) -> Result<Config> {
    let p = config_path(home);
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(home: &Path, cfg: &Config) -> Result<()> {
    let p = config_path(home);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write the default config unless one exists. Returns the path and
/// whether it was newly written.
pub fn init_config(home: &Path) -> Result<(PathBuf, bool)> {
    let p = config_path(home);
    if p.exists() {
        return Ok((p, false));
    }
    save_config(home, &Config::default())?;
    Ok((p, true))
}
