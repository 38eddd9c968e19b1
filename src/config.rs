use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "tempora.toml";

/// Top-level Tempora configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemporaConfig {
    /// Calendar settings.
    #[serde(default)]
    pub chronology: ChronologyToml,

    /// Rounding settings.
    #[serde(default)]
    pub rounding: RoundingToml,
}

impl TemporaConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] when
    /// no path is given and that file exists. With neither, all defaults
    /// apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !fallback.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: TemporaConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronologyToml {
    #[serde(default)]
    pub offset_minutes: i32,
    /// First Gregorian day as `YYYY-MM-DD`, or `"gregorian"` / `"julian"`
    /// for a proleptic calendar.
    #[serde(default = "default_gregorian_cutover")]
    pub gregorian_cutover: String,
}

impl Default for ChronologyToml {
    fn default() -> Self {
        Self {
            offset_minutes: 0,
            gregorian_cutover: default_gregorian_cutover(),
        }
    }
}

fn default_gregorian_cutover() -> String {
    "1582-10-15".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundingToml {
    #[serde(default = "default_rounding_mode")]
    pub mode: String,
}

impl Default for RoundingToml {
    fn default() -> Self {
        Self {
            mode: default_rounding_mode(),
        }
    }
}

fn default_rounding_mode() -> String {
    "half-up".to_string()
}
