use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dd_dimension::{HalfYearDayRule, DEFAULT_END, DEFAULT_START};
use dd_time::DateKey;
use serde::Deserialize;

/// Top-level datedim configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatedimConfig {
    /// Date dimension settings.
    #[serde(default)]
    pub dates: DatesConfig,

    /// Time dimension settings.
    #[serde(default)]
    pub times: TimesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatesConfig {
    #[serde(default = "default_start")]
    pub start: DateKey,
    #[serde(default = "default_end")]
    pub end: DateKey,
    #[serde(default = "default_dates_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub half_year_day: HalfYearDayRule,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            output: default_dates_output(),
            half_year_day: HalfYearDayRule::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimesConfig {
    #[serde(default = "default_times_output")]
    pub output: PathBuf,
    #[serde(default = "default_step_seconds")]
    pub step_seconds: u32,
}

impl Default for TimesConfig {
    fn default() -> Self {
        Self {
            output: default_times_output(),
            step_seconds: default_step_seconds(),
        }
    }
}

fn default_start() -> DateKey {
    DateKey::new(DEFAULT_START).expect("default start key is a valid date")
}
fn default_end() -> DateKey {
    DateKey::new(DEFAULT_END).expect("default end key is a valid date")
}
fn default_dates_output() -> PathBuf {
    PathBuf::from("dates.csv")
}
fn default_times_output() -> PathBuf {
    PathBuf::from("times.csv")
}
fn default_step_seconds() -> u32 {
    1
}

impl DatedimConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid datedim configuration")
    }

    /// Load the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
