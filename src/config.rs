//! Configuration loading.
//!
//! Precedence: environment variables > config file > compiled defaults.
//! A missing config file is not an error; every field has a default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::normalizer::{MAX_FOLLOW_UP_LEN, MAX_INPUT_LEN};
use crate::session::DEFAULT_SESSION_TIMEOUT_SECS;
use crate::types::{KnownCategory, KnownCourse};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "QUICKADD_CONFIG_PATH";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser tuning.
    pub parser: ParserSettings,
    /// Robustness harness settings.
    pub robustness: RobustnessSettings,
    /// Categories the CLI passes to every parse.
    pub categories: Vec<KnownCategory>,
    /// Courses the CLI passes to every parse.
    pub courses: Vec<KnownCourse>,
}

/// Parser tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Seconds before an idle conversation expires.
    pub session_timeout_secs: u64,
    /// Character cap for first-turn input.
    pub max_input_len: usize,
    /// Character cap for follow-up input.
    pub max_follow_up_len: usize,
    /// Reminder offset used when the user just says "yes".
    pub default_reminder_minutes: u32,
    /// Hour assigned to an event date given without a clock time.
    pub default_event_hour: u32,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            session_timeout_secs: DEFAULT_SESSION_TIMEOUT_SECS,
            max_input_len: MAX_INPUT_LEN,
            max_follow_up_len: MAX_FOLLOW_UP_LEN,
            default_reminder_minutes: 15,
            default_event_hour: 9,
        }
    }
}

/// Robustness harness settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobustnessSettings {
    /// RNG seed, so runs are reproducible.
    pub seed: u64,
    /// Number of character-substitution variants.
    pub substitutions: usize,
}

impl Default for RobustnessSettings {
    fn default() -> Self {
        Self {
            seed: 7,
            substitutions: 3,
        }
    }
}

impl Config {
    /// Load from the resolved path with env overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if no path can be resolved.
    pub fn load() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok())?;
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).context("invalid config TOML")?;
        Ok(config)
    }

    /// Resolve the config path: `$QUICKADD_CONFIG_PATH`, else `~/.quickadd/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn config_path_with(env: impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
        if let Some(path) = env(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(config_dir()?.join("config.toml"))
    }

    /// Apply environment overrides. Invalid values are logged and ignored.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("QUICKADD_SESSION_TIMEOUT_SECS") {
            match v.parse() {
                Ok(n) => self.parser.session_timeout_secs = n,
                Err(_) => tracing::warn!(
                    var = "QUICKADD_SESSION_TIMEOUT_SECS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("QUICKADD_MAX_INPUT_LEN") {
            match v.parse() {
                Ok(n) => self.parser.max_input_len = n,
                Err(_) => tracing::warn!(
                    var = "QUICKADD_MAX_INPUT_LEN",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
    }
}

/// Resolve the default config directory (`~/.quickadd/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".quickadd"))
}
