use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::error::ResultExt;

/// Fallback settle delay before a deferred scroll/focus runs, used when
/// the rendering shell never reports render completion for the newly
/// activated section. Empirically tuned in the original portal; treat it
/// as an upper bound, not a target.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 250;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Settle delay in milliseconds for the fallback deferred-navigation timer.
    #[serde(default = "default_settle_delay_ms", rename = "settleDelayMs")]
    pub settle_delay_ms: u64,
    /// Override for the log directory (defaults to ~/.admision-portal/logs).
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "logDir")]
    pub log_dir: Option<PathBuf>,
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            log_dir: None,
        }
    }
}

impl Config {
    /// The settle delay as a [`Duration`], handed to the view host when a
    /// navigation intent schedules its fallback ticket.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Path to the config file (~/.admision-portal/config.json)
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".admision-portal").join("config.json"))
            .unwrap_or_else(|| std::env::temp_dir().join("admision-portal-config.json"))
    }

    /// Load the config from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Config {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path. A missing file is not an error; a file
    /// that exists but fails to parse is logged as a warning.
    pub fn load_from(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }
        match Self::read(path).warn_on_err() {
            Some(config) => {
                info!(
                    path = %path.display(),
                    settle_delay_ms = config.settle_delay_ms,
                    "Loaded config"
                );
                config
            }
            None => Config::default(),
        }
    }

    fn read(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing config at {}", path.display()))
    }
}
