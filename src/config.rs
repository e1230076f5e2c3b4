//! Monitor configuration.
//!
//! Defaults, then an optional JSON file, then `FRAME_INPUT_*` environment
//! variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::EngineConfig;

pub const ENV_TICK_MS: &str = "FRAME_INPUT_TICK_MS";
pub const ENV_TEXT: &str = "FRAME_INPUT_TEXT";
pub const ENV_NO_MOUSE: &str = "FRAME_INPUT_NO_MOUSE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick_ms must be at least 1")]
    ZeroTick,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub tick_ms: u64,
    pub mouse_capture: bool,
    pub engine: EngineConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            mouse_capture: true,
            engine: EngineConfig::default(),
        }
    }
}

impl MonitorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Overlay the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overlay values from `lookup`. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(tick_ms) = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
        {
            self.tick_ms = tick_ms;
        }
        if let Some(text) = lookup(ENV_TEXT).and_then(|s| parse_flag(&s)) {
            self.engine.text_input = text;
        }
        if let Some(no_mouse) = lookup(ENV_NO_MOUSE).and_then(|s| parse_flag(&s)) {
            self.mouse_capture = !no_mouse;
        }
        self
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
