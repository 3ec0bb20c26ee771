//! # Application Settings
//!
//! Runtime settings read from the environment. Everything has a default, so an
//! empty environment is a valid configuration.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `PURLIN_MATERIAL_LATENCY_MS` | `material_latency_ms` | `100` |
//! | `PURLIN_LOG` | `log_filter` | `purlin_core=info,purlin_gui=info,purlin_cli=info` |
//! | `PURLIN_WINDOW_WIDTH` | `window_width` | `1280` |
//! | `PURLIN_WINDOW_HEIGHT` | `window_height` | `800` |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{PurlinError, PurlinResult};

pub const ENV_MATERIAL_LATENCY: &str = "PURLIN_MATERIAL_LATENCY_MS";
pub const ENV_LOG: &str = "PURLIN_LOG";
pub const ENV_WINDOW_WIDTH: &str = "PURLIN_WINDOW_WIDTH";
pub const ENV_WINDOW_HEIGHT: &str = "PURLIN_WINDOW_HEIGHT";

/// Default tracing filter when neither `RUST_LOG` nor `PURLIN_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "purlin_core=info,purlin_gui=info,purlin_cli=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Artificial latency of the mock material service
    pub material_latency_ms: u64,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            material_latency_ms: 100,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> PurlinResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> PurlinResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup(ENV_MATERIAL_LATENCY) {
            config.material_latency_ms = raw
                .trim()
                .parse()
                .map_err(|_| PurlinError::config(ENV_MATERIAL_LATENCY, format!("'{}' is not a whole number of milliseconds", raw)))?;
        }

        if let Some(raw) = lookup(ENV_LOG) {
            if raw.trim().is_empty() {
                return Err(PurlinError::config(ENV_LOG, "filter must not be empty"));
            }
            config.log_filter = raw;
        }

        if let Some(raw) = lookup(ENV_WINDOW_WIDTH) {
            config.window_width = parse_dimension(ENV_WINDOW_WIDTH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_WINDOW_HEIGHT) {
            config.window_height = parse_dimension(ENV_WINDOW_HEIGHT, &raw)?;
        }

        Ok(config)
    }

    pub fn material_latency(&self) -> Duration {
        Duration::from_millis(self.material_latency_ms)
    }
}

fn parse_dimension(key: &str, raw: &str) -> PurlinResult<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| PurlinError::config(key, format!("'{}' is not a number", raw)))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(PurlinError::config(key, "must be a positive size in logical pixels"));
    }
    Ok(value)
}
