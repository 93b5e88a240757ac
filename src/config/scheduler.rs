//! Scheduler configuration structures.

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable overriding [`SchedulerConfig::frame_budget_ms`].
pub const ENV_FRAME_BUDGET_MS: &str = "FRAME_BUDGET_MS";
/// Environment variable overriding [`SchedulerConfig::frame_interval_ms`].
pub const ENV_FRAME_INTERVAL_MS: &str = "FRAME_INTERVAL_MS";

const fn default_frame_budget_ms() -> f64 {
    16.6
}

const fn default_frame_interval_ms() -> f64 {
    16.667
}

/// Rounds to whole microseconds so 16.6 maps to exactly 16 600us.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis_to_duration(ms: f64) -> Duration {
    Duration::from_micros((ms * 1000.0).round() as u64)
}

/// Root scheduler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// A frame callback must fire strictly sooner than this many milliseconds
    /// after its cycle started for the task to run.
    #[serde(default = "default_frame_budget_ms")]
    pub frame_budget_ms: f64,
    /// Tick interval of the runtime-driven frame trigger, in milliseconds.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_budget_ms: default_frame_budget_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl SchedulerConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first field that is not finite or rounds
    /// to less than one microsecond.
    pub fn validate(&self) -> Result<(), String> {
        if !self.frame_budget_ms.is_finite() || self.frame_budget().is_zero() {
            return Err("frame_budget_ms must be a finite number of at least 0.001".into());
        }
        if !self.frame_interval_ms.is_finite() || self.frame_interval().is_zero() {
            return Err("frame_interval_ms must be a finite number of at least 0.001".into());
        }
        Ok(())
    }

    /// Per-frame budget as a [`Duration`].
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        millis_to_duration(self.frame_budget_ms)
    }

    /// Frame trigger interval as a [`Duration`].
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        millis_to_duration(self.frame_interval_ms)
    }

    /// Parse scheduler configuration from a JSON string and validate.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a message if the JSON is malformed or a value is invalid.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if a variable is set but not a number, or the result is invalid.
    pub fn from_env() -> AppResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, using the same
    /// variable names as [`SchedulerConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Fails if a value is present but not a number, or the result is invalid.
    pub fn from_lookup<L>(lookup: L) -> AppResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_FRAME_BUDGET_MS) {
            cfg.frame_budget_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_FRAME_BUDGET_MS}={raw} is not a number"))?;
        }
        if let Some(raw) = lookup(ENV_FRAME_INTERVAL_MS) {
            cfg.frame_interval_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_FRAME_INTERVAL_MS}={raw} is not a number"))?;
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}
