//! RON configuration for the terminal front end.
//!
//! Every field is optional in the file; missing ones fall back to the
//! defaults below, which reproduce the stock simulation (2 s analysis,
//! 500 ms ticks of up to 15%, 8 s deadline).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use downloader_core::{
    CoreSettings, DeadlinePolicy, Format, ParseFormatError, ParseQualityError, Quality,
};
use downloader_engine::SimulationSettings;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::platform::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Quality(#[from] ParseQualityError),
    #[error(transparent)]
    Format(#[from] ParseFormatError),
    #[error("max_step_percent must be within 0..=100, got {0}")]
    StepOutOfRange(f64),
    #[error("tick_interval_ms must be greater than zero")]
    ZeroTickInterval,
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Mirrors [`DeadlinePolicy`] for deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum DeadlinePolicyConfig {
    #[default]
    Fail,
    Abandon,
}

impl From<DeadlinePolicyConfig> for DeadlinePolicy {
    fn from(value: DeadlinePolicyConfig) -> Self {
        match value {
            DeadlinePolicyConfig::Fail => DeadlinePolicy::Fail,
            DeadlinePolicyConfig::Abandon => DeadlinePolicy::Abandon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis_delay_ms: u64,
    pub tick_interval_ms: u64,
    pub max_step_percent: f64,
    pub deadline_ms: u64,
    pub default_quality: String,
    pub default_format: String,
    pub deadline_policy: DeadlinePolicyConfig,
    pub seed: Option<u64>,
    pub log: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 2_000,
            tick_interval_ms: 500,
            max_step_percent: 15.0,
            deadline_ms: 8_000,
            default_quality: Quality::default().to_string(),
            default_format: Format::default().to_string(),
            deadline_policy: DeadlinePolicyConfig::default(),
            seed: None,
            log: LogDestination::Terminal,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    pub fn core_settings(&self) -> Result<CoreSettings, ConfigError> {
        Ok(CoreSettings {
            default_quality: self.default_quality.parse()?,
            default_format: self.default_format.parse()?,
            deadline_policy: self.deadline_policy.into(),
        })
    }

    pub fn simulation_settings(&self) -> Result<SimulationSettings, ConfigError> {
        if !(0.0..=100.0).contains(&self.max_step_percent) {
            return Err(ConfigError::StepOutOfRange(self.max_step_percent));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(SimulationSettings {
            analysis_delay: Duration::from_millis(self.analysis_delay_ms),
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            max_step: (self.max_step_percent * 100.0).round() as u32,
            deadline: Duration::from_millis(self.deadline_ms),
            seed: self.seed,
        })
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
