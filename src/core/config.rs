//! Environment-driven configuration
//!
//! `LOG_LEVEL` selects the minimum level (`trace|debug|info|warn|error`,
//! case-insensitive) and `LOG_FORMAT` the writer (`console|json`).
//! Unrecognized or empty values fall back silently to the defaults;
//! [`EnvConfig::validate`] reports them for callers that want to know.

use super::{
    error::Result, log_level::LogLevel, options::LoggerOption, output_format::OutputFormat,
};
use once_cell::sync::Lazy;

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

static PROCESS_ENV: Lazy<EnvConfig> = Lazy::new(EnvConfig::from_env);

/// Raw values of the logging environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub level: String,
    pub format: String,
}

impl EnvConfig {
    pub fn new(level: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: format.into(),
        }
    }

    /// Read the variables now; unset or non-UTF-8 values read as empty
    pub fn from_env() -> Self {
        Self {
            level: std::env::var(ENV_LOG_LEVEL).unwrap_or_default(),
            format: std::env::var(ENV_LOG_FORMAT).unwrap_or_default(),
        }
    }

    /// Snapshot taken the first time any process default is built
    pub fn process() -> &'static EnvConfig {
        &PROCESS_ENV
    }

    pub fn options(&self) -> Vec<LoggerOption> {
        vec![
            LoggerOption::level(&self.level),
            LoggerOption::format(&self.format),
        ]
    }

    /// Strict check: non-empty values must name a known level and format
    pub fn validate(&self) -> Result<()> {
        if !self.level.is_empty() {
            self.level.parse::<LogLevel>()?;
        }
        if !self.format.is_empty() {
            self.format.parse::<OutputFormat>()?;
        }
        Ok(())
    }
}
