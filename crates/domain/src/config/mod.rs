mod logging;
mod output;

pub use logging::*;
pub use output::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::longest_label;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Labels longer than the column push values out of alignment.
        let longest = longest_label();
        if self.output.label_width < longest {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "output.label_width".into(),
                message: format!(
                    "{} is shorter than the longest label ({longest}); columns will not align",
                    self.output.label_width
                ),
            });
        }

        if self.output.separator.is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "output.separator".into(),
                message: "separator must not be empty".into(),
            });
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "logging.level".into(),
                message: format!(
                    "unknown level '{}' (expected one of {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }

    /// Like [`Config::validate`], but fails on the first `Error`-severity issue.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        match self
            .validate()
            .into_iter()
            .find(|e| e.severity == ConfigSeverity::Error)
        {
            Some(e) => Err(crate::Error::Config(format!("{}: {}", e.field, e.message))),
            None => Ok(()),
        }
    }
}
