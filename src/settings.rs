use services::{Aggregator, ConfiguredMessages, DEFAULT_ERROR_ENV};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogFormat(pub String);

impl fmt::Display for UnknownLogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown log format `{}`, expected `pretty` or `json`", self.0)
    }
}

impl std::error::Error for UnknownLogFormat {}

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Process-level settings, read from the environment.
///
/// | variable | meaning | default |
/// |---|---|---|
/// | `VALIDATION_DEFAULT_ERROR` | fallback message for failures without text | "The input was not valid." |
/// | `LOG_FORMAT` | `pretty` or `json` | `pretty` |
/// | `RUST_LOG` | tracing filter directives | `info` |
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_error: Option<String>,
    pub log_format: LogFormat,
    pub log_filter: String,
    /// Set when `LOG_FORMAT` held something unrecognised
    pub rejected_log_format: Option<UnknownLogFormat>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_error: None,
            log_format: LogFormat::Pretty,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected_log_format: None,
        }
    }
}

impl Settings {
    /// Loads `.env` when present, then reads the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (log_format, rejected_log_format) = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(e) => (LogFormat::Pretty, Some(e)),
            },
            None => (LogFormat::Pretty, None),
        };

        Self {
            default_error: lookup(DEFAULT_ERROR_ENV).filter(|message| !message.trim().is_empty()),
            log_format,
            log_filter: lookup(LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            rejected_log_format,
        }
    }

    /// The report builder to register as app data
    pub fn aggregator(&self) -> Aggregator {
        Aggregator::new(ConfiguredMessages::from_option(self.default_error.clone()))
    }
}
