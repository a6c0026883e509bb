//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG` selects the filter (default `info`).
//! - `VALUEARRAYS_LOG_FORMAT` selects `json` (default) or `pretty` output.

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_VAR: &str = "VALUEARRAYS_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Logging settings resolved before the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
            std::env::var(LOG_FORMAT_VAR).ok().as_deref(),
        )
    }

    /// Resolve settings from raw variable values; blank or unknown values
    /// fall back to the defaults.
    pub fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            filter: filter
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map_or(defaults.filter, str::to_string),
            format: format.and_then(LogFormat::parse).unwrap_or(defaults.format),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(LogConfig::from_vars(None, None), LogConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = LogConfig::from_vars(Some("valuearrays_core=trace"), Some("Pretty"));
        assert_eq!(config.filter, "valuearrays_core=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_or_unknown_values_fall_back() {
        let config = LogConfig::from_vars(Some("  "), Some("xml"));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn init_twice_is_harmless() {
        init(&LogConfig::default());
        init(&LogConfig::from_vars(None, Some("pretty")));
    }
}
