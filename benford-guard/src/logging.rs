//! Logging utilities and configuration for benford-guard.
//!
//! The library only emits `tracing` events. Applications that do not install
//! their own subscriber can use [`setup::init_logging`].

use tracing::Level;

/// Logging configuration for analyzers.
///
/// Controls how chatty an analysis is. Per-value exclusion logging is off by
/// default because a badly formatted column can produce one event per row.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level for benford-guard components
    pub base_level: Level,
    /// Whether to log each value excluded by the digit extractor
    pub log_exclusions: bool,
    /// Whether to log the computed frequencies and statistic
    pub log_metrics: bool,
    /// Maximum length for logged field values (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_exclusions: false,
            log_metrics: true,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_exclusions: true,
            log_metrics: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration for production with lowest overhead.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_exclusions: false,
            log_metrics: false,
            max_field_length: 128,
        }
    }

    /// Creates a balanced configuration suitable for most use cases.
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Returns true if events at `level` pass the configured base level.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.base_level
    }

    /// Whether each excluded value should be logged.
    pub(crate) fn logs_exclusions(&self) -> bool {
        self.log_exclusions && self.enabled(Level::DEBUG)
    }

    /// Whether analysis metrics should be logged.
    pub(crate) fn logs_metrics(&self) -> bool {
        self.log_metrics && self.enabled(Level::INFO)
    }
}

/// Truncates a string to the maximum field length if needed.
///
/// The cut is moved back to the nearest character boundary so multi-byte
/// text never splits.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        return value.to_string();
    }
    let mut end = max_length;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated)", &value[..end])
}

/// Utilities for setting up structured logging.
pub mod setup {
    use tracing::Level;

    use crate::error::{BenfordError, Result};

    /// Configuration for the subscriber installed by [`init_logging`].
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for the application
        pub level: Level,
        /// Log level for benford-guard components specifically
        pub benford_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                benford_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for production use.
        pub fn production() -> Self {
            Self {
                level: Level::WARN,
                benford_level: Level::INFO,
                json_format: true,
                env_filter: None,
            }
        }

        /// Creates a configuration for development use.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                benford_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }

        /// Sets the log level for the application.
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Sets the log level for benford-guard components.
        pub fn with_benford_level(mut self, level: Level) -> Self {
            self.benford_level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                format!(
                    "{},benford_guard={}",
                    self.level.as_str().to_lowercase(),
                    self.benford_level.as_str().to_lowercase()
                )
            }
        }
    }

    /// Installs a global `tracing` subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use benford_guard::logging::setup::{init_logging, LoggingConfig};
    ///
    /// init_logging(LoggingConfig::development().with_json_format(true)).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BenfordError::Configuration`] if the filter does not parse or a
    /// global subscriber is already installed.
    pub fn init_logging(config: LoggingConfig) -> Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(config.env_filter())
                .map_err(|e| BenfordError::configuration(format!("invalid log filter: {e}")))?,
        };

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| BenfordError::configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::setup::LoggingConfig;
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.base_level, Level::INFO);
        assert!(!config.log_exclusions);
        assert!(config.log_metrics);
        assert_eq!(config.max_field_length, 256);
    }

    #[test]
    fn test_log_config_presets() {
        let verbose = LogConfig::verbose();
        assert_eq!(verbose.base_level, Level::DEBUG);
        assert!(verbose.log_exclusions);

        let production = LogConfig::production();
        assert_eq!(production.base_level, Level::WARN);
        assert!(!production.log_exclusions);
        assert!(!production.log_metrics);
        assert_eq!(production.max_field_length, 128);
    }

    #[test]
    fn test_level_gating() {
        let production = LogConfig::production();
        assert!(production.enabled(Level::ERROR));
        assert!(production.enabled(Level::WARN));
        assert!(!production.enabled(Level::INFO));

        let balanced = LogConfig::balanced();
        assert!(balanced.logs_metrics());
        assert!(!balanced.logs_exclusions());

        // Exclusion logging needs both the flag and a DEBUG base level.
        let flagged_only = LogConfig {
            log_exclusions: true,
            ..LogConfig::default()
        };
        assert!(!flagged_only.logs_exclusions());
        assert!(LogConfig::verbose().logs_exclusions());
    }

    #[test]
    fn test_truncate_field() {
        assert_eq!(truncate_field("hello", 10), "hello");
        assert_eq!(
            truncate_field("this is a very long text that should be truncated", 10),
            "this is a ...(truncated)"
        );
        // 'é' is two bytes; a cut at byte 2 would split it.
        assert_eq!(truncate_field("héllo", 2), "h...(truncated)");
    }

    #[test]
    fn test_env_filter_string() {
        let config = LoggingConfig::default();
        assert_eq!(config.env_filter(), "info,benford_guard=debug");

        let config = LoggingConfig::production().with_env_filter("benford_guard=trace");
        assert_eq!(config.env_filter(), "benford_guard=trace");
    }

    #[test]
    fn test_logging_config_builders() {
        let config = LoggingConfig::default()
            .with_level(Level::WARN)
            .with_benford_level(Level::TRACE)
            .with_json_format(true);
        assert_eq!(config.level, Level::WARN);
        assert_eq!(config.benford_level, Level::TRACE);
        assert!(config.json_format);
        assert_eq!(config.env_filter(), "warn,benford_guard=trace");
    }
}
