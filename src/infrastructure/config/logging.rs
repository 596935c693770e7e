//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

/// Accepted values for `logging.format`.
pub const FORMATS: [&str; 2] = ["pretty", "json"];

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Output goes to stderr so stdout stays reserved for results. `RUST_LOG`
    /// overrides the configured level. A second call is a no-op.
    pub fn init(&self) {
        self.init_with_level(&self.level);
    }

    /// Initialize with an explicit level, used by `--verbose`/`--quiet`.
    pub fn init_with_level(&self, level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        let _ = match self.format.as_str() {
            "json" => builder.json().try_init(),
            _ => builder.try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}
