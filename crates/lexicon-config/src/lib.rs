//! Shared configuration for the Lexicon localization tooling.
//!
//! Configuration is layered with `ortho_config`: built-in defaults, then a
//! TOML file (`--config-path` or `LEXICON_CONFIG_PATH`), then `LEXICON_*`
//! environment variables, then command-line flags. The values are fixed for
//! the lifetime of the process once loaded.

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_CATALOG_DIR, DEFAULT_LOG_FILTER, DEFAULT_SOURCE_LOCALE, default_catalog_dir,
    default_log_filter, default_log_filter_string, default_log_format, default_source_locale,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "LEXICON")]
pub struct Config {
    /// Directory holding one `<locale>.yaml` file per locale.
    #[ortho_config(default = default_catalog_dir())]
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: Utf8PathBuf,
    /// Locale used as the fallback before the raw message.
    #[ortho_config(default = default_source_locale())]
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    /// Tracing filter expression.
    #[ortho_config(default = default_log_filter_string())]
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Log output format.
    #[ortho_config(default = default_log_format())]
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Config {
    /// Directory scanned for locale files.
    #[must_use]
    pub fn catalog_dir(&self) -> &Utf8Path {
        self.catalog_dir.as_path()
    }

    /// Source-language identifier.
    #[must_use]
    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: default_catalog_dir(),
            source_locale: default_source_locale(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}
