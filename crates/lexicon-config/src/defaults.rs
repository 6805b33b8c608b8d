use camino::Utf8PathBuf;

/// Default directory scanned for locale files, relative to the working
/// directory.
pub const DEFAULT_CATALOG_DIR: &str = "locales";

/// Default source language, the fallback of last resort before the raw
/// message.
pub const DEFAULT_SOURCE_LOCALE: &str = "en-US";

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default catalog directory as an owned path.
#[must_use]
pub fn default_catalog_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_CATALOG_DIR)
}

/// Owned source locale value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_source_locale() -> String {
    DEFAULT_SOURCE_LOCALE.to_owned()
}

/// Default log filter expression used by the binaries.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binaries.
#[must_use]
pub const fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Compact
}
