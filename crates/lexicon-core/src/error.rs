//! Error types for catalog loading and string resolution.
//!
//! Loading failures are fatal to process start-up: a broken locale file is an
//! authoring bug and is reported with the offending path. Resolution failures
//! are limited to explicit-key misses and runaway descriptor nesting; every
//! other miss degrades through the fallback chain instead of erroring.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading locale files into a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The catalog directory exists but could not be listed.
    #[error("failed to read catalog directory '{path}': {source}")]
    ReadDirectory {
        /// Directory that failed to list.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A locale file could not be read.
    #[error("failed to read locale file '{path}': {source}")]
    ReadFile {
        /// File that failed to read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A locale file is not valid YAML.
    #[error("failed to parse locale file '{path}': {source}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: Box<serde_saphyr::Error>,
    },

    /// A locale file parsed, but is not a mapping of keys to strings.
    #[error("malformed locale file '{path}': {reason}")]
    Malformed {
        /// File with the unexpected shape.
        path: Utf8PathBuf,
        /// What was found instead of a key to string mapping.
        reason: String,
    },
}

impl CatalogError {
    /// Creates a malformed-catalog error.
    #[must_use]
    pub fn malformed(path: Utf8PathBuf, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path,
            reason: reason.into(),
        }
    }

    /// Returns the path of the file or directory that failed.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::ReadDirectory { path, .. }
            | Self::ReadFile { path, .. }
            | Self::Parse { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }
}

/// Errors raised while resolving a string descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// An explicit key has no entry in the source-language table.
    #[error("string '{key}' not found in source language '{source_locale}'")]
    UnknownKey {
        /// The explicit key that missed.
        key: String,
        /// The configured source language.
        source_locale: String,
    },

    /// Descriptors nested inside extras exceeded the depth limit.
    #[error("string descriptors nested deeper than {limit} levels")]
    DepthExceeded {
        /// The configured nesting limit.
        limit: usize,
    },
}

impl TranslateError {
    /// Creates an unknown-key error.
    #[must_use]
    pub fn unknown_key(key: impl Into<String>, source_locale: impl Into<String>) -> Self {
        Self::UnknownKey {
            key: key.into(),
            source_locale: source_locale.into(),
        }
    }
}
