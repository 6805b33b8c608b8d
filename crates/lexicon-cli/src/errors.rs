//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use lexicon_core::{CatalogError, TranslateError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to load catalog: {0}")]
    LoadCatalog(#[from] CatalogError),
    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),
    #[error("failed to parse extras: {0}")]
    ParseExtras(serde_json::Error),
    #[error("failed to parse request: {0}")]
    ParseRequest(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
    #[error("catalog audit found incomplete locales")]
    IncompleteCatalog,
}
