//! Log subscriber for the `lexicon` binary.
//!
//! Events go to stderr so stdout only ever carries rendered strings and audit
//! reports.

use std::io::{self, IsTerminal};

use lexicon_config::{Config, LogFormat};
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::UtcTime;

static INSTALLED: OnceCell<()> = OnceCell::new();

#[derive(Debug, Error)]
pub(crate) enum TelemetryError {
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Installs the global subscriber on the first successful call; later calls
/// in the same process keep the subscriber already in place.
pub(crate) fn install(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED.get_or_try_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter(config)?)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_timer(UtcTime::rfc_3339());
        match config.log_format() {
            LogFormat::Json => builder.json().flatten_event(true).try_init(),
            LogFormat::Compact => builder.compact().try_init(),
        }
        .map_err(|error| TelemetryError::Install(error.to_string()))
    })?;
    Ok(())
}

fn env_filter(config: &Config) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(config.log_filter()).map_err(|source| TelemetryError::Filter {
        filter: config.log_filter().to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn config_with_filter(filter: &str) -> Config {
        Config {
            log_filter: filter.to_owned(),
            ..Config::default()
        }
    }

    #[rstest]
    #[case("info")]
    #[case("lexicon_core=debug,warn")]
    fn accepts_filter_directives(#[case] filter: &str) {
        assert!(env_filter(&config_with_filter(filter)).is_ok());
    }

    #[test]
    fn rejects_invalid_filters_with_the_offending_text() {
        let error = env_filter(&config_with_filter("lexicon=notalevel"))
            .expect_err("unknown level must be rejected");
        assert!(
            error.to_string().contains("lexicon=notalevel"),
            "unexpected message: {error}"
        );
    }
}
