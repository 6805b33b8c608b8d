//! Command-line runtime for the Lexicon localization engine.
//!
//! The runtime splits configuration flags from the command, loads layered
//! configuration, installs the log subscriber, loads the locale catalog once,
//! and then renders strings or audits the catalog. IO streams and the configuration
//! loader are injectable so the whole flow can be exercised from tests.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use lexicon_core::{ExtraValue, LocaleStr, StringRequest, Translator};
use tracing::info;

mod cli;
mod config;
mod errors;
mod output;
mod telemetry;

use cli::{Cli, CliCommand};
use config::{ConfigLoader, OrthoConfigLoader, prepare_cli_arguments, split_config_arguments};
use errors::AppError;

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: keep in sync with the fields of `lexicon_config::Config`.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--catalog-dir",
    "--source-locale",
    "--log-filter",
    "--log-format",
];

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

fn run_with_loader<I, W, E, L>(args: I, stdout: &mut W, stderr: &mut E, loader: &L) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    match execute(&args, stdout, loader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error))
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = write!(stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<W, L>(args: &[OsString], stdout: &mut W, loader: &L) -> Result<(), AppError>
where
    W: Write,
    L: ConfigLoader,
{
    let split = split_config_arguments(args);
    let cli = Cli::try_parse_from(prepare_cli_arguments(args, &split))
        .map_err(AppError::CliUsage)?;
    let config = loader.load(&split.config_arguments)?;
    telemetry::install(&config)?;

    let catalog = lexicon_core::load(config.catalog_dir())?;
    info!(
        locales = catalog.len(),
        source_locale = config.source_locale(),
        "catalog ready"
    );
    let translator = Translator::new(catalog, config.source_locale());

    let text = match cli.command {
        CliCommand::Translate {
            message,
            locale,
            key,
            extras,
        } => {
            let string = build_string(message, key, extras.as_deref())?;
            translator.translate_str(&string, &locale)?
        }
        CliCommand::Command {
            message,
            locale,
            key,
        } => {
            let string = build_string(message, key, None)?;
            translator.translate_command(&string, &locale)?
        }
        CliCommand::Request { json } => {
            let request: StringRequest =
                serde_json::from_str(&json).map_err(AppError::ParseRequest)?;
            translator.resolve(&request)?
        }
        CliCommand::Audit { strict } => {
            let report = translator.audit();
            output::write_audit(stdout, &report).map_err(AppError::WriteOutput)?;
            if strict && !report.is_complete() {
                return Err(AppError::IncompleteCatalog);
            }
            return Ok(());
        }
    };

    writeln!(stdout, "{text}").map_err(AppError::WriteOutput)
}

fn build_string(
    message: String,
    key: Option<String>,
    extras: Option<&str>,
) -> Result<LocaleStr, AppError> {
    let mut string = LocaleStr::new(message);
    if let Some(key) = key {
        string = string.with_key(key);
    }
    if let Some(json) = extras {
        let values: BTreeMap<String, ExtraValue> =
            serde_json::from_str(json).map_err(AppError::ParseExtras)?;
        for (name, value) in values {
            string = string.with_extra(name, value);
        }
    }
    Ok(string)
}
