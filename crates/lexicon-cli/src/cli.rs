//! CLI argument definitions for the `lexicon` binary.

use clap::{Parser, Subcommand};

/// Command-line interface for the Lexicon localization engine.
#[derive(Parser, Debug)]
#[command(name = "lexicon", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// The operation to run against the loaded catalog.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Operations supported by the CLI.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Renders a source message in the given locale.
    Translate {
        /// The source-language message.
        #[arg(value_name = "MESSAGE")]
        message: String,
        /// Target locale identifier (for example `de`).
        #[arg(long)]
        locale: String,
        /// Explicit lookup key; must exist in the source language.
        #[arg(long)]
        key: Option<String>,
        /// Substitution values as a JSON object.
        #[arg(long, value_name = "JSON")]
        extras: Option<String>,
    },
    /// Renders an application-command string; unkeyed strings are returned
    /// unchanged.
    Command {
        /// The command string.
        #[arg(value_name = "MESSAGE")]
        message: String,
        /// Target locale identifier.
        #[arg(long)]
        locale: String,
        /// Explicit lookup key.
        #[arg(long)]
        key: Option<String>,
    },
    /// Renders a full JSON request `{message, key?, extras?, locale}`.
    Request {
        /// The request document.
        #[arg(value_name = "JSON")]
        json: String,
    },
    /// Reports keys missing from, or unknown to, each locale.
    Audit {
        /// Exits with a failure status when any locale is incomplete.
        #[arg(long)]
        strict: bool,
    },
}
