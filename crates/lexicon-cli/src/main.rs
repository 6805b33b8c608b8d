//! CLI entrypoint for the Lexicon localization engine.
//!
//! The binary delegates to [`lexicon_cli::run`], which loads configuration,
//! loads the locale catalog, and renders the requested strings.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    lexicon_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
