//! Human-readable rendering of command results.

use std::io::{self, Write};

use lexicon_core::AuditReport;

/// Writes the audit report, one summary line per locale followed by indented
/// key lists.
pub(crate) fn write_audit<W: Write>(writer: &mut W, report: &AuditReport) -> io::Result<()> {
    writeln!(
        writer,
        "source {}: {} keys",
        report.source_locale, report.source_keys
    )?;
    for locale in &report.locales {
        writeln!(
            writer,
            "{}: {}% ({}/{})",
            locale.locale,
            locale.coverage_percent(),
            locale.translated,
            report.source_keys
        )?;
        if !locale.missing.is_empty() {
            writeln!(writer, "  missing: {}", locale.missing.join(", "))?;
        }
        if !locale.orphaned.is_empty() {
            writeln!(writer, "  orphaned: {}", locale.orphaned.join(", "))?;
        }
    }
    Ok(())
}
