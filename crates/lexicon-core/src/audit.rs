//! Coverage audit of locale tables against the source language.

use std::collections::BTreeSet;

use crate::translator::Translator;

/// Coverage of one locale relative to the source-language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleAudit {
    /// Locale identifier.
    pub locale: String,
    /// Source keys with an entry in this locale.
    pub translated: usize,
    /// Source keys without an entry in this locale, sorted.
    pub missing: Vec<String>,
    /// Keys in this locale that the source language does not define, sorted.
    pub orphaned: Vec<String>,
}

impl LocaleAudit {
    /// Returns `true` when nothing is missing or orphaned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }

    /// Percentage of source keys translated, `100` for an empty source table.
    #[must_use]
    pub fn coverage_percent(&self) -> u8 {
        let total = self.translated + self.missing.len();
        self.translated
            .saturating_mul(100)
            .checked_div(total)
            .map_or(100, |percent| u8::try_from(percent).unwrap_or(u8::MAX))
    }
}

/// Coverage of every non-source locale in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// The source-language identifier audited against.
    pub source_locale: String,
    /// Number of keys in the source-language table.
    pub source_keys: usize,
    /// Per-locale results in locale order.
    pub locales: Vec<LocaleAudit>,
}

impl AuditReport {
    /// Returns `true` when every locale is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleAudit::is_complete)
    }
}

impl Translator {
    /// Compares every locale table with the source-language table.
    ///
    /// A missing source table audits as empty, so every key of every other
    /// locale is reported as orphaned.
    ///
    /// # Example
    ///
    /// ```
    /// use lexicon_core::{Catalog, LocaleTable, Translator};
    ///
    /// let catalog = Catalog::from_tables([
    ///     ("en", LocaleTable::from_iter([("a", "A"), ("b", "B")])),
    ///     ("de", LocaleTable::from_iter([("a", "Ä")])),
    /// ]);
    /// let report = Translator::new(catalog, "en").audit();
    /// assert_eq!(report.locales[0].missing, vec![String::from("b")]);
    /// ```
    #[must_use]
    pub fn audit(&self) -> AuditReport {
        let source: BTreeSet<&str> = self
            .catalog()
            .table(self.source_locale())
            .map(|table| table.keys().collect())
            .unwrap_or_default();

        let locales = self
            .catalog()
            .locales()
            .filter(|locale| *locale != self.source_locale())
            .filter_map(|locale| {
                let table = self.catalog().table(locale)?;
                let keys: BTreeSet<&str> = table.keys().collect();
                Some(LocaleAudit {
                    locale: locale.to_owned(),
                    translated: source.intersection(&keys).count(),
                    missing: source.difference(&keys).map(|key| (*key).to_owned()).collect(),
                    orphaned: keys.difference(&source).map(|key| (*key).to_owned()).collect(),
                })
            })
            .collect();

        AuditReport {
            source_locale: self.source_locale().to_owned(),
            source_keys: source.len(),
            locales,
        }
    }
}
