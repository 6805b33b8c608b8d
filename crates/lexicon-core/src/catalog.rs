//! In-memory locale tables.
//!
//! A [`Catalog`] is built once, either by [`load`](crate::load) or in code,
//! and is read-only afterwards. Lookups against a locale or key that is not
//! present return `None`; callers decide how to degrade.

use std::collections::{BTreeMap, HashMap};

/// Templates for one locale, keyed by lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

impl LocaleTable {
    /// Returns the template stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` when `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Every loaded locale table, keyed by locale identifier.
///
/// # Example
///
/// ```
/// use lexicon_core::{Catalog, LocaleTable};
///
/// let catalog = Catalog::from_tables([
///     ("en", LocaleTable::from_iter([("a", "A")])),
///     ("de", LocaleTable::from_iter([("a", "Ä")])),
/// ]);
/// assert_eq!(catalog.lookup("de", "a"), Some("Ä"));
/// assert_eq!(catalog.lookup("fr", "a"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tables: BTreeMap<String, LocaleTable>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(locale, table)` pairs.
    ///
    /// A locale listed twice keeps the last table.
    #[must_use]
    pub fn from_tables<L, I>(tables: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, LocaleTable)>,
    {
        Self {
            tables: tables
                .into_iter()
                .map(|(locale, table)| (locale.into(), table))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, locale: String, table: LocaleTable) {
        self.tables.insert(locale, table);
    }

    /// Returns the table for `locale`.
    #[must_use]
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        self.tables.get(locale)
    }

    /// Looks up `key` in the table for `locale`.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.table(locale).and_then(|table| table.get(key))
    }

    /// Locale identifiers in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no locale was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
