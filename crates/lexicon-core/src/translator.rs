//! String resolution against a loaded catalog.
//!
//! A [`Translator`] owns an immutable [`Catalog`] and the source-language
//! identifier. Each call derives a key, walks the fallback chain
//! target locale, source language, raw message, derived key, and substitutes
//! the resolved extras into the winner. Only explicit-key misses and runaway
//! nesting fail; every other miss degrades to readable text.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::error::TranslateError;
use crate::key::derive_key;
use crate::request::{ExtraValue, LocaleStr, RESERVED_KEY_EXTRA, StringRequest, Translatable};
use crate::template::format_template;

/// Default limit on descriptors nested inside extras.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Resolves string descriptors into localized text.
///
/// The translator is `Send + Sync` and never mutates its catalog, so one
/// instance can be shared by reference across callers.
///
/// # Example
///
/// ```
/// use lexicon_core::{Catalog, LocaleStr, LocaleTable, Translator};
///
/// let catalog = Catalog::from_tables([
///     ("en-US", LocaleTable::from_iter([("greeting", "Hi {name}")])),
///     ("de", LocaleTable::from_iter([("greeting", "Hallo {name}")])),
/// ]);
/// let translator = Translator::new(catalog, "en-US");
///
/// let greeting = LocaleStr::new("Greeting").with_extra("name", "Ann");
/// let text = translator.translate(&greeting.into(), "de").expect("implicit keys never fail");
/// assert_eq!(text, "Hallo Ann");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Catalog,
    source_locale: String,
    max_depth: usize,
}

impl Translator {
    /// Creates a translator over `catalog` with `source_locale` as the
    /// canonical fallback language.
    #[must_use]
    pub fn new(catalog: Catalog, source_locale: impl Into<String>) -> Self {
        Self {
            catalog,
            source_locale: source_locale.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the nesting limit for descriptors inside extras.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the source-language identifier.
    #[must_use]
    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    /// Returns the nesting limit for descriptors inside extras.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Renders `string` in `locale`.
    ///
    /// Plain strings are returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnknownKey`] when the descriptor, or a
    /// descriptor nested in its extras, names an explicit key missing from
    /// the source-language table, and [`TranslateError::DepthExceeded`] when
    /// extras nest too deeply.
    pub fn translate(&self, string: &Translatable, locale: &str) -> Result<String, TranslateError> {
        match string {
            Translatable::Plain(text) => Ok(text.clone()),
            Translatable::Localized(string) => self.translate_str(string, locale),
        }
    }

    /// Renders a descriptor in `locale`.
    ///
    /// # Errors
    ///
    /// See [`Translator::translate`].
    pub fn translate_str(&self, string: &LocaleStr, locale: &str) -> Result<String, TranslateError> {
        self.translate_at_depth(string, locale, 0)
    }

    /// Renders the request's descriptor in the request's locale.
    ///
    /// # Errors
    ///
    /// See [`Translator::translate`].
    pub fn resolve(&self, request: &StringRequest) -> Result<String, TranslateError> {
        self.translate_str(request.string(), request.locale())
    }

    /// Renders an application-command string such as a command name or
    /// option description.
    ///
    /// Command strings are only localized when they carry an explicit key;
    /// anything else is returned as its raw message.
    ///
    /// # Errors
    ///
    /// See [`Translator::translate`].
    pub fn translate_command(
        &self,
        string: &LocaleStr,
        locale: &str,
    ) -> Result<String, TranslateError> {
        if string.explicit_key().is_none() {
            return Ok(string.message().to_owned());
        }
        self.translate_str(string, locale)
    }

    /// Resolves `extras` into substitution values for `locale`.
    ///
    /// Nested descriptors are translated, list items are resolved the same
    /// way and joined with `/`, and scalars are rendered as text. The reserved
    /// `key` extra is left out.
    ///
    /// # Errors
    ///
    /// See [`Translator::translate`].
    pub fn resolve_extras(
        &self,
        extras: &BTreeMap<String, ExtraValue>,
        locale: &str,
    ) -> Result<BTreeMap<String, String>, TranslateError> {
        self.resolve_extras_at_depth(extras, locale, 0)
    }

    fn translate_at_depth(
        &self,
        string: &LocaleStr,
        locale: &str,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let extras = self.resolve_extras_at_depth(string.extras(), locale, depth)?;
        let explicit_key = string.explicit_key();
        let key = explicit_key.map_or_else(|| derive_key(string.message()), str::to_owned);
        debug!(%key, %locale, "translating string");

        if explicit_key.is_some() && self.catalog.lookup(&self.source_locale, &key).is_none() {
            return Err(TranslateError::unknown_key(key, self.source_locale.as_str()));
        }
        let source = self.lookup(&self.source_locale, &key);
        let target = self.lookup(locale, &key);

        let template = if let Some(text) = target {
            text
        } else if let Some(text) = source {
            trace!(%key, %locale, "falling back to source language");
            text
        } else if !string.message().is_empty() {
            trace!(%key, %locale, "falling back to raw message");
            string.message()
        } else {
            trace!(%key, %locale, "falling back to derived key");
            key.as_str()
        };

        Ok(format_template(template, &extras).unwrap_or_else(|| template.to_owned()))
    }

    fn resolve_extras_at_depth(
        &self,
        extras: &BTreeMap<String, ExtraValue>,
        locale: &str,
        depth: usize,
    ) -> Result<BTreeMap<String, String>, TranslateError> {
        let mut resolved = BTreeMap::new();
        for (name, value) in extras {
            if name == RESERVED_KEY_EXTRA {
                continue;
            }
            resolved.insert(name.clone(), self.render_extra(value, locale, depth)?);
        }
        Ok(resolved)
    }

    fn render_extra(
        &self,
        value: &ExtraValue,
        locale: &str,
        depth: usize,
    ) -> Result<String, TranslateError> {
        match value {
            ExtraValue::Localized(nested) => self.translate_nested(nested, locale, depth),
            ExtraValue::List(items) => Ok(items
                .iter()
                .map(|item| self.render_extra(item, locale, depth))
                .collect::<Result<Vec<_>, _>>()?
                .join("/")),
            scalar => Ok(scalar.to_string()),
        }
    }

    fn translate_nested(
        &self,
        string: &LocaleStr,
        locale: &str,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(TranslateError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        self.translate_at_depth(string, locale, next)
    }

    /// Looks up `key` for `locale`, treating empty templates as misses.
    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.catalog
            .lookup(locale, key)
            .filter(|text| !text.is_empty())
    }
}
