//! Catalog loading and string resolution for the Lexicon localization
//! engine.
//!
//! Locale files are loaded once into an immutable [`Catalog`]; a
//! [`Translator`] then renders [`LocaleStr`] descriptors for any locale by
//! deriving a lookup key, walking a fallback chain, and substituting named
//! extras into the selected template.
//!
//! # Core types
//!
//! - [`Catalog`] and [`LocaleTable`] — loaded locale tables
//! - [`load`] — builds a catalog from a directory of YAML files
//! - [`LocaleStr`], [`ExtraValue`], [`Translatable`], [`StringRequest`] —
//!   what callers ask to have translated
//! - [`Translator`] — key derivation, fallback, and substitution
//! - [`AuditReport`] — coverage of each locale against the source language
//! - [`CatalogError`] and [`TranslateError`] — failure taxonomy
//!
//! # Example
//!
//! ```
//! use lexicon_core::{Catalog, LocaleStr, LocaleTable, Translator};
//!
//! let catalog = Catalog::from_tables([("en-US", LocaleTable::from_iter([("k", "S")]))]);
//! let translator = Translator::new(catalog, "en-US");
//! let text = translator
//!     .translate(&LocaleStr::new("orig").with_key("k").into(), "fr")
//!     .expect("key exists in the source language");
//! assert_eq!(text, "S");
//! ```

mod audit;
mod catalog;
mod error;
mod key;
mod loader;
mod request;
mod template;
mod translator;

pub use audit::{AuditReport, LocaleAudit};
pub use catalog::{Catalog, LocaleTable};
pub use error::{CatalogError, TranslateError};
pub use key::derive_key;
pub use loader::{CATALOG_EXTENSIONS, load};
pub use request::{ExtraValue, LocaleStr, RESERVED_KEY_EXTRA, StringRequest, Translatable};
pub use template::format_template;
pub use translator::{DEFAULT_MAX_DEPTH, Translator};

#[cfg(test)]
mod tests;
