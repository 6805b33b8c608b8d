//! Loads locale files from a catalog directory.
//!
//! Each `<locale>.yaml` (or `.yml`) file holds a single top-level mapping of
//! keys to templates; the file stem becomes the locale identifier verbatim.
//! Anything that is not such a mapping fails the whole load.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, LocaleTable};
use crate::error::CatalogError;

/// File extensions recognised as locale files.
pub const CATALOG_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Loads every locale file in `directory` into a [`Catalog`].
///
/// A missing directory yields an empty catalog. Files are read in sorted
/// order; if two files share a stem the later one replaces the earlier.
///
/// # Errors
///
/// Returns [`CatalogError`] when the directory or a file cannot be read, a
/// file is not valid YAML, or a file's content is not a mapping of keys to
/// scalar strings. Entries left without a value are skipped, so they fall
/// back like absent keys.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
///
/// let catalog = lexicon_core::load(Utf8Path::new("does/not/exist"))
///     .expect("a missing directory is not an error");
/// assert!(catalog.is_empty());
/// ```
pub fn load(directory: &Utf8Path) -> Result<Catalog, CatalogError> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            warn!(%directory, "catalog directory not found, starting with an empty catalog");
            return Ok(Catalog::new());
        }
        Err(source) => {
            return Err(CatalogError::ReadDirectory {
                path: directory.to_path_buf(),
                source,
            });
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = match Utf8PathBuf::from_path_buf(entry.path()) {
            Ok(path) => path,
            Err(raw) => {
                warn!(path = %raw.display(), "skipping locale file with a non UTF-8 name");
                continue;
            }
        };
        if is_catalog_file(&path) {
            files.push(path);
        } else {
            debug!(%path, "skipping non-catalog entry");
        }
    }
    files.sort();

    let mut catalog = Catalog::new();
    for path in files {
        let Some(locale) = path.file_stem().map(str::to_owned) else {
            continue;
        };
        let table = read_table(&path)?;
        if catalog.table(&locale).is_some() {
            warn!(%locale, %path, "locale loaded twice, keeping the later file");
        }
        info!(%locale, entries = table.len(), "loaded locale file");
        catalog.insert(locale, table);
    }
    Ok(catalog)
}

fn is_catalog_file(path: &Utf8Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|extension| CATALOG_EXTENSIONS.contains(&extension))
}

fn read_table(path: &Utf8Path) -> Result<LocaleTable, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(CatalogError::malformed(
            path.to_path_buf(),
            "expected a mapping at the top level, found an empty document",
        ));
    }

    let document: Value = serde_saphyr::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    let entries = match document {
        Value::Object(entries) => entries,
        other => {
            return Err(CatalogError::malformed(
                path.to_path_buf(),
                format!(
                    "expected a mapping at the top level, found {}",
                    describe(&other)
                ),
            ));
        }
    };

    entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => {
                debug!(%path, %key, "skipping entry without a value");
                None
            }
            Value::String(text) => Some(Ok((key, text))),
            Value::Number(number) => Some(Ok((key, number.to_string()))),
            Value::Bool(flag) => Some(Ok((key, flag.to_string()))),
            other => Some(Err(CatalogError::malformed(
                path.to_path_buf(),
                format!("entry '{key}' must be a string, found {}", describe(&other)),
            ))),
        })
        .collect()
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
