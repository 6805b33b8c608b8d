//! Tests for [`load`].

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::{CatalogError, LocaleStr, Translator, load};

/// A temporary catalog directory that is removed on drop.
struct CatalogDir {
    _temp: TempDir,
    path: Utf8PathBuf,
}

impl CatalogDir {
    fn write(&self, name: &str, contents: &str) {
        fs::write(self.path.join(name), contents)
            .unwrap_or_else(|error| panic!("write {name}: {error}"));
    }

    fn path(&self) -> &Utf8Path {
        &self.path
    }
}

#[fixture]
fn catalog_dir() -> CatalogDir {
    let temp = TempDir::new().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
    CatalogDir { _temp: temp, path }
}

#[rstest]
fn loads_one_table_per_locale_file(catalog_dir: CatalogDir) {
    catalog_dir.write("en.yaml", "a: \"A\"\n");
    catalog_dir.write("de.yaml", "a: \"Ä\"\n");

    let catalog = load(catalog_dir.path()).expect("catalog loads");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["de", "en"]);
    assert_eq!(catalog.table("en").map(|table| table.len()), Some(1));
    assert_eq!(catalog.lookup("en", "a"), Some("A"));
    assert_eq!(catalog.lookup("de", "a"), Some("Ä"));
}

#[rstest]
fn uses_the_file_stem_verbatim(catalog_dir: CatalogDir) {
    catalog_dir.write("en-US.yml", "greeting: Hello\n");
    catalog_dir.write("pt-BR.yaml", "greeting: Olá\n");

    let catalog = load(catalog_dir.path()).expect("catalog loads");

    assert_eq!(catalog.lookup("en-US", "greeting"), Some("Hello"));
    assert_eq!(catalog.lookup("pt-BR", "greeting"), Some("Olá"));
}

#[rstest]
fn skips_files_without_a_catalog_extension(catalog_dir: CatalogDir) {
    catalog_dir.write("en.yaml", "a: A\n");
    catalog_dir.write("README.md", "# not a catalog\n");
    fs::create_dir(catalog_dir.path().join("nested.yaml")).expect("create nested dir");

    let catalog = load(catalog_dir.path()).expect("catalog loads");

    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["en"]);
}

#[rstest]
fn stores_scalar_entries_as_text(catalog_dir: CatalogDir) {
    catalog_dir.write("en.yaml", "count: 3\nenabled: true\n");

    let catalog = load(catalog_dir.path()).expect("catalog loads");

    assert_eq!(catalog.lookup("en", "count"), Some("3"));
    assert_eq!(catalog.lookup("en", "enabled"), Some("true"));
}

#[rstest]
fn null_entries_fall_back(catalog_dir: CatalogDir) {
    catalog_dir.write("en.yaml", "greeting: Hello\nfarewell: Bye\n");
    catalog_dir.write("de.yaml", "greeting:\nfarewell: ~\nother: Hallo\n");

    let catalog = load(catalog_dir.path()).expect("blank entries do not fail the load");

    assert_eq!(catalog.lookup("de", "other"), Some("Hallo"));
    assert_eq!(
        catalog.table("de").map(|table| table.contains_key("greeting")),
        Some(false)
    );

    let translator = Translator::new(catalog, "en");
    let text = translator
        .translate_str(&LocaleStr::new("Greeting"), "de")
        .expect("implicit keys never fail");
    assert_eq!(text, "Hello");
    let text = translator
        .translate_str(&LocaleStr::new("Farewell").with_key("farewell"), "de")
        .expect("key exists in the source language");
    assert_eq!(text, "Bye");
}

#[test]
fn missing_directory_yields_an_empty_catalog() {
    let temp = TempDir::new().expect("create temp dir");
    let missing = Utf8PathBuf::from_path_buf(temp.path().join("absent")).expect("utf-8 path");

    let catalog = load(&missing).expect("missing directory is not an error");

    assert!(catalog.is_empty());
}

#[rstest]
fn empty_directory_yields_an_empty_catalog(catalog_dir: CatalogDir) {
    let catalog = load(catalog_dir.path()).expect("catalog loads");
    assert!(catalog.is_empty());
}

#[rstest]
#[case::sequence("- a\n- b\n", "a sequence")]
#[case::scalar("just text\n", "a string")]
#[case::empty("", "an empty document")]
#[case::nested_entry("menu:\n  title: Menu\n", "entry 'menu' must be a string")]
#[case::list_entry("options:\n  - one\n", "entry 'options' must be a string")]
fn rejects_non_mapping_content(
    catalog_dir: CatalogDir,
    #[case] contents: &str,
    #[case] reason: &str,
) {
    catalog_dir.write("en.yaml", "a: A\n");
    catalog_dir.write("fr.yaml", contents);

    let error = load(catalog_dir.path()).expect_err("malformed file must fail the load");

    match &error {
        CatalogError::Malformed { path, reason: actual } => {
            assert_eq!(path.file_name(), Some("fr.yaml"));
            assert!(actual.contains(reason), "unexpected reason: {actual}");
        }
        other => panic!("expected a malformed catalog error, got {other}"),
    }
    assert!(error.to_string().contains("fr.yaml"));
}

#[rstest]
fn reports_yaml_syntax_errors_with_the_file(catalog_dir: CatalogDir) {
    catalog_dir.write("es.yaml", "a: [unterminated\n");

    let error = load(catalog_dir.path()).expect_err("invalid yaml must fail the load");

    assert!(matches!(error, CatalogError::Parse { .. }), "got {error}");
    assert_eq!(error.path().file_name(), Some("es.yaml"));
}
