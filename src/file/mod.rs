//! Translator backed by a directory of per-locale JSON files.
//!
//! ```text
//! locales/
//! ├── default.json        default keys, hoisted to the document root
//! ├── en/
//! │   └── messages.json   single file: becomes `en.*`
//! └── fr/
//!     ├── errors.json     several files: `fr.errors.*`
//!     └── greetings.json  and `fr.greetings.*`
//! ```
pub mod aggregate;
mod error;
pub mod path;
pub mod scanner;

use std::path::{
    Path,
    PathBuf,
};
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use serde_json::Value;

pub use aggregate::Catalog;
pub use error::LoadError;
use crate::config::{
    FileMatcher,
    TranslatorSettings,
};
use crate::translator::Translator;

/// Default separator between key segments.
const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Read-only translator over an aggregated translation directory.
///
/// [`Translator::register`] is accepted and ignored: file-backed translations
/// only change through [`FileTranslator::reload`].
#[derive(Debug)]
pub struct FileTranslator {
    /// Locale retried once on a miss.
    fallback: String,
    /// Separator splitting keys into document segments.
    key_separator: String,
    /// Translation root and exclude patterns.
    matcher: FileMatcher,
    /// Currently published catalog. Replaced wholesale on reload.
    catalog: RwLock<Arc<Catalog>>,
}

impl FileTranslator {
    /// Aggregates `root_dir` with default settings.
    ///
    /// # Errors
    /// Returns [`LoadError`] if aggregation fails.
    pub fn new(
        fallback_locale: impl Into<String>,
        root_dir: impl Into<PathBuf>,
    ) -> Result<Self, LoadError> {
        Self::build(
            fallback_locale.into(),
            DEFAULT_KEY_SEPARATOR.to_string(),
            FileMatcher::empty(root_dir.into()),
        )
    }

    /// Aggregates `root_dir` using the fallback locale, key separator and
    /// exclude patterns of `settings`.
    ///
    /// # Errors
    /// Returns [`LoadError`] if a pattern is invalid or aggregation fails.
    pub fn with_settings(
        root_dir: impl Into<PathBuf>,
        settings: &TranslatorSettings,
    ) -> Result<Self, LoadError> {
        Self::build(
            settings.fallback_locale.clone(),
            settings.key_separator.clone(),
            FileMatcher::new(root_dir.into(), settings)?,
        )
    }

    /// Loads the initial catalog.
    fn build(
        fallback: String,
        key_separator: String,
        matcher: FileMatcher,
    ) -> Result<Self, LoadError> {
        let catalog = Self::load(&matcher)?;
        Ok(Self { fallback, key_separator, matcher, catalog: RwLock::new(Arc::new(catalog)) })
    }

    /// Aggregates the tree without touching any published state.
    fn load(matcher: &FileMatcher) -> Result<Catalog, LoadError> {
        let root = matcher.translation_root();
        tracing::debug!(root = %root.display(), "Loading translations");

        let catalog = aggregate::aggregate(matcher)?;
        tracing::info!(
            root = %root.display(),
            locales = catalog.locales.len(),
            "Translations loaded"
        );
        Ok(catalog)
    }

    /// Rebuilds the catalog from disk.
    ///
    /// The new catalog is built completely before it is published, so readers
    /// see either the old or the new document, never a partial one. On error
    /// the previous catalog stays in place.
    ///
    /// # Errors
    /// Returns [`LoadError`] if aggregation fails.
    pub fn reload(&self) -> Result<(), LoadError> {
        let catalog = Self::load(&self.matcher).inspect_err(|err| {
            tracing::warn!(error = %err, "Reload failed, keeping previous translations");
        })?;

        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
        Ok(())
    }

    #[must_use]
    pub fn root_dir(&self) -> &Path {
        self.matcher.translation_root()
    }

    #[must_use]
    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// Snapshot of the published catalog.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Locale directories of the published catalog.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        self.catalog().locales.clone()
    }

    /// The aggregated document as compact JSON text.
    #[must_use]
    pub fn document_text(&self) -> String {
        self.catalog().document.to_string()
    }

    /// Every leaf key available in `locale`, joined with the key separator.
    ///
    /// For the default scope (`""`) the locale members are left out.
    #[must_use]
    pub fn keys(&self, locale: &str) -> Vec<String> {
        let catalog = self.catalog();

        let scope = if locale.is_empty() {
            let Value::Object(members) = &catalog.document else {
                return Vec::new();
            };
            Value::Object(
                members
                    .iter()
                    .filter(|(key, _)| !catalog.locales.contains(key))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            )
        } else {
            match catalog.document.get(locale) {
                Some(value) => value.clone(),
                None => return Vec::new(),
            }
        };

        path::flatten_json(&scope, &self.key_separator).into_keys().collect()
    }

    /// Value at `key` in `locale`, without fallback.
    fn find(&self, catalog: &Catalog, locale: &str, key: &str) -> Option<String> {
        path::lookup(&catalog.document, locale, key, &self.key_separator)
            .map(path::value_to_string)
    }
}

impl Translator for FileTranslator {
    fn register(&self, locale: &str, key: &str, _message: &str) {
        tracing::debug!(locale, key, "File translator is read-only, ignoring register");
    }

    fn resolve(&self, locale: &str, key: &str) -> String {
        let catalog = self.catalog();

        self.find(&catalog, locale, key)
            .or_else(|| self.find(&catalog, &self.fallback, key))
            .unwrap_or_default()
    }

    fn fallback_locale(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::TranslationTree;

    #[fixture]
    fn tree() -> TranslationTree {
        TranslationTree::new()
            .file("default.json", r#"{"a": "X", "only_default": "D"}"#)
            .file("en/default.json", r#"{"a": "Y", "page": {"title": "Home"}, "count": 2}"#)
            .file("fr/greetings.json", r#"{"hi": "Salut {name}"}"#)
            .file("fr/errors.json", r#"{"404": "Introuvable"}"#)
    }

    #[rstest]
    #[case::locale_hit("en", "a", "Y")]
    #[case::nested_key("en", "page.title", "Home")]
    #[case::number("en", "count", "2")]
    #[case::object_as_json("en", "page", r#"{"title":"Home"}"#)]
    #[case::multi_file_locale("fr", "greetings.hi", "Salut {name}")]
    #[case::multi_file_numeric_key("fr", "errors.404", "Introuvable")]
    #[case::missing_locale_falls_back("de", "a", "Y")]
    #[case::missing_key_falls_back("fr", "page.title", "Home")]
    #[case::default_scope("", "only_default", "D")]
    #[case::miss_everywhere("fr", "nothing", "")]
    #[case::default_not_reached_through_fallback("fr", "only_default", "")]
    fn resolve_cases(
        tree: TranslationTree,
        #[case] locale: &str,
        #[case] key: &str,
        #[case] expected: &str,
    ) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();

        assert_that!(translator.resolve(locale, key), eq(expected));
    }

    #[rstest]
    fn empty_fallback_reaches_default_scope(tree: TranslationTree) {
        let translator = FileTranslator::new("", tree.path()).unwrap();

        assert_that!(translator.resolve("it", "a"), eq("X"));
        assert_that!(translator.resolve("en", "a"), eq("Y"));
    }

    #[rstest]
    fn register_is_a_no_op(tree: TranslationTree) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();

        translator.register("en", "a", "changed");
        translator.register("en", "new_key", "added");

        assert_that!(translator.resolve("en", "a"), eq("Y"));
        assert_that!(translator.resolve("en", "new_key"), eq(""));
    }

    #[rstest]
    fn translate_substitutes_placeholders(tree: TranslationTree) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();
        let values = HashMap::from([("name".to_string(), "Jean".to_string())]);

        assert_that!(translator.translate("fr", "greetings.hi", &values), eq("Salut Jean"));
    }

    #[rstest]
    fn reload_picks_up_changes(tree: TranslationTree) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();
        tree.write("en/default.json", r#"{"a": "Z"}"#);

        translator.reload().unwrap();

        assert_that!(translator.resolve("en", "a"), eq("Z"));
    }

    #[rstest]
    fn failed_reload_keeps_previous_catalog(tree: TranslationTree) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();
        tree.write("en/default.json", r#"{"a": "#);

        let result = translator.reload();

        assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
        assert_that!(translator.resolve("en", "a"), eq("Y"));
    }

    #[rstest]
    fn invalid_json_fails_construction() {
        let tree = TranslationTree::new().file("en/app.json", "not json");

        let result = FileTranslator::new("en", tree.path());

        assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
    }

    #[rstest]
    fn missing_root_fails_construction() {
        let tree = TranslationTree::new();

        let result = FileTranslator::new("en", tree.path().join("missing"));

        assert!(matches!(result, Err(LoadError::Walk(_))));
    }

    #[rstest]
    fn settings_apply_separator_and_excludes(tree: TranslationTree) {
        tree.write("fr/drafts.json", r#"{"hi": "draft"}"#);
        let settings = TranslatorSettings {
            key_separator: ":".to_string(),
            exclude_patterns: vec!["fr/drafts.json".to_string()],
            ..TranslatorSettings::default()
        };

        let translator = FileTranslator::with_settings(tree.path(), &settings).unwrap();

        assert_that!(translator.resolve("fr", "greetings:hi"), eq("Salut {name}"));
        assert_that!(translator.resolve("fr", "drafts:hi"), eq(""));
        assert_that!(translator.key_separator(), eq(":"));
    }

    #[rstest]
    fn keys_lists_leaf_keys(tree: TranslationTree) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();

        assert_that!(
            translator.keys("en"),
            unordered_elements_are![eq("a"), eq("page.title"), eq("count")]
        );
        assert_that!(
            translator.keys(""),
            unordered_elements_are![eq("a"), eq("only_default")]
        );
        assert_that!(translator.keys("de"), is_empty());
    }

    #[rstest]
    fn accessors_describe_the_catalog(tree: TranslationTree) {
        let translator = FileTranslator::new("en", tree.path()).unwrap();

        assert_that!(translator.root_dir(), eq(tree.path()));
        assert_that!(translator.locales(), elements_are![eq("en"), eq("fr")]);
        assert_that!(translator.fallback_locale(), eq("en"));

        let catalog = translator.catalog();
        let document: Value = serde_json::from_str(&translator.document_text()).unwrap();
        assert_that!(document, eq(&catalog.document));
    }
}
