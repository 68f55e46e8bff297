//! Merges a translation directory tree into one JSON document.
//!
//! Layout of the produced document:
//!
//! - every locale directory becomes a top-level member named after it;
//! - default translations (files directly under the root) live at the top
//!   level itself.
//!
//! A directory holding exactly one file contributes that file's content
//! directly; a directory holding zero or several files nests each file's
//! content under its file stem.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

use super::{
    LoadError,
    scanner,
};
use crate::config::FileMatcher;

/// Aggregated translations of one directory tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Merged document queried by path.
    pub document: Value,
    /// Locale directories found under the root, in load order.
    pub locales: Vec<String>,
}

/// A parsed translation file.
#[derive(Debug)]
struct ScopeFile {
    /// File name without the extension.
    stem: String,
    /// Location on disk, kept for error reporting.
    path: PathBuf,
    /// Parsed content.
    content: Value,
}

/// Builds the catalog for the tree rooted at `matcher.translation_root()`.
///
/// Locale directories are merged first (in file name order), then the
/// default files of the root. The first fragment to claim a top-level member
/// keeps it.
///
/// # Errors
/// Fails on the first directory that cannot be listed, file that cannot be
/// read, or file that is not valid JSON.
pub fn aggregate(matcher: &FileMatcher) -> Result<Catalog, LoadError> {
    let root = matcher.translation_root();
    let locales = scanner::locale_directories(root)?;
    let mut document = Map::new();

    for locale in &locales {
        let files = read_scope(&root.join(locale), matcher)?;
        merge_locale(&mut document, locale, files);
    }

    let files = read_scope(root, matcher)?;
    merge_default(&mut document, files)?;

    Ok(Catalog { document: Value::Object(document), locales })
}

/// Reads and parses every translation file directly inside `dir`.
fn read_scope(dir: &Path, matcher: &FileMatcher) -> Result<Vec<ScopeFile>, LoadError> {
    scanner::translation_files(dir, matcher)?
        .into_iter()
        .map(|path| {
            let content = read_translation_file(&path)?;
            let stem =
                path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            Ok(ScopeFile { stem, path, content })
        })
        .collect()
}

/// Reads one translation file and validates it as JSON.
///
/// # Errors
/// Returns [`LoadError::ReadFile`] or [`LoadError::InvalidJson`] naming the file.
pub fn read_translation_file(path: &Path) -> Result<Value, LoadError> {
    tracing::debug!(path = %path.display(), "Reading translation file");

    let content = std::fs::read_to_string(path)
        .map_err(|source| LoadError::ReadFile { path: path.to_path_buf(), source })?;

    serde_json::from_str(&content)
        .map_err(|source| LoadError::InvalidJson { path: path.to_path_buf(), source })
}

/// Places a locale directory's files under `document[locale]`.
fn merge_locale(document: &mut Map<String, Value>, locale: &str, files: Vec<ScopeFile>) {
    let content = match <[ScopeFile; 1]>::try_from(files) {
        Ok([file]) => file.content,
        Err(files) => Value::Object(nest_by_stem(files)),
    };

    insert_first(document, locale.to_string(), content);
}

/// Places the root directory's files at the top level of `document`.
fn merge_default(
    document: &mut Map<String, Value>,
    files: Vec<ScopeFile>,
) -> Result<(), LoadError> {
    match <[ScopeFile; 1]>::try_from(files) {
        Ok([file]) => {
            let Value::Object(members) = file.content else {
                return Err(LoadError::NotAnObject { path: file.path });
            };
            for (key, value) in members {
                insert_first(document, key, value);
            }
        }
        Err(files) => {
            for (stem, content) in nest_by_stem(files) {
                insert_first(document, stem, content);
            }
        }
    }

    Ok(())
}

/// Maps each file stem to the file's content.
fn nest_by_stem(files: Vec<ScopeFile>) -> Map<String, Value> {
    files.into_iter().map(|file| (file.stem, file.content)).collect()
}

/// Inserts `key` unless an earlier fragment already claimed it.
fn insert_first(document: &mut Map<String, Value>, key: String, value: Value) {
    if document.contains_key(&key) {
        tracing::warn!(key = %key, "Duplicate top-level translation key, keeping the first one");
        return;
    }
    document.insert(key, value);
}
