//! Directory enumeration for translation trees.
//!
//! Only immediate children are considered: locale directories directly under
//! the root, and `.json` files directly inside a scope directory.

use std::path::{
    Path,
    PathBuf,
};

use ignore::{
    DirEntry,
    WalkBuilder,
};

use super::LoadError;
use crate::config::FileMatcher;

/// File extension of translation files.
const TRANSLATION_EXTENSION: &str = "json";

/// Walks the direct children of `dir`, sorted by file name.
///
/// Standard filters (hidden files, `.gitignore`) are disabled: every file in a
/// translation tree is a candidate.
fn direct_children(dir: &Path) -> impl Iterator<Item = Result<DirEntry, ignore::Error>> {
    WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter(|result| !matches!(result, Ok(entry) if entry.depth() == 0))
}

/// Names of the immediate subdirectories of `root`, used as locale codes.
///
/// # Errors
/// Returns [`LoadError::Walk`] if the root cannot be read.
pub fn locale_directories(root: &Path) -> Result<Vec<String>, LoadError> {
    let mut locales = Vec::new();

    for result in direct_children(root) {
        let entry = result?;
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 locale directory");
            continue;
        };
        locales.push(name.to_string());
    }

    Ok(locales)
}

/// Translation files directly inside `dir`, minus the excluded ones.
///
/// # Errors
/// Returns [`LoadError::Walk`] if the directory cannot be read.
pub fn translation_files(dir: &Path, matcher: &FileMatcher) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();

    for result in direct_children(dir) {
        let entry = result?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != TRANSLATION_EXTENSION) {
            continue;
        }
        if matcher.is_excluded(path) {
            tracing::debug!(path = %path.display(), "Skipping excluded translation file");
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::TranslationTree;

    #[rstest]
    fn locale_directories_are_sorted_and_exclude_files() {
        let tree = TranslationTree::new()
            .file("default.json", "{}")
            .file("fr/common.json", "{}")
            .file("en/common.json", "{}")
            .file("de/nested/deep.json", "{}");

        let locales = locale_directories(tree.path()).unwrap();

        assert_that!(locales, elements_are![eq("de"), eq("en"), eq("fr")]);
    }

    #[rstest]
    fn locale_directories_of_missing_root_fail() {
        let tree = TranslationTree::new();

        let result = locale_directories(&tree.path().join("missing"));

        assert!(matches!(result, Err(LoadError::Walk(_))));
    }

    #[rstest]
    fn translation_files_are_direct_json_children() {
        let tree = TranslationTree::new()
            .file("en/b.json", "{}")
            .file("en/a.json", "{}")
            .file("en/readme.txt", "")
            .file("en/archive/old.json", "{}");
        let matcher = FileMatcher::empty(tree.path().to_path_buf());

        let files = translation_files(&tree.path().join("en"), &matcher).unwrap();

        assert_that!(
            files,
            elements_are![eq(&tree.path().join("en/a.json")), eq(&tree.path().join("en/b.json"))]
        );
    }

    #[rstest]
    fn translation_files_skip_excluded() {
        let tree = TranslationTree::new().file("en/a.json", "{}").file("en/a.draft.json", "{}");
        let matcher = FileMatcher::from_patterns(
            tree.path().to_path_buf(),
            &["**/*.draft.json".to_string()],
        )
        .unwrap();

        let files = translation_files(&tree.path().join("en"), &matcher).unwrap();

        assert_that!(files, elements_are![eq(&tree.path().join("en/a.json"))]);
    }

    #[rstest]
    fn translation_files_include_hidden_files() {
        let tree = TranslationTree::new().file(".hidden.json", "{}");
        let matcher = FileMatcher::empty(tree.path().to_path_buf());

        let files = translation_files(tree.path(), &matcher).unwrap();

        assert_that!(files, len(eq(1)));
    }
}
