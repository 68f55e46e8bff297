//! Exclude matcher for translation files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::TranslatorSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches translation files against the configured exclude patterns.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    translation_root: PathBuf,
    exclude_set: GlobSet,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(
        translation_root: PathBuf,
        settings: &TranslatorSettings,
    ) -> Result<Self, MatcherError> {
        Self::from_patterns(translation_root, &settings.exclude_patterns)
    }

    /// Creates a new matcher from raw exclude patterns.
    pub fn from_patterns(
        translation_root: PathBuf,
        exclude_patterns: &[String],
    ) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| {
                MatcherError::InvalidExcludePattern { pattern: pattern.clone(), source }
            })?;
            builder.add(glob);
        }

        Ok(Self { translation_root, exclude_set: builder.build()? })
    }

    /// Matcher that excludes nothing.
    #[must_use]
    pub fn empty(translation_root: PathBuf) -> Self {
        Self { translation_root, exclude_set: GlobSet::empty() }
    }

    #[must_use]
    pub fn translation_root(&self) -> &Path {
        &self.translation_root
    }

    /// Returns true if the file matches one of the exclude patterns.
    ///
    /// Paths outside the translation root are never excluded.
    #[must_use]
    pub fn is_excluded(&self, absolute_path: &Path) -> bool {
        let Some(relative_path) = absolute_path.strip_prefix(&self.translation_root).ok() else {
            return false;
        };

        self.is_excluded_relative(relative_path)
    }

    /// Returns true if the file matches one of the exclude patterns.
    ///
    /// The path must be relative to the translation root.
    #[must_use]
    pub fn is_excluded_relative(&self, relative_path: &Path) -> bool {
        self.exclude_set.is_match(relative_path)
    }
}
