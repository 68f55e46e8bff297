use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Locale consulted when the requested one has no entry.
    /// An empty string addresses the default (root) scope of a translation directory.
    pub fallback_locale: String,

    /// Root of the translation tree. Selects the file backend when set,
    /// the in-memory backend otherwise.
    pub translation_dir: Option<PathBuf>,

    /// Separator splitting a key into nested document segments.
    pub key_separator: String,

    /// Globs, relative to `translationDir`, of JSON files to leave out.
    pub exclude_patterns: Vec<String>,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            fallback_locale: "en".to_string(),
            translation_dir: None,
            key_separator: ".".to_string(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl TranslatorSettings {
    /// # Errors
    /// - Invalid separator
    /// - Invalid glob pattern
    /// - Empty translation directory
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if let Some(dir) = &self.translation_dir
            && dir.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "translationDir",
                "The directory cannot be empty. Please specify a path (e.g., \"locales\"), or remove this field",
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
