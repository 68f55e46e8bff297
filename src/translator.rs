//! The translator contract shared by every backend, and backend selection.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    ConfigError,
    TranslatorSettings,
};
use crate::file::{
    FileTranslator,
    LoadError,
};
use crate::memory::MemoryTranslator;
use crate::placeholder::substitute;
use crate::translatable::{
    Translatable,
    override_for,
};

/// Resolves `(locale, key)` pairs to messages.
///
/// A miss in the requested locale is retried once in the fallback locale. A
/// miss there yields an empty string: lookups never fail, and an empty result
/// cannot be told apart from a message that is itself empty.
pub trait Translator: Send + Sync {
    /// Adds a message for `(locale, key)`. Use `{name}` placeholders for
    /// values supplied at translation time.
    ///
    /// Backends that are read-only accept the call and ignore it.
    ///
    /// ```
    /// use locale_translator::{Translator, new_memory_translator};
    ///
    /// let translator = new_memory_translator("en");
    /// translator.register("en", "welcome", "Hello {name}, welcome!");
    /// assert_eq!(translator.resolve("en", "welcome"), "Hello {name}, welcome!");
    /// ```
    fn register(&self, locale: &str, key: &str, message: &str);

    /// Message for `key` in `locale`, else in the fallback locale, else `""`.
    fn resolve(&self, locale: &str, key: &str) -> String;

    /// The locale consulted on a miss. Fixed at construction.
    fn fallback_locale(&self) -> &str;

    /// Like [`Translator::resolve`], but a non-empty translation supplied by
    /// `subject` takes precedence over the backend.
    fn resolve_struct(&self, subject: &dyn Translatable, locale: &str, key: &str) -> String {
        override_for(subject, locale, key).unwrap_or_else(|| self.resolve(locale, key))
    }

    /// Resolves the message and substitutes its `{name}` placeholders.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use locale_translator::{Translator, new_memory_translator};
    ///
    /// let translator = new_memory_translator("en");
    /// translator.register("en", "welcome", "Hello {name}!");
    ///
    /// let placeholders = HashMap::from([("name".to_string(), "John".to_string())]);
    /// assert_eq!(translator.translate("en", "welcome", &placeholders), "Hello John!");
    /// ```
    fn translate(
        &self,
        locale: &str,
        key: &str,
        placeholders: &HashMap<String, String>,
    ) -> String {
        substitute(&self.resolve(locale, key), placeholders)
    }

    /// [`Translator::resolve_struct`] followed by placeholder substitution.
    fn translate_struct(
        &self,
        subject: &dyn Translatable,
        locale: &str,
        key: &str,
        placeholders: &HashMap<String, String>,
    ) -> String {
        substitute(&self.resolve_struct(subject, locale, key), placeholders)
    }
}

/// Errors from [`from_settings`].
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Settings failed to load or validate
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Translation directory failed to aggregate
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Creates a translator backed by registered records.
#[must_use]
pub fn new_memory_translator(fallback_locale: impl Into<String>) -> Box<dyn Translator> {
    Box::new(MemoryTranslator::new(fallback_locale))
}

/// Creates a translator backed by the JSON files under `root_dir`.
///
/// # Errors
/// Returns [`LoadError`] if the tree cannot be listed or a file is unreadable
/// or not valid JSON.
pub fn new_file_translator(
    fallback_locale: impl Into<String>,
    root_dir: impl Into<PathBuf>,
) -> Result<Box<dyn Translator>, LoadError> {
    Ok(Box::new(FileTranslator::new(fallback_locale, root_dir)?))
}

/// Creates the backend described by `settings`: file-backed when
/// `translation_dir` is set, in-memory otherwise.
///
/// # Errors
/// - Invalid settings
/// - Translation directory aggregation failure
pub fn from_settings(
    settings: &TranslatorSettings,
) -> Result<Box<dyn Translator>, TranslatorError> {
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    match &settings.translation_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "Using file translator");
            Ok(Box::new(FileTranslator::with_settings(dir.clone(), settings)?))
        }
        None => {
            tracing::debug!("Using memory translator");
            Ok(new_memory_translator(settings.fallback_locale.clone()))
        }
    }
}
