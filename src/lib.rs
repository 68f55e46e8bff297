//! locale-translator
//!
//! ロケール対応のメッセージ翻訳ライブラリ。
//!
//! Resolves `(locale, key)` pairs to messages with a single-hop fallback
//! locale and `{name}` placeholder substitution. Two backends implement the
//! [`Translator`] contract:
//!
//! - [`MemoryTranslator`]: messages registered at runtime;
//! - [`FileTranslator`]: a directory of per-locale JSON files aggregated into
//!   one document at load time.
//!
//! ```
//! use std::collections::HashMap;
//! use locale_translator::{Translator, new_memory_translator};
//!
//! let translator = new_memory_translator("en");
//! translator.register("en", "greeting", "Hello {name}!");
//!
//! let placeholders = HashMap::from([("name".to_string(), "Ada".to_string())]);
//! assert_eq!(translator.translate("fr", "greeting", &placeholders), "Hello Ada!");
//! assert_eq!(translator.resolve("fr", "missing"), "");
//! ```

pub mod config;
pub mod file;
pub mod memory;
pub mod placeholder;
pub mod translatable;
pub mod translator;

mod test_utils;

pub use file::{
    FileTranslator,
    LoadError,
};
pub use memory::MemoryTranslator;
pub use translatable::{
    NoOverride,
    Translatable,
};
pub use translator::{
    Translator,
    TranslatorError,
    from_settings,
    new_file_translator,
    new_memory_translator,
};
