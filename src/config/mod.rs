//! Translator settings: file format, loading and validation.
/// Config file loader
mod loader;
/// Translation file exclude matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_file,
    load_from_workspace,
};
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    TranslatorSettings,
    ValidationError,
};
