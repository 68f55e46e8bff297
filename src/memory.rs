//! Translator backed by explicitly registered records.

use std::sync::{
    PoisonError,
    RwLock,
};

use crate::translator::Translator;

/// A registered message. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    locale: String,
    key: String,
    message: String,
}

/// Append-only record store.
///
/// Duplicate `(locale, key)` pairs are kept; lookups return the first one
/// registered. Records are never removed.
#[derive(Debug)]
pub struct MemoryTranslator {
    /// Locale retried once on a miss.
    fallback: String,
    /// Records in registration order.
    records: RwLock<Vec<Record>>,
}

impl MemoryTranslator {
    #[must_use]
    pub fn new(fallback_locale: impl Into<String>) -> Self {
        Self { fallback: fallback_locale.into(), records: RwLock::new(Vec::new()) }
    }

    /// Number of registered records, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First message registered for exactly `(locale, key)`.
    fn find(&self, locale: &str, key: &str) -> Option<String> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records
            .iter()
            .find(|record| record.locale == locale && record.key == key)
            .map(|record| record.message.clone())
    }
}

impl Translator for MemoryTranslator {
    fn register(&self, locale: &str, key: &str, message: &str) {
        tracing::trace!(locale, key, "Registering translation");

        self.records.write().unwrap_or_else(PoisonError::into_inner).push(Record {
            locale: locale.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        });
    }

    fn resolve(&self, locale: &str, key: &str) -> String {
        if let Some(message) = self.find(locale, key) {
            return message;
        }

        // Single hop: the fallback locale is never itself substituted.
        if locale != self.fallback
            && let Some(message) = self.find(&self.fallback, key)
        {
            return message;
        }

        String::new()
    }

    fn fallback_locale(&self) -> &str {
        &self.fallback
    }
}
