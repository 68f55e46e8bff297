//! Per-instance translation overrides.

/// A caller-owned value that can supply its own translation.
///
/// `Translator::resolve_struct` consults this before the backend. Returning
/// an empty string means "no override" and lets the backend answer.
///
/// # Examples
/// ```
/// use locale_translator::Translatable;
///
/// struct Product {
///     title_fr: String,
/// }
///
/// impl Translatable for Product {
///     fn get_translation(&self, locale: &str, key: &str) -> String {
///         match (locale, key) {
///             ("fr", "title") => self.title_fr.clone(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait Translatable {
    /// Translation of `key` for `locale`, or an empty string.
    fn get_translation(&self, locale: &str, key: &str) -> String;
}

/// Subject that never overrides anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOverride;

impl Translatable for NoOverride {
    fn get_translation(&self, _locale: &str, _key: &str) -> String {
        String::new()
    }
}

impl<T: Translatable + ?Sized> Translatable for &T {
    fn get_translation(&self, locale: &str, key: &str) -> String {
        (**self).get_translation(locale, key)
    }
}

impl<T: Translatable + ?Sized> Translatable for Box<T> {
    fn get_translation(&self, locale: &str, key: &str) -> String {
        (**self).get_translation(locale, key)
    }
}

impl<T: Translatable> Translatable for Option<T> {
    fn get_translation(&self, locale: &str, key: &str) -> String {
        self.as_ref().map(|inner| inner.get_translation(locale, key)).unwrap_or_default()
    }
}

/// Returns the override for `(locale, key)`, if `subject` has a non-empty one.
pub(crate) fn override_for(subject: &dyn Translatable, locale: &str, key: &str) -> Option<String> {
    let translation = subject.get_translation(locale, key);
    if translation.is_empty() { None } else { Some(translation) }
}
