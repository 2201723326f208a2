/// Lookup from raw identifiers to localized display strings.
pub trait Translator {
    /// Returns the localized string for `key`, or `key` itself when there is no translation.
    fn localize<'a>(&'a self, key: &'a str) -> &'a str;
}

impl Translator for std::collections::HashMap<String, String> {
    fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        (**self).localize(key)
    }
}
