use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::traits::Translator;

/// Strings of an experiment translated into one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    locale: String,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

impl Translation {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            strings: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Primary language subtag, `de` for `de-DE` or `de_DE`.
    fn language(&self) -> &str {
        primary_language(&self.locale)
    }
}

fn primary_language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// All translations shipped with an experiment plus the locale currently in use.
///
/// Until a locale is selected every lookup falls back to the raw key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCollection {
    translations: Vec<Translation>,
    #[serde(default)]
    selected: Option<usize>,
}

impl TranslationCollection {
    pub fn new(translations: Vec<Translation>) -> Self {
        Self {
            translations,
            selected: None,
        }
    }

    /// Parses a collection from its JSON form:
    /// `{"translations": [{"locale": "de", "strings": {"Voltage": "Spannung"}}], "selected": 0}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut collection: Self = serde_json::from_str(json)?;
        if collection
            .selected
            .is_some_and(|idx| idx >= collection.translations.len())
        {
            collection.selected = None;
        }
        Ok(collection)
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// Returns the translation currently used by `localize`.
    pub fn selected(&self) -> Option<&Translation> {
        self.selected.and_then(|idx| self.translations.get(idx))
    }

    /// Selects the first locale of `preferred` that is available. An exact locale match wins
    /// over a match on the primary language only. Returns the selected locale.
    pub fn select_language(&mut self, preferred: &[&str]) -> Option<&str> {
        self.selected = preferred.iter().find_map(|wanted| {
            self.translations
                .iter()
                .position(|t| t.locale.eq_ignore_ascii_case(wanted))
                .or_else(|| {
                    let language = primary_language(wanted);
                    self.translations
                        .iter()
                        .position(|t| t.language().eq_ignore_ascii_case(language))
                })
        });
        match self.selected() {
            Some(translation) => {
                debug!("Selected translation {}", translation.locale);
                Some(translation.locale.as_str())
            }
            None => {
                debug!("No translation matches {:?}", preferred);
                None
            }
        }
    }
}

impl Translator for TranslationCollection {
    fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        self.selected()
            .and_then(|translation| translation.get(key))
            .unwrap_or(key)
    }
}
