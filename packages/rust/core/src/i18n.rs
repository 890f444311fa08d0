//! Translation catalog for user-visible strings.

use std::collections::BTreeMap;

use postseries_shared::{AppConfig, TEXT_DOMAIN};

/// Msgid → translation lookup for the `post-series-manager` text domain.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Catalog from an explicit set of translations.
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Catalog from the `[translations]` config section.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.translations.clone())
    }

    /// Text domain the catalog belongs to.
    pub fn domain(&self) -> &'static str {
        TEXT_DOMAIN
    }

    /// Translated text for `msgid`, or `msgid` itself when untranslated.
    pub fn translate(&self, msgid: &str) -> String {
        self.entries
            .get(msgid)
            .filter(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}
