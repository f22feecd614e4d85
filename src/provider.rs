// Emodex Provider
// High-level API combining catalog queries and emoticon replacement

use crate::catalog::Catalog;
use crate::replacer::{filter_with_emoticons, EmoticonReplacer};
use crate::types::{Category, EmojiRecord, LookupError};

/// Emoji provider combining the indexed catalog with a precompiled
/// emoticon replacer
///
/// Construction does all the expensive work (parse, index, compile);
/// every query and replacement afterwards runs against immutable state,
/// so one provider can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct EmojiProvider {
    catalog: Catalog,
    replacer: EmoticonReplacer,
}

impl EmojiProvider {
    /// Create a provider from the embedded default catalog
    ///
    /// # Returns
    /// Result containing the provider or an error if loading or matcher
    /// compilation fails
    ///
    /// # Example
    /// ```
    /// # use emodex::provider::EmojiProvider;
    /// let provider = EmojiProvider::new().unwrap();
    /// assert_eq!(provider.replace_emoticons("Hej :D"), "Hej 😃");
    /// ```
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = Catalog::new()?;
        Self::from_catalog(catalog)
    }

    /// Create a provider over a caller-supplied catalog
    pub fn from_catalog(catalog: Catalog) -> Result<Self, Box<dyn std::error::Error>> {
        let filtered = filter_with_emoticons(catalog.records());
        let replacer = EmoticonReplacer::new(&filtered)
            .map_err(|e| format!("Failed to compile emoticon matchers: {}", e))?;

        Ok(Self { catalog, replacer })
    }

    /// All emoji records, in catalog order
    pub fn records(&self) -> &[EmojiRecord] {
        self.catalog.records()
    }

    /// All emoji strings only, in catalog order
    pub fn emojis(&self) -> Vec<&str> {
        self.catalog.emojis()
    }

    /// Full record for a tag
    pub fn record_by_tag(&self, tag: &str) -> Result<&EmojiRecord, LookupError> {
        self.catalog.record_by_tag(tag)
    }

    /// Emoji for a tag
    ///
    /// # Example
    /// ```
    /// # use emodex::provider::EmojiProvider;
    /// let provider = EmojiProvider::new().unwrap();
    /// assert_eq!(provider.emoji_by_tag("happy-face").unwrap(), "😀");
    /// ```
    pub fn emoji_by_tag(&self, tag: &str) -> Result<&str, LookupError> {
        self.catalog.emoji_by_tag(tag)
    }

    /// Records belonging to any of the given categories, in catalog order
    pub fn records_by_categories(&self, categories: &[Category]) -> Vec<&EmojiRecord> {
        self.catalog.records_by_categories(categories)
    }

    /// Emoji strings only for the given categories, in catalog order
    pub fn emojis_by_categories(&self, categories: &[Category]) -> Vec<&str> {
        self.catalog.emojis_by_categories(categories)
    }

    /// Fuzzy tag search, one emoji per matching record
    pub fn matching_emojis(&self, query: &str) -> Vec<&str> {
        self.catalog.matching_emojis(query)
    }

    /// Replace every standalone emoticon occurrence in the text
    pub fn replace_emoticons(&self, text: &str) -> String {
        self.replacer.replace_all(text)
    }

    /// Catalog statistics
    ///
    /// # Returns
    /// Tuple of (record count, distinct category count)
    pub fn stats(&self) -> (usize, usize) {
        (self.catalog.len(), self.catalog.category_count())
    }
}

impl Default for EmojiProvider {
    fn default() -> Self {
        Self::new().expect("Failed to create default provider")
    }
}
