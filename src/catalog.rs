// Emodex Catalog
// Indexed access to the emoji record collection

use crate::data::DataLoader;
use crate::types::{Category, EmojiRecord, LookupError};
use rustc_hash::FxHashMap;

/// Emoji catalog with precomputed lookup indexes
///
/// The record sequence is immutable after construction and its order is
/// meaningful: every query preserves it, and it is the tie-break whenever
/// two records claim the same tag or emoticon alias.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All emoji records, in catalog order
    records: Vec<EmojiRecord>,

    /// Tag to record position; the first record claiming a tag wins
    tag_index: FxHashMap<String, usize>,

    /// Category to record positions, in catalog order
    category_index: FxHashMap<Category, Vec<usize>>,
}

impl Catalog {
    /// Create a Catalog from the embedded default data
    ///
    /// # Returns
    /// Result containing the catalog or an error if the embedded document
    /// fails to parse
    ///
    /// # Example
    /// ```
    /// # use emodex::catalog::Catalog;
    /// let catalog = Catalog::new().unwrap();
    /// assert!(!catalog.is_empty());
    /// ```
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let records: Vec<EmojiRecord> = serde_json::from_str(DataLoader::catalog_data())
            .map_err(|e| format!("Failed to parse embedded catalog: {}", e))?;

        Ok(Self::from_records(records))
    }

    /// Create a Catalog from caller-supplied records, building the indexes
    pub fn from_records(records: Vec<EmojiRecord>) -> Self {
        let mut tag_index: FxHashMap<String, usize> = FxHashMap::default();
        let mut category_index: FxHashMap<Category, Vec<usize>> = FxHashMap::default();

        for (position, record) in records.iter().enumerate() {
            for tag in &record.tags {
                // First record in catalog order wins on duplicate tags
                tag_index.entry(tag.clone()).or_insert(position);
            }
            category_index
                .entry(record.category)
                .or_default()
                .push(position);
        }

        Self {
            records,
            tag_index,
            category_index,
        }
    }

    /// All records, in catalog order
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// All emoji strings only, in catalog order
    pub fn emojis(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.emoji.as_str()).collect()
    }

    /// Look up the full record for a tag
    ///
    /// # Example
    /// ```
    /// # use emodex::catalog::Catalog;
    /// let catalog = Catalog::new().unwrap();
    /// let record = catalog.record_by_tag("happy-face").unwrap();
    /// assert_eq!(record.emoji, "😀");
    /// ```
    pub fn record_by_tag(&self, tag: &str) -> Result<&EmojiRecord, LookupError> {
        self.tag_index
            .get(tag)
            .map(|&position| &self.records[position])
            .ok_or_else(|| LookupError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    /// Look up the emoji for a tag
    ///
    /// # Errors
    /// [`LookupError::UnknownTag`] when no record carries the tag
    pub fn emoji_by_tag(&self, tag: &str) -> Result<&str, LookupError> {
        self.record_by_tag(tag).map(|r| r.emoji.as_str())
    }

    /// Records belonging to any of the given categories, in catalog order
    ///
    /// An empty category list yields an empty result. Unknown category
    /// names never reach this method; they fail at [`Category`] parsing.
    pub fn records_by_categories(&self, categories: &[Category]) -> Vec<&EmojiRecord> {
        let mut positions: Vec<usize> = categories
            .iter()
            .filter_map(|category| self.category_index.get(category))
            .flat_map(|indexed| indexed.iter().copied())
            .collect();

        positions.sort_unstable();
        positions.dedup();

        positions
            .into_iter()
            .map(|position| &self.records[position])
            .collect()
    }

    /// Emoji strings only for the given categories, in catalog order
    pub fn emojis_by_categories(&self, categories: &[Category]) -> Vec<&str> {
        self.records_by_categories(categories)
            .into_iter()
            .map(|r| r.emoji.as_str())
            .collect()
    }

    /// Fuzzy search: emojis of records where any tag contains the query
    ///
    /// Matching is a case-insensitive substring test over tags, one result
    /// per record, in catalog order. An empty or whitespace-only query
    /// yields no matches.
    ///
    /// # Example
    /// ```
    /// # use emodex::catalog::Catalog;
    /// let catalog = Catalog::new().unwrap();
    /// assert_eq!(catalog.matching_emojis("sad"), ["😢", "😞", "😓", "😿"]);
    /// assert!(catalog.matching_emojis("").is_empty());
    /// ```
    pub fn matching_emojis(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| {
                record
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
            })
            .map(|record| record.emoji.as_str())
            .collect()
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct categories present
    pub fn category_count(&self) -> usize {
        self.category_index.len()
    }

    /// Counts of records by category
    pub fn records_count_by_category(&self) -> FxHashMap<Category, usize> {
        self.category_index
            .iter()
            .map(|(category, indexed)| (*category, indexed.len()))
            .collect()
    }
}
