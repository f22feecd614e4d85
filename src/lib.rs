//! # Emodex: Emoji Catalog & Emoticon Replacement
//!
//! An embedded emoji catalog with tag lookup, category listing, fuzzy search, and boundary-aware emoticon-to-emoji text replacement.
//!
//! ## Four Operations
//!
//! 1. **Tag lookup** - Exact tag to emoji (O(1) map lookup)
//!    - `emoji_by_tag("happy-face")` - returns 😀
//! 2. **Category listing** - Records for one or more categories
//!    - `records_by_categories(&[Category::Activity])`
//! 3. **Fuzzy search** - Case-insensitive substring match over tags
//!    - `matching_emojis("sad")` - every record with a matching tag
//! 4. **Replacement** - Standalone emoticons in text become emojis
//!    - `replace_emoticons("Hej :D")` - returns "Hej 😃"
//!
//! ## Emoticon Matching
//!
//! - An occurrence is replaced only when standalone: whitespace or a
//!   string boundary on both sides ("Hello:Dorothy" stays untouched)
//! - Aliases are matched literally; regex metacharacters in emoticons
//!   such as ":)" or "^_^" carry no special meaning
//! - Catalog order decides ties when aliases collide or overlap
//!
//! ## Example Usage
//!
//! ```
//! use emodex::EmojiProvider;
//!
//! let provider = EmojiProvider::new()?;
//!
//! // Emoticon replacement
//! assert_eq!(provider.replace_emoticons(":D :D :)"), "😃 😃 😊");
//!
//! // Tag lookup
//! assert_eq!(provider.emoji_by_tag("happy-face")?, "😀");
//!
//! // Fuzzy search
//! assert_eq!(provider.matching_emojis("sad"), ["😢", "😞", "😓", "😿"]);
//!
//! // Statistics
//! let (records, categories) = provider.stats();
//! assert!(records > categories);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Data Loader** - Embedded catalog document
//! - **Catalog** - Deserialized records plus tag and category indexes
//! - **Emoticon Replacer** - Compiled alias matchers and the replacement loop
//! - **EmojiProvider API** - Main entry point combining all components

pub mod catalog;
pub mod data;
pub mod provider;
pub mod replacer;
pub mod types;

// Re-export main types and functions for convenience
pub use catalog::Catalog;
pub use data::DataLoader;
pub use provider::EmojiProvider;
pub use replacer::{filter_with_emoticons, EmoticonReplacer};
pub use types::{Category, EmojiRecord, LookupError, ALL_CATEGORIES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
