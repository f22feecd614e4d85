// Emodex Replacer
// Boundary-aware emoticon-to-emoji text replacement

use crate::types::EmojiRecord;
use regex::Regex;

/// Filter a catalog down to the records carrying at least one emoticon alias
///
/// Preserves the input order. Records with an absent or empty alias list
/// are dropped.
///
/// # Example
/// ```
/// # use emodex::replacer::filter_with_emoticons;
/// # use emodex::types::{Category, EmojiRecord};
/// let records = vec![
///     EmojiRecord::new("🚀", vec!["rocket".to_string()], Category::TravelAndPlaces),
///     EmojiRecord::new("😃", vec!["smiley".to_string()], Category::SmileysAndEmotion)
///         .with_emoticons(vec![":D".to_string()]),
/// ];
/// let filtered = filter_with_emoticons(&records);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].emoji, "😃");
/// ```
pub fn filter_with_emoticons(records: &[EmojiRecord]) -> Vec<&EmojiRecord> {
    records.iter().filter(|r| r.has_emoticons()).collect()
}

/// One compiled emoticon alias and its replacement emoji
#[derive(Debug, Clone)]
struct AliasMatcher {
    pattern: Regex,
    emoji: String,
}

/// Boundary-aware emoticon replacer
///
/// Holds one compiled literal matcher per emoticon alias, in catalog order.
/// An occurrence is replaced only when standalone: preceded and followed by
/// whitespace or a string boundary, never glued to surrounding text
/// (":D" inside "Hello:Dorothy" is left alone).
#[derive(Debug, Clone)]
pub struct EmoticonReplacer {
    /// Compiled matchers, catalog order then per-record alias order
    matchers: Vec<AliasMatcher>,
}

impl EmoticonReplacer {
    /// Compile matchers for every alias in the filtered catalog
    ///
    /// Each alias is escaped before compilation, so emoticons built from
    /// regex metacharacters (":)", "^_^", ":-\\") match themselves
    /// literally.
    ///
    /// # Returns
    /// Result containing the replacer or a `regex::Error` if a pattern
    /// fails to compile
    pub fn new(filtered: &[&EmojiRecord]) -> Result<Self, regex::Error> {
        let mut matchers = Vec::new();

        for record in filtered {
            for alias in record.aliases() {
                let pattern = Regex::new(&regex::escape(alias))?;
                matchers.push(AliasMatcher {
                    pattern,
                    emoji: record.emoji.clone(),
                });
            }
        }

        Ok(Self { matchers })
    }

    /// Number of compiled alias matchers
    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }

    /// Replace every standalone emoticon occurrence with its emoji
    ///
    /// For each alias the standalone occurrence count is taken first, then
    /// that many single leftmost replacements are applied, each one
    /// re-scanning the buffer. Earlier catalog records win when occurrences
    /// contend for the same stretch of text. Text without any occurrence
    /// passes through unchanged.
    ///
    /// # Example
    /// ```
    /// # use emodex::replacer::{filter_with_emoticons, EmoticonReplacer};
    /// # use emodex::types::{Category, EmojiRecord};
    /// let records = vec![
    ///     EmojiRecord::new("😃", vec!["smiley".to_string()], Category::SmileysAndEmotion)
    ///         .with_emoticons(vec![":D".to_string()]),
    /// ];
    /// let filtered = filter_with_emoticons(&records);
    /// let replacer = EmoticonReplacer::new(&filtered).unwrap();
    /// assert_eq!(replacer.replace_all("Hej :D"), "Hej 😃");
    /// assert_eq!(replacer.replace_all("Hej :G"), "Hej :G");
    /// ```
    pub fn replace_all(&self, text: &str) -> String {
        let mut buffer = text.to_string();

        for matcher in &self.matchers {
            let occurrences = count_standalone(&matcher.pattern, &buffer);

            for _ in 0..occurrences {
                match replace_leftmost(&matcher.pattern, &buffer, &matcher.emoji) {
                    Some(next) => buffer = next,
                    None => break,
                }
            }
        }

        buffer
    }
}

/// Whether the match at `start..end` touches nothing but whitespace or
/// string boundaries on both sides
fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let clear_before = text[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace);
    let clear_after = text[end..].chars().next().map_or(true, char::is_whitespace);

    clear_before && clear_after
}

/// Count the standalone occurrences of a compiled alias in the text
///
/// Aliases never contain whitespace, so an occurrence overlapping an
/// earlier match has a non-whitespace left neighbor and is not standalone;
/// non-overlapping iteration sees every occurrence that counts.
fn count_standalone(pattern: &Regex, text: &str) -> usize {
    pattern
        .find_iter(text)
        .filter(|m| is_standalone(text, m.start(), m.end()))
        .count()
}

/// Replace the leftmost standalone occurrence, or None if there is none
fn replace_leftmost(pattern: &Regex, text: &str, emoji: &str) -> Option<String> {
    let found = pattern
        .find_iter(text)
        .find(|m| is_standalone(text, m.start(), m.end()))?;

    let mut next =
        String::with_capacity(text.len() - (found.end() - found.start()) + emoji.len());
    next.push_str(&text[..found.start()]);
    next.push_str(emoji);
    next.push_str(&text[found.end()..]);

    Some(next)
}
