// Integration tests for emoticon replacement

use emodex::{filter_with_emoticons, Catalog, EmojiProvider, EmoticonReplacer};

// ============ Exact Replacement Tests ============

#[test]
fn test_single_emoticon() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("Hej :D"), "Hej 😃");
}

#[test]
fn test_emoticon_alone() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons(":D"), "😃");
}

#[test]
fn test_multiple_emoticons() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons(":D :D :)"), "😃 😃 😊");
}

#[test]
fn test_alias_variants_of_one_record() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("Hej :-D och =D"), "Hej 😃 och 😃");
}

#[test]
fn test_empty_input() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons(""), "");
}

#[test]
fn test_unknown_emoticon_untouched() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("Hej :G"), "Hej :G");
}

#[test]
fn test_text_without_emoticons() {
    let provider = EmojiProvider::new().unwrap();
    let text = "The quick brown fox jumps over the lazy dog";
    assert_eq!(provider.replace_emoticons(text), text);
}

#[test]
fn test_emoticons_are_case_sensitive() {
    let provider = EmojiProvider::new().unwrap();
    // ":d" is not an alias, only ":D" is
    assert_eq!(provider.replace_emoticons("Hej :d"), "Hej :d");
}

// ============ Boundary Tests ============

#[test]
fn test_embedded_occurrence_not_replaced() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("Hello:Dorothy"), "Hello:Dorothy");
}

#[test]
fn test_embedded_and_standalone_mixed() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("Hi:Dog goes :D"), "Hi:Dog goes 😃");
}

#[test]
fn test_glued_on_either_side() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("x:D"), "x:D");
    assert_eq!(provider.replace_emoticons(":Dx"), ":Dx");
}

#[test]
fn test_adjacent_pair_not_replaced() {
    let provider = EmojiProvider::new().unwrap();
    // No whitespace between the two occurrences, so neither is standalone
    assert_eq!(provider.replace_emoticons(":D:D"), ":D:D");
}

#[test]
fn test_tab_and_newline_count_as_boundaries() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("a\t:D\n:)"), "a\t😃\n😊");
}

#[test]
fn test_multibyte_neighbor() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("é:D é :D"), "é:D é 😃");
}

#[test]
fn test_parenthesized_emoticon_not_replaced() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("(:D)"), "(:D)");
}

#[test]
fn test_url_survives() {
    let provider = EmojiProvider::new().unwrap();
    // ":/" inside the scheme separator is glued to surrounding text
    assert_eq!(
        provider.replace_emoticons("see https://example.com :/"),
        "see https://example.com 😕"
    );
}

// ============ Metacharacter Tests ============

#[test]
fn test_caret_underscore_alias() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("yay ^_^"), "yay 😄");
}

#[test]
fn test_open_paren_alias() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("(: hello"), "😊 hello");
}

#[test]
fn test_backslash_alias() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("ugh :-\\"), "ugh 😕");
}

#[test]
fn test_bracket_alias() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("coffee c[_] time"), "coffee ☕ time");
}

#[test]
fn test_dollar_and_pipe_aliases() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons(":$ and :|"), "😳 and 😐");
}

#[test]
fn test_angle_bracket_heart_aliases() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("<3 </3"), "❤️ 💔");
}

#[test]
fn test_kaomoji_alias() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("bear ʕ•ᴥ•ʔ"), "bear 🐻");
}

#[test]
fn test_digit_paren_alias_respects_boundaries() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("8) ok"), "😎 ok");
    // "8)" glued after a digit stays untouched
    assert_eq!(provider.replace_emoticons("call 128) today"), "call 128) today");
}

// ============ Ordering Tests ============

#[test]
fn test_substring_alias_tiebreak() {
    let provider = EmojiProvider::new().unwrap();
    // ":(" is owned by an earlier record than ">:(" but the embedded
    // occurrence inside ">:(" fails the boundary check
    assert_eq!(provider.replace_emoticons(">:( :("), "😠 🙁");
}

#[test]
fn test_angry_alias_alone() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons(">:("), "😠");
}

#[test]
fn test_overlapping_wave_aliases() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("o/ \\o/"), "👋 🙌");
}

// ============ Count Lockstep Tests ============

#[test]
fn test_three_occurrences_three_replacements() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons("-_- -_- -_-"), "😑 😑 😑");
}

#[test]
fn test_ten_occurrences() {
    let provider = EmojiProvider::new().unwrap();
    let input = vec![":)"; 10].join(" ");
    let expected = vec!["😊"; 10].join(" ");

    assert_eq!(provider.replace_emoticons(&input), expected);
}

#[test]
fn test_interleaved_aliases() {
    let provider = EmojiProvider::new().unwrap();
    assert_eq!(provider.replace_emoticons(":D :) :D :) :D"), "😃 😊 😃 😊 😃");
}

// ============ Filter Tests ============

#[test]
fn test_filter_real_catalog() {
    let catalog = Catalog::new().unwrap();
    let filtered = filter_with_emoticons(catalog.records());

    assert!(!filtered.is_empty());
    assert!(filtered.len() < catalog.len());
    for record in &filtered {
        assert!(record.has_emoticons(), "{} carries no aliases", record.emoji);
    }
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog = Catalog::new().unwrap();
    let filtered = filter_with_emoticons(catalog.records());

    let expected: Vec<&str> = catalog
        .records()
        .iter()
        .filter(|r| r.has_emoticons())
        .map(|r| r.emoji.as_str())
        .collect();
    let actual: Vec<&str> = filtered.iter().map(|r| r.emoji.as_str()).collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_replacer_compiles_every_alias() {
    let catalog = Catalog::new().unwrap();
    let filtered = filter_with_emoticons(catalog.records());
    let replacer = EmoticonReplacer::new(&filtered).unwrap();

    // Every filtered record carries at least one alias
    assert!(replacer.matcher_count() >= filtered.len());
    assert_eq!(replacer.replace_all("Hej :D"), "Hej 😃");
}
