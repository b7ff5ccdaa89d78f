use stringkeeper::construct::StringRecord;
use stringkeeper::properties::{compute, digest, is_palindrome};

#[test]
fn digest_is_stable_sha256() {
    let first = digest("hello world");
    assert_eq!(first, digest("hello world"));
    assert_eq!(
        first,
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(first.len(), 64);
    assert_ne!(first, digest("hello World"));
}

#[test]
fn palindrome_ignores_case_only() {
    assert!(is_palindrome("Racecar"));
    assert!(is_palindrome(""));
    assert!(is_palindrome("a"));
    // whitespace and punctuation are significant
    assert!(!is_palindrome("nurses run"));
    assert!(is_palindrome("step on no pets"));
}

#[test]
fn palindrome_is_symmetric() {
    for value in ["abc", "Abba", "level", "Was it a car", "xy yx", "12321", "ab"] {
        let reversed: String = value.chars().rev().collect();
        assert_eq!(is_palindrome(value), is_palindrome(&reversed), "{value}");
    }
}

#[test]
fn counts_are_code_points() {
    let properties = compute("héllo wörld");
    assert_eq!(properties.length, 11);
    assert_eq!(properties.word_count, 2);
    // h é l o ' ' w ö r d
    assert_eq!(properties.unique_characters, 9);
    assert_eq!(properties.character_frequency_map[&'l'], 3);
    assert_eq!(properties.character_frequency_map[&' '], 1);
}

#[test]
fn word_count_discards_empty_tokens() {
    assert_eq!(compute("  two \t\n words  ").word_count, 2);
    assert_eq!(compute("").word_count, 0);
    assert_eq!(compute("   ").word_count, 0);
}

#[test]
fn unique_characters_are_case_sensitive() {
    let properties = compute("aA");
    assert_eq!(properties.unique_characters, 2);
    assert!(properties.is_palindrome);
}

#[test]
fn frequency_covers_every_character() {
    let properties = compute("a, a!");
    let total: usize = properties.character_frequency_map.values().sum();
    assert_eq!(total, properties.length);
    assert_eq!(properties.character_frequency_map[&'a'], 2);
    assert_eq!(properties.character_frequency_map[&','], 1);
    assert_eq!(properties.character_frequency_map[&'!'], 1);
}

#[test]
fn record_serializes_with_digest_as_id() {
    let record = StringRecord::new("abba".to_string());
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], json["properties"]["sha256_hash"]);
    assert_eq!(json["value"], "abba");
    assert_eq!(json["properties"]["length"], 4);
    assert_eq!(json["properties"]["is_palindrome"], true);
    assert_eq!(json["properties"]["unique_characters"], 2);
    assert_eq!(json["properties"]["word_count"], 1);
    assert_eq!(json["properties"]["character_frequency_map"]["a"], 2);
    assert_eq!(json["properties"]["character_frequency_map"]["b"], 2);
    assert!(json["created_at"].is_string());
}
