// used to compute the digest that identifies a string
use sha2::{Digest, Sha256};
// sorted so that the serialized map is stable
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Properties derived from a string, all computed in one go by [`compute`].
///
/// A "character" is a Unicode code point (`char`), never a grapheme cluster,
/// so `"e\u{301}"` has a length of two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Lowercase hex SHA-256 of the UTF-8 encoding of `value`.
pub fn digest(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

/// Case-insensitive palindrome check over code points.
pub fn is_palindrome(value: &str) -> bool {
    let folded: Vec<char> = value.to_lowercase().chars().collect();
    folded.iter().eq(folded.iter().rev())
}

pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for c in value.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}

pub fn compute(value: &str) -> Properties {
    let character_frequency_map = character_frequency(value);
    Properties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        // distinct code points, case-sensitive
        unique_characters: character_frequency_map.len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: digest(value),
        character_frequency_map,
    }
}
