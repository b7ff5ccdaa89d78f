//! Field-level conditions on stored strings and their conjunction.
//!
//! A [`PredicateSet`] is what both the structured listing and the natural
//! language interpreter hand to a [`crate::persist::RecordStore`]. It is always
//! a conjunction; there is no way to express a disjunction.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, StringKeeperError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    IsPalindrome(bool),
    /// Length (in characters) is at least the operand.
    MinLength(i64),
    /// Length (in characters) is at most the operand.
    MaxLength(i64),
    WordCount(i64),
    /// Case-sensitive substring of the value.
    ContainsCharacter(String),
}

impl Predicate {
    /// The name used for this predicate in query parameters and responses.
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::IsPalindrome(_) => "is_palindrome",
            Predicate::MinLength(_) => "min_length",
            Predicate::MaxLength(_) => "max_length",
            Predicate::WordCount(_) => "word_count",
            Predicate::ContainsCharacter(_) => "contains_character",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Builds the conjunction from the query parameters of a listing request.
    ///
    /// `is_palindrome` only takes effect for `true` or `false` (any casing), other
    /// values are ignored. The numeric parameters must parse as integers.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        let mut set = Self::new();
        if let Some(flag) = params.get("is_palindrome") {
            match flag.to_lowercase().as_str() {
                "true" => set.push(Predicate::IsPalindrome(true)),
                "false" => set.push(Predicate::IsPalindrome(false)),
                _ => (),
            }
        }
        if let Some(n) = integer_param(params, "min_length")? {
            set.push(Predicate::MinLength(n));
        }
        if let Some(n) = integer_param(params, "max_length")? {
            set.push(Predicate::MaxLength(n));
        }
        if let Some(n) = integer_param(params, "word_count")? {
            set.push(Predicate::WordCount(n));
        }
        if let Some(fragment) = params.get("contains_character") {
            set.push(Predicate::ContainsCharacter(fragment.clone()));
        }
        Ok(set)
    }
}

fn integer_param(params: &HashMap<String, String>, name: &'static str) -> Result<Option<i64>> {
    match params.get(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| StringKeeperError::InvalidParameter(name)),
    }
}

impl From<Vec<Predicate>> for PredicateSet {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }
}

impl<'a> IntoIterator for &'a PredicateSet {
    type Item = &'a Predicate;
    type IntoIter = std::slice::Iter<'a, Predicate>;
    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}

// Serialized as `{name: operand}` in the order the predicates were added.
impl Serialize for PredicateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.predicates.len()))?;
        for predicate in &self.predicates {
            match predicate {
                Predicate::IsPalindrome(b) => map.serialize_entry(predicate.name(), b)?,
                Predicate::MinLength(n) | Predicate::MaxLength(n) | Predicate::WordCount(n) => {
                    map.serialize_entry(predicate.name(), n)?
                }
                Predicate::ContainsCharacter(s) => map.serialize_entry(predicate.name(), s)?,
            }
        }
        map.end()
    }
}
