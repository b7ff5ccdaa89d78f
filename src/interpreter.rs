//! Interpretation of constrained natural-language queries.
//!
//! A query is lowercased and then checked, in order, for:
//! 1. Conflicting length bounds (a lower-bound phrase together with an
//!    upper-bound phrase). Such a query yields nothing at all.
//! 2. The entries of [`RULES`], where the first matching rule alone decides
//!    the predicates. Rules further down the table are never consulted once
//!    an earlier one has matched, even if it produced no predicate.
//!
//! A query that matches no rule has an empty predicate set and therefore
//! selects every stored string.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::construct::StringRecord;
use crate::error::{Result, StringKeeperError};
use crate::persist::RecordStore;
use crate::predicate::{Predicate, PredicateSet};

lazy_static! {
    static ref LOWER_BOUND: Regex = Regex::new(r"longer than|more than").unwrap();
    static ref UPPER_BOUND: Regex = Regex::new(r"shorter than|less than").unwrap();
}

/// One entry of the rule table. Both functions receive the lowercased query.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub predicates: fn(&str) -> Vec<Predicate>,
}

/// Rules in priority order, first match wins.
pub static RULES: [Rule; 5] = [
    Rule {
        name: "single word palindrome",
        matches: |q| q.contains("single word") && q.contains("palindrom"),
        predicates: |_| vec![Predicate::WordCount(1), Predicate::IsPalindrome(true)],
    },
    Rule {
        name: "longer than ten",
        matches: |q| q.contains("longer than 10"),
        predicates: |_| vec![Predicate::MinLength(11)],
    },
    Rule {
        name: "containing letter",
        matches: |q| q.contains("containing the letter"),
        predicates: |q| match letter_after(q) {
            Some(letter) => vec![Predicate::ContainsCharacter(letter)],
            None => vec![],
        },
    },
    Rule {
        name: "palindrome with first vowel",
        matches: |q| q.contains("palindrom") && q.contains("first vowel"),
        predicates: |_| {
            vec![
                Predicate::IsPalindrome(true),
                Predicate::ContainsCharacter("a".to_string()),
            ]
        },
    },
    Rule {
        name: "palindrome",
        matches: |q| q.contains("palindrom"),
        predicates: |_| vec![Predicate::IsPalindrome(true)],
    },
];

// The first word following the first occurrence of "letter", if any.
fn letter_after(query: &str) -> Option<String> {
    query
        .split("letter")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_string)
}

/// The outcome of interpreting one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The query exactly as given, casing included.
    pub original: String,
    pub predicates: PredicateSet,
    /// Set when the query asks for both a lower and an upper length bound.
    pub conflict: bool,
    /// Name of the rule that decided the predicates.
    pub rule: Option<&'static str>,
}

pub fn parse(query: &str) -> ParsedQuery {
    let lowered = query.to_lowercase();
    let mut parsed = ParsedQuery {
        original: query.to_string(),
        predicates: PredicateSet::new(),
        conflict: false,
        rule: None,
    };
    if LOWER_BOUND.is_match(&lowered) && UPPER_BOUND.is_match(&lowered) {
        parsed.conflict = true;
        return parsed;
    }
    if let Some(rule) = RULES.iter().find(|rule| (rule.matches)(&lowered)) {
        parsed.predicates = (rule.predicates)(&lowered).into();
        parsed.rule = Some(rule.name);
    }
    parsed
}

/// A parsed query together with the strings it selected.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub parsed: ParsedQuery,
    pub records: Vec<StringRecord>,
}
impl Interpretation {
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Parses `query` and evaluates the resulting conjunction against `store`.
///
/// Fails with [`StringKeeperError::SemanticConflict`] when the query contains
/// contradictory length bounds; the store is not consulted in that case.
pub fn interpret(store: &dyn RecordStore, query: &str) -> Result<Interpretation> {
    let parsed = parse(query);
    if parsed.conflict {
        debug!(query, "conflicting length bounds");
        return Err(StringKeeperError::SemanticConflict);
    }
    debug!(query, rule = parsed.rule, predicates = parsed.predicates.len(), "query interpreted");
    let records = store.filter(&parsed.predicates)?;
    Ok(Interpretation { parsed, records })
}
