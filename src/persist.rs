// used for persistence
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, OptionalExtension, Row};
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use tracing::{debug, info};

use crate::construct::StringRecord;
use crate::error::{Result, StringKeeperError};
use crate::predicate::{Predicate, PredicateSet};
use crate::properties::Properties;

/// Storage of analyzed strings, keyed by digest and addressable by value.
///
/// Implementations are shared between request handlers, so they must be safe
/// to call from several threads at once. Uniqueness of both value and digest
/// has to be enforced atomically by `insert_if_absent`: two racing inserts of
/// the same value end with one success and one [`StringKeeperError::AlreadyExists`].
pub trait RecordStore: Send + Sync {
    fn insert_if_absent(&self, record: &StringRecord) -> Result<()>;
    fn find_by_value(&self, value: &str) -> Result<StringRecord>;
    fn delete_by_value(&self, value: &str) -> Result<()>;
    /// All records satisfying every predicate, in creation order.
    fn filter(&self, predicates: &PredicateSet) -> Result<Vec<StringRecord>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceMode {
    InMemory,
    File(String),
}

const SELECT_RECORD: &str = "
    select Value,
           Length,
           IsPalindrome,
           UniqueCharacters,
           WordCount,
           Digest,
           CharacterFrequency,
           CreatedAt
      from StringRecord
";

// ------------- Persistence -------------
pub struct Persistor {
    db: Mutex<Connection>,
}
impl Persistor {
    pub fn new(mode: PersistenceMode) -> Result<Self> {
        let connection = match &mode {
            PersistenceMode::InMemory => Connection::open_in_memory()?,
            PersistenceMode::File(path) => Connection::open(path)?,
        };
        // The "STRICT" keyword introduced in 3.37.0 breaks JDBC connections, which makes
        // debugging using an external tool like DBeaver impossible
        connection.execute_batch(
            "
            create table if not exists StringRecord (
                Digest text not null,
                Value text not null,
                Length integer not null,
                IsPalindrome integer not null,
                UniqueCharacters integer not null,
                WordCount integer not null,
                CharacterFrequency text not null,
                CreatedAt text not null,
                constraint referenceable_Digest primary key (
                    Digest
                ),
                constraint unique_Value unique (
                    Value
                )
            );-- STRICT;
            ",
        )?;
        info!(?mode, "persistence ready");
        Ok(Self {
            db: Mutex::new(connection),
        })
    }
    pub fn count(&self) -> Result<usize> {
        let db = self.db.lock()?;
        let count = db.query_row("select count(*) from StringRecord", [], |r| r.get(0))?;
        Ok(count)
    }
}

impl RecordStore for Persistor {
    fn insert_if_absent(&self, record: &StringRecord) -> Result<()> {
        let properties = record.properties();
        let frequency = serde_json::to_string(&properties.character_frequency_map)
            .map_err(|e| StringKeeperError::Persistence(e.to_string()))?;
        let db = self.db.lock()?;
        let outcome = db
            .prepare_cached(
                "
                insert into StringRecord (
                    Digest,
                    Value,
                    Length,
                    IsPalindrome,
                    UniqueCharacters,
                    WordCount,
                    CharacterFrequency,
                    CreatedAt
                ) values (?, ?, ?, ?, ?, ?, ?, ?)
            ",
            )?
            .execute(params![
                record.digest(),
                record.value(),
                properties.length,
                properties.is_palindrome,
                properties.unique_characters,
                properties.word_count,
                frequency,
                record.created_at(),
            ]);
        match outcome {
            Ok(_) => Ok(()),
            // either the digest or the value is already kept
            Err(rusqlite::Error::SqliteFailure(failure, _))
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                debug!(digest = record.digest(), "insert rejected by uniqueness constraint");
                Err(StringKeeperError::AlreadyExists)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_value(&self, value: &str) -> Result<StringRecord> {
        let db = self.db.lock()?;
        let stored = db
            .prepare_cached(&format!("{SELECT_RECORD} where Value = ?"))?
            .query_row(params![value], StoredRecord::read)
            .optional()?;
        stored.ok_or(StringKeeperError::NotFound)?.restore()
    }

    fn delete_by_value(&self, value: &str) -> Result<()> {
        let db = self.db.lock()?;
        let deleted = db
            .prepare_cached("delete from StringRecord where Value = ?")?
            .execute(params![value])?;
        match deleted {
            0 => Err(StringKeeperError::NotFound),
            _ => Ok(()),
        }
    }

    fn filter(&self, predicates: &PredicateSet) -> Result<Vec<StringRecord>> {
        let mut clauses = Vec::with_capacity(predicates.len());
        let mut operands = Vec::with_capacity(predicates.len());
        for predicate in predicates {
            let (clause, operand) = match predicate {
                Predicate::IsPalindrome(b) => ("IsPalindrome = ?", Value::Integer(i64::from(*b))),
                Predicate::MinLength(n) => ("Length >= ?", Value::Integer(*n)),
                Predicate::MaxLength(n) => ("Length <= ?", Value::Integer(*n)),
                Predicate::WordCount(n) => ("WordCount = ?", Value::Integer(*n)),
                // instr is case-sensitive, unlike like
                Predicate::ContainsCharacter(s) => ("instr(Value, ?) > 0", Value::Text(s.clone())),
            };
            clauses.push(clause);
            operands.push(operand);
        }
        let sql = if clauses.is_empty() {
            format!("{SELECT_RECORD} order by rowid")
        } else {
            format!("{SELECT_RECORD} where {} order by rowid", clauses.join(" and "))
        };
        let db = self.db.lock()?;
        let mut statement = db.prepare_cached(&sql)?;
        let stored = statement
            .query_map(params_from_iter(operands.iter()), StoredRecord::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        stored.into_iter().map(StoredRecord::restore).collect()
    }
}

// A row as it sits in the database, before the frequency map is decoded.
struct StoredRecord {
    value: String,
    length: usize,
    is_palindrome: bool,
    unique_characters: usize,
    word_count: usize,
    digest: String,
    frequency: String,
    created_at: DateTime<Utc>,
}
impl StoredRecord {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            value: row.get(0)?,
            length: row.get(1)?,
            is_palindrome: row.get(2)?,
            unique_characters: row.get(3)?,
            word_count: row.get(4)?,
            digest: row.get(5)?,
            frequency: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
    fn restore(self) -> Result<StringRecord> {
        let character_frequency_map = serde_json::from_str(&self.frequency).map_err(|e| {
            StringKeeperError::DataCorruption {
                message: format!("character frequency of '{}': {}", self.value, e),
            }
        })?;
        let properties = Properties {
            length: self.length,
            is_palindrome: self.is_palindrome,
            unique_characters: self.unique_characters,
            word_count: self.word_count,
            sha256_hash: self.digest,
            character_frequency_map,
        };
        Ok(StringRecord::restore(self.value, properties, self.created_at))
    }
}
