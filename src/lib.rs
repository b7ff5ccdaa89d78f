//! Stringkeeper – a small service that analyzes strings and keeps them around.
//!
//! Every string submitted is turned into a [`construct::StringRecord`] carrying
//! properties derived from it once and for all:
//! * its length and number of distinct characters (Unicode code points),
//! * whether it reads the same backwards, ignoring case,
//! * its number of whitespace-separated words,
//! * a frequency map of its characters,
//! * its SHA-256 digest, which also serves as its identity.
//!
//! Records are immutable. They can be created, fetched or deleted by value, and
//! listed through a conjunction of [`predicate::Predicate`]s. Those predicates
//! come either from structured query parameters or from a constrained natural
//! language query handled by the [`interpreter`].
//!
//! ## Modules
//! * [`properties`] – Pure computation of the derived properties.
//! * [`construct`] – The [`construct::StringRecord`] and its wire form.
//! * [`predicate`] – Field-level conditions and their conjunction.
//! * [`persist`] – The [`persist::RecordStore`] trait and its SQLite implementation.
//! * [`interpreter`] – Natural language queries to predicates, with conflict detection.
//! * [`server`] – The HTTP surface (axum).
//! * [`config`] – Settings from file and environment.
//!
//! ## Quick Start
//! ```
//! use stringkeeper::persist::{PersistenceMode, Persistor, RecordStore};
//! use stringkeeper::construct::StringRecord;
//! use stringkeeper::interpreter;
//! let store = Persistor::new(PersistenceMode::InMemory).unwrap();
//! store.insert_if_absent(&StringRecord::new("racecar".to_string())).unwrap();
//! store.insert_if_absent(&StringRecord::new("hello world".to_string())).unwrap();
//! let found = interpreter::interpret(&store, "all single word palindromic strings").unwrap();
//! assert_eq!(found.count(), 1);
//! assert_eq!(found.records[0].value(), "racecar");
//! ```

pub mod config;
pub mod construct;
pub mod error;
pub mod interpreter;
pub mod persist;
pub mod predicate;
pub mod properties;
pub mod server;
