//! Server settings, read through the `config` crate.
//!
//! Sources, later ones overriding earlier ones:
//! * built-in defaults
//! * an optional settings file (any format `config` understands, e.g. `stringkeeper.toml`)
//! * `STRINGKEEPER_*` environment variables, e.g. `STRINGKEEPER_DATABASE=strings.db`

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::persist::PersistenceMode;

pub const DEFAULT_SETTINGS_FILE: &str = "stringkeeper";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Socket address the HTTP server binds to.
    pub address: String,
    /// SQLite file holding the strings; kept in memory when absent.
    pub database: Option<String>,
    /// Directive for `tracing_subscriber::EnvFilter`, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8000".to_string(),
            database: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// `file` is given without extension, the format is deduced from whichever file exists.
    pub fn load(file: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("STRINGKEEPER"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
    pub fn persistence_mode(&self) -> PersistenceMode {
        match &self.database {
            Some(path) => PersistenceMode::File(path.clone()),
            None => PersistenceMode::InMemory,
        }
    }
}
