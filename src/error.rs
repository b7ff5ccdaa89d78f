use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringKeeperError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Data corruption: {message}")]
    DataCorruption { message: String },
    #[error("Execution error: {0}")]
    Execution(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
    // client errors, their messages are returned verbatim in responses
    #[error("Missing '{0}' field")]
    MissingField(&'static str),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Value must be a string")]
    NotAString,
    #[error("Invalid {0} value")]
    InvalidParameter(&'static str),
    #[error("Query parameter is required")]
    MissingQuery,
    #[error("Query parsed but resulted in conflicting filters")]
    SemanticConflict,
    #[error("String already exists in the system")]
    AlreadyExists,
    #[error("String does not exist in the system")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StringKeeperError>;

// Helper conversions
impl From<rusqlite::Error> for StringKeeperError {
    fn from(e: rusqlite::Error) -> Self { Self::Persistence(e.to_string()) }
}

impl From<::config::ConfigError> for StringKeeperError {
    fn from(e: ::config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

impl<T> From<std::sync::PoisonError<T>> for StringKeeperError {
    fn from(e: std::sync::PoisonError<T>) -> Self { Self::Lock(e.to_string()) }
}
