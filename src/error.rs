use thiserror::Error;

/// Error type for all fallible operations in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Key not found: \"{key}\". Known keys: [{known}]")]
    KeyNotFound { key: String, known: String },

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl Error {
    pub(crate) fn key_not_found(key: impl ToString, known: Vec<String>) -> Self {
        Error::KeyNotFound {
            key: key.to_string(),
            known: known.join(", "),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
