use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// `delete` found no entry for the key.
    #[error("key not found: {key}")]
    NotFound { key: String },
    /// A table needs at least one bucket.
    #[error("initial bucket count must be positive")]
    InvalidCapacity,
}

pub type Result<T> = std::result::Result<T, TableError>;
