//! Result type and errors returned by tree queries.

/// Result represents a result where the error is of the [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error represents the ways a tree query can fail.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No node in the tree holds the requested key.
    #[error("key not found")]
    NotFound,
}
