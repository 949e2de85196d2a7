//! Error types for xmlgrove

use thiserror::Error;

/// Main error type for document model operations
#[derive(Error, Debug)]
pub enum Error {
    /// A node or attribute name does not match `[A-Za-z_:][A-Za-z0-9._:-]*`.
    ///
    /// Raised at construction and at every rename; the previous name is kept
    /// intact when a rename fails.
    #[error("invalid name: {name:?}")]
    InvalidName { name: String },

    /// No mapping is registered for the concrete type of a mapped value.
    #[error("no mapping registered for the supplied value's type")]
    MissingMapping,

    /// A registered field accessor received a value of the wrong concrete
    /// type. This signals a registry set up against the wrong type parameter.
    #[error("mapped value is not a {expected}")]
    MappingMismatch { expected: &'static str },

    /// Failure while writing a rendered document to disk.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for xmlgrove
pub type Result<T> = std::result::Result<T, Error>;
