//! Error types for widget operations.

use tessera_core::{CoreError, ObjectId};

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in widget operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A position does not denote an existing element.
    #[error("index {index} is out of range for {len} element(s)")]
    OutOfRange { index: i64, len: usize },

    /// An actor is not a child of the widget.
    #[error("actor {id:?} is not a child of this widget")]
    NotFound { id: ObjectId },

    /// An error from the object or property system.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl Error {
    /// Create an out-of-range error.
    pub fn out_of_range(index: impl Into<i64>, len: usize) -> Self {
        Self::OutOfRange {
            index: index.into(),
            len,
        }
    }

    /// Create a not-found error.
    pub fn not_found(id: ObjectId) -> Self {
        Self::NotFound { id }
    }
}

impl From<tessera_core::ObjectError> for Error {
    fn from(err: tessera_core::ObjectError) -> Self {
        Self::Core(err.into())
    }
}
