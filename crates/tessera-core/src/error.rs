//! Error types for Tessera core.

use std::fmt;

use crate::object::ObjectError;
use crate::property::PropertyError;

/// The main error type for Tessera core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Object-related error.
    Object(ObjectError),
    /// Property-related error.
    Property(PropertyError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(err) => write!(f, "Object error: {err}"),
            Self::Property(err) => write!(f, "Property error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Object(err) => Some(err),
            Self::Property(err) => Some(err),
        }
    }
}

impl From<ObjectError> for CoreError {
    fn from(err: ObjectError) -> Self {
        Self::Object(err)
    }
}

impl From<PropertyError> for CoreError {
    fn from(err: PropertyError) -> Self {
        Self::Property(err)
    }
}

/// A specialized Result type for Tessera core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
