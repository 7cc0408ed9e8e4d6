//! Error types for Trellis.

use std::fmt;

use trellis_core::DocumentError;

/// The main error type for toolbar operations.
///
/// Widget configs are deliberately never validated, so errors arise only
/// from structural misuse of the element tree (stale ids, appending to a
/// non-container).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarError {
    /// Document-related error.
    Document(DocumentError),
}

impl fmt::Display for ToolbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(err) => write!(f, "Document error: {err}"),
        }
    }
}

impl std::error::Error for ToolbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Document(err) => Some(err),
        }
    }
}

impl From<DocumentError> for ToolbarError {
    fn from(err: DocumentError) -> Self {
        Self::Document(err)
    }
}

/// A specialized Result type for toolbar operations.
pub type Result<T> = std::result::Result<T, ToolbarError>;
