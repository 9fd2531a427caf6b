//! Error types for the data layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used by every `DataLayer` operation.
pub type Result<T> = std::result::Result<T, DataLayerError>;

/// Failures reported by a `DataLayer`.
///
/// Serializable so that recorded failures replay as the same variant.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum DataLayerError {
    /// No todo is stored under the given id.
    #[error("Todo not found: {0}")]
    TodoNotFound(String),

    /// Anything else: poisoned state, generator collisions, corrupt replays.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DataLayerError {
    /// Short machine-readable name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TodoNotFound(_) => "todo_not_found",
            Self::Internal(_) => "internal",
        }
    }

    /// Returns `true` for [`DataLayerError::TodoNotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TodoNotFound(_))
    }
}
