//! Error types for the ranking store.

use rankboard_types::{EntrantId, InvalidRating};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by the registry and ranking view.
///
/// All of these are deterministic usage errors; none is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entrant with this identifier.
    #[error("entrant not found: {0}")]
    NotFound(EntrantId),

    /// Rating outside the accepted range; nothing was written.
    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),

    /// Aggregate statistics requested on a registry with no entrants.
    #[error("registry is empty")]
    EmptyRegistry,
}
