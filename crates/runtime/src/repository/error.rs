//! Error types raised by repository implementations.

use thiserror::Error;

use super::DuelId;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duel repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duel {0} already exists")]
    AlreadyExists(DuelId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
