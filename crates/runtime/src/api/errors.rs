//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, repositories and ownership checks so
//! clients can bubble them up with consistent context.
use duel_core::{DuelError, ErrorSeverity, PlayerId, TurnError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
use crate::repository::DuelId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} not found")]
    DuelNotFound(DuelId),

    #[error("{submitter} submitted a turn but {active} is the active player")]
    NotActivePlayer { submitter: PlayerId, active: PlayerId },

    #[error("submission targets turn {expected}, duel is at turn {actual}")]
    StaleTurn { expected: u32, actual: u32 },

    #[error("both seats are taken by {0}")]
    DuplicatePlayer(PlayerId),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("duel session lock was poisoned")]
    LockPoisoned,
}

impl DuelError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuelNotFound(_)
            | Self::NotActivePlayer { .. }
            | Self::StaleTurn { .. }
            | Self::DuplicatePlayer(_) => ErrorSeverity::Rejected,
            Self::Turn(err) => err.severity(),
            Self::Repository(_) | Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuelNotFound(_) => "RUNTIME_DUEL_NOT_FOUND",
            Self::NotActivePlayer { .. } => "RUNTIME_NOT_ACTIVE_PLAYER",
            Self::StaleTurn { .. } => "RUNTIME_STALE_TURN",
            Self::DuplicatePlayer(_) => "RUNTIME_DUPLICATE_PLAYER",
            Self::Turn(err) => err.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::LockPoisoned => "RUNTIME_LOCK_POISONED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_errors_keep_their_classification() {
        let err = RuntimeError::from(TurnError::TooManyActions {
            submitted: 9,
            max: 8,
        });
        assert_eq!(err.severity(), ErrorSeverity::Rejected);
        assert_eq!(err.error_code(), "TURN_TOO_MANY_ACTIONS");
    }

    #[test]
    fn storage_failures_are_internal() {
        let err = RuntimeError::from(RepositoryError::LockPoisoned);
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert!(!err.severity().is_retryable());
    }
}
