//! Error types for turn resolution.

use crate::error::{DuelError, ErrorSeverity};
use crate::state::{PlayerId, ResourceKind};

/// Reasons a turn submission is rejected. The input state is never modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("duel is already finished, {winner} won")]
    DuelFinished { winner: PlayerId },

    #[error("submitted {submitted} actions, at most {max} are allowed per turn")]
    TooManyActions { submitted: usize, max: usize },

    #[error("not enough {resource}: action needs {required}, {available} available")]
    ResourceUnderflow {
        resource: ResourceKind,
        required: i32,
        available: i32,
    },
}

impl DuelError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Rejected
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuelFinished { .. } => "TURN_DUEL_FINISHED",
            Self::TooManyActions { .. } => "TURN_TOO_MANY_ACTIONS",
            Self::ResourceUnderflow { .. } => "TURN_RESOURCE_UNDERFLOW",
        }
    }
}
