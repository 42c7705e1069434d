//! Common error infrastructure for duel-core.
//!
//! Domain errors (e.g. [`crate::TurnError`], [`crate::RulesError`]) live next to
//! the code that raises them. This module only provides the shared severity
//! classification so that callers can pick a recovery strategy without
//! matching on every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Rejected**: the submission was invalid and nothing was mutated
/// - **Configuration**: the rule table or content data is inconsistent
/// - **Internal**: an invariant was broken inside the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid submission. The caller may retry with different input.
    ///
    /// Examples: duel already finished, too many actions.
    Rejected,

    /// Invalid configuration. Retrying without fixing the data will fail again.
    ///
    /// Examples: unsorted wound thresholds, faith chance above 10.
    Configuration,

    /// Unexpected state inconsistency that should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }

    /// Returns true if resubmitting different input may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on what the caller can do about it
pub trait DuelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
