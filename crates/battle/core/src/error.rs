//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g., [`ActionError`](crate::action::ActionError))
//! live next to the operations they validate. This module provides the shared
//! classification used by the runtime to decide how to react to a failure.
//!
//! None of the failures produced by the core terminate the battle loop: a
//! rejected action leaves the acting combatant's turn open, a missing
//! resource is reported as a refusal, and stale effects are expired.

use crate::state::CombatantId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the controller may retry with another action.
    ///
    /// Examples: target already dead, not enough skill points
    Recoverable,

    /// Validation error - the request itself is malformed.
    ///
    /// Examples: action submitted by a combatant that is not acting
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all battle-core errors.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the combatant the error refers to, if any.
    fn subject(&self) -> Option<CombatantId> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Used as a structured field in logs and events.
    fn error_code(&self) -> &'static str;
}
