//! Errors raised while validating or executing an action.

use crate::effect::BarrierId;
use crate::error::{BattleError, ErrorSeverity};
use crate::state::CombatantId;

/// Reasons an action is rejected.
///
/// Every variant is raised before any state is mutated, so a rejected action
/// leaves the acting combatant's turn open for another attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("combatant {0} is missing, dead, or not a valid target")]
    InvalidTarget(CombatantId),

    #[error("combatant {0} is not the acting combatant")]
    NotActing(CombatantId),

    #[error("{0} does not exist")]
    UnknownBarrier(BarrierId),

    #[error("skill costs {required} skill points but only {available} are available")]
    InsufficientSkillPoints { required: u32, available: u32 },
}

impl BattleError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTarget(_)
            | Self::UnknownBarrier(_)
            | Self::InsufficientSkillPoints { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::NotActing(_) => ErrorSeverity::Validation,
        }
    }

    fn subject(&self) -> Option<CombatantId> {
        match self {
            Self::InvalidTarget(id) | Self::NotActing(id) => Some(*id),
            Self::UnknownBarrier(_) | Self::InsufficientSkillPoints { .. } => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "ACTION_INVALID_TARGET",
            Self::NotActing(_) => "ACTION_NOT_ACTING",
            Self::UnknownBarrier(_) => "ACTION_UNKNOWN_BARRIER",
            Self::InsufficientSkillPoints { .. } => "ACTION_INSUFFICIENT_SKILL_POINTS",
        }
    }
}
