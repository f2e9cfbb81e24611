//! Unified error types surfaced by the runtime API.
//!
//! Rejected actions are not errors at this level: the scheduler reports them
//! as events and keeps the turn open. Only failures that stop the battle loop
//! end up here.
use std::fmt;

use battle_core::{CombatantId, Side, TurnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} controller not set")]
    ControllerNotSet { kind: ControllerKind },

    #[error("controller failed to choose an action for {unit}: {reason}")]
    ControllerFailed { unit: CombatantId, reason: String },

    #[error("battle is already running")]
    AlreadyRunning,

    #[error(transparent)]
    Turn(#[from] TurnError),
}

/// Which controller slot a combatant is driven by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControllerKind {
    Player,
    Enemy,
}

impl ControllerKind {
    /// Allies are player-controlled, everybody else is driven by the enemy controller.
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Ally => ControllerKind::Player,
            Side::Enemy => ControllerKind::Enemy,
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ControllerKind::Player => "player",
            ControllerKind::Enemy => "enemy",
        };
        write!(f, "{}", label)
    }
}
