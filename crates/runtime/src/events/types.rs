//! Event types for different topics.

use battle_core::{
    ActionError, ActionReport, BarAdvance, BattleOutcome, CombatantId, DestroyReport,
    TurnEndEffect,
};
use serde::{Deserialize, Serialize};

/// Queue and turn sequencing events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Every queued combatant was fast-forwarded in one step.
    ActionBarAdvance(BarAdvance),

    UnitTurnStart {
        unit: CombatantId,
        extra: bool,
        skill_points_gained: u32,
    },

    UnitTurnEnd {
        unit: CombatantId,
        extra: bool,
        /// Action value after the turn's threshold and any preset were applied.
        action_value: u64,
    },
}

/// Actions and their consequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEvent {
    ActionExecuted { label: String, report: ActionReport },

    /// The controller's action failed validation; the turn stays open.
    ActionRejected {
        actor: CombatantId,
        label: String,
        error: ActionError,
        attempt: u32,
    },

    /// The controller kept submitting invalid actions and lost the turn.
    TurnForfeited {
        actor: CombatantId,
        rejections: u32,
    },

    /// A barrier's per-unit hook fired at the end of a turn.
    TurnEffect(TurnEndEffect),

    BarrierDestroyed(DestroyReport),

    /// A dead combatant was swept from the readiness queue.
    UnitDefeated { unit: CombatantId },
}

/// Battle lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    BattleStarted {
        combatants: Vec<CombatantId>,
        skill_points: u32,
    },

    BattleEnded { outcome: BattleOutcome },
}
