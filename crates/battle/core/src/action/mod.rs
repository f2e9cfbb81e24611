//! Actions a unit controller can submit for the acting combatant.
//!
//! Controllers choose; the engine validates and applies. Validation covers
//! every target and the skill point cost before anything is mutated, so a
//! rejected action never consumes the turn.

mod error;
mod execute;

use std::sync::Arc;

pub use error::ActionError;
pub use execute::ActionReport;

use crate::combat::DamageType;
use crate::effect::{BarrierBehavior, BarrierConfig, BarrierId};
use crate::state::{CombatantId, Position};
use crate::stats::Stat;

/// What the acting combatant does with its turn.
#[derive(Clone, Debug)]
pub enum Action {
    /// Ends the turn without doing anything.
    Pass,
    /// Physical hit for the attacker's battle attack. A hit that is not
    /// avoided refills one skill point for the pool side.
    BasicAttack { target: CombatantId },
    /// Spends skill points and applies a list of effects.
    Skill(SkillAction),
}

impl Action {
    /// Short label used in logs and events.
    pub fn label(&self) -> String {
        match self {
            Action::Pass => "pass".to_string(),
            Action::BasicAttack { target } => format!("basic_attack -> {target}"),
            Action::Skill(skill) => format!("skill:{}", skill.name),
        }
    }
}

/// A skill activation.
#[derive(Clone, Debug)]
pub struct SkillAction {
    pub name: String,
    /// Requested cost before effect discounts.
    pub cost: u32,
    pub effects: Vec<SkillEffect>,
}

impl SkillAction {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            effects: Vec::new(),
        }
    }

    pub fn with(mut self, effect: SkillEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// One step of a skill, applied in order.
#[derive(Clone, Debug)]
pub enum SkillEffect {
    /// Damage scaled by a percentage of one of the caster's battle stats.
    Damage {
        target: CombatantId,
        scale: Stat,
        percent: i32,
        damage_type: DamageType,
    },
    Heal {
        target: CombatantId,
        amount: u32,
    },
    SpawnBarrier {
        behavior: Arc<dyn BarrierBehavior>,
        position: Position,
        config: BarrierConfig,
    },
    /// Explicitly destroys a barrier, triggering its terminal side effect.
    RemoveBarrier { barrier: BarrierId },
    /// Puts the target back at the front of the queue after its current (or
    /// next) turn; the resulting turn is an extra turn.
    GrantExtraTurn { target: CombatantId },
    GrantAvoidCharges { target: CombatantId, charges: u32 },
    RestoreSkillPoints { amount: u32 },
}
