//! Asynchronous abstraction for sourcing unit intent.
//!
//! Runtime users plug in [`UnitController`] implementations so a battle can
//! run with human input, scripted fixtures, or simple AI policies. Awaiting
//! the controller is the only suspension point of the battle loop.
use async_trait::async_trait;
use battle_core::{Action, Battle, CombatantId};

use super::errors::Result;

/// Trait for choosing the acting combatant's action.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Enemy AI decisions
/// - Scripted fixtures for tests
#[async_trait]
pub trait UnitController: Send + Sync {
    /// Choose an action for `actor`.
    ///
    /// `battle` is a read-only view; the scheduler validates and applies the
    /// returned action. A rejected action causes this method to be called
    /// again for the same turn.
    async fn choose_action(&self, actor: CombatantId, battle: &Battle) -> Result<Action>;
}

/// A controller that always passes.
/// Useful for testing or as a fallback.
pub struct PassController;

#[async_trait]
impl UnitController for PassController {
    async fn choose_action(&self, _actor: CombatantId, _battle: &Battle) -> Result<Action> {
        Ok(Action::Pass)
    }
}

/// Basic-attacks the living opponent with the lowest hp (lowest id on ties).
pub struct BasicAttackController;

#[async_trait]
impl UnitController for BasicAttackController {
    async fn choose_action(&self, actor: CombatantId, battle: &Battle) -> Result<Action> {
        let Some(side) = battle.combatant(actor).map(|c| c.side) else {
            return Ok(Action::Pass);
        };

        let target = battle
            .roster()
            .active_on(side.opposing())
            .min_by_key(|c| (c.hp(), c.id))
            .map(|c| c.id);

        Ok(match target {
            Some(target) => Action::BasicAttack { target },
            None => Action::Pass,
        })
    }
}
