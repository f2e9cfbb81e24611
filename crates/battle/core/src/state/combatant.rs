//! Combatant record: identity, stats, hp and scheduling state.

use crate::stats::{BaseStats, BattleStats, StatDelta};

use super::{CombatantId, Position, Side};

/// Action value registered to override a combatant's post-turn action value.
///
/// Used to grant an immediate extra turn: setting `value` to the readiness
/// threshold puts the combatant straight back in front of the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetActionValue {
    pub value: u64,
    /// Marks the turn produced by this preset as an extra turn.
    pub extra: bool,
}

/// A single participant of a battle.
///
/// Only the battle stats feed combat math. They are reset from the base
/// stats when the battle starts and afterwards change only through effect
/// deltas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: CombatantId,
    pub side: Side,
    pub position: Position,
    pub base: BaseStats,
    pub battle: BattleStats,
    hp: u32,

    /// Accumulated action value. Reaching the readiness threshold makes the
    /// combatant eligible to act.
    pub action_value: u64,
    pub preset: Option<PresetActionValue>,
    /// Set when the next turn must be treated as an extra turn.
    pub next_turn_extra: bool,
    /// Remaining guaranteed-avoid charges.
    pub avoid_charges: u32,
    /// False for reserves that are part of the roster but not on the field.
    pub deployed: bool,
}

impl Combatant {
    pub fn new(id: CombatantId, side: Side, position: Position, base: BaseStats) -> Self {
        let battle = BattleStats::from_base(&base);
        Self {
            id,
            side,
            position,
            base,
            battle,
            hp: battle.max_hp.max(0) as u32,
            action_value: 0,
            preset: None,
            next_turn_extra: false,
            avoid_charges: 0,
            deployed: true,
        }
    }

    /// Builder: marks the combatant as held in reserve.
    pub fn in_reserve(mut self) -> Self {
        self.deployed = false;
        self
    }

    /// Builder: starts with the given hp (clamped to the battle maximum).
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp());
        self
    }

    /// Restores the combatant to its battle-start state.
    pub fn reset_for_battle(&mut self) {
        self.battle = BattleStats::from_base(&self.base);
        self.hp = self.max_hp();
        self.action_value = 0;
        self.preset = None;
        self.next_turn_extra = false;
        self.avoid_charges = 0;
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Battle max hp as an unsigned value (negative maxima count as zero).
    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.battle.max_hp.max(0) as u32
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Sets hp, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp());
    }

    /// Applies an effect delta to the battle stats, keeping hp within the new maximum.
    pub fn apply_delta(&mut self, delta: &StatDelta) {
        delta.apply_to(&mut self.battle);
        self.clamp_hp();
    }

    /// Reverts a previously applied effect delta.
    pub fn revert_delta(&mut self, delta: &StatDelta) {
        delta.revert_from(&mut self.battle);
        self.clamp_hp();
    }

    fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.max_hp());
    }
}
