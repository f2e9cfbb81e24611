//! Barrier (area effect) records and the behavior trait.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::combat::DamageType;
use crate::state::{Combatant, CombatantId, Position, Side};
use crate::stats::{BonusStack, StatDelta};

/// Identifier of a live barrier within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierId(pub u32);

impl fmt::Display for BarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "barrier#{}", self.0)
    }
}

/// Which combatants a barrier can affect, relative to its owner's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamFilter {
    #[default]
    All,
    /// Same side as the owner.
    Allies,
    /// Opposite side of the owner.
    Enemies,
}

impl TeamFilter {
    pub fn matches(self, owner_side: Side, target_side: Side) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Allies => owner_side == target_side,
            TeamFilter::Enemies => owner_side != target_side,
        }
    }
}

/// Parameters chosen by the skill that creates a barrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierConfig {
    /// Area radius in tiles around the barrier position.
    pub radius: u32,
    pub filter: TeamFilter,
    /// Lifetime in owner turns; 0 means unlimited.
    pub duration: u32,
    /// Skill point discount granted to affected combatants.
    pub cost_discount: u32,
}

impl BarrierConfig {
    pub const fn new() -> Self {
        Self {
            radius: 0,
            filter: TeamFilter::All,
            duration: 0,
            cost_discount: 0,
        }
    }

    pub fn radius(&mut self, radius: u32) -> &mut Self {
        self.radius = radius;
        self
    }

    pub fn filter(&mut self, filter: TeamFilter) -> &mut Self {
        self.filter = filter;
        self
    }

    pub fn duration(&mut self, owner_turns: u32) -> &mut Self {
        self.duration = owner_turns;
        self
    }

    pub fn cost_discount(&mut self, discount: u32) -> &mut Self {
        self.cost_discount = discount;
        self
    }
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Effect a barrier applies to a unit at the end of that unit's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitTurnEffect {
    Heal(u32),
    Damage { amount: u32, damage_type: DamageType },
}

/// Damage dealt once to every affected combatant when a barrier is destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaStrike {
    pub amount: u32,
    pub damage_type: DamageType,
}

/// Polymorphic part of a barrier.
///
/// Implementations describe *what* a barrier does; the registry decides
/// *when* (area and team tests, turn bookkeeping, destruction order).
pub trait BarrierBehavior: fmt::Debug + Send + Sync {
    /// Human-readable name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Bonuses granted to an affected combatant, resolved against its base stats.
    fn contribution(&self, _target: &Combatant) -> BonusStack {
        BonusStack::new()
    }

    /// Hook run when an affected unit ends its turn (e.g., heal-over-time).
    fn on_unit_turn_end(&self, _unit: &Combatant) -> Option<UnitTurnEffect> {
        None
    }

    /// Terminal side effect run exactly once when the barrier is destroyed.
    fn on_destroyed(&self) -> Option<AreaStrike> {
        None
    }
}

/// A live barrier.
#[derive(Clone, Debug)]
pub struct Barrier {
    pub id: BarrierId,
    pub position: Position,
    /// Owner reference. The owner may die or leave; the barrier keeps working
    /// with the side captured at creation until it is evaluated as stale.
    pub owner: CombatantId,
    pub owner_side: Side,
    pub config: BarrierConfig,
    remaining: u32,
    pub(crate) behavior: Arc<dyn BarrierBehavior>,
    /// Contribution currently applied to each combatant's battle stats.
    pub(crate) applied: BTreeMap<CombatantId, StatDelta>,
}

impl Barrier {
    pub(crate) fn new(
        id: BarrierId,
        position: Position,
        owner: &Combatant,
        config: BarrierConfig,
        behavior: Arc<dyn BarrierBehavior>,
    ) -> Self {
        Self {
            id,
            position,
            owner: owner.id,
            owner_side: owner.side,
            config,
            remaining: config.duration,
            behavior,
            applied: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.behavior.name()
    }

    /// Remaining owner turns; `None` for unlimited barriers.
    pub fn remaining(&self) -> Option<u32> {
        (!self.is_unlimited()).then_some(self.remaining)
    }

    pub fn is_unlimited(&self) -> bool {
        self.config.duration == 0
    }

    /// Team filter and area test.
    pub fn affects(&self, combatant: &Combatant) -> bool {
        combatant.is_alive()
            && combatant.deployed
            && self.config.filter.matches(self.owner_side, combatant.side)
            && self
                .position
                .within_radius(combatant.position, self.config.radius)
    }

    /// Returns true if a contribution is currently applied to `id`.
    pub fn is_applied_to(&self, id: CombatantId) -> bool {
        self.applied.contains_key(&id)
    }

    /// Consumes one owner turn. Returns true when the barrier has run out.
    pub(crate) fn tick_owner_turn(&mut self) -> bool {
        if self.is_unlimited() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}
