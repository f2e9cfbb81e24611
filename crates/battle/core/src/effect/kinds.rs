//! Stock barrier behaviors.

use crate::combat::DamageType;
use crate::state::Combatant;
use crate::stats::{Bonus, BonusStack, Stat};

use super::barrier::{AreaStrike, BarrierBehavior, UnitTurnEffect};

/// Grants a fixed set of stat bonuses to everyone it affects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatAura {
    pub name: &'static str,
    pub bonuses: Vec<(Stat, Bonus)>,
}

impl StatAura {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            bonuses: Vec::new(),
        }
    }

    pub fn with(mut self, stat: Stat, bonus: Bonus) -> Self {
        self.bonuses.push((stat, bonus));
        self
    }
}

impl BarrierBehavior for StatAura {
    fn name(&self) -> &'static str {
        self.name
    }

    fn contribution(&self, _target: &Combatant) -> BonusStack {
        let mut stack = BonusStack::new();
        stack.extend(self.bonuses.iter().copied());
        stack
    }
}

/// Heals every affected unit at the end of its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regeneration {
    /// Percentage of the unit's battle max hp restored per turn.
    pub percent_of_max_hp: u32,
}

impl BarrierBehavior for Regeneration {
    fn name(&self) -> &'static str {
        "regeneration"
    }

    fn on_unit_turn_end(&self, unit: &Combatant) -> Option<UnitTurnEffect> {
        let amount = u64::from(unit.max_hp()) * u64::from(self.percent_of_max_hp) / 100;
        Some(UnitTurnEffect::Heal(amount.min(u64::from(u32::MAX)) as u32))
    }
}

/// Burns affected units every turn and explodes when it goes away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolatileField {
    pub burn: u32,
    pub blast: u32,
}

impl BarrierBehavior for VolatileField {
    fn name(&self) -> &'static str {
        "volatile_field"
    }

    fn on_unit_turn_end(&self, _unit: &Combatant) -> Option<UnitTurnEffect> {
        (self.burn > 0).then_some(UnitTurnEffect::Damage {
            amount: self.burn,
            damage_type: DamageType::Magic,
        })
    }

    fn on_destroyed(&self) -> Option<AreaStrike> {
        Some(AreaStrike {
            amount: self.blast,
            damage_type: DamageType::Magic,
        })
    }
}
