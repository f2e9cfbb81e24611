use std::collections::BTreeMap;

use super::{Combatant, CombatantId, Side};

/// All combatants of a battle, keyed by id.
///
/// Backed by a `BTreeMap` so iteration order is deterministic (ascending id).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    combatants: BTreeMap<CombatantId, Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a combatant, replacing any previous entry with the same id.
    pub fn insert(&mut self, combatant: Combatant) -> Option<Combatant> {
        self.combatants.insert(combatant.id, combatant)
    }

    pub fn remove(&mut self, id: CombatantId) -> Option<Combatant> {
        self.combatants.remove(&id)
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(&id)
    }

    /// Looks up a combatant that is still alive.
    pub fn living(&self, id: CombatantId) -> Option<&Combatant> {
        self.get(id).filter(|c| c.is_alive())
    }

    pub fn living_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.get_mut(id).filter(|c| c.is_alive())
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        self.combatants.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.combatants.values_mut()
    }

    /// Living, deployed combatants of one side.
    pub fn active_on(&self, side: Side) -> impl Iterator<Item = &Combatant> {
        self.iter()
            .filter(move |c| c.side == side && c.deployed && c.is_alive())
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}

impl FromIterator<Combatant> for Roster {
    fn from_iter<T: IntoIterator<Item = Combatant>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for combatant in iter {
            roster.insert(combatant);
        }
        roster
    }
}
