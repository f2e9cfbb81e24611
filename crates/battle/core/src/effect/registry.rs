//! Registry of live barriers.
//!
//! Contributions are written into battle stats directly rather than computed
//! on read, so the registry tracks, per (barrier, combatant) pair, the exact
//! delta it applied. Every re-evaluation reverts that delta before applying a
//! fresh one, which keeps repeated enter/leave transitions drift-free.
//!
//! # Destruction protocol
//!
//! 1. Take the barrier out of the registry (it can never run twice)
//! 2. Snapshot the currently affected set
//! 3. Revert every applied contribution
//! 4. Run the terminal strike once against the snapshot

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::action::ActionError;
use crate::combat::{self, DamageReport};
use crate::state::{Combatant, CombatantId, Position, Roster};
use crate::stats::StatDelta;

use super::barrier::{Barrier, BarrierBehavior, BarrierConfig, BarrierId, UnitTurnEffect};

/// Why a barrier went away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DestroyCause {
    /// Duration ran out on the owner's turn.
    Expired,
    /// Owner died or left while the duration was finite.
    OwnerLost,
    /// Removed explicitly by skill logic.
    Removed,
}

/// Outcome of a barrier destruction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestroyReport {
    pub barrier: BarrierId,
    pub name: String,
    pub owner: CombatantId,
    pub cause: DestroyCause,
    /// Affected set at the moment of removal.
    pub affected: Vec<CombatantId>,
    /// Terminal strike results, one per affected combatant that could be hit.
    pub strikes: Vec<DamageReport>,
}

/// A per-unit turn-end hook that fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEndEffect {
    Healed {
        barrier: BarrierId,
        unit: CombatantId,
        amount: u32,
    },
    Damaged {
        barrier: BarrierId,
        report: DamageReport,
    },
}

/// Everything the registry did at the end of one unit turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEndReport {
    pub effects: Vec<TurnEndEffect>,
    pub destroyed: Vec<DestroyReport>,
}

impl TurnEndReport {
    /// Combatants killed by turn-end hooks or terminal strikes.
    pub fn killed(&self) -> Vec<CombatantId> {
        let hooks = self.effects.iter().filter_map(|e| match e {
            TurnEndEffect::Damaged { report, .. } if report.outcome.killed() => Some(report.target),
            _ => None,
        });
        let strikes = self
            .destroyed
            .iter()
            .flat_map(|d| d.strikes.iter())
            .filter(|s| s.outcome.killed())
            .map(|s| s.target);
        hooks.chain(strikes).collect()
    }
}

/// The set of all live barriers of a battle.
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    barriers: BTreeMap<BarrierId, Barrier>,
    next_id: u32,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a barrier owned by `owner` at `position`.
    ///
    /// `configure` sets radius, team filter, duration and cost discount.
    /// Contributions are not applied until the next [`refresh`](Self::refresh).
    pub fn spawn<B>(
        &mut self,
        behavior: B,
        position: Position,
        owner: &Combatant,
        configure: impl FnOnce(&mut BarrierConfig),
    ) -> Result<BarrierId, ActionError>
    where
        B: BarrierBehavior + 'static,
    {
        let mut config = BarrierConfig::new();
        configure(&mut config);
        self.spawn_shared(Arc::new(behavior), position, owner, config)
    }

    /// Creates a barrier from an already shared behavior.
    pub fn spawn_shared(
        &mut self,
        behavior: Arc<dyn BarrierBehavior>,
        position: Position,
        owner: &Combatant,
        config: BarrierConfig,
    ) -> Result<BarrierId, ActionError> {
        if !owner.is_alive() || !owner.deployed {
            return Err(ActionError::InvalidTarget(owner.id));
        }

        let id = BarrierId(self.next_id);
        self.next_id += 1;
        self.barriers
            .insert(id, Barrier::new(id, position, owner, config, behavior));
        Ok(id)
    }

    pub fn get(&self, id: BarrierId) -> Option<&Barrier> {
        self.barriers.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Barrier> {
        self.barriers.values()
    }

    pub fn len(&self) -> usize {
        self.barriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barriers.is_empty()
    }

    /// Re-evaluates every barrier against the roster.
    ///
    /// Finite barriers whose owner is dead, withdrawn or gone from the roster
    /// are destroyed first.
    /// Remaining barriers then revert and re-apply their contribution for
    /// each combatant they currently affect, and revert it for combatants
    /// that left.
    pub fn refresh(&mut self, roster: &mut Roster) -> Vec<DestroyReport> {
        let stale: Vec<BarrierId> = self
            .barriers
            .values()
            .filter(|b| !b.is_unlimited() && !owner_on_field(roster, b.owner))
            .map(|b| b.id)
            .collect();

        let destroyed = stale
            .into_iter()
            .filter_map(|id| self.destroy(id, DestroyCause::OwnerLost, roster))
            .collect();

        for barrier in self.barriers.values_mut() {
            // Entries for combatants that vanished from the roster cannot be reverted.
            barrier.applied.retain(|id, _| roster.contains(*id));

            for combatant in roster.iter_mut() {
                if let Some(previous) = barrier.applied.remove(&combatant.id) {
                    combatant.revert_delta(&previous);
                }
                if barrier.affects(combatant) {
                    let delta = barrier
                        .behavior
                        .contribution(combatant)
                        .resolve(&combatant.base);
                    if !delta.is_zero() {
                        combatant.apply_delta(&delta);
                        barrier.applied.insert(combatant.id, delta);
                    }
                }
            }
        }

        destroyed
    }

    /// Reverts and drops every contribution currently applied to `id`.
    ///
    /// Must run before a combatant record is replaced, otherwise the next
    /// refresh reverts deltas the new record never received.
    pub fn forget(&mut self, id: CombatantId, roster: &mut Roster) {
        for barrier in self.barriers.values_mut() {
            let Some(delta) = barrier.applied.remove(&id) else {
                continue;
            };
            if let Some(combatant) = roster.get_mut(id) {
                combatant.revert_delta(&delta);
            }
        }
    }

    /// Sum of the contributions every affecting barrier would grant.
    pub fn aggregate_contribution(&self, combatant: &Combatant) -> StatDelta {
        let mut total = StatDelta::ZERO;
        for barrier in self.affecting(combatant) {
            total.merge(
                &barrier
                    .behavior
                    .contribution(combatant)
                    .resolve(&combatant.base),
            );
        }
        total
    }

    /// Sum of the cost discounts of every barrier affecting `combatant`.
    pub fn cost_discount_for(&self, combatant: &Combatant) -> u32 {
        self.affecting(combatant)
            .fold(0u32, |acc, b| acc.saturating_add(b.config.cost_discount))
    }

    /// Barriers currently affecting `combatant`, in id order.
    pub fn affecting<'a>(&'a self, combatant: &'a Combatant) -> impl Iterator<Item = &'a Barrier> {
        self.barriers.values().filter(move |b| b.affects(combatant))
    }

    /// Runs per-unit hooks for `unit`, then consumes one turn of every barrier
    /// it owns unless the turn was an extra turn.
    pub fn unit_turn_end(
        &mut self,
        unit: CombatantId,
        was_extra: bool,
        roster: &mut Roster,
    ) -> TurnEndReport {
        let mut report = TurnEndReport::default();

        for barrier in self.barriers.values() {
            let Some(target) = roster.living_mut(unit) else {
                break;
            };
            if !barrier.affects(target) {
                continue;
            }
            match barrier.behavior.on_unit_turn_end(target) {
                Some(UnitTurnEffect::Heal(amount)) => {
                    if let Ok(applied) = combat::heal(target, i64::from(amount)) {
                        report.effects.push(TurnEndEffect::Healed {
                            barrier: barrier.id,
                            unit,
                            amount: applied,
                        });
                    }
                }
                Some(UnitTurnEffect::Damage {
                    amount,
                    damage_type,
                }) => {
                    if let Ok(damage) =
                        combat::cause_damage(target, Some(barrier.owner), amount, damage_type)
                    {
                        report.effects.push(TurnEndEffect::Damaged {
                            barrier: barrier.id,
                            report: damage,
                        });
                    }
                }
                None => {}
            }
        }

        if !was_extra {
            let expired: Vec<BarrierId> = self
                .barriers
                .values_mut()
                .filter(|b| b.owner == unit)
                .filter_map(|b| b.tick_owner_turn().then_some(b.id))
                .collect();

            report.destroyed = expired
                .into_iter()
                .filter_map(|id| self.destroy(id, DestroyCause::Expired, roster))
                .collect();
        }

        report
    }

    /// Explicitly removes a barrier, running its terminal side effect.
    pub fn remove(&mut self, id: BarrierId, roster: &mut Roster) -> Option<DestroyReport> {
        self.destroy(id, DestroyCause::Removed, roster)
    }

    /// Reverts every contribution and drops all barriers without running
    /// terminal side effects. Used when a battle ends.
    pub fn clear(&mut self, roster: &mut Roster) {
        for barrier in self.barriers.values() {
            revert_all(barrier, roster);
        }
        self.barriers.clear();
    }

    fn destroy(
        &mut self,
        id: BarrierId,
        cause: DestroyCause,
        roster: &mut Roster,
    ) -> Option<DestroyReport> {
        let barrier = self.barriers.remove(&id)?;

        let affected: Vec<CombatantId> = roster
            .iter()
            .filter(|c| barrier.affects(c))
            .map(|c| c.id)
            .collect();

        revert_all(&barrier, roster);

        let mut strikes = Vec::new();
        if let Some(strike) = barrier.behavior.on_destroyed() {
            for target in &affected {
                let Some(target) = roster.get_mut(*target) else {
                    continue;
                };
                if let Ok(report) = combat::cause_damage(
                    target,
                    Some(barrier.owner),
                    strike.amount,
                    strike.damage_type,
                ) {
                    strikes.push(report);
                }
            }
        }

        Some(DestroyReport {
            barrier: barrier.id,
            name: barrier.name().to_string(),
            owner: barrier.owner,
            cause,
            affected,
            strikes,
        })
    }
}

fn owner_on_field(roster: &Roster, owner: CombatantId) -> bool {
    roster.living(owner).is_some_and(|c| c.deployed)
}

fn revert_all(barrier: &Barrier, roster: &mut Roster) {
    for (id, delta) in &barrier.applied {
        if let Some(combatant) = roster.get_mut(*id) {
            combatant.revert_delta(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::barrier::{AreaStrike, TeamFilter};
    use crate::effect::kinds::{Regeneration, StatAura, VolatileField};
    use crate::state::Side;
    use crate::stats::{BaseStats, Bonus, Stat};

    fn unit(id: u32, side: Side, x: i32) -> Combatant {
        Combatant::new(
            CombatantId(id),
            side,
            Position::new(x, 0),
            BaseStats::new(1000, 100, 50, 10, 10, 100),
        )
    }

    fn attack_aura() -> StatAura {
        StatAura::new("war_banner").with(Stat::Attack, Bonus::increased(10))
    }

    fn roster() -> Roster {
        [
            unit(1, Side::Ally, 0),
            unit(2, Side::Ally, 2),
            unit(3, Side::Enemy, 1),
            unit(4, Side::Enemy, 10),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn contribution_respects_area_and_team_filter() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();

        registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(3).filter(TeamFilter::Allies);
            })
            .unwrap();
        registry.refresh(&mut roster);

        assert_eq!(roster.get(CombatantId(1)).unwrap().battle.attack, 110);
        assert_eq!(roster.get(CombatantId(2)).unwrap().battle.attack, 110);
        assert_eq!(roster.get(CombatantId(3)).unwrap().battle.attack, 100);
        assert_eq!(roster.get(CombatantId(4)).unwrap().battle.attack, 100);
    }

    #[test]
    fn stacked_percentage_auras_add_against_base() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();

        for _ in 0..2 {
            registry
                .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                    c.radius(1);
                })
                .unwrap();
        }
        registry.refresh(&mut roster);

        let unit = roster.get(CombatantId(1)).unwrap();
        assert_eq!(unit.battle.attack, 120);
        assert_eq!(registry.aggregate_contribution(unit).get(Stat::Attack), 20);
    }

    #[test]
    fn repeated_refresh_does_not_drift() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(5);
            })
            .unwrap();

        for _ in 0..5 {
            registry.refresh(&mut roster);
        }

        assert_eq!(roster.get(CombatantId(1)).unwrap().battle.attack, 110);
    }

    #[test]
    fn entering_and_leaving_twice_restores_stats() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        let aura = StatAura::new("fortress")
            .with(Stat::Defense, Bonus::flat(15))
            .with(Stat::MaxHp, Bonus::increased(-20))
            .with(Stat::Speed, Bonus::increased(7));
        let id = registry
            .spawn(aura, Position::ORIGIN, &owner, |c| {
                c.radius(2);
            })
            .unwrap();
        let before = roster.get(CombatantId(4)).unwrap().battle;

        for _ in 0..2 {
            roster.get_mut(CombatantId(4)).unwrap().position = Position::new(1, 1);
            registry.refresh(&mut roster);
            assert!(registry.get(id).unwrap().is_applied_to(CombatantId(4)));
            assert_ne!(roster.get(CombatantId(4)).unwrap().battle, before);

            roster.get_mut(CombatantId(4)).unwrap().position = Position::new(10, 0);
            registry.refresh(&mut roster);
            assert!(!registry.get(id).unwrap().is_applied_to(CombatantId(4)));
        }

        assert_eq!(roster.get(CombatantId(4)).unwrap().battle, before);
    }

    #[test]
    fn duration_counts_owner_turns_and_skips_extra_turns() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        let id = registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(3).duration(1);
            })
            .unwrap();
        registry.refresh(&mut roster);

        // Someone else's turn does not count.
        registry.unit_turn_end(CombatantId(2), false, &mut roster);
        assert_eq!(registry.get(id).unwrap().remaining(), Some(1));

        // The owner's extra turn does not count.
        let report = registry.unit_turn_end(CombatantId(1), true, &mut roster);
        assert!(report.destroyed.is_empty());
        assert_eq!(registry.get(id).unwrap().remaining(), Some(1));

        // The owner's following ordinary turn does.
        let report = registry.unit_turn_end(CombatantId(1), false, &mut roster);
        assert_eq!(report.destroyed.len(), 1);
        assert_eq!(report.destroyed[0].cause, DestroyCause::Expired);
        assert!(registry.get(id).is_none());
        assert_eq!(roster.get(CombatantId(1)).unwrap().battle.attack, 100);
    }

    #[test]
    fn unlimited_barriers_never_expire() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        let id = registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(1);
            })
            .unwrap();

        for _ in 0..10 {
            registry.unit_turn_end(CombatantId(1), false, &mut roster);
        }
        assert_eq!(registry.get(id).unwrap().remaining(), None);

        // Unlimited barriers also survive the loss of their owner.
        roster.get_mut(CombatantId(1)).unwrap().set_hp(0);
        assert!(registry.refresh(&mut roster).is_empty());
        assert!(registry.get(id).is_some());
    }

    #[test]
    fn stale_owner_destroys_finite_barrier_and_reverts() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(3).filter(TeamFilter::Allies).duration(3);
            })
            .unwrap();
        registry.refresh(&mut roster);
        assert_eq!(roster.get(CombatantId(2)).unwrap().battle.attack, 110);

        roster.get_mut(CombatantId(1)).unwrap().set_hp(0);
        let destroyed = registry.refresh(&mut roster);

        assert_eq!(destroyed.len(), 1);
        assert_eq!(destroyed[0].cause, DestroyCause::OwnerLost);
        assert!(registry.is_empty());
        assert_eq!(roster.get(CombatantId(2)).unwrap().battle.attack, 100);
    }

    #[test]
    fn withdrawn_owner_destroys_finite_barrier() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(3).filter(TeamFilter::Allies).duration(2);
            })
            .unwrap();
        registry.refresh(&mut roster);
        assert_eq!(roster.get(CombatantId(2)).unwrap().battle.attack, 110);

        roster.get_mut(CombatantId(1)).unwrap().deployed = false;
        let destroyed = registry.refresh(&mut roster);

        assert_eq!(destroyed.len(), 1);
        assert_eq!(destroyed[0].cause, DestroyCause::OwnerLost);
        assert!(registry.is_empty());
        assert_eq!(roster.get(CombatantId(1)).unwrap().battle.attack, 100);
        assert_eq!(roster.get(CombatantId(2)).unwrap().battle.attack, 100);
    }

    #[test]
    fn reserve_owner_cannot_spawn() {
        let mut registry = EffectRegistry::new();
        let owner = unit(1, Side::Ally, 0).in_reserve();

        let result = registry.spawn(attack_aura(), Position::ORIGIN, &owner, |_| {});

        assert_eq!(result, Err(ActionError::InvalidTarget(CombatantId(1))));
        assert!(registry.is_empty());
    }

    #[test]
    fn forget_reverts_and_drops_applied_delta() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        let id = registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(3).filter(TeamFilter::Allies);
            })
            .unwrap();
        registry.refresh(&mut roster);

        registry.forget(CombatantId(2), &mut roster);

        assert!(!registry.get(id).unwrap().is_applied_to(CombatantId(2)));
        assert_eq!(roster.get(CombatantId(2)).unwrap().battle.attack, 100);
        assert!(registry.get(id).unwrap().is_applied_to(CombatantId(1)));
    }

    #[test]
    fn terminal_strike_hits_affected_set_once() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        let id = registry
            .spawn(
                VolatileField { burn: 0, blast: 110 },
                Position::ORIGIN,
                &owner,
                |c| {
                    c.radius(3).filter(TeamFilter::Enemies);
                },
            )
            .unwrap();

        let report = registry.remove(id, &mut roster).unwrap();

        assert_eq!(report.cause, DestroyCause::Removed);
        assert_eq!(report.affected, vec![CombatantId(3)]);
        assert_eq!(report.strikes.len(), 1);
        // 110 magic damage against 10 magic defense.
        assert_eq!(roster.get(CombatantId(3)).unwrap().hp(), 901);
        assert_eq!(roster.get(CombatantId(4)).unwrap().hp(), 1000);

        assert!(registry.remove(id, &mut roster).is_none());
        assert_eq!(roster.get(CombatantId(3)).unwrap().hp(), 901);
    }

    #[test]
    fn turn_end_hook_heals_only_affected_unit() {
        let mut roster = roster();
        roster.get_mut(CombatantId(2)).unwrap().set_hp(500);
        roster.get_mut(CombatantId(4)).unwrap().set_hp(500);
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        registry
            .spawn(
                Regeneration {
                    percent_of_max_hp: 10,
                },
                Position::ORIGIN,
                &owner,
                |c| {
                    c.radius(3);
                },
            )
            .unwrap();

        let report = registry.unit_turn_end(CombatantId(2), false, &mut roster);
        assert_eq!(roster.get(CombatantId(2)).unwrap().hp(), 600);
        assert!(matches!(
            report.effects.as_slice(),
            [TurnEndEffect::Healed { amount: 100, .. }]
        ));

        registry.unit_turn_end(CombatantId(4), false, &mut roster);
        assert_eq!(roster.get(CombatantId(4)).unwrap().hp(), 500);
    }

    #[test]
    fn lethal_strike_is_reported_as_kill() {
        let mut roster = roster();
        roster.get_mut(CombatantId(3)).unwrap().set_hp(5);
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        registry
            .spawn(
                VolatileField { burn: 0, blast: 50 },
                Position::ORIGIN,
                &owner,
                |c| {
                    c.radius(3).filter(TeamFilter::Enemies).duration(1);
                },
            )
            .unwrap();

        let report = registry.unit_turn_end(CombatantId(1), false, &mut roster);
        assert_eq!(report.killed(), vec![CombatantId(3)]);
    }

    #[test]
    fn cost_discount_sums_affecting_barriers() {
        let roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        for discount in [1, 2] {
            registry
                .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                    c.radius(1).cost_discount(discount);
                })
                .unwrap();
        }

        assert_eq!(
            registry.cost_discount_for(roster.get(CombatantId(1)).unwrap()),
            3
        );
        assert_eq!(
            registry.cost_discount_for(roster.get(CombatantId(2)).unwrap()),
            0
        );
    }

    #[test]
    fn clear_reverts_without_terminal_effects() {
        let mut roster = roster();
        let mut registry = EffectRegistry::new();
        let owner = roster.get(CombatantId(1)).unwrap().clone();
        registry
            .spawn(attack_aura(), Position::ORIGIN, &owner, |c| {
                c.radius(5);
            })
            .unwrap();
        registry
            .spawn(VolatileField { burn: 0, blast: 999 }, Position::ORIGIN, &owner, |c| {
                c.radius(5);
            })
            .unwrap();
        registry.refresh(&mut roster);

        registry.clear(&mut roster);

        assert!(registry.is_empty());
        assert!(roster.iter().all(|c| c.battle.attack == 100 && c.hp() == 1000));
    }

    #[test]
    fn dead_owner_cannot_spawn() {
        let mut registry = EffectRegistry::new();
        let owner = unit(9, Side::Ally, 0).with_hp(0);

        let result = registry.spawn(attack_aura(), Position::ORIGIN, &owner, |_| {});
        assert_eq!(result, Err(ActionError::InvalidTarget(CombatantId(9))));
    }

    #[test]
    fn volatile_field_reports_blast() {
        let strike = VolatileField { burn: 1, blast: 2 }.on_destroyed();
        assert_eq!(
            strike,
            Some(AreaStrike {
                amount: 2,
                damage_type: crate::combat::DamageType::Magic
            })
        );
    }
}
