//! Battle session: the single owner of all per-battle state.
//!
//! [`Battle`] holds the roster, readiness queue, effect registry and skill
//! point pool. There is no global state; everything a battle needs lives
//! here and is passed explicitly. Turn sequencing primitives live in
//! [`turns`]; the async state machine that drives them is in the runtime.

pub mod accumulator;
pub mod queue;
pub mod turns;

pub use accumulator::{BarAdvance, fast_forward, per_tick, ticks_until_ready};
pub use queue::ReadinessQueue;
pub use turns::{ActiveTurn, BattleOutcome, TurnEnd, TurnError, TurnStart};

use crate::action::ActionError;
use crate::combat::{self, DamageReport, DamageType};
use crate::config::BattleConfig;
use crate::effect::{BarrierBehavior, BarrierConfig, BarrierId, DestroyReport, EffectRegistry};
use crate::resources::{SkillPointPool, effective_cost};
use crate::state::{Combatant, CombatantId, Position, PresetActionValue, Roster};

/// All state of one battle.
#[derive(Clone, Debug)]
pub struct Battle {
    pub(crate) config: BattleConfig,
    pub(crate) roster: Roster,
    pub(crate) queue: ReadinessQueue,
    pub(crate) effects: EffectRegistry,
    pub(crate) skill_points: SkillPointPool,
    pub(crate) turn: Option<ActiveTurn>,
    pub(crate) running: bool,
}

impl Battle {
    /// Creates an idle battle. Call [`start`](Self::start) to begin.
    pub fn new(config: BattleConfig, combatants: impl IntoIterator<Item = Combatant>) -> Self {
        let skill_points = SkillPointPool::from_config(&config);
        Self {
            config,
            roster: combatants.into_iter().collect(),
            queue: ReadinessQueue::new(),
            effects: EffectRegistry::new(),
            skill_points,
            turn: None,
            running: false,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.get(id)
    }

    /// Direct access for positioning and other out-of-scope systems.
    ///
    /// Stat changes made here bypass the effect bookkeeping.
    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.roster.get_mut(id)
    }

    pub fn queue(&self) -> &ReadinessQueue {
        &self.queue
    }

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    pub fn skill_points(&self) -> &SkillPointPool {
        &self.skill_points
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The combatant whose turn is in progress. `None` once the turn was ended.
    pub fn acting(&self) -> Option<CombatantId> {
        self.turn.filter(|t| !t.ending).map(|t| t.unit)
    }

    /// Resets every combatant and fills the queue with the deployed ones.
    pub fn start(&mut self) {
        self.effects.clear(&mut self.roster);
        self.queue.clear();
        self.skill_points.reset();
        self.turn = None;

        for combatant in self.roster.iter_mut() {
            combatant.reset_for_battle();
            if combatant.deployed && combatant.is_alive() {
                self.queue.add(combatant.id, combatant.action_value);
            }
        }
        self.queue.sort(&self.roster);
        self.running = true;
    }

    /// Stops the battle and leaves queue, registry and pool in their reset state.
    pub fn end(&mut self) {
        self.queue.clear();
        self.effects.clear(&mut self.roster);
        self.skill_points.reset();
        self.turn = None;
        self.running = false;
    }

    /// Brings a new combatant onto the field mid-battle.
    pub fn deploy(&mut self, mut combatant: Combatant) {
        combatant.reset_for_battle();
        combatant.deployed = true;
        let id = combatant.id;
        let action_value = combatant.action_value;
        self.effects.forget(id, &mut self.roster);
        self.roster.insert(combatant);
        if self.running {
            self.queue.add(id, action_value);
            self.queue.sort(&self.roster);
        }
    }

    /// Takes a combatant off the field without killing it.
    pub fn withdraw(&mut self, id: CombatantId) -> bool {
        let Some(combatant) = self.roster.get_mut(id) else {
            return false;
        };
        combatant.deployed = false;
        self.queue.remove(id)
    }

    // ------------------------------------------------------------------
    // Resource economy
    // ------------------------------------------------------------------

    /// Discount granted to the acting combatant by the effects affecting it.
    pub fn acting_discount(&self) -> u32 {
        self.acting()
            .and_then(|id| self.roster.get(id))
            .map(|c| self.effects.cost_discount_for(c))
            .unwrap_or(0)
    }

    /// Cost the acting combatant actually pays for `requested`.
    pub fn effective_cost(&self, requested: u32) -> u32 {
        effective_cost(requested, self.acting_discount())
    }

    pub fn can_spend(&self, requested: u32) -> bool {
        self.skill_points
            .can_spend(requested, self.acting_discount())
    }

    pub fn try_spend(&mut self, requested: u32) -> bool {
        let discount = self.acting_discount();
        self.skill_points.try_spend(requested, discount)
    }

    /// External grant of skill points. Returns the amount actually added.
    pub fn add_skill_points(&mut self, amount: u32) -> u32 {
        self.skill_points.add(amount)
    }

    // ------------------------------------------------------------------
    // Damage / heal
    // ------------------------------------------------------------------

    /// Applies damage to a living target.
    ///
    /// A killed target stays in the queue until the next cleanup sweep but
    /// is skipped by dispatch and excluded from targeting.
    pub fn cause_damage(
        &mut self,
        target: CombatantId,
        source: Option<CombatantId>,
        amount: u32,
        damage_type: DamageType,
    ) -> Result<DamageReport, ActionError> {
        let target = self
            .roster
            .get_mut(target)
            .ok_or(ActionError::InvalidTarget(target))?;
        combat::cause_damage(target, source, amount, damage_type)
    }

    pub fn heal(&mut self, target: CombatantId, amount: i64) -> Result<u32, ActionError> {
        let target = self
            .roster
            .get_mut(target)
            .ok_or(ActionError::InvalidTarget(target))?;
        combat::heal(target, amount)
    }

    // ------------------------------------------------------------------
    // Effects
    // ------------------------------------------------------------------

    /// Effect factory for skill logic: creates a barrier owned by `owner`.
    pub fn create_effect<B>(
        &mut self,
        behavior: B,
        position: Position,
        owner: CombatantId,
        configure: impl FnOnce(&mut BarrierConfig),
    ) -> Result<BarrierId, ActionError>
    where
        B: BarrierBehavior + 'static,
    {
        let owner = self
            .roster
            .get(owner)
            .ok_or(ActionError::InvalidTarget(owner))?;
        self.effects.spawn(behavior, position, owner, configure)
    }

    pub fn remove_effect(&mut self, id: BarrierId) -> Option<DestroyReport> {
        self.effects.remove(id, &mut self.roster)
    }

    /// Observation point: re-evaluates all barriers against the roster.
    pub fn refresh_effects(&mut self) -> Vec<DestroyReport> {
        self.effects.refresh(&mut self.roster)
    }

    // ------------------------------------------------------------------
    // Extra turns
    // ------------------------------------------------------------------

    /// Registers a preset action value overriding `target`'s post-turn value.
    pub fn set_preset(
        &mut self,
        target: CombatantId,
        value: u64,
        extra: bool,
    ) -> Result<(), ActionError> {
        let target = self
            .roster
            .living_mut(target)
            .ok_or(ActionError::InvalidTarget(target))?;
        target.preset = Some(PresetActionValue { value, extra });
        Ok(())
    }

    /// Grants `target` an immediate extra turn after its current one.
    pub fn grant_extra_turn(&mut self, target: CombatantId) -> Result<(), ActionError> {
        self.set_preset(target, self.config.readiness_threshold, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::StatAura;
    use crate::state::Side;
    use crate::stats::{BaseStats, Bonus, Stat};

    fn unit(id: u32, side: Side, speed: i32) -> Combatant {
        Combatant::new(
            CombatantId(id),
            side,
            Position::new(id as i32, 0),
            BaseStats::new(1000, 100, 80, 30, 20, speed),
        )
    }

    #[test]
    fn start_resets_and_enqueues_deployed_units() {
        let mut reserve = unit(3, Side::Ally, 100).in_reserve();
        reserve.action_value = 55;
        let mut battle = Battle::new(
            BattleConfig::new(),
            [unit(1, Side::Ally, 100), unit(2, Side::Enemy, 100), reserve],
        );

        battle.start();

        assert!(battle.is_running());
        assert_eq!(battle.queue().len(), 2);
        assert!(!battle.queue().contains(CombatantId(3)));
        assert_eq!(battle.combatant(CombatantId(3)).unwrap().action_value, 0);
        assert_eq!(battle.skill_points().current(), 3);
    }

    #[test]
    fn spend_uses_acting_combatant_discount() {
        let mut battle = Battle::new(
            BattleConfig::new().with_skill_points(1, 5),
            [unit(1, Side::Ally, 100), unit(2, Side::Enemy, 100)],
        );
        battle.start();
        battle
            .create_effect(
                StatAura::new("focus"),
                Position::new(1, 0),
                CombatantId(1),
                |c| {
                    c.radius(0).cost_discount(1);
                },
            )
            .unwrap();

        // Nobody acting: no discount.
        assert_eq!(battle.effective_cost(2), 2);
        assert!(!battle.can_spend(2));

        battle.turn = Some(ActiveTurn {
            unit: CombatantId(1),
            extra: false,
            ending: false,
        });
        assert_eq!(battle.effective_cost(2), 1);
        assert!(battle.try_spend(2));
        assert_eq!(battle.skill_points().current(), 0);
        assert_eq!(battle.effective_cost(0), 0);
    }

    #[test]
    fn end_leaves_reset_state() {
        let mut battle = Battle::new(
            BattleConfig::new(),
            [unit(1, Side::Ally, 100), unit(2, Side::Enemy, 100)],
        );
        battle.start();
        battle
            .create_effect(
                StatAura::new("banner").with(Stat::Attack, Bonus::flat(10)),
                Position::ORIGIN,
                CombatantId(1),
                |c| {
                    c.radius(10);
                },
            )
            .unwrap();
        battle.refresh_effects();
        battle.try_spend(2);
        assert_eq!(battle.combatant(CombatantId(2)).unwrap().battle.attack, 110);

        battle.end();

        assert!(!battle.is_running());
        assert!(battle.queue().is_empty());
        assert!(battle.effects().is_empty());
        assert_eq!(battle.skill_points().current(), 3);
        assert_eq!(battle.combatant(CombatantId(2)).unwrap().battle.attack, 100);
    }

    #[test]
    fn deploy_and_withdraw_update_queue() {
        let mut battle = Battle::new(BattleConfig::new(), [unit(1, Side::Ally, 100)]);
        battle.start();

        battle.deploy(unit(5, Side::Enemy, 100));
        assert!(battle.queue().contains(CombatantId(5)));

        assert!(battle.withdraw(CombatantId(5)));
        assert!(!battle.queue().contains(CombatantId(5)));
        assert!(!battle.combatant(CombatantId(5)).unwrap().deployed);
        assert!(!battle.withdraw(CombatantId(42)));
    }

    #[test]
    fn redeploying_a_buffed_unit_does_not_drift() {
        let mut battle = Battle::new(
            BattleConfig::new(),
            [unit(1, Side::Ally, 100), unit(2, Side::Ally, 100)],
        );
        battle.start();
        battle
            .create_effect(
                StatAura::new("banner").with(Stat::Attack, Bonus::flat(10)),
                Position::ORIGIN,
                CombatantId(1),
                |c| {
                    c.radius(10);
                },
            )
            .unwrap();
        battle.refresh_effects();
        assert_eq!(battle.combatant(CombatantId(2)).unwrap().battle.attack, 110);

        battle.withdraw(CombatantId(2));
        battle.deploy(unit(2, Side::Ally, 100));
        battle.withdraw(CombatantId(2));
        battle.refresh_effects();

        assert_eq!(battle.combatant(CombatantId(2)).unwrap().battle.attack, 100);

        battle.deploy(unit(2, Side::Ally, 100));
        battle.refresh_effects();
        battle.refresh_effects();
        assert_eq!(battle.combatant(CombatantId(2)).unwrap().battle.attack, 110);
    }

    #[test]
    fn withdrawing_the_owner_ends_its_finite_barriers() {
        let mut battle = Battle::new(
            BattleConfig::new(),
            [unit(1, Side::Ally, 100), unit(2, Side::Ally, 100)],
        );
        battle.start();
        battle
            .create_effect(
                StatAura::new("banner").with(Stat::Attack, Bonus::flat(10)),
                Position::ORIGIN,
                CombatantId(1),
                |c| {
                    c.radius(10).duration(2);
                },
            )
            .unwrap();
        battle.refresh_effects();

        battle.withdraw(CombatantId(1));
        let destroyed = battle.refresh_effects();

        assert_eq!(destroyed.len(), 1);
        assert!(battle.effects().is_empty());
        assert_eq!(battle.combatant(CombatantId(2)).unwrap().battle.attack, 100);
    }

    #[test]
    fn damage_and_heal_reject_unknown_targets() {
        let mut battle = Battle::new(BattleConfig::new(), [unit(1, Side::Ally, 100)]);
        assert_eq!(
            battle.cause_damage(CombatantId(9), None, 10, DamageType::True),
            Err(ActionError::InvalidTarget(CombatantId(9)))
        );
        assert_eq!(
            battle.heal(CombatantId(9), 10),
            Err(ActionError::InvalidTarget(CombatantId(9)))
        );
    }
}
