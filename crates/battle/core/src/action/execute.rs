//! Validation and application of actions against a [`Battle`].

use crate::combat::{DamageOutcome, DamageReport, DamageType};
use crate::effect::{BarrierId, DestroyReport};
use crate::engine::Battle;
use crate::state::{Combatant, CombatantId};
use crate::stats::percent_of;

use super::{Action, ActionError, SkillAction, SkillEffect};

/// Everything an executed action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub actor: CombatantId,
    pub damage: Vec<DamageReport>,
    pub healed: Vec<(CombatantId, u32)>,
    pub barriers_spawned: Vec<BarrierId>,
    pub destroyed: Vec<DestroyReport>,
    /// Teammates that will take an extra turn after the current one.
    pub extra_turns: Vec<CombatantId>,
    pub skill_points_spent: u32,
    pub skill_points_gained: u32,
}

impl ActionReport {
    fn new(actor: CombatantId) -> Self {
        Self {
            actor,
            damage: Vec::new(),
            healed: Vec::new(),
            barriers_spawned: Vec::new(),
            destroyed: Vec::new(),
            extra_turns: Vec::new(),
            skill_points_spent: 0,
            skill_points_gained: 0,
        }
    }

    /// Combatants killed by this action, including terminal strikes.
    pub fn killed(&self) -> Vec<CombatantId> {
        let direct = self.damage.iter();
        let strikes = self.destroyed.iter().flat_map(|d| d.strikes.iter());
        direct
            .chain(strikes)
            .filter(|r| r.outcome.killed())
            .map(|r| r.target)
            .collect()
    }
}

impl Battle {
    /// Validates and applies `action` for the acting combatant.
    ///
    /// Every check runs before the first mutation, so an `Err` leaves the
    /// battle untouched and the turn open. Once validated, skill effects are
    /// applied in order; an effect whose target died earlier in the same
    /// skill is skipped.
    pub fn execute(
        &mut self,
        actor: CombatantId,
        action: &Action,
    ) -> Result<ActionReport, ActionError> {
        if self.acting() != Some(actor) {
            return Err(ActionError::NotActing(actor));
        }
        let caster = self
            .roster
            .living(actor)
            .ok_or(ActionError::InvalidTarget(actor))?;

        match action {
            Action::Pass => Ok(ActionReport::new(actor)),
            Action::BasicAttack { target } => {
                self.opponent(caster, *target)?;
                self.basic_attack(actor, *target)
            }
            Action::Skill(skill) => {
                self.validate_skill(caster, skill)?;
                Ok(self.apply_skill(actor, skill))
            }
        }
    }

    fn opponent(&self, caster: &Combatant, target: CombatantId) -> Result<(), ActionError> {
        self.roster
            .living(target)
            .filter(|t| t.side != caster.side)
            .map(|_| ())
            .ok_or(ActionError::InvalidTarget(target))
    }

    fn teammate(&self, caster: &Combatant, target: CombatantId) -> Result<(), ActionError> {
        self.roster
            .living(target)
            .filter(|t| t.side == caster.side)
            .map(|_| ())
            .ok_or(ActionError::InvalidTarget(target))
    }

    fn validate_skill(&self, caster: &Combatant, skill: &SkillAction) -> Result<(), ActionError> {
        for effect in &skill.effects {
            match effect {
                SkillEffect::Damage { target, .. } => self.opponent(caster, *target)?,
                SkillEffect::Heal { target, .. }
                | SkillEffect::GrantExtraTurn { target }
                | SkillEffect::GrantAvoidCharges { target, .. } => {
                    self.teammate(caster, *target)?
                }
                SkillEffect::RemoveBarrier { barrier } => {
                    if self.effects.get(*barrier).is_none() {
                        return Err(ActionError::UnknownBarrier(*barrier));
                    }
                }
                SkillEffect::SpawnBarrier { .. } | SkillEffect::RestoreSkillPoints { .. } => {}
            }
        }

        let required = self.effective_cost(skill.cost);
        let available = self.skill_points.current();
        if required > available {
            return Err(ActionError::InsufficientSkillPoints {
                required,
                available,
            });
        }
        Ok(())
    }

    fn basic_attack(
        &mut self,
        actor: CombatantId,
        target: CombatantId,
    ) -> Result<ActionReport, ActionError> {
        let (amount, side) = self
            .roster
            .get(actor)
            .map(|c| (c.battle.attack.max(0) as u32, c.side))
            .ok_or(ActionError::InvalidTarget(actor))?;

        let damage = self.cause_damage(target, Some(actor), amount, DamageType::Physical)?;

        let mut report = ActionReport::new(actor);
        if damage.outcome != DamageOutcome::Avoided {
            report.skill_points_gained = self.skill_points.accrue_for(side);
        }
        report.damage.push(damage);
        Ok(report)
    }

    fn apply_skill(&mut self, actor: CombatantId, skill: &SkillAction) -> ActionReport {
        let mut report = ActionReport::new(actor);

        let before = self.skill_points.current();
        // Affordability was checked during validation.
        if self.try_spend(skill.cost) {
            report.skill_points_spent = before - self.skill_points.current();
        }

        for effect in &skill.effects {
            match effect {
                SkillEffect::Damage {
                    target,
                    scale,
                    percent,
                    damage_type,
                } => {
                    let Some(caster) = self.roster.get(actor) else {
                        continue;
                    };
                    let amount = percent_of(caster.battle.get(*scale), *percent).max(0) as u32;
                    if let Ok(damage) = self.cause_damage(*target, Some(actor), amount, *damage_type)
                    {
                        report.damage.push(damage);
                    }
                }
                SkillEffect::Heal { target, amount } => {
                    if let Ok(healed) = self.heal(*target, i64::from(*amount)) {
                        report.healed.push((*target, healed));
                    }
                }
                SkillEffect::SpawnBarrier {
                    behavior,
                    position,
                    config,
                } => {
                    let Some(owner) = self.roster.get(actor) else {
                        continue;
                    };
                    if let Ok(id) =
                        self.effects
                            .spawn_shared(behavior.clone(), *position, owner, *config)
                    {
                        report.barriers_spawned.push(id);
                    }
                }
                SkillEffect::RemoveBarrier { barrier } => {
                    if let Some(destroyed) = self.remove_effect(*barrier) {
                        report.destroyed.push(destroyed);
                    }
                }
                SkillEffect::GrantExtraTurn { target } => {
                    if self.grant_extra_turn(*target).is_ok() {
                        report.extra_turns.push(*target);
                    }
                }
                SkillEffect::GrantAvoidCharges { target, charges } => {
                    if let Some(unit) = self.roster.living_mut(*target) {
                        unit.avoid_charges = unit.avoid_charges.saturating_add(*charges);
                    }
                }
                SkillEffect::RestoreSkillPoints { amount } => {
                    report.skill_points_gained += self.skill_points.add(*amount);
                }
            }
        }

        report
    }
}
