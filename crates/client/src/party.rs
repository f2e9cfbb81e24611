//! Demo party, enemy pack and the tactic policy that drives the party.

use std::sync::Arc;

use async_trait::async_trait;
use battle_core::{
    Action, BarrierConfig, BaseStats, Battle, Bonus, Combatant, CombatantId, DamageType, Position,
    Side, SkillAction, SkillEffect, Stat, StatAura, TeamFilter, VolatileField,
};
use battle_runtime::{Result, UnitController};

pub const WARDEN: CombatantId = CombatantId(1);
pub const MAGE: CombatantId = CombatantId(2);
pub const CLERIC: CombatantId = CombatantId(3);

/// Three allies against four goblins; one goblin waits in reserve.
pub fn roster() -> Vec<Combatant> {
    vec![
        Combatant::new(
            WARDEN,
            Side::Ally,
            Position::new(0, 0),
            BaseStats::new(420, 38, 0, 35, 20, 92),
        ),
        Combatant::new(
            MAGE,
            Side::Ally,
            Position::new(-1, 1),
            BaseStats::new(240, 20, 64, 10, 25, 108),
        ),
        Combatant::new(
            CLERIC,
            Side::Ally,
            Position::new(1, 1),
            BaseStats::new(280, 22, 40, 15, 30, 101),
        ),
        goblin(10, Position::new(-1, 5), 95),
        goblin(11, Position::new(0, 6), 88),
        goblin(12, Position::new(1, 5), 99),
        goblin(13, Position::new(0, 8), 90).in_reserve(),
    ]
}

fn goblin(id: u32, position: Position, speed: i32) -> Combatant {
    Combatant::new(
        CombatantId(id),
        Side::Enemy,
        position,
        BaseStats::new(180, 42, 0, 12, 5, speed),
    )
}

/// Role-based policy for the party.
///
/// The warden keeps a defensive aura up, the mage bombards the weakest
/// goblin and the cleric patches up whoever dropped below half hp. Anything
/// the pool cannot pay for falls back to a basic attack.
pub struct TacticController;

#[async_trait]
impl UnitController for TacticController {
    async fn choose_action(&self, actor: CombatantId, battle: &Battle) -> Result<Action> {
        let Some(me) = battle.combatant(actor) else {
            return Ok(Action::Pass);
        };
        let Some(foe) = battle
            .roster()
            .active_on(me.side.opposing())
            .min_by_key(|c| (c.hp(), c.id))
        else {
            return Ok(Action::Pass);
        };

        let skill = match actor {
            WARDEN => aegis(me, battle),
            MAGE => fireball(foe, battle),
            CLERIC => mend(me, battle),
            _ => None,
        };

        Ok(skill
            .map(Action::Skill)
            .unwrap_or(Action::BasicAttack { target: foe.id }))
    }
}

fn aegis(me: &Combatant, battle: &Battle) -> Option<SkillAction> {
    let already_up = battle.effects().iter().any(|b| b.owner == me.id);
    if already_up || !battle.can_spend(2) {
        return None;
    }

    let mut config = BarrierConfig::new();
    config
        .radius(3)
        .filter(TeamFilter::Allies)
        .duration(2)
        .cost_discount(1);
    let aura = StatAura::new("aegis")
        .with(Stat::Defense, Bonus::increased(30))
        .with(Stat::MagicDefense, Bonus::flat(10));

    Some(SkillAction::new("aegis", 2).with(SkillEffect::SpawnBarrier {
        behavior: Arc::new(aura),
        position: me.position,
        config,
    }))
}

fn fireball(foe: &Combatant, battle: &Battle) -> Option<SkillAction> {
    if !battle.can_spend(2) {
        return None;
    }

    let mut config = BarrierConfig::new();
    config.radius(1).filter(TeamFilter::Enemies).duration(2);

    Some(
        SkillAction::new("fireball", 2)
            .with(SkillEffect::Damage {
                target: foe.id,
                scale: Stat::MagicAttack,
                percent: 180,
                damage_type: DamageType::Magic,
            })
            .with(SkillEffect::SpawnBarrier {
                behavior: Arc::new(VolatileField { burn: 8, blast: 25 }),
                position: foe.position,
                config,
            }),
    )
}

fn mend(me: &Combatant, battle: &Battle) -> Option<SkillAction> {
    let wounded = battle
        .roster()
        .active_on(me.side)
        .filter(|c| c.hp() * 2 < c.max_hp())
        .min_by_key(|c| (c.hp(), c.id))?;
    if !battle.can_spend(1) {
        return None;
    }

    let amount = me.battle.get(Stat::MagicAttack).max(0) as u32 * 2;
    Some(
        SkillAction::new("mend", 1)
            .with(SkillEffect::Heal {
                target: wounded.id,
                amount,
            })
            .with(SkillEffect::GrantAvoidCharges {
                target: wounded.id,
                charges: 1,
            }),
    )
}
