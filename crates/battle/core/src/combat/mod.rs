//! Combat resolution.
//!
//! Pure functions that read battle stats and mutate only the target's hp and
//! avoid charges. Callers own queue bookkeeping for combatants that die.
//!
//! - `cause_damage`: avoid-charge check, mitigation, hp reduction
//! - `mitigate`: defense / magic-defense scaling
//! - `heal`: clamped hp restoration

pub mod damage;
pub mod heal;

pub use damage::{DamageOutcome, DamageReport, DamageType, cause_damage, mitigate};
pub use heal::heal;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::state::{Combatant, CombatantId, Position, Side};
    use crate::stats::{BaseStats, Stat, StatDelta};

    #[derive(Clone, Debug)]
    enum Op {
        Damage(u32, DamageType),
        Heal(i64),
        MaxHp(i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..2_000, prop_oneof![
                Just(DamageType::Physical),
                Just(DamageType::Magic),
                Just(DamageType::True),
            ])
                .prop_map(|(amount, kind)| Op::Damage(amount, kind)),
            (-500i64..2_000).prop_map(Op::Heal),
            (-800i32..800).prop_map(Op::MaxHp),
        ]
    }

    proptest! {
        #[test]
        fn hp_stays_within_bounds(
            defense in -50i32..150,
            ops in proptest::collection::vec(op(), 0..64),
        ) {
            let mut unit = Combatant::new(
                CombatantId(1),
                Side::Enemy,
                Position::ORIGIN,
                BaseStats::new(1_000, 10, 10, defense, defense, 100),
            );
            for op in ops {
                match op {
                    Op::Damage(amount, kind) => {
                        let _ = cause_damage(&mut unit, None, amount, kind);
                    }
                    Op::Heal(amount) => {
                        let _ = heal(&mut unit, amount);
                    }
                    Op::MaxHp(delta) => unit.apply_delta(&StatDelta::single(Stat::MaxHp, delta)),
                }
                prop_assert!(unit.hp() <= unit.max_hp());
            }
        }
    }
}
