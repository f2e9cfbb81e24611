//! Healing.

use crate::action::ActionError;
use crate::state::Combatant;

/// Restore hp to `target`, returning the amount actually applied.
///
/// Negative requests count as zero and the result never exceeds the
/// target's battle max hp, so the returned value may be smaller than
/// requested. Dead targets cannot be healed.
pub fn heal(target: &mut Combatant, amount: i64) -> Result<u32, ActionError> {
    if !target.is_alive() {
        return Err(ActionError::InvalidTarget(target.id));
    }

    let requested = amount.clamp(0, i64::from(u32::MAX)) as u32;
    let before = target.hp();
    target.set_hp(before.saturating_add(requested));

    Ok(target.hp() - before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatantId, Position, Side};
    use crate::stats::BaseStats;

    fn wounded(hp: u32) -> Combatant {
        Combatant::new(
            CombatantId(3),
            Side::Ally,
            Position::ORIGIN,
            BaseStats::new(200, 10, 10, 10, 10, 100),
        )
        .with_hp(hp)
    }

    #[test]
    fn heal_is_clamped_to_max_hp() {
        let mut c = wounded(190);
        assert_eq!(heal(&mut c, 50), Ok(10));
        assert_eq!(c.hp(), 200);
    }

    #[test]
    fn heal_applies_full_amount_when_room() {
        let mut c = wounded(100);
        assert_eq!(heal(&mut c, 50), Ok(50));
        assert_eq!(c.hp(), 150);
    }

    #[test]
    fn negative_heal_is_a_no_op() {
        let mut c = wounded(100);
        assert_eq!(heal(&mut c, -30), Ok(0));
        assert_eq!(c.hp(), 100);
    }

    #[test]
    fn dead_target_cannot_be_healed() {
        let mut c = wounded(0);
        assert!(heal(&mut c, 50).is_err());
        assert_eq!(c.hp(), 0);
    }
}
