//! Damage calculation and application.

use crate::action::ActionError;
use crate::state::{Combatant, CombatantId};
use crate::stats::BattleStats;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type for mitigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageType {
    /// Mitigated by battle defense.
    Physical,
    /// Mitigated by battle magic defense.
    Magic,
    /// Ignores all mitigation.
    True,
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate mitigated damage against the target's battle stats.
///
/// # Formula
///
/// ```text
/// True     => amount
/// Physical => amount × (1 − defense × 0.01)
/// Magic    => amount × (1 − magic_defense × 0.01)
/// ```
///
/// The result is rounded to the nearest integer and floored at zero, so a
/// defense of 100 or more nullifies the hit and negative defense amplifies it.
pub fn mitigate(amount: u32, damage_type: DamageType, target: &BattleStats) -> u32 {
    let defense = match damage_type {
        DamageType::True => return amount,
        DamageType::Physical => target.defense,
        DamageType::Magic => target.magic_defense,
    };

    let scaled = f64::from(amount) * (1.0 - f64::from(defense) * 0.01);
    scaled.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// What happened to a single damage instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// A guaranteed-avoid charge was consumed; no hp was lost.
    Avoided,
    /// Damage landed.
    Dealt { amount: u32, killed: bool },
}

impl DamageOutcome {
    pub fn killed(&self) -> bool {
        matches!(self, DamageOutcome::Dealt { killed: true, .. })
    }

    pub fn dealt(&self) -> u32 {
        match self {
            DamageOutcome::Avoided => 0,
            DamageOutcome::Dealt { amount, .. } => *amount,
        }
    }
}

/// Record of a resolved damage instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    pub source: Option<CombatantId>,
    pub target: CombatantId,
    pub damage_type: DamageType,
    pub outcome: DamageOutcome,
}

/// Apply damage from `source` to `target`.
///
/// A dead target is rejected without mutation. If the target holds a
/// guaranteed-avoid charge, one charge is consumed and the hit is avoided.
/// Otherwise the mitigated amount is subtracted from hp (floored at zero);
/// `killed` signals that the caller must take the target out of the queue.
pub fn cause_damage(
    target: &mut Combatant,
    source: Option<CombatantId>,
    amount: u32,
    damage_type: DamageType,
) -> Result<DamageReport, ActionError> {
    if !target.is_alive() {
        return Err(ActionError::InvalidTarget(target.id));
    }

    let outcome = if target.avoid_charges > 0 {
        target.avoid_charges -= 1;
        DamageOutcome::Avoided
    } else {
        let dealt = mitigate(amount, damage_type, &target.battle);
        target.set_hp(target.hp().saturating_sub(dealt));
        DamageOutcome::Dealt {
            amount: dealt,
            killed: !target.is_alive(),
        }
    };

    Ok(DamageReport {
        source,
        target: target.id,
        damage_type,
        outcome,
    })
}
