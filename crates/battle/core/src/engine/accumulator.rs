//! Action value accumulation with bulk fast-forward.
//!
//! Instead of advancing one tick at a time until someone becomes ready, the
//! accumulator computes the minimal tick count `T` that brings at least one
//! combatant to the readiness threshold and applies `per_tick × T` to every
//! combatant in a single step. All combatants advance by the same number of
//! ticks, so the bars move in lockstep.
//!
//! Formulas:
//! - per_tick = max(1, round(speed × tick_interval))
//! - T = 0 if anyone is already ready, else min(ceil((threshold − av) / per_tick))

use crate::config::BattleConfig;
use crate::state::{Combatant, CombatantId, Roster};

/// Action value gained per tick. Zero and negative speeds still gain 1.
pub fn per_tick(speed: i32, tick_interval_secs: f64) -> u64 {
    (f64::from(speed) * tick_interval_secs).round().max(1.0) as u64
}

/// Minimal tick count until the first combatant is ready.
///
/// Returns `None` when there are no combatants, `Some(0)` when someone is
/// already at or above the threshold.
pub fn ticks_until_ready<'a>(
    combatants: impl IntoIterator<Item = &'a Combatant>,
    threshold: u64,
    tick_interval_secs: f64,
) -> Option<u64> {
    combatants
        .into_iter()
        .map(|c| {
            let missing = threshold.saturating_sub(c.action_value);
            missing.div_ceil(per_tick(c.battle.speed, tick_interval_secs))
        })
        .min()
}

/// Pre- and post-step action values of one bulk advance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarAdvance {
    pub ticks: u64,
    pub previous: Vec<(CombatantId, u64)>,
    pub next: Vec<(CombatantId, u64)>,
    /// Fixed presentation duration for the bar animation.
    pub duration_secs: f64,
}

/// Advances every listed living combatant by the minimal tick count.
///
/// Returns `None` (no step, nothing to animate) when nobody is listed or
/// someone is already ready. The caller re-sorts the queue afterwards.
pub fn fast_forward(
    roster: &mut Roster,
    ids: &[CombatantId],
    config: &BattleConfig,
) -> Option<BarAdvance> {
    let ticks = ticks_until_ready(
        ids.iter().filter_map(|id| roster.living(*id)),
        config.readiness_threshold,
        config.tick_interval_secs,
    )?;

    if ticks == 0 {
        return None;
    }

    let mut previous = Vec::with_capacity(ids.len());
    let mut next = Vec::with_capacity(ids.len());

    for id in ids {
        let Some(combatant) = roster.living_mut(*id) else {
            continue;
        };
        let gain = per_tick(combatant.battle.speed, config.tick_interval_secs);
        previous.push((combatant.id, combatant.action_value));
        combatant.action_value = combatant
            .action_value
            .saturating_add(gain.saturating_mul(ticks));
        next.push((combatant.id, combatant.action_value));
    }

    Some(BarAdvance {
        ticks,
        previous,
        next,
        duration_secs: config.bar_advance_secs,
    })
}
