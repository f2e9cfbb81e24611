//! Shared skill point pool.
//!
//! A single bounded counter spent to activate skills. Only one side draws on
//! it: that side accrues a point at the start of each ordinary (non-extra)
//! turn and on each basic attack that lands; the opposing side never accrues.
//!
//! Spend requests are expressed as the *requested* cost; the caller passes
//! the discount computed from active effects and [`effective_cost`] folds it
//! in, so the amount actually removed is never negative and never exceeds
//! the request.

use crate::config::BattleConfig;
use crate::state::Side;

/// Cost after applying a discount: `max(0, requested − discount)`.
#[inline]
pub const fn effective_cost(requested: u32, discount: u32) -> u32 {
    requested.saturating_sub(discount)
}

/// Bounded skill point counter, clamped to `[0, max]` on every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillPointPool {
    current: u32,
    max: u32,
    initial: u32,
    side: Side,
}

impl SkillPointPool {
    pub fn new(initial: u32, max: u32, side: Side) -> Self {
        let initial = initial.min(max);
        Self {
            current: initial,
            max,
            initial,
            side,
        }
    }

    pub fn from_config(config: &BattleConfig) -> Self {
        Self::new(
            config.skill_point_initial,
            config.skill_point_max,
            config.pool_side,
        )
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// The side whose turns consume and refill this pool.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns true if `requested` (after `discount`) is affordable.
    pub fn can_spend(&self, requested: u32, discount: u32) -> bool {
        effective_cost(requested, discount) <= self.current
    }

    /// Spends the discounted cost. Returns false and leaves the pool
    /// untouched when it is not affordable.
    pub fn try_spend(&mut self, requested: u32, discount: u32) -> bool {
        let cost = effective_cost(requested, discount);
        if cost > self.current {
            return false;
        }
        self.current -= cost;
        true
    }

    /// Adds points, saturating at the maximum. Returns the amount actually gained.
    pub fn add(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current - before
    }

    /// Grants one point if `side` is the pool's side.
    pub fn accrue_for(&mut self, side: Side) -> u32 {
        if side == self.side { self.add(1) } else { 0 }
    }

    /// Restores the battle-start amount.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}
