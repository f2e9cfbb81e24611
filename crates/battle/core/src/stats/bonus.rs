//! Bonuses that effects contribute to battle stats.
//!
//! Effects describe what they grant as a list of [`Bonus`] values per
//! [`Stat`]. The list is resolved against the combatant's **base** stats at
//! evaluation time into a [`StatDelta`], which is what actually lands on the
//! battle stats. Resolving against base values keeps stacked percentage
//! bonuses additive: two `+10%` attack bonuses on a base of 100 yield `+20`,
//! not `+21`.

use super::block::{BaseStats, Stat, StatDelta};

/// A single bonus applied to one stat.
///
/// - **Flat**: additive amount (e.g., +5 defense)
/// - **Increased**: percentage of the base stat, stored as an integer
///   percentage (20 = +20%, -15 = -15%)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    Flat(i32),
    Increased(i32),
}

impl Bonus {
    /// Create a flat bonus
    pub fn flat(value: i32) -> Self {
        Bonus::Flat(value)
    }

    /// Create a percentage increase bonus (20 = +20%)
    pub fn increased(percent: i32) -> Self {
        Bonus::Increased(percent)
    }
}

/// Collection of per-stat bonuses produced by one effect for one combatant.
///
/// # Example
/// ```
/// # use battle_core::stats::{BaseStats, BonusStack, Stat};
/// let base = BaseStats::new(1000, 100, 80, 30, 20, 50);
/// let delta = BonusStack::new()
///     .increased(Stat::Attack, 10)
///     .increased(Stat::Attack, 10)
///     .flat(Stat::Defense, 5)
///     .resolve(&base);
///
/// assert_eq!(delta.get(Stat::Attack), 20);
/// assert_eq!(delta.get(Stat::Defense), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusStack {
    bonuses: Vec<(Stat, Bonus)>,
}

impl BonusStack {
    /// Create a new empty bonus stack
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    /// Add a bonus to the stack
    pub fn add(&mut self, stat: Stat, bonus: Bonus) {
        self.bonuses.push((stat, bonus));
    }

    /// Add multiple bonuses at once
    pub fn extend(&mut self, bonuses: impl IntoIterator<Item = (Stat, Bonus)>) {
        self.bonuses.extend(bonuses);
    }

    /// Resolve all bonuses into a delta against `base`.
    ///
    /// # Formula
    /// ```text
    /// delta[stat] = flat_sum + round(base[stat] × inc_sum / 100)
    /// ```
    pub fn resolve(&self, base: &BaseStats) -> StatDelta {
        let mut flat = StatDelta::ZERO;
        let mut increased = StatDelta::ZERO;

        for (stat, bonus) in &self.bonuses {
            match bonus {
                Bonus::Flat(v) => flat.add(*stat, *v),
                Bonus::Increased(p) => increased.add(*stat, *p),
            }
        }

        for (stat, percent) in increased.iter() {
            flat.add(stat, percent_of(base.get(stat), percent));
        }

        flat
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    /// Get the number of bonuses in the stack
    pub fn len(&self) -> usize {
        self.bonuses.len()
    }
}

/// Builder-style helpers.
impl BonusStack {
    /// Add a flat bonus (builder pattern)
    pub fn flat(mut self, stat: Stat, value: i32) -> Self {
        self.add(stat, Bonus::flat(value));
        self
    }

    /// Add a percentage increase (builder pattern)
    pub fn increased(mut self, stat: Stat, percent: i32) -> Self {
        self.add(stat, Bonus::increased(percent));
        self
    }
}

/// `value × percent / 100`, rounded to nearest with halves away from zero.
pub fn percent_of(value: i32, percent: i32) -> i32 {
    let product = i64::from(value) * i64::from(percent);
    let half = if product >= 0 { 50 } else { -50 };
    let rounded = (product + half) / 100;
    rounded.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(percent_of(15, 10), 2); // 1.5
        assert_eq!(percent_of(14, 10), 1); // 1.4
        assert_eq!(percent_of(-15, 10), -2);
        assert_eq!(percent_of(100, -25), -25);
    }

    #[test]
    fn increased_bonuses_stack_additively() {
        let base = BaseStats::new(1000, 100, 0, 0, 0, 0);
        let delta = BonusStack::new()
            .increased(Stat::Attack, 10)
            .increased(Stat::Attack, 10)
            .resolve(&base);

        assert_eq!(delta.get(Stat::Attack), 20);
    }

    #[test]
    fn flat_is_not_scaled_by_percentages() {
        let base = BaseStats::new(1000, 100, 0, 0, 0, 0);
        let delta = BonusStack::new()
            .flat(Stat::Attack, 50)
            .increased(Stat::Attack, 50)
            .resolve(&base);

        assert_eq!(delta.get(Stat::Attack), 100);
    }

    #[test]
    fn empty_stack_resolves_to_zero() {
        let stack = BonusStack::new();
        assert!(stack.is_empty());
        assert!(stack.resolve(&BaseStats::default()).is_zero());
    }
}
