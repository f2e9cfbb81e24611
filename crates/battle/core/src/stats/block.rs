//! Stat blocks: base values, battle-scoped mirrors, and additive deltas.
//!
//! Base stats never change during a battle. Battle stats start as a copy of
//! the base stats and are only ever mutated through [`StatDelta`], whose
//! `apply_to` / `revert_from` pair are exact inverses. Combat math reads
//! battle stats exclusively.

use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Individual stat kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    MaxHp,
    Attack,
    MagicAttack,
    Defense,
    MagicDefense,
    Speed,
}

impl Stat {
    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Base stats a combatant enters the battle with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_hp: i32,
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub magic_defense: i32,
    pub speed: i32,
}

impl BaseStats {
    pub const fn new(
        max_hp: i32,
        attack: i32,
        magic_attack: i32,
        defense: i32,
        magic_defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            max_hp,
            attack,
            magic_attack,
            defense,
            magic_defense,
            speed,
        }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::MaxHp => self.max_hp,
            Stat::Attack => self.attack,
            Stat::MagicAttack => self.magic_attack,
            Stat::Defense => self.defense,
            Stat::MagicDefense => self.magic_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// Battle-scoped stat mirrors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    pub max_hp: i32,
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub magic_defense: i32,
    pub speed: i32,
}

impl BattleStats {
    /// Copies the base stats; used when a battle starts.
    pub fn from_base(base: &BaseStats) -> Self {
        Self {
            max_hp: base.max_hp,
            attack: base.attack,
            magic_attack: base.magic_attack,
            defense: base.defense,
            magic_defense: base.magic_defense,
            speed: base.speed,
        }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::MaxHp => self.max_hp,
            Stat::Attack => self.attack,
            Stat::MagicAttack => self.magic_attack,
            Stat::Defense => self.defense,
            Stat::MagicDefense => self.magic_defense,
            Stat::Speed => self.speed,
        }
    }

    fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::MaxHp => &mut self.max_hp,
            Stat::Attack => &mut self.attack,
            Stat::MagicAttack => &mut self.magic_attack,
            Stat::Defense => &mut self.defense,
            Stat::MagicDefense => &mut self.magic_defense,
            Stat::Speed => &mut self.speed,
        }
    }
}

/// Signed per-stat adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    values: [i32; Stat::COUNT],
}

impl StatDelta {
    pub const ZERO: Self = Self {
        values: [0; Stat::COUNT],
    };

    /// Delta touching a single stat.
    pub fn single(stat: Stat, amount: i32) -> Self {
        let mut delta = Self::ZERO;
        delta.values[stat.index()] = amount;
        delta
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    pub fn add(&mut self, stat: Stat, amount: i32) {
        self.values[stat.index()] += amount;
    }

    /// Sums two deltas stat by stat.
    pub fn merge(&mut self, other: &StatDelta) {
        for stat in Stat::iter() {
            self.add(stat, other.get(stat));
        }
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }

    /// Iterates over the non-zero entries.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, v)| *v != 0)
    }

    pub fn apply_to(&self, stats: &mut BattleStats) {
        for (stat, amount) in self.iter() {
            *stats.get_mut(stat) += amount;
        }
    }

    pub fn revert_from(&self, stats: &mut BattleStats) {
        for (stat, amount) in self.iter() {
            *stats.get_mut(stat) -= amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BaseStats {
        BaseStats::new(1000, 100, 80, 30, 20, 50)
    }

    #[test]
    fn battle_stats_mirror_base() {
        let base = sample();
        let battle = BattleStats::from_base(&base);

        for stat in Stat::iter() {
            assert_eq!(battle.get(stat), base.get(stat), "{stat}");
        }
    }

    #[test]
    fn apply_then_revert_restores_stats() {
        let mut battle = BattleStats::from_base(&sample());
        let before = battle;

        let mut delta = StatDelta::single(Stat::Attack, 15);
        delta.add(Stat::Defense, -7);
        delta.apply_to(&mut battle);

        assert_eq!(battle.attack, 115);
        assert_eq!(battle.defense, 23);

        delta.revert_from(&mut battle);
        assert_eq!(battle, before);
    }

    #[test]
    fn merge_sums_per_stat() {
        let mut a = StatDelta::single(Stat::Speed, 10);
        let b = StatDelta::single(Stat::Speed, -4);
        a.merge(&b);

        assert_eq!(a.get(Stat::Speed), 6);
        assert_eq!(a.iter().count(), 1);
        assert!(StatDelta::ZERO.is_zero());
    }
}
