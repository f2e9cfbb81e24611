//! Runtime configuration and environment loader.
use std::env;

use battle_core::BattleConfig;

/// Runtime configuration shared by the scheduler and the event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    /// Invalid actions tolerated within one turn before it is forfeited.
    pub max_rejections_per_turn: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 100,
            max_rejections_per_turn: 8,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_READINESS_THRESHOLD` - Action value needed to act (default: 100)
    /// - `BATTLE_TICK_INTERVAL_SECS` - Seconds per accumulator tick (default: 0.1)
    /// - `BATTLE_BAR_ADVANCE_SECS` - Bar animation duration (default: 0.3)
    /// - `BATTLE_SKILL_POINT_MAX` - Skill point pool size (default: 5)
    /// - `BATTLE_SKILL_POINT_INITIAL` - Skill points at battle start (default: 3)
    /// - `BATTLE_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `BATTLE_MAX_REJECTIONS` - Invalid actions allowed per turn (default: 8)
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let mut battle = config.battle.clone();

        if let Some(threshold) = parse::<u64>(lookup("BATTLE_READINESS_THRESHOLD")) {
            battle = battle.with_readiness_threshold(threshold);
        }
        if let Some(seconds) = parse::<f64>(lookup("BATTLE_TICK_INTERVAL_SECS"))
            .filter(|s| s.is_finite() && *s > 0.0)
        {
            battle = battle.with_tick_interval(seconds);
        }
        if let Some(seconds) = parse::<f64>(lookup("BATTLE_BAR_ADVANCE_SECS"))
            .filter(|s| s.is_finite() && *s >= 0.0)
        {
            battle.bar_advance_secs = seconds;
        }

        let max = parse::<u32>(lookup("BATTLE_SKILL_POINT_MAX")).unwrap_or(battle.skill_point_max);
        let initial =
            parse::<u32>(lookup("BATTLE_SKILL_POINT_INITIAL")).unwrap_or(battle.skill_point_initial);
        battle = battle.with_skill_points(initial, max);
        config.battle = battle;

        if let Some(capacity) = parse::<usize>(lookup("BATTLE_EVENT_BUFFER")) {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(limit) = parse::<u32>(lookup("BATTLE_MAX_REJECTIONS")) {
            config.max_rejections_per_turn = limit.max(1);
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_keep_defaults() {
        let config = RuntimeConfig::from_source(source(&[]));
        assert_eq!(config.battle, BattleConfig::default());
        assert_eq!(config.event_buffer_size, 100);
        assert_eq!(config.max_rejections_per_turn, 8);
    }

    #[test]
    fn variables_override_defaults() {
        let config = RuntimeConfig::from_source(source(&[
            ("BATTLE_READINESS_THRESHOLD", "200"),
            ("BATTLE_TICK_INTERVAL_SECS", "0.5"),
            ("BATTLE_SKILL_POINT_MAX", "7"),
            ("BATTLE_SKILL_POINT_INITIAL", "9"),
            ("BATTLE_MAX_REJECTIONS", "0"),
        ]));

        assert_eq!(config.battle.readiness_threshold, 200);
        assert_eq!(config.battle.tick_interval_secs, 0.5);
        assert_eq!(config.battle.skill_point_max, 7);
        assert_eq!(config.battle.skill_point_initial, 7);
        assert_eq!(config.max_rejections_per_turn, 1);
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = RuntimeConfig::from_source(source(&[
            ("BATTLE_READINESS_THRESHOLD", "fast"),
            ("BATTLE_TICK_INTERVAL_SECS", "-1"),
        ]));

        assert_eq!(config.battle.readiness_threshold, 100);
        assert_eq!(config.battle.tick_interval_secs, 0.1);
    }
}
