/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Action value a combatant must reach to take a turn.
    pub readiness_threshold: u64,
    /// Simulated seconds per discrete accumulator tick.
    pub tick_interval_secs: f64,
    /// Fixed presentation duration attached to action bar advance events.
    pub bar_advance_secs: f64,
    /// Upper bound of the shared skill point pool.
    pub skill_point_max: u32,
    /// Skill points available when a battle starts.
    pub skill_point_initial: u32,
    /// The side whose turns draw on (and refill) the skill point pool.
    pub pool_side: crate::state::Side,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_READINESS_THRESHOLD: u64 = 100;
    pub const DEFAULT_TICK_INTERVAL_SECS: f64 = 0.1;
    pub const DEFAULT_BAR_ADVANCE_SECS: f64 = 0.3;
    pub const DEFAULT_SKILL_POINT_MAX: u32 = 5;
    pub const DEFAULT_SKILL_POINT_INITIAL: u32 = 3;

    pub fn new() -> Self {
        Self {
            readiness_threshold: Self::DEFAULT_READINESS_THRESHOLD,
            tick_interval_secs: Self::DEFAULT_TICK_INTERVAL_SECS,
            bar_advance_secs: Self::DEFAULT_BAR_ADVANCE_SECS,
            skill_point_max: Self::DEFAULT_SKILL_POINT_MAX,
            skill_point_initial: Self::DEFAULT_SKILL_POINT_INITIAL,
            pool_side: crate::state::Side::Ally,
        }
    }

    pub fn with_readiness_threshold(mut self, threshold: u64) -> Self {
        self.readiness_threshold = threshold.max(1);
        self
    }

    pub fn with_tick_interval(mut self, seconds: f64) -> Self {
        self.tick_interval_secs = seconds;
        self
    }

    pub fn with_skill_points(mut self, initial: u32, max: u32) -> Self {
        self.skill_point_max = max;
        self.skill_point_initial = initial.min(max);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
