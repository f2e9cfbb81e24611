//! Deterministic combat rules for action-value driven turn-based battles.
//!
//! `battle-core` defines the readiness queue, the fast-forward accumulator,
//! the area effect registry and the shared skill point economy, and exposes
//! them as synchronous APIs. All per-battle state is owned by
//! [`engine::Battle`]; the async scheduler that drives it lives in
//! `battle-runtime`.
pub mod action;
pub mod combat;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod resources;
pub mod state;
pub mod stats;
pub use action::{Action, ActionError, ActionReport, SkillAction, SkillEffect};
pub use combat::{DamageOutcome, DamageReport, DamageType};
pub use config::BattleConfig;
pub use effect::{
    AreaStrike, Barrier, BarrierBehavior, BarrierConfig, BarrierId, DestroyCause, DestroyReport,
    EffectRegistry, Regeneration, StatAura, TeamFilter, TurnEndEffect, TurnEndReport,
    UnitTurnEffect, VolatileField,
};
pub use engine::{
    ActiveTurn, BarAdvance, Battle, BattleOutcome, ReadinessQueue, TurnEnd, TurnError, TurnStart,
};
pub use error::{BattleError, ErrorSeverity};
pub use resources::{SkillPointPool, effective_cost};
pub use state::{Combatant, CombatantId, Position, PresetActionValue, Roster, Side};
pub use stats::{BaseStats, BattleStats, Bonus, BonusStack, Stat, StatDelta};
