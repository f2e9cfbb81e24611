//! Area effects ("barriers").
//!
//! A barrier is created by a skill, owned by its caster, and affects every
//! combatant that passes its team filter and stands inside its radius. Its
//! lifetime is counted in the *owner's* ordinary turns; extra turns do not
//! consume duration.
//!
//! - [`barrier`]: records, configuration and the [`BarrierBehavior`] trait
//! - [`registry`]: the per-battle [`EffectRegistry`]
//! - [`kinds`]: stock behaviors (stat aura, regeneration, volatile field)

pub mod barrier;
pub mod kinds;
pub mod registry;

pub use barrier::{
    AreaStrike, Barrier, BarrierBehavior, BarrierConfig, BarrierId, TeamFilter, UnitTurnEffect,
};
pub use kinds::{Regeneration, StatAura, VolatileField};
pub use registry::{DestroyCause, DestroyReport, EffectRegistry, TurnEndEffect, TurnEndReport};
