//! Synchronous event observers.
//!
//! Observers see every event before it is published on the bus, in the order
//! they were registered, together with a read-only view of the battle at the
//! moment the event was raised. They are the place for presentation and
//! bookkeeping that must not lag behind the battle (combat logs, HUD
//! counters); they cannot mutate battle state.

mod registry;

pub use registry::ObserverRegistry;

use battle_core::Battle;

use crate::events::Event;

/// Receives every battle event synchronously.
pub trait EventObserver: Send + Sync {
    /// Returns a human-readable name for this observer (used in logging and debugging).
    fn name(&self) -> &'static str;

    /// Called once per event, before bus subscribers see it.
    fn on_event(&self, event: &Event, battle: &Battle);
}
