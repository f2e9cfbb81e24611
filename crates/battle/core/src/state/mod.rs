//! Battle state records.

mod combatant;
mod common;
mod roster;

pub use combatant::{Combatant, PresetActionValue};
pub use common::{CombatantId, Position, Side};
pub use roster::Roster;
