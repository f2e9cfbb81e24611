//! Stat system.
//!
//! - [`block`]: base stats, battle stats and additive deltas
//! - [`bonus`]: bonus lists resolved against base stats into deltas

pub mod block;
pub mod bonus;

pub use block::{BaseStats, BattleStats, Stat, StatDelta};
pub use bonus::{Bonus, BonusStack, percent_of};
