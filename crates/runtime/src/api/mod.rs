//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the scheduler can stay focused on sequencing turns.

pub mod controller;
pub mod errors;

pub use controller::{BasicAttackController, PassController, UnitController};
pub use errors::{ControllerKind, Result, RuntimeError};
