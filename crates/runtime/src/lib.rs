//! Async orchestration for turn-based battles.
//!
//! This crate wraps the synchronous [`battle_core::Battle`] in a scheduler
//! that asks controllers for actions, reports every state change to
//! observers and an event bus, and decides when the battle is over.
//!
//! Modules are organized by responsibility:
//! - [`scheduler`] hosts the state machine and its builder
//! - [`api`] exposes the controller trait and error types
//! - [`events`] provides the topic-based event bus
//! - [`observers`] provides ordered synchronous listeners
//! - [`config`] loads runtime settings from the environment
pub mod api;
pub mod config;
pub mod events;
pub mod observers;
pub mod scheduler;

pub use api::{
    BasicAttackController, ControllerKind, PassController, Result, RuntimeError, UnitController,
};
pub use config::RuntimeConfig;
pub use events::{BattleEvent, CombatEvent, Event, EventBus, Topic, TurnEvent};
pub use observers::{EventObserver, ObserverRegistry};
pub use scheduler::{Scheduler, SchedulerBuilder, SchedulerPhase, StopHandle};
