//! Turn scheduler.
//!
//! Drives a [`Battle`] through its phases:
//!
//! ```text
//! Idle → Advancing → Dispatching ⇄ UnitActing → Cleanup → Advancing → …
//!                                                   ↘ Victory / Defeat / Aborted → Idle
//! ```
//!
//! The loop is a single task. Awaiting the acting unit's controller is the
//! only suspension point; everything else runs synchronously against the
//! battle. Every state change is reported to the observers first and then
//! published on the event bus.
//!
//! A unit's turn end is reported before its barrier hooks and duration ticks
//! resolve, so listeners see the unit as it was when it ended the turn.

use std::sync::Arc;

use battle_core::{Battle, BattleOutcome, Combatant, CombatantId};
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use crate::api::{ControllerKind, Result, RuntimeError, UnitController};
use crate::config::RuntimeConfig;
use crate::events::{BattleEvent, CombatEvent, Event, EventBus, Topic, TurnEvent};
use crate::observers::{EventObserver, ObserverRegistry};

/// Current position of the scheduler state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerPhase {
    Idle,
    Advancing,
    Dispatching,
    UnitActing(CombatantId),
    Cleanup,
    Victory,
    Defeat,
    Aborted,
}

impl From<BattleOutcome> for SchedulerPhase {
    fn from(outcome: BattleOutcome) -> Self {
        match outcome {
            BattleOutcome::Victory => SchedulerPhase::Victory,
            BattleOutcome::Defeat => SchedulerPhase::Defeat,
            BattleOutcome::Aborted => SchedulerPhase::Aborted,
        }
    }
}

/// Cloneable handle for stopping a running battle from another task.
///
/// The request is honoured at the next suspension boundary, including while
/// the scheduler is waiting on a controller.
#[derive(Clone)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_stop_requested(&self) -> bool {
        *self.tx.borrow()
    }
}

enum TurnFlow {
    Completed,
    Interrupted,
}

/// Owns one battle and sequences its turns.
pub struct Scheduler {
    config: RuntimeConfig,
    battle: Battle,
    phase: SchedulerPhase,

    // Unit controllers (injected by user)
    player: Option<Box<dyn UnitController>>,
    enemy: Option<Box<dyn UnitController>>,

    observers: ObserverRegistry,
    bus: EventBus,

    stop_tx: Arc<watch::Sender<bool>>,
    stop_rx: watch::Receiver<bool>,
}

impl Scheduler {
    /// Create a new scheduler builder
    pub fn builder() -> SchedulerBuilder {
        SchedulerBuilder::new()
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Cloneable bus for subscribing from other tasks.
    pub fn event_bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            tx: Arc::clone(&self.stop_tx),
        }
    }

    /// Set the controller for allied combatants
    pub fn set_player_controller(&mut self, controller: impl UnitController + 'static) {
        self.player = Some(Box::new(controller));
    }

    /// Set the controller for enemy combatants
    pub fn set_enemy_controller(&mut self, controller: impl UnitController + 'static) {
        self.enemy = Some(Box::new(controller));
    }

    /// Runs a full battle and returns how it ended.
    ///
    /// Requires both controllers. Afterwards the scheduler is back in
    /// [`SchedulerPhase::Idle`] with the queue empty, all barriers reverted
    /// and the skill point pool reset; hp is left as the battle ended.
    pub async fn run(&mut self) -> Result<BattleOutcome> {
        if self.phase != SchedulerPhase::Idle {
            return Err(RuntimeError::AlreadyRunning);
        }
        self.controller(ControllerKind::Player)?;
        self.controller(ControllerKind::Enemy)?;

        self.start_battle();

        match self.drive().await {
            Ok(outcome) => {
                self.finish(outcome);
                Ok(outcome)
            }
            Err(e) => {
                error!(target: "runtime::scheduler", error = %e, "battle loop failed");
                self.battle.end();
                self.phase = SchedulerPhase::Idle;
                self.stop_tx.send_replace(false);
                Err(e)
            }
        }
    }

    fn controller(&self, kind: ControllerKind) -> Result<&dyn UnitController> {
        let slot = match kind {
            ControllerKind::Player => self.player.as_deref(),
            ControllerKind::Enemy => self.enemy.as_deref(),
        };
        slot.ok_or(RuntimeError::ControllerNotSet { kind })
    }

    fn start_battle(&mut self) {
        self.battle.start();

        let combatants = self.battle.queue().snapshot();
        info!(
            target: "runtime::scheduler",
            combatants = combatants.len(),
            skill_points = self.battle.skill_points().current(),
            "battle started"
        );
        self.emit(BattleEvent::BattleStarted {
            combatants,
            skill_points: self.battle.skill_points().current(),
        });
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.phase = outcome.into();
        info!(target: "runtime::scheduler", %outcome, "battle ended");
        self.emit(BattleEvent::BattleEnded { outcome });

        self.battle.end();
        self.phase = SchedulerPhase::Idle;
        self.stop_tx.send_replace(false);
    }

    async fn drive(&mut self) -> Result<BattleOutcome> {
        if let Some(outcome) = self.battle.outcome() {
            return Ok(outcome);
        }

        loop {
            if self.stop_requested() {
                return Ok(BattleOutcome::Aborted);
            }

            self.set_phase(SchedulerPhase::Advancing);
            let advanced = match self.battle.advance() {
                Some(advance) => {
                    debug!(
                        target: "runtime::scheduler",
                        ticks = advance.ticks,
                        "action bars advanced"
                    );
                    self.emit(TurnEvent::ActionBarAdvance(advance));
                    true
                }
                None => false,
            };

            self.set_phase(SchedulerPhase::Dispatching);
            self.refresh_effects();

            let mut turns = 0usize;
            let mut decided = None;
            while let Some(unit) = self.battle.next_ready() {
                if self.stop_requested() {
                    return Ok(BattleOutcome::Aborted);
                }
                if let TurnFlow::Interrupted = self.play_turn(unit).await? {
                    return Ok(BattleOutcome::Aborted);
                }
                turns += 1;
                self.set_phase(SchedulerPhase::Dispatching);

                decided = self.battle.outcome();
                if decided.is_some() {
                    break;
                }
            }

            self.set_phase(SchedulerPhase::Cleanup);
            for unit in self.battle.cleanup() {
                info!(target: "runtime::scheduler", %unit, "unit defeated");
                self.emit(CombatEvent::UnitDefeated { unit });
            }

            if let Some(outcome) = decided.or_else(|| self.battle.outcome()) {
                return Ok(outcome);
            }

            if turns == 0 && !advanced {
                warn!(
                    target: "runtime::scheduler",
                    queued = self.battle.queue().len(),
                    "no combatant can become ready, aborting battle"
                );
                return Ok(BattleOutcome::Aborted);
            }
        }
    }

    async fn play_turn(&mut self, unit: CombatantId) -> Result<TurnFlow> {
        let start = self.battle.begin_turn(unit)?;
        debug!(
            target: "runtime::scheduler",
            %unit,
            extra = start.extra,
            skill_points_gained = start.skill_points_gained,
            "turn started"
        );
        self.emit(TurnEvent::UnitTurnStart {
            unit,
            extra: start.extra,
            skill_points_gained: start.skill_points_gained,
        });

        self.set_phase(SchedulerPhase::UnitActing(unit));
        if let TurnFlow::Interrupted = self.act(unit).await? {
            return Ok(TurnFlow::Interrupted);
        }

        let end = self.battle.end_turn(unit)?;
        debug!(
            target: "runtime::scheduler",
            %unit,
            extra = end.extra,
            action_value = end.action_value,
            "turn ended"
        );
        self.emit(TurnEvent::UnitTurnEnd {
            unit,
            extra: end.extra,
            action_value: end.action_value,
        });

        let report = self.battle.resolve_turn_end(unit)?;
        for effect in report.effects {
            self.emit(CombatEvent::TurnEffect(effect));
        }
        for destroyed in report.destroyed {
            debug!(
                target: "runtime::scheduler",
                barrier = %destroyed.barrier,
                cause = ?destroyed.cause,
                "barrier destroyed"
            );
            self.emit(CombatEvent::BarrierDestroyed(destroyed));
        }

        self.refresh_effects();
        Ok(TurnFlow::Completed)
    }

    /// Asks the controller until it submits a valid action, the rejection
    /// budget runs out, or a stop is requested.
    async fn act(&mut self, unit: CombatantId) -> Result<TurnFlow> {
        let side = self
            .battle
            .combatant(unit)
            .map(|c| c.side)
            .ok_or(battle_core::TurnError::NotActing(unit))?;
        let kind = ControllerKind::for_side(side);
        let mut rejections = 0u32;

        loop {
            let controller = match kind {
                ControllerKind::Player => self.player.as_deref(),
                ControllerKind::Enemy => self.enemy.as_deref(),
            }
            .ok_or(RuntimeError::ControllerNotSet { kind })?;

            let action = tokio::select! {
                biased;
                Ok(_) = self.stop_rx.wait_for(|stopped| *stopped) => {
                    info!(target: "runtime::scheduler", %unit, "stop requested while waiting for controller");
                    return Ok(TurnFlow::Interrupted);
                }
                chosen = controller.choose_action(unit, &self.battle) => chosen?,
            };

            let label = action.label();
            match self.battle.execute(unit, &action) {
                Ok(report) => {
                    debug!(
                        target: "runtime::scheduler",
                        %unit,
                        action = %label,
                        spent = report.skill_points_spent,
                        "action executed"
                    );
                    self.emit(CombatEvent::ActionExecuted { label, report });
                    return Ok(TurnFlow::Completed);
                }
                Err(error) => {
                    rejections += 1;
                    debug!(
                        target: "runtime::scheduler",
                        %unit,
                        action = %label,
                        %error,
                        attempt = rejections,
                        "action rejected"
                    );
                    self.emit(CombatEvent::ActionRejected {
                        actor: unit,
                        label,
                        error,
                        attempt: rejections,
                    });

                    if rejections >= self.config.max_rejections_per_turn {
                        warn!(
                            target: "runtime::scheduler",
                            %unit,
                            rejections,
                            "controller exhausted its attempts, forfeiting turn"
                        );
                        self.emit(CombatEvent::TurnForfeited {
                            actor: unit,
                            rejections,
                        });
                        return Ok(TurnFlow::Completed);
                    }
                }
            }
        }
    }

    fn refresh_effects(&mut self) {
        for destroyed in self.battle.refresh_effects() {
            debug!(
                target: "runtime::scheduler",
                barrier = %destroyed.barrier,
                owner = %destroyed.owner,
                "barrier lost its owner"
            );
            self.emit(CombatEvent::BarrierDestroyed(destroyed));
        }
    }

    fn stop_requested(&self) -> bool {
        *self.stop_rx.borrow()
    }

    fn set_phase(&mut self, phase: SchedulerPhase) {
        self.phase = phase;
    }

    fn emit(&self, event: impl Into<Event>) {
        let event = event.into();
        self.observers.notify(&event, &self.battle);
        self.bus.publish(event);
    }
}

/// Builder for [`Scheduler`] with flexible configuration.
pub struct SchedulerBuilder {
    config: RuntimeConfig,
    combatants: Vec<Combatant>,
    player: Option<Box<dyn UnitController>>,
    enemy: Option<Box<dyn UnitController>>,
    observers: ObserverRegistry,
    bus: Option<EventBus>,
}

impl SchedulerBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            combatants: Vec::new(),
            player: None,
            enemy: None,
            observers: ObserverRegistry::new(),
            bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn combatant(mut self, combatant: Combatant) -> Self {
        self.combatants.push(combatant);
        self
    }

    pub fn combatants(mut self, combatants: impl IntoIterator<Item = Combatant>) -> Self {
        self.combatants.extend(combatants);
        self
    }

    /// Set the controller for allied combatants
    pub fn player_controller(mut self, controller: impl UnitController + 'static) -> Self {
        self.player = Some(Box::new(controller));
        self
    }

    /// Set the controller for enemy combatants
    pub fn enemy_controller(mut self, controller: impl UnitController + 'static) -> Self {
        self.enemy = Some(Box::new(controller));
        self
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn observer(mut self, observer: Arc<dyn EventObserver>) -> Self {
        self.observers.register(observer);
        self
    }

    /// Publish on an existing bus instead of creating one.
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Build the scheduler
    pub fn build(self) -> Scheduler {
        let bus = self
            .bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));
        let battle = Battle::new(self.config.battle.clone(), self.combatants);
        let (stop_tx, stop_rx) = watch::channel(false);

        Scheduler {
            config: self.config,
            battle,
            phase: SchedulerPhase::Idle,
            player: self.player,
            enemy: self.enemy,
            observers: self.observers,
            bus,
            stop_tx: Arc::new(stop_tx),
            stop_rx,
        }
    }
}
