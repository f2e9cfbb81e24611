use crate::effect::TurnEndReport;
use crate::error::{BattleError, ErrorSeverity};
use crate::state::{CombatantId, Side};

use super::{BarAdvance, Battle, fast_forward};

/// Errors that can occur during turn operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the battle is not running")]
    NotRunning,

    #[error("combatant {0} is not queued or not alive")]
    NotQueued(CombatantId),

    #[error("combatant {0} has not reached the readiness threshold")]
    NotReady(CombatantId),

    #[error("combatant {0} is already acting")]
    TurnInProgress(CombatantId),

    #[error("combatant {0} is not the acting combatant")]
    NotActing(CombatantId),

    #[error("combatant {0} has not ended its turn")]
    TurnNotEnded(CombatantId),
}

impl BattleError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotRunning => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn subject(&self) -> Option<CombatantId> {
        match self {
            Self::NotRunning => None,
            Self::NotQueued(id)
            | Self::NotReady(id)
            | Self::TurnInProgress(id)
            | Self::NotActing(id)
            | Self::TurnNotEnded(id) => Some(*id),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotRunning => "TURN_NOT_RUNNING",
            Self::NotQueued(_) => "TURN_NOT_QUEUED",
            Self::NotReady(_) => "TURN_NOT_READY",
            Self::TurnInProgress(_) => "TURN_IN_PROGRESS",
            Self::NotActing(_) => "TURN_NOT_ACTING",
            Self::TurnNotEnded(_) => "TURN_NOT_ENDED",
        }
    }
}

/// Marker for the turn currently in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveTurn {
    pub unit: CombatantId,
    pub extra: bool,
    /// Set by `end_turn`; the registry pass has not run yet.
    pub ending: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnStart {
    pub unit: CombatantId,
    pub extra: bool,
    /// Skill points accrued at the start of this turn.
    pub skill_points_gained: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEnd {
    pub unit: CombatantId,
    pub extra: bool,
    /// Action value after the threshold was consumed and any preset applied.
    pub action_value: u64,
}

/// How a battle finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    /// No living enemy remains on the field.
    Victory,
    /// No living ally remains on the field. Takes precedence over victory.
    Defeat,
    /// Stopped from outside before either side was wiped out.
    Aborted,
}

/// Turn scheduling methods for Battle.
impl Battle {
    /// Fast-forwards every queued combatant until someone is ready, then
    /// re-sorts the queue.
    ///
    /// Returns `None` when nothing moved: somebody was already ready or the
    /// queue holds no living combatant.
    pub fn advance(&mut self) -> Option<BarAdvance> {
        let snapshot = self.queue.snapshot();
        let advance = fast_forward(&mut self.roster, &snapshot, &self.config);
        self.queue.sort(&self.roster);
        advance
    }

    /// The first living combatant in queue order, if it is ready to act.
    ///
    /// Dead combatants that have not been swept yet are skipped.
    pub fn next_ready(&self) -> Option<CombatantId> {
        let threshold = self.config.readiness_threshold;
        self.queue
            .snapshot()
            .into_iter()
            .filter_map(|id| self.roster.living(id))
            .find(|c| c.deployed)
            .filter(|c| c.action_value >= threshold)
            .map(|c| c.id)
    }

    /// Opens a turn for `unit`.
    ///
    /// A pending extra-turn flag is consumed here; otherwise the pool side
    /// accrues one skill point.
    pub fn begin_turn(&mut self, unit: CombatantId) -> Result<TurnStart, TurnError> {
        if !self.running {
            return Err(TurnError::NotRunning);
        }
        if let Some(turn) = self.turn {
            return Err(TurnError::TurnInProgress(turn.unit));
        }
        if !self.queue.contains(unit) {
            return Err(TurnError::NotQueued(unit));
        }
        let threshold = self.config.readiness_threshold;
        let combatant = self
            .roster
            .living_mut(unit)
            .ok_or(TurnError::NotQueued(unit))?;
        if combatant.action_value < threshold {
            return Err(TurnError::NotReady(unit));
        }

        let extra = std::mem::take(&mut combatant.next_turn_extra);
        let side = combatant.side;
        let skill_points_gained = if extra {
            0
        } else {
            self.skill_points.accrue_for(side)
        };

        self.turn = Some(ActiveTurn {
            unit,
            extra,
            ending: false,
        });
        Ok(TurnStart {
            unit,
            extra,
            skill_points_gained,
        })
    }

    /// Ends the acting combatant's turn.
    ///
    /// Consumes one threshold of action value (the surplus carries over) and
    /// applies a pending preset. The effect registry has not seen the turn
    /// end yet: follow up with [`resolve_turn_end`](Self::resolve_turn_end).
    /// A combatant killed during its own turn still goes through both.
    pub fn end_turn(&mut self, unit: CombatantId) -> Result<TurnEnd, TurnError> {
        let turn = match self.turn.as_mut() {
            Some(turn) if turn.unit == unit && !turn.ending => turn,
            _ => return Err(TurnError::NotActing(unit)),
        };
        turn.ending = true;
        let extra = turn.extra;
        let threshold = self.config.readiness_threshold;

        let action_value = match self.roster.get_mut(unit) {
            Some(combatant) => {
                combatant.action_value = combatant.action_value.saturating_sub(threshold);
                if let Some(preset) = combatant.preset.take() {
                    combatant.action_value = preset.value;
                    combatant.next_turn_extra |= preset.extra;
                }
                combatant.action_value
            }
            None => 0,
        };

        Ok(TurnEnd {
            unit,
            extra,
            action_value,
        })
    }

    /// Runs the effect registry's turn-end pass for a turn closed by
    /// [`end_turn`](Self::end_turn): per-unit hooks, then owner durations
    /// unless the turn was extra. Clears the turn and re-sorts the queue.
    pub fn resolve_turn_end(&mut self, unit: CombatantId) -> Result<TurnEndReport, TurnError> {
        let turn = match self.turn {
            Some(turn) if turn.unit == unit && turn.ending => turn,
            Some(turn) if turn.unit == unit => return Err(TurnError::TurnNotEnded(unit)),
            _ => return Err(TurnError::NotActing(unit)),
        };

        let report = self
            .effects
            .unit_turn_end(unit, turn.extra, &mut self.roster);

        self.turn = None;
        self.queue.sort(&self.roster);
        Ok(report)
    }

    /// End-of-cycle sweep.
    ///
    /// Removes dead combatants from the queue and applies presets that were
    /// granted to combatants outside their own turn. Returns the swept ids.
    pub fn cleanup(&mut self) -> Vec<CombatantId> {
        let dead: Vec<CombatantId> = self
            .queue
            .snapshot()
            .into_iter()
            .filter(|id| self.roster.living(*id).is_none())
            .collect();
        for id in &dead {
            self.queue.remove(*id);
        }

        for id in self.queue.snapshot() {
            let Some(combatant) = self.roster.living_mut(id) else {
                continue;
            };
            if let Some(preset) = combatant.preset.take() {
                combatant.action_value = preset.value;
                combatant.next_turn_extra |= preset.extra;
            }
        }

        self.turn = None;
        self.queue.sort(&self.roster);
        dead
    }

    /// Checks whether either side has been wiped out.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.roster.active_on(Side::Ally).next().is_none() {
            return Some(BattleOutcome::Defeat);
        }
        if self.roster.active_on(Side::Enemy).next().is_none() {
            return Some(BattleOutcome::Victory);
        }
        None
    }
}
