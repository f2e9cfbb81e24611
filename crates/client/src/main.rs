//! Battle simulator entry point.
//!
//! Runs one demo battle: the party is driven by a role-based tactic policy,
//! the goblins basic-attack their weakest opponent. Every event is printed
//! to stdout as a JSON line; logs go to stderr.
//!
//! Settings are read from the environment (and `.env` if present), see
//! [`RuntimeConfig::from_env`].
mod party;
mod printer;

use std::sync::Arc;

use anyhow::Result;
use battle_runtime::{
    BasicAttackController, BattleEvent, Event, RuntimeConfig, Scheduler, Topic,
};
use tracing::{info, warn};

use party::TacticController;
use printer::JsonLinePrinter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    info!(
        threshold = config.battle.readiness_threshold,
        tick_interval = config.battle.tick_interval_secs,
        skill_points = config.battle.skill_point_initial,
        "starting battle simulation"
    );

    let mut scheduler = Scheduler::builder()
        .config(config)
        .combatants(party::roster())
        .player_controller(TacticController)
        .enemy_controller(BasicAttackController)
        .observer(Arc::new(JsonLinePrinter))
        .build();

    let mut lifecycle = scheduler.subscribe(Topic::Battle);
    let watcher = tokio::spawn(async move {
        while let Ok(event) = lifecycle.recv().await {
            if let Event::Battle(BattleEvent::BattleEnded { outcome }) = event {
                info!(%outcome, "lifecycle watcher saw the battle end");
                break;
            }
        }
    });

    let stop = scheduler.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping battle");
            stop.stop();
        }
    });

    let outcome = scheduler.run().await?;
    watcher.await?;

    for combatant in scheduler.battle().roster().iter() {
        info!(
            unit = %combatant.id,
            side = %combatant.side,
            hp = combatant.hp(),
            max_hp = combatant.max_hp(),
            "final state"
        );
    }
    info!(%outcome, "battle finished");

    Ok(())
}
