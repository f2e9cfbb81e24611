//! Observer registry preserving registration order.

use std::sync::Arc;

use battle_core::Battle;
use tracing::trace;

use super::EventObserver;
use crate::events::Event;

/// Ordered list of observers.
///
/// Unlike hooks there is no priority: observers are notified in exactly the
/// order they were registered.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn EventObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Arc<dyn EventObserver>) {
        self.observers.push(observer);
    }

    /// Notifies every observer in registration order.
    pub fn notify(&self, event: &Event, battle: &Battle) {
        for observer in &self.observers {
            trace!(target: "runtime::observers", observer = observer.name(), "notify");
            observer.on_event(event, battle);
        }
    }

    /// Returns the number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Returns observer names in notification order (for debugging).
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.observers.iter().map(|o| o.name())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::events::{BattleEvent, Event};
    use battle_core::{BattleConfig, BattleOutcome};

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl EventObserver for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn on_event(&self, _event: &Event, _battle: &Battle) {
            self.log.lock().unwrap().push(self.name);
        }
    }

    #[test]
    fn notifies_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        for name in ["hud", "combat_log", "audio"] {
            registry.register(Arc::new(Recorder {
                name,
                log: Arc::clone(&log),
            }));
        }
        let battle = Battle::new(BattleConfig::new(), []);

        registry.notify(
            &Event::Battle(BattleEvent::BattleEnded {
                outcome: BattleOutcome::Aborted,
            }),
            &battle,
        );

        assert_eq!(*log.lock().unwrap(), vec!["hud", "combat_log", "audio"]);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["hud", "combat_log", "audio"]
        );
    }
}
