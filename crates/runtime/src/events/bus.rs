//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{BattleEvent, CombatEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Bar advances, turn start and end
    Turn,
    /// Executed and rejected actions, effects, defeats
    Combat,
    /// Battle start and end
    Battle,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Turn, Topic::Combat, Topic::Battle];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Turn(TurnEvent),
    Combat(CombatEvent),
    Battle(BattleEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Turn(_) => Topic::Turn,
            Event::Combat(_) => Topic::Combat,
            Event::Battle(_) => Topic::Battle,
        }
    }
}

impl From<TurnEvent> for Event {
    fn from(event: TurnEvent) -> Self {
        Event::Turn(event)
    }
}

impl From<CombatEvent> for Event {
    fn from(event: CombatEvent) -> Self {
        Event::Combat(event)
    }
}

impl From<BattleEvent> for Event {
    fn from(event: BattleEvent) -> Self {
        Event::Battle(event)
    }
}

struct Channels {
    turn: broadcast::Sender<Event>,
    combat: broadcast::Sender<Event>,
    battle: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Turn => &self.turn,
            Topic::Combat => &self.combat,
            Topic::Battle => &self.battle,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: a topic without
/// subscribers drops the event, and slow subscribers observe `Lagged`.
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                turn: broadcast::channel(capacity).0,
                combat: broadcast::channel(capacity).0,
                battle: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.get(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{BattleOutcome, CombatantId};

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::new();
        let mut turns = bus.subscribe(Topic::Turn);
        let mut battle = bus.subscribe(Topic::Battle);

        bus.publish(BattleEvent::BattleEnded {
            outcome: BattleOutcome::Victory,
        });
        bus.publish(TurnEvent::UnitTurnEnd {
            unit: CombatantId(1),
            extra: false,
            action_value: 0,
        });

        assert!(matches!(
            battle.recv().await,
            Ok(Event::Battle(BattleEvent::BattleEnded {
                outcome: BattleOutcome::Victory
            }))
        ));
        assert!(matches!(
            turns.recv().await,
            Ok(Event::Turn(TurnEvent::UnitTurnEnd { .. }))
        ));
        assert!(turns.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(0);
        bus.publish(CombatEvent::UnitDefeated {
            unit: CombatantId(3),
        });
    }

    #[test]
    fn events_serialize_with_topic_and_variant_tags() {
        let event = Event::from(CombatEvent::UnitDefeated {
            unit: CombatantId(3),
        });

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "Combat": { "UnitDefeated": { "unit": 3 } } })
        );
    }
}
