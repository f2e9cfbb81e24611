//! Readiness queue ordered by action value.

use crate::state::{CombatantId, Roster};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
    id: CombatantId,
    /// Join sequence, the explicit tie-break between equal action values.
    seq: u64,
    action_value: u64,
}

/// Ordered collection of combatants waiting for their turn.
///
/// Ordering key is action value descending. Equal action values are broken
/// by join order: whoever entered the queue first stays in front. The
/// sequence number is assigned on [`add`](Self::add) and never changes, so
/// the tie-break does not depend on the stability of the sort or on the
/// previous ordering.
///
/// Membership changes only through `add`, `remove` and `clear`. Callers that
/// iterate while the scheduler may mutate the queue work on a
/// [`snapshot`](Self::snapshot).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadinessQueue {
    entries: Vec<QueueEntry>,
    next_seq: u64,
}

impl ReadinessQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combatant. Returns false if it was already queued.
    ///
    /// The queue is not re-sorted; call [`sort`](Self::sort) afterwards.
    pub fn add(&mut self, id: CombatantId, action_value: u64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(QueueEntry {
            id,
            seq: self.next_seq,
            action_value,
        });
        self.next_seq += 1;
        true
    }

    /// Removes a combatant. Returns true if it was queued.
    pub fn remove(&mut self, id: CombatantId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Front of the queue, if any.
    pub fn peek(&self) -> Option<CombatantId> {
        self.entries.first().map(|e| e.id)
    }

    /// Refreshes cached action values from the roster and re-orders.
    pub fn sort(&mut self, roster: &Roster) {
        for entry in &mut self.entries {
            if let Some(combatant) = roster.get(entry.id) {
                entry.action_value = combatant.action_value;
            }
        }
        self.entries.sort_by(|a, b| {
            b.action_value
                .cmp(&a.action_value)
                .then(a.seq.cmp(&b.seq))
        });
    }

    /// Ids in current queue order.
    pub fn snapshot(&self) -> Vec<CombatantId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Combatant, Position, Side};
    use crate::stats::BaseStats;

    fn roster(values: &[(u32, u64)]) -> Roster {
        values
            .iter()
            .map(|&(id, av)| {
                let mut c = Combatant::new(
                    CombatantId(id),
                    Side::Ally,
                    Position::ORIGIN,
                    BaseStats::new(10, 1, 1, 0, 0, 10),
                );
                c.action_value = av;
                c
            })
            .collect()
    }

    #[test]
    fn sorts_by_action_value_descending() {
        let roster = roster(&[(1, 10), (2, 90), (3, 50)]);
        let mut queue = ReadinessQueue::new();
        for c in roster.iter() {
            queue.add(c.id, c.action_value);
        }

        queue.sort(&roster);

        assert_eq!(
            queue.snapshot(),
            vec![CombatantId(2), CombatantId(3), CombatantId(1)]
        );
        assert_eq!(queue.peek(), Some(CombatantId(2)));
    }

    #[test]
    fn ties_keep_join_order_regardless_of_id() {
        let mut roster = roster(&[(5, 40), (1, 40), (3, 40)]);
        let mut queue = ReadinessQueue::new();
        queue.add(CombatantId(5), 40);
        queue.add(CombatantId(1), 40);
        queue.add(CombatantId(3), 40);

        queue.sort(&roster);
        assert_eq!(
            queue.snapshot(),
            vec![CombatantId(5), CombatantId(1), CombatantId(3)]
        );

        // Pull #1 ahead, then tie again: join order is restored, not the
        // order of the previous sort.
        roster.get_mut(CombatantId(1)).unwrap().action_value = 99;
        queue.sort(&roster);
        roster.get_mut(CombatantId(1)).unwrap().action_value = 40;
        queue.sort(&roster);
        assert_eq!(
            queue.snapshot(),
            vec![CombatantId(5), CombatantId(1), CombatantId(3)]
        );
    }

    #[test]
    fn add_is_idempotent_and_remove_reports_membership() {
        let mut queue = ReadinessQueue::new();
        assert!(queue.add(CombatantId(1), 0));
        assert!(!queue.add(CombatantId(1), 0));
        assert_eq!(queue.len(), 1);

        assert!(queue.remove(CombatantId(1)));
        assert!(!queue.remove(CombatantId(1)));
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }
}
