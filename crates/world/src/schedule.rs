//! The ordered queue of future updates (spec §4.1, C2).
//!
//! Mirrors the teacher's `TickEntry`/`TickPriority` shape in
//! `crates/world/src/lib.rs`, with one deliberate divergence: the teacher's
//! `Plot::tick` sorts `to_be_ticked` by `(ticks_left, tick_priority)` before
//! draining it. This scheduler does not sort by priority at all — priority
//! is accepted and stored, per spec, but insertion order is the real
//! tie-break, so draining scans the vector left to right instead.

use redlogic_blocks::BlockPos;

/// Accepted but not used for ordering (spec §4.1). Kept only so callers can
/// express intent the way the teacher's API lets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TickPriority {
    Highest,
    Higher,
    High,
    #[default]
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub pos: BlockPos,
    pub due_tick: u64,
    pub priority: TickPriority,
}

/// Unordered collection of pending scheduled ticks (spec §4.1).
#[derive(Debug, Default)]
pub struct TickQueue {
    entries: Vec<ScheduledTick>,
}

impl TickQueue {
    pub fn new() -> TickQueue {
        TickQueue {
            entries: Vec::new(),
        }
    }

    /// Enqueues `pos` to fire `delay` game ticks after `now`. A delay of 0
    /// still fires on the *next* `drain_due`, never within the same call
    /// that scheduled it (spec §4.1 failure mode).
    pub fn schedule(&mut self, pos: BlockPos, now: u64, delay: u32, priority: TickPriority) {
        self.entries.push(ScheduledTick {
            pos,
            due_tick: now + delay as u64,
            priority,
        });
    }

    pub fn pending_at(&self, pos: BlockPos) -> bool {
        self.entries.iter().any(|e| e.pos == pos)
    }

    /// Removes and returns all entries due at or before `now`, in insertion
    /// order. Scanning-and-removing left to right (rather than sorting by
    /// `(due_tick, priority)` as the teacher's `Plot::tick` does) is what
    /// keeps priority genuinely inert, as spec.md requires.
    pub fn drain_due(&mut self, now: u64) -> Vec<ScheduledTick> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.due_tick <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;
        due
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

    #[test]
    fn drain_due_preserves_insertion_order() {
        let mut q = TickQueue::new();
        q.schedule(BlockPos::new(0, 0), 0, 0, TickPriority::Normal);
        q.schedule(BlockPos::new(1, 0), 0, 0, TickPriority::Highest);
        q.schedule(BlockPos::new(2, 0), 0, 0, TickPriority::Normal);

        let due = q.drain_due(1);
        let order: Vec<i32> = due.iter().map(|e| e.pos.x).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn zero_delay_does_not_fire_same_tick() {
        let mut q = TickQueue::new();
        q.schedule(BlockPos::new(0, 0), 5, 0, TickPriority::Normal);
        assert_eq!(q.drain_due(5).len(), 1);
    }

    #[test]
    fn not_yet_due_entries_stay_queued() {
        let mut q = TickQueue::new();
        q.schedule(BlockPos::new(0, 0), 0, 4, TickPriority::Normal);
        assert!(q.drain_due(3).is_empty());
        assert_eq!(q.drain_due(4).len(), 1);
    }
}
