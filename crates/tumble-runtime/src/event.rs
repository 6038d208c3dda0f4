use std::collections::{BTreeMap, VecDeque};

use tumble_blocks::Block;
use tumble_geom::Vec3i;

use crate::components::EntityId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    // Time housekeeping
    Tick,

    // An agent interacted with an entity
    Activate { entity: EntityId },

    // World mutations performed by systems
    BlockChanged { position: Vec3i, from: Block, to: Block },
}

#[derive(Clone, Debug)]
pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let tick = self.now;
        self.emit_at(tick, kind)
    }

    /// Ticks already passed are clamped to `now` so the event still drains.
    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let tick = tick.max(self.now);
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now.saturating_add(delta), kind)
    }

    /// Next event due at the current tick, FIFO.
    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now).and_then(|q| q.pop_front())
    }

    pub fn advance_tick(&mut self) {
        if self.by_tick.get(&self.now).is_some_and(|q| q.is_empty()) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Events queued at the current or later ticks.
    pub fn len(&self) -> usize {
        self.by_tick.values().map(|q| q.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_drain_in_tick_then_fifo_order() {
        let mut q = EventQueue::new();
        q.emit_after(1, Event::Activate { entity: 3 });
        q.emit_now(Event::Tick);
        q.emit_now(Event::Activate { entity: 1 });
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_ready().map(|e| e.kind), Some(Event::Tick));
        assert_eq!(
            q.pop_ready().map(|e| e.kind),
            Some(Event::Activate { entity: 1 })
        );
        assert!(q.pop_ready().is_none());
        q.advance_tick();
        let env = q.pop_ready().unwrap();
        assert_eq!(env.tick, 1);
        assert_eq!(env.kind, Event::Activate { entity: 3 });
        assert!(q.is_empty());
    }

    #[test]
    fn late_events_run_on_the_current_tick() {
        let mut q = EventQueue::new();
        q.advance_tick();
        q.advance_tick();
        q.emit_at(0, Event::Tick);
        let env = q.pop_ready().unwrap();
        assert_eq!(env.tick, 2);
        assert_eq!(env.kind, Event::Tick);
        for _ in 0..10 {
            while q.pop_ready().is_some() {}
            q.advance_tick();
        }
        assert!(q.is_empty());
    }

    #[test]
    fn far_future_delay_saturates() {
        let mut q = EventQueue::new();
        q.advance_tick();
        q.emit_after(u64::MAX, Event::Tick);
        assert_eq!(q.len(), 1);
        assert!(q.pop_ready().is_none());
    }
}
