use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Identifies one tick registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(u64);

#[derive(Debug)]
struct Slot {
    interval: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct Slots {
    next_id: u64,
    entries: BTreeMap<u64, Slot>,
}

/// Single-threaded repeating tick source driven by an event loop.
///
/// Registrations are owned by [`TickHandle`]s; dropping a handle removes its slot at once, so a
/// cancelled tick can never be reported by a later [`TickScheduler::poll`].
#[derive(Clone, Debug, Default)]
pub struct TickScheduler {
    slots: Rc<RefCell<Slots>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repeating tick every `interval`, first due one interval after `now`.
    pub fn schedule(&self, interval: Duration, now: Duration) -> TickHandle {
        let interval = interval.max(Duration::from_nanos(1));
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.entries.insert(
            id,
            Slot {
                interval,
                next_due: now + interval,
            },
        );
        tracing::trace!(id, interval_us = interval.as_micros() as u64, "tick scheduled");
        TickHandle {
            id: TickId(id),
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Ticks due at `now`, in registration order. Each due tick fires once per poll; missed
    /// intervals are coalesced and the next deadline stays on the original grid.
    pub fn poll(&self, now: Duration) -> Vec<TickId> {
        let mut slots = self.slots.borrow_mut();
        let mut fired = Vec::new();
        for (&id, slot) in slots.entries.iter_mut() {
            if slot.next_due > now {
                continue;
            }
            let behind = (now - slot.next_due).as_nanos();
            let steps = behind / slot.interval.as_nanos() + 1;
            let advance = u64::try_from(slot.interval.as_nanos() * steps).unwrap_or(u64::MAX);
            slot.next_due += Duration::from_nanos(advance);
            fired.push(TickId(id));
        }
        fired
    }

    /// Earliest pending deadline, if any tick is registered.
    pub fn next_due(&self) -> Option<Duration> {
        self.slots
            .borrow()
            .entries
            .values()
            .map(|s| s.next_due)
            .min()
    }

    /// Number of live registrations.
    pub fn active(&self) -> usize {
        self.slots.borrow().entries.len()
    }
}

/// Scoped ownership of one tick registration; dropping it cancels the tick.
#[derive(Debug)]
pub struct TickHandle {
    id: TickId,
    slots: Weak<RefCell<Slots>>,
}

impl TickHandle {
    pub fn id(&self) -> TickId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.slots
            .upgrade()
            .is_some_and(|s| s.borrow().entries.contains_key(&self.id.0))
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().entries.remove(&self.id.0);
            tracing::trace!(id = self.id.0, "tick cancelled");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
