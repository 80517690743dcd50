//! Deferred Actions
//!
//! Fire-and-forget delays pumped by the host loop. Once scheduled, an
//! action always fires on the first pump at or past its due time; there is
//! no cancellation handle.

/// What to do when a deferral comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Post-ready automatic fullscreen request
    AutoEnter,
    /// Post-orientation-change layout reapply
    OrientationSettle,
}

#[derive(Debug)]
struct Deferred {
    action: DeferredAction,
    due_ms: u64,
}

/// Due-time queue over the host loop's monotonic millisecond clock
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<Deferred>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, action: DeferredAction, due_ms: u64) {
        self.entries.push(Deferred { action, due_ms });
    }

    /// Remove and return every action due at `now_ms`, in schedule order
    pub fn take_due(&mut self, now_ms: u64) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.entries.retain(|entry| {
            if entry.due_ms <= now_ms {
                due.push(entry.action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
