//! Where services send their domain events.

use std::sync::{Arc, Mutex, MutexGuard};

use super::DomainEvent;

/// Receiver of domain events.
///
/// Services call `emit` after a mutation has been applied and the state lock
/// released. `emit` must return quickly: persistence happens elsewhere, on the
/// receiving side of whatever queue the implementation feeds. A sink that
/// cannot deliver drops the event; the mutation stands.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Sink used when nothing listens, e.g. services built without a runtime.
#[derive(Clone, Copy, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Keeps every emitted event in memory so tests can assert on them.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.recorded().clone()
    }

    /// Returns the recorded events and forgets them.
    pub fn take(&self) -> Vec<DomainEvent> {
        std::mem::take(&mut *self.recorded())
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.recorded().push(event);
    }
}
