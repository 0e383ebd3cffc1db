//! Web domain event sink implementation.
//!
//! Receives domain events and sends them to a background queue worker
//! for debounced processing.

use std::sync::{Arc, Mutex};

use karuna_core::events::{DomainEvent, DomainEventSink};
use karuna_core::snapshots::SnapshotService;
use tokio::sync::mpsc;

use super::queue_worker::event_queue_worker;

/// Domain event sink for the web server runtime.
///
/// Services need the sink at construction time while the worker needs the
/// snapshot service built from those services, so initialization has two
/// phases:
///
/// 1. Create the sink with `new()`; events are buffered in the channel.
/// 2. Call `start_worker()` once the snapshot service exists.
pub struct WebDomainEventSink {
    tx: mpsc::UnboundedSender<DomainEvent>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<DomainEvent>>>,
}

impl WebDomainEventSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Spawns the background worker. Later calls are ignored.
    pub fn start_worker(&self, snapshots: Arc<SnapshotService>) {
        let rx = self
            .rx
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        match rx {
            Some(rx) => {
                tokio::spawn(event_queue_worker(rx, snapshots));
            }
            None => tracing::warn!("Domain event worker already started"),
        }
    }

    #[cfg(test)]
    pub fn with_sender(tx: mpsc::UnboundedSender<DomainEvent>) -> Self {
        Self {
            tx,
            rx: Mutex::new(None),
        }
    }
}

impl Default for WebDomainEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        // Events are best-effort; a closed channel only means shutdown.
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Failed to emit domain event: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_sends_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = WebDomainEventSink::with_sender(tx);

        sink.emit(DomainEvent::documents_changed(vec!["abc".to_string()]));
        sink.emit(DomainEvent::campaigns_changed(vec!["1".to_string()]));
        sink.emit(DomainEvent::campaigns_changed(vec!["2".to_string()]));

        assert_eq!(
            rx.try_recv().unwrap(),
            DomainEvent::documents_changed(vec!["abc".to_string()])
        );
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
