//! Event queue worker for processing domain events.
//!
//! Receives events from an mpsc channel, debounces them with a short window,
//! then writes the affected snapshots.

use std::sync::Arc;
use std::time::Duration;

use karuna_core::events::DomainEvent;
use karuna_core::snapshots::SnapshotService;
use tokio::sync::mpsc;

use super::planner::plan_snapshot_saves;

/// Debounce window for collecting events before processing.
const DEBOUNCE_DURATION: Duration = Duration::from_millis(250);

/// Runs the event queue worker until every sender is dropped.
///
/// Batches are processed inline, so a slow save delays the next batch rather
/// than overlapping with it.
pub async fn event_queue_worker(
    mut rx: mpsc::UnboundedReceiver<DomainEvent>,
    snapshots: Arc<SnapshotService>,
) {
    tracing::info!("Domain event queue worker started");

    let mut pending_events: Vec<DomainEvent> = Vec::new();

    loop {
        if pending_events.is_empty() {
            match rx.recv().await {
                Some(event) => pending_events.push(event),
                None => break,
            }
            continue;
        }

        tokio::select! {
            event = rx.recv() => {
                match event {
                    Some(event) => pending_events.push(event),
                    None => {
                        process_event_batch(&pending_events, &snapshots).await;
                        pending_events.clear();
                        break;
                    }
                }
            }
            _ = tokio::time::sleep(DEBOUNCE_DURATION) => {
                let batch = std::mem::take(&mut pending_events);
                process_event_batch(&batch, &snapshots).await;
            }
        }
    }

    tracing::info!("Domain event queue worker shutting down");
}

/// Saves every snapshot touched by `events`.
async fn process_event_batch(events: &[DomainEvent], snapshots: &SnapshotService) {
    let keys = plan_snapshot_saves(events);
    tracing::debug!(
        "Processing batch of {} domain event(s) into {} snapshot save(s)",
        events.len(),
        keys.len()
    );

    for key in keys {
        if let Err(e) = snapshots.save(key).await {
            tracing::warn!("Failed to save snapshot '{}': {}", key, e);
        }
    }
}
