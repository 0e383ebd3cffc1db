//! Maps batches of domain events to the snapshots they invalidate.

use std::collections::BTreeSet;

use karuna_core::events::DomainEvent;
use karuna_core::snapshots::SnapshotKey;

/// Snapshot keys to rewrite after `events`, each at most once.
pub fn plan_snapshot_saves(events: &[DomainEvent]) -> BTreeSet<SnapshotKey> {
    events
        .iter()
        .map(|event| match event {
            DomainEvent::CampaignsChanged { .. }
            | DomainEvent::DonationRecorded { .. }
            | DomainEvent::DonationStatusChanged { .. } => SnapshotKey::Donations,
            DomainEvent::TransactionsChanged { .. } => SnapshotKey::Web3,
            DomainEvent::DocumentsChanged { .. } => SnapshotKey::Documents,
        })
        .collect()
}
