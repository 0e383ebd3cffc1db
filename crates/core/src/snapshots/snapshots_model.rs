use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DOCUMENT_SNAPSHOT_KEY, DONATION_SNAPSHOT_KEY, SNAPSHOT_SCHEMA_VERSION, WEB3_SNAPSHOT_KEY,
};

/// Slots in the snapshot store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnapshotKey {
    Donations,
    Web3,
    Documents,
}

impl SnapshotKey {
    pub const ALL: [SnapshotKey; 3] = [
        SnapshotKey::Donations,
        SnapshotKey::Web3,
        SnapshotKey::Documents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKey::Donations => DONATION_SNAPSHOT_KEY,
            SnapshotKey::Web3 => WEB3_SNAPSHOT_KEY,
            SnapshotKey::Documents => DOCUMENT_SNAPSHOT_KEY,
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored form of every snapshot: `{ "version": N, "state": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotEnvelope<T> {
    pub version: u32,
    pub state: T,
}

impl<T> SnapshotEnvelope<T> {
    pub fn current(state: T) -> Self {
        Self {
            version: SNAPSHOT_SCHEMA_VERSION,
            state,
        }
    }
}
