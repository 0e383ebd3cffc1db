//! Database model for stored snapshots.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// One serialized snapshot per key
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppSnapshotDB {
    pub snapshot_key: String,
    pub snapshot_value: String,
    pub updated_at: NaiveDateTime,
}
