use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use log::debug;

use super::model::AppSnapshotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::app_snapshots::dsl::*;
use karuna_core::errors::Result;
use karuna_core::snapshots::SnapshotStore;

/// Snapshot store backed by the `app_snapshots` table.
pub struct SqliteSnapshotStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteSnapshotStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteSnapshotStore { pool, writer }
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        app_snapshots
            .filter(snapshot_key.eq(key))
            .select(snapshot_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let row = AppSnapshotDB {
            snapshot_key: key.to_string(),
            snapshot_value: value,
            updated_at: Utc::now().naive_utc(),
        };
        let size = row.snapshot_value.len();
        self.writer
            .exec(move |conn| {
                diesel::replace_into(app_snapshots)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await?;
        debug!("Stored snapshot '{}' ({} bytes)", key, size);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(app_snapshots.filter(snapshot_key.eq(key)))
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }
}
