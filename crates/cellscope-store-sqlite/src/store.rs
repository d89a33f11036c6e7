//! [`SqliteStore`] — the SQLite implementation of [`MeasurementStore`].

use std::path::Path;

use cellscope_core::{
  record::MeasurementRecord,
  store::{MeasurementStore, StoredRecord},
};

use crate::{
  Error, Result,
  encode::{RawRow, record_to_row},
  schema::{CREATE_TABLE, DROP_TABLE},
};

/// A measurement store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
///
/// Opening runs the version check: an on-disk schema older than the target
/// version is dropped and recreated, which discards every stored row. That
/// destructive policy matches the store format this crate is compatible
/// with.
#[derive(Clone, Debug)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and bring the schema to
  /// `target_version`.
  pub async fn open(
    path: impl AsRef<Path>,
    target_version: i32,
  ) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema(target_version).await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory(target_version: i32) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema(target_version).await?;
    Ok(store)
  }

  async fn init_schema(&self, target_version: i32) -> Result<()> {
    let on_disk: i32 = self
      .conn
      .call(|conn| Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?))
      .await?;

    if on_disk > target_version {
      return Err(Error::VersionDowngrade { on_disk, requested: target_version });
    }

    // 0 is a fresh database, not an old schema; only a genuinely older
    // version triggers the drop.
    let drop_first = on_disk != 0 && on_disk < target_version;

    self
      .conn
      .call(move |conn| {
        if drop_first {
          conn.execute_batch(DROP_TABLE)?;
        }
        conn.execute_batch(CREATE_TABLE)?;
        conn.pragma_update(None, "user_version", target_version)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── MeasurementStore impl ───────────────────────────────────────────────────

impl MeasurementStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, record: &MeasurementRecord) -> Result<i64> {
    let row = record_to_row(record);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO measurements (
             event_time, plmn_id, area_code, cell_id,
             signal_primary, signal_secondary, technology,
             latitude, longitude
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            row.event_time,
            row.plmn_id,
            row.area_code,
            row.cell_id,
            row.signal_primary,
            row.signal_secondary,
            row.technology,
            row.latitude,
            row.longitude,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(id)
  }

  async fn samples(&self) -> Result<Vec<StoredRecord>> {
    let raws: Vec<RawRow> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, event_time, plmn_id, area_code, cell_id,
                  signal_primary, signal_secondary, technology,
                  latitude, longitude
           FROM measurements
           ORDER BY id",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(RawRow {
              id:               row.get(0)?,
              event_time:       row.get(1)?,
              plmn_id:          row.get(2)?,
              area_code:        row.get(3)?,
              cell_id:          row.get(4)?,
              signal_primary:   row.get(5)?,
              signal_secondary: row.get(6)?,
              technology:       row.get(7)?,
              latitude:         row.get(8)?,
              longitude:        row.get(9)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRow::into_stored).collect()
  }

  /// Idempotent: closing an already-closed store is a no-op.
  async fn close(&self) -> Result<()> {
    match self.conn.clone().close().await {
      Ok(()) | Err(tokio_rusqlite::Error::ConnectionClosed) => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}
