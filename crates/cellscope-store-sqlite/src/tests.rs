//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use cellscope_core::{
  capability::Capabilities,
  measurement::{GeoFix, GsmCell, LteCell, RawMeasurement},
  normalize::{location_sample_at, normalize_at},
  record::{MeasurementRecord, RecordPayload, Technology},
  store::MeasurementStore,
};
use chrono::{NaiveDate, NaiveDateTime};

use crate::{Error, SCHEMA_VERSION, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory(SCHEMA_VERSION)
    .await
    .expect("in-memory store")
}

fn at() -> NaiveDateTime {
  NaiveDate::from_ymd_opt(2024, 5, 1)
    .unwrap()
    .and_hms_opt(13, 45, 0)
    .unwrap()
}

fn lte_sample() -> MeasurementRecord {
  normalize_at(
    &RawMeasurement::Lte(LteCell {
      operator: Some("310260".into()),
      tac:      100,
      ci:       5000,
      rsrp:     -95,
      rsrq:     -10,
    }),
    Capabilities::all(),
    at(),
  )
}

fn gsm_sample() -> MeasurementRecord {
  normalize_at(
    &RawMeasurement::Gsm(GsmCell {
      operator: Some("26201".into()),
      lac:      12,
      cid:      3456,
      dbm:      -73,
    }),
    Capabilities::none(),
    at(),
  )
}

fn location() -> MeasurementRecord {
  location_sample_at(&GeoFix { latitude: 35.6997, longitude: 51.338 }, at())
}

// ─── Round trip ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_read_back_cell_sample() {
  let s = store().await;

  let record = lte_sample();
  let id = s.insert(&record).await.unwrap();

  let all = s.samples().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, id);
  assert_eq!(all[0].record, record);
}

#[tokio::test]
async fn sentinel_strings_round_trip_verbatim() {
  let s = store().await;

  // Fully gated: plmn and both signals come back as the exact sentinel.
  let record = normalize_at(
    &RawMeasurement::Lte(LteCell {
      operator: Some("310260".into()),
      tac:      1,
      ci:       2,
      rsrp:     -95,
      rsrq:     -10,
    }),
    Capabilities::none(),
    at(),
  );
  s.insert(&record).await.unwrap();

  let all = s.samples().await.unwrap();
  let cell = all[0].record.as_cell().unwrap();
  assert_eq!(cell.plmn_id, "N/A");
  assert_eq!(cell.signal_primary, "N/A");
  assert_eq!(cell.signal_secondary, "N/A");
}

#[tokio::test]
async fn unknown_technology_round_trips() {
  let s = store().await;

  let record = normalize_at(&RawMeasurement::Other, Capabilities::all(), at());
  s.insert(&record).await.unwrap();

  let all = s.samples().await.unwrap();
  let cell = all[0].record.as_cell().unwrap();
  assert_eq!(cell.technology, Technology::Unknown);
  assert_eq!(cell.area_code, None);
  assert_eq!(cell.cell_id, None);
}

#[tokio::test]
async fn ids_increase_strictly_in_insertion_order() {
  let s = store().await;

  let records = [lte_sample(), gsm_sample(), location(), lte_sample()];
  let mut ids = Vec::new();
  for record in &records {
    ids.push(s.insert(record).await.unwrap());
  }

  assert!(ids.windows(2).all(|w| w[0] < w[1]));

  let all = s.samples().await.unwrap();
  assert_eq!(all.len(), records.len());
  for (stored, (id, record)) in all.iter().zip(ids.iter().zip(records.iter())) {
    assert_eq!(stored.id, *id);
    assert_eq!(&stored.record, record);
  }
}

#[tokio::test]
async fn cell_and_location_rows_are_disjoint_kinds() {
  let s = store().await;

  s.insert(&lte_sample()).await.unwrap();
  s.insert(&location()).await.unwrap();

  let all = s.samples().await.unwrap();
  assert!(matches!(all[0].record.payload, RecordPayload::Cell(_)));
  assert!(matches!(all[1].record.payload, RecordPayload::Location(_)));

  let loc = all[1].record.as_location().unwrap();
  assert_eq!(loc.latitude, 35.6997);
  assert_eq!(loc.longitude, 51.338);
  assert_eq!(all[1].record.event_time, "2024-05-01 13:45:00");
}

// ─── Versioning ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopen_with_same_version_keeps_rows() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("measurements.db");

  let s = SqliteStore::open(&path, 1).await.unwrap();
  s.insert(&lte_sample()).await.unwrap();
  s.insert(&gsm_sample()).await.unwrap();
  s.close().await.unwrap();

  let s = SqliteStore::open(&path, 1).await.unwrap();
  assert_eq!(s.samples().await.unwrap().len(), 2);
  s.close().await.unwrap();
}

#[tokio::test]
async fn upgrade_drops_all_rows() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("measurements.db");

  let s = SqliteStore::open(&path, 1).await.unwrap();
  s.insert(&lte_sample()).await.unwrap();
  s.close().await.unwrap();

  let s = SqliteStore::open(&path, 2).await.unwrap();
  assert!(s.samples().await.unwrap().is_empty());

  // Ids restart with the recreated table.
  let id = s.insert(&lte_sample()).await.unwrap();
  assert_eq!(id, 1);
  s.close().await.unwrap();
}

#[tokio::test]
async fn downgrade_is_refused() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("measurements.db");

  let s = SqliteStore::open(&path, 2).await.unwrap();
  s.insert(&lte_sample()).await.unwrap();
  s.close().await.unwrap();

  let err = SqliteStore::open(&path, 1).await.unwrap_err();
  assert!(matches!(
    err,
    Error::VersionDowngrade { on_disk: 2, requested: 1 }
  ));

  // The refused open must not have touched the data.
  let s = SqliteStore::open(&path, 2).await.unwrap();
  assert_eq!(s.samples().await.unwrap().len(), 1);
  s.close().await.unwrap();
}

// ─── Close ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn close_is_idempotent() {
  let s = store().await;
  s.close().await.unwrap();
  s.close().await.unwrap();
}

#[tokio::test]
async fn insert_after_close_fails() {
  let s = store().await;
  s.close().await.unwrap();
  assert!(s.insert(&lte_sample()).await.is_err());
}
