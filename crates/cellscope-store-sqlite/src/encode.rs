//! Encoding and decoding between the typed record and the flat superset row
//! stored in SQLite.
//!
//! Cell samples leave `latitude`/`longitude` NULL; location samples leave
//! the identity and signal columns NULL. The sample kind is recovered on
//! read from which column group is populated.

use cellscope_core::{
  record::{
    CellRecord, LocationRecord, MeasurementRecord, RecordPayload, SENTINEL,
    Technology,
  },
  store::StoredRecord,
};

use crate::Result;

// ─── Technology ──────────────────────────────────────────────────────────────

pub fn decode_technology(s: &str) -> Result<Technology> {
  match s {
    "2G (GSM)" => Ok(Technology::Gsm),
    "3G (WCDMA)" => Ok(Technology::Wcdma),
    "4G (LTE)" => Ok(Technology::Lte),
    "Unknown" => Ok(Technology::Unknown),
    other => {
      Err(cellscope_core::Error::UnknownTechnology(other.to_owned()).into())
    }
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values bound on insert.
pub struct NewRow {
  pub event_time:       String,
  pub plmn_id:          Option<String>,
  pub area_code:        Option<i64>,
  pub cell_id:          Option<i64>,
  pub signal_primary:   Option<String>,
  pub signal_secondary: Option<String>,
  pub technology:       Option<String>,
  pub latitude:         Option<f64>,
  pub longitude:        Option<f64>,
}

pub fn record_to_row(record: &MeasurementRecord) -> NewRow {
  match &record.payload {
    RecordPayload::Cell(cell) => NewRow {
      event_time:       record.event_time.clone(),
      plmn_id:          Some(cell.plmn_id.clone()),
      area_code:        cell.area_code,
      cell_id:          cell.cell_id,
      signal_primary:   Some(cell.signal_primary.clone()),
      signal_secondary: Some(cell.signal_secondary.clone()),
      technology:       Some(cell.technology.label().to_owned()),
      latitude:         None,
      longitude:        None,
    },
    RecordPayload::Location(loc) => NewRow {
      event_time:       record.event_time.clone(),
      plmn_id:          None,
      area_code:        None,
      cell_id:          None,
      signal_primary:   None,
      signal_secondary: None,
      technology:       None,
      latitude:         Some(loc.latitude),
      longitude:        Some(loc.longitude),
    },
  }
}

/// Raw values read straight out of a `measurements` row.
pub struct RawRow {
  pub id:               i64,
  pub event_time:       String,
  pub plmn_id:          Option<String>,
  pub area_code:        Option<i64>,
  pub cell_id:          Option<i64>,
  pub signal_primary:   Option<String>,
  pub signal_secondary: Option<String>,
  pub technology:       Option<String>,
  pub latitude:         Option<f64>,
  pub longitude:        Option<f64>,
}

impl RawRow {
  /// Rebuild the typed record. The kind is decided by which column group is
  /// populated; a row with neither kind is malformed.
  pub fn into_stored(self) -> Result<StoredRecord> {
    let payload = match (self.latitude, self.longitude, self.technology) {
      (Some(latitude), Some(longitude), _) => {
        RecordPayload::Location(LocationRecord { latitude, longitude })
      }
      (_, _, Some(technology)) => RecordPayload::Cell(CellRecord {
        plmn_id:          self.plmn_id.unwrap_or_else(|| SENTINEL.to_owned()),
        area_code:        self.area_code,
        cell_id:          self.cell_id,
        signal_primary:   self
          .signal_primary
          .unwrap_or_else(|| SENTINEL.to_owned()),
        signal_secondary: self
          .signal_secondary
          .unwrap_or_else(|| SENTINEL.to_owned()),
        technology:       decode_technology(&technology)?,
      }),
      _ => {
        return Err(cellscope_core::Error::MalformedRow { id: self.id }.into());
      }
    };

    Ok(StoredRecord {
      id:     self.id,
      record: MeasurementRecord { event_time: self.event_time, payload },
    })
  }
}
