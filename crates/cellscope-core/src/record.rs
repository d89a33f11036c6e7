//! The uniform measurement record — the single output shape every raw
//! measurement reduces to.

use serde::{Deserialize, Serialize};

/// Placeholder stored when a field is not obtainable on the running host.
/// Stored verbatim in text columns; distinct from an absent field.
pub const SENTINEL: &str = "N/A";

// ─── Technology ──────────────────────────────────────────────────────────────

/// The cell technology a record was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technology {
  Gsm,
  Wcdma,
  Lte,
  /// Raw measurements outside the recognised set normalize to this marker.
  Unknown,
}

impl Technology {
  /// The fixed label stored in the `technology` column.
  pub fn label(self) -> &'static str {
    match self {
      Self::Gsm => "2G (GSM)",
      Self::Wcdma => "3G (WCDMA)",
      Self::Lte => "4G (LTE)",
      Self::Unknown => "Unknown",
    }
  }

  /// Display label for the unified area-code field.
  pub fn area_code_label(self) -> &'static str {
    match self {
      Self::Lte => "TAC",
      _ => "LAC",
    }
  }

  /// Display label for the technology's primary signal metric.
  pub fn signal_primary_label(self) -> &'static str {
    match self {
      Self::Lte => "RSRP",
      Self::Wcdma => "RSCP",
      _ => "RSSI",
    }
  }

  /// Display label for the secondary signal metric; GSM carries none.
  pub fn signal_secondary_label(self) -> Option<&'static str> {
    match self {
      Self::Lte => Some("RSRQ"),
      Self::Wcdma => Some("Ec/N0"),
      Self::Gsm | Self::Unknown => None,
    }
  }
}

// ─── Payloads ────────────────────────────────────────────────────────────────

/// The cell-sample payload. Gated text fields hold [`SENTINEL`] when the
/// host could not supply them; the integer identity fields use `None` as
/// the sentinel analog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
  pub plmn_id:          String,
  /// LTE tracking-area code, or GSM/WCDMA location-area code.
  pub area_code:        Option<i64>,
  /// Technology-specific encoding, preserved as reported.
  pub cell_id:          Option<i64>,
  /// RSRP (LTE), RSCP (WCDMA) or RSSI (GSM), as text so the sentinel fits.
  pub signal_primary:   String,
  /// RSRQ (LTE) or Ec/N0 (WCDMA); sentinel for GSM.
  pub signal_secondary: String,
  pub technology:       Technology,
}

/// The location-sample payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
  pub latitude:  f64,
  pub longitude: f64,
}

/// Exactly one of the two disjoint sample kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordPayload {
  Cell(CellRecord),
  Location(LocationRecord),
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// The uniform output entity. Constructed once by the normalizer, appended
/// once to the store, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
  /// Local wall-clock time at normalization, `YYYY-MM-DD HH:MM:SS`.
  pub event_time: String,
  pub payload:    RecordPayload,
}

impl MeasurementRecord {
  pub fn as_cell(&self) -> Option<&CellRecord> {
    match &self.payload {
      RecordPayload::Cell(cell) => Some(cell),
      RecordPayload::Location(_) => None,
    }
  }

  pub fn as_location(&self) -> Option<&LocationRecord> {
    match &self.payload {
      RecordPayload::Location(loc) => Some(loc),
      RecordPayload::Cell(_) => None,
    }
  }
}
