//! The record normalizer — reduces any raw measurement to the uniform
//! record shape.
//!
//! Normalization is a pure function of its inputs: no storage, no display
//! state, no hidden state between calls. It is also total — the `Other` arm
//! guarantees every input produces a record.

use chrono::NaiveDateTime;

use crate::{
  capability::Capabilities,
  measurement::{GeoFix, RawMeasurement},
  record::{
    CellRecord, LocationRecord, MeasurementRecord, RecordPayload, SENTINEL,
    Technology,
  },
};

/// `event_time` format, local clock.
const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn stamp(at: NaiveDateTime) -> String {
  at.format(EVENT_TIME_FORMAT).to_string()
}

fn now() -> NaiveDateTime { chrono::Local::now().naive_local() }

/// Apply a capability gate: the value when readable, the sentinel when not.
fn gated(readable: bool, value: impl ToString) -> String {
  if readable {
    value.to_string()
  } else {
    SENTINEL.to_owned()
  }
}

/// The operator string, gated, with a sentinel fallback when the radio
/// reported none.
fn gated_operator(readable: bool, operator: Option<&str>) -> String {
  if readable {
    operator.unwrap_or(SENTINEL).to_owned()
  } else {
    SENTINEL.to_owned()
  }
}

/// Normalize `raw` under `caps`, stamped with the current local wall clock.
pub fn normalize(raw: &RawMeasurement, caps: Capabilities) -> MeasurementRecord {
  normalize_at(raw, caps, now())
}

/// Normalize with an explicit timestamp. [`normalize`] delegates here; tests
/// use it directly for deterministic `event_time` values.
pub fn normalize_at(
  raw: &RawMeasurement,
  caps: Capabilities,
  at: NaiveDateTime,
) -> MeasurementRecord {
  let cell = match raw {
    RawMeasurement::Lte(lte) => CellRecord {
      plmn_id:          gated_operator(caps.operator_identity, lte.operator.as_deref()),
      area_code:        Some(lte.tac),
      cell_id:          Some(lte.ci),
      signal_primary:   gated(caps.lte_signal_detail, lte.rsrp),
      signal_secondary: gated(caps.lte_signal_detail, lte.rsrq),
      technology:       Technology::Lte,
    },
    RawMeasurement::Wcdma(wcdma) => CellRecord {
      plmn_id:          gated_operator(caps.operator_identity, wcdma.operator.as_deref()),
      area_code:        Some(wcdma.lac),
      cell_id:          Some(wcdma.cid),
      signal_primary:   wcdma.dbm.to_string(),
      signal_secondary: gated(caps.wcdma_ecno, wcdma.ecno),
      technology:       Technology::Wcdma,
    },
    RawMeasurement::Gsm(gsm) => CellRecord {
      plmn_id:          gated_operator(caps.operator_identity, gsm.operator.as_deref()),
      area_code:        Some(gsm.lac),
      cell_id:          Some(gsm.cid),
      signal_primary:   gsm.dbm.to_string(),
      signal_secondary: SENTINEL.to_owned(),
      technology:       Technology::Gsm,
    },
    RawMeasurement::Other => CellRecord {
      plmn_id:          SENTINEL.to_owned(),
      area_code:        None,
      cell_id:          None,
      signal_primary:   SENTINEL.to_owned(),
      signal_secondary: SENTINEL.to_owned(),
      technology:       Technology::Unknown,
    },
  };

  MeasurementRecord {
    event_time: stamp(at),
    payload:    RecordPayload::Cell(cell),
  }
}

/// Build the location-kind record for a fix, stamped with the current local
/// wall clock.
pub fn location_sample(fix: &GeoFix) -> MeasurementRecord {
  location_sample_at(fix, now())
}

/// [`location_sample`] with an explicit timestamp.
pub fn location_sample_at(fix: &GeoFix, at: NaiveDateTime) -> MeasurementRecord {
  MeasurementRecord {
    event_time: stamp(at),
    payload:    RecordPayload::Location(LocationRecord {
      latitude:  fix.latitude,
      longitude: fix.longitude,
    }),
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::measurement::{GsmCell, LteCell, WcdmaCell};

  fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_opt(13, 45, 0)
      .unwrap()
  }

  fn lte() -> RawMeasurement {
    RawMeasurement::Lte(LteCell {
      operator: Some("310260".into()),
      tac:      100,
      ci:       5000,
      rsrp:     -95,
      rsrq:     -10,
    })
  }

  fn wcdma() -> RawMeasurement {
    RawMeasurement::Wcdma(WcdmaCell {
      operator: Some("23410".into()),
      lac:      77,
      cid:      90210,
      dbm:      -81,
      ecno:     -6,
    })
  }

  fn gsm() -> RawMeasurement {
    RawMeasurement::Gsm(GsmCell {
      operator: Some("26201".into()),
      lac:      12,
      cid:      3456,
      dbm:      -73,
    })
  }

  #[test]
  fn lte_with_full_capabilities() {
    let record = normalize_at(&lte(), Capabilities::all(), at());
    assert_eq!(record.event_time, "2024-05-01 13:45:00");

    let cell = record.as_cell().unwrap();
    assert_eq!(cell.plmn_id, "310260");
    assert_eq!(cell.area_code, Some(100));
    assert_eq!(cell.cell_id, Some(5000));
    assert_eq!(cell.signal_primary, "-95");
    assert_eq!(cell.signal_secondary, "-10");
    assert_eq!(cell.technology, Technology::Lte);
    assert_eq!(cell.technology.label(), "4G (LTE)");
  }

  #[test]
  fn lte_below_signal_gate_substitutes_sentinel() {
    let caps = Capabilities { operator_identity: true, ..Capabilities::none() };
    let cell_record = normalize_at(&lte(), caps, at());
    let cell = cell_record.as_cell().unwrap();

    assert_eq!(cell.signal_primary, "N/A");
    assert_eq!(cell.signal_secondary, "N/A");
    // identity fields are not signal-gated
    assert_eq!(cell.plmn_id, "310260");
    assert_eq!(cell.area_code, Some(100));
  }

  #[test]
  fn operator_gate_applies_to_every_technology() {
    let caps = Capabilities { operator_identity: false, ..Capabilities::all() };
    for raw in [lte(), wcdma(), gsm()] {
      let record = normalize_at(&raw, caps, at());
      assert_eq!(record.as_cell().unwrap().plmn_id, "N/A");
    }
  }

  #[test]
  fn missing_operator_falls_back_to_sentinel() {
    let raw = RawMeasurement::Gsm(GsmCell {
      operator: None,
      lac:      12,
      cid:      3456,
      dbm:      -73,
    });
    let record = normalize_at(&raw, Capabilities::all(), at());
    assert_eq!(record.as_cell().unwrap().plmn_id, "N/A");
  }

  #[test]
  fn wcdma_primary_signal_is_ungated() {
    let record = normalize_at(&wcdma(), Capabilities::none(), at());
    let cell = record.as_cell().unwrap();

    assert_eq!(cell.signal_primary, "-81");
    assert_eq!(cell.signal_secondary, "N/A");
    assert_eq!(cell.technology.label(), "3G (WCDMA)");

    let gated = normalize_at(&wcdma(), Capabilities::all(), at());
    assert_eq!(gated.as_cell().unwrap().signal_secondary, "-6");
  }

  #[test]
  fn gsm_secondary_signal_is_always_sentinel() {
    let record = normalize_at(&gsm(), Capabilities::all(), at());
    let cell = record.as_cell().unwrap();

    assert_eq!(cell.signal_primary, "-73");
    assert_eq!(cell.signal_secondary, "N/A");
    assert_eq!(cell.technology.label(), "2G (GSM)");
  }

  #[test]
  fn unrecognised_variant_normalizes_to_unknown() {
    let record = normalize_at(&RawMeasurement::Other, Capabilities::all(), at());
    let cell = record.as_cell().unwrap();

    assert_eq!(cell.technology, Technology::Unknown);
    assert_eq!(cell.plmn_id, "N/A");
    assert_eq!(cell.area_code, None);
    assert_eq!(cell.cell_id, None);
    assert_eq!(cell.signal_primary, "N/A");
    assert_eq!(cell.signal_secondary, "N/A");
  }

  #[test]
  fn normalization_has_no_state_between_calls() {
    // A gated call after an ungated one must not leak the earlier values.
    let _ = normalize_at(&lte(), Capabilities::all(), at());
    let record = normalize_at(&lte(), Capabilities::none(), at());
    let cell = record.as_cell().unwrap();

    assert_eq!(cell.plmn_id, "N/A");
    assert_eq!(cell.signal_primary, "N/A");
    assert_eq!(cell.signal_secondary, "N/A");
  }

  #[test]
  fn location_sample_carries_the_fix() {
    let fix = GeoFix { latitude: 35.6997, longitude: 51.3380 };
    let record = location_sample_at(&fix, at());

    assert_eq!(record.event_time, "2024-05-01 13:45:00");
    let loc = record.as_location().unwrap();
    assert_eq!(loc.latitude, 35.6997);
    assert_eq!(loc.longitude, 51.3380);
  }
}
