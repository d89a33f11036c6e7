//! Rendering of records into the newline-delimited summary text handed to
//! the display sink.

use crate::{
  measurement::NetworkType,
  record::{CellRecord, MeasurementRecord, RecordPayload, SENTINEL, Technology},
};

/// Integer identity fields print their sentinel analog as the text sentinel.
fn int_field(value: Option<i64>) -> String {
  value.map_or_else(|| SENTINEL.to_owned(), |v| v.to_string())
}

/// The overall network-type line that opens a summary.
pub fn network_type_line(network_type: NetworkType) -> String {
  format!("Network Type: {}\n\n", network_type.label())
}

/// One rendered entry per record, terminated by a blank line.
pub fn render_record(record: &MeasurementRecord) -> String {
  match &record.payload {
    RecordPayload::Cell(cell) => render_cell(&record.event_time, cell),
    RecordPayload::Location(loc) => {
      format!("Loc: ({}, {})\n\n", loc.latitude, loc.longitude)
    }
  }
}

fn render_cell(event_time: &str, cell: &CellRecord) -> String {
  if cell.technology == Technology::Unknown {
    return "Unknown Cell Info Type\n\n".to_owned();
  }

  let mut out = String::new();
  out.push_str(&format!("Event Time: {event_time}\n"));
  out.push_str(&format!("PLMN ID: {}\n", cell.plmn_id));
  out.push_str(&format!(
    "{}: {}\n",
    cell.technology.area_code_label(),
    int_field(cell.area_code)
  ));
  out.push_str(&format!("Cell ID: {}\n", int_field(cell.cell_id)));
  out.push_str(&format!(
    "{}: {}\n",
    cell.technology.signal_primary_label(),
    cell.signal_primary
  ));
  if let Some(label) = cell.technology.signal_secondary_label() {
    out.push_str(&format!("{label}: {}\n", cell.signal_secondary));
  }
  out.push_str(&format!("Cell Technology: {}\n\n", cell.technology.label()));
  out
}
