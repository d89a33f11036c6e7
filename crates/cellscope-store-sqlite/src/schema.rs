//! SQL schema for the measurement table.
//!
//! The active schema version lives in `PRAGMA user_version`. Opening a store
//! whose on-disk version is older than the target drops the table and
//! recreates it from this definition — an upgrade forgets all stored rows.

/// Current schema version, stamped into `PRAGMA user_version` at open.
pub const SCHEMA_VERSION: i32 = 1;

/// The one measurement table; idempotent thanks to `CREATE TABLE IF NOT
/// EXISTS`.
///
/// A row is exactly one of two kinds: a cell sample (identity and signal
/// columns set, latitude/longitude NULL) or a location sample (the reverse).
/// `event_time` is always present. Gated text columns store the sentinel
/// verbatim.
pub const CREATE_TABLE: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS measurements (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    event_time       TEXT NOT NULL,
    plmn_id          TEXT,
    area_code        INTEGER,
    cell_id          INTEGER,
    signal_primary   TEXT,
    signal_secondary TEXT,
    technology       TEXT,
    latitude         REAL,
    longitude        REAL
);
";

/// Destructive migration step: any older on-disk schema is dropped wholesale
/// before [`CREATE_TABLE`] is applied.
pub const DROP_TABLE: &str = "DROP TABLE IF EXISTS measurements;";
