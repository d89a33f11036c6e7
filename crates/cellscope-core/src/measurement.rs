//! Raw measurement input — what the radio stack reports before
//! normalization.
//!
//! One variant per cell technology, each carrying the identity and
//! signal-strength fields that technology exposes.

use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;

// ─── Per-technology raw cells ────────────────────────────────────────────────

/// An LTE cell as reported by the radio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LteCell {
  /// Operator (PLMN) string, when the radio reported one.
  pub operator: Option<String>,
  /// Tracking-area code.
  pub tac:      i64,
  /// Cell identity.
  pub ci:       i64,
  /// Reference signal received power, dBm.
  pub rsrp:     i32,
  /// Reference signal received quality, dB.
  pub rsrq:     i32,
}

/// A WCDMA cell as reported by the radio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WcdmaCell {
  pub operator: Option<String>,
  /// Location-area code.
  pub lac:      i64,
  /// Cell identifier.
  pub cid:      i64,
  /// Signal strength, dBm.
  pub dbm:      i32,
  /// Ec/N0, dB.
  pub ecno:     i32,
}

/// A GSM cell as reported by the radio. GSM carries no secondary signal
/// metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GsmCell {
  pub operator: Option<String>,
  pub lac:      i64,
  pub cid:      i64,
  pub dbm:      i32,
}

// ─── Tagged union ────────────────────────────────────────────────────────────

/// A technology-tagged raw measurement.
///
/// `Other` doubles as the serde catch-all: a batch containing a technology
/// this build does not recognise still deserializes — and normalizes —
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "technology", rename_all = "lowercase")]
pub enum RawMeasurement {
  Lte(LteCell),
  Wcdma(WcdmaCell),
  Gsm(GsmCell),
  #[serde(other)]
  Other,
}

// ─── Overall network type ────────────────────────────────────────────────────

/// The host's overall network-type indicator — a platform-level signal,
/// distinct from any per-cell technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
  Lte,
  Nr,
  HspaPlus,
  Hspa,
  Umts,
  Edge,
  Gprs,
  Unknown,
}

impl NetworkType {
  /// Parse the host's code string; unrecognised codes are `Unknown`.
  pub fn from_code(code: &str) -> Self {
    match code {
      "LTE" => Self::Lte,
      "NR" => Self::Nr,
      "HSPA+" => Self::HspaPlus,
      "HSPA" => Self::Hspa,
      "UMTS" => Self::Umts,
      "EDGE" => Self::Edge,
      "GPRS" => Self::Gprs,
      _ => Self::Unknown,
    }
  }

  /// The label used in the summary's `Network Type:` line.
  pub fn label(self) -> &'static str {
    match self {
      Self::Lte => "4G (LTE)",
      Self::Nr => "5G",
      Self::HspaPlus => "3G (HSPA+)",
      Self::Hspa => "3G (HSPA)",
      Self::Umts => "3G (UMTS)",
      Self::Edge => "2G (EDGE)",
      Self::Gprs => "2G (GPRS)",
      Self::Unknown => "Unknown",
    }
  }
}

// ─── Provider outputs ────────────────────────────────────────────────────────

/// A best-known location fix. No freshness contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
  pub latitude:  f64,
  pub longitude: f64,
}

/// Everything the radio provider hands over for one trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioSnapshot {
  /// Cells in provider order; the pipeline never re-sorts them.
  pub cells:        Vec<RawMeasurement>,
  pub capabilities: Capabilities,
  pub network_type: NetworkType,
}
