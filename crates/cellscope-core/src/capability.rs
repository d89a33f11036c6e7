//! Capability descriptor — which gated radio fields the running host can
//! actually supply.
//!
//! The host platform gates some fields on its version ordinal. Injecting the
//! resolved descriptor (rather than the ordinal itself) keeps the normalizer
//! testable without a host.

use serde::{Deserialize, Serialize};

/// Platform level at which LTE RSRP/RSRQ become readable.
pub const LTE_SIGNAL_DETAIL_LEVEL: u32 = 26;
/// Platform level at which the operator (PLMN) identity becomes readable.
pub const OPERATOR_IDENTITY_LEVEL: u32 = 28;
/// Platform level at which WCDMA Ec/N0 becomes readable.
pub const WCDMA_ECNO_LEVEL: u32 = 30;

/// Which gated fields the host can supply. A field that fails its gate is
/// substituted with the `"N/A"` sentinel by the normalizer — never surfaced
/// as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
  /// LTE RSRP and RSRQ are readable.
  pub lte_signal_detail: bool,
  /// The operator (PLMN) identity string is readable.
  pub operator_identity: bool,
  /// WCDMA Ec/N0 is readable.
  pub wcdma_ecno:        bool,
}

impl Capabilities {
  /// Every gated field readable.
  pub fn all() -> Self {
    Self {
      lte_signal_detail: true,
      operator_identity: true,
      wcdma_ecno:        true,
    }
  }

  /// No gated field readable — the floor every gate falls back to.
  pub fn none() -> Self { Self::default() }

  /// Derive the descriptor from the host's ordinal platform level.
  pub fn from_platform_level(level: u32) -> Self {
    Self {
      lte_signal_detail: level >= LTE_SIGNAL_DETAIL_LEVEL,
      operator_identity: level >= OPERATOR_IDENTITY_LEVEL,
      wcdma_ecno:        level >= WCDMA_ECNO_LEVEL,
    }
  }
}
