//! Traits over the host-side collaborators: the radio stack, the location
//! service, and whatever displays the summary.
//!
//! The pipeline reaches the host only through these seams, so the
//! orchestrator is testable without one.

use cellscope_core::measurement::{GeoFix, RadioSnapshot};
use thiserror::Error;

/// Why a provider could not produce a snapshot.
#[derive(Debug, Error)]
pub enum ProviderError {
  /// The host has not granted the access the provider needs. The trigger
  /// simply does not run; nothing is written.
  #[error("required access not granted")]
  PermissionDenied,

  /// The radio interface exists but could not be read.
  #[error("provider unavailable: {0}")]
  Unavailable(String),
}

/// Source of raw measurement batches.
pub trait RadioProvider {
  /// The current batch, capability descriptor, and overall network type.
  /// No guarantee of freshness or non-emptiness.
  fn snapshot(&self) -> Result<RadioSnapshot, ProviderError>;
}

/// Source of the best-known location fix.
pub trait LocationProvider {
  /// The current fix, if any. Consumed opportunistically.
  fn last_fix(&self) -> Option<GeoFix>;
}

/// Downstream sink for the rendered summary and map position.
pub trait DisplaySink {
  /// Receive the full rendered summary for one trigger.
  fn publish(&mut self, summary: &str);

  /// Mark the current position, e.g. on a map widget.
  fn mark_position(&mut self, fix: &GeoFix);
}
