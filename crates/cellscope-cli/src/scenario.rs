//! Captured trigger scenarios — the replay stand-in for the host's radio
//! and location callbacks.
//!
//! A scenario file is a JSON document:
//!
//! ```json
//! {
//!   "triggers": [
//!     {
//!       "platform_level": 30,
//!       "network_type": "NR",
//!       "cells": [
//!         { "technology": "lte", "operator": "310260",
//!           "tac": 100, "ci": 5000, "rsrp": -95, "rsrq": -10 }
//!       ],
//!       "fix": { "latitude": 35.6997, "longitude": 51.338 }
//!     }
//!   ]
//! }
//! ```

use cellscope_core::{
  capability::Capabilities,
  measurement::{GeoFix, NetworkType, RadioSnapshot, RawMeasurement},
};
use cellscope_sampler::{LocationProvider, ProviderError, RadioProvider};
use serde::Deserialize;

/// A full capture: one entry per trigger event, replayed in order.
#[derive(Debug, Deserialize)]
pub struct Scenario {
  pub triggers: Vec<Trigger>,
}

/// One trigger event as delivered by the host.
#[derive(Debug, Deserialize)]
pub struct Trigger {
  /// Host platform level — the ordinal the capability gates derive from.
  pub platform_level: u32,

  /// Overall network-type code, e.g. `"LTE"`, `"NR"`.
  pub network_type: String,

  #[serde(default)]
  pub cells: Vec<RawMeasurement>,

  #[serde(default)]
  pub fix: Option<GeoFix>,

  /// When false, the replayed radio reports a permission failure and the
  /// trigger does not run.
  #[serde(default = "granted")]
  pub permissions_granted: bool,
}

fn granted() -> bool { true }

/// Radio provider over one captured trigger.
pub struct ScenarioRadio<'a>(pub &'a Trigger);

impl RadioProvider for ScenarioRadio<'_> {
  fn snapshot(&self) -> Result<RadioSnapshot, ProviderError> {
    if !self.0.permissions_granted {
      return Err(ProviderError::PermissionDenied);
    }
    Ok(RadioSnapshot {
      cells:        self.0.cells.clone(),
      capabilities: Capabilities::from_platform_level(self.0.platform_level),
      network_type: NetworkType::from_code(&self.0.network_type),
    })
  }
}

/// Location provider over one captured trigger.
pub struct ScenarioLocation<'a>(pub &'a Trigger);

impl LocationProvider for ScenarioLocation<'_> {
  fn last_fix(&self) -> Option<GeoFix> { self.0.fix }
}
