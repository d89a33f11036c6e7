//! [`Sampler`] — one complete, synchronous pipeline run per trigger event.

use cellscope_core::{
  measurement::{GeoFix, RadioSnapshot},
  normalize,
  store::MeasurementStore,
  summary,
};

use crate::provider::{
  DisplaySink, LocationProvider, ProviderError, RadioProvider,
};

/// What one trigger run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerReport {
  /// Records written, including the location record when a fix was present.
  pub inserted: usize,
  /// Records whose insert failed and was skipped.
  pub skipped:  usize,
  /// The summary text published to the sink.
  pub summary:  String,
}

/// Drives the normalize → persist → render pipeline.
///
/// Holds the store handle for its lifetime; [`Sampler::shutdown`] releases
/// it. Triggers are expected to arrive serialized — the host delivers them
/// one at a time, and each run completes before the next begins.
pub struct Sampler<S, D> {
  store: S,
  sink:  D,
}

impl<S: MeasurementStore, D: DisplaySink> Sampler<S, D> {
  pub fn new(store: S, sink: D) -> Self { Self { store, sink } }

  /// The underlying store handle.
  pub fn store(&self) -> &S { &self.store }

  /// Pull from the providers and run one trigger.
  ///
  /// A provider failure (access not granted, radio unreadable) means the
  /// trigger does not run at all — no partial state is written.
  pub async fn run<R, L>(
    &mut self,
    radio: &R,
    location: &L,
  ) -> Result<TriggerReport, ProviderError>
  where
    R: RadioProvider,
    L: LocationProvider,
  {
    let snapshot = match radio.snapshot() {
      Ok(snapshot) => snapshot,
      Err(err) => {
        tracing::debug!(error = %err, "trigger skipped");
        return Err(err);
      }
    };
    let fix = location.last_fix();

    Ok(self.on_trigger(&snapshot, fix.as_ref()).await)
  }

  /// One complete pipeline run over an already-pulled snapshot.
  ///
  /// Every raw item is rendered into the summary whether or not its insert
  /// succeeds; a failed insert is logged and counted as skipped, never
  /// fatal to the batch.
  pub async fn on_trigger(
    &mut self,
    snapshot: &RadioSnapshot,
    fix: Option<&GeoFix>,
  ) -> TriggerReport {
    let mut inserted = 0;
    let mut skipped = 0;

    if let Some(fix) = fix {
      let record = normalize::location_sample(fix);
      match self.store.insert(&record).await {
        Ok(id) => {
          tracing::debug!(
            id,
            latitude = fix.latitude,
            longitude = fix.longitude,
            "stored location fix"
          );
          inserted += 1;
        }
        Err(err) => {
          tracing::warn!(error = %err, "failed to store location fix");
          skipped += 1;
        }
      }
      self.sink.mark_position(fix);
    }

    let mut text = summary::network_type_line(snapshot.network_type);

    for raw in &snapshot.cells {
      let record = normalize::normalize(raw, snapshot.capabilities);
      text.push_str(&summary::render_record(&record));

      match self.store.insert(&record).await {
        Ok(_) => inserted += 1,
        Err(err) => {
          tracing::warn!(error = %err, "failed to store cell sample, skipping");
          skipped += 1;
        }
      }
    }

    self.sink.publish(&text);

    TriggerReport { inserted, skipped, summary: text }
  }

  /// Close the store and drop the sink.
  pub async fn shutdown(self) -> Result<(), S::Error> {
    self.store.close().await
  }
}
