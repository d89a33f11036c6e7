//! The `MeasurementStore` trait.
//!
//! Implemented by storage backends (e.g. `cellscope-store-sqlite`). The
//! orchestrator depends on this abstraction, not on any concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::record::MeasurementRecord;

/// A persisted record together with its store-assigned surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
  /// Assigned on insert; monotonically increasing, unique, never reused
  /// within a schema generation.
  pub id:     i64,
  pub record: MeasurementRecord,
}

/// Abstraction over a measurement store backend.
///
/// The store is append-only by contract: records are inserted once and never
/// updated or deleted. Only a schema migration, which recreates the table,
/// destroys rows.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait MeasurementStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append one record and return its fresh surrogate id.
  fn insert<'a>(
    &'a self,
    record: &'a MeasurementRecord,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  /// All stored records in insertion (id) order.
  fn samples(
    &self,
  ) -> impl Future<Output = Result<Vec<StoredRecord>, Self::Error>> + Send + '_;

  /// Release the underlying resource. Safe to call more than once.
  fn close(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
