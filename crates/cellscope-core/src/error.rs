//! Error types for `cellscope-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown technology label: {0:?}")]
  UnknownTechnology(String),

  /// A stored row that is neither a cell sample nor a location sample.
  #[error("row {id} has no recognisable sample kind")]
  MalformedRow { id: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
