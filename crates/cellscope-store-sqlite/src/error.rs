//! Error type for `cellscope-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] cellscope_core::Error),

  /// Storage unavailable or a write violated a column constraint.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The on-disk schema is newer than the requested version; opening is
  /// refused instead of migrating downward.
  #[error("on-disk schema version {on_disk} is newer than requested version {requested}")]
  VersionDowngrade { on_disk: i32, requested: i32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
