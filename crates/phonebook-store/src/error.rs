//! Error type for `phonebook-store`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no file configured for this phone book")]
  NoFile,

  #[error("i/o error on {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unsupported snapshot version {found} (expected {expected})")]
  UnsupportedVersion { found: u32, expected: u32 },
}

impl Error {
  /// Whether the error means the file simply does not exist yet.
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
