//! Error and warning types for `phonebook-core`.

use thiserror::Error;

/// A field value that could not be parsed into its typed form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid date {0:?}: expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("invalid gender {0:?}: expected M or F")]
  InvalidGender(String),

  #[error("unknown contact kind: {0:?}")]
  UnknownKind(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A recoverable problem with a field value.
///
/// Setters never fail: the record falls back to a sentinel or keeps its
/// previous value, and the warning is handed back to the caller for display.
/// The `Display` form is the message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldWarning {
  #[error("Wrong number format!")]
  WrongNumberFormat(String),

  #[error("Bad birth date!")]
  BadBirthDate(String),

  #[error("Bad gender!")]
  BadGender(String),
}

impl FieldWarning {
  /// The raw input that was rejected.
  pub fn input(&self) -> &str {
    match self {
      Self::WrongNumberFormat(s) | Self::BadBirthDate(s) | Self::BadGender(s) => s,
    }
  }
}
