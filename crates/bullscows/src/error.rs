//! Error type for secret-code generation.

use thiserror::Error;

use crate::code::ALPHABET;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("can't generate a secret number with a length of {0}.")]
  InvalidLength(i64),

  #[error(
    "it's not possible to generate a code with a length of {length} with \
     {symbols} unique symbols."
  )]
  NotEnoughSymbols { length: i64, symbols: i64 },

  #[error(
    "maximum number of possible symbols in the code is {} (0-9, a-z).",
    ALPHABET.len()
  )]
  TooManySymbols(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
