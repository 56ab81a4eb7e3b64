//! Secret codes: validation, random generation and the symbol alphabet.

use rand_core::RngCore;

use crate::{Error, Result};

/// Symbols a code may use; a game with `n` symbols draws from the first `n`.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A code of distinct symbols that the player tries to guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode {
  code:    String,
  symbols: usize,
}

impl SecretCode {
  /// Check that a code of `length` distinct symbols can be drawn from the
  /// first `symbols` characters of [`ALPHABET`], returning both as sizes.
  ///
  /// Sizes are signed so that negative user input is reported with the same
  /// messages as other out-of-range values.
  pub fn validate(length: i64, symbols: i64) -> Result<(usize, usize)> {
    let max = ALPHABET.len() as i64;
    if !(1..=max).contains(&length) {
      return Err(Error::InvalidLength(length));
    }
    if symbols < length {
      return Err(Error::NotEnoughSymbols { length, symbols });
    }
    if symbols > max {
      return Err(Error::TooManySymbols(symbols));
    }
    // Both are within 1..=36 here.
    Ok((length as usize, symbols as usize))
  }

  /// Draw a random code of `length` distinct symbols.
  pub fn generate<R: RngCore + ?Sized>(
    length: i64,
    symbols: i64,
    rng: &mut R,
  ) -> Result<Self> {
    let (length, symbols) = Self::validate(length, symbols)?;

    let mut code = String::with_capacity(length);
    while code.len() < length {
      let symbol = char::from(ALPHABET[rng.next_u32() as usize % symbols]);
      if !code.contains(symbol) {
        code.push(symbol);
      }
    }
    tracing::debug!(length, symbols, "secret code prepared");
    Ok(Self { code, symbols })
  }

  pub fn as_str(&self) -> &str { &self.code }

  pub fn len(&self) -> usize { self.code.len() }

  pub fn is_empty(&self) -> bool { self.code.is_empty() }

  /// One `*` per symbol.
  pub fn masked(&self) -> String { "*".repeat(self.code.len()) }

  /// The symbols this code was drawn from, e.g. `0-9, a-f`.
  pub fn range(&self) -> String { symbol_range(self.symbols) }
}

/// Describe the first `symbols` characters of [`ALPHABET`].
pub fn symbol_range(symbols: usize) -> String {
  match symbols {
    0 => String::new(),
    1..=10 => format!("0-{}", symbols - 1),
    11 => "0-9, a".to_string(),
    _ => {
      let last = char::from(ALPHABET[symbols.min(ALPHABET.len()) - 1]);
      format!("0-9, a-{last}")
    }
  }
}
