//! Tests for grading, code generation and game state.

use rand_core::{OsRng, RngCore, impls};

use crate::{ALPHABET, Error, Game, Grade, SecretCode, grade, symbol_range};

/// Yields the given values in a cycle.
struct Script(Vec<u32>, usize);

impl RngCore for Script {
  fn next_u32(&mut self) -> u32 {
    let v = self.0[self.1 % self.0.len()];
    self.1 += 1;
    v
  }

  fn next_u64(&mut self) -> u64 { impls::next_u64_via_u32(self) }

  fn fill_bytes(&mut self, dest: &mut [u8]) {
    impls::fill_bytes_via_next(self, dest)
  }

  fn try_fill_bytes(
    &mut self,
    dest: &mut [u8],
  ) -> Result<(), rand_core::Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}

fn secret(draws: Vec<u32>, length: i64, symbols: i64) -> SecretCode {
  SecretCode::generate(length, symbols, &mut Script(draws, 0)).unwrap()
}

// ─── Grading ─────────────────────────────────────────────────────────────────

#[test]
fn grade_counts_bulls_and_cows() {
  assert_eq!(grade("1234", "1234"), Grade { bulls: 4, cows: 0 });
  assert_eq!(grade("4321", "1234"), Grade { bulls: 0, cows: 4 });
  assert_eq!(grade("1243", "1234"), Grade { bulls: 2, cows: 2 });
  assert_eq!(grade("5678", "1234"), Grade::default());
}

#[test]
fn grade_scores_repeated_guess_symbols_each_time() {
  assert_eq!(grade("1111", "1234"), Grade { bulls: 1, cows: 3 });
  assert_eq!(grade("12", "1234"), Grade { bulls: 2, cows: 0 });
}

#[test]
fn grade_display() {
  assert_eq!(Grade { bulls: 0, cows: 0 }.to_string(), "None.");
  assert_eq!(Grade { bulls: 0, cows: 2 }.to_string(), "2 cow(s).");
  assert_eq!(Grade { bulls: 3, cows: 0 }.to_string(), "3 bull(s).");
  assert_eq!(
    Grade { bulls: 1, cows: 1 }.to_string(),
    "1 bull(s) and 1 cow(s)."
  );
}

// ─── Secret codes ────────────────────────────────────────────────────────────

#[test]
fn validate_rejects_impossible_sizes() {
  assert_eq!(SecretCode::validate(0, 10), Err(Error::InvalidLength(0)));
  assert_eq!(SecretCode::validate(37, 40), Err(Error::InvalidLength(37)));
  assert_eq!(
    SecretCode::validate(5, 4),
    Err(Error::NotEnoughSymbols {
      length:  5,
      symbols: 4,
    })
  );
  assert_eq!(SecretCode::validate(5, 37), Err(Error::TooManySymbols(37)));
  assert_eq!(SecretCode::validate(36, 36), Ok((36, 36)));
  assert_eq!(SecretCode::validate(4, 10), Ok((4, 10)));
}

#[test]
fn validate_reports_negative_sizes() {
  assert_eq!(SecretCode::validate(-1, 10), Err(Error::InvalidLength(-1)));
  assert_eq!(
    SecretCode::validate(3, -2),
    Err(Error::NotEnoughSymbols {
      length:  3,
      symbols: -2,
    })
  );
  assert_eq!(
    Error::InvalidLength(-1).to_string(),
    "can't generate a secret number with a length of -1."
  );
}

#[test]
fn generate_skips_repeated_symbols() {
  // 12 wraps to symbol 2 with ten symbols.
  let code = secret(vec![2, 2, 12, 5, 7], 3, 10);
  assert_eq!(code.as_str(), "257");
  assert_eq!(code.range(), "0-9");
}

#[test]
fn generate_uses_only_allowed_symbols() {
  for _ in 0..20 {
    let code = SecretCode::generate(6, 16, &mut OsRng).unwrap();
    assert_eq!(code.len(), 6);
    let mut seen: Vec<char> = code.as_str().chars().collect();
    assert!(seen.iter().all(|c| ALPHABET[..16].contains(&(*c as u8))));
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 6, "symbols must be distinct: {}", code.as_str());
  }
}

#[test]
fn full_alphabet_code() {
  let code = SecretCode::generate(36, 36, &mut OsRng).unwrap();
  assert_eq!(code.range(), "0-9, a-z");
  assert_eq!(code.masked(), "*".repeat(36));
}

#[test]
fn symbol_ranges() {
  assert_eq!(symbol_range(1), "0-0");
  assert_eq!(symbol_range(10), "0-9");
  assert_eq!(symbol_range(11), "0-9, a");
  assert_eq!(symbol_range(16), "0-9, a-f");
  assert_eq!(symbol_range(36), "0-9, a-z");
}

// ─── Game ────────────────────────────────────────────────────────────────────

#[test]
fn game_counts_turns_until_solved() {
  let mut game = Game::new(secret(vec![9, 0, 4], 3, 10));
  assert_eq!(game.secret().as_str(), "904");

  assert_eq!(game.guess("123"), Grade::default());
  assert!(!game.is_solved());
  assert_eq!(game.guess("094"), Grade { bulls: 1, cows: 2 });
  assert_eq!(game.guess("904"), Grade { bulls: 3, cows: 0 });
  assert!(game.is_solved());
  assert_eq!(game.turns(), 3);
}
