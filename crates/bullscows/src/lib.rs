//! Bulls and cows: guess a secret code of distinct symbols.
//!
//! ```no_run
//! use bullscows::{Game, SecretCode};
//! use rand_core::OsRng;
//!
//! let secret = SecretCode::generate(4, 10, &mut OsRng).unwrap();
//! let mut game = Game::new(secret);
//! let grade = game.guess("1234");
//! println!("Turn {}: {grade}", game.turns());
//! ```

pub mod code;
pub mod error;
pub mod grade;

pub use code::{ALPHABET, SecretCode, symbol_range};
pub use error::{Error, Result};
pub use grade::{Grade, grade};

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
  secret: SecretCode,
  turns:  usize,
  solved: bool,
}

impl Game {
  pub fn new(secret: SecretCode) -> Self {
    Self {
      secret,
      turns: 0,
      solved: false,
    }
  }

  pub fn secret(&self) -> &SecretCode { &self.secret }

  /// Number of guesses made so far.
  pub fn turns(&self) -> usize { self.turns }

  pub fn is_solved(&self) -> bool { self.solved }

  /// Score `guess` and count the turn. The game is solved once every
  /// position of the code is a bull.
  pub fn guess(&mut self, guess: &str) -> Grade {
    self.turns += 1;
    let result = grade(guess, self.secret.as_str());
    if result.bulls == self.secret.len() {
      self.solved = true;
    }
    tracing::debug!(
      turn = self.turns,
      bulls = result.bulls,
      cows = result.cows,
      "graded guess"
    );
    result
  }
}

#[cfg(test)]
mod tests;
