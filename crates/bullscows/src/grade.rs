//! Scoring a guess against the secret code.

use std::fmt;

/// Bulls are symbols in the right position, cows are symbols present in the
/// code at another position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grade {
  pub bulls: usize,
  pub cows:  usize,
}

/// Compare every symbol of `guess` with every symbol of `secret`.
///
/// Each equal pair counts once, so repeated symbols in the guess are scored
/// repeatedly.
pub fn grade(guess: &str, secret: &str) -> Grade {
  let mut result = Grade::default();
  for (i, g) in guess.chars().enumerate() {
    for (j, s) in secret.chars().enumerate() {
      if g != s {
        continue;
      }
      if i == j {
        result.bulls += 1;
      } else {
        result.cows += 1;
      }
    }
  }
  result
}

impl fmt::Display for Grade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match (self.bulls, self.cows) {
      (0, 0) => write!(f, "None."),
      (0, cows) => write!(f, "{cows} cow(s)."),
      (bulls, 0) => write!(f, "{bulls} bull(s)."),
      (bulls, cows) => write!(f, "{bulls} bull(s) and {cows} cow(s)."),
    }
  }
}
