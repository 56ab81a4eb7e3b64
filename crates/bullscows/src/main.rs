//! `bullscows` — console bulls-and-cows game.
//!
//! Asks for the code length and the number of possible symbols unless they
//! are given as flags, then grades guesses until the code is found.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use bullscows::{Game, SecretCode};
use clap::Parser;
use rand_core::{OsRng, RngCore};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[command(name = "bullscows", version, about = "Guess the secret code")]
struct Args {
  /// Length of the secret code.
  #[arg(short, long, allow_negative_numbers = true)]
  length: Option<i64>,

  /// Number of possible symbols in the code (at most 36).
  #[arg(short, long, allow_negative_numbers = true)]
  symbols: Option<i64>,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let stdin = io::stdin();
  play(&args, stdin.lock(), io::stdout().lock(), &mut OsRng)
    .context("console i/o failed")
}

/// Run one game. Invalid setup input is reported on `output` and ends the
/// game without an error.
fn play<R, W, G>(
  args: &Args,
  mut input: R,
  mut output: W,
  rng: &mut G,
) -> Result<()>
where
  R: BufRead,
  W: Write,
  G: RngCore,
{
  let Some(length) = read_number(
    args.length,
    "Input the length of the secret code:",
    &mut input,
    &mut output,
  )?
  else {
    return Ok(());
  };
  // The symbol count is only asked for once the length is known to be sane.
  if let Err(e @ bullscows::Error::InvalidLength(_)) =
    SecretCode::validate(length, length)
  {
    writeln!(output, "Error: {e}")?;
    return Ok(());
  }

  let Some(symbols) = read_number(
    args.symbols,
    "Input the number of possible symbols in the code:",
    &mut input,
    &mut output,
  )?
  else {
    return Ok(());
  };
  let secret = match SecretCode::generate(length, symbols, rng) {
    Ok(secret) => secret,
    Err(e) => {
      writeln!(output, "Error: {e}")?;
      return Ok(());
    }
  };

  writeln!(
    output,
    "The secret code is prepared: {} ({})",
    secret.masked(),
    secret.range()
  )?;
  writeln!(output, "Okay, let's start a game!")?;

  let mut game = Game::new(secret);
  while !game.is_solved() {
    writeln!(output, "Turn {}:", game.turns() + 1)?;
    let Some(guess) = read_token(&mut input, &mut output)? else {
      return Ok(());
    };
    let grade = game.guess(&guess);
    writeln!(output, "Grade: {grade}")?;
  }
  writeln!(output, "Congratulations! You guessed the secret code.")?;
  Ok(())
}

/// Use `preset` or prompt for a number. Non-numeric input is reported and
/// yields `None`, as does end of input.
fn read_number<R: BufRead, W: Write>(
  preset: Option<i64>,
  prompt: &str,
  input: &mut R,
  output: &mut W,
) -> Result<Option<i64>> {
  if preset.is_some() {
    return Ok(preset);
  }
  writeln!(output, "{prompt}")?;
  let Some(token) = read_token(input, output)? else {
    return Ok(None);
  };
  match token.parse() {
    Ok(n) => Ok(Some(n)),
    Err(_) => {
      writeln!(output, "Error: this is not a valid number")?;
      Ok(None)
    }
  }
}

/// First whitespace-separated token of the next non-blank line.
fn read_token<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
) -> Result<Option<String>> {
  output.flush()?;
  let mut line = String::new();
  loop {
    line.clear();
    if input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    if let Some(token) = line.split_whitespace().next() {
      return Ok(Some(token.to_string()));
    }
  }
}
