//! `phonebook` — console contact list.
//!
//! # Usage
//!
//! ```
//! phonebook                     # in-memory session, nothing is saved
//! phonebook contacts.json       # load from and save to contacts.json
//! phonebook --config phonebook.toml
//! ```
//!
//! The file may also come from the `file` key of the config file or the
//! `PHONEBOOK_FILE` environment variable. Logs go to stderr; the level comes
//! from `RUST_LOG`, falling back to `log_level` in the config.

mod menu;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use menu::Menu;
use phonebook_store::PhoneBook;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Console contact list")]
struct Args {
  /// File to load contacts from and save them to.
  file: Option<PathBuf>,

  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "phonebook.toml")]
  config: PathBuf,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Settings merged from the config file and `PHONEBOOK_*` variables.
#[derive(Deserialize, Debug)]
struct Settings {
  #[serde(default)]
  file:      Option<PathBuf>,
  #[serde(default = "default_log_level")]
  log_level: String,
}

fn default_log_level() -> String { "error".to_string() }

fn load_settings(path: &std::path::Path) -> Result<Settings> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("PHONEBOOK"))
    .build()
    .context("failed to read config")?
    .try_deserialize()
    .context("failed to deserialise settings")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();
  let settings = load_settings(&args.config)?;

  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .context("invalid log level")?,
    )
    .init();

  // The positional argument overrides the config file.
  let book = match args.file.or(settings.file) {
    Some(path) => PhoneBook::open(path),
    None => PhoneBook::in_memory(),
  };
  tracing::debug!(path = ?book.path(), count = book.count(), "phone book ready");

  let stdin = io::stdin();
  let mut menu = Menu::new(book, stdin.lock(), io::stdout().lock());
  menu.run().context("console i/o failed")?;
  Ok(())
}
