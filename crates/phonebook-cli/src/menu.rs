//! Console dialogue over a [`PhoneBook`].
//!
//! Reads one command or value per line and writes prompts and results. End of
//! input ends the session as if `exit` had been typed.

use std::io::{self, BufRead, Write};

use phonebook_core::{Contact, ContactKind, FieldWarning};
use phonebook_store::PhoneBook;

const MAIN_PROMPT: &str = "[menu] Enter action (add, list, search, count, exit):";

/// Whether the session continues after a sub-menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
  Continue,
  Exit,
}

pub struct Menu<R, W> {
  book:   PhoneBook,
  input:  R,
  output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
  pub fn new(book: PhoneBook, input: R, output: W) -> Self {
    Self {
      book,
      input,
      output,
    }
  }

  #[cfg(test)]
  pub fn into_parts(self) -> (PhoneBook, W) { (self.book, self.output) }

  /// Run the main menu until `exit` or end of input.
  pub fn run(&mut self) -> io::Result<()> {
    loop {
      writeln!(self.output, "{MAIN_PROMPT}")?;
      let Some(command) = self.read_line()? else {
        return Ok(());
      };
      let flow = match command.as_str() {
        "add" => self.add()?,
        "list" => self.list()?,
        "search" => self.search()?,
        "count" => {
          writeln!(
            self.output,
            "The Phone Book has {} records.",
            self.book.count()
          )?;
          Flow::Continue
        }
        "exit" => Flow::Exit,
        _ => {
          writeln!(
            self.output,
            "Please enter an appropriate command (add, list, search, count, exit):"
          )?;
          Flow::Continue
        }
      };
      if flow == Flow::Exit {
        return Ok(());
      }
      writeln!(self.output)?;
    }
  }

  // ── Commands ──────────────────────────────────────────────────────────────

  fn add(&mut self) -> io::Result<Flow> {
    writeln!(self.output, "Enter the type (person, organization):")?;
    let Some(kind) = self.read_line()? else {
      return Ok(Flow::Exit);
    };
    let Ok(kind) = ContactKind::parse(&kind) else {
      writeln!(self.output, "No such contact type")?;
      return Ok(Flow::Continue);
    };

    // Each value is applied as soon as it is read so warnings follow the
    // offending input.
    let mut contact = Contact::new(kind);
    for field in kind.field_names() {
      writeln!(self.output, "Enter the {field}:")?;
      let Some(value) = self.read_line()? else {
        return Ok(Flow::Exit);
      };
      let warning = contact.set_field(field, &value);
      self.print_warnings(warning.as_slice())?;
    }

    self.book.insert(contact);
    writeln!(self.output, "The record added.")?;
    Ok(Flow::Continue)
  }

  fn list(&mut self) -> io::Result<Flow> {
    for (position, summary) in self.book.list() {
      writeln!(self.output, "{position}. {summary}")?;
    }
    writeln!(self.output)?;
    writeln!(self.output, "[list] Enter action ([number], back):")?;
    let Some(choice) = self.read_line()? else {
      return Ok(Flow::Exit);
    };
    match parse_position(&choice).filter(|i| *i < self.book.count()) {
      Some(index) => self.open_record(index),
      None => Ok(Flow::Continue),
    }
  }

  fn search(&mut self) -> io::Result<Flow> {
    loop {
      writeln!(self.output, "Enter search query:")?;
      let Some(query) = self.read_line()? else {
        return Ok(Flow::Exit);
      };
      let hits = self.book.search(&query);
      writeln!(self.output, "Found {} results", hits.len())?;
      for (position, (_, summary)) in hits.iter().enumerate() {
        writeln!(self.output, "{}. {summary}", position + 1)?;
      }

      writeln!(self.output, "[search] Enter action ([number], back, again):")?;
      let Some(choice) = self.read_line()? else {
        return Ok(Flow::Exit);
      };
      if choice == "again" {
        continue;
      }
      return match parse_position(&choice).and_then(|i| hits.get(i)) {
        Some((index, _)) => self.open_record(*index),
        None => Ok(Flow::Continue),
      };
    }
  }

  // ── Record menu ───────────────────────────────────────────────────────────

  fn open_record(&mut self, index: usize) -> io::Result<Flow> {
    if let Some(contact) = self.book.get(index) {
      writeln!(self.output, "{}", contact.detail_block())?;
    }
    loop {
      writeln!(self.output)?;
      writeln!(self.output, "[record] Enter action (edit, delete, menu):")?;
      let Some(command) = self.read_line()? else {
        return Ok(Flow::Exit);
      };
      match command.as_str() {
        "edit" => {
          if self.edit(index)? == Flow::Exit {
            return Ok(Flow::Exit);
          }
        }
        "delete" => {
          if self.book.remove_at(index).is_some() {
            writeln!(self.output, "The record removed!")?;
          }
          return Ok(Flow::Continue);
        }
        "menu" => return Ok(Flow::Continue),
        _ => writeln!(self.output, "No such command")?,
      }
    }
  }

  fn edit(&mut self, index: usize) -> io::Result<Flow> {
    let Some(contact) = self.book.get(index) else {
      return Ok(Flow::Continue);
    };
    let fields = contact.field_names();
    writeln!(self.output, "Select a field ({}):", fields.join(", "))?;
    let Some(field) = self.read_line()? else {
      return Ok(Flow::Exit);
    };
    if !fields.contains(&field.as_str()) {
      return Ok(Flow::Continue);
    }

    writeln!(self.output, "Enter {field}:")?;
    let Some(value) = self.read_line()? else {
      return Ok(Flow::Exit);
    };
    if let Some(edited) = self.book.edit_field(index, &field, &value) {
      self.print_warnings(edited.warning.as_slice())?;
      writeln!(self.output, "Saved")?;
      writeln!(self.output, "{}", edited.detail)?;
    }
    Ok(Flow::Continue)
  }

  // ── I/O helpers ───────────────────────────────────────────────────────────

  /// Next input line with surrounding whitespace removed; `None` at end of
  /// input.
  fn read_line(&mut self) -> io::Result<Option<String>> {
    self.output.flush()?;
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
  }

  fn print_warnings(&mut self, warnings: &[FieldWarning]) -> io::Result<()> {
    for warning in warnings {
      writeln!(self.output, "{warning}")?;
    }
    Ok(())
  }
}

/// Convert a 1-based menu position typed by the user to a 0-based index.
fn parse_position(s: &str) -> Option<usize> {
  s.parse::<usize>().ok()?.checked_sub(1)
}
