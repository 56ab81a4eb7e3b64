//! [`PhoneBook`] — an ordered list of contacts with optional file persistence.

use std::path::{Path, PathBuf};

use phonebook_core::{Contact, ContactKind, FieldWarning};

use crate::{
  Error, Result,
  encode::{read_snapshot, write_snapshot},
};

/// Result of a successful [`PhoneBook::edit_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
  /// The record's detail block after the edit.
  pub detail:  String,
  /// Set when the new value was rejected and a fallback was stored.
  pub warning: Option<FieldWarning>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The phone book.
///
/// Records keep insertion order and are addressed by their current 0-based
/// position; removing a record shifts every later index down by one. When the
/// book is bound to a file, every mutation rewrites the whole file.
/// Persistence failures are logged and never reach the caller of a mutation.
#[derive(Debug, Default)]
pub struct PhoneBook {
  path:    Option<PathBuf>,
  records: Vec<Contact>,
}

impl PhoneBook {
  /// An empty book that is never written to disk.
  pub fn in_memory() -> Self { Self::default() }

  /// A book bound to `path`, loaded from it when possible.
  ///
  /// A missing, empty or unreadable file yields an empty book.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    let mut book = Self {
      path:    Some(path.into()),
      records: Vec::new(),
    };
    book.deserialize();
    book
  }

  pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

  pub fn records(&self) -> &[Contact] { &self.records }

  pub fn count(&self) -> usize { self.records.len() }

  pub fn get(&self, index: usize) -> Option<&Contact> { self.records.get(index) }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Create a contact of `kind` from `(field, value)` pairs and append it.
  ///
  /// Values are applied in the kind's declared field order; pairs naming a
  /// field the kind does not declare are ignored. Returns the warnings raised
  /// by rejected values.
  pub fn add<I, K, V>(&mut self, kind: ContactKind, fields: I) -> Vec<FieldWarning>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let supplied: Vec<(K, V)> = fields.into_iter().collect();
    let mut contact = Contact::new(kind);

    let warnings = kind
      .field_names()
      .iter()
      .filter_map(|field| {
        supplied
          .iter()
          .find(|(name, _)| name.as_ref() == *field)
          .and_then(|(_, value)| contact.set_field(field, value.as_ref()))
      })
      .collect();

    self.insert(contact);
    warnings
  }

  /// Append an already-built contact.
  pub fn insert(&mut self, contact: Contact) {
    tracing::debug!(
      kind = %contact.kind(),
      summary = %contact.summary_line(),
      "adding record"
    );
    self.records.push(contact);
    self.persist();
  }

  /// Remove the record at `index`. Out-of-range indices are ignored.
  pub fn remove_at(&mut self, index: usize) -> Option<Contact> {
    if index >= self.records.len() {
      return None;
    }
    let removed = self.records.remove(index);
    tracing::debug!(index, summary = %removed.summary_line(), "removed record");
    self.persist();
    Some(removed)
  }

  /// Set one field of the record at `index` and stamp it as edited.
  ///
  /// Returns `None` without touching anything when `index` is out of range or
  /// `field` is not one of the record's fields.
  pub fn edit_field(
    &mut self,
    index: usize,
    field: &str,
    value: &str,
  ) -> Option<Edited> {
    let contact = self.records.get_mut(index)?;
    if !contact.has_field(field) {
      return None;
    }
    let warning = contact.set_field(field, value);
    contact.touch();
    let detail = contact.detail_block();
    tracing::debug!(index, field, "edited record");
    self.persist();
    Some(Edited { detail, warning })
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// `(1-based position, summary line)` for every record.
  pub fn list(&self) -> Vec<(usize, String)> {
    self
      .records
      .iter()
      .enumerate()
      .map(|(i, c)| (i + 1, c.summary_line()))
      .collect()
  }

  /// `(0-based index, summary line)` for every record whose searchable text
  /// contains `query`, ignoring case. The query is matched literally.
  pub fn search(&self, query: &str) -> Vec<(usize, String)> {
    let needle = query.to_lowercase();
    self
      .records
      .iter()
      .enumerate()
      .filter(|(_, c)| c.searchable_text().to_lowercase().contains(&needle))
      .map(|(i, c)| (i, c.summary_line()))
      .collect()
  }

  // ── Persistence ───────────────────────────────────────────────────────────

  /// Write every record to the configured file.
  pub fn save(&self) -> Result<()> {
    let path = self.path.as_deref().ok_or(Error::NoFile)?;
    write_snapshot(path, &self.records)
  }

  /// Read the records stored at `path`.
  pub fn load(path: &Path) -> Result<Vec<Contact>> { read_snapshot(path) }

  /// Write the book to its file, logging any failure.
  pub fn serialize(&self) {
    if let Err(e) = self.save() {
      tracing::error!(path = ?self.path, error = %e, "failed to save phone book");
    }
  }

  /// Replace the in-memory records with the file's contents. On failure the
  /// book is left empty and the error is logged.
  pub fn deserialize(&mut self) {
    let Some(path) = self.path.as_deref() else {
      return;
    };
    match Self::load(path) {
      Ok(records) => {
        tracing::info!(?path, count = records.len(), "loaded phone book");
        self.records = records;
      }
      Err(e) if e.is_not_found() => {
        tracing::info!(?path, "no phone book file yet, starting empty");
        self.records.clear();
      }
      Err(e) => {
        tracing::error!(?path, error = %e, "failed to load phone book, starting empty");
        self.records.clear();
      }
    }
  }

  fn persist(&self) {
    if self.path.is_some() {
      self.serialize();
    }
  }
}
