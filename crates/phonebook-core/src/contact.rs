//! Contact records — the unit stored in a phone book.
//!
//! A [`Contact`] is either a person or an organization. Both variants share a
//! name, a phone number and a pair of timestamps; the variant-specific
//! attributes live in [`Details`]. Every variant exposes the same
//! field-name/value editing interface so callers can prompt for and edit
//! fields without knowing which variant they hold.

use std::fmt::Write as _;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
  Error, Result,
  error::FieldWarning,
  validate::{normalize_gender, validate_date, validate_phone},
};

/// Stored in place of a missing or rejected phone number.
pub const NO_NUMBER: &str = "[no number]";

/// Rendered for any unset optional attribute in a detail block.
pub const NO_DATA: &str = "[no data]";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const PERSON_FIELDS: &[&str] = &["name", "surname", "birth", "gender", "number"];
const ORGANIZATION_FIELDS: &[&str] = &["name", "address", "number"];

// ─── Kinds ───────────────────────────────────────────────────────────────────

/// The variant of a contact, chosen when it is created.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactKind {
  Person,
  Organization,
}

impl ContactKind {
  /// Parse the type name a user typed (`person` or `organization`).
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownKind(s.to_owned()))
  }

  /// The editable field names for this kind, in prompt order.
  pub fn field_names(self) -> &'static [&'static str] {
    match self {
      Self::Person => PERSON_FIELDS,
      Self::Organization => ORGANIZATION_FIELDS,
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Gender {
  Male,
  Female,
}

// ─── Details ─────────────────────────────────────────────────────────────────

/// Variant-specific attributes of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Details {
  Person {
    surname:    String,
    birth_date: Option<NaiveDate>,
    gender:     Option<Gender>,
  },
  Organization {
    address: Option<String>,
  },
}

impl Details {
  fn empty(kind: ContactKind) -> Self {
    match kind {
      ContactKind::Person => Self::Person {
        surname:    String::new(),
        birth_date: None,
        gender:     None,
      },
      ContactKind::Organization => Self::Organization { address: None },
    }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A single phone book entry.
///
/// `created` is fixed at construction. `edited` stays unset until the first
/// explicit edit through [`Contact::touch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  name:    String,
  phone:   Option<String>,
  created: NaiveDateTime,
  edited:  Option<NaiveDateTime>,
  #[serde(flatten)]
  details: Details,
}

impl Contact {
  /// An empty contact of `kind`, created now.
  pub fn new(kind: ContactKind) -> Self {
    Self::created_at(kind, now())
  }

  /// An empty contact of `kind` with an explicit creation time.
  pub fn created_at(kind: ContactKind, created: NaiveDateTime) -> Self {
    Self {
      name: String::new(),
      phone: None,
      created,
      edited: None,
      details: Details::empty(kind),
    }
  }

  pub fn kind(&self) -> ContactKind {
    match self.details {
      Details::Person { .. } => ContactKind::Person,
      Details::Organization { .. } => ContactKind::Organization,
    }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn phone(&self) -> Option<&str> { self.phone.as_deref() }

  pub fn created(&self) -> NaiveDateTime { self.created }

  pub fn edited(&self) -> Option<NaiveDateTime> { self.edited }

  pub fn details(&self) -> &Details { &self.details }

  /// The editable field names for this contact's kind, in prompt order.
  pub fn field_names(&self) -> &'static [&'static str] {
    self.kind().field_names()
  }

  /// Whether `field` is one of this contact's editable fields.
  pub fn has_field(&self, field: &str) -> bool {
    self.field_names().contains(&field)
  }

  // ── Setters ─────────────────────────────────────────────────────────────

  /// Set the field called `field` from raw user input.
  ///
  /// Unknown field names are ignored. Does not touch `edited`.
  pub fn set_field(&mut self, field: &str, value: &str) -> Option<FieldWarning> {
    match field {
      "name" => self.name = value.to_owned(),
      "number" => return self.set_phone(value),
      "birth" => return self.set_birth_date(value),
      "gender" => return self.set_gender(value),
      "surname" => {
        if let Details::Person { surname, .. } = &mut self.details {
          *surname = value.to_owned();
        }
      }
      "address" => {
        if let Details::Organization { address } = &mut self.details {
          *address = Some(value.to_owned());
        }
      }
      _ => {}
    }
    None
  }

  /// Store `value` as the phone number, falling back to [`NO_NUMBER`] when it
  /// is empty or malformed.
  pub fn set_phone(&mut self, value: &str) -> Option<FieldWarning> {
    if value.is_empty() {
      self.phone = Some(NO_NUMBER.to_owned());
      return None;
    }
    if validate_phone(value) {
      self.phone = Some(value.to_owned());
      return None;
    }
    self.phone = Some(NO_NUMBER.to_owned());
    rejected(FieldWarning::WrongNumberFormat(value.to_owned()))
  }

  /// Parse and store a birth date. A malformed date leaves the previous value
  /// in place. No-op for organizations.
  pub fn set_birth_date(&mut self, value: &str) -> Option<FieldWarning> {
    let Details::Person { birth_date, .. } = &mut self.details else {
      return None;
    };
    match validate_date(value) {
      Ok(date) => {
        *birth_date = Some(date);
        None
      }
      Err(_) => rejected(FieldWarning::BadBirthDate(value.to_owned())),
    }
  }

  /// Parse and store a gender code. A malformed code leaves the previous value
  /// in place. No-op for organizations.
  pub fn set_gender(&mut self, value: &str) -> Option<FieldWarning> {
    let Details::Person { gender, .. } = &mut self.details else {
      return None;
    };
    match normalize_gender(value) {
      Ok(g) => {
        *gender = Some(g);
        None
      }
      Err(_) => rejected(FieldWarning::BadGender(value.to_owned())),
    }
  }

  /// Mark the contact as edited now.
  pub fn touch(&mut self) { self.touch_at(now()); }

  /// Mark the contact as edited at `at`.
  pub fn touch_at(&mut self, at: NaiveDateTime) { self.edited = Some(at); }

  // ── Rendering ───────────────────────────────────────────────────────────

  /// One-line rendering used in list and search output.
  pub fn summary_line(&self) -> String {
    match &self.details {
      Details::Person { surname, .. } => format!("{} {surname}", self.name),
      Details::Organization { .. } => self.name.clone(),
    }
  }

  /// Multi-line rendering of every attribute.
  pub fn detail_block(&self) -> String {
    let mut out = String::new();
    match &self.details {
      Details::Person {
        surname,
        birth_date,
        gender,
      } => {
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Surname: {surname}");
        let _ = writeln!(out, "Birth date: {}", or_no_data(birth_date.as_ref()));
        let _ = writeln!(out, "Gender: {}", or_no_data(gender.as_ref()));
      }
      Details::Organization { address } => {
        let _ = writeln!(out, "Organization name: {}", self.name);
        let _ = writeln!(out, "Address: {}", or_no_data(address.as_ref()));
      }
    }
    let _ = writeln!(out, "Number: {}", or_no_data(self.phone.as_ref()));
    let _ = writeln!(out, "Time created: {}", format_timestamp(self.created));
    let _ = write!(
      out,
      "Time last edit: {}",
      self
        .edited
        .map(format_timestamp)
        .unwrap_or_else(|| NO_DATA.to_owned())
    );
    out
  }

  /// Text matched by phone book searches. Unset attributes appear as `null`.
  pub fn searchable_text(&self) -> String {
    let phone = or_null(self.phone.as_ref());
    match &self.details {
      Details::Person {
        surname,
        birth_date,
        ..
      } => format!(
        "{} {surname} {} {phone}",
        self.name,
        or_null(birth_date.as_ref())
      ),
      Details::Organization { address } => {
        format!("{} {} {phone}", self.name, or_null(address.as_ref()))
      }
    }
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn now() -> NaiveDateTime { Local::now().naive_local() }

fn rejected(warning: FieldWarning) -> Option<FieldWarning> {
  tracing::warn!(input = warning.input(), "{warning}");
  Some(warning)
}

fn format_timestamp(at: NaiveDateTime) -> String {
  at.format(TIMESTAMP_FORMAT).to_string()
}

fn or_no_data<T: ToString>(value: Option<&T>) -> String {
  value.map_or_else(|| NO_DATA.to_owned(), ToString::to_string)
}

fn or_null<T: ToString>(value: Option<&T>) -> String {
  value.map_or_else(|| "null".to_owned(), ToString::to_string)
}
