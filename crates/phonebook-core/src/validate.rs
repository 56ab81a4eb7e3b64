//! Field validators for phone numbers, birth dates and gender codes.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{Error, Result, contact::Gender};

// A leading short group is tolerated, e.g. `+1 234 567` or `(1) 234`.
static PHONE_LEADING: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\+?[[:space:]]?\(?[[:word:]]+\)?[[:word:][:space:]-]*$")
    .expect("static phone pattern")
});

// A parenthesized group of two or more characters after the first group,
// e.g. `+7 (495) 123-45-67`.
static PHONE_PAREN_LATER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^\+?[[:word:][:space:]-]+\(?[[:word:]]{2,}\)?[[:word:][:space:]-]*$",
  )
  .expect("static phone pattern")
});

static WORD_GROUP: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[[:word:]]+").expect("static group pattern"));

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static date pattern")
});

/// Whether `s` looks like a phone number.
///
/// Groups of ASCII letters and digits may be separated by ASCII whitespace or
/// hyphens, and at most one group may be wrapped in parentheses. Only the
/// first group may be a single character long.
pub fn validate_phone(s: &str) -> bool {
  let shape_ok = PHONE_LEADING.is_match(s) || PHONE_PAREN_LATER.is_match(s);
  let groups_ok = WORD_GROUP
    .find_iter(s)
    .skip(1)
    .all(|m| m.as_str().len() >= 2);
  shape_ok && groups_ok
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// The shape is checked strictly: four-digit year, zero-padded month and day,
/// no sign and no surrounding whitespace.
pub fn validate_date(s: &str) -> Result<NaiveDate> {
  if !ISO_DATE.is_match(s) {
    return Err(Error::InvalidDate(s.to_owned()));
  }
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|_| Error::InvalidDate(s.to_owned()))
}

/// Map `M`/`F` (any case) to a [`Gender`].
pub fn normalize_gender(s: &str) -> Result<Gender> {
  if s.eq_ignore_ascii_case("m") {
    Ok(Gender::Male)
  } else if s.eq_ignore_ascii_case("f") {
    Ok(Gender::Female)
  } else {
    Err(Error::InvalidGender(s.to_owned()))
  }
}
