//! Core types for the phone book: contact records and field validators.
//!
//! This crate has no I/O. Persistence lives in `phonebook-store`, the console
//! dialogue in `phonebook-cli`.

pub mod contact;
pub mod error;
pub mod validate;

pub use contact::{Contact, ContactKind, Details, Gender, NO_DATA, NO_NUMBER};
pub use error::{Error, FieldWarning, Result};
