//! File-backed storage for the phone book.
//!
//! [`PhoneBook`] keeps contacts in memory in insertion order and, when bound
//! to a file, rewrites a JSON snapshot after every mutation.

mod encode;
mod store;

pub mod error;

pub use encode::SNAPSHOT_VERSION;
pub use error::{Error, Result};
pub use store::{Edited, PhoneBook};
