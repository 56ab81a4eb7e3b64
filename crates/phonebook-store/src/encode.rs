//! On-disk snapshot format.
//!
//! The whole phone book is written as one JSON document:
//!
//! ```json
//! { "version": 1, "records": [ { "kind": "person", "name": "John", ... } ] }
//! ```
//!
//! Unset optional attributes are stored as `null`; timestamps keep full
//! precision so a reload reproduces every record exactly.

use std::{
  fs::File,
  io::{BufReader, BufWriter, Write as _},
  path::Path,
};

use phonebook_core::Contact;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
  version: u32,
  records: &'a [Contact],
}

#[derive(Deserialize)]
struct Snapshot {
  version: u32,
  records: Vec<Contact>,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
  move |source| Error::Io {
    path: path.to_path_buf(),
    source,
  }
}

/// Overwrite `path` with a snapshot of `records`.
pub fn write_snapshot(path: &Path, records: &[Contact]) -> Result<()> {
  let file = File::create(path).map_err(io_error(path))?;
  let mut writer = BufWriter::new(file);
  serde_json::to_writer_pretty(
    &mut writer,
    &SnapshotRef {
      version: SNAPSHOT_VERSION,
      records,
    },
  )?;
  writer.flush().map_err(io_error(path))?;
  Ok(())
}

/// Read the snapshot stored at `path`.
pub fn read_snapshot(path: &Path) -> Result<Vec<Contact>> {
  let file = File::open(path).map_err(io_error(path))?;
  let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
  if snapshot.version != SNAPSHOT_VERSION {
    return Err(Error::UnsupportedVersion {
      found:    snapshot.version,
      expected: SNAPSHOT_VERSION,
    });
  }
  Ok(snapshot.records)
}
