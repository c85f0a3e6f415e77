//! Hash command implementation.
//!
//! Prints one fingerprint per record, in file order. Records that carry a
//! pool name are labelled with it.

use std::path::Path;

use anyhow::{Context, Result};
use fleethash_lib::consts::POOL_NAME_FIELD;
use fleethash_lib::{ConfigRecord, FieldValue, Kind, Scalar, fingerprint_kind};
use owo_colors::{OwoColorize, Stream};

use crate::input::load_records;
use crate::output::{OutputFormat, format_fingerprint, print_json};

fn record_name(record: &ConfigRecord) -> Option<&str> {
  match record.get(POOL_NAME_FIELD) {
    Some(FieldValue::Scalar(Scalar::String(name))) => Some(name),
    _ => None,
  }
}

pub fn cmd_hash(kind: Kind, file: &Path, format: OutputFormat) -> Result<()> {
  let records = load_records(kind, file)?;

  let mut rows = Vec::with_capacity(records.len());
  for (index, record) in records.iter().enumerate() {
    let fp = fingerprint_kind(kind, record)
      .with_context(|| format!("Failed to fingerprint record {} of {}", index, file.display()))?;
    rows.push((record_name(record), fp));
  }

  if format.is_json() {
    let items: Vec<_> = rows
      .iter()
      .map(|(name, fp)| serde_json::json!({ "name": name, "fingerprint": fp, "hex": format_fingerprint(*fp) }))
      .collect();
    return print_json(&serde_json::json!({ "kind": kind, "records": items }));
  }

  for (name, fp) in rows {
    match name {
      Some(name) => println!(
        "{} {} {}",
        fp,
        format_fingerprint(fp).if_supports_color(Stream::Stdout, |s| s.dimmed()),
        name
      ),
      None => println!(
        "{} {}",
        fp,
        format_fingerprint(fp).if_supports_color(Stream::Stdout, |s| s.dimmed())
      ),
    }
  }
  Ok(())
}
