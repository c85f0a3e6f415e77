//! Loading records from disk.
//!
//! `.json` files are parsed with `serde_json`; anything else is read as YAML.
//! Both land in a `serde_json::Value` that is then decoded against the kind's
//! bindings.

use std::path::Path;

use anyhow::{Context, Result};
use fleethash_lib::{ConfigRecord, Kind, decode_records};
use serde_json::Value;
use tracing::debug;

pub fn read_text(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn is_json(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

pub fn load_document(path: &Path) -> Result<Value> {
  let contents = read_text(path)?;
  if is_json(path) {
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse JSON in {}", path.display()))
  } else {
    serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse YAML in {}", path.display()))
  }
}

/// Load the records held in `path`: a single mapping or a sequence of them.
pub fn load_records(kind: Kind, path: &Path) -> Result<Vec<ConfigRecord>> {
  let document = load_document(path)?;
  let records = decode_records(kind.spec(), &document)
    .with_context(|| format!("Failed to decode {} records from {}", kind, path.display()))?;
  debug!(%kind, path = %path.display(), count = records.len(), "loaded records");
  Ok(records)
}
