//! Canon command implementation.
//!
//! Prints the canonical string each record reduces to before hashing.

use std::path::Path;

use anyhow::{Context, Result};
use fleethash_lib::{Kind, canonical_string};

use crate::input::load_records;
use crate::output::{OutputFormat, print_json};

pub fn cmd_canon(kind: Kind, file: &Path, format: OutputFormat) -> Result<()> {
  let records = load_records(kind, file)?;
  let canonical = records
    .iter()
    .enumerate()
    .map(|(index, record)| {
      canonical_string(kind, record)
        .with_context(|| format!("Failed to canonicalize record {} of {}", index, file.display()))
    })
    .collect::<Result<Vec<_>>>()?;

  if format.is_json() {
    print_json(&serde_json::json!({ "kind": kind, "canonical": canonical }))
  } else {
    for line in canonical {
      println!("{}", line);
    }
    Ok(())
  }
}
