use std::path::Path;

use anyhow::Result;
use fleethash_lib::normalize_embedded_text;

use crate::input::read_text;
use crate::output::{OutputFormat, print_json};

/// Print the normalized form of an embedded configuration document.
///
/// The file is taken as raw text, exactly as it would sit inside a record.
pub fn cmd_normalize(file: &Path, format: OutputFormat) -> Result<()> {
  let text = read_text(file)?;
  let normalized = normalize_embedded_text(&text);

  if format.is_json() {
    print_json(&serde_json::json!({ "normalized": normalized }))
  } else {
    println!("{}", normalized);
    Ok(())
  }
}
