use anyhow::Result;
use fleethash_lib::Kind;
use owo_colors::{OwoColorize, Stream};

use crate::output::{OutputFormat, print_json};

pub fn cmd_kinds(format: OutputFormat) -> Result<()> {
  if format.is_json() {
    let kinds: Vec<_> = Kind::ALL
      .iter()
      .map(|kind| serde_json::json!({ "name": kind, "machine_pool": kind.is_machine_pool() }))
      .collect();
    return print_json(&kinds);
  }

  for kind in Kind::ALL {
    if kind.is_machine_pool() {
      println!(
        "{} {}",
        kind,
        "(machine pool)".if_supports_color(Stream::Stdout, |s| s.dimmed())
      );
    } else {
      println!("{}", kind);
    }
  }
  Ok(())
}
