//! Diff command implementation.
//!
//! Loads the current and desired pools of one kind and shows which pools
//! would be created, updated in place, or deleted.

use std::path::Path;

use anyhow::{Context, Result, bail};
use fleethash_lib::{Kind, PoolDiff, compute_pool_diff};
use owo_colors::{OwoColorize, Stream};

use crate::input::load_records;
use crate::output::{OutputFormat, format_fingerprint, print_info, print_json, print_stat, print_success, symbols};

pub fn cmd_diff(kind: Kind, current: &Path, desired: &Path, verbose: bool, format: OutputFormat) -> Result<()> {
  if !kind.is_machine_pool() {
    bail!("{} is not a machine pool kind", kind);
  }

  let current_pools = load_records(kind, current)?;
  let desired_pools = load_records(kind, desired)?;
  let diff = compute_pool_diff(kind, &current_pools, &desired_pools).context("Failed to compute pool diff")?;

  if format.is_json() {
    print_json(&serde_json::json!({ "kind": kind, "diff": diff }))
  } else {
    print_human_diff(&diff, verbose);
    Ok(())
  }
}

fn print_human_diff(diff: &PoolDiff, verbose: bool) {
  if diff.is_empty() {
    print_success(&format!("No changes ({} pools unchanged)", diff.pools_unchanged.len()));
    return;
  }

  for name in &diff.pools_to_create {
    println!(
      "  {} {}",
      symbols::ADD.if_supports_color(Stream::Stdout, |s| s.green()),
      name
    );
  }
  for update in &diff.pools_to_update {
    println!(
      "  {} {} ({} {} {})",
      symbols::MODIFY.if_supports_color(Stream::Stdout, |s| s.yellow()),
      update.name,
      format_fingerprint(update.old),
      symbols::ARROW,
      format_fingerprint(update.new)
    );
  }
  for name in &diff.pools_to_delete {
    println!(
      "  {} {}",
      symbols::REMOVE.if_supports_color(Stream::Stdout, |s| s.red()),
      name
    );
  }
  if verbose {
    for name in &diff.pools_unchanged {
      println!(
        "  {} {}",
        symbols::UNCHANGED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        name
      );
    }
  }

  println!();
  print_info(&format!("{} change(s)", diff.change_count()));
  print_stat("Create", &diff.pools_to_create.len().to_string());
  print_stat("Update", &diff.pools_to_update.len().to_string());
  print_stat("Delete", &diff.pools_to_delete.len().to_string());
  print_stat("Unchanged", &diff.pools_unchanged.len().to_string());
}
