use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::fingerprint::{Fingerprint, FingerprintError};

/// Which list of pools a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
  Current,
  Desired,
}

impl fmt::Display for Side {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Side::Current => "current",
      Side::Desired => "desired",
    })
  }
}

/// A pool present on both sides whose fingerprint changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolUpdate {
  pub name: String,
  pub old: Fingerprint,
  pub new: Fingerprint,
}

/// Changes needed to turn the current pools into the desired pools.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PoolDiff {
  /// Pools only in desired.
  pub pools_to_create: Vec<String>,

  /// Pools in both with different fingerprints.
  pub pools_to_update: Vec<PoolUpdate>,

  /// Pools only in current.
  pub pools_to_delete: Vec<String>,

  /// Pools in both with equal fingerprints.
  pub pools_unchanged: Vec<String>,
}

impl PoolDiff {
  /// Returns true if no pool needs to be created, updated or deleted.
  pub fn is_empty(&self) -> bool {
    self.pools_to_create.is_empty() && self.pools_to_update.is_empty() && self.pools_to_delete.is_empty()
  }

  pub fn change_count(&self) -> usize {
    self.pools_to_create.len() + self.pools_to_update.len() + self.pools_to_delete.len()
  }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
  #[error(transparent)]
  Fingerprint(#[from] FingerprintError),

  #[error("duplicate pool name in {side} pools: {name}")]
  DuplicateName { side: Side, name: String },
}
