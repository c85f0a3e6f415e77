//! Machine-pool change detection.
//!
//! Pools are matched by their `name` on both sides and compared by
//! fingerprint, which tells the caller which pools to create, update in
//! place, or delete.

mod types;

use std::collections::BTreeMap;

use tracing::debug;

pub use types::*;

use crate::consts::POOL_NAME_FIELD;
use crate::fingerprint::{Fingerprint, FingerprintError, fingerprint_kind};
use crate::kind::Kind;
use crate::record::{ConfigRecord, FieldValue, Scalar};

/// Name of a pool, the key it is matched by.
fn pool_name<'a>(record: &'a ConfigRecord, side: Side, index: usize) -> Result<&'a str, FingerprintError> {
  let field = || format!("{}[{}].{}", side, index, POOL_NAME_FIELD);
  match record.get(POOL_NAME_FIELD) {
    Some(FieldValue::Scalar(Scalar::String(name))) => Ok(name),
    Some(other) => Err(FingerprintError::TypeMismatch {
      field: field(),
      expected: "string",
      found: other.type_name(),
    }),
    None => Err(FingerprintError::MissingField { field: field() }),
  }
}

fn index_pools<'a>(
  kind: Kind,
  pools: &'a [ConfigRecord],
  side: Side,
) -> Result<BTreeMap<&'a str, Fingerprint>, DiffError> {
  let mut indexed = BTreeMap::new();
  for (index, pool) in pools.iter().enumerate() {
    let name = pool_name(pool, side, index)?;
    let fp = fingerprint_kind(kind, pool)?;
    if indexed.insert(name, fp).is_some() {
      return Err(DiffError::DuplicateName {
        side,
        name: name.to_string(),
      });
    }
  }
  Ok(indexed)
}

/// Compute the changes that turn `current` pools into `desired` pools.
///
/// Every output list is sorted by pool name.
pub fn compute_pool_diff(kind: Kind, current: &[ConfigRecord], desired: &[ConfigRecord]) -> Result<PoolDiff, DiffError> {
  let current = index_pools(kind, current, Side::Current)?;
  let desired = index_pools(kind, desired, Side::Desired)?;
  let mut diff = PoolDiff::default();

  for (&name, &new) in &desired {
    match current.get(name) {
      None => {
        debug!(%kind, pool = name, fingerprint = new.value(), "pool will be created");
        diff.pools_to_create.push(name.to_string());
      }
      Some(&old) if old != new => {
        debug!(%kind, pool = name, old = old.value(), new = new.value(), "pool will be updated");
        diff.pools_to_update.push(PoolUpdate {
          name: name.to_string(),
          old,
          new,
        });
      }
      Some(_) => diff.pools_unchanged.push(name.to_string()),
    }
  }

  for &name in current.keys() {
    if !desired.contains_key(name) {
      debug!(%kind, pool = name, "pool will be deleted");
      diff.pools_to_delete.push(name.to_string());
    }
  }

  Ok(diff)
}
