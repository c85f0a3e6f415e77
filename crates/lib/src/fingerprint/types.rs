use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fnv::Fnv1a32;
use crate::kind::UnknownKind;

/// The 32-bit identity of one configuration element.
///
/// Equal fingerprints are necessary but not sufficient for equal content:
/// collisions are possible and are not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub u32);

impl Fingerprint {
  /// FNV-1a over the UTF-8 bytes of a canonical string.
  pub fn of(canonical: &str) -> Self {
    let mut hasher = Fnv1a32::new();
    hasher.update(canonical.as_bytes());
    Fingerprint(hasher.finish32())
  }

  /// CRC-32 (IEEE) over the UTF-8 bytes of a canonical string.
  pub fn hash_code(canonical: &str) -> Self {
    Fingerprint(crate::canon::hash_code(canonical))
  }

  pub fn value(self) -> u32 {
    self.0
  }
}

impl fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<Fingerprint> for u32 {
  fn from(fp: Fingerprint) -> Self {
    fp.0
  }
}

/// Error computing a fingerprint.
///
/// `field` is a path into the record, e.g. `instance_type[0].cpu`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
  #[error(transparent)]
  UnknownKind(#[from] UnknownKind),

  #[error("missing required field {field}")]
  MissingField { field: String },

  #[error("field {field}: expected {expected}, found {found}")]
  TypeMismatch {
    field: String,
    expected: &'static str,
    found: &'static str,
  },
}
