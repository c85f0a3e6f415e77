//! Fingerprint computation.
//!
//! A record's canonical string is built by walking its kind's bindings in
//! order; the fingerprint is FNV-1a 32 over that string, or its CRC-32 hash
//! code for the few kinds the schema keys that way. Computation is pure:
//! the same record under the same kind always yields the same value, within
//! and across processes.

mod eval;
mod fnv;
mod types;

use tracing::trace;

pub use fnv::Fnv1a32;
pub use types::*;

use crate::kind::{Digest, Kind, KindSpec};
use crate::record::ConfigRecord;

impl KindSpec {
  /// Canonical string of `record` under these bindings.
  pub fn canonical_string(&self, record: &ConfigRecord) -> Result<String, FingerprintError> {
    let mut out = String::new();
    eval::evaluate(self.bindings(), record, "", &mut out)?;
    Ok(out)
  }

  /// Reduce a canonical string with this kind's digest.
  pub fn reduce(&self, canonical: &str) -> Fingerprint {
    match self.digest {
      Digest::Fnv1a => Fingerprint::of(canonical),
      Digest::HashCode => Fingerprint::hash_code(canonical),
    }
  }
}

/// Canonical string of `record` under `kind`.
pub fn canonical_string(kind: Kind, record: &ConfigRecord) -> Result<String, FingerprintError> {
  kind.spec().canonical_string(record)
}

/// Fingerprint of `record` under `kind`.
pub fn fingerprint_kind(kind: Kind, record: &ConfigRecord) -> Result<Fingerprint, FingerprintError> {
  let spec = kind.spec();
  let canonical = spec.canonical_string(record)?;
  let fp = spec.reduce(&canonical);
  trace!(kind = %kind, canonical_len = canonical.len(), fingerprint = fp.value(), "computed fingerprint");
  Ok(fp)
}

/// Fingerprint of `record` under the kind named `kind`.
///
/// Fails with [`FingerprintError::UnknownKind`] when no kind has that name.
pub fn fingerprint(kind: &str, record: &ConfigRecord) -> Result<Fingerprint, FingerprintError> {
  let kind: Kind = kind.parse()?;
  fingerprint_kind(kind, record)
}
