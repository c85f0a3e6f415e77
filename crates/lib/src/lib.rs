//! fleethash-lib: Structural fingerprints for fleet configuration records
//!
//! This crate gives stable identity to elements of unordered collections
//! (machine pools, taints, label maps, embedded configuration text):
//! - `record`: the typed `ConfigRecord` a caller hands to the engine
//! - `canon`: canonicalizers for scalars, maps, collections and embedded text
//! - `kind`: the per-kind tables that decide which fields participate
//! - `fingerprint`: the FNV-1a reduction and the public entry points
//! - `diff`: machine-pool change detection built on fingerprints

pub mod canon;
pub mod consts;
pub mod diff;
pub mod fingerprint;
pub mod kind;
pub mod record;
pub mod util;

pub use canon::{
  canonicalize_hash_ordered_set, canonicalize_list, canonicalize_map, canonicalize_set, canonicalize_set_dump,
  format_scalar, hash_code, normalize_embedded_text, try_canonicalize_list,
};
pub use diff::{DiffError, PoolDiff, PoolUpdate, compute_pool_diff};
pub use fingerprint::{Fingerprint, FingerprintError, canonical_string, fingerprint, fingerprint_kind};
pub use kind::{Digest, Kind};
pub use record::{ConfigRecord, DecodeError, FieldValue, NestedMap, Scalar, decode_record, decode_records};
