//! Canonicalizers that turn field values into order-independent tokens.
//!
//! - [`scalar`]: `value-` tokens for strings, integers and booleans.
//! - [`collection`]: sorted renderings of maps, record lists and string sets.
//! - [`hash_code`]: set renderings keyed by CRC-32 element codes.
//! - [`text`]: reparsing of embedded indentation-structured documents.

mod collection;
mod hash_code;
mod scalar;
mod text;

pub use collection::{
  canonicalize_colon_map, canonicalize_dash_joined, canonicalize_joined_set, canonicalize_list, canonicalize_map,
  canonicalize_prefixed_map, canonicalize_set, try_canonicalize_list,
};
pub use hash_code::{canonicalize_digests, canonicalize_hash_ordered_set, canonicalize_set_dump, hash_code};
pub use scalar::{format_scalar, push_entry, push_scalar};
pub use text::normalize_embedded_text;
