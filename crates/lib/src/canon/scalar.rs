//! Canonical Value Formatter.

use std::fmt::Write;

use crate::consts::TOKEN_SEPARATOR;
use crate::record::Scalar;

/// Render a scalar as its token: the bare value followed by `-`.
///
/// An empty string renders as a lone `-`. Tokens are not length-prefixed, so
/// `"a-b"` followed by an omitted field renders like `"a"` followed by `"b"`.
pub fn format_scalar(value: &Scalar) -> String {
  let mut out = String::new();
  push_scalar(&mut out, value);
  out
}

/// Append the token for `value` to `out`.
pub fn push_scalar(out: &mut String, value: &Scalar) {
  // Writing into a String cannot fail.
  let _ = write!(out, "{}{}", value, TOKEN_SEPARATOR);
}

/// Append `field-value` with no trailing separator.
pub fn push_entry(out: &mut String, field: &str, value: &Scalar) {
  let _ = write!(out, "{}{}{}", field, TOKEN_SEPARATOR, value);
}
