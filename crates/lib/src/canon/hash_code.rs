//! Hash-code keyed set renderings.
//!
//! The provider's schema layer stores set elements under their CRC-32 (IEEE)
//! hash code. A few pool kinds hash the set itself rather than its sorted
//! elements, so their tokens depend on those codes: either the set's debug
//! dump or its element listing, both keyed by the decimal code string.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::consts::TOKEN_SEPARATOR;

const SET_DUMP_PREFIX: &str = "*Set(map[string]interface {}";
const SET_DUMP_EMPTY: &str = "(nil)";

/// CRC-32 (IEEE) of the UTF-8 bytes of `value`.
pub fn hash_code(value: &str) -> u32 {
  crc32fast::hash(value.as_bytes())
}

/// Elements keyed by the decimal string of their hash code.
///
/// Keys compare as strings, so `"198645777"` sorts before `"842512562"`. Two
/// elements with one code collapse into one entry.
fn by_code<I, S>(items: I) -> BTreeMap<String, String>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  items
    .into_iter()
    .map(|item| (hash_code(item.as_ref()).to_string(), item.as_ref().to_string()))
    .collect()
}

/// Double-quoted form of `value` with `\`, `"` and control characters escaped.
fn quote(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\u{07}' => out.push_str("\\a"),
      '\u{08}' => out.push_str("\\b"),
      '\u{0c}' => out.push_str("\\f"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\u{0b}' => out.push_str("\\v"),
      c if (c as u32) < 0x20 || c == '\u{7f}' => {
        let _ = write!(out, "\\x{:02x}", c as u32);
      }
      c if c.is_control() => {
        let _ = write!(out, "\\u{:04x}", c as u32);
      }
      c => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Render a string set as the schema set's debug dump, then `-`.
///
/// `{"az2", "az1"}` becomes
/// `*Set(map[string]interface {}{"2874390777":"az2", "844818755":"az1"})-`.
/// An empty set renders as `*Set(map[string]interface {}(nil))-`.
pub fn canonicalize_set_dump<I, S>(items: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let entries = by_code(items);
  let mut out = String::from(SET_DUMP_PREFIX);
  if entries.is_empty() {
    out.push_str(SET_DUMP_EMPTY);
  } else {
    let body: Vec<String> = entries
      .iter()
      .map(|(code, item)| format!("{}:{}", quote(code), quote(item)))
      .collect();
    let _ = write!(out, "{{{}}}", body.join(", "));
  }
  out.push(')');
  out.push(TOKEN_SEPARATOR);
  out
}

/// Canonicalize a string set as `item-` tokens in hash-code order.
///
/// This is the order the schema layer lists a set in. It does not depend on
/// input order, but it is not alphabetical: `sg-456` comes before `sg-123`.
pub fn canonicalize_hash_ordered_set<I, S>(items: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut out = String::new();
  for item in by_code(items).values() {
    out.push_str(item);
    out.push(TOKEN_SEPARATOR);
  }
  out
}

/// Render nested element digests sorted numerically, each as `digest-`.
pub fn canonicalize_digests(mut digests: Vec<u32>) -> String {
  digests.sort_unstable();
  let mut out = String::new();
  for digest in digests {
    let _ = write!(out, "{}{}", digest, TOKEN_SEPARATOR);
  }
  out
}
