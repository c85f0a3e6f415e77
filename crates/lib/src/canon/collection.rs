//! Unordered Map and Collection Canonicalizers.
//!
//! Both sort before concatenating, so the output never depends on iteration
//! order. Nothing is deduplicated: a collection that holds the same element
//! twice renders it twice.

use std::fmt::{self, Write};

use crate::consts::{JOINED_SET_SEPARATOR, LABEL_SEPARATOR, TOKEN_SEPARATOR};

fn sorted_pairs<I, K, V>(entries: I) -> Vec<(String, String)>
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: fmt::Display,
{
  let mut pairs: Vec<(String, String)> = entries
    .into_iter()
    .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
    .collect();
  pairs.sort();
  pairs
}

/// Canonicalize a string-keyed mapping.
///
/// Keys are sorted byte-wise and each entry renders as `key-value`, with
/// nothing between entries: `{"a":"b","c":"d"}` becomes `a-bc-d`. An empty
/// mapping renders as the empty string.
pub fn canonicalize_map<I, K, V>(entries: I) -> String
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: fmt::Display,
{
  let mut out = String::new();
  for (key, value) in sorted_pairs(entries) {
    let _ = write!(out, "{}{}{}", key, TOKEN_SEPARATOR, value);
  }
  out
}

/// Canonicalize a mapping as sorted `key:value-` entries (HTTP headers).
pub fn canonicalize_colon_map<I, K, V>(entries: I) -> String
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: fmt::Display,
{
  let mut out = String::new();
  for (key, value) in sorted_pairs(entries) {
    let _ = write!(out, "{}{}{}{}", key, LABEL_SEPARATOR, value, TOKEN_SEPARATOR);
  }
  out
}

/// Canonicalize an unordered collection.
///
/// Each element is rendered by `canon`, the tokens are sorted byte-wise and
/// concatenated without a delimiter.
pub fn canonicalize_list<T, F>(items: &[T], mut canon: F) -> String
where
  F: FnMut(&T) -> String,
{
  let mut tokens: Vec<String> = items.iter().map(&mut canon).collect();
  tokens.sort();
  tokens.concat()
}

/// Fallible form of [`canonicalize_list`]; stops at the first element error.
pub fn try_canonicalize_list<T, F, E>(items: &[T], mut canon: F) -> Result<String, E>
where
  F: FnMut(&T) -> Result<String, E>,
{
  let mut tokens = items.iter().map(&mut canon).collect::<Result<Vec<_>, E>>()?;
  tokens.sort();
  Ok(tokens.concat())
}

/// Canonicalize a string set as sorted `item-` tokens.
pub fn canonicalize_set<I, S>(items: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
  items.sort();
  let mut out = String::new();
  for item in items {
    out.push_str(&item);
    out.push(TOKEN_SEPARATOR);
  }
  out
}

/// Canonicalize a string set as one token: sorted, joined with `,`, then `-`.
pub fn canonicalize_joined_set<I, S>(items: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
  items.sort();
  let mut out = items.join(JOINED_SET_SEPARATOR);
  out.push(TOKEN_SEPARATOR);
  out
}

/// Canonicalize a mapping as sorted `field-key-value-` entries.
///
/// `properties` holding `{"b":"2","a":"1"}` becomes `properties-a-1-properties-b-2-`.
pub fn canonicalize_prefixed_map<I, K, V>(field: &str, entries: I) -> String
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: fmt::Display,
{
  let mut out = String::new();
  for (key, value) in sorted_pairs(entries) {
    let _ = write!(
      out,
      "{}{}{}{}{}{}",
      field, TOKEN_SEPARATOR, key, TOKEN_SEPARATOR, value, TOKEN_SEPARATOR
    );
  }
  out
}

/// Sorted values joined with `-`, with no trailing separator.
pub fn canonicalize_dash_joined<I, S>(items: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
  items.sort();
  let separator = TOKEN_SEPARATOR.to_string();
  items.join(&separator)
}
