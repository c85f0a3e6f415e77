//! Generic evaluator that walks a binding table over a record.

use std::fmt::Write;

use crate::canon::{
  canonicalize_colon_map, canonicalize_dash_joined, canonicalize_digests, canonicalize_hash_ordered_set,
  canonicalize_joined_set, canonicalize_map, canonicalize_prefixed_map, canonicalize_set, canonicalize_set_dump,
  hash_code, normalize_embedded_text, push_entry, push_scalar, try_canonicalize_list,
};
use crate::consts::TOKEN_SEPARATOR;
use crate::kind::{Binding, Canon, Presence, ScalarKind};
use crate::record::{ConfigRecord, FieldValue, Scalar};

use super::{Fingerprint, FingerprintError};

fn field_path(prefix: &str, field: &str) -> String {
  if prefix.is_empty() {
    field.to_string()
  } else {
    format!("{}.{}", prefix, field)
  }
}

fn element_path(prefix: &str, field: &str, index: usize) -> String {
  format!("{}[{}]", field_path(prefix, field), index)
}

fn mismatch(path: String, expected: &'static str, found: &FieldValue) -> FingerprintError {
  FingerprintError::TypeMismatch {
    field: path,
    expected,
    found: found.type_name(),
  }
}

fn scalar_matches(kind: ScalarKind, scalar: &Scalar) -> bool {
  matches!(
    (kind, scalar),
    (ScalarKind::String, Scalar::String(_)) | (ScalarKind::Int, Scalar::Int(_)) | (ScalarKind::Bool, Scalar::Bool(_))
  )
}

/// True when `value` counts as unset under a [`Presence::NonBlank`] binding.
fn is_blank(canon: Canon, value: &FieldValue) -> bool {
  match (canon, value) {
    (Canon::Trimmed, FieldValue::Scalar(Scalar::String(s))) => s.trim().is_empty(),
    (_, FieldValue::Scalar(Scalar::String(s))) => s.is_empty(),
    (_, FieldValue::EmbeddedText(text)) => normalize_embedded_text(text).is_empty(),
    (_, FieldValue::StringSet(items)) => items.is_empty(),
    (_, FieldValue::NestedMap(map)) => map.is_empty(),
    (_, FieldValue::RecordList(items)) => items.is_empty(),
    (_, FieldValue::Scalar(_)) => false,
  }
}

fn push_label(binding: &Binding, out: &mut String) {
  if let Some(label) = binding.label {
    out.push_str(label);
    out.push(binding.label_separator);
  }
}

/// The field's value when it contributes a token.
fn contributing<'r>(
  binding: &Binding,
  record: &'r ConfigRecord,
  prefix: &str,
) -> Result<Option<&'r FieldValue>, FingerprintError> {
  let suppressed = binding
    .unless
    .is_some_and(|other| record.get(other).is_some_and(|v| !is_blank(Canon::Str, v)));
  if suppressed {
    return Ok(None);
  }
  match (record.get(binding.field), binding.presence) {
    (None, Presence::Required) => Err(FingerprintError::MissingField {
      field: field_path(prefix, binding.field),
    }),
    (None, _) => Ok(None),
    (Some(value), Presence::NonBlank) if is_blank(binding.canon, value) => Ok(None),
    (Some(value), _) => Ok(Some(value)),
  }
}

/// Append the tokens of `record` under `bindings`, in binding order.
///
/// `prefix` is the path of `record` inside the top-level record, empty at the
/// top.
pub(crate) fn evaluate<'b, I>(
  bindings: I,
  record: &ConfigRecord,
  prefix: &str,
  out: &mut String,
) -> Result<(), FingerprintError>
where
  I: IntoIterator<Item = &'b Binding>,
{
  for binding in bindings {
    match contributing(binding, record, prefix)? {
      Some(value) => {
        push_label(binding, out);
        push_value(binding, value, prefix, out)?;
      }
      None => {
        if let Some(default) = binding.default {
          push_label(binding, out);
          out.push_str(default);
          out.push(TOKEN_SEPARATOR);
        }
      }
    }
  }
  Ok(())
}

fn string_of<'v>(value: &'v FieldValue) -> Option<&'v str> {
  match value {
    FieldValue::Scalar(Scalar::String(s)) => Some(s),
    _ => None,
  }
}

fn push_value(binding: &Binding, value: &FieldValue, prefix: &str, out: &mut String) -> Result<(), FingerprintError> {
  let path = || field_path(prefix, binding.field);
  let expected = binding.canon.expected();

  match (binding.canon, value) {
    (Canon::Str, FieldValue::Scalar(scalar)) if scalar_matches(ScalarKind::String, scalar) => push_scalar(out, scalar),
    (Canon::Int, FieldValue::Scalar(scalar)) if scalar_matches(ScalarKind::Int, scalar) => push_scalar(out, scalar),
    (Canon::Bool, FieldValue::Scalar(scalar)) if scalar_matches(ScalarKind::Bool, scalar) => push_scalar(out, scalar),
    (Canon::Entry(kind), FieldValue::Scalar(scalar)) if scalar_matches(kind, scalar) => {
      push_entry(out, binding.field, scalar)
    }
    (Canon::Map, FieldValue::NestedMap(map)) => out.push_str(&canonicalize_map(map)),
    (Canon::ColonMap, FieldValue::NestedMap(map)) => out.push_str(&canonicalize_colon_map(map)),
    (Canon::PrefixedMap, FieldValue::NestedMap(map)) => out.push_str(&canonicalize_prefixed_map(binding.field, map)),
    (Canon::Set, FieldValue::StringSet(items)) => out.push_str(&canonicalize_set(items)),
    (Canon::JoinedSet, FieldValue::StringSet(items)) => out.push_str(&canonicalize_joined_set(items)),
    (Canon::SetDump, FieldValue::StringSet(items)) => out.push_str(&canonicalize_set_dump(items)),
    (Canon::HashOrderedSet, FieldValue::StringSet(items)) => out.push_str(&canonicalize_hash_ordered_set(items)),
    (Canon::Trimmed, FieldValue::Scalar(Scalar::String(s))) => {
      out.push_str(s.trim());
      out.push(TOKEN_SEPARATOR);
    }
    (Canon::StrCode, FieldValue::Scalar(Scalar::String(s))) => {
      let _ = write!(out, "{}{}", hash_code(s), TOKEN_SEPARATOR);
    }
    (Canon::Text, FieldValue::EmbeddedText(text)) => {
      out.push_str(&normalize_embedded_text(text));
      out.push(TOKEN_SEPARATOR);
    }
    (Canon::MapList, FieldValue::RecordList(items)) => {
      let indexed: Vec<(usize, &ConfigRecord)> = items.iter().enumerate().collect();
      let token = try_canonicalize_list(&indexed, |(index, element)| {
        flat_record_token(element, &element_path(prefix, binding.field, *index))
      })?;
      out.push_str(&token);
    }
    (Canon::Block(nested), FieldValue::RecordList(items)) => {
      for (index, element) in items.iter().enumerate() {
        evaluate(nested, element, &element_path(prefix, binding.field, index), out)?;
      }
    }
    (Canon::Head(nested), FieldValue::RecordList(items)) => {
      if let Some(first) = items.first() {
        evaluate(nested, first, &element_path(prefix, binding.field, 0), out)?;
      }
    }
    (Canon::Indexed(nested), FieldValue::RecordList(items)) => {
      for (index, element) in items.iter().enumerate() {
        let _ = write!(out, "{}{}{}{}", binding.field, TOKEN_SEPARATOR, index, TOKEN_SEPARATOR);
        evaluate(nested, element, &element_path(prefix, binding.field, index), out)?;
      }
    }
    (Canon::DigestSet(nested), FieldValue::RecordList(items)) => {
      let digests = items
        .iter()
        .enumerate()
        .map(|(index, element)| {
          let mut element_out = String::new();
          evaluate(nested, element, &element_path(prefix, binding.field, index), &mut element_out)?;
          Ok(Fingerprint::of(&element_out).value())
        })
        .collect::<Result<Vec<_>, FingerprintError>>()?;
      out.push_str(&canonicalize_digests(digests));
    }
    (Canon::FieldJoin(inner), FieldValue::RecordList(items)) => {
      let mut values = Vec::with_capacity(items.len());
      for (index, element) in items.iter().enumerate() {
        match element.get(inner) {
          None => {}
          Some(value) => match string_of(value) {
            Some(s) => values.push(s),
            None => {
              let path = field_path(&element_path(prefix, binding.field, index), inner);
              return Err(mismatch(path, "string", value));
            }
          },
        }
      }
      out.push_str(&canonicalize_dash_joined(values));
    }
    (Canon::RecordSet(nested), FieldValue::RecordList(items)) => {
      let indexed: Vec<(usize, &ConfigRecord)> = items.iter().enumerate().collect();
      let token = try_canonicalize_list(&indexed, |(index, element)| {
        let mut element_out = String::new();
        evaluate(nested, element, &element_path(prefix, binding.field, *index), &mut element_out)?;
        Ok::<_, FingerprintError>(element_out)
      })?;
      out.push_str(&token);
    }
    (_, other) => return Err(mismatch(path(), expected, other)),
  }
  Ok(())
}

/// Render a record whose fields are all scalars as a canonical map.
fn flat_record_token(record: &ConfigRecord, path: &str) -> Result<String, FingerprintError> {
  let mut entries = Vec::with_capacity(record.len());
  for (key, value) in record.iter() {
    match value {
      FieldValue::Scalar(scalar) => entries.push((key, scalar)),
      other => return Err(mismatch(field_path(path, key), "scalar", other)),
    }
  }
  Ok(canonicalize_map(entries))
}
