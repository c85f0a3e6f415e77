//! Schema-directed decoding of JSON-shaped documents into records.
//!
//! A document carries no type information beyond JSON's own, so the kind's
//! bindings decide which [`FieldValue`] each field becomes. `null` values are
//! treated as absent and undeclared fields are skipped.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::trace;

use crate::kind::{Binding, Canon, KindSpec, ScalarKind};

use super::{ConfigRecord, FieldValue, NestedMap, Scalar};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
  #[error("{path}: expected a mapping of fields, found {found}")]
  NotARecord { path: String, found: &'static str },

  #[error("field {field}: expected {expected}, found {found}")]
  Shape {
    field: String,
    expected: &'static str,
    found: &'static str,
  },
}

fn json_type(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "sequence",
    Value::Object(_) => "mapping",
  }
}

fn join(prefix: &str, field: &str) -> String {
  if prefix.is_empty() {
    field.to_string()
  } else {
    format!("{}.{}", prefix, field)
  }
}

fn shape(field: String, expected: &'static str, found: &Value) -> DecodeError {
  DecodeError::Shape {
    field,
    expected,
    found: json_type(found),
  }
}

/// Decode one record for `spec`.
pub fn decode_record(spec: &KindSpec, value: &Value) -> Result<ConfigRecord, DecodeError> {
  let bindings: Vec<&Binding> = spec.bindings().collect();
  decode_fields(&bindings, value, "")
}

/// Decode a mapping as one record or a sequence as several.
pub fn decode_records(spec: &KindSpec, value: &Value) -> Result<Vec<ConfigRecord>, DecodeError> {
  let bindings: Vec<&Binding> = spec.bindings().collect();
  match value {
    Value::Array(items) => items
      .iter()
      .enumerate()
      .map(|(index, item)| decode_fields(&bindings, item, &format!("[{}]", index)))
      .collect(),
    other => Ok(vec![decode_fields(&bindings, other, "")?]),
  }
}

fn decode_fields(bindings: &[&Binding], value: &Value, prefix: &str) -> Result<ConfigRecord, DecodeError> {
  let Value::Object(object) = value else {
    return Err(DecodeError::NotARecord {
      path: if prefix.is_empty() { "record".to_string() } else { prefix.to_string() },
      found: json_type(value),
    });
  };

  for key in object.keys() {
    if !bindings.iter().any(|b| b.field == key) {
      trace!(field = %join(prefix, key), "skipping undeclared field");
    }
  }

  let mut record = ConfigRecord::new();
  for binding in bindings {
    match object.get(binding.field) {
      None | Some(Value::Null) => {}
      Some(raw) => {
        let path = join(prefix, binding.field);
        record.insert(binding.field, decode_value(binding.canon, raw, &path)?);
      }
    }
  }
  Ok(record)
}

fn decode_scalar(kind: ScalarKind, value: &Value, path: &str) -> Result<Scalar, DecodeError> {
  match (kind, value) {
    (ScalarKind::String, Value::String(s)) => Ok(Scalar::String(s.clone())),
    (ScalarKind::Int, Value::Number(n)) => n
      .as_i64()
      .map(Scalar::Int)
      .ok_or_else(|| shape(path.to_string(), "int", value)),
    (ScalarKind::Bool, Value::Bool(b)) => Ok(Scalar::Bool(*b)),
    (kind, other) => Err(shape(path.to_string(), kind.name(), other)),
  }
}

/// Scalar for a free-form value: a map entry or a map-list field.
fn loose_scalar(value: &Value, path: &str) -> Result<Scalar, DecodeError> {
  match value {
    Value::String(s) => Ok(Scalar::String(s.clone())),
    Value::Bool(b) => Ok(Scalar::Bool(*b)),
    Value::Number(n) => Ok(n.as_i64().map(Scalar::Int).unwrap_or_else(|| Scalar::String(n.to_string()))),
    other => Err(shape(path.to_string(), "scalar", other)),
  }
}

fn decode_map(object: &Map<String, Value>, path: &str) -> Result<NestedMap, DecodeError> {
  object
    .iter()
    .map(|(key, value)| Ok((key.clone(), loose_scalar(value, &join(path, key))?.to_string())))
    .collect()
}

fn decode_set(items: &[Value], path: &str) -> Result<Vec<String>, DecodeError> {
  items
    .iter()
    .enumerate()
    .map(|(index, item)| match item {
      Value::String(s) => Ok(s.clone()),
      other => Err(shape(format!("{}[{}]", path, index), "string", other)),
    })
    .collect()
}

fn decode_flat_record(value: &Value, path: &str) -> Result<ConfigRecord, DecodeError> {
  let Value::Object(object) = value else {
    return Err(shape(path.to_string(), "mapping", value));
  };
  let mut record = ConfigRecord::new();
  for (key, field) in object {
    if field.is_null() {
      continue;
    }
    record.insert(key.clone(), loose_scalar(field, &join(path, key))?);
  }
  Ok(record)
}

fn decode_value(canon: Canon, value: &Value, path: &str) -> Result<FieldValue, DecodeError> {
  let decoded = match (canon, value) {
    (Canon::Str | Canon::Trimmed | Canon::StrCode, _) => {
      FieldValue::Scalar(decode_scalar(ScalarKind::String, value, path)?)
    }
    (Canon::Int, _) => FieldValue::Scalar(decode_scalar(ScalarKind::Int, value, path)?),
    (Canon::Bool, _) => FieldValue::Scalar(decode_scalar(ScalarKind::Bool, value, path)?),
    (Canon::Entry(kind), _) => FieldValue::Scalar(decode_scalar(kind, value, path)?),
    (Canon::Map | Canon::ColonMap | Canon::PrefixedMap, Value::Object(object)) => {
      FieldValue::NestedMap(decode_map(object, path)?)
    }
    (Canon::Set | Canon::JoinedSet | Canon::SetDump | Canon::HashOrderedSet, Value::Array(items)) => {
      FieldValue::StringSet(decode_set(items, path)?)
    }
    (Canon::Text, Value::String(text)) => FieldValue::EmbeddedText(text.clone()),
    (Canon::MapList | Canon::FieldJoin(_), Value::Array(items)) => FieldValue::RecordList(
      items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_flat_record(item, &format!("{}[{}]", path, index)))
        .collect::<Result<_, _>>()?,
    ),
    (
      Canon::Block(nested)
      | Canon::Head(nested)
      | Canon::Indexed(nested)
      | Canon::RecordSet(nested)
      | Canon::DigestSet(nested),
      Value::Array(items),
    ) => {
      let nested: Vec<&Binding> = nested.iter().collect();
      FieldValue::RecordList(
        items
          .iter()
          .enumerate()
          .map(|(index, item)| decode_fields(&nested, item, &format!("{}[{}]", path, index)))
          .collect::<Result<_, _>>()?,
      )
    }
    (
      Canon::Block(nested)
      | Canon::Head(nested)
      | Canon::Indexed(nested)
      | Canon::RecordSet(nested)
      | Canon::DigestSet(nested),
      Value::Object(_),
    ) => {
      let nested: Vec<&Binding> = nested.iter().collect();
      FieldValue::RecordList(vec![decode_fields(&nested, value, &format!("{}[0]", path))?])
    }
    (canon, other) => return Err(shape(path.to_string(), canon.expected(), other)),
  };
  Ok(decoded)
}
