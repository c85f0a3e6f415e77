use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A string-keyed mapping of strings (labels, annotations, subnets per zone).
pub type NestedMap = HashMap<String, String>;

/// A single typed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
  Bool(bool),
  Int(i64),
  String(String),
}

impl Scalar {
  pub fn type_name(&self) -> &'static str {
    match self {
      Scalar::Bool(_) => "bool",
      Scalar::Int(_) => "int",
      Scalar::String(_) => "string",
    }
  }
}

/// Renders the bare value: `true`, `42`, `text`. No separator.
impl fmt::Display for Scalar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Scalar::Bool(b) => write!(f, "{}", b),
      Scalar::Int(i) => write!(f, "{}", i),
      Scalar::String(s) => f.write_str(s),
    }
  }
}

impl From<&str> for Scalar {
  fn from(s: &str) -> Self {
    Scalar::String(s.to_string())
  }
}

impl From<String> for Scalar {
  fn from(s: String) -> Self {
    Scalar::String(s)
  }
}

impl From<i64> for Scalar {
  fn from(i: i64) -> Self {
    Scalar::Int(i)
  }
}

impl From<bool> for Scalar {
  fn from(b: bool) -> Self {
    Scalar::Bool(b)
  }
}

/// The value stored under one field of a [`ConfigRecord`].
///
/// Which variant a field holds is fixed by the kind's bindings. The engine never
/// converts between variants: a record that supplies the wrong one fails
/// extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
  Scalar(Scalar),
  NestedMap(NestedMap),
  RecordList(Vec<ConfigRecord>),
  StringSet(Vec<String>),
  EmbeddedText(String),
}

impl FieldValue {
  /// Embedded structured text, normalized before hashing.
  pub fn text(text: impl Into<String>) -> Self {
    FieldValue::EmbeddedText(text.into())
  }

  /// An unordered collection of strings.
  pub fn set<I, S>(items: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    FieldValue::StringSet(items.into_iter().map(Into::into).collect())
  }

  /// A string-to-string mapping.
  pub fn map<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    FieldValue::NestedMap(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }

  /// A sequence of nested records.
  pub fn records(records: impl IntoIterator<Item = ConfigRecord>) -> Self {
    FieldValue::RecordList(records.into_iter().collect())
  }

  /// Name of the variant (or scalar type) for error messages.
  pub fn type_name(&self) -> &'static str {
    match self {
      FieldValue::Scalar(scalar) => scalar.type_name(),
      FieldValue::NestedMap(_) => "nested map",
      FieldValue::RecordList(_) => "record list",
      FieldValue::StringSet(_) => "string set",
      FieldValue::EmbeddedText(_) => "embedded text",
    }
  }
}

impl From<Scalar> for FieldValue {
  fn from(scalar: Scalar) -> Self {
    FieldValue::Scalar(scalar)
  }
}

impl From<&str> for FieldValue {
  fn from(s: &str) -> Self {
    FieldValue::Scalar(s.into())
  }
}

impl From<String> for FieldValue {
  fn from(s: String) -> Self {
    FieldValue::Scalar(s.into())
  }
}

impl From<i64> for FieldValue {
  fn from(i: i64) -> Self {
    FieldValue::Scalar(i.into())
  }
}

impl From<bool> for FieldValue {
  fn from(b: bool) -> Self {
    FieldValue::Scalar(b.into())
  }
}

impl From<NestedMap> for FieldValue {
  fn from(map: NestedMap) -> Self {
    FieldValue::NestedMap(map)
  }
}

impl From<Vec<ConfigRecord>> for FieldValue {
  fn from(records: Vec<ConfigRecord>) -> Self {
    FieldValue::RecordList(records)
  }
}

/// One element of an unordered collection, as the schema layer hands it over.
///
/// Field order carries no meaning; the kind's bindings decide the order in
/// which fields are canonicalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord {
  fields: HashMap<String, FieldValue>,
}

impl ConfigRecord {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert.
  pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
    self.insert(field, value);
    self
  }

  pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
    self.fields.insert(field.into(), value.into())
  }

  pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
    self.fields.remove(field)
  }

  pub fn get(&self, field: &str) -> Option<&FieldValue> {
    self.fields.get(field)
  }

  pub fn contains(&self, field: &str) -> bool {
    self.fields.contains_key(field)
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
    self.fields.iter()
  }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for ConfigRecord {
  fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
    Self {
      fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    }
  }
}
