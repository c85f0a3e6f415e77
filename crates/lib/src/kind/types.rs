use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tables;
use crate::consts::{LABEL_SEPARATOR, TOKEN_SEPARATOR};

/// Scalar type a binding expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
  String,
  Int,
  Bool,
}

impl ScalarKind {
  pub fn name(self) -> &'static str {
    match self {
      ScalarKind::String => "string",
      ScalarKind::Int => "int",
      ScalarKind::Bool => "bool",
    }
  }
}

/// Canonicalizer selected for one field.
///
/// Each variant fixes both the `FieldValue` variant the field must hold and the
/// shape of the token it produces.
#[derive(Debug, Clone, Copy)]
pub enum Canon {
  /// String scalar, `value-`.
  Str,
  /// Integer scalar, `value-`.
  Int,
  /// Boolean scalar, `value-`.
  Bool,
  /// Scalar rendered as `field-value` with no trailing separator.
  Entry(ScalarKind),
  /// Nested map, sorted `key-value` pairs.
  Map,
  /// Nested map, sorted `key:value-` pairs.
  ColonMap,
  /// Unordered list of flat records, each rendered as a map.
  MapList,
  /// Unordered string set, sorted `item-` tokens.
  Set,
  /// Unordered string set, sorted and joined with `,`, then `-`.
  JoinedSet,
  /// Unordered string set rendered as the schema set's hash-code keyed dump.
  SetDump,
  /// Unordered string set, `item-` tokens in hash-code order.
  HashOrderedSet,
  /// String scalar with surrounding whitespace trimmed, `value-`.
  Trimmed,
  /// String scalar replaced by its CRC-32 hash code, `code-`.
  StrCode,
  /// Nested map, sorted `field-key-value-` entries.
  PrefixedMap,
  /// Embedded structured text, normalized, then `-`.
  Text,
  /// Ordered list of nested records evaluated under their own bindings.
  Block(&'static [Binding]),
  /// Only the first nested record of the list, evaluated under the bindings.
  Head(&'static [Binding]),
  /// Ordered list of nested records, each preceded by `field-index-`.
  Indexed(&'static [Binding]),
  /// Unordered list of nested records evaluated under their own bindings.
  RecordSet(&'static [Binding]),
  /// Unordered list of nested records, each reduced to its FNV-1a digest;
  /// digests sorted numerically, each `digest-`.
  DigestSet(&'static [Binding]),
  /// One string field of every nested record, sorted and joined with `-`,
  /// no trailing separator.
  FieldJoin(&'static str),
}

impl Canon {
  /// Shape the field must hold, for error messages.
  pub fn expected(&self) -> &'static str {
    match self {
      Canon::Str | Canon::Trimmed | Canon::StrCode => "string",
      Canon::Int => "int",
      Canon::Bool => "bool",
      Canon::Entry(kind) => kind.name(),
      Canon::Map | Canon::ColonMap | Canon::PrefixedMap => "nested map",
      Canon::MapList
      | Canon::Block(_)
      | Canon::Head(_)
      | Canon::Indexed(_)
      | Canon::RecordSet(_)
      | Canon::DigestSet(_)
      | Canon::FieldJoin(_) => "record list",
      Canon::Set | Canon::JoinedSet | Canon::SetDump | Canon::HashOrderedSet => "string set",
      Canon::Text => "embedded text",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
  /// Absent field is an error.
  Required,
  /// Absent field contributes nothing.
  Optional,
  /// Absent or blank field contributes nothing. Blank means an empty string,
  /// a string that trims to nothing under [`Canon::Trimmed`], text that
  /// normalizes to nothing, or an empty collection.
  NonBlank,
}

/// One (field, canonicalizer) pair of a kind's table.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
  pub field: &'static str,
  pub canon: Canon,
  pub presence: Presence,
  /// Emitted in front of the token, followed by `label_separator`, when set.
  pub label: Option<&'static str>,
  pub label_separator: char,
  /// Rendered as the value when the field does not contribute.
  pub default: Option<&'static str>,
  /// Field whose non-blank presence suppresses this binding.
  pub unless: Option<&'static str>,
}

impl Binding {
  const fn new(field: &'static str, canon: Canon, presence: Presence) -> Self {
    Self {
      field,
      canon,
      presence,
      label: None,
      label_separator: LABEL_SEPARATOR,
      default: None,
      unless: None,
    }
  }

  pub const fn optional(field: &'static str, canon: Canon) -> Self {
    Self::new(field, canon, Presence::Optional)
  }

  pub const fn required(field: &'static str, canon: Canon) -> Self {
    Self::new(field, canon, Presence::Required)
  }

  pub const fn non_blank(field: &'static str, canon: Canon) -> Self {
    Self::new(field, canon, Presence::NonBlank)
  }

  /// Prefix the token with `label:`.
  pub const fn labeled(mut self, label: &'static str) -> Self {
    self.label = Some(label);
    self.label_separator = LABEL_SEPARATOR;
    self
  }

  /// Prefix the token with `field-`.
  pub const fn tagged(mut self) -> Self {
    self.label = Some(self.field);
    self.label_separator = TOKEN_SEPARATOR;
    self
  }

  pub const fn or_default(mut self, value: &'static str) -> Self {
    self.default = Some(value);
    self
  }

  pub const fn unless(mut self, field: &'static str) -> Self {
    self.unless = Some(field);
    self
  }
}

/// Reduction applied to a kind's canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
  /// FNV-1a 32, used by almost every kind.
  Fnv1a,
  /// CRC-32 (IEEE), the schema layer's string hash code.
  HashCode,
}

/// The ordered bindings of one kind, stored as a list of shared segments.
#[derive(Debug)]
pub struct KindSpec {
  pub kind: Kind,
  pub digest: Digest,
  pub(crate) segments: &'static [&'static [Binding]],
}

impl KindSpec {
  pub(crate) const fn new(kind: Kind, segments: &'static [&'static [Binding]]) -> Self {
    Self {
      kind,
      digest: Digest::Fnv1a,
      segments,
    }
  }

  pub(crate) const fn with_digest(mut self, digest: Digest) -> Self {
    self.digest = digest;
    self
  }

  /// Bindings in evaluation order.
  pub fn bindings(&self) -> impl Iterator<Item = &'static Binding> {
    self.segments.iter().flat_map(|segment| segment.iter())
  }

  /// Declared binding for `field`, if any.
  pub fn binding(&self, field: &str) -> Option<&'static Binding> {
    self.bindings().find(|b| b.field == field)
  }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown configuration kind: {0}")]
pub struct UnknownKind(pub String);

/// Every configuration kind the engine can fingerprint.
///
/// The first group are machine-pool shapes, one per cloud. The rest are
/// elements of other unordered collections in the provider schema: cluster
/// references, packs, role mappings, alert and filter entries, VM volumes and
/// template entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
  Aws,
  Eks,
  Azure,
  Aks,
  Gcp,
  Gke,
  Vsphere,
  Openstack,
  Cloudstack,
  Maas,
  Libvirt,
  EdgeNative,
  Edge,
  CustomCloud,
  Virtual,
  Cluster,
  Pack,
  ProjectRoleMapping,
  FilterItem,
  AlertStatus,
  AlertHttp,
  TemplateVariable,
  TemplateProfile,
  UserProjectRoleMapping,
  UserResourceRoleMapping,
  UserWorkspaceRoleMapping,
  WorkspaceRoleMapping,
  ContainerDisk,
  CloudInitDisk,
  DataVolume,
  AppPack,
}

impl Kind {
  pub const ALL: [Kind; 31] = [
    Kind::Aws,
    Kind::Eks,
    Kind::Azure,
    Kind::Aks,
    Kind::Gcp,
    Kind::Gke,
    Kind::Vsphere,
    Kind::Openstack,
    Kind::Cloudstack,
    Kind::Maas,
    Kind::Libvirt,
    Kind::EdgeNative,
    Kind::Edge,
    Kind::CustomCloud,
    Kind::Virtual,
    Kind::Cluster,
    Kind::Pack,
    Kind::ProjectRoleMapping,
    Kind::FilterItem,
    Kind::AlertStatus,
    Kind::AlertHttp,
    Kind::TemplateVariable,
    Kind::TemplateProfile,
    Kind::UserProjectRoleMapping,
    Kind::UserResourceRoleMapping,
    Kind::UserWorkspaceRoleMapping,
    Kind::WorkspaceRoleMapping,
    Kind::ContainerDisk,
    Kind::CloudInitDisk,
    Kind::DataVolume,
    Kind::AppPack,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Kind::Aws => "aws",
      Kind::Eks => "eks",
      Kind::Azure => "azure",
      Kind::Aks => "aks",
      Kind::Gcp => "gcp",
      Kind::Gke => "gke",
      Kind::Vsphere => "vsphere",
      Kind::Openstack => "openstack",
      Kind::Cloudstack => "cloudstack",
      Kind::Maas => "maas",
      Kind::Libvirt => "libvirt",
      Kind::EdgeNative => "edge-native",
      Kind::Edge => "edge",
      Kind::CustomCloud => "custom-cloud",
      Kind::Virtual => "virtual",
      Kind::Cluster => "cluster",
      Kind::Pack => "pack",
      Kind::ProjectRoleMapping => "project-role-mapping",
      Kind::FilterItem => "filter-item",
      Kind::AlertStatus => "alert-status",
      Kind::AlertHttp => "alert-http",
      Kind::TemplateVariable => "template-variable",
      Kind::TemplateProfile => "template-profile",
      Kind::UserProjectRoleMapping => "user-project-role-mapping",
      Kind::UserResourceRoleMapping => "user-resource-role-mapping",
      Kind::UserWorkspaceRoleMapping => "user-workspace-role-mapping",
      Kind::WorkspaceRoleMapping => "workspace-role-mapping",
      Kind::ContainerDisk => "container-disk",
      Kind::CloudInitDisk => "cloud-init-disk",
      Kind::DataVolume => "data-volume",
      Kind::AppPack => "app-pack",
    }
  }

  /// True for the machine-pool kinds, which are keyed by `name` in pool diffs.
  pub fn is_machine_pool(self) -> bool {
    matches!(
      self,
      Kind::Aws
        | Kind::Eks
        | Kind::Azure
        | Kind::Aks
        | Kind::Gcp
        | Kind::Gke
        | Kind::Vsphere
        | Kind::Openstack
        | Kind::Cloudstack
        | Kind::Maas
        | Kind::Libvirt
        | Kind::EdgeNative
        | Kind::Edge
        | Kind::CustomCloud
        | Kind::Virtual
    )
  }

  pub fn spec(self) -> &'static KindSpec {
    tables::spec_for(self)
  }
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Kind {
  type Err = UnknownKind;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Kind::ALL
      .iter()
      .copied()
      .find(|kind| kind.name() == s)
      .ok_or_else(|| UnknownKind(s.to_string()))
  }
}
