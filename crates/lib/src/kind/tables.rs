//! Static per-kind binding tables.
//!
//! Every table is evaluated strictly in declaration order. Machine-pool kinds
//! that share the common pool fields start with [`COMMON_POOL`]; managed
//! Kubernetes kinds (EKS, AKS, GKE) declare their own order.

use super::types::{Binding, Canon, Digest, Kind, KindSpec, ScalarKind};

const fn opt(field: &'static str, canon: Canon) -> Binding {
  Binding::optional(field, canon)
}

const fn req(field: &'static str, canon: Canon) -> Binding {
  Binding::required(field, canon)
}

const fn nb(field: &'static str, canon: Canon) -> Binding {
  Binding::non_blank(field, canon)
}

const ROLLING_UPDATE_STRATEGY: &[Binding] = &[
  opt("type", Canon::Str).labeled("rolling_type"),
  opt("max_surge", Canon::Str).labeled("max_surge"),
  opt("max_unavailable", Canon::Str).labeled("max_unavailable"),
];

const OVERRIDE_SCALING: &[Binding] = &[
  opt("max_surge", Canon::Str).labeled("max_surge"),
  opt("max_unavailable", Canon::Str).labeled("max_unavailable"),
];

/// Fields shared by every pool kind that follows the generic pool schema.
///
/// Terraform hands unset optional strings over as `""`, so an empty kubeadm
/// override is the same pool as one without it.
pub const COMMON_POOL: &[Binding] = &[
  opt("additional_labels", Canon::Map),
  opt("taints", Canon::MapList),
  opt("control_plane", Canon::Bool),
  opt("control_plane_as_worker", Canon::Bool),
  opt("name", Canon::Str),
  opt("count", Canon::Int),
  opt("update_strategy", Canon::Str),
  opt("rolling_update_strategy", Canon::Block(ROLLING_UPDATE_STRATEGY)),
  opt("override_scaling", Canon::Block(OVERRIDE_SCALING)).labeled("override_scaling"),
  opt("node_repave_interval", Canon::Int),
  opt("min", Canon::Int),
  opt("max", Canon::Int),
  opt("additional_annotations", Canon::Map),
  nb("override_kubeadm_configuration", Canon::Text),
];

const AWS_POOL: &[Binding] = &[
  opt("instance_type", Canon::Str),
  opt("capacity_type", Canon::Str),
  opt("max_price", Canon::Str),
  opt("azs", Canon::Set),
  opt("az_subnets", Canon::Map),
];

const EKS_LAUNCH_TEMPLATE: &[Binding] = &[
  opt("ami_id", Canon::Str),
  opt("root_volume_type", Canon::Str),
  opt("root_volume_iops", Canon::Int),
  opt("root_volume_throughput", Canon::Int),
  opt("additional_security_groups", Canon::HashOrderedSet),
];

const EKS_POOL: &[Binding] = &[
  opt("additional_labels", Canon::Map),
  opt("taints", Canon::MapList),
  opt("name", Canon::Str),
  opt("count", Canon::Int),
  opt("disk_size_gb", Canon::Int),
  opt("instance_type", Canon::Str),
  opt("az_subnets", Canon::Map),
  opt("capacity_type", Canon::Str),
  opt("min", Canon::Int),
  opt("max", Canon::Int),
  opt("max_price", Canon::Str),
  opt("eks_launch_template", Canon::Block(EKS_LAUNCH_TEMPLATE)),
  opt("additional_annotations", Canon::Map),
  nb("override_kubeadm_configuration", Canon::Text),
];

const AZURE_POOL: &[Binding] = &[
  opt("instance_type", Canon::Str),
  opt("is_system_node_pool", Canon::Bool),
  opt("os_type", Canon::Str),
  opt("azs", Canon::Set),
];

const AKS_POOL: &[Binding] = &[
  opt("name", Canon::Str),
  opt("count", Canon::Int),
  opt("instance_type", Canon::Str),
  opt("disk_size_gb", Canon::Int),
  opt("is_system_node_pool", Canon::Bool),
  opt("storage_account_type", Canon::Str),
  opt("additional_labels", Canon::Map),
  opt("update_strategy", Canon::Str),
  opt("min", Canon::Int),
  opt("max", Canon::Int),
  opt("node", Canon::MapList),
  opt("taints", Canon::MapList),
  opt("additional_annotations", Canon::Map),
  nb("override_kubeadm_configuration", Canon::Text),
];

const GCP_POOL: &[Binding] = &[opt("instance_type", Canon::Str), opt("azs", Canon::Set)];

const GKE_POOL: &[Binding] = &[
  opt("name", Canon::Str),
  opt("count", Canon::Int),
  opt("disk_size_gb", Canon::Int),
  opt("instance_type", Canon::Str),
  opt("additional_labels", Canon::Map),
  opt("update_strategy", Canon::Str),
  opt("node", Canon::MapList),
  opt("taints", Canon::MapList),
  opt("additional_annotations", Canon::Map),
  nb("override_kubeadm_configuration", Canon::Text),
];

const VSPHERE_INSTANCE_TYPE: &[Binding] = &[
  opt("cpu", Canon::Int),
  opt("disk_size_gb", Canon::Int),
  opt("memory_mb", Canon::Int),
];

const VSPHERE_PLACEMENT: &[Binding] = &[
  opt("cluster", Canon::Str),
  opt("resource_pool", Canon::Str),
  opt("datastore", Canon::Str),
  opt("network", Canon::Str),
  opt("static_ip_pool_id", Canon::Str),
];

const VSPHERE_POOL: &[Binding] = &[
  opt("instance_type", Canon::Block(VSPHERE_INSTANCE_TYPE)),
  opt("placement", Canon::Block(VSPHERE_PLACEMENT)),
];

const OPENSTACK_POOL: &[Binding] = &[
  opt("instance_type", Canon::Str),
  opt("azs", Canon::Set),
  opt("subnet_id", Canon::Str),
];

const CLOUDSTACK_TEMPLATE: &[Binding] = &[opt("id", Canon::Str), opt("name", Canon::Str)];

const CLOUDSTACK_POOL: &[Binding] = &[
  opt("offering", Canon::Str),
  opt("template", Canon::Head(CLOUDSTACK_TEMPLATE)),
  opt("network", Canon::FieldJoin("network_name")),
];

const MAAS_INSTANCE_TYPE: &[Binding] = &[opt("min_cpu", Canon::Int), opt("min_memory_mb", Canon::Int)];

// MAAS hashes the schema sets themselves, not their sorted elements.
const MAAS_POOL: &[Binding] = &[
  opt("instance_type", Canon::Block(MAAS_INSTANCE_TYPE)),
  opt("azs", Canon::SetDump),
  opt("node_tags", Canon::SetDump),
];

const GPU_CONFIG: &[Binding] = &[
  opt("num_gpus", Canon::Int),
  opt("device_model", Canon::Str),
  opt("vendor", Canon::Str),
  opt("addresses", Canon::Map),
];

/// Instance type of a libvirt pool (CPU pinning, GPU passthrough, extra disks).
pub const LIBVIRT_INSTANCE_TYPE: &[Binding] = &[
  opt("cpu", Canon::Int),
  opt("disk_size_gb", Canon::Int),
  opt("memory_mb", Canon::Int),
  opt("cpus_sets", Canon::Str),
  opt("cache_passthrough", Canon::Entry(ScalarKind::Bool)),
  opt("gpu_config", Canon::Block(GPU_CONFIG)),
  opt("attached_disks", Canon::MapList),
];

const LIBVIRT_POOL: &[Binding] = &[opt("instance_type", Canon::Block(LIBVIRT_INSTANCE_TYPE))];

const EDGE_HOST: &[Binding] = &[
  opt("host_name", Canon::Str),
  opt("host_uid", Canon::Str),
  opt("static_ip", Canon::Str),
];

const EDGE_NATIVE_POOL: &[Binding] = &[opt("edge_host", Canon::RecordSet(EDGE_HOST))];

// Custom clouds carry their whole pool definition in `node_pool_config`.
const CUSTOM_CLOUD_POOL: &[Binding] = &[
  opt("control_plane", Canon::Bool),
  opt("control_plane_as_worker", Canon::Bool),
  nb("node_pool_config", Canon::Text),
];

const CLUSTER: &[Binding] = &[req("uid", Canon::Str)];

const PACK: &[Binding] = &[req("name", Canon::Str), req("tag", Canon::Str), req("values", Canon::Text)];

const PROJECT_ROLE_MAPPING: &[Binding] = &[req("id", Canon::Str), req("roles", Canon::Set)];

const FILTER_ITEM: &[Binding] = &[
  opt("key", Canon::Str).labeled("key"),
  opt("operator", Canon::Str).labeled("operator"),
  opt("negation", Canon::Bool).labeled("negation"),
  opt("values", Canon::JoinedSet).labeled("values"),
];

const ALERT_STATUS: &[Binding] = &[
  opt("is_succeeded", Canon::Bool),
  opt("message", Canon::Str),
  opt("time", Canon::Str),
];

const ALERT_HTTP: &[Binding] = &[
  opt("method", Canon::Str),
  opt("url", Canon::Str),
  opt("body", Canon::Str),
  opt("headers", Canon::ColonMap),
];

const TEMPLATE_VARIABLE: &[Binding] = &[
  opt("name", Canon::Str),
  opt("value", Canon::Str),
  opt("assign_strategy", Canon::Str),
];

const TEMPLATE_PROFILE: &[Binding] = &[opt("uid", Canon::Str)];

const USER_PROJECT_ROLE_MAPPING: &[Binding] = &[req("project_id", Canon::Str), req("role_ids", Canon::Set)];

const USER_RESOURCE_ROLE_MAPPING: &[Binding] = &[
  req("project_ids", Canon::Set),
  req("filter_ids", Canon::Set),
  req("role_ids", Canon::Set),
];

const USER_WORKSPACE_ROLES: &[Binding] = &[req("id", Canon::Str), req("role_ids", Canon::Set)];

const USER_WORKSPACE_ROLE_MAPPING: &[Binding] = &[
  opt("project_id", Canon::StrCode),
  opt("workspace", Canon::DigestSet(USER_WORKSPACE_ROLES)),
];

// Team mappings nest project role mappings, one per workspace.
const WORKSPACE_ROLE_MAPPING: &[Binding] = &[
  opt("id", Canon::StrCode),
  opt("workspace", Canon::DigestSet(PROJECT_ROLE_MAPPING)),
];

const CONTAINER_DISK: &[Binding] = &[req("image_url", Canon::Str)];

const CLOUD_INIT_DISK: &[Binding] = &[req("user_data", Canon::Str)];

const DATA_VOLUME: &[Binding] = &[req("storage", Canon::Str)];

const APP_PACK_MANIFEST: &[Binding] = &[
  opt("name", Canon::Str).tagged().or_default(""),
  opt("content", Canon::Trimmed).tagged().or_default(""),
];

// The pack uid is assigned by the server and never participates.
const APP_PACK: &[Binding] = &[
  opt("name", Canon::Str).tagged(),
  nb("type", Canon::Str).tagged().or_default("spectro"),
  nb("tag", Canon::Str).tagged(),
  nb("registry_uid", Canon::Str).tagged(),
  nb("registry_name", Canon::Str).tagged().unless("registry_uid"),
  nb("source_app_tier", Canon::Str).tagged(),
  opt("install_order", Canon::Int).tagged().or_default("0"),
  opt("properties", Canon::PrefixedMap),
  nb("values", Canon::Trimmed).tagged(),
  opt("manifest", Canon::Indexed(APP_PACK_MANIFEST)),
];

static AWS: KindSpec = KindSpec::new(Kind::Aws, &[COMMON_POOL, AWS_POOL]);

static EKS: KindSpec = KindSpec::new(Kind::Eks, &[EKS_POOL]);

static AZURE: KindSpec = KindSpec::new(Kind::Azure, &[COMMON_POOL, AZURE_POOL]);

static AKS: KindSpec = KindSpec::new(Kind::Aks, &[AKS_POOL]);

static GCP: KindSpec = KindSpec::new(Kind::Gcp, &[COMMON_POOL, GCP_POOL]);

static GKE: KindSpec = KindSpec::new(Kind::Gke, &[GKE_POOL]);

static VSPHERE: KindSpec = KindSpec::new(Kind::Vsphere, &[COMMON_POOL, VSPHERE_POOL]);

static OPENSTACK: KindSpec = KindSpec::new(Kind::Openstack, &[COMMON_POOL, OPENSTACK_POOL]);

static CLOUDSTACK: KindSpec = KindSpec::new(Kind::Cloudstack, &[COMMON_POOL, CLOUDSTACK_POOL]);

static MAAS: KindSpec = KindSpec::new(Kind::Maas, &[COMMON_POOL, MAAS_POOL]);

static LIBVIRT: KindSpec = KindSpec::new(Kind::Libvirt, &[COMMON_POOL, LIBVIRT_POOL]);

static EDGE_NATIVE: KindSpec = KindSpec::new(Kind::EdgeNative, &[COMMON_POOL, EDGE_NATIVE_POOL]);

static EDGE: KindSpec = KindSpec::new(Kind::Edge, &[COMMON_POOL]);

static CUSTOM_CLOUD: KindSpec = KindSpec::new(Kind::CustomCloud, &[CUSTOM_CLOUD_POOL]);

// Virtual pools are sized by the host cluster; nothing participates.
static VIRTUAL: KindSpec = KindSpec::new(Kind::Virtual, &[]);

static CLUSTER_SPEC: KindSpec = KindSpec::new(Kind::Cluster, &[CLUSTER]);

static PACK_SPEC: KindSpec = KindSpec::new(Kind::Pack, &[PACK]);

static PROJECT_ROLE_MAPPING_SPEC: KindSpec = KindSpec::new(Kind::ProjectRoleMapping, &[PROJECT_ROLE_MAPPING]);

static FILTER_ITEM_SPEC: KindSpec = KindSpec::new(Kind::FilterItem, &[FILTER_ITEM]);

static ALERT_STATUS_SPEC: KindSpec = KindSpec::new(Kind::AlertStatus, &[ALERT_STATUS]);

static ALERT_HTTP_SPEC: KindSpec = KindSpec::new(Kind::AlertHttp, &[ALERT_HTTP]);

// Template entries are keyed by the schema's string hash code, not FNV.
static TEMPLATE_VARIABLE_SPEC: KindSpec =
  KindSpec::new(Kind::TemplateVariable, &[TEMPLATE_VARIABLE]).with_digest(Digest::HashCode);

static TEMPLATE_PROFILE_SPEC: KindSpec =
  KindSpec::new(Kind::TemplateProfile, &[TEMPLATE_PROFILE]).with_digest(Digest::HashCode);

static USER_PROJECT_ROLE_MAPPING_SPEC: KindSpec =
  KindSpec::new(Kind::UserProjectRoleMapping, &[USER_PROJECT_ROLE_MAPPING]);

static USER_RESOURCE_ROLE_MAPPING_SPEC: KindSpec =
  KindSpec::new(Kind::UserResourceRoleMapping, &[USER_RESOURCE_ROLE_MAPPING]);

static USER_WORKSPACE_ROLE_MAPPING_SPEC: KindSpec =
  KindSpec::new(Kind::UserWorkspaceRoleMapping, &[USER_WORKSPACE_ROLE_MAPPING]);

static WORKSPACE_ROLE_MAPPING_SPEC: KindSpec = KindSpec::new(Kind::WorkspaceRoleMapping, &[WORKSPACE_ROLE_MAPPING]);

static CONTAINER_DISK_SPEC: KindSpec = KindSpec::new(Kind::ContainerDisk, &[CONTAINER_DISK]);

static CLOUD_INIT_DISK_SPEC: KindSpec = KindSpec::new(Kind::CloudInitDisk, &[CLOUD_INIT_DISK]);

static DATA_VOLUME_SPEC: KindSpec = KindSpec::new(Kind::DataVolume, &[DATA_VOLUME]);

static APP_PACK_SPEC: KindSpec = KindSpec::new(Kind::AppPack, &[APP_PACK]);

pub(super) fn spec_for(kind: Kind) -> &'static KindSpec {
  match kind {
    Kind::Aws => &AWS,
    Kind::Eks => &EKS,
    Kind::Azure => &AZURE,
    Kind::Aks => &AKS,
    Kind::Gcp => &GCP,
    Kind::Gke => &GKE,
    Kind::Vsphere => &VSPHERE,
    Kind::Openstack => &OPENSTACK,
    Kind::Cloudstack => &CLOUDSTACK,
    Kind::Maas => &MAAS,
    Kind::Libvirt => &LIBVIRT,
    Kind::EdgeNative => &EDGE_NATIVE,
    Kind::Edge => &EDGE,
    Kind::CustomCloud => &CUSTOM_CLOUD,
    Kind::Virtual => &VIRTUAL,
    Kind::Cluster => &CLUSTER_SPEC,
    Kind::Pack => &PACK_SPEC,
    Kind::ProjectRoleMapping => &PROJECT_ROLE_MAPPING_SPEC,
    Kind::FilterItem => &FILTER_ITEM_SPEC,
    Kind::AlertStatus => &ALERT_STATUS_SPEC,
    Kind::AlertHttp => &ALERT_HTTP_SPEC,
    Kind::TemplateVariable => &TEMPLATE_VARIABLE_SPEC,
    Kind::TemplateProfile => &TEMPLATE_PROFILE_SPEC,
    Kind::UserProjectRoleMapping => &USER_PROJECT_ROLE_MAPPING_SPEC,
    Kind::UserResourceRoleMapping => &USER_RESOURCE_ROLE_MAPPING_SPEC,
    Kind::UserWorkspaceRoleMapping => &USER_WORKSPACE_ROLE_MAPPING_SPEC,
    Kind::WorkspaceRoleMapping => &WORKSPACE_ROLE_MAPPING_SPEC,
    Kind::ContainerDisk => &CONTAINER_DISK_SPEC,
    Kind::CloudInitDisk => &CLOUD_INIT_DISK_SPEC,
    Kind::DataVolume => &DATA_VOLUME_SPEC,
    Kind::AppPack => &APP_PACK_SPEC,
  }
}
