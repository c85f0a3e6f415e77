//! Literal fingerprint values for each pool kind.
//!
//! These values identify pools that already exist in deployed state, so a
//! change to any of them is a breaking change.

use fleethash_lib::{ConfigRecord, FieldValue, Fingerprint, Kind, canonical_string, fingerprint, fingerprint_kind};

use super::common::{backend_taints, common_node_pool, cordon_node, production_labels};

fn fp(kind: Kind, record: &ConfigRecord) -> u32 {
  fingerprint_kind(kind, record).unwrap().value()
}

mod baseline {
  use super::*;

  #[test]
  fn empty_records() {
    for kind in [Kind::EdgeNative, Kind::Virtual, Kind::Aws, Kind::Libvirt] {
      assert_eq!(fp(kind, &ConfigRecord::new()), 2166136261);
    }
  }

  #[test]
  fn virtual_pools_ignore_every_field() {
    let a = ConfigRecord::new().with("key1", "value1").with("key2", 123);
    let b = ConfigRecord::new().with("key3", "value3").with("key4", true);
    assert_eq!(fp(Kind::Virtual, &a), 2166136261);
    assert_eq!(fp(Kind::Virtual, &b), 2166136261);
  }

  #[test]
  fn cluster() {
    let record = ConfigRecord::new().with("uid", "abc123");
    assert_eq!(fingerprint("cluster", &record).unwrap(), Fingerprint(1764273400));
  }
}

mod generic_pools {
  use super::*;

  #[test]
  fn azure() {
    let record = common_node_pool()
      .with("instance_type", "Standard_D2_v3")
      .with("is_system_node_pool", true)
      .with("os_type", "Linux");
    assert_eq!(fp(Kind::Azure, &record), 3495386805);
  }

  #[test]
  fn gcp_skips_aws_only_fields() {
    let record = ConfigRecord::new()
      .with("instance_type", "n1-standard-4")
      .with("min", 1)
      .with("max", 3)
      .with("capacity_type", "ON_DEMAND")
      .with("max_price", "0.12")
      .with("azs", FieldValue::set(["us-central1-a", "us-central1-b"]))
      .with(
        "az_subnets",
        FieldValue::map([("us-central1-a", "subnet-1"), ("us-central1-b", "subnet-2")]),
      );
    assert_eq!(
      canonical_string(Kind::Gcp, &record).unwrap(),
      "1-3-n1-standard-4-us-central1-a-us-central1-b-"
    );
    assert_eq!(fp(Kind::Gcp, &record), 2586515099);
  }

  #[test]
  fn aws() {
    let record = ConfigRecord::new()
      .with("min", 1)
      .with("max", 5)
      .with("instance_type", "t2.micro")
      .with("capacity_type", "ON_DEMAND")
      .with("max_price", "0.03")
      .with("azs", FieldValue::set(["us-east-1b", "us-east-1a"]))
      .with(
        "az_subnets",
        FieldValue::map([("us-east-1a", "subnet-1"), ("us-east-1b", "subnet-2")]),
      );
    assert_eq!(
      canonical_string(Kind::Aws, &record).unwrap(),
      "1-5-t2.micro-ON_DEMAND-0.03-us-east-1a-us-east-1b-us-east-1a-subnet-1us-east-1b-subnet-2"
    );
    assert_eq!(fp(Kind::Aws, &record), 4086872153);
  }

  #[test]
  fn openstack() {
    let pool = |name: &str, count: i64, strategy: &str, flavor: &str, azs: &[&str], subnet: &str| {
      ConfigRecord::new()
        .with("name", name)
        .with("count", count)
        .with("control_plane", false)
        .with("control_plane_as_worker", false)
        .with("node_repave_interval", 0)
        .with("update_strategy", strategy)
        .with("instance_type", flavor)
        .with("subnet_id", subnet)
        .with("azs", FieldValue::set(azs.iter().copied()))
    };

    let first = pool("worker-pool-1", 3, "RollingUpdate", "flavor1", &["az2", "az1"], "subnet123");
    assert_eq!(
      canonical_string(Kind::Openstack, &first).unwrap(),
      "false-false-worker-pool-1-3-RollingUpdate-0-flavor1-az1-az2-subnet123-"
    );
    assert_eq!(fp(Kind::Openstack, &first), 715623002);

    let second = pool("worker-pool-2", 2, "Recreate", "flavor2", &["az3"], "subnet456");
    assert_eq!(fp(Kind::Openstack, &second), 3371730139);
  }

  #[test]
  fn maas() {
    let record = ConfigRecord::new()
      .with(
        "instance_type",
        FieldValue::records(vec![ConfigRecord::new().with("min_cpu", 2).with("min_memory_mb", 4096)]),
      )
      .with("azs", FieldValue::set(["az1", "az2"]))
      .with("node_tags", FieldValue::set(["tf", "test"]));
    assert_eq!(
      canonical_string(Kind::Maas, &record).unwrap(),
      r#"2-4096-*Set(map[string]interface {}{"2874390777":"az2", "844818755":"az1"})-*Set(map[string]interface {}{"2925226592":"tf", "3632233996":"test"})-"#
    );
    assert_eq!(fp(Kind::Maas, &record), 876064649);
  }

  #[test]
  fn maas_set_order_is_irrelevant() {
    let pool = |azs: [&str; 2], tags: [&str; 2]| {
      ConfigRecord::new()
        .with("azs", FieldValue::set(azs))
        .with("node_tags", FieldValue::set(tags))
    };
    assert_eq!(
      fp(Kind::Maas, &pool(["az1", "az2"], ["tf", "test"])),
      fp(Kind::Maas, &pool(["az2", "az1"], ["test", "tf"]))
    );
  }

  #[test]
  fn maas_empty_set_is_nil_dump() {
    let record = ConfigRecord::new().with("azs", FieldValue::set(Vec::<String>::new()));
    assert_eq!(
      canonical_string(Kind::Maas, &record).unwrap(),
      "*Set(map[string]interface {}(nil))-"
    );
  }

  #[test]
  fn vsphere() {
    let placement = |n: u32| {
      FieldValue::records(vec![
        ConfigRecord::new()
          .with("cluster", format!("cluster{}", n))
          .with("resource_pool", format!("resource_pool{}", n))
          .with("datastore", format!("datastore{}", n))
          .with("network", format!("network{}", n))
          .with("static_ip_pool_id", format!("static_pool{}", n)),
      ])
    };

    let full = ConfigRecord::new()
      .with(
        "instance_type",
        FieldValue::records(vec![
          ConfigRecord::new()
            .with("cpu", 2)
            .with("disk_size_gb", 50)
            .with("memory_mb", 4096),
        ]),
      )
      .with("placement", placement(1));
    assert_eq!(
      canonical_string(Kind::Vsphere, &full).unwrap(),
      "2-50-4096-cluster1-resource_pool1-datastore1-network1-static_pool1-"
    );
    assert_eq!(fp(Kind::Vsphere, &full), 556255137);

    let placement_only = ConfigRecord::new().with("placement", placement(2));
    assert_eq!(fp(Kind::Vsphere, &placement_only), 3826670463);
  }

  #[test]
  fn libvirt_instance_type() {
    let instance_type = ConfigRecord::new()
      .with("cpu", 4)
      .with("disk_size_gb", 100)
      .with("memory_mb", 8192)
      .with("cpus_sets", "0-3")
      .with("cache_passthrough", true)
      .with(
        "gpu_config",
        FieldValue::records(vec![
          ConfigRecord::new()
            .with("num_gpus", 2)
            .with("device_model", "Tesla T4")
            .with("vendor", "NVIDIA")
            .with(
              "addresses",
              FieldValue::map([("gpu-address-1", "10.0.0.1"), ("gpu-address-2", "10.0.0.2")]),
            ),
        ]),
      )
      .with(
        "attached_disks",
        FieldValue::records(vec![ConfigRecord::new().with("managed", true).with("size_in_gb", 500)]),
      );
    let record = ConfigRecord::new().with("instance_type", FieldValue::records(vec![instance_type]));
    assert_eq!(
      canonical_string(Kind::Libvirt, &record).unwrap(),
      "4-100-8192-0-3-cache_passthrough-true2-Tesla T4-NVIDIA-gpu-address-1-10.0.0.1gpu-address-2-10.0.0.2managed-truesize_in_gb-500"
    );
  }

  #[test]
  fn libvirt_gpu_config() {
    let gpu = |config: ConfigRecord| {
      ConfigRecord::new().with(
        "instance_type",
        FieldValue::records(vec![ConfigRecord::new().with("gpu_config", FieldValue::records(vec![config]))]),
      )
    };

    let with_addresses = gpu(
      ConfigRecord::new()
        .with("num_gpus", 2)
        .with("device_model", "model1")
        .with("vendor", "vendor1")
        .with("addresses", FieldValue::map([("address1", "value1"), ("address2", "value2")])),
    );
    assert_eq!(
      canonical_string(Kind::Libvirt, &with_addresses).unwrap(),
      "2-model1-vendor1-address1-value1address2-value2"
    );

    let without_addresses = gpu(
      ConfigRecord::new()
        .with("num_gpus", 1)
        .with("device_model", "model2")
        .with("vendor", "vendor2"),
    );
    assert_eq!(
      canonical_string(Kind::Libvirt, &without_addresses).unwrap(),
      "1-model2-vendor2-"
    );
  }

  #[test]
  fn edge_native_hosts() {
    let host = |n: u32| {
      ConfigRecord::new()
        .with("host_name", format!("host{}", n))
        .with("host_uid", format!("uid{}", n))
        .with("static_ip", format!("192.168.1.{}", n))
    };
    let pool = |hosts: Vec<ConfigRecord>| ConfigRecord::new().with("edge_host", FieldValue::records(hosts));

    let first = pool(vec![host(1), host(2)]);
    let reordered = pool(vec![host(2), host(1)]);
    let other = pool(vec![host(3), host(4)]);
    assert_eq!(fp(Kind::EdgeNative, &first), fp(Kind::EdgeNative, &first.clone()));
    assert_eq!(fp(Kind::EdgeNative, &first), fp(Kind::EdgeNative, &reordered));
    assert_ne!(fp(Kind::EdgeNative, &first), fp(Kind::EdgeNative, &other));
  }
}

mod managed_pools {
  use super::*;

  fn aks_pool(name: &str, count: i64, instance_type: &str, disk: i64, system: bool, storage: &str) -> ConfigRecord {
    ConfigRecord::new()
      .with("name", name)
      .with("count", count)
      .with("instance_type", instance_type)
      .with("disk_size_gb", disk)
      .with("is_system_node_pool", system)
      .with("storage_account_type", storage)
  }

  fn gke_pool(name: &str, count: i64, instance_type: &str) -> ConfigRecord {
    ConfigRecord::new()
      .with("name", name)
      .with("count", count)
      .with("instance_type", instance_type)
  }

  #[test]
  fn eks() {
    let record = ConfigRecord::new()
      .with("disk_size_gb", 100)
      .with("min", 2)
      .with("max", 5)
      .with("instance_type", "t2.micro")
      .with("capacity_type", "on-demand")
      .with("max_price", "0.05")
      .with(
        "az_subnets",
        FieldValue::map([("subnet1", "subnet-123"), ("subnet2", "subnet-456")]),
      )
      .with(
        "eks_launch_template",
        FieldValue::records(vec![
          ConfigRecord::new()
            .with("ami_id", "ami-123")
            .with("root_volume_type", "gp2"),
        ]),
      );
    assert_eq!(
      canonical_string(Kind::Eks, &record).unwrap(),
      "100-t2.micro-subnet1-subnet-123subnet2-subnet-456on-demand-2-5-0.05-ami-123-gp2-"
    );
    assert_eq!(fp(Kind::Eks, &record), 706444520);
  }

  #[test]
  fn eks_launch_template_lists_security_groups_by_hash_code() {
    let record = ConfigRecord::new().with(
      "eks_launch_template",
      FieldValue::records(vec![
        ConfigRecord::new()
          .with("ami_id", "ami-123")
          .with("root_volume_type", "gp2")
          .with("root_volume_iops", 100)
          .with("root_volume_throughput", 200)
          .with("additional_security_groups", FieldValue::set(["sg-456", "sg-123"])),
      ]),
    );
    assert_eq!(
      canonical_string(Kind::Eks, &record).unwrap(),
      "ami-123-gp2-100-200-sg-456-sg-123-"
    );
    assert_eq!(fp(Kind::Eks, &record), 2747044116);

    let empty = ConfigRecord::new().with("eks_launch_template", FieldValue::records(vec![]));
    assert_eq!(canonical_string(Kind::Eks, &empty).unwrap(), "");
  }

  #[test]
  fn aks() {
    let complete = aks_pool("aks-pool-1", 3, "Standard_D2s_v3", 100, true, "Premium_LRS")
      .with("additional_labels", production_labels())
      .with("update_strategy", "RollingUpdateScaleOut")
      .with("min", 1)
      .with("max", 5)
      .with("node", cordon_node())
      .with("taints", backend_taints());
    assert_eq!(
      canonical_string(Kind::Aks, &complete).unwrap(),
      "aks-pool-1-3-Standard_D2s_v3-100-true-Premium_LRS-env-productionteam-platformRollingUpdateScaleOut-1-5-\
       action-cordoneffect-NoSchedulekey-dedicatedvalue-backend"
    );
    assert_eq!(fp(Kind::Aks, &complete), 489635413);

    let minimal = aks_pool("aks-pool-2", 2, "Standard_B2s", 50, false, "Standard_LRS");
    assert_eq!(fp(Kind::Aks, &minimal), 4269923102);

    let autoscaling = aks_pool("aks-pool-3", 2, "Standard_D2s_v3", 80, false, "Premium_LRS")
      .with("min", 1)
      .with("max", 10);
    assert_eq!(fp(Kind::Aks, &autoscaling), 1815788174);

    let system = aks_pool("system-pool", 1, "Standard_DS2_v2", 30, true, "Standard_LRS")
      .with("additional_labels", FieldValue::map([("pool-type", "system")]));
    assert_eq!(fp(Kind::Aks, &system), 650558149);
  }

  #[test]
  fn aks_every_field_participates() {
    let base = aks_pool("pool-1", 2, "Standard_D2s_v3", 100, false, "Premium_LRS");
    let base_fp = fp(Kind::Aks, &base);
    let variants = [
      base.clone().with("name", "pool-2"),
      base.clone().with("count", 3),
      base.clone().with("instance_type", "Standard_D4s_v3"),
      base.clone().with("disk_size_gb", 200),
      base.clone().with("is_system_node_pool", true),
      base.clone().with("storage_account_type", "Standard_LRS"),
      base.clone().with("additional_labels", FieldValue::map([("env", "prod")])),
      base.clone().with("update_strategy", "RollingUpdateScaleIn"),
      base.clone().with("min", 1),
      base.clone().with("max", 3),
      base.clone().with("node", cordon_node()),
      base.clone().with("taints", backend_taints()),
    ];
    for variant in &variants {
      assert_ne!(fp(Kind::Aks, variant), base_fp, "{:?}", variant);
    }
  }

  #[test]
  fn gke() {
    let complete = gke_pool("gke-pool-1", 3, "n1-standard-4")
      .with("disk_size_gb", 100)
      .with("additional_labels", production_labels())
      .with("update_strategy", "RollingUpdateScaleOut")
      .with("node", cordon_node())
      .with("taints", backend_taints());
    assert_eq!(
      canonical_string(Kind::Gke, &complete).unwrap(),
      "gke-pool-1-3-100-n1-standard-4-env-productionteam-platformRollingUpdateScaleOut-\
       action-cordoneffect-NoSchedulekey-dedicatedvalue-backend"
    );
    assert_eq!(fp(Kind::Gke, &complete), 2359262765);

    assert_eq!(fp(Kind::Gke, &gke_pool("gke-pool-2", 1, "n1-standard-2")), 1076173040);
    assert_eq!(
      fp(Kind::Gke, &gke_pool("gke-pool-3", 2, "n1-standard-4").with("disk_size_gb", 50)),
      239420914
    );
    assert_eq!(
      fp(
        Kind::Gke,
        &gke_pool("gke-pool-4", 2, "n1-standard-2").with("additional_labels", FieldValue::map([("purpose", "testing")]))
      ),
      2140789356
    );
    assert_eq!(
      fp(
        Kind::Gke,
        &gke_pool("gke-pool-5", 3, "n1-standard-4").with("update_strategy", "RollingUpdateScaleIn")
      ),
      3893189545
    );
  }
}

mod custom_cloud {
  use super::*;

  const YAML_TWO: &str = "apiVersion: infrastructure.cluster.x-k8s.io/v1beta1
kind: MachineDeployment
metadata:
  name: md-0
spec:
  replicas: 2";

  const YAML_SPACED: &str = "apiVersion:    infrastructure.cluster.x-k8s.io/v1beta1
kind:   MachineDeployment
metadata:
  name:   md-0
spec:
  replicas:  2";

  const YAML_FOUR: &str = "apiVersion: infrastructure.cluster.x-k8s.io/v1beta1
kind: MachineDeployment
metadata:
    name: md-0
spec:
    replicas: 2";

  fn pool(config: &str) -> ConfigRecord {
    ConfigRecord::new()
      .with("name", "test-pool")
      .with("count", 2)
      .with("node_pool_config", FieldValue::text(config))
  }

  #[test]
  fn opaque_config() {
    let all_fields = ConfigRecord::new()
      .with("name", "custom-cloud")
      .with("count", 3)
      .with("control_plane", true)
      .with("control_plane_as_worker", false)
      .with("taints", FieldValue::set(["key1=value1", "key2=value2"]))
      .with("node_pool_config", FieldValue::text("standard"));
    assert_eq!(canonical_string(Kind::CustomCloud, &all_fields).unwrap(), "true-false-standard-");
    assert_eq!(fp(Kind::CustomCloud, &all_fields), 208692298);

    let minimal = ConfigRecord::new()
      .with("name", "test-pool")
      .with("count", 3)
      .with("node_pool_config", FieldValue::text("standard"));
    assert_eq!(fp(Kind::CustomCloud, &minimal), 1525978111);
  }

  #[test]
  fn empty_config_matches_absent() {
    let bare = ConfigRecord::new().with("name", "test-pool").with("count", 2);
    assert_eq!(fp(Kind::CustomCloud, &pool("")), fp(Kind::CustomCloud, &bare));
    assert_eq!(canonical_string(Kind::CustomCloud, &pool("")).unwrap(), "");
  }

  #[test]
  fn formatting_does_not_change_fingerprint() {
    let base = fp(Kind::CustomCloud, &pool(YAML_TWO));
    assert_eq!(fp(Kind::CustomCloud, &pool(YAML_SPACED)), base);
    assert_eq!(fp(Kind::CustomCloud, &pool(YAML_FOUR)), base);
  }

  #[test]
  fn content_changes_fingerprint() {
    let base = fp(Kind::CustomCloud, &pool(YAML_TWO));
    let changed = YAML_TWO.replace("replicas: 2", "replicas: 3");
    assert_ne!(fp(Kind::CustomCloud, &pool(&changed)), base);
  }

  #[test]
  fn nested_document() {
    let two = "apiVersion: infrastructure.cluster.x-k8s.io/v1beta1
kind: MachineDeployment
metadata:
  name: md-0
  namespace: test
spec:
  replicas: 2
  template:
    spec:
      version: v1.27.0";
    let spaced = "apiVersion: infrastructure.cluster.x-k8s.io/v1beta1
kind:    MachineDeployment
metadata:
  name:   md-0
  namespace:  test
spec:
  replicas:   2
  template:
    spec:
      version:  v1.27.0";
    assert_eq!(fp(Kind::CustomCloud, &pool(two)), fp(Kind::CustomCloud, &pool(spaced)));
  }
}

mod cloudstack {
  use super::*;

  fn template(id: &str, name: &str) -> FieldValue {
    FieldValue::records(vec![ConfigRecord::new().with("id", id).with("name", name)])
  }

  fn networks(names: &[&str]) -> FieldValue {
    FieldValue::records(
      names
        .iter()
        .map(|name| ConfigRecord::new().with("network_name", *name))
        .collect::<Vec<_>>(),
    )
  }

  fn small_pool() -> ConfigRecord {
    ConfigRecord::new()
      .with("name", "pool-1")
      .with("count", 2)
      .with("offering", "small-instance")
      .with("control_plane", false)
      .with("control_plane_as_worker", false)
  }

  #[test]
  fn complete_pool() {
    let record = ConfigRecord::new()
      .with("name", "cloudstack-pool-1")
      .with("count", 3)
      .with("additional_labels", production_labels())
      .with(
        "additional_annotations",
        FieldValue::map([("custom.io/annotation1", "value1"), ("company.com/annotation2", "value2")]),
      )
      .with("offering", "medium-instance")
      .with("template", template("template-123", "ubuntu-20.04"))
      .with("network", networks(&["network-1"]))
      .with("control_plane", false)
      .with("control_plane_as_worker", false)
      .with("update_strategy", "RollingUpdateScaleOut")
      .with("node_repave_interval", 0);
    assert_eq!(
      canonical_string(Kind::Cloudstack, &record).unwrap(),
      "env-productionteam-platformfalse-false-cloudstack-pool-1-3-RollingUpdateScaleOut-0-\
       company.com/annotation2-value2custom.io/annotation1-value1medium-instance-template-123-ubuntu-20.04-network-1"
    );
    assert_eq!(fp(Kind::Cloudstack, &record), 1389898256);
  }

  #[test]
  fn minimal_pool() {
    let record = ConfigRecord::new()
      .with("name", "cloudstack-pool-2")
      .with("count", 2)
      .with("offering", "small-instance")
      .with("control_plane", true)
      .with("control_plane_as_worker", false);
    assert_eq!(fp(Kind::Cloudstack, &record), 3191469283);
  }

  #[test]
  fn networks_are_sorted_and_dash_joined() {
    let record = small_pool().with("network", networks(&["network-b", "network-a"]));
    assert_eq!(
      canonical_string(Kind::Cloudstack, &record).unwrap(),
      "false-false-pool-1-2-small-instance-network-a-network-b"
    );
    assert_eq!(fp(Kind::Cloudstack, &record), 1482776741);
  }

  #[test]
  fn only_first_template_participates() {
    let one = small_pool().with("template", template("template-123", "ubuntu-20.04"));
    let two = small_pool().with(
      "template",
      FieldValue::records(vec![
        ConfigRecord::new().with("id", "template-123").with("name", "ubuntu-20.04"),
        ConfigRecord::new().with("id", "template-999").with("name", "other"),
      ]),
    );
    assert_eq!(fp(Kind::Cloudstack, &one), fp(Kind::Cloudstack, &two));
  }

  #[test]
  fn each_field_changes_fingerprint() {
    let base = small_pool()
      .with("template", template("template-123", "ubuntu-20.04"))
      .with("network", networks(&["network-1"]))
      .with("additional_annotations", FieldValue::map([("annotation1", "value1")]));
    let base_fp = fp(Kind::Cloudstack, &base);
    let variants = [
      base.clone().with("offering", "medium-instance"),
      base.clone().with("template", template("template-456", "ubuntu-22.04")),
      base.clone().with("network", networks(&["network-2"])),
      base.clone().with("additional_annotations", FieldValue::map([("annotation1", "value2")])),
      base.clone().with(
        "override_kubeadm_configuration",
        FieldValue::text("kubeletExtraArgs:\n  node-labels: custom=value"),
      ),
    ];
    for variant in &variants {
      assert_ne!(fp(Kind::Cloudstack, variant), base_fp, "{:?}", variant);
    }
  }

  #[test]
  fn override_scaling_participates() {
    let scaling = |surge: &str, unavailable: &str| {
      small_pool().with("update_strategy", "OverrideScaling").with(
        "override_scaling",
        FieldValue::records(vec![
          ConfigRecord::new()
            .with("max_surge", surge)
            .with("max_unavailable", unavailable),
        ]),
      )
    };
    let base = fp(
      Kind::Cloudstack,
      &small_pool().with("update_strategy", "RollingUpdateScaleOut"),
    );
    let with = fp(Kind::Cloudstack, &scaling("1", "0"));
    let surge = fp(Kind::Cloudstack, &scaling("2", "0"));
    let unavailable = fp(Kind::Cloudstack, &scaling("1", "1"));
    assert_ne!(base, with);
    assert_ne!(with, surge);
    assert_ne!(with, unavailable);
    assert_ne!(surge, unavailable);
    assert_eq!(
      canonical_string(Kind::Cloudstack, &scaling("1", "0")).unwrap(),
      "false-false-pool-1-2-OverrideScaling-override_scaling:max_surge:1-max_unavailable:0-small-instance-"
    );
  }
}

mod added_fields {
  use super::*;

  const OVERRIDE: &str = "kubeletExtraArgs:\n  max-pods: \"110\"";

  fn bases() -> Vec<(Kind, ConfigRecord)> {
    vec![
      (
        Kind::Azure,
        ConfigRecord::new()
          .with("instance_type", "Standard_D2_v3")
          .with("os_type", "Linux"),
      ),
      (Kind::Gcp, ConfigRecord::new().with("instance_type", "n1-standard-4")),
      (
        Kind::Aws,
        ConfigRecord::new()
          .with("instance_type", "t2.micro")
          .with("capacity_type", "ON_DEMAND")
          .with("max_price", "0.03")
          .with("azs", FieldValue::set(["us-east-1a"]))
          .with("az_subnets", FieldValue::map([("us-east-1a", "subnet-1")])),
      ),
      (
        Kind::Eks,
        ConfigRecord::new()
          .with("name", "eks-pool")
          .with("count", 2)
          .with("instance_type", "t3.large"),
      ),
      (
        Kind::Aks,
        ConfigRecord::new()
          .with("name", "aks-pool")
          .with("count", 2)
          .with("instance_type", "Standard_D2s_v3"),
      ),
      (Kind::Gke, ConfigRecord::new().with("name", "gke-pool").with("count", 2)),
      (
        Kind::Vsphere,
        ConfigRecord::new().with("name", "vsphere-pool").with("count", 1),
      ),
      (
        Kind::Openstack,
        ConfigRecord::new()
          .with("name", "worker-pool")
          .with("count", 3)
          .with("instance_type", "flavor1"),
      ),
      (
        Kind::Cloudstack,
        ConfigRecord::new()
          .with("name", "test-pool")
          .with("count", 3)
          .with("offering", "medium-instance"),
      ),
      (Kind::Maas, ConfigRecord::new().with("name", "maas-pool")),
      (Kind::Libvirt, ConfigRecord::new().with("name", "libvirt-pool")),
      (Kind::EdgeNative, ConfigRecord::new().with("name", "edge-pool")),
      (Kind::Edge, ConfigRecord::new().with("name", "edge-pool")),
    ]
  }

  #[test]
  fn annotations_change_every_pool_kind() {
    for (kind, base) in bases() {
      let annotated = base
        .clone()
        .with("additional_annotations", FieldValue::map([("custom.io/annotation", "value")]));
      assert_ne!(fp(kind, &base), fp(kind, &annotated), "{}", kind);

      let other = base
        .clone()
        .with("additional_annotations", FieldValue::map([("custom.io/annotation", "other")]));
      assert_ne!(fp(kind, &annotated), fp(kind, &other), "{}", kind);
    }
  }

  #[test]
  fn kubeadm_override_changes_every_pool_kind() {
    for (kind, base) in bases() {
      let overridden = base
        .clone()
        .with("override_kubeadm_configuration", FieldValue::text(OVERRIDE));
      assert_ne!(fp(kind, &base), fp(kind, &overridden), "{}", kind);

      let raised = base.clone().with(
        "override_kubeadm_configuration",
        FieldValue::text(OVERRIDE.replace("110", "200")),
      );
      assert_ne!(fp(kind, &overridden), fp(kind, &raised), "{}", kind);
    }
  }

  #[test]
  fn empty_override_matches_absent_for_every_pool_kind() {
    for (kind, base) in bases() {
      for blank in ["", "   ", "\n\n", "# nothing here"] {
        let empty = base
          .clone()
          .with("override_kubeadm_configuration", FieldValue::text(blank));
        assert_eq!(fp(kind, &base), fp(kind, &empty), "{} {:?}", kind, blank);
      }
    }
  }

  #[test]
  fn empty_override_adds_no_token() {
    let pool = ConfigRecord::new()
      .with("name", "test-pool")
      .with("count", 3)
      .with("control_plane", false)
      .with("control_plane_as_worker", false)
      .with("override_kubeadm_configuration", FieldValue::text(""));
    assert_eq!(canonical_string(Kind::Edge, &pool).unwrap(), "false-false-test-pool-3-");
    assert_eq!(fp(Kind::Edge, &pool), 3269618493);
  }

  #[test]
  fn annotations_and_override_differ() {
    let base = ConfigRecord::new()
      .with("name", "worker-pool")
      .with("count", 3)
      .with("instance_type", "flavor1");
    let annotations = base
      .clone()
      .with("additional_annotations", FieldValue::map([("custom.io/annotation", "value")]));
    let overridden = base
      .clone()
      .with("override_kubeadm_configuration", FieldValue::text(OVERRIDE));
    assert_ne!(fp(Kind::Openstack, &annotations), fp(Kind::Openstack, &overridden));
  }
}

mod ancillary_kinds {
  use super::*;

  #[test]
  fn pack_requires_every_field() {
    let pack = ConfigRecord::new()
      .with("name", "cni-calico")
      .with("tag", "3.26.1")
      .with("values", FieldValue::text("manifests:\n    calico:\n        mtu:   1450"));
    assert_eq!(
      canonical_string(Kind::Pack, &pack).unwrap(),
      "cni-calico-3.26.1-manifests:\n  calico:\n    mtu: 1450-"
    );

    let mut missing = pack.clone();
    missing.remove("tag");
    assert_eq!(
      fingerprint("pack", &missing).unwrap_err().to_string(),
      "missing required field tag"
    );
  }

  #[test]
  fn filter_item_is_labelled() {
    let item = ConfigRecord::new()
      .with("key", "env")
      .with("operator", "eq")
      .with("negation", false)
      .with("values", FieldValue::set(["prod", "dev"]));
    assert_eq!(
      canonical_string(Kind::FilterItem, &item).unwrap(),
      "key:env-operator:eq-negation:false-values:dev,prod-"
    );
  }

  #[test]
  fn alert_http_headers() {
    let http = ConfigRecord::new()
      .with("method", "POST")
      .with("url", "https://hooks.example.com")
      .with("headers", FieldValue::map([("tag", "alert"), ("source", "fleet")]));
    assert_eq!(
      canonical_string(Kind::AlertHttp, &http).unwrap(),
      "POST-https://hooks.example.com-source:fleet-tag:alert-"
    );
  }

  #[test]
  fn project_role_mapping() {
    let mapping = ConfigRecord::new()
      .with("id", "project-1")
      .with("roles", FieldValue::set(["viewer", "admin"]));
    assert_eq!(
      canonical_string(Kind::ProjectRoleMapping, &mapping).unwrap(),
      "project-1-admin-viewer-"
    );
  }

  #[test]
  fn template_variable() {
    let variable = ConfigRecord::new()
      .with("name", "region")
      .with("value", "us-east-1")
      .with("assign_strategy", "all");
    assert_eq!(
      canonical_string(Kind::TemplateVariable, &variable).unwrap(),
      "region-us-east-1-all-"
    );
    assert_eq!(fingerprint("template-variable", &variable).unwrap(), Fingerprint(1756730297));
    assert_eq!(
      fingerprint("template-variable", &variable).unwrap(),
      Fingerprint::hash_code("region-us-east-1-all-")
    );
  }

  #[test]
  fn template_profile() {
    let profile = ConfigRecord::new().with("uid", "profile-1");
    assert_eq!(fingerprint("template-profile", &profile).unwrap(), Fingerprint(3874324718));
    assert_eq!(fp(Kind::TemplateProfile, &ConfigRecord::new()), 0);
  }

  #[test]
  fn vm_volumes() {
    let disk = ConfigRecord::new().with("image_url", "http://example.com/image");
    assert_eq!(fp(Kind::ContainerDisk, &disk), 730291217);

    let init = ConfigRecord::new().with("user_data", "user-data-content");
    assert_eq!(fp(Kind::CloudInitDisk, &init), 4102765592);

    let volume = ConfigRecord::new().with("storage", "100GiB");
    assert_eq!(fp(Kind::DataVolume, &volume), 1565917401);

    assert_eq!(
      fingerprint("container-disk", &ConfigRecord::new()).unwrap_err().to_string(),
      "missing required field image_url"
    );
  }
}

mod role_mappings {
  use super::*;

  fn workspace(id: &str, field: &str, roles: &[&str]) -> ConfigRecord {
    ConfigRecord::new()
      .with("id", id)
      .with(field, FieldValue::set(roles.iter().copied()))
  }

  #[test]
  fn user_project_roles() {
    let mapping = ConfigRecord::new()
      .with("project_id", "project-1")
      .with("role_ids", FieldValue::set(["viewer", "admin"]));
    assert_eq!(
      canonical_string(Kind::UserProjectRoleMapping, &mapping).unwrap(),
      "project-1-admin-viewer-"
    );
    assert_eq!(fp(Kind::UserProjectRoleMapping, &mapping), 2406905562);
  }

  #[test]
  fn user_resource_roles() {
    let mapping = ConfigRecord::new()
      .with("project_ids", FieldValue::set(["project2", "project1"]))
      .with("filter_ids", FieldValue::set(["filter1"]))
      .with("role_ids", FieldValue::set(["role3", "role1", "role2"]));
    assert_eq!(
      canonical_string(Kind::UserResourceRoleMapping, &mapping).unwrap(),
      "project1-project2-filter1-role1-role2-role3-"
    );
    assert_eq!(fp(Kind::UserResourceRoleMapping, &mapping), 2320180995);

    let mut missing = mapping.clone();
    missing.remove("filter_ids");
    assert!(fingerprint("user-resource-role-mapping", &missing).is_err());
  }

  #[test]
  fn user_workspace_roles() {
    let mapping = ConfigRecord::new().with("project_id", "project-1").with(
      "workspace",
      FieldValue::records(vec![
        workspace("ws-1", "role_ids", &["viewer", "admin"]),
        workspace("ws-2", "role_ids", &["editor"]),
      ]),
    );
    assert_eq!(
      canonical_string(Kind::UserWorkspaceRoleMapping, &mapping).unwrap(),
      "1979935535-909201281-1310075683-"
    );
    assert_eq!(fp(Kind::UserWorkspaceRoleMapping, &mapping), 601530666);
  }

  #[test]
  fn workspace_order_is_irrelevant() {
    let mapping = |spaces: Vec<ConfigRecord>| {
      ConfigRecord::new()
        .with("id", "project-1")
        .with("workspace", FieldValue::records(spaces))
    };
    let a = workspace("ws-1", "roles", &["admin"]);
    let b = workspace("ws-2", "roles", &["viewer", "admin"]);
    let forward = mapping(vec![a.clone(), b.clone()]);
    let backward = mapping(vec![b, a]);
    assert_eq!(
      canonical_string(Kind::WorkspaceRoleMapping, &forward).unwrap(),
      "1979935535-1314003222-3915750478-"
    );
    assert_eq!(fp(Kind::WorkspaceRoleMapping, &forward), 751905045);
    assert_eq!(
      fp(Kind::WorkspaceRoleMapping, &forward),
      fp(Kind::WorkspaceRoleMapping, &backward)
    );
  }

  #[test]
  fn nested_workspace_errors_carry_path() {
    let mapping = ConfigRecord::new().with(
      "workspace",
      FieldValue::records(vec![ConfigRecord::new().with("roles", FieldValue::set(["admin"]))]),
    );
    assert_eq!(
      fingerprint("workspace-role-mapping", &mapping).unwrap_err().to_string(),
      "missing required field workspace[0].id"
    );
  }
}

mod app_pack {
  use super::*;

  #[test]
  fn complete_pack() {
    let pack = ConfigRecord::new()
      .with("name", "nginx")
      .with("tag", "1.25.0")
      .with("registry_uid", "reg-1")
      .with("registry_name", "public")
      .with("properties", FieldValue::map([("replicas", "2")]))
      .with("values", "\n  key: value  \n")
      .with(
        "manifest",
        FieldValue::records(vec![
          ConfigRecord::new()
            .with("name", "extra")
            .with("content", " kind: ConfigMap\n"),
        ]),
      );
    assert_eq!(
      canonical_string(Kind::AppPack, &pack).unwrap(),
      "name-nginx-type-spectro-tag-1.25.0-registry_uid-reg-1-install_order-0-\
       properties-replicas-2-values-key: value-manifest-0-name-extra-content-kind: ConfigMap-"
    );
    assert_eq!(fp(Kind::AppPack, &pack), 2025672934);
  }

  #[test]
  fn defaults_fill_unset_fields() {
    let pack = ConfigRecord::new()
      .with("name", "nginx")
      .with("type", "")
      .with("tag", "")
      .with("values", "   ");
    assert_eq!(
      canonical_string(Kind::AppPack, &pack).unwrap(),
      "name-nginx-type-spectro-install_order-0-"
    );
    assert_eq!(fp(Kind::AppPack, &pack), 1454333272);
  }

  #[test]
  fn registry_name_stands_in_for_missing_uid() {
    let pack = ConfigRecord::new()
      .with("name", "nginx")
      .with("registry_name", "public")
      .with("install_order", 2);
    assert_eq!(
      canonical_string(Kind::AppPack, &pack).unwrap(),
      "name-nginx-type-spectro-registry_name-public-install_order-2-"
    );
  }

  #[test]
  fn manifest_order_matters() {
    let manifest = |names: [&str; 2]| {
      ConfigRecord::new().with("name", "nginx").with(
        "manifest",
        FieldValue::records(
          names
            .iter()
            .map(|name| ConfigRecord::new().with("name", *name))
            .collect::<Vec<_>>(),
        ),
      )
    };
    assert_ne!(
      fp(Kind::AppPack, &manifest(["a", "b"])),
      fp(Kind::AppPack, &manifest(["b", "a"]))
    );
    assert_eq!(
      canonical_string(Kind::AppPack, &manifest(["a", "b"])).unwrap(),
      "name-nginx-type-spectro-install_order-0-manifest-0-name-a-content--manifest-1-name-b-content--"
    );
  }

  #[test]
  fn uid_never_participates() {
    let pack = ConfigRecord::new().with("name", "nginx");
    assert_eq!(
      fp(Kind::AppPack, &pack),
      fp(Kind::AppPack, &pack.clone().with("uid", "server-assigned"))
    );
  }
}
