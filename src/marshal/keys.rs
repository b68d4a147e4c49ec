// Copyright (c) 2025 - Cowboy AI, Inc.
//! Attribute keys of the node deployment schema
//!
//! Stored configurations reference these names, so they must never change.

// node deployment
pub const REPLICAS: &str = "replicas";
pub const TEMPLATE: &str = "template";

// node template
pub const LABELS: &str = "labels";
pub const OPERATING_SYSTEM: &str = "operating_system";
pub const VERSIONS: &str = "versions";
pub const TAINTS: &str = "taints";
pub const CLOUD: &str = "cloud";

// operating system
pub const UBUNTU: &str = "ubuntu";
pub const CENTOS: &str = "centos";
pub const CONTAINER_LINUX: &str = "container_linux";
pub const DIST_UPGRADE_ON_BOOT: &str = "dist_upgrade_on_boot";
pub const DISABLE_AUTO_UPDATE: &str = "disable_auto_update";

// versions
pub const KUBELET: &str = "kubelet";

// taint
pub const KEY: &str = "key";
pub const VALUE: &str = "value";
pub const EFFECT: &str = "effect";

// cloud
pub const AWS: &str = "aws";
pub const INSTANCE_TYPE: &str = "instance_type";
pub const DISK_SIZE: &str = "disk_size";
pub const VOLUME_TYPE: &str = "volume_type";
pub const AMI: &str = "ami";
pub const AVAILABILITY_ZONE: &str = "availability_zone";
pub const SUBNET_ID: &str = "subnet_id";
pub const ASSIGN_PUBLIC_IP: &str = "assign_public_ip";
pub const TAGS: &str = "tags";
