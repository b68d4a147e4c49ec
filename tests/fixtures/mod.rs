// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-infrastructure-kubermatic
//!
//! Deterministic node deployments and attribute trees shared by the
//! integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use cim_infrastructure_kubermatic::domain::*;
use cim_infrastructure_kubermatic::{AttributeMap, AttributeValue};

pub const AVAILABILITY_ZONE: &str = "eu-west-1a";
pub const SUBNET_ID: &str = "subnet-1";
pub const INSTANCE_TYPE: &str = "t3.medium";
pub const KUBELET_VERSION: &str = "v1.29.2";

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build an attribute map from literal entries
pub fn attrs(entries: Vec<(&str, AttributeValue)>) -> AttributeMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Wrap entries into a single-element block
pub fn block(entries: Vec<(&str, AttributeValue)>) -> AttributeValue {
    AttributeValue::block(attrs(entries))
}

/// The smallest useful deployment: Ubuntu on AWS without an explicit AMI
pub fn minimal_deployment_fixture() -> NodeDeploymentSpec {
    NodeDeploymentSpec::new(
        3,
        NodeSpec::builder()
            .operating_system(OperatingSystemSpec::ubuntu(UbuntuSpec {
                dist_upgrade_on_boot: true,
            }))
            .cloud(NodeCloudSpec::aws(AWSNodeSpec {
                availability_zone: AVAILABILITY_ZONE.to_string(),
                subnet_id: SUBNET_ID.to_string(),
                assign_public_ip: true,
                ami: String::new(),
                instance_type: Some(INSTANCE_TYPE.to_string()),
                ..Default::default()
            }))
            .build(),
    )
}

/// A deployment with every field set to a non-zero value
pub fn full_deployment_fixture() -> NodeDeploymentSpec {
    let mut tags = HashMap::new();
    tags.insert("team".to_string(), "platform".to_string());
    tags.insert("cost-center".to_string(), "1234".to_string());

    NodeDeploymentSpec::new(
        5,
        NodeSpec::builder()
            .label("tier", "worker")
            .label("pool", "general")
            .operating_system(OperatingSystemSpec::container_linux(ContainerLinuxSpec {
                disable_auto_update: true,
            }))
            .kubelet(KUBELET_VERSION)
            .taint(TaintSpec::new("dedicated", "gpu", "NoSchedule"))
            .taint(TaintSpec::new("spot", "true", "PreferNoSchedule"))
            .cloud(NodeCloudSpec::aws(AWSNodeSpec {
                instance_type: Some("m5.large".to_string()),
                volume_size: Some(50),
                volume_type: Some("gp3".to_string()),
                ami: "ami-0123456789abcdef0".to_string(),
                availability_zone: AVAILABILITY_ZONE.to_string(),
                subnet_id: SUBNET_ID.to_string(),
                assign_public_ip: true,
                tags,
            }))
            .build(),
    )
}
