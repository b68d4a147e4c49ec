// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Flatten/Expand
//!
//! Flattening followed by expanding must reproduce any node deployment, keep
//! taint order, and emit trees that survive the engine's JSON transport.

use cim_infrastructure_kubermatic::domain::*;
use cim_infrastructure_kubermatic::marshal::{
    expand_node_deployment_spec, expand_node_spec, flatten_node_deployment_spec,
    flatten_node_spec, keys,
};
use cim_infrastructure_kubermatic::AttributeValue;
use proptest::prelude::*;
use std::collections::HashMap;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

/// Strings that may be empty, exercising zero-value suppression
fn maybe_empty() -> impl Strategy<Value = String> {
    "[a-z0-9]{0,8}"
}

fn string_map() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(name(), maybe_empty(), 0..4)
}

fn effect() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("NoSchedule".to_string()),
        Just("PreferNoSchedule".to_string()),
        Just("NoExecute".to_string()),
        Just(String::new()),
    ]
}

fn taint() -> impl Strategy<Value = TaintSpec> {
    (maybe_empty(), maybe_empty(), effect())
        .prop_map(|(key, value, effect)| TaintSpec { key, value, effect })
}

fn operating_system() -> impl Strategy<Value = OperatingSystemSpec> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(ubuntu, centos, container_linux)| OperatingSystemSpec {
            ubuntu: ubuntu.map(|dist_upgrade_on_boot| UbuntuSpec { dist_upgrade_on_boot }),
            centos: centos.map(|dist_upgrade_on_boot| CentOSSpec { dist_upgrade_on_boot }),
            container_linux: container_linux
                .map(|disable_auto_update| ContainerLinuxSpec { disable_auto_update }),
        })
}

fn aws_node_spec() -> impl Strategy<Value = AWSNodeSpec> {
    (
        prop::option::of(name()),
        prop::option::of(0i64..2048),
        prop::option::of(maybe_empty()),
        maybe_empty(),
        maybe_empty(),
        maybe_empty(),
        any::<bool>(),
        string_map(),
    )
        .prop_map(
            |(instance_type, volume_size, volume_type, ami, availability_zone, subnet_id, assign_public_ip, tags)| {
                AWSNodeSpec {
                    instance_type,
                    volume_size,
                    volume_type,
                    ami,
                    availability_zone,
                    subnet_id,
                    assign_public_ip,
                    tags,
                }
            },
        )
}

fn node_spec() -> impl Strategy<Value = NodeSpec> {
    (
        string_map(),
        prop::option::of(operating_system()),
        prop::option::of(maybe_empty().prop_map(NodeVersionInfo::new)),
        prop::collection::vec(taint(), 0..6),
        prop::option::of(prop::option::of(aws_node_spec()).prop_map(|aws| NodeCloudSpec { aws })),
    )
        .prop_map(|(labels, operating_system, versions, taints, cloud)| NodeSpec {
            labels,
            operating_system,
            versions,
            taints,
            cloud,
        })
}

fn node_deployment() -> impl Strategy<Value = NodeDeploymentSpec> {
    (prop::option::of(any::<i32>()), prop::option::of(node_spec()))
        .prop_map(|(replicas, template)| NodeDeploymentSpec { replicas, template })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: expand inverts flatten
    #[test]
    fn prop_round_trip(spec in node_deployment()) {
        let block = flatten_node_deployment_spec(Some(&spec));
        let back = expand_node_deployment_spec(&block).unwrap();

        prop_assert_eq!(back, Some(spec));
    }

    /// Property: a present value always flattens to exactly one element
    #[test]
    fn prop_present_value_is_single_block(spec in node_deployment()) {
        let block = flatten_node_deployment_spec(Some(&spec));

        prop_assert_eq!(block.len(), 1);
        prop_assert!(block[0].as_map().is_some());
    }

    /// Property: taint order survives the round trip
    #[test]
    fn prop_taint_order_preserved(taints in prop::collection::vec(taint(), 1..10)) {
        let spec = NodeSpec { taints: taints.clone(), ..Default::default() };

        let block = flatten_node_spec(Some(&spec));
        let back = expand_node_spec(&block).unwrap().unwrap();

        prop_assert_eq!(back.taints, taints);
    }

    /// Property: flattened taints never carry empty strings
    #[test]
    fn prop_taint_empty_strings_suppressed(taints in prop::collection::vec(taint(), 1..10)) {
        let spec = NodeSpec { taints, ..Default::default() };

        let block = flatten_node_spec(Some(&spec));
        let body = block[0].as_map().unwrap();
        let flattened = body[keys::TAINTS].as_list().unwrap();

        for item in flattened {
            for value in item.as_map().unwrap().values() {
                prop_assert_ne!(value.as_str(), Some(""));
            }
        }
    }

    /// Property: the flattened tree survives JSON transport unchanged
    #[test]
    fn prop_json_transport(spec in node_deployment()) {
        let tree = AttributeValue::List(flatten_node_deployment_spec(Some(&spec)));

        let text = serde_json::to_string(&tree).unwrap();
        let parsed: AttributeValue = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(&parsed, &tree);

        let converted = AttributeValue::from_json(tree.to_json()).unwrap();
        prop_assert_eq!(converted, tree);
    }

    /// Property: the API JSON representation round-trips
    #[test]
    fn prop_api_json_round_trip(spec in node_deployment()) {
        let value = serde_json::to_value(&spec).unwrap();
        let back: NodeDeploymentSpec = serde_json::from_value(value).unwrap();

        prop_assert_eq!(back, spec);
    }

    /// Property: flatten is deterministic
    #[test]
    fn prop_flatten_is_deterministic(spec in node_deployment()) {
        prop_assert_eq!(
            flatten_node_deployment_spec(Some(&spec)),
            flatten_node_deployment_spec(Some(&spec.clone()))
        );
    }
}
