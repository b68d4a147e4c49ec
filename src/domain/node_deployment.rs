// Copyright (c) 2025 - Cowboy AI, Inc.
//! Node Deployment API Models
//!
//! A node deployment describes a scalable group of worker nodes that share a
//! single node template. Field names on the wire follow the Kubermatic API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{NodeCloudSpec, OperatingSystemSpec};

/// Node deployment specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDeploymentSpec {
    /// Desired number of nodes; `None` leaves the choice to the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Template every node of the deployment is created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<NodeSpec>,
}

impl NodeDeploymentSpec {
    pub fn new(replicas: i32, template: NodeSpec) -> Self {
        Self {
            replicas: Some(replicas),
            template: Some(template),
        }
    }
}

/// Node template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    /// Kubernetes labels applied to every node
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<OperatingSystemSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<NodeVersionInfo>,

    /// Taints in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<TaintSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<NodeCloudSpec>,
}

impl NodeSpec {
    /// Builder pattern for fluent construction
    pub fn builder() -> NodeSpecBuilder {
        NodeSpecBuilder::default()
    }
}

/// Builder for [`NodeSpec`]
#[derive(Debug, Default)]
pub struct NodeSpecBuilder {
    spec: NodeSpec,
}

impl NodeSpecBuilder {
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec.labels.insert(key.into(), value.into());
        self
    }

    pub fn operating_system(mut self, os: OperatingSystemSpec) -> Self {
        self.spec.operating_system = Some(os);
        self
    }

    pub fn kubelet(mut self, version: impl Into<String>) -> Self {
        self.spec.versions = Some(NodeVersionInfo::new(version));
        self
    }

    pub fn taint(mut self, taint: TaintSpec) -> Self {
        self.spec.taints.push(taint);
        self
    }

    pub fn cloud(mut self, cloud: NodeCloudSpec) -> Self {
        self.spec.cloud = Some(cloud);
        self
    }

    pub fn build(self) -> NodeSpec {
        self.spec
    }
}

/// Component versions running on a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVersionInfo {
    #[serde(default)]
    pub kubelet: String,
}

impl NodeVersionInfo {
    pub fn new(kubelet: impl Into<String>) -> Self {
        Self {
            kubelet: kubelet.into(),
        }
    }
}

/// Kubernetes node taint
///
/// `effect` is kept as the raw API string (`NoSchedule`, `PreferNoSchedule`,
/// `NoExecute`); this layer does not validate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaintSpec {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub effect: String,
}

impl TaintSpec {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            effect: effect.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AWSNodeSpec, UbuntuSpec};
    use serde_json::json;

    #[test]
    fn test_builder() {
        let spec = NodeSpec::builder()
            .label("tier", "worker")
            .kubelet("v1.29.2")
            .taint(TaintSpec::new("dedicated", "gpu", "NoSchedule"))
            .build();

        assert_eq!(spec.labels.get("tier").map(String::as_str), Some("worker"));
        assert_eq!(spec.versions, Some(NodeVersionInfo::new("v1.29.2")));
        assert_eq!(spec.taints.len(), 1);
        assert!(spec.cloud.is_none());
    }

    #[test]
    fn test_api_json_shape() {
        let spec = NodeDeploymentSpec::new(
            2,
            NodeSpec::builder()
                .operating_system(OperatingSystemSpec::ubuntu(UbuntuSpec {
                    dist_upgrade_on_boot: true,
                }))
                .cloud(NodeCloudSpec::aws(AWSNodeSpec {
                    subnet_id: "subnet-1".to_string(),
                    volume_size: Some(25),
                    ..Default::default()
                }))
                .build(),
        );

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["replicas"], json!(2));
        assert_eq!(
            value["template"]["operatingSystem"]["ubuntu"]["distUpgradeOnBoot"],
            json!(true)
        );
        assert_eq!(value["template"]["cloud"]["aws"]["subnetID"], json!("subnet-1"));
        assert_eq!(value["template"]["cloud"]["aws"]["diskSize"], json!(25));
        assert!(value["template"].get("labels").is_none());

        let back: NodeDeploymentSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_api_json_defaults() {
        let spec: NodeDeploymentSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, NodeDeploymentSpec::default());
    }
}
