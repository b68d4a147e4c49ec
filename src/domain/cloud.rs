// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Provider Node Settings
//!
//! Each provider is an optional sibling field of [`NodeCloudSpec`]. Only AWS
//! is modelled; further providers slot in as additional optional fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Provider specific node settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCloudSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AWSNodeSpec>,
}

/// Cloud providers known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudProvider {
    Aws,
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudProvider::Aws => write!(f, "aws"),
        }
    }
}

impl NodeCloudSpec {
    pub fn aws(spec: AWSNodeSpec) -> Self {
        Self { aws: Some(spec) }
    }

    /// Providers that are configured
    pub fn providers(&self) -> Vec<CloudProvider> {
        let mut found = Vec::new();
        if self.aws.is_some() {
            found.push(CloudProvider::Aws);
        }
        found
    }
}

/// AWS node settings
///
/// `instance_type`, `volume_size` and `volume_type` are optional on the API:
/// an unset value lets the API pick its default, which differs from an
/// explicitly empty or zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AWSNodeSpec {
    /// EC2 instance type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,

    /// Root volume size in GB
    #[serde(default, rename = "diskSize", skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i64>,

    /// EBS volume type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,

    /// AMI to boot; empty selects the provider default image
    #[serde(default)]
    pub ami: String,

    #[serde(default)]
    pub availability_zone: String,

    #[serde(default, rename = "subnetID")]
    pub subnet_id: String,

    #[serde(default, rename = "assignPublicIP")]
    pub assign_public_ip: bool,

    /// Additional EC2 tags
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}
