// Copyright (c) 2025 - Cowboy AI, Inc.
//! Operating System Selection
//!
//! The API models the distribution choice as independent optional fields.
//! Nothing here stops a caller from filling more than one; the configuration
//! schema is what enforces a single distribution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system of the nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystemSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubuntu: Option<UbuntuSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centos: Option<CentOSSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_linux: Option<ContainerLinuxSpec>,
}

/// Distribution families known to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    Ubuntu,
    CentOS,
    ContainerLinux,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distribution::Ubuntu => "ubuntu",
            Distribution::CentOS => "centos",
            Distribution::ContainerLinux => "container_linux",
        };
        write!(f, "{}", name)
    }
}

impl OperatingSystemSpec {
    pub fn ubuntu(spec: UbuntuSpec) -> Self {
        Self {
            ubuntu: Some(spec),
            ..Default::default()
        }
    }

    pub fn centos(spec: CentOSSpec) -> Self {
        Self {
            centos: Some(spec),
            ..Default::default()
        }
    }

    pub fn container_linux(spec: ContainerLinuxSpec) -> Self {
        Self {
            container_linux: Some(spec),
            ..Default::default()
        }
    }

    /// Distributions that are configured, in schema order
    ///
    /// More than one entry means the one-of constraint was bypassed upstream.
    pub fn distributions(&self) -> Vec<Distribution> {
        let mut found = Vec::new();
        if self.ubuntu.is_some() {
            found.push(Distribution::Ubuntu);
        }
        if self.centos.is_some() {
            found.push(Distribution::CentOS);
        }
        if self.container_linux.is_some() {
            found.push(Distribution::ContainerLinux);
        }
        found
    }
}

/// Ubuntu settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UbuntuSpec {
    #[serde(default)]
    pub dist_upgrade_on_boot: bool,
}

/// CentOS settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentOSSpec {
    #[serde(default)]
    pub dist_upgrade_on_boot: bool,
}

/// Container Linux settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerLinuxSpec {
    #[serde(default)]
    pub disable_auto_update: bool,
}
