// Copyright (c) 2025 - Cowboy AI, Inc.
//! Kubermatic API Models
//!
//! Typed node deployment structures as exchanged with the Kubermatic API.
//!
//! # Hierarchy
//!
//! ```text
//! NodeDeploymentSpec
//! └── template: NodeSpec
//!     ├── labels
//!     ├── operating_system: OperatingSystemSpec
//!     │   ├── ubuntu: UbuntuSpec
//!     │   ├── centos: CentOSSpec
//!     │   └── container_linux: ContainerLinuxSpec
//!     ├── versions: NodeVersionInfo
//!     ├── taints: [TaintSpec]
//!     └── cloud: NodeCloudSpec
//!         └── aws: AWSNodeSpec
//! ```
//!
//! Optional API scalars are `Option<T>` so "unset" stays distinct from the
//! zero value.

pub mod cloud;
pub mod node_deployment;
pub mod operating_system;

pub use cloud::{AWSNodeSpec, CloudProvider, NodeCloudSpec};
pub use node_deployment::{
    NodeDeploymentSpec, NodeSpec, NodeSpecBuilder, NodeVersionInfo, TaintSpec,
};
pub use operating_system::{
    CentOSSpec, ContainerLinuxSpec, Distribution, OperatingSystemSpec, UbuntuSpec,
};
