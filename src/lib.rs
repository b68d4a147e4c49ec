// Copyright (c) 2025 - Cowboy AI, Inc.
//! Kubermatic node deployment marshaling for the Composable Information Machine
//!
//! Converts between the typed Kubermatic API models for node deployments and
//! the generic attribute tree a declarative configuration engine exchanges
//! with its providers.
//!
//! - [`domain`] - Kubermatic API models
//! - [`attribute`] - The attribute tree
//! - [`marshal`] - `flatten_*` (API → tree) and `expand_*` (tree → API)
//!
//! # Example
//!
//! ```rust
//! use cim_infrastructure_kubermatic::domain::*;
//! use cim_infrastructure_kubermatic::marshal::{
//!     expand_node_deployment_spec, flatten_node_deployment_spec,
//! };
//!
//! let spec = NodeDeploymentSpec::new(
//!     3,
//!     NodeSpec::builder()
//!         .operating_system(OperatingSystemSpec::ubuntu(UbuntuSpec {
//!             dist_upgrade_on_boot: true,
//!         }))
//!         .build(),
//! );
//!
//! let tree = flatten_node_deployment_spec(Some(&spec));
//! let back = expand_node_deployment_spec(&tree).unwrap();
//! assert_eq!(back, Some(spec));
//! ```

pub mod attribute;
pub mod config;
pub mod domain;
pub mod errors;
pub mod marshal;

// Re-export commonly used types
pub use attribute::{AttributeKind, AttributeMap, AttributeValue};
pub use config::{MarshalConfig, UnknownKeyPolicy};
pub use errors::{MarshalError, MarshalResult};
pub use marshal::{flatten_block, BlockReader, Expand, Expander, Flatten};
