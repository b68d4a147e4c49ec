// Copyright (c) 2025 - Cowboy AI, Inc.
//! Node deployment, node template, versions and taints

use tracing::debug;

use super::keys::*;
use super::{flatten_block, BlockReader, Expand, Expander, Flatten};
use crate::attribute::{AttributeMap, AttributeValue};
use crate::domain::{NodeDeploymentSpec, NodeSpec, NodeVersionInfo, TaintSpec};
use crate::errors::MarshalResult;

impl Flatten for NodeDeploymentSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        if let Some(replicas) = self.replicas {
            att.insert(REPLICAS.to_string(), replicas.into());
        }

        if let Some(template) = &self.template {
            att.insert(TEMPLATE.to_string(), flatten_node_spec(Some(template)).into());
        }

        att
    }
}

impl Expand for NodeDeploymentSpec {
    const FIELDS: &'static [&'static str] = &[REPLICAS, TEMPLATE];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            replicas: reader.int32(REPLICAS)?,
            template: reader.block(TEMPLATE)?,
        })
    }
}

impl Flatten for NodeSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        if !self.labels.is_empty() {
            att.insert(LABELS.to_string(), (&self.labels).into());
        }

        if let Some(os) = &self.operating_system {
            att.insert(
                OPERATING_SYSTEM.to_string(),
                super::flatten_operating_system(Some(os)).into(),
            );
        }

        if let Some(versions) = &self.versions {
            att.insert(VERSIONS.to_string(), flatten_node_version(Some(versions)).into());
        }

        if !self.taints.is_empty() {
            let taints = self
                .taints
                .iter()
                .map(|taint| AttributeValue::Map(flatten_taint_spec(Some(taint))))
                .collect::<Vec<_>>();
            att.insert(TAINTS.to_string(), taints.into());
        }

        if let Some(cloud) = &self.cloud {
            att.insert(CLOUD.to_string(), super::flatten_node_cloud_spec(Some(cloud)).into());
        }

        att
    }
}

impl Expand for NodeSpec {
    const FIELDS: &'static [&'static str] = &[LABELS, OPERATING_SYSTEM, VERSIONS, TAINTS, CLOUD];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            labels: reader.string_map(LABELS)?.unwrap_or_default(),
            operating_system: reader.block(OPERATING_SYSTEM)?,
            versions: reader.block(VERSIONS)?,
            taints: reader.list(TAINTS)?.unwrap_or_default(),
            cloud: reader.block(CLOUD)?,
        })
    }
}

impl Flatten for NodeVersionInfo {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        if !self.kubelet.is_empty() {
            att.insert(KUBELET.to_string(), self.kubelet.as_str().into());
        }

        att
    }
}

impl Expand for NodeVersionInfo {
    const FIELDS: &'static [&'static str] = &[KUBELET];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            kubelet: reader.string(KUBELET)?.unwrap_or_default(),
        })
    }
}

impl Flatten for TaintSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        for (key, value) in [(KEY, &self.key), (VALUE, &self.value), (EFFECT, &self.effect)] {
            if !value.is_empty() {
                att.insert(key.to_string(), value.as_str().into());
            }
        }

        att
    }
}

impl Expand for TaintSpec {
    const FIELDS: &'static [&'static str] = &[KEY, VALUE, EFFECT];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            key: reader.string(KEY)?.unwrap_or_default(),
            value: reader.string(VALUE)?.unwrap_or_default(),
            effect: reader.string(EFFECT)?.unwrap_or_default(),
        })
    }
}

/// Flatten a node deployment into its top-level block
pub fn flatten_node_deployment_spec(spec: Option<&NodeDeploymentSpec>) -> Vec<AttributeValue> {
    debug!(present = spec.is_some(), "flattening node deployment spec");
    flatten_block(spec)
}

/// Expand a node deployment from its top-level block
pub fn expand_node_deployment_spec(
    block: &[AttributeValue],
) -> MarshalResult<Option<NodeDeploymentSpec>> {
    debug!(elements = block.len(), "expanding node deployment spec");
    Expander::default().expand_block(block)
}

pub fn flatten_node_spec(spec: Option<&NodeSpec>) -> Vec<AttributeValue> {
    flatten_block(spec)
}

pub fn expand_node_spec(block: &[AttributeValue]) -> MarshalResult<Option<NodeSpec>> {
    Expander::default().expand_block(block)
}

pub fn flatten_node_version(versions: Option<&NodeVersionInfo>) -> Vec<AttributeValue> {
    flatten_block(versions)
}

pub fn expand_node_version(block: &[AttributeValue]) -> MarshalResult<Option<NodeVersionInfo>> {
    Expander::default().expand_block(block)
}

/// Flatten a single taint
///
/// Taints live inside the `taints` list, so the result is the bare map
/// rather than a one-element block.
pub fn flatten_taint_spec(taint: Option<&TaintSpec>) -> AttributeMap {
    taint.map(Flatten::flatten).unwrap_or_default()
}

/// Expand a single taint from its bare map
pub fn expand_taint_spec(body: &AttributeMap) -> MarshalResult<TaintSpec> {
    Expander::default().expand_map(body)
}
