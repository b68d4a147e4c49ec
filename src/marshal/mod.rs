// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flatten and Expand
//!
//! Converts Kubermatic API models to and from the attribute tree consumed by
//! the configuration engine.
//!
//! ```text
//! flatten: NodeDeploymentSpec ──► [ { replicas, template: [ { ... } ] } ]
//! expand:  [ { replicas, template: [ { ... } ] } ] ──► NodeDeploymentSpec
//! ```
//!
//! # Conventions
//!
//! - Every nested entity is a block: a list with zero or one map.
//! - Flattening drops empty strings, empty maps and empty lists; booleans
//!   and `Some(_)` optionals are always written.
//! - Expanding treats a missing (or null) key as "leave the default".
//! - A `Null` block element expands to the entity's default value.
//!
//! Each entity implements [`Flatten`] and [`Expand`]; the per-entity
//! `flatten_*` / `expand_*` functions are thin wrappers over the generic
//! [`flatten_block`] and [`Expander::expand_block`].

pub mod cloud;
pub mod keys;
pub mod node_deployment;
pub mod operating_system;

pub use cloud::{
    expand_aws_node_spec, expand_node_cloud_spec, flatten_aws_node_spec, flatten_node_cloud_spec,
};
pub use node_deployment::{
    expand_node_deployment_spec, expand_node_spec, expand_node_version, expand_taint_spec,
    flatten_node_deployment_spec, flatten_node_spec, flatten_node_version, flatten_taint_spec,
};
pub use operating_system::{
    expand_centos, expand_container_linux, expand_operating_system, expand_ubuntu,
    flatten_centos, flatten_container_linux, flatten_operating_system, flatten_ubuntu,
};

use std::collections::HashMap;
use tracing::{trace, warn};

use crate::attribute::{AttributeKind, AttributeMap, AttributeValue};
use crate::config::{MarshalConfig, UnknownKeyPolicy};
use crate::errors::{MarshalError, MarshalResult};

/// Conversion of a domain value into a block body
pub trait Flatten {
    fn flatten(&self) -> AttributeMap;
}

/// Conversion of a block body into a domain value
pub trait Expand: Default + Sized {
    /// Keys defined by the block schema
    const FIELDS: &'static [&'static str];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self>;
}

/// Flatten an optional value into a block
///
/// `None` yields an empty list, `Some` a list holding exactly one map.
pub fn flatten_block<T: Flatten>(value: Option<&T>) -> Vec<AttributeValue> {
    match value {
        Some(value) => {
            trace!(entity = short_type_name::<T>(), "flattening block");
            vec![AttributeValue::Map(value.flatten())]
        }
        None => Vec::new(),
    }
}

/// Expands attribute trees under a [`MarshalConfig`]
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: MarshalConfig,
}

impl Expander {
    pub fn new(config: MarshalConfig) -> Self {
        Self { config }
    }

    /// Create an expander configured from environment variables
    pub fn from_env() -> MarshalResult<Self> {
        Ok(Self::new(MarshalConfig::from_env()?))
    }

    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    /// Expand a top-level block
    ///
    /// - `[]` → `None`
    /// - `[Null]` → `Some(T::default())`
    /// - `[Map]` → `Some(T)` built from the map
    pub fn expand_block<T: Expand>(&self, block: &[AttributeValue]) -> MarshalResult<Option<T>> {
        self.expand_block_at(block, String::new())
    }

    /// Expand a bare block body that is not wrapped in a list
    pub fn expand_map<T: Expand>(&self, body: &AttributeMap) -> MarshalResult<T> {
        self.expand_body(body, String::new())
    }

    fn expand_block_at<T: Expand>(
        &self,
        block: &[AttributeValue],
        path: String,
    ) -> MarshalResult<Option<T>> {
        // root fields are addressed without the element index
        let element_path = if path.is_empty() {
            String::new()
        } else {
            join_path(&path, "0")
        };

        match block {
            [] => Ok(None),
            [AttributeValue::Null] => Ok(Some(T::default())),
            [AttributeValue::Map(body)] => self.expand_body(body, element_path).map(Some),
            [other] => Err(MarshalError::TypeMismatch {
                path: display_path(&element_path),
                expected: AttributeKind::Map,
                found: other.kind(),
            }),
            _ => Err(MarshalError::BlockCardinality {
                path: display_path(&path),
                len: block.len(),
            }),
        }
    }

    fn expand_body<T: Expand>(&self, body: &AttributeMap, path: String) -> MarshalResult<T> {
        trace!(entity = short_type_name::<T>(), path = %display_path(&path), "expanding block");

        let reader = BlockReader {
            expander: self,
            body,
            path,
        };
        reader.check_unknown_keys(T::FIELDS)?;
        T::expand(&reader)
    }
}

/// Typed, path-aware view over a block body
///
/// Every accessor returns `Ok(None)` when the key is missing or null and a
/// [`MarshalError`] when the value has the wrong kind.
pub struct BlockReader<'a> {
    expander: &'a Expander,
    body: &'a AttributeMap,
    path: String,
}

impl<'a> BlockReader<'a> {
    /// Path of this block within the tree (empty at the root)
    pub fn path(&self) -> &str {
        &self.path
    }

    fn get(&self, key: &str) -> Option<&'a AttributeValue> {
        self.body.get(key).filter(|value| !value.is_null())
    }

    fn key_path(&self, key: &str) -> String {
        join_path(&self.path, key)
    }

    fn mismatch(&self, key: &str, expected: AttributeKind, found: &AttributeValue) -> MarshalError {
        MarshalError::TypeMismatch {
            path: self.key_path(key),
            expected,
            found: found.kind(),
        }
    }

    pub fn bool(&self, key: &str) -> MarshalResult<Option<bool>> {
        self.get(key)
            .map(|v| v.as_bool().ok_or_else(|| self.mismatch(key, AttributeKind::Bool, v)))
            .transpose()
    }

    pub fn string(&self, key: &str) -> MarshalResult<Option<String>> {
        self.get(key)
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mismatch(key, AttributeKind::String, v))
            })
            .transpose()
    }

    pub fn int64(&self, key: &str) -> MarshalResult<Option<i64>> {
        self.get(key)
            .map(|v| v.as_int().ok_or_else(|| self.mismatch(key, AttributeKind::Int, v)))
            .transpose()
    }

    pub fn int32(&self, key: &str) -> MarshalResult<Option<i32>> {
        self.int64(key)?
            .map(|value| {
                i32::try_from(value).map_err(|_| MarshalError::OutOfRange {
                    path: self.key_path(key),
                    value,
                    target: "i32",
                })
            })
            .transpose()
    }

    /// Read a string-to-string map into a freshly owned `HashMap`
    pub fn string_map(&self, key: &str) -> MarshalResult<Option<HashMap<String, String>>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let map = value
            .as_map()
            .ok_or_else(|| self.mismatch(key, AttributeKind::Map, value))?;

        let mut out = HashMap::with_capacity(map.len());
        for (entry, v) in map {
            let s = v.as_str().ok_or_else(|| MarshalError::TypeMismatch {
                path: join_path(&self.key_path(key), entry),
                expected: AttributeKind::String,
                found: v.kind(),
            })?;
            out.insert(entry.clone(), s.to_string());
        }
        Ok(Some(out))
    }

    /// Expand the nested block stored under `key`
    pub fn block<T: Expand>(&self, key: &str) -> MarshalResult<Option<T>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let block = value
            .as_list()
            .ok_or_else(|| self.mismatch(key, AttributeKind::List, value))?;

        self.expander.expand_block_at(block, self.key_path(key))
    }

    /// Expand a list of bare block bodies stored under `key`, keeping order
    ///
    /// Null elements expand to `T::default()`.
    pub fn list<T: Expand>(&self, key: &str) -> MarshalResult<Option<Vec<T>>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let items = value
            .as_list()
            .ok_or_else(|| self.mismatch(key, AttributeKind::List, value))?;

        let list_path = self.key_path(key);
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = join_path(&list_path, &index.to_string());
            let expanded = match item {
                AttributeValue::Null => T::default(),
                AttributeValue::Map(body) => self.expander.expand_body(body, item_path)?,
                other => {
                    return Err(MarshalError::TypeMismatch {
                        path: item_path,
                        expected: AttributeKind::Map,
                        found: other.kind(),
                    })
                }
            };
            out.push(expanded);
        }
        Ok(Some(out))
    }

    fn check_unknown_keys(&self, fields: &[&str]) -> MarshalResult<()> {
        let policy = self.expander.config.unknown_keys;
        if policy == UnknownKeyPolicy::Ignore {
            return Ok(());
        }

        for key in self.body.keys().filter(|k| !fields.contains(&k.as_str())) {
            match policy {
                UnknownKeyPolicy::Reject => {
                    return Err(MarshalError::UnknownKey {
                        path: display_path(&self.path),
                        key: key.clone(),
                    })
                }
                _ => warn!(path = %display_path(&self.path), key = %key, "ignoring unknown attribute key"),
            }
        }
        Ok(())
    }
}

fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
