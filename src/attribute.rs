// Copyright (c) 2025 - Cowboy AI, Inc.
//! Attribute Tree
//!
//! The configuration engine hands resources to a provider as a generic tree of
//! attribute values, validated against the provider's schema. This module
//! models that tree as a closed sum type so conversions can inspect it with
//! checked accessors instead of dynamic casts.
//!
//! # Shape Conventions
//!
//! ```text
//! scalar        → Bool | Int | String
//! string map    → Map { key → String }            (labels, tags)
//! block         → List [ Map { ... } ]            (at most one element)
//! block list    → List [ Map, Map, ... ]          (taints)
//! ```
//!
//! A block with zero elements means "not configured". A block whose single
//! element is `Null` means "configured, every field at its default".

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::errors::{MarshalError, MarshalResult};

/// String-keyed attribute map, ordered for deterministic output
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A single node of the attribute tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Explicit null
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar (the engine widens every integer to 64 bits)
    Int(i64),
    /// String scalar
    String(String),
    /// Ordered list; also the container for blocks
    List(Vec<AttributeValue>),
    /// String-keyed map; block bodies and string maps
    Map(AttributeMap),
}

/// Discriminant of an [`AttributeValue`], used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Null,
    Bool,
    Int,
    String,
    List,
    Map,
}

impl AttributeKind {
    /// Human readable name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::Null => "null",
            AttributeKind::Bool => "boolean",
            AttributeKind::Int => "integer",
            AttributeKind::String => "string",
            AttributeKind::List => "list",
            AttributeKind::Map => "map",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AttributeValue {
    /// Wrap a block body into its single-element list
    pub fn block(body: AttributeMap) -> Self {
        AttributeValue::List(vec![AttributeValue::Map(body)])
    }

    /// Get the kind of this value
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Null => AttributeKind::Null,
            AttributeValue::Bool(_) => AttributeKind::Bool,
            AttributeValue::Int(_) => AttributeKind::Int,
            AttributeValue::String(_) => AttributeKind::String,
            AttributeValue::List(_) => AttributeKind::List,
            AttributeValue::Map(_) => AttributeKind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            AttributeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Convert a JSON document into an attribute tree
    ///
    /// Only integral numbers that fit in an `i64` are accepted; the schema
    /// layer never produces floating point attributes for these resources.
    pub fn from_json(value: serde_json::Value) -> MarshalResult<Self> {
        Ok(match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Int(i),
                None => {
                    return Err(MarshalError::Json(format!(
                        "number {} is not a 64-bit integer",
                        n
                    )))
                }
            },
            serde_json::Value::String(s) => AttributeValue::String(s),
            serde_json::Value::Array(items) => AttributeValue::List(
                items
                    .into_iter()
                    .map(AttributeValue::from_json)
                    .collect::<MarshalResult<Vec<_>>>()?,
            ),
            serde_json::Value::Object(object) => AttributeValue::Map(
                object
                    .into_iter()
                    .map(|(k, v)| AttributeValue::from_json(v).map(|v| (k, v)))
                    .collect::<MarshalResult<AttributeMap>>()?,
            ),
        })
    }

    /// Convert the attribute tree into a JSON document
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttributeValue::Null => serde_json::Value::Null,
            AttributeValue::Bool(b) => serde_json::Value::Bool(*b),
            AttributeValue::Int(i) => serde_json::Value::from(*i),
            AttributeValue::String(s) => serde_json::Value::String(s.clone()),
            AttributeValue::List(items) => {
                serde_json::Value::Array(items.iter().map(AttributeValue::to_json).collect())
            }
            AttributeValue::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(i64::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<&HashMap<String, String>> for AttributeValue {
    fn from(value: &HashMap<String, String>) -> Self {
        AttributeValue::Map(
            value
                .iter()
                .map(|(k, v)| (k.clone(), AttributeValue::String(v.clone())))
                .collect(),
        )
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(value: Vec<AttributeValue>) -> Self {
        AttributeValue::List(value)
    }
}

impl From<AttributeMap> for AttributeValue {
    fn from(value: AttributeMap) -> Self {
        AttributeValue::Map(value)
    }
}
