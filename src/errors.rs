// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for marshaling operations
//!
//! Flattening never fails. Expanding reads a generically typed attribute tree
//! that the configuration engine has already validated against its schema, so
//! every error here signals a broken contract between the schema and this
//! crate rather than bad user input.

use thiserror::Error;

use crate::attribute::AttributeKind;

/// Errors that can occur while expanding an attribute tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// Attribute held a different kind of value than the field requires
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: AttributeKind,
        found: AttributeKind,
    },

    /// Integer attribute does not fit the target field
    #[error("Value {value} at {path} is out of range for {target}")]
    OutOfRange {
        path: String,
        value: i64,
        target: &'static str,
    },

    /// Block list carried more than one element
    #[error("Block at {path} must hold at most one element, found {len}")]
    BlockCardinality { path: String, len: usize },

    /// Key not part of the block schema (only under `UnknownKeyPolicy::Reject`)
    #[error("Unknown key at {path}: {key}")]
    UnknownKey { path: String, key: String },

    /// JSON value with no attribute tree representation
    #[error("JSON conversion error: {0}")]
    Json(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for marshaling operations
pub type MarshalResult<T> = Result<T, MarshalError>;

impl From<serde_json::Error> for MarshalError {
    fn from(err: serde_json::Error) -> Self {
        MarshalError::Json(err.to_string())
    }
}
