// Copyright (c) 2025 - Cowboy AI, Inc.
//! Marshaling configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{MarshalError, MarshalResult};

/// Environment variable selecting the [`UnknownKeyPolicy`]
pub const UNKNOWN_KEYS_ENV: &str = "CIM_KUBERMATIC_UNKNOWN_KEYS";

/// What to do with block keys the schema does not define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Skip silently
    Ignore,
    /// Skip and emit a `tracing` warning
    #[default]
    Warn,
    /// Fail with [`MarshalError::UnknownKey`]
    Reject,
}

impl FromStr for UnknownKeyPolicy {
    type Err = MarshalError;

    fn from_str(s: &str) -> MarshalResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(UnknownKeyPolicy::Ignore),
            "warn" => Ok(UnknownKeyPolicy::Warn),
            "reject" => Ok(UnknownKeyPolicy::Reject),
            other => Err(MarshalError::Config(format!(
                "invalid unknown key policy '{}' (expected ignore, warn or reject)",
                other
            ))),
        }
    }
}

impl fmt::Display for UnknownKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnknownKeyPolicy::Ignore => "ignore",
            UnknownKeyPolicy::Warn => "warn",
            UnknownKeyPolicy::Reject => "reject",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for expanding attribute trees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarshalConfig {
    /// Handling of keys outside the block schema
    #[serde(default)]
    pub unknown_keys: UnknownKeyPolicy,
}

impl MarshalConfig {
    /// Create a configuration with the given unknown key policy
    pub fn new(unknown_keys: UnknownKeyPolicy) -> Self {
        Self { unknown_keys }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> MarshalResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MarshalResult<Self> {
        let unknown_keys = match lookup(UNKNOWN_KEYS_ENV) {
            Some(raw) => raw.parse()?,
            None => UnknownKeyPolicy::default(),
        };

        Ok(Self { unknown_keys })
    }
}
