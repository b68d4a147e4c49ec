// Copyright (c) 2025 - Cowboy AI, Inc.
//! Operating system blocks
//!
//! Distribution blocks are written and read independently of each other.

use super::keys::*;
use super::{flatten_block, BlockReader, Expand, Expander, Flatten};
use crate::attribute::{AttributeMap, AttributeValue};
use crate::domain::{CentOSSpec, ContainerLinuxSpec, OperatingSystemSpec, UbuntuSpec};
use crate::errors::MarshalResult;

impl Flatten for OperatingSystemSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        if let Some(ubuntu) = &self.ubuntu {
            att.insert(UBUNTU.to_string(), flatten_ubuntu(Some(ubuntu)).into());
        }

        if let Some(centos) = &self.centos {
            att.insert(CENTOS.to_string(), flatten_centos(Some(centos)).into());
        }

        if let Some(container_linux) = &self.container_linux {
            att.insert(
                CONTAINER_LINUX.to_string(),
                flatten_container_linux(Some(container_linux)).into(),
            );
        }

        att
    }
}

impl Expand for OperatingSystemSpec {
    const FIELDS: &'static [&'static str] = &[UBUNTU, CENTOS, CONTAINER_LINUX];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            ubuntu: reader.block(UBUNTU)?,
            centos: reader.block(CENTOS)?,
            container_linux: reader.block(CONTAINER_LINUX)?,
        })
    }
}

impl Flatten for UbuntuSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();
        att.insert(DIST_UPGRADE_ON_BOOT.to_string(), self.dist_upgrade_on_boot.into());
        att
    }
}

impl Expand for UbuntuSpec {
    const FIELDS: &'static [&'static str] = &[DIST_UPGRADE_ON_BOOT];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            dist_upgrade_on_boot: reader.bool(DIST_UPGRADE_ON_BOOT)?.unwrap_or_default(),
        })
    }
}

impl Flatten for CentOSSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();
        att.insert(DIST_UPGRADE_ON_BOOT.to_string(), self.dist_upgrade_on_boot.into());
        att
    }
}

impl Expand for CentOSSpec {
    const FIELDS: &'static [&'static str] = &[DIST_UPGRADE_ON_BOOT];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            dist_upgrade_on_boot: reader.bool(DIST_UPGRADE_ON_BOOT)?.unwrap_or_default(),
        })
    }
}

impl Flatten for ContainerLinuxSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();
        att.insert(DISABLE_AUTO_UPDATE.to_string(), self.disable_auto_update.into());
        att
    }
}

impl Expand for ContainerLinuxSpec {
    const FIELDS: &'static [&'static str] = &[DISABLE_AUTO_UPDATE];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            disable_auto_update: reader.bool(DISABLE_AUTO_UPDATE)?.unwrap_or_default(),
        })
    }
}

pub fn flatten_operating_system(os: Option<&OperatingSystemSpec>) -> Vec<AttributeValue> {
    flatten_block(os)
}

pub fn expand_operating_system(
    block: &[AttributeValue],
) -> MarshalResult<Option<OperatingSystemSpec>> {
    Expander::default().expand_block(block)
}

pub fn flatten_ubuntu(spec: Option<&UbuntuSpec>) -> Vec<AttributeValue> {
    flatten_block(spec)
}

pub fn expand_ubuntu(block: &[AttributeValue]) -> MarshalResult<Option<UbuntuSpec>> {
    Expander::default().expand_block(block)
}

pub fn flatten_centos(spec: Option<&CentOSSpec>) -> Vec<AttributeValue> {
    flatten_block(spec)
}

pub fn expand_centos(block: &[AttributeValue]) -> MarshalResult<Option<CentOSSpec>> {
    Expander::default().expand_block(block)
}

pub fn flatten_container_linux(spec: Option<&ContainerLinuxSpec>) -> Vec<AttributeValue> {
    flatten_block(spec)
}

pub fn expand_container_linux(
    block: &[AttributeValue],
) -> MarshalResult<Option<ContainerLinuxSpec>> {
    Expander::default().expand_block(block)
}
