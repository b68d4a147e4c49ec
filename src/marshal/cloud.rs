// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud provider blocks
//!
//! Only AWS is wired up. Another provider would add its own block under
//! `cloud`, flattened and expanded independently of `aws`.

use super::keys::*;
use super::{flatten_block, BlockReader, Expand, Expander, Flatten};
use crate::attribute::{AttributeMap, AttributeValue};
use crate::domain::{AWSNodeSpec, NodeCloudSpec};
use crate::errors::MarshalResult;

impl Flatten for NodeCloudSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        if let Some(aws) = &self.aws {
            att.insert(AWS.to_string(), flatten_aws_node_spec(Some(aws)).into());
        }

        att
    }
}

impl Expand for NodeCloudSpec {
    const FIELDS: &'static [&'static str] = &[AWS];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            aws: reader.block(AWS)?,
        })
    }
}

impl Flatten for AWSNodeSpec {
    fn flatten(&self) -> AttributeMap {
        let mut att = AttributeMap::new();

        att.insert(ASSIGN_PUBLIC_IP.to_string(), self.assign_public_ip.into());

        if !self.tags.is_empty() {
            att.insert(TAGS.to_string(), (&self.tags).into());
        }

        for (key, value) in [
            (AMI, &self.ami),
            (AVAILABILITY_ZONE, &self.availability_zone),
            (SUBNET_ID, &self.subnet_id),
        ] {
            if !value.is_empty() {
                att.insert(key.to_string(), value.as_str().into());
            }
        }

        if let Some(volume_type) = &self.volume_type {
            att.insert(VOLUME_TYPE.to_string(), volume_type.as_str().into());
        }

        if let Some(volume_size) = self.volume_size {
            att.insert(DISK_SIZE.to_string(), volume_size.into());
        }

        if let Some(instance_type) = &self.instance_type {
            att.insert(INSTANCE_TYPE.to_string(), instance_type.as_str().into());
        }

        att
    }
}

impl Expand for AWSNodeSpec {
    const FIELDS: &'static [&'static str] = &[
        INSTANCE_TYPE,
        DISK_SIZE,
        VOLUME_TYPE,
        AVAILABILITY_ZONE,
        SUBNET_ID,
        ASSIGN_PUBLIC_IP,
        AMI,
        TAGS,
    ];

    fn expand(reader: &BlockReader<'_>) -> MarshalResult<Self> {
        Ok(Self {
            instance_type: reader.string(INSTANCE_TYPE)?,
            volume_size: reader.int64(DISK_SIZE)?,
            volume_type: reader.string(VOLUME_TYPE)?,
            availability_zone: reader.string(AVAILABILITY_ZONE)?.unwrap_or_default(),
            subnet_id: reader.string(SUBNET_ID)?.unwrap_or_default(),
            assign_public_ip: reader.bool(ASSIGN_PUBLIC_IP)?.unwrap_or_default(),
            ami: reader.string(AMI)?.unwrap_or_default(),
            tags: reader.string_map(TAGS)?.unwrap_or_default(),
        })
    }
}

pub fn flatten_node_cloud_spec(cloud: Option<&NodeCloudSpec>) -> Vec<AttributeValue> {
    flatten_block(cloud)
}

pub fn expand_node_cloud_spec(block: &[AttributeValue]) -> MarshalResult<Option<NodeCloudSpec>> {
    Expander::default().expand_block(block)
}

pub fn flatten_aws_node_spec(aws: Option<&AWSNodeSpec>) -> Vec<AttributeValue> {
    flatten_block(aws)
}

pub fn expand_aws_node_spec(block: &[AttributeValue]) -> MarshalResult<Option<AWSNodeSpec>> {
    Expander::default().expand_block(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flatten_default_aws_spec() {
        let block = flatten_aws_node_spec(Some(&AWSNodeSpec::default()));

        let mut expected = AttributeMap::new();
        expected.insert(ASSIGN_PUBLIC_IP.to_string(), false.into());
        assert_eq!(block, vec![AttributeValue::Map(expected)]);
    }

    #[test]
    fn test_optional_scalars_keep_zero_values() {
        let aws = AWSNodeSpec {
            volume_size: Some(0),
            volume_type: Some(String::new()),
            ..Default::default()
        };

        let block = flatten_aws_node_spec(Some(&aws));
        let att = block[0].as_map().unwrap();
        assert_eq!(att.get(DISK_SIZE), Some(&AttributeValue::Int(0)));
        assert_eq!(att.get(VOLUME_TYPE), Some(&AttributeValue::from("")));
        assert!(!att.contains_key(INSTANCE_TYPE));

        assert_eq!(expand_aws_node_spec(&block).unwrap(), Some(aws));
    }

    #[test]
    fn test_expand_empty_cloud_block() {
        let cloud = expand_node_cloud_spec(&[AttributeValue::Map(AttributeMap::new())])
            .unwrap()
            .unwrap();
        assert!(cloud.aws.is_none());
        assert!(cloud.providers().is_empty());
    }
}
