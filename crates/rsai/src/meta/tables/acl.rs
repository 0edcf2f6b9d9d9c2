// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ACL attribute tables: table, entry, range.

use crate::meta::attr::{AttrFlags, AttrMetadata, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

// ACL table

pub const ACL_TABLE_ATTR_STAGE: AttrId = 0;
pub const ACL_TABLE_ATTR_PRIORITY: AttrId = 1;
pub const ACL_TABLE_ATTR_SIZE: AttrId = 2;
pub const ACL_TABLE_ATTR_FIELD_SRC_IP: AttrId = 3;
pub const ACL_TABLE_ATTR_FIELD_DST_IP: AttrId = 4;
pub const ACL_TABLE_ATTR_FIELD_SRC_MAC: AttrId = 5;
pub const ACL_TABLE_ATTR_FIELD_DST_MAC: AttrId = 6;
pub const ACL_TABLE_ATTR_FIELD_L4_SRC_PORT: AttrId = 7;
pub const ACL_TABLE_ATTR_FIELD_L4_DST_PORT: AttrId = 8;
pub const ACL_TABLE_ATTR_FIELD_ACL_IP_TYPE: AttrId = 9;
pub const ACL_TABLE_ATTR_FIELD_ACL_RANGE_TYPE: AttrId = 10;

const fn table_field(attr_id: AttrId, name: &'static str) -> AttrMetadata {
    AttrMetadata::new(ObjectType::AclTable, attr_id, name, ValueType::Bool, AttrFlags::CREATE_ONLY)
        .with_default(DefaultValue::Bool(false))
}

pub static ACL_TABLE_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::AclTable,
        ACL_TABLE_ATTR_STAGE,
        "SAI_ACL_TABLE_ATTR_STAGE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::ACL_STAGE),
    AttrMetadata::new(
        ObjectType::AclTable,
        ACL_TABLE_ATTR_PRIORITY,
        "SAI_ACL_TABLE_ATTR_PRIORITY",
        ValueType::U32,
        AttrFlags::CREATE_ONLY,
    )
    .with_default(DefaultValue::U32(0)),
    AttrMetadata::new(
        ObjectType::AclTable,
        ACL_TABLE_ATTR_SIZE,
        "SAI_ACL_TABLE_ATTR_SIZE",
        ValueType::U32,
        AttrFlags::CREATE_ONLY,
    )
    .with_default(DefaultValue::U32(0)),
    table_field(ACL_TABLE_ATTR_FIELD_SRC_IP, "SAI_ACL_TABLE_ATTR_FIELD_SRC_IP"),
    table_field(ACL_TABLE_ATTR_FIELD_DST_IP, "SAI_ACL_TABLE_ATTR_FIELD_DST_IP"),
    table_field(ACL_TABLE_ATTR_FIELD_SRC_MAC, "SAI_ACL_TABLE_ATTR_FIELD_SRC_MAC"),
    table_field(ACL_TABLE_ATTR_FIELD_DST_MAC, "SAI_ACL_TABLE_ATTR_FIELD_DST_MAC"),
    table_field(ACL_TABLE_ATTR_FIELD_L4_SRC_PORT, "SAI_ACL_TABLE_ATTR_FIELD_L4_SRC_PORT"),
    table_field(ACL_TABLE_ATTR_FIELD_L4_DST_PORT, "SAI_ACL_TABLE_ATTR_FIELD_L4_DST_PORT"),
    table_field(ACL_TABLE_ATTR_FIELD_ACL_IP_TYPE, "SAI_ACL_TABLE_ATTR_FIELD_ACL_IP_TYPE"),
    // Flagged mandatory in metadata; the validator treats it as optional
    // (documented workaround in check::create).
    AttrMetadata::new(
        ObjectType::AclTable,
        ACL_TABLE_ATTR_FIELD_ACL_RANGE_TYPE,
        "SAI_ACL_TABLE_ATTR_FIELD_ACL_RANGE_TYPE",
        ValueType::I32List,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::ACL_RANGE_TYPE),
];

// ACL entry

pub const ACL_ENTRY_ATTR_TABLE_ID: AttrId = 0;
pub const ACL_ENTRY_ATTR_PRIORITY: AttrId = 1;
pub const ACL_ENTRY_ATTR_ADMIN_STATE: AttrId = 2;
pub const ACL_ENTRY_ATTR_FIELD_SRC_IP: AttrId = 3;
pub const ACL_ENTRY_ATTR_FIELD_DST_IP: AttrId = 4;
pub const ACL_ENTRY_ATTR_FIELD_SRC_MAC: AttrId = 5;
pub const ACL_ENTRY_ATTR_FIELD_DST_MAC: AttrId = 6;
pub const ACL_ENTRY_ATTR_FIELD_L4_SRC_PORT: AttrId = 7;
pub const ACL_ENTRY_ATTR_FIELD_L4_DST_PORT: AttrId = 8;
pub const ACL_ENTRY_ATTR_FIELD_ACL_IP_TYPE: AttrId = 9;
pub const ACL_ENTRY_ATTR_FIELD_IN_PORTS: AttrId = 10;
pub const ACL_ENTRY_ATTR_FIELD_ACL_RANGE_TYPE: AttrId = 11;
pub const ACL_ENTRY_ATTR_ACTION_REDIRECT: AttrId = 12;
pub const ACL_ENTRY_ATTR_ACTION_PACKET_ACTION: AttrId = 13;
pub const ACL_ENTRY_ATTR_ACTION_MIRROR_INGRESS: AttrId = 14;
pub const ACL_ENTRY_ATTR_ACTION_SET_TC: AttrId = 15;

pub static ACL_ENTRY_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_TABLE_ID,
        "SAI_ACL_ENTRY_ATTR_TABLE_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::AclTable]),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_PRIORITY,
        "SAI_ACL_ENTRY_ATTR_PRIORITY",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(0)),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_ADMIN_STATE,
        "SAI_ACL_ENTRY_ATTR_ADMIN_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(true)),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_SRC_IP,
        "SAI_ACL_ENTRY_ATTR_FIELD_SRC_IP",
        ValueType::AclFieldIpv4,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_DST_IP,
        "SAI_ACL_ENTRY_ATTR_FIELD_DST_IP",
        ValueType::AclFieldIpv4,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_SRC_MAC,
        "SAI_ACL_ENTRY_ATTR_FIELD_SRC_MAC",
        ValueType::AclFieldMac,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_DST_MAC,
        "SAI_ACL_ENTRY_ATTR_FIELD_DST_MAC",
        ValueType::AclFieldMac,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_L4_SRC_PORT,
        "SAI_ACL_ENTRY_ATTR_FIELD_L4_SRC_PORT",
        ValueType::AclFieldU16,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_L4_DST_PORT,
        "SAI_ACL_ENTRY_ATTR_FIELD_L4_DST_PORT",
        ValueType::AclFieldU16,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_ACL_IP_TYPE,
        "SAI_ACL_ENTRY_ATTR_FIELD_ACL_IP_TYPE",
        ValueType::AclFieldI32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::ACL_IP_TYPE),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_IN_PORTS,
        "SAI_ACL_ENTRY_ATTR_FIELD_IN_PORTS",
        ValueType::AclFieldOidList,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Port]),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_FIELD_ACL_RANGE_TYPE,
        "SAI_ACL_ENTRY_ATTR_FIELD_ACL_RANGE_TYPE",
        ValueType::AclFieldOidList,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::AclRange]),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_ACTION_REDIRECT,
        "SAI_ACL_ENTRY_ATTR_ACTION_REDIRECT",
        ValueType::AclActionOid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Port]),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_ACTION_PACKET_ACTION,
        "SAI_ACL_ENTRY_ATTR_ACTION_PACKET_ACTION",
        ValueType::AclActionI32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::PACKET_ACTION),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_ACTION_MIRROR_INGRESS,
        "SAI_ACL_ENTRY_ATTR_ACTION_MIRROR_INGRESS",
        ValueType::AclActionOid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::MirrorSession]),
    AttrMetadata::new(
        ObjectType::AclEntry,
        ACL_ENTRY_ATTR_ACTION_SET_TC,
        "SAI_ACL_ENTRY_ATTR_ACTION_SET_TC",
        ValueType::AclActionU8,
        AttrFlags::CREATE_AND_SET,
    ),
];

// ACL range

pub const ACL_RANGE_ATTR_TYPE: AttrId = 0;
pub const ACL_RANGE_ATTR_LIMIT: AttrId = 1;

pub static ACL_RANGE_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::AclRange,
        ACL_RANGE_ATTR_TYPE,
        "SAI_ACL_RANGE_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::ACL_RANGE_TYPE),
    AttrMetadata::new(
        ObjectType::AclRange,
        ACL_RANGE_ATTR_LIMIT,
        "SAI_ACL_RANGE_ATTR_LIMIT",
        ValueType::U32Range,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    ),
];
