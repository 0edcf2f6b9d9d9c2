// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! L2 attribute tables: VLAN, VLAN member, bridge, bridge port, STP.

use crate::meta::attr::{AttrFlags, AttrMetadata, Condition, ConditionValue, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

// VLAN

pub const VLAN_ATTR_VLAN_ID: AttrId = 0;
pub const VLAN_ATTR_MEMBER_LIST: AttrId = 1;
pub const VLAN_ATTR_MAX_LEARNED_ADDRESSES: AttrId = 2;
pub const VLAN_ATTR_STP_INSTANCE: AttrId = 3;

pub static VLAN_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Vlan,
        VLAN_ATTR_VLAN_ID,
        "SAI_VLAN_ATTR_VLAN_ID",
        ValueType::U16,
        AttrFlags::MANDATORY_ON_CREATE
            .with(AttrFlags::CREATE_ONLY)
            .with(AttrFlags::KEY),
    ),
    AttrMetadata::new(
        ObjectType::Vlan,
        VLAN_ATTR_MEMBER_LIST,
        "SAI_VLAN_ATTR_MEMBER_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::VlanMember]),
    AttrMetadata::new(
        ObjectType::Vlan,
        VLAN_ATTR_MAX_LEARNED_ADDRESSES,
        "SAI_VLAN_ATTR_MAX_LEARNED_ADDRESSES",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(0)),
    AttrMetadata::new(
        ObjectType::Vlan,
        VLAN_ATTR_STP_INSTANCE,
        "SAI_VLAN_ATTR_STP_INSTANCE",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Stp])
    .with_default(DefaultValue::SwitchInternal),
];

// VLAN member

pub const VLAN_MEMBER_ATTR_VLAN_ID: AttrId = 0;
pub const VLAN_MEMBER_ATTR_BRIDGE_PORT_ID: AttrId = 1;
pub const VLAN_MEMBER_ATTR_VLAN_TAGGING_MODE: AttrId = 2;

pub static VLAN_MEMBER_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::VlanMember,
        VLAN_MEMBER_ATTR_VLAN_ID,
        "SAI_VLAN_MEMBER_ATTR_VLAN_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::Vlan]),
    AttrMetadata::new(
        ObjectType::VlanMember,
        VLAN_MEMBER_ATTR_BRIDGE_PORT_ID,
        "SAI_VLAN_MEMBER_ATTR_BRIDGE_PORT_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::BridgePort]),
    AttrMetadata::new(
        ObjectType::VlanMember,
        VLAN_MEMBER_ATTR_VLAN_TAGGING_MODE,
        "SAI_VLAN_MEMBER_ATTR_VLAN_TAGGING_MODE",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::VLAN_TAGGING_MODE)
    .with_default(DefaultValue::I32(enums::VLAN_TAGGING_MODE_UNTAGGED)),
];

// Bridge

pub const BRIDGE_ATTR_TYPE: AttrId = 0;
pub const BRIDGE_ATTR_PORT_LIST: AttrId = 1;

pub static BRIDGE_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Bridge,
        BRIDGE_ATTR_TYPE,
        "SAI_BRIDGE_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::BRIDGE_TYPE),
    AttrMetadata::new(
        ObjectType::Bridge,
        BRIDGE_ATTR_PORT_LIST,
        "SAI_BRIDGE_ATTR_PORT_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::BridgePort]),
];

// Bridge port

pub const BRIDGE_PORT_ATTR_TYPE: AttrId = 0;
pub const BRIDGE_PORT_ATTR_PORT_ID: AttrId = 1;
pub const BRIDGE_PORT_ATTR_BRIDGE_ID: AttrId = 2;
pub const BRIDGE_PORT_ATTR_FDB_LEARNING_MODE: AttrId = 3;
pub const BRIDGE_PORT_ATTR_ADMIN_STATE: AttrId = 4;

static BRIDGE_PORT_PORT_ID_CONDITIONS: &[Condition] = &[Condition {
    attr_id: BRIDGE_PORT_ATTR_TYPE,
    value: ConditionValue::Enum(enums::BRIDGE_PORT_TYPE_PORT),
}];

pub static BRIDGE_PORT_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::BridgePort,
        BRIDGE_PORT_ATTR_TYPE,
        "SAI_BRIDGE_PORT_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::BRIDGE_PORT_TYPE),
    AttrMetadata::new(
        ObjectType::BridgePort,
        BRIDGE_PORT_ATTR_PORT_ID,
        "SAI_BRIDGE_PORT_ATTR_PORT_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::Port])
    .with_conditions(BRIDGE_PORT_PORT_ID_CONDITIONS),
    AttrMetadata::new(
        ObjectType::BridgePort,
        BRIDGE_PORT_ATTR_BRIDGE_ID,
        "SAI_BRIDGE_PORT_ATTR_BRIDGE_ID",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Bridge])
    .with_default(DefaultValue::SwitchInternal),
    AttrMetadata::new(
        ObjectType::BridgePort,
        BRIDGE_PORT_ATTR_FDB_LEARNING_MODE,
        "SAI_BRIDGE_PORT_ATTR_FDB_LEARNING_MODE",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::BRIDGE_PORT_FDB_LEARNING_MODE)
    .with_default(DefaultValue::I32(enums::BRIDGE_PORT_FDB_LEARNING_MODE_HW)),
    AttrMetadata::new(
        ObjectType::BridgePort,
        BRIDGE_PORT_ATTR_ADMIN_STATE,
        "SAI_BRIDGE_PORT_ATTR_ADMIN_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(false)),
];

// STP

pub const STP_ATTR_VLAN_LIST: AttrId = 0;

pub static STP_ATTRS: &[AttrMetadata] = &[AttrMetadata::new(
    ObjectType::Stp,
    STP_ATTR_VLAN_LIST,
    "SAI_STP_ATTR_VLAN_LIST",
    ValueType::VlanList,
    AttrFlags::READ_ONLY,
)];
