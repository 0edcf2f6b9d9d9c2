// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! L3 attribute tables: virtual router, router interface, next hop.

use crate::meta::attr::{AttrFlags, AttrMetadata, Condition, ConditionValue, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

// Virtual router

pub const VIRTUAL_ROUTER_ATTR_ADMIN_V4_STATE: AttrId = 0;
pub const VIRTUAL_ROUTER_ATTR_ADMIN_V6_STATE: AttrId = 1;
pub const VIRTUAL_ROUTER_ATTR_SRC_MAC_ADDRESS: AttrId = 2;

pub static VIRTUAL_ROUTER_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::VirtualRouter,
        VIRTUAL_ROUTER_ATTR_ADMIN_V4_STATE,
        "SAI_VIRTUAL_ROUTER_ATTR_ADMIN_V4_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(true)),
    AttrMetadata::new(
        ObjectType::VirtualRouter,
        VIRTUAL_ROUTER_ATTR_ADMIN_V6_STATE,
        "SAI_VIRTUAL_ROUTER_ATTR_ADMIN_V6_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(true)),
    AttrMetadata::new(
        ObjectType::VirtualRouter,
        VIRTUAL_ROUTER_ATTR_SRC_MAC_ADDRESS,
        "SAI_VIRTUAL_ROUTER_ATTR_SRC_MAC_ADDRESS",
        ValueType::Mac,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::SwitchInternal),
];

// Router interface

pub const ROUTER_INTERFACE_ATTR_VIRTUAL_ROUTER_ID: AttrId = 0;
pub const ROUTER_INTERFACE_ATTR_TYPE: AttrId = 1;
pub const ROUTER_INTERFACE_ATTR_PORT_ID: AttrId = 2;
pub const ROUTER_INTERFACE_ATTR_VLAN_ID: AttrId = 3;
pub const ROUTER_INTERFACE_ATTR_SRC_MAC_ADDRESS: AttrId = 4;
pub const ROUTER_INTERFACE_ATTR_ADMIN_V4_STATE: AttrId = 5;
pub const ROUTER_INTERFACE_ATTR_ADMIN_V6_STATE: AttrId = 6;
pub const ROUTER_INTERFACE_ATTR_MTU: AttrId = 7;

static RIF_PORT_ID_CONDITIONS: &[Condition] = &[Condition {
    attr_id: ROUTER_INTERFACE_ATTR_TYPE,
    value: ConditionValue::Enum(enums::ROUTER_INTERFACE_TYPE_PORT),
}];

static RIF_VLAN_ID_CONDITIONS: &[Condition] = &[Condition {
    attr_id: ROUTER_INTERFACE_ATTR_TYPE,
    value: ConditionValue::Enum(enums::ROUTER_INTERFACE_TYPE_VLAN),
}];

pub static ROUTER_INTERFACE_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_VIRTUAL_ROUTER_ID,
        "SAI_ROUTER_INTERFACE_ATTR_VIRTUAL_ROUTER_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::VirtualRouter]),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_TYPE,
        "SAI_ROUTER_INTERFACE_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::ROUTER_INTERFACE_TYPE),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_PORT_ID,
        "SAI_ROUTER_INTERFACE_ATTR_PORT_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::Port])
    .with_conditions(RIF_PORT_ID_CONDITIONS),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_VLAN_ID,
        "SAI_ROUTER_INTERFACE_ATTR_VLAN_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::Vlan])
    .with_conditions(RIF_VLAN_ID_CONDITIONS),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_SRC_MAC_ADDRESS,
        "SAI_ROUTER_INTERFACE_ATTR_SRC_MAC_ADDRESS",
        ValueType::Mac,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::SwitchInternal),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_ADMIN_V4_STATE,
        "SAI_ROUTER_INTERFACE_ATTR_ADMIN_V4_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(true)),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_ADMIN_V6_STATE,
        "SAI_ROUTER_INTERFACE_ATTR_ADMIN_V6_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(true)),
    AttrMetadata::new(
        ObjectType::RouterInterface,
        ROUTER_INTERFACE_ATTR_MTU,
        "SAI_ROUTER_INTERFACE_ATTR_MTU",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(1514)),
];

// Next hop

pub const NEXT_HOP_ATTR_TYPE: AttrId = 0;
pub const NEXT_HOP_ATTR_IP: AttrId = 1;
pub const NEXT_HOP_ATTR_ROUTER_INTERFACE_ID: AttrId = 2;

pub static NEXT_HOP_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::NextHop,
        NEXT_HOP_ATTR_TYPE,
        "SAI_NEXT_HOP_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::NEXT_HOP_TYPE),
    AttrMetadata::new(
        ObjectType::NextHop,
        NEXT_HOP_ATTR_IP,
        "SAI_NEXT_HOP_ATTR_IP",
        ValueType::IpAddress,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    ),
    AttrMetadata::new(
        ObjectType::NextHop,
        NEXT_HOP_ATTR_ROUTER_INTERFACE_ID,
        "SAI_NEXT_HOP_ATTR_ROUTER_INTERFACE_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::RouterInterface]),
];
