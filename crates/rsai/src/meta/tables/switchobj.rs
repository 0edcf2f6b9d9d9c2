// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Switch attribute table.
//!
//! The switch is the root object: it is created first, and most of its
//! interesting attributes are read-only handles to the default objects the
//! active profile fabricates at create time.

use crate::meta::attr::{AttrFlags, AttrMetadata, DefaultValue};
use crate::types::{AttrId, ObjectType, ValueType};

pub const SWITCH_ATTR_INIT_SWITCH: AttrId = 0;
pub const SWITCH_ATTR_SRC_MAC_ADDRESS: AttrId = 1;
pub const SWITCH_ATTR_PORT_NUMBER: AttrId = 2;
pub const SWITCH_ATTR_PORT_LIST: AttrId = 3;
pub const SWITCH_ATTR_CPU_PORT: AttrId = 4;
pub const SWITCH_ATTR_DEFAULT_VLAN_ID: AttrId = 5;
pub const SWITCH_ATTR_DEFAULT_VIRTUAL_ROUTER_ID: AttrId = 6;
pub const SWITCH_ATTR_DEFAULT_STP_INST_ID: AttrId = 7;
pub const SWITCH_ATTR_DEFAULT_1Q_BRIDGE_ID: AttrId = 8;
pub const SWITCH_ATTR_DEFAULT_TRAP_GROUP: AttrId = 9;
pub const SWITCH_ATTR_ACL_ENTRY_MINIMUM_PRIORITY: AttrId = 10;
pub const SWITCH_ATTR_ACL_ENTRY_MAXIMUM_PRIORITY: AttrId = 11;
pub const SWITCH_ATTR_NUMBER_OF_ECMP_GROUPS: AttrId = 12;
pub const SWITCH_ATTR_QOS_MAX_NUMBER_OF_CHILDS_PER_SCHEDULER_GROUP: AttrId = 13;
pub const SWITCH_ATTR_FDB_AGING_TIME: AttrId = 14;

pub static SWITCH_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_INIT_SWITCH,
        "SAI_SWITCH_ATTR_INIT_SWITCH",
        ValueType::Bool,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    ),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_SRC_MAC_ADDRESS,
        "SAI_SWITCH_ATTR_SRC_MAC_ADDRESS",
        ValueType::Mac,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::SwitchInternal),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_PORT_NUMBER,
        "SAI_SWITCH_ATTR_PORT_NUMBER",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_PORT_LIST,
        "SAI_SWITCH_ATTR_PORT_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Port]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_CPU_PORT,
        "SAI_SWITCH_ATTR_CPU_PORT",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Port]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_DEFAULT_VLAN_ID,
        "SAI_SWITCH_ATTR_DEFAULT_VLAN_ID",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Vlan]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_DEFAULT_VIRTUAL_ROUTER_ID,
        "SAI_SWITCH_ATTR_DEFAULT_VIRTUAL_ROUTER_ID",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::VirtualRouter]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_DEFAULT_STP_INST_ID,
        "SAI_SWITCH_ATTR_DEFAULT_STP_INST_ID",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Stp]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_DEFAULT_1Q_BRIDGE_ID,
        "SAI_SWITCH_ATTR_DEFAULT_1Q_BRIDGE_ID",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Bridge]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_DEFAULT_TRAP_GROUP,
        "SAI_SWITCH_ATTR_DEFAULT_TRAP_GROUP",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::HostifTrapGroup]),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_ACL_ENTRY_MINIMUM_PRIORITY,
        "SAI_SWITCH_ATTR_ACL_ENTRY_MINIMUM_PRIORITY",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_ACL_ENTRY_MAXIMUM_PRIORITY,
        "SAI_SWITCH_ATTR_ACL_ENTRY_MAXIMUM_PRIORITY",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_NUMBER_OF_ECMP_GROUPS,
        "SAI_SWITCH_ATTR_NUMBER_OF_ECMP_GROUPS",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_QOS_MAX_NUMBER_OF_CHILDS_PER_SCHEDULER_GROUP,
        "SAI_SWITCH_ATTR_QOS_MAX_NUMBER_OF_CHILDS_PER_SCHEDULER_GROUP",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Switch,
        SWITCH_ATTR_FDB_AGING_TIME,
        "SAI_SWITCH_ATTR_FDB_AGING_TIME",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(0)),
];
