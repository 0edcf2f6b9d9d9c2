// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Port attribute table.
//!
//! `HW_LANE_LIST` is the only KEY-flagged attribute in the catalogue: two
//! ports on the same switch may not claim the same lane set.

use crate::meta::attr::{AttrFlags, AttrMetadata, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

pub const PORT_ATTR_TYPE: AttrId = 0;
pub const PORT_ATTR_HW_LANE_LIST: AttrId = 1;
pub const PORT_ATTR_SPEED: AttrId = 2;
pub const PORT_ATTR_ADMIN_STATE: AttrId = 3;
pub const PORT_ATTR_QOS_NUMBER_OF_QUEUES: AttrId = 4;
pub const PORT_ATTR_QOS_QUEUE_LIST: AttrId = 5;
pub const PORT_ATTR_NUMBER_OF_INGRESS_PRIORITY_GROUPS: AttrId = 6;
pub const PORT_ATTR_INGRESS_PRIORITY_GROUP_LIST: AttrId = 7;
pub const PORT_ATTR_QOS_NUMBER_OF_SCHEDULER_GROUPS: AttrId = 8;
pub const PORT_ATTR_QOS_SCHEDULER_GROUP_LIST: AttrId = 9;
pub const PORT_ATTR_MTU: AttrId = 10;
pub const PORT_ATTR_PORT_VLAN_ID: AttrId = 11;

pub static PORT_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_TYPE,
        "SAI_PORT_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::READ_ONLY,
    )
    .with_enum(&enums::PORT_TYPE),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_HW_LANE_LIST,
        "SAI_PORT_ATTR_HW_LANE_LIST",
        ValueType::U32List,
        AttrFlags::MANDATORY_ON_CREATE
            .with(AttrFlags::CREATE_ONLY)
            .with(AttrFlags::KEY),
    ),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_SPEED,
        "SAI_PORT_ATTR_SPEED",
        ValueType::U32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_ADMIN_STATE,
        "SAI_PORT_ATTR_ADMIN_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(false)),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_QOS_NUMBER_OF_QUEUES,
        "SAI_PORT_ATTR_QOS_NUMBER_OF_QUEUES",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_QOS_QUEUE_LIST,
        "SAI_PORT_ATTR_QOS_QUEUE_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Queue]),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_NUMBER_OF_INGRESS_PRIORITY_GROUPS,
        "SAI_PORT_ATTR_NUMBER_OF_INGRESS_PRIORITY_GROUPS",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_INGRESS_PRIORITY_GROUP_LIST,
        "SAI_PORT_ATTR_INGRESS_PRIORITY_GROUP_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::IngressPriorityGroup]),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_QOS_NUMBER_OF_SCHEDULER_GROUPS,
        "SAI_PORT_ATTR_QOS_NUMBER_OF_SCHEDULER_GROUPS",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_QOS_SCHEDULER_GROUP_LIST,
        "SAI_PORT_ATTR_QOS_SCHEDULER_GROUP_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::SchedulerGroup]),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_MTU,
        "SAI_PORT_ATTR_MTU",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(1514)),
    AttrMetadata::new(
        ObjectType::Port,
        PORT_ATTR_PORT_VLAN_ID,
        "SAI_PORT_ATTR_PORT_VLAN_ID",
        ValueType::U16,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U16(1)),
];
