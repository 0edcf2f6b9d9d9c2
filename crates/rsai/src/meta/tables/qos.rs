// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! QoS attribute tables: trap group, policer, queue, ingress priority
//! group, scheduler, scheduler group, WRED, QoS map.

use crate::meta::attr::{AttrFlags, AttrMetadata, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

// Hostif trap group

pub const HOSTIF_TRAP_GROUP_ATTR_ADMIN_STATE: AttrId = 0;
pub const HOSTIF_TRAP_GROUP_ATTR_QUEUE: AttrId = 1;
pub const HOSTIF_TRAP_GROUP_ATTR_POLICER: AttrId = 2;

pub static HOSTIF_TRAP_GROUP_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::HostifTrapGroup,
        HOSTIF_TRAP_GROUP_ATTR_ADMIN_STATE,
        "SAI_HOSTIF_TRAP_GROUP_ATTR_ADMIN_STATE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(true)),
    AttrMetadata::new(
        ObjectType::HostifTrapGroup,
        HOSTIF_TRAP_GROUP_ATTR_QUEUE,
        "SAI_HOSTIF_TRAP_GROUP_ATTR_QUEUE",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(0)),
    AttrMetadata::new(
        ObjectType::HostifTrapGroup,
        HOSTIF_TRAP_GROUP_ATTR_POLICER,
        "SAI_HOSTIF_TRAP_GROUP_ATTR_POLICER",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Policer])
    .allow_null()
    .with_default(DefaultValue::NullOid),
];

// Policer

pub const POLICER_ATTR_METER_TYPE: AttrId = 0;
pub const POLICER_ATTR_MODE: AttrId = 1;
pub const POLICER_ATTR_CBS: AttrId = 2;
pub const POLICER_ATTR_CIR: AttrId = 3;

pub static POLICER_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Policer,
        POLICER_ATTR_METER_TYPE,
        "SAI_POLICER_ATTR_METER_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::METER_TYPE),
    AttrMetadata::new(
        ObjectType::Policer,
        POLICER_ATTR_MODE,
        "SAI_POLICER_ATTR_MODE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::POLICER_MODE),
    AttrMetadata::new(
        ObjectType::Policer,
        POLICER_ATTR_CBS,
        "SAI_POLICER_ATTR_CBS",
        ValueType::U64,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U64(0)),
    AttrMetadata::new(
        ObjectType::Policer,
        POLICER_ATTR_CIR,
        "SAI_POLICER_ATTR_CIR",
        ValueType::U64,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U64(0)),
];

// Queue

pub const QUEUE_ATTR_TYPE: AttrId = 0;
pub const QUEUE_ATTR_INDEX: AttrId = 1;
pub const QUEUE_ATTR_WRED_PROFILE_ID: AttrId = 2;
pub const QUEUE_ATTR_BUFFER_PROFILE_ID: AttrId = 3;
pub const QUEUE_ATTR_SCHEDULER_PROFILE_ID: AttrId = 4;

pub static QUEUE_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Queue,
        QUEUE_ATTR_TYPE,
        "SAI_QUEUE_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::CREATE_ONLY,
    )
    .with_enum(&enums::QUEUE_TYPE)
    .with_default(DefaultValue::I32(enums::QUEUE_TYPE_ALL)),
    AttrMetadata::new(
        ObjectType::Queue,
        QUEUE_ATTR_INDEX,
        "SAI_QUEUE_ATTR_INDEX",
        ValueType::U8,
        AttrFlags::CREATE_ONLY,
    )
    .with_default(DefaultValue::U8(0)),
    AttrMetadata::new(
        ObjectType::Queue,
        QUEUE_ATTR_WRED_PROFILE_ID,
        "SAI_QUEUE_ATTR_WRED_PROFILE_ID",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Wred])
    .allow_null()
    .with_default(DefaultValue::NullOid),
    AttrMetadata::new(
        ObjectType::Queue,
        QUEUE_ATTR_BUFFER_PROFILE_ID,
        "SAI_QUEUE_ATTR_BUFFER_PROFILE_ID",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::BufferProfile])
    .allow_null()
    .with_default(DefaultValue::NullOid),
    AttrMetadata::new(
        ObjectType::Queue,
        QUEUE_ATTR_SCHEDULER_PROFILE_ID,
        "SAI_QUEUE_ATTR_SCHEDULER_PROFILE_ID",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Scheduler])
    .allow_null()
    .with_default(DefaultValue::NullOid),
];

// Ingress priority group

pub const INGRESS_PRIORITY_GROUP_ATTR_BUFFER_PROFILE: AttrId = 0;
pub const INGRESS_PRIORITY_GROUP_ATTR_INDEX: AttrId = 1;

pub static INGRESS_PRIORITY_GROUP_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::IngressPriorityGroup,
        INGRESS_PRIORITY_GROUP_ATTR_BUFFER_PROFILE,
        "SAI_INGRESS_PRIORITY_GROUP_ATTR_BUFFER_PROFILE",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::BufferProfile])
    .allow_null()
    .with_default(DefaultValue::NullOid),
    AttrMetadata::new(
        ObjectType::IngressPriorityGroup,
        INGRESS_PRIORITY_GROUP_ATTR_INDEX,
        "SAI_INGRESS_PRIORITY_GROUP_ATTR_INDEX",
        ValueType::U8,
        AttrFlags::CREATE_ONLY,
    )
    .with_default(DefaultValue::U8(0)),
];

// Scheduler

pub const SCHEDULER_ATTR_SCHEDULING_TYPE: AttrId = 0;
pub const SCHEDULER_ATTR_SCHEDULING_WEIGHT: AttrId = 1;
pub const SCHEDULER_ATTR_MIN_BANDWIDTH_RATE: AttrId = 2;
pub const SCHEDULER_ATTR_MAX_BANDWIDTH_RATE: AttrId = 3;

pub static SCHEDULER_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Scheduler,
        SCHEDULER_ATTR_SCHEDULING_TYPE,
        "SAI_SCHEDULER_ATTR_SCHEDULING_TYPE",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::SCHEDULING_TYPE)
    .with_default(DefaultValue::I32(enums::SCHEDULING_TYPE_DWRR)),
    AttrMetadata::new(
        ObjectType::Scheduler,
        SCHEDULER_ATTR_SCHEDULING_WEIGHT,
        "SAI_SCHEDULER_ATTR_SCHEDULING_WEIGHT",
        ValueType::U8,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U8(1)),
    AttrMetadata::new(
        ObjectType::Scheduler,
        SCHEDULER_ATTR_MIN_BANDWIDTH_RATE,
        "SAI_SCHEDULER_ATTR_MIN_BANDWIDTH_RATE",
        ValueType::U64,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U64(0)),
    AttrMetadata::new(
        ObjectType::Scheduler,
        SCHEDULER_ATTR_MAX_BANDWIDTH_RATE,
        "SAI_SCHEDULER_ATTR_MAX_BANDWIDTH_RATE",
        ValueType::U64,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U64(0)),
];

// Scheduler group

pub const SCHEDULER_GROUP_ATTR_CHILD_COUNT: AttrId = 0;
pub const SCHEDULER_GROUP_ATTR_CHILD_LIST: AttrId = 1;
pub const SCHEDULER_GROUP_ATTR_PORT_ID: AttrId = 2;
pub const SCHEDULER_GROUP_ATTR_LEVEL: AttrId = 3;
pub const SCHEDULER_GROUP_ATTR_SCHEDULER_PROFILE_ID: AttrId = 4;

pub static SCHEDULER_GROUP_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::SchedulerGroup,
        SCHEDULER_GROUP_ATTR_CHILD_COUNT,
        "SAI_SCHEDULER_GROUP_ATTR_CHILD_COUNT",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::SchedulerGroup,
        SCHEDULER_GROUP_ATTR_CHILD_LIST,
        "SAI_SCHEDULER_GROUP_ATTR_CHILD_LIST",
        ValueType::OidList,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::SchedulerGroup, ObjectType::Queue]),
    AttrMetadata::new(
        ObjectType::SchedulerGroup,
        SCHEDULER_GROUP_ATTR_PORT_ID,
        "SAI_SCHEDULER_GROUP_ATTR_PORT_ID",
        ValueType::Oid,
        AttrFlags::READ_ONLY,
    )
    .with_allowed(&[ObjectType::Port]),
    AttrMetadata::new(
        ObjectType::SchedulerGroup,
        SCHEDULER_GROUP_ATTR_LEVEL,
        "SAI_SCHEDULER_GROUP_ATTR_LEVEL",
        ValueType::U8,
        AttrFlags::CREATE_ONLY,
    )
    .with_default(DefaultValue::U8(0)),
    // NOTE null is forbidden here by metadata, but pre-set carries a named
    // workaround that still accepts it (see check::set).
    AttrMetadata::new(
        ObjectType::SchedulerGroup,
        SCHEDULER_GROUP_ATTR_SCHEDULER_PROFILE_ID,
        "SAI_SCHEDULER_GROUP_ATTR_SCHEDULER_PROFILE_ID",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::Scheduler])
    .with_default(DefaultValue::NullOid),
];

// WRED

pub const WRED_ATTR_GREEN_ENABLE: AttrId = 0;
pub const WRED_ATTR_GREEN_MIN_THRESHOLD: AttrId = 1;
pub const WRED_ATTR_GREEN_MAX_THRESHOLD: AttrId = 2;
pub const WRED_ATTR_GREEN_DROP_PROBABILITY: AttrId = 3;
pub const WRED_ATTR_YELLOW_ENABLE: AttrId = 4;
pub const WRED_ATTR_YELLOW_MIN_THRESHOLD: AttrId = 5;
pub const WRED_ATTR_YELLOW_MAX_THRESHOLD: AttrId = 6;
pub const WRED_ATTR_YELLOW_DROP_PROBABILITY: AttrId = 7;
pub const WRED_ATTR_RED_ENABLE: AttrId = 8;
pub const WRED_ATTR_RED_MIN_THRESHOLD: AttrId = 9;
pub const WRED_ATTR_RED_MAX_THRESHOLD: AttrId = 10;
pub const WRED_ATTR_RED_DROP_PROBABILITY: AttrId = 11;
pub const WRED_ATTR_WEIGHT: AttrId = 12;
pub const WRED_ATTR_ECN_MARK_MODE: AttrId = 13;

pub static WRED_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_GREEN_ENABLE,
        "SAI_WRED_ATTR_GREEN_ENABLE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(false)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_GREEN_MIN_THRESHOLD,
        "SAI_WRED_ATTR_GREEN_MIN_THRESHOLD",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_GREEN_MAX_THRESHOLD,
        "SAI_WRED_ATTR_GREEN_MAX_THRESHOLD",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_GREEN_DROP_PROBABILITY,
        "SAI_WRED_ATTR_GREEN_DROP_PROBABILITY",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(100)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_YELLOW_ENABLE,
        "SAI_WRED_ATTR_YELLOW_ENABLE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(false)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_YELLOW_MIN_THRESHOLD,
        "SAI_WRED_ATTR_YELLOW_MIN_THRESHOLD",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_YELLOW_MAX_THRESHOLD,
        "SAI_WRED_ATTR_YELLOW_MAX_THRESHOLD",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_YELLOW_DROP_PROBABILITY,
        "SAI_WRED_ATTR_YELLOW_DROP_PROBABILITY",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(100)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_RED_ENABLE,
        "SAI_WRED_ATTR_RED_ENABLE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(false)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_RED_MIN_THRESHOLD,
        "SAI_WRED_ATTR_RED_MIN_THRESHOLD",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_RED_MAX_THRESHOLD,
        "SAI_WRED_ATTR_RED_MAX_THRESHOLD",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_RED_DROP_PROBABILITY,
        "SAI_WRED_ATTR_RED_DROP_PROBABILITY",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(100)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_WEIGHT,
        "SAI_WRED_ATTR_WEIGHT",
        ValueType::U8,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U8(0)),
    AttrMetadata::new(
        ObjectType::Wred,
        WRED_ATTR_ECN_MARK_MODE,
        "SAI_WRED_ATTR_ECN_MARK_MODE",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::ECN_MARK_MODE)
    .with_default(DefaultValue::I32(enums::ECN_MARK_MODE_NONE)),
];

// QoS map

pub const QOS_MAP_ATTR_TYPE: AttrId = 0;
pub const QOS_MAP_ATTR_MAP_TO_VALUE_LIST: AttrId = 1;

pub static QOS_MAP_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::QosMap,
        QOS_MAP_ATTR_TYPE,
        "SAI_QOS_MAP_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::QOS_MAP_TYPE),
    AttrMetadata::new(
        ObjectType::QosMap,
        QOS_MAP_ATTR_MAP_TO_VALUE_LIST,
        "SAI_QOS_MAP_ATTR_MAP_TO_VALUE_LIST",
        ValueType::QosMapList,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
];
