// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mirror session and tunnel attribute tables.
//!
//! The ERSPAN attributes of a mirror session are the densest use of the
//! condition machinery in the catalogue: all of them hang off
//! `TYPE == ENHANCED_REMOTE`.

use crate::meta::attr::{AttrFlags, AttrMetadata, Condition, ConditionValue, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

// Mirror session

pub const MIRROR_SESSION_ATTR_TYPE: AttrId = 0;
pub const MIRROR_SESSION_ATTR_MONITOR_PORT: AttrId = 1;
pub const MIRROR_SESSION_ATTR_TC: AttrId = 2;
pub const MIRROR_SESSION_ATTR_ERSPAN_ENCAPSULATION_TYPE: AttrId = 3;
pub const MIRROR_SESSION_ATTR_IPHDR_VERSION: AttrId = 4;
pub const MIRROR_SESSION_ATTR_TOS: AttrId = 5;
pub const MIRROR_SESSION_ATTR_TTL: AttrId = 6;
pub const MIRROR_SESSION_ATTR_SRC_IP_ADDRESS: AttrId = 7;
pub const MIRROR_SESSION_ATTR_DST_IP_ADDRESS: AttrId = 8;
pub const MIRROR_SESSION_ATTR_SRC_MAC_ADDRESS: AttrId = 9;
pub const MIRROR_SESSION_ATTR_DST_MAC_ADDRESS: AttrId = 10;
pub const MIRROR_SESSION_ATTR_GRE_PROTOCOL_TYPE: AttrId = 11;
pub const MIRROR_SESSION_ATTR_VLAN_ID: AttrId = 12;

static ERSPAN_CONDITIONS: &[Condition] = &[Condition {
    attr_id: MIRROR_SESSION_ATTR_TYPE,
    value: ConditionValue::Enum(enums::MIRROR_SESSION_TYPE_ENHANCED_REMOTE),
}];

const fn erspan_attr(attr_id: AttrId, name: &'static str, vt: ValueType) -> AttrMetadata {
    AttrMetadata::new(
        ObjectType::MirrorSession,
        attr_id,
        name,
        vt,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_conditions(ERSPAN_CONDITIONS)
}

pub static MIRROR_SESSION_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::MirrorSession,
        MIRROR_SESSION_ATTR_TYPE,
        "SAI_MIRROR_SESSION_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::MIRROR_SESSION_TYPE),
    AttrMetadata::new(
        ObjectType::MirrorSession,
        MIRROR_SESSION_ATTR_MONITOR_PORT,
        "SAI_MIRROR_SESSION_ATTR_MONITOR_PORT",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::Port]),
    AttrMetadata::new(
        ObjectType::MirrorSession,
        MIRROR_SESSION_ATTR_TC,
        "SAI_MIRROR_SESSION_ATTR_TC",
        ValueType::U8,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U8(0)),
    erspan_attr(
        MIRROR_SESSION_ATTR_ERSPAN_ENCAPSULATION_TYPE,
        "SAI_MIRROR_SESSION_ATTR_ERSPAN_ENCAPSULATION_TYPE",
        ValueType::I32,
    )
    .with_enum(&enums::ERSPAN_ENCAPSULATION_TYPE),
    erspan_attr(
        MIRROR_SESSION_ATTR_IPHDR_VERSION,
        "SAI_MIRROR_SESSION_ATTR_IPHDR_VERSION",
        ValueType::U8,
    ),
    erspan_attr(MIRROR_SESSION_ATTR_TOS, "SAI_MIRROR_SESSION_ATTR_TOS", ValueType::U8),
    AttrMetadata::new(
        ObjectType::MirrorSession,
        MIRROR_SESSION_ATTR_TTL,
        "SAI_MIRROR_SESSION_ATTR_TTL",
        ValueType::U8,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U8(255)),
    erspan_attr(
        MIRROR_SESSION_ATTR_SRC_IP_ADDRESS,
        "SAI_MIRROR_SESSION_ATTR_SRC_IP_ADDRESS",
        ValueType::IpAddress,
    ),
    erspan_attr(
        MIRROR_SESSION_ATTR_DST_IP_ADDRESS,
        "SAI_MIRROR_SESSION_ATTR_DST_IP_ADDRESS",
        ValueType::IpAddress,
    ),
    erspan_attr(
        MIRROR_SESSION_ATTR_SRC_MAC_ADDRESS,
        "SAI_MIRROR_SESSION_ATTR_SRC_MAC_ADDRESS",
        ValueType::Mac,
    ),
    erspan_attr(
        MIRROR_SESSION_ATTR_DST_MAC_ADDRESS,
        "SAI_MIRROR_SESSION_ATTR_DST_MAC_ADDRESS",
        ValueType::Mac,
    ),
    erspan_attr(
        MIRROR_SESSION_ATTR_GRE_PROTOCOL_TYPE,
        "SAI_MIRROR_SESSION_ATTR_GRE_PROTOCOL_TYPE",
        ValueType::U16,
    ),
    AttrMetadata::new(
        ObjectType::MirrorSession,
        MIRROR_SESSION_ATTR_VLAN_ID,
        "SAI_MIRROR_SESSION_ATTR_VLAN_ID",
        ValueType::U16,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U16(0)),
];

// Tunnel

pub const TUNNEL_ATTR_TYPE: AttrId = 0;
pub const TUNNEL_ATTR_UNDERLAY_INTERFACE: AttrId = 1;
pub const TUNNEL_ATTR_OVERLAY_INTERFACE: AttrId = 2;
pub const TUNNEL_ATTR_ENCAP_SRC_IP: AttrId = 3;
pub const TUNNEL_ATTR_ENCAP_TTL_VAL: AttrId = 4;
pub const TUNNEL_ATTR_ENCAP_MAPPERS: AttrId = 5;
pub const TUNNEL_ATTR_DECAP_MAPPERS: AttrId = 6;

static TUNNEL_IP_CONDITIONS: &[Condition] = &[
    Condition {
        attr_id: TUNNEL_ATTR_TYPE,
        value: ConditionValue::Enum(enums::TUNNEL_TYPE_IPINIP),
    },
    Condition {
        attr_id: TUNNEL_ATTR_TYPE,
        value: ConditionValue::Enum(enums::TUNNEL_TYPE_IPINIP_GRE),
    },
];

pub static TUNNEL_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_TYPE,
        "SAI_TUNNEL_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::TUNNEL_TYPE),
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_UNDERLAY_INTERFACE,
        "SAI_TUNNEL_ATTR_UNDERLAY_INTERFACE",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::RouterInterface])
    .with_conditions(TUNNEL_IP_CONDITIONS),
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_OVERLAY_INTERFACE,
        "SAI_TUNNEL_ATTR_OVERLAY_INTERFACE",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::RouterInterface])
    .with_conditions(TUNNEL_IP_CONDITIONS),
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_ENCAP_SRC_IP,
        "SAI_TUNNEL_ATTR_ENCAP_SRC_IP",
        ValueType::IpAddress,
        AttrFlags::CREATE_AND_SET,
    ),
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_ENCAP_TTL_VAL,
        "SAI_TUNNEL_ATTR_ENCAP_TTL_VAL",
        ValueType::U8,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U8(255)),
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_ENCAP_MAPPERS,
        "SAI_TUNNEL_ATTR_ENCAP_MAPPERS",
        ValueType::OidList,
        AttrFlags::CREATE_ONLY,
    )
    .with_allowed(&[ObjectType::TunnelMap])
    .with_default(DefaultValue::EmptyList),
    AttrMetadata::new(
        ObjectType::Tunnel,
        TUNNEL_ATTR_DECAP_MAPPERS,
        "SAI_TUNNEL_ATTR_DECAP_MAPPERS",
        ValueType::OidList,
        AttrFlags::CREATE_ONLY,
    )
    .with_allowed(&[ObjectType::TunnelMap])
    .with_default(DefaultValue::EmptyList),
];

// Tunnel map

pub const TUNNEL_MAP_ATTR_TYPE: AttrId = 0;
pub const TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST: AttrId = 1;

pub static TUNNEL_MAP_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::TunnelMap,
        TUNNEL_MAP_ATTR_TYPE,
        "SAI_TUNNEL_MAP_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::TUNNEL_MAP_TYPE),
    AttrMetadata::new(
        ObjectType::TunnelMap,
        TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST,
        "SAI_TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST",
        ValueType::TunnelMapList,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    ),
];
