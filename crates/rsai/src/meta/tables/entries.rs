// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Struct-keyed object tables: FDB entry, neighbor entry, route entry.
//!
//! These are the non-object-id leaves. Besides their attribute tables
//! they carry struct member descriptors so generic code can reach into
//! the key tuple (switch extraction, member liveness checks).

use crate::meta::attr::{AttrFlags, AttrMetadata, DefaultValue};
use crate::meta::enums;
use crate::meta::object::StructMemberInfo;
use crate::types::{AttrId, MetaKey, ObjectKey, ObjectType, Oid, ValueType};

// FDB entry

pub const FDB_ENTRY_ATTR_TYPE: AttrId = 0;
pub const FDB_ENTRY_ATTR_PORT_ID: AttrId = 1;
pub const FDB_ENTRY_ATTR_PACKET_ACTION: AttrId = 2;

pub static FDB_ENTRY_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::FdbEntry,
        FDB_ENTRY_ATTR_TYPE,
        "SAI_FDB_ENTRY_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    )
    .with_enum(&enums::FDB_ENTRY_TYPE),
    AttrMetadata::new(
        ObjectType::FdbEntry,
        FDB_ENTRY_ATTR_PORT_ID,
        "SAI_FDB_ENTRY_ATTR_PORT_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    )
    .with_allowed(&[ObjectType::BridgePort]),
    AttrMetadata::new(
        ObjectType::FdbEntry,
        FDB_ENTRY_ATTR_PACKET_ACTION,
        "SAI_FDB_ENTRY_ATTR_PACKET_ACTION",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::PACKET_ACTION)
    .with_default(DefaultValue::I32(enums::PACKET_ACTION_FORWARD)),
];

fn fdb_switch_id(key: &MetaKey) -> Oid {
    match key.key {
        ObjectKey::Fdb(e) => e.switch_id,
        _ => Oid::NULL,
    }
}

fn fdb_bridge_id(key: &MetaKey) -> Oid {
    match key.key {
        ObjectKey::Fdb(e) => e.bridge_id,
        _ => Oid::NULL,
    }
}

pub static FDB_ENTRY_MEMBERS: &[StructMemberInfo] = &[
    StructMemberInfo {
        name: "switch_id",
        value_type: ValueType::Oid,
        allowed_object_types: &[ObjectType::Switch],
        get_oid: Some(fdb_switch_id),
    },
    StructMemberInfo {
        name: "mac",
        value_type: ValueType::Mac,
        allowed_object_types: &[],
        get_oid: None,
    },
    StructMemberInfo {
        name: "vlan",
        value_type: ValueType::U16,
        allowed_object_types: &[],
        get_oid: None,
    },
    StructMemberInfo {
        name: "bridge_type",
        value_type: ValueType::I32,
        allowed_object_types: &[],
        get_oid: None,
    },
    StructMemberInfo {
        name: "bridge_id",
        value_type: ValueType::Oid,
        allowed_object_types: &[ObjectType::Bridge],
        get_oid: Some(fdb_bridge_id),
    },
];

// Neighbor entry

pub const NEIGHBOR_ENTRY_ATTR_DST_MAC_ADDRESS: AttrId = 0;
pub const NEIGHBOR_ENTRY_ATTR_PACKET_ACTION: AttrId = 1;
pub const NEIGHBOR_ENTRY_ATTR_NO_HOST_ROUTE: AttrId = 2;

pub static NEIGHBOR_ENTRY_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::NeighborEntry,
        NEIGHBOR_ENTRY_ATTR_DST_MAC_ADDRESS,
        "SAI_NEIGHBOR_ENTRY_ATTR_DST_MAC_ADDRESS",
        ValueType::Mac,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
    AttrMetadata::new(
        ObjectType::NeighborEntry,
        NEIGHBOR_ENTRY_ATTR_PACKET_ACTION,
        "SAI_NEIGHBOR_ENTRY_ATTR_PACKET_ACTION",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::PACKET_ACTION)
    .with_default(DefaultValue::I32(enums::PACKET_ACTION_FORWARD)),
    AttrMetadata::new(
        ObjectType::NeighborEntry,
        NEIGHBOR_ENTRY_ATTR_NO_HOST_ROUTE,
        "SAI_NEIGHBOR_ENTRY_ATTR_NO_HOST_ROUTE",
        ValueType::Bool,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::Bool(false)),
];

fn neighbor_switch_id(key: &MetaKey) -> Oid {
    match key.key {
        ObjectKey::Neighbor(e) => e.switch_id,
        _ => Oid::NULL,
    }
}

fn neighbor_rif_id(key: &MetaKey) -> Oid {
    match key.key {
        ObjectKey::Neighbor(e) => e.rif_id,
        _ => Oid::NULL,
    }
}

pub static NEIGHBOR_ENTRY_MEMBERS: &[StructMemberInfo] = &[
    StructMemberInfo {
        name: "switch_id",
        value_type: ValueType::Oid,
        allowed_object_types: &[ObjectType::Switch],
        get_oid: Some(neighbor_switch_id),
    },
    StructMemberInfo {
        name: "rif",
        value_type: ValueType::Oid,
        allowed_object_types: &[ObjectType::RouterInterface],
        get_oid: Some(neighbor_rif_id),
    },
    StructMemberInfo {
        name: "ip",
        value_type: ValueType::IpAddress,
        allowed_object_types: &[],
        get_oid: None,
    },
];

// Route entry

pub const ROUTE_ENTRY_ATTR_PACKET_ACTION: AttrId = 0;
pub const ROUTE_ENTRY_ATTR_NEXT_HOP_ID: AttrId = 1;

pub static ROUTE_ENTRY_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::RouteEntry,
        ROUTE_ENTRY_ATTR_PACKET_ACTION,
        "SAI_ROUTE_ENTRY_ATTR_PACKET_ACTION",
        ValueType::I32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_enum(&enums::PACKET_ACTION)
    .with_default(DefaultValue::I32(enums::PACKET_ACTION_FORWARD)),
    AttrMetadata::new(
        ObjectType::RouteEntry,
        ROUTE_ENTRY_ATTR_NEXT_HOP_ID,
        "SAI_ROUTE_ENTRY_ATTR_NEXT_HOP_ID",
        ValueType::Oid,
        AttrFlags::CREATE_AND_SET,
    )
    .with_allowed(&[ObjectType::NextHop, ObjectType::Port])
    .allow_null()
    .with_default(DefaultValue::NullOid),
];

fn route_switch_id(key: &MetaKey) -> Oid {
    match key.key {
        ObjectKey::Route(e) => e.switch_id,
        _ => Oid::NULL,
    }
}

fn route_vr_id(key: &MetaKey) -> Oid {
    match key.key {
        ObjectKey::Route(e) => e.vr_id,
        _ => Oid::NULL,
    }
}

pub static ROUTE_ENTRY_MEMBERS: &[StructMemberInfo] = &[
    StructMemberInfo {
        name: "switch_id",
        value_type: ValueType::Oid,
        allowed_object_types: &[ObjectType::Switch],
        get_oid: Some(route_switch_id),
    },
    StructMemberInfo {
        name: "vr",
        value_type: ValueType::Oid,
        allowed_object_types: &[ObjectType::VirtualRouter],
        get_oid: Some(route_vr_id),
    },
    StructMemberInfo {
        name: "dest",
        value_type: ValueType::IpPrefix,
        allowed_object_types: &[],
        get_oid: None,
    },
];
