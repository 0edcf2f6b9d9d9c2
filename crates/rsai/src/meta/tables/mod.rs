// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Static attribute tables, one module per object family, assembled into
//! the [`ObjectTypeInfo`] catalogue consumed by the registry.

mod acl;
mod buffer;
mod entries;
mod l2;
mod l3;
mod mirror_tunnel;
mod port;
mod qos;
mod switchobj;

pub use acl::*;
pub use buffer::*;
pub use entries::*;
pub use l2::*;
pub use l3::*;
pub use mirror_tunnel::*;
pub use port::*;
pub use qos::*;
pub use switchobj::*;

use crate::meta::object::ObjectTypeInfo;
use crate::types::ObjectType;

const fn oid_info(
    object_type: ObjectType,
    attrs: &'static [crate::meta::attr::AttrMetadata],
) -> ObjectTypeInfo {
    ObjectTypeInfo { object_type, is_non_object_id: false, attrs, struct_members: &[] }
}

/// The full catalogue, ordered as [`crate::types::ALL_OBJECT_TYPES`].
pub static OBJECT_TYPE_INFOS: &[ObjectTypeInfo] = &[
    oid_info(ObjectType::Port, PORT_ATTRS),
    oid_info(ObjectType::Vlan, VLAN_ATTRS),
    oid_info(ObjectType::VlanMember, VLAN_MEMBER_ATTRS),
    oid_info(ObjectType::Bridge, BRIDGE_ATTRS),
    oid_info(ObjectType::BridgePort, BRIDGE_PORT_ATTRS),
    oid_info(ObjectType::VirtualRouter, VIRTUAL_ROUTER_ATTRS),
    oid_info(ObjectType::RouterInterface, ROUTER_INTERFACE_ATTRS),
    oid_info(ObjectType::NextHop, NEXT_HOP_ATTRS),
    oid_info(ObjectType::Stp, STP_ATTRS),
    oid_info(ObjectType::HostifTrapGroup, HOSTIF_TRAP_GROUP_ATTRS),
    oid_info(ObjectType::Policer, POLICER_ATTRS),
    oid_info(ObjectType::Queue, QUEUE_ATTRS),
    oid_info(ObjectType::IngressPriorityGroup, INGRESS_PRIORITY_GROUP_ATTRS),
    oid_info(ObjectType::Scheduler, SCHEDULER_ATTRS),
    oid_info(ObjectType::SchedulerGroup, SCHEDULER_GROUP_ATTRS),
    oid_info(ObjectType::BufferPool, BUFFER_POOL_ATTRS),
    oid_info(ObjectType::BufferProfile, BUFFER_PROFILE_ATTRS),
    oid_info(ObjectType::Wred, WRED_ATTRS),
    oid_info(ObjectType::QosMap, QOS_MAP_ATTRS),
    oid_info(ObjectType::AclTable, ACL_TABLE_ATTRS),
    oid_info(ObjectType::AclEntry, ACL_ENTRY_ATTRS),
    oid_info(ObjectType::AclRange, ACL_RANGE_ATTRS),
    oid_info(ObjectType::MirrorSession, MIRROR_SESSION_ATTRS),
    oid_info(ObjectType::Tunnel, TUNNEL_ATTRS),
    oid_info(ObjectType::TunnelMap, TUNNEL_MAP_ATTRS),
    ObjectTypeInfo {
        object_type: ObjectType::FdbEntry,
        is_non_object_id: true,
        attrs: FDB_ENTRY_ATTRS,
        struct_members: FDB_ENTRY_MEMBERS,
    },
    ObjectTypeInfo {
        object_type: ObjectType::NeighborEntry,
        is_non_object_id: true,
        attrs: NEIGHBOR_ENTRY_ATTRS,
        struct_members: NEIGHBOR_ENTRY_MEMBERS,
    },
    ObjectTypeInfo {
        object_type: ObjectType::RouteEntry,
        is_non_object_id: true,
        attrs: ROUTE_ENTRY_ATTRS,
        struct_members: ROUTE_ENTRY_MEMBERS,
    },
    oid_info(ObjectType::Switch, SWITCH_ATTRS),
];
