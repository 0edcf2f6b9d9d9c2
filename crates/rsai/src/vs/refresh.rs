// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read-only recalculation.
//!
//! Before a read-only attribute is copied out, it may have to be derived
//! from other objects: a bridge's port list is the set of bridge ports
//! referencing it (ordered like the switch port list), a VLAN's member
//! list is the set of members referencing it. Queue, priority-group and
//! scheduler-group lists are recorded once at switch create and the
//! topology never changes afterwards, so their refresh is a no-op.
//! Everything else is `NOT_IMPLEMENTED`; callers treat the absence of a
//! refresh as "stale read acceptable".

use crate::codec::deserialize_oid;
use crate::meta::tables::{
    BRIDGE_ATTR_PORT_LIST, BRIDGE_PORT_ATTR_BRIDGE_ID, BRIDGE_PORT_ATTR_PORT_ID,
    SCHEDULER_GROUP_ATTR_CHILD_COUNT, SCHEDULER_GROUP_ATTR_CHILD_LIST, VLAN_ATTR_MEMBER_LIST,
    VLAN_MEMBER_ATTR_VLAN_ID,
};
use crate::meta::AttrMetadata;
use crate::types::{Attr, AttrValue, ObjectType, Oid, SaiError, SaiResult, ValueList};
use crate::vs::VirtualSwitch;

/// Bridge ports pointing at this bridge, ordered by their port's position
/// in the switch port list.
fn refresh_bridge_port_list(
    vs: &mut VirtualSwitch,
    bridge_id: Oid,
    switch_id: Oid,
) -> SaiResult<()> {
    let bridge_id_name = crate::meta::attr_metadata(
        ObjectType::BridgePort,
        BRIDGE_PORT_ATTR_BRIDGE_ID,
    )
    .map(|md| md.name)
    .unwrap_or_default();

    let port_id_name =
        crate::meta::attr_metadata(ObjectType::BridgePort, BRIDGE_PORT_ATTR_PORT_ID)
            .map(|md| md.name)
            .unwrap_or_default();

    // bridge ports belonging to this bridge, with their port id
    let mut on_bridge: Vec<(Oid, Oid)> = Vec::new();

    for (key, attrs) in vs.objects_of_type(switch_id, ObjectType::BridgePort) {
        let Some(bid) = attrs.get(bridge_id_name).and_then(|a| a.value.as_oid()) else {
            continue;
        };

        if bid != bridge_id {
            continue;
        }

        let bridge_port = deserialize_oid(key)?;

        let Some(port) = attrs.get(port_id_name).and_then(|a| a.value.as_oid()) else {
            log::error!("bridge port {} is missing {}", bridge_port, port_id_name);
            return Err(SaiError::NotImplemented);
        };

        on_bridge.push((bridge_port, port));
    }

    // order by the switch port list to stay consistent across reads
    let port_order: Vec<Oid> = match vs.stored_attr(
        switch_id,
        ObjectType::Switch,
        switch_id,
        "SAI_SWITCH_ATTR_PORT_LIST",
    ) {
        Some(Attr { value: AttrValue::OidList(list), .. }) => list.iter().copied().collect(),
        _ => Vec::new(),
    };

    let mut bridge_ports: Vec<Oid> = Vec::new();

    for port in &port_order {
        for (bridge_port, bp_port) in &on_bridge {
            if bp_port == port {
                bridge_ports.push(*bridge_port);
            }
        }
    }

    if bridge_ports.len() != on_bridge.len() {
        log::error!(
            "filter by port id failed, list sizes differ: {} vs {}",
            on_bridge.len(),
            bridge_ports.len()
        );
        return Err(SaiError::Failure);
    }

    log::info!("recalculated bridge port list: {}", bridge_ports.len());

    let attr = Attr::new(BRIDGE_ATTR_PORT_LIST, AttrValue::OidList(ValueList::new(bridge_ports)));
    vs.set_internal(ObjectType::Bridge, bridge_id, &attr)
}

/// VLAN members pointing at this VLAN.
fn refresh_vlan_member_list(
    vs: &mut VirtualSwitch,
    vlan_id: Oid,
    switch_id: Oid,
) -> SaiResult<()> {
    let vlan_id_name =
        crate::meta::attr_metadata(ObjectType::VlanMember, VLAN_MEMBER_ATTR_VLAN_ID)
            .map(|md| md.name)
            .unwrap_or_default();

    let mut members: Vec<Oid> = Vec::new();

    for (key, attrs) in vs.objects_of_type(switch_id, ObjectType::VlanMember) {
        let Some(vid) = attrs.get(vlan_id_name).and_then(|a| a.value.as_oid()) else {
            continue;
        };

        if vid != vlan_id {
            continue;
        }

        members.push(deserialize_oid(key)?);
    }

    members.sort();

    log::info!("recalculated vlan member list: {}", members.len());

    let attr = Attr::new(VLAN_ATTR_MEMBER_LIST, AttrValue::OidList(ValueList::new(members)));
    vs.set_internal(ObjectType::Vlan, vlan_id, &attr)
}

/// Profile-specific recalculation entry point. Both shipped profiles
/// derive the same attributes; what differs between them is the topology
/// recorded at create time.
pub fn refresh_read_only(
    vs: &mut VirtualSwitch,
    md: &'static AttrMetadata,
    object_id: Oid,
    switch_id: Oid,
) -> SaiResult<()> {
    match md.object_type {
        // recorded at switch create; topology is static afterwards
        ObjectType::Switch => Ok(()),

        ObjectType::Port => Ok(()),

        ObjectType::SchedulerGroup
            if md.attr_id == SCHEDULER_GROUP_ATTR_CHILD_COUNT
                || md.attr_id == SCHEDULER_GROUP_ATTR_CHILD_LIST =>
        {
            Ok(())
        }

        ObjectType::Bridge if md.attr_id == BRIDGE_ATTR_PORT_LIST => {
            refresh_bridge_port_list(vs, object_id, switch_id)
        }

        ObjectType::Vlan if md.attr_id == VLAN_ATTR_MEMBER_LIST => {
            refresh_vlan_member_list(vs, object_id, switch_id)
        }

        _ => {
            log::warn!("need to recalculate read-only attribute: {}", md.name);
            Err(SaiError::NotImplemented)
        }
    }
}
