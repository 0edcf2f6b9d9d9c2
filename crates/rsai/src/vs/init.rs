// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Default-topology machinery shared by the switch profiles.
//!
//! The default objects are created through the validated entry points, so
//! initializing a switch exercises the same pipeline a client does. Only
//! derived read-only attributes (port lists, default object handles,
//! queue and scheduler lists) are recorded driver-side, where the
//! validator later discovers them by snooping gets.

use crate::meta::{enums, tables};
use crate::types::{Attr, AttrValue, Mac, ObjectType, Oid, SaiResult, ValueList};

/// Surface the profile initializers drive: the validated create/set/get
/// pipeline plus the driver-internal write for derived read-only
/// attributes.
pub trait InitContext {
    fn create(&mut self, object_type: ObjectType, switch_id: Oid, attrs: &[Attr])
        -> SaiResult<Oid>;

    fn set(&mut self, object_type: ObjectType, oid: Oid, attr: &Attr) -> SaiResult<()>;

    fn get(&mut self, object_type: ObjectType, oid: Oid, attrs: &mut [Attr]) -> SaiResult<()>;

    /// Driver-side write, bypassing validation; read-only attributes only.
    fn set_internal(&mut self, object_type: ObjectType, oid: Oid, attr: &Attr) -> SaiResult<()>;
}

/// Static shape of a profile's default topology.
pub(crate) struct Topology {
    /// 128 hardware lanes, four per port, in front-panel order.
    pub lanes: &'static [u32],
    pub port_count: u32,
    pub port_speed: u32,
    pub queues_per_port: u32,
    pub pgs_per_port: u32,
    pub sgs_per_port: u32,
}

fn set_switch_mac_address(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    log::info!("set switch src mac address");

    let attr = Attr::new(
        tables::SWITCH_ATTR_SRC_MAC_ADDRESS,
        AttrValue::Mac(Mac([0x11, 0x22, 0x33, 0x44, 0x55, 0x66])),
    );
    ctx.set(ObjectType::Switch, switch_id, &attr)
}

fn create_cpu_port(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<Oid> {
    log::info!("create cpu port");

    let cpu_port = ctx.create(
        ObjectType::Port,
        switch_id,
        &[
            Attr::new(tables::PORT_ATTR_HW_LANE_LIST, AttrValue::U32List(ValueList::new(vec![0]))),
            Attr::new(tables::PORT_ATTR_SPEED, AttrValue::U32(0)),
        ],
    )?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_CPU_PORT, AttrValue::Oid(cpu_port)),
    )?;

    ctx.set_internal(
        ObjectType::Port,
        cpu_port,
        &Attr::new(tables::PORT_ATTR_TYPE, AttrValue::I32(enums::PORT_TYPE_CPU)),
    )?;

    Ok(cpu_port)
}

fn create_default_vlan(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<Oid> {
    log::info!("create default vlan");

    let vlan = ctx.create(
        ObjectType::Vlan,
        switch_id,
        &[Attr::new(tables::VLAN_ATTR_VLAN_ID, AttrValue::U16(1))],
    )?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_DEFAULT_VLAN_ID, AttrValue::Oid(vlan)),
    )?;

    Ok(vlan)
}

fn create_default_virtual_router(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    log::info!("create default virtual router");

    let vr = ctx.create(ObjectType::VirtualRouter, switch_id, &[])?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_DEFAULT_VIRTUAL_ROUTER_ID, AttrValue::Oid(vr)),
    )
}

fn create_default_stp_instance(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    log::info!("create default stp instance");

    let stp = ctx.create(ObjectType::Stp, switch_id, &[])?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_DEFAULT_STP_INST_ID, AttrValue::Oid(stp)),
    )
}

fn create_default_1q_bridge(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<Oid> {
    log::info!("create default 1q bridge");

    let bridge = ctx.create(
        ObjectType::Bridge,
        switch_id,
        &[Attr::new(tables::BRIDGE_ATTR_TYPE, AttrValue::I32(enums::BRIDGE_TYPE_1Q))],
    )?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_DEFAULT_1Q_BRIDGE_ID, AttrValue::Oid(bridge)),
    )?;

    Ok(bridge)
}

fn create_default_trap_group(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    log::info!("create default trap group");

    let trap_group = ctx.create(ObjectType::HostifTrapGroup, switch_id, &[])?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_DEFAULT_TRAP_GROUP, AttrValue::Oid(trap_group)),
    )
}

fn create_ports(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    topo: &Topology,
) -> SaiResult<Vec<Oid>> {
    log::info!("create ports");

    let mut ports = Vec::with_capacity(topo.port_count as usize);

    for i in 0..topo.port_count as usize {
        let lanes = topo.lanes[4 * i..4 * i + 4].to_vec();

        let port = ctx.create(
            ObjectType::Port,
            switch_id,
            &[
                Attr::new(tables::PORT_ATTR_HW_LANE_LIST, AttrValue::U32List(ValueList::new(lanes))),
                Attr::new(tables::PORT_ATTR_SPEED, AttrValue::U32(topo.port_speed)),
            ],
        )?;

        ctx.set_internal(
            ObjectType::Port,
            port,
            &Attr::new(tables::PORT_ATTR_TYPE, AttrValue::I32(enums::PORT_TYPE_LOGICAL)),
        )?;

        ports.push(port);
    }

    Ok(ports)
}

fn create_port_list(ctx: &mut dyn InitContext, switch_id: Oid, ports: &[Oid]) -> SaiResult<()> {
    log::info!("create port list");

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(
            tables::SWITCH_ATTR_PORT_LIST,
            AttrValue::OidList(ValueList::new(ports.to_vec())),
        ),
    )?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_PORT_NUMBER, AttrValue::U32(ports.len() as u32)),
    )
}

fn create_bridge_ports(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    ports: &[Oid],
) -> SaiResult<Vec<Oid>> {
    // bridge port for the 1q router
    ctx.create(
        ObjectType::BridgePort,
        switch_id,
        &[Attr::new(
            tables::BRIDGE_PORT_ATTR_TYPE,
            AttrValue::I32(enums::BRIDGE_PORT_TYPE_1Q_ROUTER),
        )],
    )?;

    // the default bridge handle comes back through the validated get
    let mut attrs = vec![Attr::new(
        tables::SWITCH_ATTR_DEFAULT_1Q_BRIDGE_ID,
        AttrValue::Oid(Oid::NULL),
    )];
    ctx.get(ObjectType::Switch, switch_id, &mut attrs)?;

    let default_bridge = attrs[0].value.as_oid().unwrap_or(Oid::NULL);

    let mut bridge_ports = Vec::with_capacity(ports.len());

    for port in ports {
        log::debug!("create bridge port for port {}", port);

        let bridge_port = ctx.create(
            ObjectType::BridgePort,
            switch_id,
            &[
                Attr::new(tables::BRIDGE_PORT_ATTR_BRIDGE_ID, AttrValue::Oid(default_bridge)),
                Attr::new(
                    tables::BRIDGE_PORT_ATTR_FDB_LEARNING_MODE,
                    AttrValue::I32(enums::BRIDGE_PORT_FDB_LEARNING_MODE_HW),
                ),
                Attr::new(tables::BRIDGE_PORT_ATTR_PORT_ID, AttrValue::Oid(*port)),
                Attr::new(
                    tables::BRIDGE_PORT_ATTR_TYPE,
                    AttrValue::I32(enums::BRIDGE_PORT_TYPE_PORT),
                ),
            ],
        )?;

        bridge_ports.push(bridge_port);
    }

    Ok(bridge_ports)
}

fn create_vlan_members(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    default_vlan: Oid,
    bridge_ports: &[Oid],
) -> SaiResult<()> {
    for bridge_port in bridge_ports {
        log::debug!("create vlan member for bridge port {}", bridge_port);

        ctx.create(
            ObjectType::VlanMember,
            switch_id,
            &[
                Attr::new(tables::VLAN_MEMBER_ATTR_BRIDGE_PORT_ID, AttrValue::Oid(*bridge_port)),
                Attr::new(tables::VLAN_MEMBER_ATTR_VLAN_ID, AttrValue::Oid(default_vlan)),
                Attr::new(
                    tables::VLAN_MEMBER_ATTR_VLAN_TAGGING_MODE,
                    AttrValue::I32(enums::VLAN_TAGGING_MODE_UNTAGGED),
                ),
            ],
        )?;
    }

    Ok(())
}

fn create_acl_entry_prio_range(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    log::info!("set acl entry priority range");

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_ACL_ENTRY_MINIMUM_PRIORITY, AttrValue::U32(1)),
    )?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_ACL_ENTRY_MAXIMUM_PRIORITY, AttrValue::U32(16_000)),
    )
}

fn create_ingress_priority_groups(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    ports: &[Oid],
    topo: &Topology,
) -> SaiResult<()> {
    log::info!("create ingress priority groups");

    for port in ports {
        let mut pgs = Vec::with_capacity(topo.pgs_per_port as usize);

        for _ in 0..topo.pgs_per_port {
            pgs.push(ctx.create(ObjectType::IngressPriorityGroup, switch_id, &[])?);
        }

        ctx.set_internal(
            ObjectType::Port,
            *port,
            &Attr::new(
                tables::PORT_ATTR_NUMBER_OF_INGRESS_PRIORITY_GROUPS,
                AttrValue::U32(topo.pgs_per_port),
            ),
        )?;

        ctx.set_internal(
            ObjectType::Port,
            *port,
            &Attr::new(
                tables::PORT_ATTR_INGRESS_PRIORITY_GROUP_LIST,
                AttrValue::OidList(ValueList::new(pgs)),
            ),
        )?;
    }

    Ok(())
}

fn create_qos_queues(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    ports: &[Oid],
    topo: &Topology,
) -> SaiResult<()> {
    log::info!("create qos queues");

    for port in ports {
        let mut queues = Vec::with_capacity(topo.queues_per_port as usize);

        for _ in 0..topo.queues_per_port {
            queues.push(ctx.create(ObjectType::Queue, switch_id, &[])?);
        }

        ctx.set_internal(
            ObjectType::Port,
            *port,
            &Attr::new(tables::PORT_ATTR_QOS_NUMBER_OF_QUEUES, AttrValue::U32(topo.queues_per_port)),
        )?;

        ctx.set_internal(
            ObjectType::Port,
            *port,
            &Attr::new(tables::PORT_ATTR_QOS_QUEUE_LIST, AttrValue::OidList(ValueList::new(queues))),
        )?;
    }

    Ok(())
}

fn set_switch_limits(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(
            tables::SWITCH_ATTR_QOS_MAX_NUMBER_OF_CHILDS_PER_SCHEDULER_GROUP,
            AttrValue::U32(16),
        ),
    )?;

    ctx.set_internal(
        ObjectType::Switch,
        switch_id,
        &Attr::new(tables::SWITCH_ATTR_NUMBER_OF_ECMP_GROUPS, AttrValue::U32(512)),
    )
}

/// Fetch a port's queue list back through the validated get; the tree
/// builders hang queues under the leaf scheduler groups.
pub(crate) fn fetch_port_queues(
    ctx: &mut dyn InitContext,
    port: Oid,
    queues_count: u32,
) -> SaiResult<Vec<Oid>> {
    let mut attrs = vec![Attr::new(
        tables::PORT_ATTR_QOS_QUEUE_LIST,
        AttrValue::OidList(ValueList { count: queues_count, items: Some(Vec::new()) }),
    )];

    ctx.get(ObjectType::Port, port, &mut attrs)?;

    match &attrs[0].value {
        AttrValue::OidList(list) => Ok(list.iter().copied().collect()),
        _ => Ok(Vec::new()),
    }
}

fn create_scheduler_groups(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    ports: &[Oid],
    topo: &Topology,
    build_tree: &dyn Fn(&mut dyn InitContext, &[Oid], Oid) -> SaiResult<()>,
) -> SaiResult<()> {
    log::info!("create scheduler groups");

    for port in ports {
        ctx.set_internal(
            ObjectType::Port,
            *port,
            &Attr::new(
                tables::PORT_ATTR_QOS_NUMBER_OF_SCHEDULER_GROUPS,
                AttrValue::U32(topo.sgs_per_port),
            ),
        )?;

        let mut sgs = Vec::with_capacity(topo.sgs_per_port as usize);

        for _ in 0..topo.sgs_per_port {
            sgs.push(ctx.create(ObjectType::SchedulerGroup, switch_id, &[])?);
        }

        ctx.set_internal(
            ObjectType::Port,
            *port,
            &Attr::new(
                tables::PORT_ATTR_QOS_SCHEDULER_GROUP_LIST,
                AttrValue::OidList(ValueList::new(sgs.clone())),
            ),
        )?;

        build_tree(ctx, &sgs, *port)?;
    }

    Ok(())
}

/// Record one scheduler group's children driver-side.
pub(crate) fn set_sg_children(
    ctx: &mut dyn InitContext,
    sg: Oid,
    children: Vec<Oid>,
) -> SaiResult<()> {
    ctx.set_internal(
        ObjectType::SchedulerGroup,
        sg,
        &Attr::new(tables::SCHEDULER_GROUP_ATTR_CHILD_COUNT, AttrValue::U32(children.len() as u32)),
    )?;

    let value = if children.is_empty() {
        AttrValue::OidList(ValueList::null(0))
    } else {
        AttrValue::OidList(ValueList::new(children))
    };

    ctx.set_internal(
        ObjectType::SchedulerGroup,
        sg,
        &Attr::new(tables::SCHEDULER_GROUP_ATTR_CHILD_LIST, value),
    )
}

/// Build every default object for one switch, in dependency order, then
/// hand the per-port scheduler trees to the profile's builder.
pub(crate) fn initialize_default_objects(
    ctx: &mut dyn InitContext,
    switch_id: Oid,
    topo: &Topology,
    build_tree: &dyn Fn(&mut dyn InitContext, &[Oid], Oid) -> SaiResult<()>,
) -> SaiResult<()> {
    set_switch_mac_address(ctx, switch_id)?;

    create_cpu_port(ctx, switch_id)?;
    let default_vlan = create_default_vlan(ctx, switch_id)?;
    create_default_virtual_router(ctx, switch_id)?;
    create_default_stp_instance(ctx, switch_id)?;
    create_default_1q_bridge(ctx, switch_id)?;
    create_default_trap_group(ctx, switch_id)?;
    let ports = create_ports(ctx, switch_id, topo)?;
    create_port_list(ctx, switch_id, &ports)?;
    let bridge_ports = create_bridge_ports(ctx, switch_id, &ports)?;
    create_vlan_members(ctx, switch_id, default_vlan, &bridge_ports)?;
    create_acl_entry_prio_range(ctx, switch_id)?;
    create_ingress_priority_groups(ctx, switch_id, &ports, topo)?;
    create_qos_queues(ctx, switch_id, &ports, topo)?;
    set_switch_limits(ctx, switch_id)?;
    create_scheduler_groups(ctx, switch_id, &ports, topo, build_tree)?;

    log::info!("initialized switch {}", switch_id);

    Ok(())
}
