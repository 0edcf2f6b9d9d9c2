// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::unreadable_literal)] // Large test constants
#![allow(clippy::missing_panics_doc)] // Tests panic on failure
#![allow(clippy::similar_names)] // Test variable naming
#![allow(clippy::too_many_lines)] // Test code

//! Reference-count guard integration tests: removals that would dangle a
//! reference are rejected, and removing in dependency order succeeds.

mod common;

use rsai::meta::{enums, tables};
use rsai::types::{Attr, AttrValue, Oid, SaiError};

/// Bridge port whose PORT_ID is the given port, and the vlan member
/// pointing at it, as fabricated by the default topology.
fn default_refs_of_port(sai: &rsai::Sai, switch: Oid, port: Oid) -> (Oid, Oid) {
    let bridge = common::switch_oid_attr(sai, switch, tables::SWITCH_ATTR_DEFAULT_1Q_BRIDGE_ID);
    let vlan = common::switch_oid_attr(sai, switch, tables::SWITCH_ATTR_DEFAULT_VLAN_ID);

    let bridge_ports = common::oid_list_attr(
        |attrs| sai.get_bridge_attribute(bridge, attrs),
        tables::BRIDGE_ATTR_PORT_LIST,
        64,
    );

    let bridge_port = bridge_ports
        .into_iter()
        .find(|bp| {
            let mut attrs =
                vec![Attr::new(tables::BRIDGE_PORT_ATTR_PORT_ID, AttrValue::Oid(Oid::NULL))];
            sai.get_bridge_port_attribute(*bp, &mut attrs).expect("bridge port port id");
            attrs[0].value == AttrValue::Oid(port)
        })
        .expect("default bridge port for port");

    let members = common::oid_list_attr(
        |attrs| sai.get_vlan_attribute(vlan, attrs),
        tables::VLAN_ATTR_MEMBER_LIST,
        64,
    );

    let vlan_member = members
        .into_iter()
        .find(|m| {
            let mut attrs =
                vec![Attr::new(tables::VLAN_MEMBER_ATTR_BRIDGE_PORT_ID, AttrValue::Oid(Oid::NULL))];
            sai.get_vlan_member_attribute(*m, &mut attrs).expect("vlan member bridge port");
            attrs[0].value == AttrValue::Oid(bridge_port)
        })
        .expect("default vlan member for bridge port");

    (bridge_port, vlan_member)
}

#[test]
fn test_port_refcount_guard() {
    let (sai, switch) = common::init_with_switch();
    let ports = common::port_list(&sai, switch);
    let port = ports[0];

    // the default bridge port already points at this port
    assert_eq!(sai.object_reference_count(port), Some(1));

    // a second bridge port on the same port
    let extra = sai
        .create_bridge_port(
            switch,
            &[
                Attr::new(tables::BRIDGE_PORT_ATTR_TYPE, AttrValue::I32(enums::BRIDGE_PORT_TYPE_PORT)),
                Attr::new(tables::BRIDGE_PORT_ATTR_PORT_ID, AttrValue::Oid(port)),
            ],
        )
        .expect("extra bridge port");

    assert_eq!(sai.object_reference_count(port), Some(2));

    // removing the port would dangle both references
    assert_eq!(sai.remove_port(port), Err(SaiError::InvalidParameter));

    sai.remove_bridge_port(extra).expect("remove extra bridge port");
    assert_eq!(sai.object_reference_count(port), Some(1));

    // still held by the default topology
    assert_eq!(sai.remove_port(port), Err(SaiError::InvalidParameter));

    // removing the dependants in order frees the port
    let (bridge_port, vlan_member) = default_refs_of_port(&sai, switch, port);

    assert_eq!(sai.remove_bridge_port(bridge_port), Err(SaiError::InvalidParameter));
    sai.remove_vlan_member(vlan_member).expect("remove vlan member");
    sai.remove_bridge_port(bridge_port).expect("remove bridge port");

    assert_eq!(sai.object_reference_count(port), Some(0));
    sai.remove_port(port).expect("remove port");
    assert_eq!(sai.object_reference_count(port), None);
}

#[test]
fn test_set_swaps_references() {
    let (sai, switch) = common::init_with_switch();

    let wred_a = sai
        .create_wred(
            switch,
            &[Attr::new(tables::WRED_ATTR_GREEN_ENABLE, AttrValue::Bool(false))],
        )
        .expect("wred a");
    let wred_b = sai.create_wred(switch, &[]).expect("wred b");

    let ports = common::port_list(&sai, switch);
    let queues = common::oid_list_attr(
        |attrs| sai.get_port_attribute(ports[0], attrs),
        tables::PORT_ATTR_QOS_QUEUE_LIST,
        20,
    );
    let queue = queues[0];

    sai.set_queue_attribute(queue, &Attr::new(tables::QUEUE_ATTR_WRED_PROFILE_ID, AttrValue::Oid(wred_a)))
        .expect("attach wred a");
    assert_eq!(sai.object_reference_count(wred_a), Some(1));
    assert_eq!(sai.object_reference_count(wred_b), Some(0));
    assert_eq!(sai.remove_wred(wred_a), Err(SaiError::InvalidParameter));

    // swapping the attribute moves the reference
    sai.set_queue_attribute(queue, &Attr::new(tables::QUEUE_ATTR_WRED_PROFILE_ID, AttrValue::Oid(wred_b)))
        .expect("attach wred b");
    assert_eq!(sai.object_reference_count(wred_a), Some(0));
    assert_eq!(sai.object_reference_count(wred_b), Some(1));

    // clearing with the null handle releases it
    sai.set_queue_attribute(
        queue,
        &Attr::new(tables::QUEUE_ATTR_WRED_PROFILE_ID, AttrValue::Oid(Oid::NULL)),
    )
    .expect("detach wred");
    assert_eq!(sai.object_reference_count(wred_b), Some(0));

    sai.remove_wred(wred_a).expect("remove wred a");
    sai.remove_wred(wred_b).expect("remove wred b");
}

#[test]
fn test_cross_switch_references_rejected() {
    let (sai, first) = common::init_with_switch();
    let second = sai
        .create_switch(&[Attr::new(tables::SWITCH_ATTR_INIT_SWITCH, AttrValue::Bool(true))])
        .expect("second switch");

    let other_port = common::port_list(&sai, second)[0];

    // a bridge port on the first switch may not reference the second
    // switch's port
    let status = sai.create_bridge_port(
        first,
        &[
            Attr::new(tables::BRIDGE_PORT_ATTR_TYPE, AttrValue::I32(enums::BRIDGE_PORT_TYPE_PORT)),
            Attr::new(tables::BRIDGE_PORT_ATTR_PORT_ID, AttrValue::Oid(other_port)),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}

#[test]
fn test_wrong_referent_type_rejected() {
    let (sai, switch) = common::init_with_switch();
    let vlan = common::switch_oid_attr(&sai, switch, tables::SWITCH_ATTR_DEFAULT_VLAN_ID);

    // PORT_ID must point at a port, not a vlan
    let status = sai.create_bridge_port(
        switch,
        &[
            Attr::new(tables::BRIDGE_PORT_ATTR_TYPE, AttrValue::I32(enums::BRIDGE_PORT_TYPE_PORT)),
            Attr::new(tables::BRIDGE_PORT_ATTR_PORT_ID, AttrValue::Oid(vlan)),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}

#[test]
fn test_remove_unknown_object() {
    let (sai, _switch) = common::init_with_switch();

    let bogus = Oid::from_raw(0x0005_0000_0000_9999);
    assert_eq!(sai.remove_bridge_port(bogus), Err(SaiError::InvalidParameter));
}
