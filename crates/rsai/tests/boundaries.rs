// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::unreadable_literal)] // Large test constants
#![allow(clippy::missing_panics_doc)] // Tests panic on failure
#![allow(clippy::similar_names)] // Test variable naming
#![allow(clippy::too_many_lines)] // Test code

//! Boundary behavior: list caps, null/count pairings, range edges, and
//! char buffer limits at the codec edge.

mod common;

use rsai::codec::deserialize_chardata;
use rsai::meta::{enums, tables};
use rsai::types::{Attr, AttrValue, SaiError, U32Range, ValueList, MAX_LIST_COUNT};

#[test]
fn test_lane_list_at_cap_is_valid() {
    let (sai, switch) = common::init_with_switch();

    let lanes: Vec<u32> = (1_000..1_000 + MAX_LIST_COUNT).collect();
    assert_eq!(lanes.len() as u32, 0x1000);

    sai.create_port(
        switch,
        &[
            Attr::new(tables::PORT_ATTR_HW_LANE_LIST, AttrValue::U32List(ValueList::new(lanes))),
            Attr::new(tables::PORT_ATTR_SPEED, AttrValue::U32(100_000)),
        ],
    )
    .expect("port with maximum lane list");
}

#[test]
fn test_lane_list_above_cap_rejected() {
    let (sai, switch) = common::init_with_switch();

    let lanes: Vec<u32> = (1_000..1_000 + MAX_LIST_COUNT + 1).collect();
    let status = sai.create_port(
        switch,
        &[
            Attr::new(tables::PORT_ATTR_HW_LANE_LIST, AttrValue::U32List(ValueList::new(lanes))),
            Attr::new(tables::PORT_ATTR_SPEED, AttrValue::U32(100_000)),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}

#[test]
fn test_zero_count_null_pairing() {
    let (sai, switch) = common::init_with_switch();

    // count zero with a present list is inconsistent
    let status = sai.create_port(
        switch,
        &[
            Attr::new(
                tables::PORT_ATTR_HW_LANE_LIST,
                AttrValue::U32List(ValueList { count: 0, items: Some(Vec::new()) }),
            ),
            Attr::new(tables::PORT_ATTR_SPEED, AttrValue::U32(1_000)),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));

    // count without storage is inconsistent the other way
    let status = sai.create_port(
        switch,
        &[
            Attr::new(
                tables::PORT_ATTR_HW_LANE_LIST,
                AttrValue::U32List(ValueList { count: 4, items: None }),
            ),
            Attr::new(tables::PORT_ATTR_SPEED, AttrValue::U32(1_000)),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}

#[test]
fn test_range_edges() {
    let (sai, switch) = common::init_with_switch();

    // min == max is a valid (degenerate) range
    sai.create_acl_range(
        switch,
        &[
            Attr::new(
                tables::ACL_RANGE_ATTR_TYPE,
                AttrValue::I32(enums::ACL_RANGE_TYPE_PACKET_LENGTH),
            ),
            Attr::new(tables::ACL_RANGE_ATTR_LIMIT, AttrValue::U32Range(U32Range { min: 5, max: 5 })),
        ],
    )
    .expect("degenerate range");

    let status = sai.create_acl_range(
        switch,
        &[
            Attr::new(
                tables::ACL_RANGE_ATTR_TYPE,
                AttrValue::I32(enums::ACL_RANGE_TYPE_PACKET_LENGTH),
            ),
            Attr::new(tables::ACL_RANGE_ATTR_LIMIT, AttrValue::U32Range(U32Range { min: 6, max: 5 })),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}

#[test]
fn test_get_with_no_attributes_rejected() {
    let (sai, switch) = common::init_with_switch();

    assert_eq!(sai.get_switch_attribute(switch, &mut []), Err(SaiError::InvalidParameter));
}

#[test]
fn test_unknown_attribute_rejected() {
    let (sai, switch) = common::init_with_switch();

    let status = sai.set_switch_attribute(switch, &Attr::new(0x4242, AttrValue::U32(1)));
    assert_eq!(status, Err(SaiError::Failure));
}

#[test]
fn test_value_shape_must_match_metadata() {
    let (sai, switch) = common::init_with_switch();

    // SRC_MAC_ADDRESS declared as mac, passed as u32
    let status = sai.set_switch_attribute(
        switch,
        &Attr::new(tables::SWITCH_ATTR_SRC_MAC_ADDRESS, AttrValue::U32(5)),
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}

#[test]
fn test_chardata_limits() {
    // 31 bytes fit
    assert!(deserialize_chardata(&"a".repeat(31)).is_ok());
    // a full 32-byte buffer cannot be terminated
    assert_eq!(deserialize_chardata(&"a".repeat(32)), Err(SaiError::InvalidParameter));
    // empty is rejected outright
    assert_eq!(deserialize_chardata(""), Err(SaiError::InvalidParameter));
}

#[test]
fn test_duplicate_oids_in_list_rejected() {
    let (sai, switch) = common::init_with_switch();
    let port = common::port_list(&sai, switch)[0];

    let table = sai
        .create_acl_table(
            switch,
            &[Attr::new(tables::ACL_TABLE_ATTR_STAGE, AttrValue::I32(enums::ACL_STAGE_INGRESS))],
        )
        .expect("acl table");

    let status = sai.create_acl_entry(
        switch,
        &[
            Attr::new(tables::ACL_ENTRY_ATTR_TABLE_ID, AttrValue::Oid(table)),
            Attr::new(
                tables::ACL_ENTRY_ATTR_FIELD_IN_PORTS,
                AttrValue::AclFieldOidList(rsai::types::AclField::Enabled {
                    data: ValueList::new(vec![port, port]),
                    mask: ValueList::null(0),
                }),
            ),
        ],
    );
    assert_eq!(status, Err(SaiError::InvalidParameter));
}
