// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::unreadable_literal)] // Large test constants
#![allow(clippy::missing_panics_doc)] // Tests panic on failure
#![allow(clippy::similar_names)] // Test variable naming
#![allow(clippy::too_many_lines)] // Test code

//! Codec round-trip tests: for any value generated within type bounds,
//! deserialize after serialize yields the identical value.

use std::net::{Ipv4Addr, Ipv6Addr};

use rsai::codec::{deserialize_attr_value, serialize_attr_value};
use rsai::meta::attr::{AttrFlags, AttrMetadata};
use rsai::meta::{enums, tables};
use rsai::types::*;

/// Synthetic metadata for shapes the shipped tables do not carry.
const fn synthetic(value_type: ValueType) -> AttrMetadata {
    AttrMetadata::new(ObjectType::Switch, 0x7fff, "TEST_ATTR", value_type, AttrFlags::CREATE_AND_SET)
}

fn roundtrip(meta: &AttrMetadata, value: &AttrValue) {
    let s = serialize_attr_value(meta, value, false);
    let back = deserialize_attr_value(&s, meta, false).unwrap_or_else(|e| {
        panic!("failed to deserialize '{}' ({:?}): {}", s, meta.value_type, e)
    });
    assert_eq!(&back, value, "round trip through '{}'", s);
}

fn random_mac(rng: &mut fastrand::Rng) -> Mac {
    let mut bytes = [0u8; 6];
    for b in &mut bytes {
        *b = rng.u8(..);
    }
    Mac(bytes)
}

#[test]
fn test_scalar_roundtrips_randomized() {
    let mut rng = fastrand::Rng::with_seed(0x5a1_0001);

    for _ in 0..200 {
        roundtrip(&synthetic(ValueType::Bool), &AttrValue::Bool(rng.bool()));
        roundtrip(&synthetic(ValueType::U8), &AttrValue::U8(rng.u8(..)));
        roundtrip(&synthetic(ValueType::I8), &AttrValue::I8(rng.i8(..)));
        roundtrip(&synthetic(ValueType::U16), &AttrValue::U16(rng.u16(..)));
        roundtrip(&synthetic(ValueType::I16), &AttrValue::I16(rng.i16(..)));
        roundtrip(&synthetic(ValueType::U32), &AttrValue::U32(rng.u32(..)));
        roundtrip(&synthetic(ValueType::I32), &AttrValue::I32(rng.i32(..)));
        roundtrip(&synthetic(ValueType::U64), &AttrValue::U64(rng.u64(..)));
        roundtrip(&synthetic(ValueType::I64), &AttrValue::I64(rng.i64(..)));
        roundtrip(&synthetic(ValueType::Pointer), &AttrValue::Pointer(rng.u64(..)));
        roundtrip(&synthetic(ValueType::Mac), &AttrValue::Mac(random_mac(&mut rng)));
        roundtrip(&synthetic(ValueType::Ipv4), &AttrValue::Ipv4(Ipv4Addr::from(rng.u32(..))));
        roundtrip(&synthetic(ValueType::Ipv6), &AttrValue::Ipv6(Ipv6Addr::from(rng.u128(..))));
    }
}

#[test]
fn test_ip_address_and_prefix_roundtrips() {
    let mut rng = fastrand::Rng::with_seed(0x5a1_0002);

    for _ in 0..100 {
        let v4 = IpAddress::V4(Ipv4Addr::from(rng.u32(..)));
        roundtrip(&synthetic(ValueType::IpAddress), &AttrValue::IpAddress(v4));

        let v6 = IpAddress::V6(Ipv6Addr::from(rng.u128(..)));
        roundtrip(&synthetic(ValueType::IpAddress), &AttrValue::IpAddress(v6));

        // prefix length survives the round trip
        let len = rng.u8(0..=32);
        let prefix = IpPrefix::from_len(v4, len).unwrap();
        roundtrip(&synthetic(ValueType::IpPrefix), &AttrValue::IpPrefix(prefix));

        let len = rng.u8(0..=128);
        let prefix = IpPrefix::from_len(v6, len).unwrap();
        roundtrip(&synthetic(ValueType::IpPrefix), &AttrValue::IpPrefix(prefix));
    }
}

#[test]
fn test_prefix_address_bits_survive() {
    // host bits outside the mask are not dropped by the codec
    let prefix = IpPrefix::from_len(IpAddress::V4(Ipv4Addr::new(10, 1, 2, 3)), 16).unwrap();
    roundtrip(&synthetic(ValueType::IpPrefix), &AttrValue::IpPrefix(prefix));
}

#[test]
fn test_mac_case_normalized() {
    let meta = synthetic(ValueType::Mac);
    let mac = Mac([0xab, 0xcd, 0xef, 0x01, 0x23, 0x45]);
    let s = serialize_attr_value(&meta, &AttrValue::Mac(mac), false);
    assert_eq!(s, "AB:CD:EF:01:23:45");

    // lower-case input parses to the same value
    assert_eq!(
        deserialize_attr_value("ab:cd:ef:01:23:45", &meta, false).unwrap(),
        AttrValue::Mac(mac)
    );
}

#[test]
fn test_list_roundtrips_randomized() {
    let mut rng = fastrand::Rng::with_seed(0x5a1_0003);

    for _ in 0..50 {
        let n = rng.usize(0..40);

        let items: Vec<u32> = (0..n).map(|_| rng.u32(..)).collect();
        let value = if items.is_empty() {
            AttrValue::U32List(ValueList::null(0))
        } else {
            AttrValue::U32List(ValueList::new(items))
        };
        roundtrip(&synthetic(ValueType::U32List), &value);

        let items: Vec<i32> = (0..n).map(|_| rng.i32(..)).collect();
        let value = if items.is_empty() {
            AttrValue::I32List(ValueList::null(0))
        } else {
            AttrValue::I32List(ValueList::new(items))
        };
        roundtrip(&synthetic(ValueType::I32List), &value);

        let items: Vec<u16> = (0..n).map(|_| rng.u16(1..4095)).collect();
        let value = if items.is_empty() {
            AttrValue::VlanList(ValueList::null(0))
        } else {
            AttrValue::VlanList(ValueList::new(items))
        };
        roundtrip(&synthetic(ValueType::VlanList), &value);
    }
}

#[test]
fn test_oid_list_roundtrip() {
    let oids = vec![
        Oid::encode(0, ObjectType::Port, 1),
        Oid::encode(0, ObjectType::Port, 2),
        Oid::NULL,
    ];
    roundtrip(
        &synthetic(ValueType::OidList),
        &AttrValue::OidList(ValueList::new(oids)),
    );
}

#[test]
fn test_range_roundtrips() {
    let mut rng = fastrand::Rng::with_seed(0x5a1_0004);

    for _ in 0..50 {
        let a = rng.u32(..);
        let b = rng.u32(..);
        let range = U32Range { min: a.min(b), max: a.max(b) };
        roundtrip(&synthetic(ValueType::U32Range), &AttrValue::U32Range(range));

        let a = rng.i32(..);
        let b = rng.i32(..);
        let range = I32Range { min: a.min(b), max: a.max(b) };
        roundtrip(&synthetic(ValueType::I32Range), &AttrValue::I32Range(range));
    }
}

#[test]
fn test_qos_map_list_wire_shape() {
    // the exact structured form: sorted keys, color by name
    let meta =
        rsai::meta::attr_metadata(ObjectType::QosMap, tables::QOS_MAP_ATTR_MAP_TO_VALUE_LIST)
            .unwrap();

    let entry = QosMap {
        key: QosMapParams {
            tc: 1,
            dscp: 2,
            dot1p: 3,
            prio: 4,
            pg: 5,
            queue_index: 6,
            color: enums::PACKET_COLOR_RED,
        },
        value: QosMapParams {
            tc: 1,
            dscp: 2,
            dot1p: 3,
            prio: 4,
            pg: 5,
            queue_index: 6,
            color: enums::PACKET_COLOR_GREEN,
        },
    };
    let value = AttrValue::QosMapList(ValueList::new(vec![entry]));

    let s = serialize_attr_value(meta, &value, false);
    assert_eq!(
        s,
        "{\"count\":1,\"list\":[{\"key\":{\"color\":\"SAI_PACKET_COLOR_RED\",\"dot1p\":3,\
         \"dscp\":2,\"pg\":5,\"prio\":4,\"qidx\":6,\"tc\":1},\"value\":{\"color\":\
         \"SAI_PACKET_COLOR_GREEN\",\"dot1p\":3,\"dscp\":2,\"pg\":5,\"prio\":4,\"qidx\":6,\
         \"tc\":1}}]}"
    );

    assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
}

#[test]
fn test_acl_field_enum_with_mask_wire_shape() {
    // an int32 field whose enum table is the packet actions
    let meta = synthetic(ValueType::AclFieldI32).with_enum(&enums::PACKET_ACTION);

    let value = AttrValue::AclFieldI32(AclField::Enabled {
        data: enums::PACKET_ACTION_TRAP,
        mask: 0x0F,
    });
    let s = serialize_attr_value(&meta, &value, false);
    assert_eq!(s, "SAI_PACKET_ACTION_TRAP&mask:0xf");
    assert_eq!(deserialize_attr_value(&s, &meta, false).unwrap(), value);

    let disabled = AttrValue::AclFieldI32(AclField::Disabled);
    assert_eq!(serialize_attr_value(&meta, &disabled, false), "disabled");
}

#[test]
fn test_acl_field_roundtrips() {
    let mut rng = fastrand::Rng::with_seed(0x5a1_0005);

    for _ in 0..50 {
        roundtrip(
            &synthetic(ValueType::AclFieldU16),
            &AttrValue::AclFieldU16(AclField::Enabled { data: rng.u16(..), mask: rng.u16(..) }),
        );

        roundtrip(
            &synthetic(ValueType::AclFieldMac),
            &AttrValue::AclFieldMac(AclField::Enabled {
                data: random_mac(&mut rng),
                mask: random_mac(&mut rng),
            }),
        );

        roundtrip(
            &synthetic(ValueType::AclFieldIpv6),
            &AttrValue::AclFieldIpv6(AclField::Enabled {
                data: Ipv6Addr::from(rng.u128(..)),
                mask: Ipv6Addr::from(rng.u128(..)),
            }),
        );
    }

    roundtrip(
        &synthetic(ValueType::AclFieldBool),
        &AttrValue::AclFieldBool(AclField::Enabled { data: true, mask: true }),
    );
    roundtrip(&synthetic(ValueType::AclFieldU8), &AttrValue::AclFieldU8(AclField::Disabled));
}

#[test]
fn test_acl_action_roundtrips() {
    roundtrip(
        &synthetic(ValueType::AclActionOid),
        &AttrValue::AclActionOid(AclAction::Enabled { data: Oid::encode(0, ObjectType::Port, 9) }),
    );
    roundtrip(
        &synthetic(ValueType::AclActionU32),
        &AttrValue::AclActionU32(AclAction::Enabled { data: 7 }),
    );
    roundtrip(
        &synthetic(ValueType::AclActionOidList),
        &AttrValue::AclActionOidList(AclAction::Enabled {
            data: ValueList::new(vec![Oid::encode(0, ObjectType::Port, 1)]),
        }),
    );
    roundtrip(&synthetic(ValueType::AclActionIpv4), &AttrValue::AclActionIpv4(AclAction::Disabled));
}

#[test]
fn test_acl_capability_roundtrip() {
    let value = AttrValue::AclCapability(AclCapability {
        is_action_list_mandatory: true,
        action_list: ValueList::new(vec![
            enums::ACL_ACTION_TYPE_REDIRECT,
            enums::ACL_ACTION_TYPE_PACKET_ACTION,
        ]),
    });
    let meta = synthetic(ValueType::AclCapability);
    let s = serialize_attr_value(&meta, &value, false);
    assert_eq!(
        s,
        "true:2:SAI_ACL_ACTION_TYPE_REDIRECT,SAI_ACL_ACTION_TYPE_PACKET_ACTION"
    );
    roundtrip(&meta, &value);
}

#[test]
fn test_chardata_roundtrips_randomized() {
    let mut rng = fastrand::Rng::with_seed(0x5a1_0006);

    for _ in 0..100 {
        let n = rng.usize(1..=31);
        let bytes: Vec<u8> = (0..n).map(|_| rng.u8(1..=255)).collect();
        let data = CharData::new(&bytes);

        if data.is_empty() {
            continue;
        }

        roundtrip(&synthetic(ValueType::CharData), &AttrValue::CharData(data));
    }
}

#[test]
fn test_enum_list_roundtrip_with_names() {
    let meta = synthetic(ValueType::I32List).with_enum(&enums::ACL_RANGE_TYPE);
    let value = AttrValue::I32List(ValueList::new(vec![
        enums::ACL_RANGE_TYPE_L4_SRC_PORT_RANGE,
        enums::ACL_RANGE_TYPE_PACKET_LENGTH,
    ]));

    let s = serialize_attr_value(&meta, &value, false);
    assert_eq!(
        s,
        "2:SAI_ACL_RANGE_TYPE_L4_SRC_PORT_RANGE,SAI_ACL_RANGE_TYPE_PACKET_LENGTH"
    );
    assert_eq!(deserialize_attr_value(&s, &meta, false).unwrap(), value);
}
