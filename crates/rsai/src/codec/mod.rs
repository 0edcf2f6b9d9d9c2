// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Attribute and key codec.
//!
//! Pure functions mapping every attribute-value variant and every object
//! key to and from a canonical textual form. This is the only way values
//! cross a process boundary or get compared for identity; the shadow DB
//! keys its object hash by [`serialize_object_meta_key`] output.
//!
//! # Wire forms
//!
//! | Shape | Form |
//! |-------|------|
//! | bool | `true` / `false` |
//! | integers | decimal (hex with `0x` where flagged) |
//! | enum | member name, decimal fallback |
//! | MAC | `11:22:33:AA:BB:CC` |
//! | IPv4 / IPv6 | canonical text form |
//! | IP prefix | `addr/len` |
//! | lists | `count:a,b,c` or `count:null` |
//! | ranges | `min,max` |
//! | QoS / tunnel maps | JSON `{"count":N,"list":[...]}` |
//! | ACL field | payload `&mask:` suffix, or `disabled` |
//! | ACL action | payload, or `disabled` |
//! | meta-key | `<OBJECT_TYPE_NAME>:<body>` |

mod key;
mod transfer;
mod value;

pub use key::{
    deserialize_fdb_entry, deserialize_neighbor_entry, deserialize_object_meta_key,
    deserialize_route_entry, serialize_fdb_entry, serialize_neighbor_entry,
    serialize_object_meta_key, serialize_route_entry,
};
pub use transfer::{transfer_attribute, transfer_attributes};
pub use value::{
    deserialize_attr_value, deserialize_bool, deserialize_chardata, deserialize_enum,
    deserialize_ip_address, deserialize_ip_prefix, deserialize_ipv4, deserialize_ipv6,
    deserialize_mac, deserialize_oid, deserialize_qos_map_list, deserialize_tunnel_map_list,
    deserialize_u64, serialize_attr_value, serialize_bool, serialize_chardata, serialize_enum,
    serialize_ip_address, serialize_ip_prefix, serialize_ipv4, serialize_ipv6, serialize_mac,
    serialize_oid, serialize_pointer, serialize_qos_map_list, serialize_tunnel_map_list,
    serialize_u64,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::tables;
    use crate::meta::{attr_metadata, AttrMetadata};
    use crate::types::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn md(object_type: ObjectType, attr_id: AttrId) -> &'static AttrMetadata {
        attr_metadata(object_type, attr_id).unwrap()
    }

    #[test]
    fn test_bool_roundtrip() {
        assert_eq!(serialize_bool(true), "true");
        assert_eq!(deserialize_bool("false").unwrap(), false);
        assert!(deserialize_bool("TRUE").is_err());
    }

    #[test]
    fn test_enum_by_name_and_fallback() {
        let meta = md(ObjectType::Bridge, tables::BRIDGE_ATTR_TYPE);
        let s = serialize_attr_value(meta, &AttrValue::I32(0), false);
        assert_eq!(s, "SAI_BRIDGE_TYPE_1Q");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), AttrValue::I32(0));

        // out-of-range value falls back to decimal
        let s = serialize_attr_value(meta, &AttrValue::I32(77), false);
        assert_eq!(s, "77");
        assert_eq!(deserialize_attr_value("77", meta, false).unwrap(), AttrValue::I32(77));
    }

    #[test]
    fn test_mac_roundtrip_uppercase() {
        let mac = Mac([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        let s = serialize_mac(mac);
        assert_eq!(s, "DE:AD:BE:EF:00:01");
        assert_eq!(deserialize_mac("de:ad:be:ef:00:01").unwrap(), mac);
    }

    #[test]
    fn test_oid_roundtrip() {
        let oid = Oid::encode(0, ObjectType::Switch, 1);
        let s = serialize_oid(oid);
        assert!(s.starts_with("oid:0x"));
        assert_eq!(deserialize_oid(&s).unwrap(), oid);
        assert!(deserialize_oid("0x21").is_err());
    }

    #[test]
    fn test_list_roundtrip() {
        let meta = md(ObjectType::Port, tables::PORT_ATTR_HW_LANE_LIST);
        let value = AttrValue::U32List(ValueList::new(vec![29, 30, 31, 32]));
        let s = serialize_attr_value(meta, &value, false);
        assert_eq!(s, "4:29,30,31,32");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
    }

    #[test]
    fn test_null_list_forms() {
        let meta = md(ObjectType::Port, tables::PORT_ATTR_HW_LANE_LIST);
        let null = AttrValue::U32List(ValueList::null(5));
        assert_eq!(serialize_attr_value(meta, &null, false), "5:null");
        assert_eq!(deserialize_attr_value("5:null", meta, false).unwrap(), null);

        // count_only captures only the length
        let full = AttrValue::U32List(ValueList::new(vec![1, 2, 3]));
        assert_eq!(serialize_attr_value(meta, &full, true), "3:null");
    }

    #[test]
    fn test_list_count_mismatch_rejected() {
        let meta = md(ObjectType::Port, tables::PORT_ATTR_HW_LANE_LIST);
        assert!(deserialize_attr_value("3:1,2", meta, false).is_err());
    }

    #[test]
    fn test_range_roundtrip() {
        let meta = md(ObjectType::AclRange, tables::ACL_RANGE_ATTR_LIMIT);
        let value = AttrValue::U32Range(U32Range { min: 100, max: 200 });
        let s = serialize_attr_value(meta, &value, false);
        assert_eq!(s, "100,200");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
    }

    #[test]
    fn test_chardata_escapes() {
        let data = CharData::new(b"eth0");
        assert_eq!(serialize_chardata(&data), "eth0");

        let tricky = CharData::new(b"a\\b\x07c");
        let s = serialize_chardata(&tricky);
        assert_eq!(s, "a\\\\b\\x07c");
        assert_eq!(deserialize_chardata(&s).unwrap(), tricky);
    }

    #[test]
    fn test_chardata_rejects() {
        assert!(deserialize_chardata("").is_err());
        assert!(deserialize_chardata("\\q").is_err());
        assert!(deserialize_chardata("\\xZZ").is_err());
        let long = "a".repeat(32);
        assert!(deserialize_chardata(&long).is_err());
        assert!(deserialize_chardata(&"a".repeat(31)).is_ok());
    }

    #[test]
    fn test_ip_prefix_roundtrip() {
        let prefix =
            IpPrefix::from_len(IpAddress::V4(Ipv4Addr::new(10, 1, 2, 0)), 24).unwrap();
        let s = serialize_ip_prefix(&prefix).unwrap();
        assert_eq!(s, "10.1.2.0/24");
        assert_eq!(deserialize_ip_prefix(&s).unwrap(), prefix);

        let v6 = IpPrefix::from_len(IpAddress::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0)), 64)
            .unwrap();
        let s = serialize_ip_prefix(&v6).unwrap();
        assert_eq!(s, "2001:db8::/64");
        assert_eq!(deserialize_ip_prefix(&s).unwrap(), v6);
    }

    #[test]
    fn test_non_contiguous_prefix_not_serializable() {
        let bad = IpPrefix::V4 {
            addr: Ipv4Addr::new(10, 0, 0, 0),
            mask: Ipv4Addr::new(255, 0, 255, 0),
        };
        assert!(serialize_ip_prefix(&bad).is_err());
    }

    #[test]
    fn test_acl_field_enum_with_mask() {
        let meta = md(ObjectType::AclEntry, tables::ACL_ENTRY_ATTR_FIELD_ACL_IP_TYPE);
        let value =
            AttrValue::AclFieldI32(AclField::Enabled { data: crate::meta::enums::ACL_IP_TYPE_IP, mask: 0xf });
        let s = serialize_attr_value(meta, &value, false);
        assert_eq!(s, "SAI_ACL_IP_TYPE_IP&mask:0xf");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
    }

    #[test]
    fn test_acl_field_disabled() {
        let meta = md(ObjectType::AclEntry, tables::ACL_ENTRY_ATTR_FIELD_SRC_IP);
        let value = AttrValue::AclFieldIpv4(AclField::Disabled);
        assert_eq!(serialize_attr_value(meta, &value, false), "disabled");
        assert_eq!(deserialize_attr_value("disabled", meta, false).unwrap(), value);
    }

    #[test]
    fn test_acl_field_ipv4_mask() {
        let meta = md(ObjectType::AclEntry, tables::ACL_ENTRY_ATTR_FIELD_SRC_IP);
        let value = AttrValue::AclFieldIpv4(AclField::Enabled {
            data: Ipv4Addr::new(10, 0, 0, 1),
            mask: Ipv4Addr::new(255, 255, 255, 0),
        });
        let s = serialize_attr_value(meta, &value, false);
        assert_eq!(s, "10.0.0.1&mask:255.255.255.0");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
    }

    #[test]
    fn test_acl_action_enum_no_mask() {
        let meta = md(ObjectType::AclEntry, tables::ACL_ENTRY_ATTR_ACTION_PACKET_ACTION);
        let value = AttrValue::AclActionI32(AclAction::Enabled {
            data: crate::meta::enums::PACKET_ACTION_TRAP,
        });
        let s = serialize_attr_value(meta, &value, false);
        assert_eq!(s, "SAI_PACKET_ACTION_TRAP");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);

        let disabled = AttrValue::AclActionI32(AclAction::Disabled);
        assert_eq!(serialize_attr_value(meta, &disabled, false), "disabled");
    }

    #[test]
    fn test_qos_map_list_roundtrip() {
        let meta = md(ObjectType::QosMap, tables::QOS_MAP_ATTR_MAP_TO_VALUE_LIST);
        let entry = QosMap {
            key: QosMapParams {
                tc: 1,
                dscp: 2,
                dot1p: 3,
                prio: 4,
                pg: 5,
                queue_index: 6,
                color: crate::meta::enums::PACKET_COLOR_RED,
            },
            value: QosMapParams {
                tc: 1,
                dscp: 2,
                dot1p: 3,
                prio: 4,
                pg: 5,
                queue_index: 6,
                color: crate::meta::enums::PACKET_COLOR_GREEN,
            },
        };
        let value = AttrValue::QosMapList(ValueList::new(vec![entry]));
        let s = serialize_attr_value(meta, &value, false);
        assert!(s.contains("\"count\":1"));
        assert!(s.contains("\"color\":\"SAI_PACKET_COLOR_RED\""));
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
    }

    #[test]
    fn test_qos_map_list_null_forms() {
        let meta = md(ObjectType::QosMap, tables::QOS_MAP_ATTR_MAP_TO_VALUE_LIST);
        let null = AttrValue::QosMapList(ValueList::null(3));
        let s = serialize_attr_value(meta, &null, false);
        assert_eq!(s, "{\"count\":3,\"list\":null}");
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), null);
    }

    #[test]
    fn test_tunnel_map_list_roundtrip() {
        let meta = md(ObjectType::TunnelMap, tables::TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST);
        let entry = TunnelMap {
            key: TunnelMapParams { oecn: 1, uecn: 0, vlan_id: 100, vni_id: 5000 },
            value: TunnelMapParams { oecn: 2, uecn: 1, vlan_id: 200, vni_id: 6000 },
        };
        let value = AttrValue::TunnelMapList(ValueList::new(vec![entry]));
        let s = serialize_attr_value(meta, &value, false);
        assert_eq!(deserialize_attr_value(&s, meta, false).unwrap(), value);
    }

    #[test]
    fn test_fdb_entry_key_roundtrip() {
        let entry = FdbEntry {
            switch_id: Oid::encode(0, ObjectType::Switch, 0),
            mac: Mac([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
            vlan_id: 1,
            bridge_type: crate::meta::enums::FDB_ENTRY_BRIDGE_TYPE_1Q,
            bridge_id: Oid::encode(0, ObjectType::Bridge, 1),
        };
        let s = serialize_fdb_entry(&entry);
        assert!(s.contains("\"mac\":\"11:22:33:44:55:66\""));
        assert!(s.contains("\"vlan\":1"));
        assert_eq!(deserialize_fdb_entry(&s).unwrap(), entry);
    }

    #[test]
    fn test_meta_key_roundtrip() {
        let oid = Oid::encode(0, ObjectType::Port, 3);
        let key = MetaKey::oid(ObjectType::Port, oid);
        let s = serialize_object_meta_key(&key).unwrap();
        assert_eq!(s, format!("SAI_OBJECT_TYPE_PORT:{}", oid));
        assert_eq!(deserialize_object_meta_key(&s).unwrap(), key);

        let route = MetaKey::route(RouteEntry {
            switch_id: Oid::encode(0, ObjectType::Switch, 0),
            vr_id: Oid::encode(0, ObjectType::VirtualRouter, 1),
            destination: IpPrefix::from_len(IpAddress::V4(Ipv4Addr::new(192, 168, 0, 0)), 16)
                .unwrap(),
        });
        let s = serialize_object_meta_key(&route).unwrap();
        assert!(s.starts_with("SAI_OBJECT_TYPE_ROUTE_ENTRY:{"));
        assert_eq!(deserialize_object_meta_key(&s).unwrap(), route);
    }
}
