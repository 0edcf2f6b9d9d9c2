// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Attribute value serialization.
//!
//! Dispatches on the metadata's declared value type. Deserializing a valid
//! serialized form yields a structurally identical value (round-trip),
//! except under `count_only`, which captures only list lengths.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde_json::json;

use crate::meta::{AttrMetadata, EnumMetadata};
use crate::types::{
    AclAction, AclCapability, AclField, AttrValue, CharData, I32Range, IpAddress, IpPrefix, Mac,
    Oid, QosMap, QosMapParams, SaiError, SaiResult, TunnelMap, TunnelMapParams, U32Range,
    ValueList, ValueType,
};

// ----------------------------------------------------------------------
// Primitives
// ----------------------------------------------------------------------

pub fn serialize_bool(b: bool) -> String {
    if b { "true".to_string() } else { "false".to_string() }
}

pub fn deserialize_bool(s: &str) -> SaiResult<bool> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => {
            log::error!("failed to deserialize '{}' as bool", s);
            Err(SaiError::InvalidParameter)
        }
    }
}

/// Decimal by default; `hex` renders `0x` lowercase hex.
pub fn serialize_u64(value: u64, hex: bool) -> String {
    if hex { format!("0x{:x}", value) } else { value.to_string() }
}

pub fn deserialize_u64(s: &str, hex: bool) -> SaiResult<u64> {
    let parsed = if hex {
        s.strip_prefix("0x").ok_or(SaiError::InvalidParameter).and_then(|rest| {
            u64::from_str_radix(rest, 16).map_err(|_| SaiError::InvalidParameter)
        })
    } else {
        s.parse::<u64>().map_err(|_| SaiError::InvalidParameter)
    };

    parsed.map_err(|e| {
        log::error!("failed to deserialize '{}' as number", s);
        e
    })
}

fn deserialize_unsigned<T: TryFrom<u64>>(s: &str) -> SaiResult<T> {
    T::try_from(deserialize_u64(s, false)?).map_err(|_| SaiError::InvalidParameter)
}

fn deserialize_signed<T: TryFrom<i64>>(s: &str) -> SaiResult<T> {
    let v = s.parse::<i64>().map_err(|_| {
        log::error!("failed to deserialize '{}' as signed number", s);
        SaiError::InvalidParameter
    })?;
    T::try_from(v).map_err(|_| SaiError::InvalidParameter)
}

/// Symbolic member name when declared, decimal otherwise.
pub fn serialize_enum(value: i32, meta: Option<&EnumMetadata>) -> String {
    match meta {
        Some(m) => match m.name_of(value) {
            Some(name) => name.to_string(),
            None => {
                log::warn!("enum value {} not found in enum {}", value, m.name);
                value.to_string()
            }
        },
        None => value.to_string(),
    }
}

pub fn deserialize_enum(s: &str, meta: Option<&EnumMetadata>) -> SaiResult<i32> {
    if let Some(m) = meta {
        if let Some(v) = m.value_of(s) {
            return Ok(v);
        }
    }
    deserialize_signed::<i32>(s)
}

pub fn serialize_mac(mac: Mac) -> String {
    mac.to_string()
}

pub fn deserialize_mac(s: &str) -> SaiResult<Mac> {
    Mac::parse(s).ok_or_else(|| {
        log::error!("failed to deserialize '{}' as mac", s);
        SaiError::InvalidParameter
    })
}

pub fn serialize_ipv4(ip: Ipv4Addr) -> String {
    ip.to_string()
}

pub fn deserialize_ipv4(s: &str) -> SaiResult<Ipv4Addr> {
    s.parse().map_err(|_| {
        log::error!("failed to deserialize '{}' as ipv4", s);
        SaiError::InvalidParameter
    })
}

pub fn serialize_ipv6(ip: Ipv6Addr) -> String {
    ip.to_string()
}

pub fn deserialize_ipv6(s: &str) -> SaiResult<Ipv6Addr> {
    s.parse().map_err(|_| {
        log::error!("failed to deserialize '{}' as ipv6", s);
        SaiError::InvalidParameter
    })
}

pub fn serialize_ip_address(ip: IpAddress) -> String {
    ip.to_string()
}

pub fn deserialize_ip_address(s: &str) -> SaiResult<IpAddress> {
    if let Ok(v4) = s.parse::<Ipv4Addr>() {
        return Ok(IpAddress::V4(v4));
    }
    if let Ok(v6) = s.parse::<Ipv6Addr>() {
        return Ok(IpAddress::V6(v6));
    }
    log::error!("failed to deserialize '{}' as ip address", s);
    Err(SaiError::InvalidParameter)
}

/// `addr/prefix-length`; the mask is re-derived from the contiguous
/// leading-ones count. A non-contiguous mask cannot be serialized.
pub fn serialize_ip_prefix(prefix: &IpPrefix) -> SaiResult<String> {
    let len = prefix.prefix_len().ok_or_else(|| {
        log::error!("ip prefix mask is not contiguous");
        SaiError::InvalidParameter
    })?;
    Ok(format!("{}/{}", prefix.addr(), len))
}

pub fn deserialize_ip_prefix(s: &str) -> SaiResult<IpPrefix> {
    let (addr, len) = s.rsplit_once('/').ok_or(SaiError::InvalidParameter)?;
    let addr = deserialize_ip_address(addr)?;
    let len = deserialize_unsigned::<u8>(len)?;
    IpPrefix::from_len(addr, len).ok_or_else(|| {
        log::error!("prefix length {} out of range for '{}'", len, s);
        SaiError::InvalidParameter
    })
}

pub fn serialize_pointer(ptr: u64) -> String {
    serialize_u64(ptr, true)
}

pub fn serialize_oid(oid: Oid) -> String {
    oid.to_string()
}

pub fn deserialize_oid(s: &str) -> SaiResult<Oid> {
    let hex = s.strip_prefix("oid:").ok_or_else(|| {
        log::error!("failed to deserialize '{}' as oid", s);
        SaiError::InvalidParameter
    })?;
    Ok(Oid::from_raw(deserialize_u64(hex, true)?))
}

/// Printable ASCII passes through, backslash doubles, anything else
/// renders as `\xHH`.
pub fn serialize_chardata(data: &CharData) -> String {
    let mut out = String::new();

    for &b in data.bytes() {
        if b == b'\\' {
            out.push_str("\\\\");
        } else if (0x20..=0x7E).contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\x{:02X}", b));
        }
    }

    out
}

pub fn deserialize_chardata(s: &str) -> SaiResult<CharData> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }

        match bytes.get(i + 1) {
            Some(b'\\') => {
                out.push(b'\\');
                i += 2;
            }
            Some(b'x') => {
                let hi = bytes.get(i + 2).and_then(|c| (*c as char).to_digit(16));
                let lo = bytes.get(i + 3).and_then(|c| (*c as char).to_digit(16));
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push(((h << 4) | l) as u8);
                        i += 4;
                    }
                    _ => {
                        log::error!("invalid chardata escape in '{}'", s);
                        return Err(SaiError::InvalidParameter);
                    }
                }
            }
            _ => {
                log::error!("invalid chardata escape in '{}'", s);
                return Err(SaiError::InvalidParameter);
            }
        }
    }

    if out.is_empty() {
        log::error!("empty chardata");
        return Err(SaiError::InvalidParameter);
    }

    if out.len() > 31 {
        log::error!("chardata too long: {} bytes", out.len());
        return Err(SaiError::InvalidParameter);
    }

    Ok(CharData::new(&out))
}

// ----------------------------------------------------------------------
// Lists and ranges
// ----------------------------------------------------------------------

fn serialize_list<T>(
    list: &ValueList<T>,
    count_only: bool,
    mut item: impl FnMut(&T) -> String,
) -> String {
    if count_only || list.is_null() {
        return format!("{}:null", list.count);
    }

    let body: Vec<String> = list.iter().map(|v| item(v)).collect();
    format!("{}:{}", list.count, body.join(","))
}

fn deserialize_list<T>(
    s: &str,
    count_only: bool,
    mut item: impl FnMut(&str) -> SaiResult<T>,
) -> SaiResult<ValueList<T>> {
    let (count, body) = s.split_once(':').ok_or(SaiError::InvalidParameter)?;
    let count: u32 = deserialize_unsigned(count)?;

    if count_only || body == "null" {
        return Ok(ValueList::null(count));
    }

    let mut items = Vec::with_capacity(count as usize);

    if !body.is_empty() {
        for part in body.split(',') {
            items.push(item(part)?);
        }
    }

    if items.len() as u32 != count {
        log::error!("list count {} does not match {} items", count, items.len());
        return Err(SaiError::InvalidParameter);
    }

    Ok(ValueList::new(items))
}

fn serialize_u32_range(range: &U32Range) -> String {
    format!("{},{}", range.min, range.max)
}

fn deserialize_u32_range(s: &str) -> SaiResult<U32Range> {
    let (min, max) = s.split_once(',').ok_or(SaiError::InvalidParameter)?;
    Ok(U32Range { min: deserialize_unsigned(min)?, max: deserialize_unsigned(max)? })
}

fn serialize_i32_range(range: &I32Range) -> String {
    format!("{},{}", range.min, range.max)
}

fn deserialize_i32_range(s: &str) -> SaiResult<I32Range> {
    let (min, max) = s.split_once(',').ok_or(SaiError::InvalidParameter)?;
    Ok(I32Range { min: deserialize_signed(min)?, max: deserialize_signed(max)? })
}

// ----------------------------------------------------------------------
// QoS map and tunnel map lists (structured JSON)
// ----------------------------------------------------------------------

fn qos_map_params_json(p: &QosMapParams) -> serde_json::Value {
    json!({
        "tc": p.tc,
        "dscp": p.dscp,
        "dot1p": p.dot1p,
        "prio": p.prio,
        "pg": p.pg,
        "qidx": p.queue_index,
        "color": serialize_enum(p.color, Some(&crate::meta::enums::PACKET_COLOR)),
    })
}

fn qos_map_params_from_json(v: &serde_json::Value) -> SaiResult<QosMapParams> {
    let field = |name: &str| -> SaiResult<u8> {
        v.get(name)
            .and_then(serde_json::Value::as_u64)
            .and_then(|n| u8::try_from(n).ok())
            .ok_or(SaiError::InvalidParameter)
    };

    let color = v
        .get("color")
        .and_then(serde_json::Value::as_str)
        .ok_or(SaiError::InvalidParameter)
        .and_then(|s| deserialize_enum(s, Some(&crate::meta::enums::PACKET_COLOR)))?;

    Ok(QosMapParams {
        tc: field("tc")?,
        dscp: field("dscp")?,
        dot1p: field("dot1p")?,
        prio: field("prio")?,
        pg: field("pg")?,
        queue_index: field("qidx")?,
        color,
    })
}

pub fn serialize_qos_map_list(list: &ValueList<QosMap>, count_only: bool) -> String {
    if count_only || list.is_null() {
        return json!({ "count": list.count, "list": null }).to_string();
    }

    let items: Vec<serde_json::Value> = list
        .iter()
        .map(|m| json!({ "key": qos_map_params_json(&m.key), "value": qos_map_params_json(&m.value) }))
        .collect();

    json!({ "count": list.count, "list": items }).to_string()
}

pub fn deserialize_qos_map_list(s: &str, count_only: bool) -> SaiResult<ValueList<QosMap>> {
    let v: serde_json::Value = serde_json::from_str(s).map_err(|e| {
        log::error!("invalid qos map json: {}", e);
        SaiError::InvalidParameter
    })?;

    let count = v
        .get("count")
        .and_then(serde_json::Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(SaiError::InvalidParameter)?;

    let list = v.get("list").ok_or(SaiError::InvalidParameter)?;

    if count_only || list.is_null() {
        return Ok(ValueList::null(count));
    }

    let arr = list.as_array().ok_or(SaiError::InvalidParameter)?;
    let mut items = Vec::with_capacity(arr.len());

    for entry in arr {
        let key = entry.get("key").ok_or(SaiError::InvalidParameter)?;
        let value = entry.get("value").ok_or(SaiError::InvalidParameter)?;
        items.push(QosMap {
            key: qos_map_params_from_json(key)?,
            value: qos_map_params_from_json(value)?,
        });
    }

    if items.len() as u32 != count {
        log::error!("qos map count {} does not match {} items", count, items.len());
        return Err(SaiError::InvalidParameter);
    }

    Ok(ValueList::new(items))
}

fn tunnel_map_params_json(p: &TunnelMapParams) -> serde_json::Value {
    json!({ "oecn": p.oecn, "uecn": p.uecn, "vlan": p.vlan_id, "vni": p.vni_id })
}

fn tunnel_map_params_from_json(v: &serde_json::Value) -> SaiResult<TunnelMapParams> {
    let num = |name: &str| v.get(name).and_then(serde_json::Value::as_u64);

    Ok(TunnelMapParams {
        oecn: num("oecn").and_then(|n| u8::try_from(n).ok()).ok_or(SaiError::InvalidParameter)?,
        uecn: num("uecn").and_then(|n| u8::try_from(n).ok()).ok_or(SaiError::InvalidParameter)?,
        vlan_id: num("vlan").and_then(|n| u16::try_from(n).ok()).ok_or(SaiError::InvalidParameter)?,
        vni_id: num("vni").and_then(|n| u32::try_from(n).ok()).ok_or(SaiError::InvalidParameter)?,
    })
}

pub fn serialize_tunnel_map_list(list: &ValueList<TunnelMap>, count_only: bool) -> String {
    if count_only || list.is_null() {
        return json!({ "count": list.count, "list": null }).to_string();
    }

    let items: Vec<serde_json::Value> = list
        .iter()
        .map(|m| {
            json!({
                "key": tunnel_map_params_json(&m.key),
                "value": tunnel_map_params_json(&m.value),
            })
        })
        .collect();

    json!({ "count": list.count, "list": items }).to_string()
}

pub fn deserialize_tunnel_map_list(s: &str, count_only: bool) -> SaiResult<ValueList<TunnelMap>> {
    let v: serde_json::Value = serde_json::from_str(s).map_err(|e| {
        log::error!("invalid tunnel map json: {}", e);
        SaiError::InvalidParameter
    })?;

    let count = v
        .get("count")
        .and_then(serde_json::Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(SaiError::InvalidParameter)?;

    let list = v.get("list").ok_or(SaiError::InvalidParameter)?;

    if count_only || list.is_null() {
        return Ok(ValueList::null(count));
    }

    let arr = list.as_array().ok_or(SaiError::InvalidParameter)?;
    let mut items = Vec::with_capacity(arr.len());

    for entry in arr {
        let key = entry.get("key").ok_or(SaiError::InvalidParameter)?;
        let value = entry.get("value").ok_or(SaiError::InvalidParameter)?;
        items.push(TunnelMap {
            key: tunnel_map_params_from_json(key)?,
            value: tunnel_map_params_from_json(value)?,
        });
    }

    if items.len() as u32 != count {
        return Err(SaiError::InvalidParameter);
    }

    Ok(ValueList::new(items))
}

// ----------------------------------------------------------------------
// ACL field / action / capability
// ----------------------------------------------------------------------

fn field_with_mask(data: String, mask: String) -> String {
    format!("{}&mask:{}", data, mask)
}

fn split_mask(s: &str) -> SaiResult<(&str, &str)> {
    s.split_once("&mask:").ok_or_else(|| {
        log::error!("acl field '{}' has no mask", s);
        SaiError::InvalidParameter
    })
}

macro_rules! acl_field_number {
    ($field:expr, $ser:expr) => {
        match $field {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => {
                field_with_mask($ser(*data, false), $ser(*mask, true))
            }
        }
    };
}

fn serialize_acl_field(meta: &AttrMetadata, value: &AttrValue, count_only: bool) -> String {
    match value {
        AttrValue::AclFieldBool(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, .. } => serialize_bool(*data),
        },
        AttrValue::AclFieldU8(f) => acl_field_number!(f, |v: u8, hex| serialize_u64(v as u64, hex)),
        AttrValue::AclFieldI8(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => {
                field_with_mask(data.to_string(), serialize_u64(*mask as u8 as u64, true))
            }
        },
        AttrValue::AclFieldU16(f) => {
            acl_field_number!(f, |v: u16, hex| serialize_u64(v as u64, hex))
        }
        AttrValue::AclFieldI16(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => {
                field_with_mask(data.to_string(), serialize_u64(*mask as u16 as u64, true))
            }
        },
        AttrValue::AclFieldU32(f) => {
            acl_field_number!(f, |v: u32, hex| serialize_u64(v as u64, hex))
        }
        AttrValue::AclFieldI32(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => field_with_mask(
                serialize_enum(*data, meta.enum_meta),
                serialize_u64(*mask as u32 as u64, true),
            ),
        },
        AttrValue::AclFieldMac(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => {
                field_with_mask(serialize_mac(*data), serialize_mac(*mask))
            }
        },
        AttrValue::AclFieldIpv4(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => {
                field_with_mask(serialize_ipv4(*data), serialize_ipv4(*mask))
            }
        },
        AttrValue::AclFieldIpv6(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, mask } => {
                field_with_mask(serialize_ipv6(*data), serialize_ipv6(*mask))
            }
        },
        AttrValue::AclFieldOid(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, .. } => serialize_oid(*data),
        },
        AttrValue::AclFieldOidList(f) => match f {
            AclField::Disabled => "disabled".to_string(),
            AclField::Enabled { data, .. } => {
                serialize_list(data, count_only, |oid| serialize_oid(*oid))
            }
        },
        _ => unreachable!("not an acl field"),
    }
}

fn deserialize_acl_field(
    meta: &AttrMetadata,
    s: &str,
    count_only: bool,
) -> SaiResult<AttrValue> {
    if s == "disabled" {
        return Ok(match meta.value_type {
            ValueType::AclFieldBool => AttrValue::AclFieldBool(AclField::Disabled),
            ValueType::AclFieldU8 => AttrValue::AclFieldU8(AclField::Disabled),
            ValueType::AclFieldI8 => AttrValue::AclFieldI8(AclField::Disabled),
            ValueType::AclFieldU16 => AttrValue::AclFieldU16(AclField::Disabled),
            ValueType::AclFieldI16 => AttrValue::AclFieldI16(AclField::Disabled),
            ValueType::AclFieldU32 => AttrValue::AclFieldU32(AclField::Disabled),
            ValueType::AclFieldI32 => AttrValue::AclFieldI32(AclField::Disabled),
            ValueType::AclFieldMac => AttrValue::AclFieldMac(AclField::Disabled),
            ValueType::AclFieldIpv4 => AttrValue::AclFieldIpv4(AclField::Disabled),
            ValueType::AclFieldIpv6 => AttrValue::AclFieldIpv6(AclField::Disabled),
            ValueType::AclFieldOid => AttrValue::AclFieldOid(AclField::Disabled),
            ValueType::AclFieldOidList => AttrValue::AclFieldOidList(AclField::Disabled),
            _ => unreachable!("not an acl field"),
        });
    }

    match meta.value_type {
        ValueType::AclFieldBool => Ok(AttrValue::AclFieldBool(AclField::Enabled {
            data: deserialize_bool(s)?,
            mask: true,
        })),
        ValueType::AclFieldU8 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldU8(AclField::Enabled {
                data: deserialize_unsigned(d)?,
                mask: deserialize_u64(m, true)? as u8,
            }))
        }
        ValueType::AclFieldI8 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldI8(AclField::Enabled {
                data: deserialize_signed(d)?,
                mask: deserialize_u64(m, true)? as i8,
            }))
        }
        ValueType::AclFieldU16 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldU16(AclField::Enabled {
                data: deserialize_unsigned(d)?,
                mask: deserialize_u64(m, true)? as u16,
            }))
        }
        ValueType::AclFieldI16 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldI16(AclField::Enabled {
                data: deserialize_signed(d)?,
                mask: deserialize_u64(m, true)? as i16,
            }))
        }
        ValueType::AclFieldU32 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldU32(AclField::Enabled {
                data: deserialize_unsigned(d)?,
                mask: deserialize_u64(m, true)? as u32,
            }))
        }
        ValueType::AclFieldI32 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldI32(AclField::Enabled {
                data: deserialize_enum(d, meta.enum_meta)?,
                mask: deserialize_u64(m, true)? as i32,
            }))
        }
        ValueType::AclFieldMac => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldMac(AclField::Enabled {
                data: deserialize_mac(d)?,
                mask: deserialize_mac(m)?,
            }))
        }
        ValueType::AclFieldIpv4 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldIpv4(AclField::Enabled {
                data: deserialize_ipv4(d)?,
                mask: deserialize_ipv4(m)?,
            }))
        }
        ValueType::AclFieldIpv6 => {
            let (d, m) = split_mask(s)?;
            Ok(AttrValue::AclFieldIpv6(AclField::Enabled {
                data: deserialize_ipv6(d)?,
                mask: deserialize_ipv6(m)?,
            }))
        }
        ValueType::AclFieldOid => Ok(AttrValue::AclFieldOid(AclField::Enabled {
            data: deserialize_oid(s)?,
            mask: Oid::NULL,
        })),
        ValueType::AclFieldOidList => Ok(AttrValue::AclFieldOidList(AclField::Enabled {
            data: deserialize_list(s, count_only, deserialize_oid)?,
            mask: ValueList::null(0),
        })),
        _ => unreachable!("not an acl field"),
    }
}

fn serialize_acl_action(meta: &AttrMetadata, value: &AttrValue, count_only: bool) -> String {
    match value {
        AttrValue::AclActionU8(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => data.to_string(),
        },
        AttrValue::AclActionI8(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => data.to_string(),
        },
        AttrValue::AclActionU16(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => data.to_string(),
        },
        AttrValue::AclActionI16(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => data.to_string(),
        },
        AttrValue::AclActionU32(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => data.to_string(),
        },
        AttrValue::AclActionI32(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => serialize_enum(*data, meta.enum_meta),
        },
        AttrValue::AclActionMac(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => serialize_mac(*data),
        },
        AttrValue::AclActionIpv4(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => serialize_ipv4(*data),
        },
        AttrValue::AclActionIpv6(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => serialize_ipv6(*data),
        },
        AttrValue::AclActionOid(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => serialize_oid(*data),
        },
        AttrValue::AclActionOidList(a) => match a {
            AclAction::Disabled => "disabled".to_string(),
            AclAction::Enabled { data } => {
                serialize_list(data, count_only, |oid| serialize_oid(*oid))
            }
        },
        _ => unreachable!("not an acl action"),
    }
}

fn deserialize_acl_action(
    meta: &AttrMetadata,
    s: &str,
    count_only: bool,
) -> SaiResult<AttrValue> {
    if s == "disabled" {
        return Ok(match meta.value_type {
            ValueType::AclActionU8 => AttrValue::AclActionU8(AclAction::Disabled),
            ValueType::AclActionI8 => AttrValue::AclActionI8(AclAction::Disabled),
            ValueType::AclActionU16 => AttrValue::AclActionU16(AclAction::Disabled),
            ValueType::AclActionI16 => AttrValue::AclActionI16(AclAction::Disabled),
            ValueType::AclActionU32 => AttrValue::AclActionU32(AclAction::Disabled),
            ValueType::AclActionI32 => AttrValue::AclActionI32(AclAction::Disabled),
            ValueType::AclActionMac => AttrValue::AclActionMac(AclAction::Disabled),
            ValueType::AclActionIpv4 => AttrValue::AclActionIpv4(AclAction::Disabled),
            ValueType::AclActionIpv6 => AttrValue::AclActionIpv6(AclAction::Disabled),
            ValueType::AclActionOid => AttrValue::AclActionOid(AclAction::Disabled),
            ValueType::AclActionOidList => AttrValue::AclActionOidList(AclAction::Disabled),
            _ => unreachable!("not an acl action"),
        });
    }

    match meta.value_type {
        ValueType::AclActionU8 => {
            Ok(AttrValue::AclActionU8(AclAction::Enabled { data: deserialize_unsigned(s)? }))
        }
        ValueType::AclActionI8 => {
            Ok(AttrValue::AclActionI8(AclAction::Enabled { data: deserialize_signed(s)? }))
        }
        ValueType::AclActionU16 => {
            Ok(AttrValue::AclActionU16(AclAction::Enabled { data: deserialize_unsigned(s)? }))
        }
        ValueType::AclActionI16 => {
            Ok(AttrValue::AclActionI16(AclAction::Enabled { data: deserialize_signed(s)? }))
        }
        ValueType::AclActionU32 => {
            Ok(AttrValue::AclActionU32(AclAction::Enabled { data: deserialize_unsigned(s)? }))
        }
        ValueType::AclActionI32 => Ok(AttrValue::AclActionI32(AclAction::Enabled {
            data: deserialize_enum(s, meta.enum_meta)?,
        })),
        ValueType::AclActionMac => {
            Ok(AttrValue::AclActionMac(AclAction::Enabled { data: deserialize_mac(s)? }))
        }
        ValueType::AclActionIpv4 => {
            Ok(AttrValue::AclActionIpv4(AclAction::Enabled { data: deserialize_ipv4(s)? }))
        }
        ValueType::AclActionIpv6 => {
            Ok(AttrValue::AclActionIpv6(AclAction::Enabled { data: deserialize_ipv6(s)? }))
        }
        ValueType::AclActionOid => {
            Ok(AttrValue::AclActionOid(AclAction::Enabled { data: deserialize_oid(s)? }))
        }
        ValueType::AclActionOidList => Ok(AttrValue::AclActionOidList(AclAction::Enabled {
            data: deserialize_list(s, count_only, deserialize_oid)?,
        })),
        _ => unreachable!("not an acl action"),
    }
}

fn serialize_acl_capability(cap: &AclCapability, count_only: bool) -> String {
    let list = serialize_list(&cap.action_list, count_only, |v| {
        serialize_enum(*v, Some(&crate::meta::enums::ACL_ACTION_TYPE))
    });
    format!("{}:{}", serialize_bool(cap.is_action_list_mandatory), list)
}

fn deserialize_acl_capability(s: &str, count_only: bool) -> SaiResult<AclCapability> {
    let (mandatory, list) = s.split_once(':').ok_or(SaiError::InvalidParameter)?;
    Ok(AclCapability {
        is_action_list_mandatory: deserialize_bool(mandatory)?,
        action_list: deserialize_list(list, count_only, |v| {
            deserialize_enum(v, Some(&crate::meta::enums::ACL_ACTION_TYPE))
        })?,
    })
}

// ----------------------------------------------------------------------
// Top-level dispatch
// ----------------------------------------------------------------------

/// Serialize an attribute value to its canonical wire form.
///
/// The value's runtime shape must match `meta.value_type`; the registry
/// and the shadow DB guarantee that for every stored attribute.
pub fn serialize_attr_value(meta: &AttrMetadata, value: &AttrValue, count_only: bool) -> String {
    debug_assert_eq!(value.value_type(), meta.value_type);

    match value {
        AttrValue::Bool(v) => serialize_bool(*v),
        AttrValue::CharData(v) => serialize_chardata(v),
        AttrValue::U8(v) => v.to_string(),
        AttrValue::I8(v) => v.to_string(),
        AttrValue::U16(v) => v.to_string(),
        AttrValue::I16(v) => v.to_string(),
        AttrValue::U32(v) => v.to_string(),
        AttrValue::I32(v) => serialize_enum(*v, meta.enum_meta),
        AttrValue::U64(v) => v.to_string(),
        AttrValue::I64(v) => v.to_string(),
        AttrValue::Mac(v) => serialize_mac(*v),
        AttrValue::Ipv4(v) => serialize_ipv4(*v),
        AttrValue::Ipv6(v) => serialize_ipv6(*v),
        AttrValue::IpAddress(v) => serialize_ip_address(*v),
        // stored prefixes have been validated, so the mask is contiguous
        AttrValue::IpPrefix(v) => serialize_ip_prefix(v).unwrap_or_default(),
        AttrValue::Pointer(v) => serialize_pointer(*v),
        AttrValue::Oid(v) => serialize_oid(*v),
        AttrValue::OidList(l) => serialize_list(l, count_only, |oid| serialize_oid(*oid)),
        AttrValue::U8List(l) => serialize_list(l, count_only, |v| v.to_string()),
        AttrValue::I8List(l) => serialize_list(l, count_only, |v| v.to_string()),
        AttrValue::U16List(l) => serialize_list(l, count_only, |v| v.to_string()),
        AttrValue::I16List(l) => serialize_list(l, count_only, |v| v.to_string()),
        AttrValue::U32List(l) => serialize_list(l, count_only, |v| v.to_string()),
        AttrValue::I32List(l) => {
            serialize_list(l, count_only, |v| serialize_enum(*v, meta.enum_meta))
        }
        AttrValue::U32Range(r) => serialize_u32_range(r),
        AttrValue::I32Range(r) => serialize_i32_range(r),
        AttrValue::VlanList(l) => serialize_list(l, count_only, |v| v.to_string()),
        AttrValue::QosMapList(l) => serialize_qos_map_list(l, count_only),
        AttrValue::TunnelMapList(l) => serialize_tunnel_map_list(l, count_only),
        AttrValue::AclCapability(c) => serialize_acl_capability(c, count_only),
        v if meta.value_type.is_acl_field() => serialize_acl_field(meta, v, count_only),
        v if meta.value_type.is_acl_action() => serialize_acl_action(meta, v, count_only),
        _ => unreachable!("unhandled value type {:?}", meta.value_type),
    }
}

/// Deserialize the canonical wire form back into a value of the declared
/// type.
pub fn deserialize_attr_value(
    s: &str,
    meta: &AttrMetadata,
    count_only: bool,
) -> SaiResult<AttrValue> {
    match meta.value_type {
        ValueType::Bool => Ok(AttrValue::Bool(deserialize_bool(s)?)),
        ValueType::CharData => Ok(AttrValue::CharData(deserialize_chardata(s)?)),
        ValueType::U8 => Ok(AttrValue::U8(deserialize_unsigned(s)?)),
        ValueType::I8 => Ok(AttrValue::I8(deserialize_signed(s)?)),
        ValueType::U16 => Ok(AttrValue::U16(deserialize_unsigned(s)?)),
        ValueType::I16 => Ok(AttrValue::I16(deserialize_signed(s)?)),
        ValueType::U32 => Ok(AttrValue::U32(deserialize_unsigned(s)?)),
        ValueType::I32 => Ok(AttrValue::I32(deserialize_enum(s, meta.enum_meta)?)),
        ValueType::U64 => Ok(AttrValue::U64(deserialize_u64(s, false)?)),
        ValueType::I64 => Ok(AttrValue::I64(deserialize_signed(s)?)),
        ValueType::Mac => Ok(AttrValue::Mac(deserialize_mac(s)?)),
        ValueType::Ipv4 => Ok(AttrValue::Ipv4(deserialize_ipv4(s)?)),
        ValueType::Ipv6 => Ok(AttrValue::Ipv6(deserialize_ipv6(s)?)),
        ValueType::IpAddress => Ok(AttrValue::IpAddress(deserialize_ip_address(s)?)),
        ValueType::IpPrefix => Ok(AttrValue::IpPrefix(deserialize_ip_prefix(s)?)),
        ValueType::Pointer => Ok(AttrValue::Pointer(deserialize_u64(s, true)?)),
        ValueType::Oid => Ok(AttrValue::Oid(deserialize_oid(s)?)),
        ValueType::OidList => {
            Ok(AttrValue::OidList(deserialize_list(s, count_only, deserialize_oid)?))
        }
        ValueType::U8List => {
            Ok(AttrValue::U8List(deserialize_list(s, count_only, deserialize_unsigned)?))
        }
        ValueType::I8List => {
            Ok(AttrValue::I8List(deserialize_list(s, count_only, deserialize_signed)?))
        }
        ValueType::U16List => {
            Ok(AttrValue::U16List(deserialize_list(s, count_only, deserialize_unsigned)?))
        }
        ValueType::I16List => {
            Ok(AttrValue::I16List(deserialize_list(s, count_only, deserialize_signed)?))
        }
        ValueType::U32List => {
            Ok(AttrValue::U32List(deserialize_list(s, count_only, deserialize_unsigned)?))
        }
        ValueType::I32List => Ok(AttrValue::I32List(deserialize_list(s, count_only, |v| {
            deserialize_enum(v, meta.enum_meta)
        })?)),
        ValueType::U32Range => Ok(AttrValue::U32Range(deserialize_u32_range(s)?)),
        ValueType::I32Range => Ok(AttrValue::I32Range(deserialize_i32_range(s)?)),
        ValueType::VlanList => {
            Ok(AttrValue::VlanList(deserialize_list(s, count_only, deserialize_unsigned)?))
        }
        ValueType::QosMapList => Ok(AttrValue::QosMapList(deserialize_qos_map_list(s, count_only)?)),
        ValueType::TunnelMapList => {
            Ok(AttrValue::TunnelMapList(deserialize_tunnel_map_list(s, count_only)?))
        }
        ValueType::AclCapability => {
            Ok(AttrValue::AclCapability(deserialize_acl_capability(s, count_only)?))
        }
        vt if vt.is_acl_field() => deserialize_acl_field(meta, s, count_only),
        vt if vt.is_acl_action() => deserialize_acl_action(meta, s, count_only),
        vt => unreachable!("unhandled value type {:?}", vt),
    }
}
