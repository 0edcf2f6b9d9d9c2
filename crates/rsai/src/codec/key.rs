// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object key serialization.
//!
//! Meta-keys serialize as `<OBJECT_TYPE_NAME>:<body>`. The body is the
//! OID wire form for OID objects and a JSON object for the struct-keyed
//! entries (JSON object keys are emitted in sorted order, which keeps the
//! strings stable for use as hash keys).

use serde_json::json;

use crate::codec::value::{
    deserialize_ip_address, deserialize_ip_prefix, deserialize_mac, deserialize_oid,
    serialize_enum, serialize_ip_prefix, serialize_oid,
};
use crate::meta::enums;
use crate::types::{
    FdbEntry, MetaKey, NeighborEntry, ObjectKey, ObjectType, RouteEntry, SaiError, SaiResult,
};

pub fn serialize_fdb_entry(entry: &FdbEntry) -> String {
    json!({
        "switch_id": serialize_oid(entry.switch_id),
        "mac": entry.mac.to_string(),
        "vlan": entry.vlan_id,
        "bridge_type": serialize_enum(entry.bridge_type, Some(&enums::FDB_ENTRY_BRIDGE_TYPE)),
        "bridge_id": serialize_oid(entry.bridge_id),
    })
    .to_string()
}

pub fn deserialize_fdb_entry(s: &str) -> SaiResult<FdbEntry> {
    let v: serde_json::Value = serde_json::from_str(s).map_err(|_| SaiError::InvalidParameter)?;
    let text = |name: &str| -> SaiResult<&str> {
        v.get(name).and_then(serde_json::Value::as_str).ok_or(SaiError::InvalidParameter)
    };

    Ok(FdbEntry {
        switch_id: deserialize_oid(text("switch_id")?)?,
        mac: deserialize_mac(text("mac")?)?,
        vlan_id: v
            .get("vlan")
            .and_then(serde_json::Value::as_u64)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or(SaiError::InvalidParameter)?,
        bridge_type: enums::FDB_ENTRY_BRIDGE_TYPE
            .value_of(text("bridge_type")?)
            .ok_or(SaiError::InvalidParameter)?,
        bridge_id: deserialize_oid(text("bridge_id")?)?,
    })
}

pub fn serialize_neighbor_entry(entry: &NeighborEntry) -> String {
    json!({
        "switch_id": serialize_oid(entry.switch_id),
        "rif": serialize_oid(entry.rif_id),
        "ip": entry.ip_address.to_string(),
    })
    .to_string()
}

pub fn deserialize_neighbor_entry(s: &str) -> SaiResult<NeighborEntry> {
    let v: serde_json::Value = serde_json::from_str(s).map_err(|_| SaiError::InvalidParameter)?;
    let text = |name: &str| -> SaiResult<&str> {
        v.get(name).and_then(serde_json::Value::as_str).ok_or(SaiError::InvalidParameter)
    };

    Ok(NeighborEntry {
        switch_id: deserialize_oid(text("switch_id")?)?,
        rif_id: deserialize_oid(text("rif")?)?,
        ip_address: deserialize_ip_address(text("ip")?)?,
    })
}

pub fn serialize_route_entry(entry: &RouteEntry) -> SaiResult<String> {
    Ok(json!({
        "switch_id": serialize_oid(entry.switch_id),
        "vr": serialize_oid(entry.vr_id),
        "dest": serialize_ip_prefix(&entry.destination)?,
    })
    .to_string())
}

pub fn deserialize_route_entry(s: &str) -> SaiResult<RouteEntry> {
    let v: serde_json::Value = serde_json::from_str(s).map_err(|_| SaiError::InvalidParameter)?;
    let text = |name: &str| -> SaiResult<&str> {
        v.get(name).and_then(serde_json::Value::as_str).ok_or(SaiError::InvalidParameter)
    };

    Ok(RouteEntry {
        switch_id: deserialize_oid(text("switch_id")?)?,
        vr_id: deserialize_oid(text("vr")?)?,
        destination: deserialize_ip_prefix(text("dest")?)?,
    })
}

/// Canonical `<OBJECT_TYPE_NAME>:<body>` string; the shadow DB hash key.
///
/// A route entry with a non-contiguous destination mask has no canonical
/// form; entry validation rejects it before any key is needed.
pub fn serialize_object_meta_key(key: &MetaKey) -> SaiResult<String> {
    let body = match &key.key {
        ObjectKey::Oid(oid) => serialize_oid(*oid),
        ObjectKey::Fdb(e) => serialize_fdb_entry(e),
        ObjectKey::Neighbor(e) => serialize_neighbor_entry(e),
        ObjectKey::Route(e) => serialize_route_entry(e)?,
    };

    Ok(format!("{}:{}", key.object_type.name(), body))
}

/// Split on the first `:` after the type name and dispatch by type.
pub fn deserialize_object_meta_key(s: &str) -> SaiResult<MetaKey> {
    let (name, body) = s.split_once(':').ok_or(SaiError::InvalidParameter)?;

    let object_type = ObjectType::from_name(name).ok_or_else(|| {
        log::error!("unknown object type '{}' in meta key", name);
        SaiError::InvalidParameter
    })?;

    let key = match object_type {
        ObjectType::FdbEntry => ObjectKey::Fdb(deserialize_fdb_entry(body)?),
        ObjectType::NeighborEntry => ObjectKey::Neighbor(deserialize_neighbor_entry(body)?),
        ObjectType::RouteEntry => ObjectKey::Route(deserialize_route_entry(body)?),
        _ => ObjectKey::Oid(deserialize_oid(body)?),
    };

    Ok(MetaKey { object_type, key })
}
