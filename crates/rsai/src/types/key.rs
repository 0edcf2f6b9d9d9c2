// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object keys.
//!
//! OID objects are keyed by their handle. The three struct-keyed leaves
//! (FDB, neighbor, route) are keyed by a typed tuple. [`MetaKey`] unifies
//! both: it is what travels through the validator, the shadow DB and the
//! driver seam, and what serializes to the canonical
//! `<OBJECT_TYPE_NAME>:<body>` string.

use crate::types::{IpAddress, IpPrefix, Mac, ObjectType, Oid};

/// FDB entry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdbEntry {
    pub switch_id: Oid,
    pub mac: Mac,
    pub vlan_id: u16,
    /// `sai_fdb_entry_bridge_type_t` enum value.
    pub bridge_type: i32,
    pub bridge_id: Oid,
}

/// Neighbor entry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborEntry {
    pub switch_id: Oid,
    pub rif_id: Oid,
    pub ip_address: IpAddress,
}

/// Route entry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub switch_id: Oid,
    pub vr_id: Oid,
    pub destination: IpPrefix,
}

/// The key body of a [`MetaKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKey {
    Oid(Oid),
    Fdb(FdbEntry),
    Neighbor(NeighborEntry),
    Route(RouteEntry),
}

/// Object type plus key body; the canonical object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaKey {
    pub object_type: ObjectType,
    pub key: ObjectKey,
}

impl MetaKey {
    pub fn oid(object_type: ObjectType, oid: Oid) -> MetaKey {
        MetaKey { object_type, key: ObjectKey::Oid(oid) }
    }

    pub fn fdb(entry: FdbEntry) -> MetaKey {
        MetaKey { object_type: ObjectType::FdbEntry, key: ObjectKey::Fdb(entry) }
    }

    pub fn neighbor(entry: NeighborEntry) -> MetaKey {
        MetaKey { object_type: ObjectType::NeighborEntry, key: ObjectKey::Neighbor(entry) }
    }

    pub fn route(entry: RouteEntry) -> MetaKey {
        MetaKey { object_type: ObjectType::RouteEntry, key: ObjectKey::Route(entry) }
    }

    /// OID body, when this key identifies an OID object.
    pub fn as_oid(&self) -> Option<Oid> {
        match self.key {
            ObjectKey::Oid(oid) => Some(oid),
            _ => None,
        }
    }

    /// Switch the keyed object belongs to. For OID objects derived from
    /// the handle, for entry keys taken from the embedded switch id.
    pub fn switch_id(&self) -> Oid {
        match self.key {
            ObjectKey::Oid(oid) => oid.switch_id(),
            ObjectKey::Fdb(e) => e.switch_id,
            ObjectKey::Neighbor(e) => e.switch_id,
            ObjectKey::Route(e) => e.switch_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_key_accessors() {
        let oid = Oid::encode(0, ObjectType::Port, 1);
        let key = MetaKey::oid(ObjectType::Port, oid);
        assert_eq!(key.as_oid(), Some(oid));
        assert_eq!(key.switch_id(), oid.switch_id());
    }

    #[test]
    fn test_entry_key_switch_id() {
        let switch = Oid::encode(0, ObjectType::Switch, 0);
        let entry = FdbEntry {
            switch_id: switch,
            mac: Mac([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
            vlan_id: 1,
            bridge_type: 0,
            bridge_id: Oid::NULL,
        };
        let key = MetaKey::fdb(entry);
        assert_eq!(key.switch_id(), switch);
        assert_eq!(key.as_oid(), None);
    }
}
