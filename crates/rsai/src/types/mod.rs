// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Core value types: object identity, status codes, attribute values.

mod ip;
mod key;
mod object_type;
mod oid;
mod status;
mod value;

pub use ip::{IpAddress, IpPrefix, Mac};
pub use key::{FdbEntry, MetaKey, NeighborEntry, ObjectKey, RouteEntry};
pub use object_type::{ObjectType, ALL_OBJECT_TYPES};
pub use oid::Oid;
pub use status::{SaiError, SaiResult};
pub use value::{
    AclAction, AclCapability, AclField, Attr, AttrId, AttrValue, CharData, I32Range, QosMap,
    QosMapParams, TunnelMap, TunnelMapParams, U32Range, ValueList, ValueType, MAX_LIST_COUNT,
};
