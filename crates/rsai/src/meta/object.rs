// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-object-type metadata.
//!
//! [`ObjectTypeInfo`] ties an object type to its attribute table and, for
//! struct-keyed (non-object-id) types, to descriptors of the key struct
//! members. Member descriptors carry an accessor so generic code can pull
//! an OID member out of a [`MetaKey`] without knowing the concrete struct.

use crate::meta::attr::AttrMetadata;
use crate::types::{MetaKey, ObjectType, Oid, ValueType};

/// Descriptor of one member of a struct key.
#[derive(Debug)]
pub struct StructMemberInfo {
    pub name: &'static str,
    pub value_type: ValueType,
    /// Referent types permitted when the member is OID-valued; empty
    /// otherwise.
    pub allowed_object_types: &'static [ObjectType],
    /// Extracts the member's OID from a meta-key of the owning type.
    /// `None` for non-OID members.
    pub get_oid: Option<fn(&MetaKey) -> Oid>,
}

impl StructMemberInfo {
    pub fn is_oid_member(&self) -> bool {
        self.get_oid.is_some()
    }

    pub fn allows_object_type(&self, object_type: ObjectType) -> bool {
        self.allowed_object_types.contains(&object_type)
    }
}

/// Static description of one object type.
#[derive(Debug)]
pub struct ObjectTypeInfo {
    pub object_type: ObjectType,
    /// True for struct-keyed leaves (FDB, neighbor, route).
    pub is_non_object_id: bool,
    pub attrs: &'static [AttrMetadata],
    pub struct_members: &'static [StructMemberInfo],
}

impl ObjectTypeInfo {
    /// Attribute metadata by id within this type's table.
    pub fn attr(&self, attr_id: u32) -> Option<&'static AttrMetadata> {
        self.attrs.iter().find(|md| md.attr_id == attr_id)
    }

    /// Struct member whose allowed referent set names the switch; this is
    /// how the switch id is extracted from a struct-keyed create.
    pub fn switch_member(&self) -> Option<&'static StructMemberInfo> {
        self.struct_members
            .iter()
            .find(|m| m.is_oid_member() && m.allows_object_type(ObjectType::Switch))
    }
}
