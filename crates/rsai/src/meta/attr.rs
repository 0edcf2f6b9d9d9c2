// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Attribute metadata descriptors.
//!
//! One [`AttrMetadata`] per attribute, assembled into the per-object
//! static tables under [`crate::meta::tables`]. Descriptors are plain
//! const data; the registry never mutates at runtime.

use crate::types::{AttrId, AttrValue, ObjectType, Oid, ValueList, ValueType};

/// Attribute flag set (bit union, matching the classic flag semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrFlags(u32);

impl AttrFlags {
    pub const NONE: AttrFlags = AttrFlags(0);
    /// Must be supplied on create (unless conditional).
    pub const MANDATORY_ON_CREATE: AttrFlags = AttrFlags(1 << 0);
    /// Settable at create time only.
    pub const CREATE_ONLY: AttrFlags = AttrFlags(1 << 1);
    /// Settable at create time and later via set.
    pub const CREATE_AND_SET: AttrFlags = AttrFlags(1 << 2);
    /// Never settable by the client.
    pub const READ_ONLY: AttrFlags = AttrFlags(1 << 3);
    /// Participates in the per-type composite uniqueness key.
    pub const KEY: AttrFlags = AttrFlags(1 << 4);

    /// Union of two flag sets, usable in const tables.
    pub const fn with(self, other: AttrFlags) -> AttrFlags {
        AttrFlags(self.0 | other.0)
    }

    pub const fn contains(self, other: AttrFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_mandatory_on_create(self) -> bool {
        self.contains(AttrFlags::MANDATORY_ON_CREATE)
    }

    pub const fn is_create_only(self) -> bool {
        self.contains(AttrFlags::CREATE_ONLY)
    }

    pub const fn is_create_and_set(self) -> bool {
        self.contains(AttrFlags::CREATE_AND_SET)
    }

    pub const fn is_read_only(self) -> bool {
        self.contains(AttrFlags::READ_ONLY)
    }

    pub const fn is_key(self) -> bool {
        self.contains(AttrFlags::KEY)
    }
}

/// Enum descriptor: type name plus the declared (value, wire-name) members.
#[derive(Debug)]
pub struct EnumMetadata {
    pub name: &'static str,
    pub values: &'static [(i32, &'static str)],
}

impl EnumMetadata {
    pub fn contains(&self, value: i32) -> bool {
        self.values.iter().any(|(v, _)| *v == value)
    }

    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.values.iter().find(|(v, _)| *v == value).map(|(_, n)| *n)
    }

    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.values.iter().find(|(_, n)| *n == name).map(|(v, _)| *v)
    }
}

/// Default-value kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// No default; the attribute is absent until set.
    None,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    /// Enum or plain signed default.
    I32(i32),
    Mac([u8; 6]),
    NullOid,
    EmptyList,
    /// Derived by the switch at create time (e.g. default VLAN id); no
    /// constant value exists in metadata.
    SwitchInternal,
}

impl DefaultValue {
    /// Materialize the default as a value of the declared type, when a
    /// constant form exists.
    pub fn to_attr_value(self, value_type: ValueType) -> Option<AttrValue> {
        match self {
            DefaultValue::None | DefaultValue::SwitchInternal => None,
            DefaultValue::Bool(v) => Some(AttrValue::Bool(v)),
            DefaultValue::U8(v) => Some(AttrValue::U8(v)),
            DefaultValue::U16(v) => Some(AttrValue::U16(v)),
            DefaultValue::U32(v) => Some(AttrValue::U32(v)),
            DefaultValue::U64(v) => Some(AttrValue::U64(v)),
            DefaultValue::I32(v) => Some(AttrValue::I32(v)),
            DefaultValue::Mac(m) => Some(AttrValue::Mac(crate::types::Mac(m))),
            DefaultValue::NullOid => Some(AttrValue::Oid(Oid::NULL)),
            DefaultValue::EmptyList => match value_type {
                ValueType::OidList => Some(AttrValue::OidList(ValueList::new(Vec::new()))),
                ValueType::U8List => Some(AttrValue::U8List(ValueList::new(Vec::new()))),
                ValueType::I8List => Some(AttrValue::I8List(ValueList::new(Vec::new()))),
                ValueType::U16List => Some(AttrValue::U16List(ValueList::new(Vec::new()))),
                ValueType::I16List => Some(AttrValue::I16List(ValueList::new(Vec::new()))),
                ValueType::U32List => Some(AttrValue::U32List(ValueList::new(Vec::new()))),
                ValueType::I32List => Some(AttrValue::I32List(ValueList::new(Vec::new()))),
                ValueType::VlanList => Some(AttrValue::VlanList(ValueList::new(Vec::new()))),
                _ => None,
            },
        }
    }

    /// Enum payload of the default, used when evaluating conditions on an
    /// attribute the caller did not pass.
    pub fn enum_value(self) -> Option<i32> {
        match self {
            DefaultValue::I32(v) => Some(v),
            _ => None,
        }
    }

    pub fn bool_value(self) -> Option<bool> {
        match self {
            DefaultValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// Value a condition attribute must carry for the condition to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionValue {
    Bool(bool),
    Enum(i32),
}

/// One mandatory-on-create alternative: the attribute is required iff any
/// of its conditions matches the condition attribute's effective value.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    pub attr_id: AttrId,
    pub value: ConditionValue,
}

/// Static description of one attribute.
#[derive(Debug)]
pub struct AttrMetadata {
    pub object_type: ObjectType,
    pub attr_id: AttrId,
    /// Wire name, e.g. `SAI_PORT_ATTR_SPEED`. Also the `AttrHash` key on
    /// the driver side and the label in composite keys.
    pub name: &'static str,
    pub value_type: ValueType,
    pub flags: AttrFlags,
    /// Referent types permitted for OID-valued attributes; empty for
    /// non-OID attributes.
    pub allowed_object_types: &'static [ObjectType],
    pub allow_null_oid: bool,
    pub default: DefaultValue,
    pub enum_meta: Option<&'static EnumMetadata>,
    pub conditions: &'static [Condition],
}

impl AttrMetadata {
    pub const fn new(
        object_type: ObjectType,
        attr_id: AttrId,
        name: &'static str,
        value_type: ValueType,
        flags: AttrFlags,
    ) -> AttrMetadata {
        AttrMetadata {
            object_type,
            attr_id,
            name,
            value_type,
            flags,
            allowed_object_types: &[],
            allow_null_oid: false,
            default: DefaultValue::None,
            enum_meta: None,
            conditions: &[],
        }
    }

    pub const fn with_allowed(mut self, types: &'static [ObjectType]) -> AttrMetadata {
        self.allowed_object_types = types;
        self
    }

    pub const fn allow_null(mut self) -> AttrMetadata {
        self.allow_null_oid = true;
        self
    }

    pub const fn with_default(mut self, default: DefaultValue) -> AttrMetadata {
        self.default = default;
        self
    }

    pub const fn with_enum(mut self, meta: &'static EnumMetadata) -> AttrMetadata {
        self.enum_meta = Some(meta);
        self
    }

    pub const fn with_conditions(mut self, conditions: &'static [Condition]) -> AttrMetadata {
        self.conditions = conditions;
        self
    }

    /// Single-valued enum attribute (including the ACL int32 wrappers).
    pub fn is_enum(&self) -> bool {
        self.enum_meta.is_some()
            && matches!(
                self.value_type,
                ValueType::I32 | ValueType::AclFieldI32 | ValueType::AclActionI32
            )
    }

    /// Enum-list attribute.
    pub fn is_enum_list(&self) -> bool {
        self.enum_meta.is_some() && self.value_type == ValueType::I32List
    }

    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// True when values of this attribute can reference other objects.
    pub fn is_oid_attr(&self) -> bool {
        !self.allowed_object_types.is_empty()
    }

    pub fn allows_object_type(&self, object_type: ObjectType) -> bool {
        self.allowed_object_types.contains(&object_type)
    }

    pub fn is_allowed_enum_value(&self, value: i32) -> bool {
        match self.enum_meta {
            Some(meta) => meta.contains(value),
            None => false,
        }
    }

    /// `name:type` label used to prefix attribute-scoped log lines.
    pub fn attr_info(&self) -> String {
        format!("{}:{}", self.name, self.value_type.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_union() {
        let flags = AttrFlags::MANDATORY_ON_CREATE
            .with(AttrFlags::CREATE_ONLY)
            .with(AttrFlags::KEY);
        assert!(flags.is_mandatory_on_create());
        assert!(flags.is_create_only());
        assert!(flags.is_key());
        assert!(!flags.is_read_only());
        assert!(!flags.is_create_and_set());
    }

    #[test]
    fn test_default_empty_list() {
        let v = DefaultValue::EmptyList.to_attr_value(ValueType::OidList).unwrap();
        match v {
            AttrValue::OidList(l) => assert_eq!(l.count, 0),
            _ => panic!("wrong shape"),
        }
        assert!(DefaultValue::EmptyList.to_attr_value(ValueType::U32).is_none());
    }

    #[test]
    fn test_enum_metadata_lookup() {
        static COLORS: EnumMetadata = EnumMetadata {
            name: "sai_packet_color_t",
            values: &[(0, "SAI_PACKET_COLOR_GREEN"), (1, "SAI_PACKET_COLOR_YELLOW")],
        };
        assert!(COLORS.contains(0));
        assert!(!COLORS.contains(7));
        assert_eq!(COLORS.name_of(1), Some("SAI_PACKET_COLOR_YELLOW"));
        assert_eq!(COLORS.value_of("SAI_PACKET_COLOR_GREEN"), Some(0));
        assert_eq!(COLORS.value_of("SAI_PACKET_COLOR_RED"), None);
    }
}
