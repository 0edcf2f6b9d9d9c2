// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Attribute values.
//!
//! [`AttrValue`] is the tagged union over every value shape an attribute
//! can carry. Each list-bearing variant owns its storage through
//! [`ValueList`], which keeps the caller-visible distinction between a
//! null list (length query) and a present list. ACL fields and actions use
//! the enabled-wrapper shape instead of the C `enable` flag plus payload.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::types::{IpAddress, IpPrefix, Mac, Oid};

/// Attribute identifier, scoped by object type.
pub type AttrId = u32;

/// Largest list count any attribute may carry.
pub const MAX_LIST_COUNT: u32 = 0x1000;

/// Fixed-size character buffer (31 usable bytes plus NUL, as in the wire
/// contract). Stored raw; printability is enforced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharData(pub [u8; 32]);

impl CharData {
    /// Build from a byte slice, truncating at 31 bytes.
    pub fn new(bytes: &[u8]) -> CharData {
        let mut buf = [0u8; 32];
        let n = bytes.len().min(31);
        buf[..n].copy_from_slice(&bytes[..n]);
        CharData(buf)
    }

    /// Length up to the first NUL, capped at the buffer size.
    pub fn len(&self) -> usize {
        self.0.iter().position(|b| *b == 0).unwrap_or(self.0.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes up to the first NUL.
    pub fn bytes(&self) -> &[u8] {
        &self.0[..self.len()]
    }
}

/// List storage that preserves the count/pointer split of the C ABI.
///
/// `count` is what the caller claimed (or what a length query reported);
/// `items` is `None` when the list pointer was null. The validator rejects
/// the inconsistent combinations, so both must be representable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueList<T> {
    pub count: u32,
    pub items: Option<Vec<T>>,
}

impl<T> ValueList<T> {
    /// Present list; count matches the item count.
    pub fn new(items: Vec<T>) -> ValueList<T> {
        ValueList { count: items.len() as u32, items: Some(items) }
    }

    /// Null list carrying only a count (length query form).
    pub fn null(count: u32) -> ValueList<T> {
        ValueList { count, items: None }
    }

    /// Output buffer of the given capacity, for `get` calls.
    pub fn with_capacity(count: u32) -> ValueList<T> {
        ValueList { count, items: Some(Vec::new()) }
    }

    pub fn is_null(&self) -> bool {
        self.items.is_none()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.as_deref().unwrap_or(&[]).iter()
    }
}

/// Closed unsigned range; valid iff `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U32Range {
    pub min: u32,
    pub max: u32,
}

/// Closed signed range; valid iff `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I32Range {
    pub min: i32,
    pub max: i32,
}

/// One side of a QoS map entry. `color` is a packet-color enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QosMapParams {
    pub tc: u8,
    pub dscp: u8,
    pub dot1p: u8,
    pub prio: u8,
    pub pg: u8,
    pub queue_index: u8,
    pub color: i32,
}

/// QoS map entry: key side maps to value side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QosMap {
    pub key: QosMapParams,
    pub value: QosMapParams,
}

/// One side of a tunnel map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TunnelMapParams {
    pub oecn: u8,
    pub uecn: u8,
    pub vlan_id: u16,
    pub vni_id: u32,
}

/// Tunnel map entry: key side maps to value side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TunnelMap {
    pub key: TunnelMapParams,
    pub value: TunnelMapParams,
}

/// ACL match field: disabled, or a payload with a mask of the same shape.
///
/// Bool, OID and OID-list fields carry no mask on the wire; for those the
/// mask side is ignored by the codec and the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AclField<T> {
    Disabled,
    Enabled { data: T, mask: T },
}

impl<T> AclField<T> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, AclField::Enabled { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AclField::Enabled { data, .. } => Some(data),
            AclField::Disabled => None,
        }
    }
}

/// ACL action parameter: disabled, or a payload (actions have no mask).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AclAction<T> {
    Disabled,
    Enabled { data: T },
}

impl<T> AclAction<T> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, AclAction::Enabled { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AclAction::Enabled { data } => Some(data),
            AclAction::Disabled => None,
        }
    }
}

/// ACL capability report: mandatory flag plus an action-type enum list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AclCapability {
    pub is_action_list_mandatory: bool,
    pub action_list: ValueList<i32>,
}

/// Declared value shape of an attribute, as recorded in metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    CharData,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    Mac,
    Ipv4,
    Ipv6,
    IpAddress,
    IpPrefix,
    Pointer,
    Oid,
    OidList,
    U8List,
    I8List,
    U16List,
    I16List,
    U32List,
    I32List,
    U32Range,
    I32Range,
    VlanList,
    QosMapList,
    TunnelMapList,
    AclFieldBool,
    AclFieldU8,
    AclFieldI8,
    AclFieldU16,
    AclFieldI16,
    AclFieldU32,
    AclFieldI32,
    AclFieldMac,
    AclFieldIpv4,
    AclFieldIpv6,
    AclFieldOid,
    AclFieldOidList,
    AclActionU8,
    AclActionI8,
    AclActionU16,
    AclActionI16,
    AclActionU32,
    AclActionI32,
    AclActionMac,
    AclActionIpv4,
    AclActionIpv6,
    AclActionOid,
    AclActionOidList,
    AclCapability,
}

impl ValueType {
    /// True for the ACL field shapes (payload plus mask plus enable).
    pub fn is_acl_field(self) -> bool {
        matches!(
            self,
            ValueType::AclFieldBool
                | ValueType::AclFieldU8
                | ValueType::AclFieldI8
                | ValueType::AclFieldU16
                | ValueType::AclFieldI16
                | ValueType::AclFieldU32
                | ValueType::AclFieldI32
                | ValueType::AclFieldMac
                | ValueType::AclFieldIpv4
                | ValueType::AclFieldIpv6
                | ValueType::AclFieldOid
                | ValueType::AclFieldOidList
        )
    }

    /// True for the ACL action shapes (payload plus enable).
    pub fn is_acl_action(self) -> bool {
        matches!(
            self,
            ValueType::AclActionU8
                | ValueType::AclActionI8
                | ValueType::AclActionU16
                | ValueType::AclActionI16
                | ValueType::AclActionU32
                | ValueType::AclActionI32
                | ValueType::AclActionMac
                | ValueType::AclActionIpv4
                | ValueType::AclActionIpv6
                | ValueType::AclActionOid
                | ValueType::AclActionOidList
        )
    }

    /// True when a value of this shape can point at other objects.
    pub fn carries_oids(self) -> bool {
        matches!(
            self,
            ValueType::Oid
                | ValueType::OidList
                | ValueType::AclFieldOid
                | ValueType::AclFieldOidList
                | ValueType::AclActionOid
                | ValueType::AclActionOidList
        )
    }

    /// Wire name used in log lines and attribute-info strings.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::CharData => "chardata",
            ValueType::U8 => "uint8",
            ValueType::I8 => "int8",
            ValueType::U16 => "uint16",
            ValueType::I16 => "int16",
            ValueType::U32 => "uint32",
            ValueType::I32 => "int32",
            ValueType::U64 => "uint64",
            ValueType::I64 => "int64",
            ValueType::Mac => "mac",
            ValueType::Ipv4 => "ipv4",
            ValueType::Ipv6 => "ipv6",
            ValueType::IpAddress => "ipaddress",
            ValueType::IpPrefix => "ipprefix",
            ValueType::Pointer => "pointer",
            ValueType::Oid => "oid",
            ValueType::OidList => "oidlist",
            ValueType::U8List => "uint8list",
            ValueType::I8List => "int8list",
            ValueType::U16List => "uint16list",
            ValueType::I16List => "int16list",
            ValueType::U32List => "uint32list",
            ValueType::I32List => "int32list",
            ValueType::U32Range => "uint32range",
            ValueType::I32Range => "int32range",
            ValueType::VlanList => "vlanlist",
            ValueType::QosMapList => "qosmaplist",
            ValueType::TunnelMapList => "tunnelmaplist",
            ValueType::AclFieldBool => "aclfield:bool",
            ValueType::AclFieldU8 => "aclfield:uint8",
            ValueType::AclFieldI8 => "aclfield:int8",
            ValueType::AclFieldU16 => "aclfield:uint16",
            ValueType::AclFieldI16 => "aclfield:int16",
            ValueType::AclFieldU32 => "aclfield:uint32",
            ValueType::AclFieldI32 => "aclfield:int32",
            ValueType::AclFieldMac => "aclfield:mac",
            ValueType::AclFieldIpv4 => "aclfield:ipv4",
            ValueType::AclFieldIpv6 => "aclfield:ipv6",
            ValueType::AclFieldOid => "aclfield:oid",
            ValueType::AclFieldOidList => "aclfield:oidlist",
            ValueType::AclActionU8 => "aclaction:uint8",
            ValueType::AclActionI8 => "aclaction:int8",
            ValueType::AclActionU16 => "aclaction:uint16",
            ValueType::AclActionI16 => "aclaction:int16",
            ValueType::AclActionU32 => "aclaction:uint32",
            ValueType::AclActionI32 => "aclaction:int32",
            ValueType::AclActionMac => "aclaction:mac",
            ValueType::AclActionIpv4 => "aclaction:ipv4",
            ValueType::AclActionIpv6 => "aclaction:ipv6",
            ValueType::AclActionOid => "aclaction:oid",
            ValueType::AclActionOidList => "aclaction:oidlist",
            ValueType::AclCapability => "aclcapability",
        }
    }
}

/// Attribute value: one variant per [`ValueType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Bool(bool),
    CharData(CharData),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    Mac(Mac),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    IpAddress(IpAddress),
    IpPrefix(IpPrefix),
    Pointer(u64),
    Oid(Oid),
    OidList(ValueList<Oid>),
    U8List(ValueList<u8>),
    I8List(ValueList<i8>),
    U16List(ValueList<u16>),
    I16List(ValueList<i16>),
    U32List(ValueList<u32>),
    I32List(ValueList<i32>),
    U32Range(U32Range),
    I32Range(I32Range),
    VlanList(ValueList<u16>),
    QosMapList(ValueList<QosMap>),
    TunnelMapList(ValueList<TunnelMap>),
    AclFieldBool(AclField<bool>),
    AclFieldU8(AclField<u8>),
    AclFieldI8(AclField<i8>),
    AclFieldU16(AclField<u16>),
    AclFieldI16(AclField<i16>),
    AclFieldU32(AclField<u32>),
    AclFieldI32(AclField<i32>),
    AclFieldMac(AclField<Mac>),
    AclFieldIpv4(AclField<Ipv4Addr>),
    AclFieldIpv6(AclField<Ipv6Addr>),
    AclFieldOid(AclField<Oid>),
    AclFieldOidList(AclField<ValueList<Oid>>),
    AclActionU8(AclAction<u8>),
    AclActionI8(AclAction<i8>),
    AclActionU16(AclAction<u16>),
    AclActionI16(AclAction<i16>),
    AclActionU32(AclAction<u32>),
    AclActionI32(AclAction<i32>),
    AclActionMac(AclAction<Mac>),
    AclActionIpv4(AclAction<Ipv4Addr>),
    AclActionIpv6(AclAction<Ipv6Addr>),
    AclActionOid(AclAction<Oid>),
    AclActionOidList(AclAction<ValueList<Oid>>),
    AclCapability(AclCapability),
}

impl AttrValue {
    /// Runtime tag of this value, compared against metadata on every store.
    pub fn value_type(&self) -> ValueType {
        match self {
            AttrValue::Bool(_) => ValueType::Bool,
            AttrValue::CharData(_) => ValueType::CharData,
            AttrValue::U8(_) => ValueType::U8,
            AttrValue::I8(_) => ValueType::I8,
            AttrValue::U16(_) => ValueType::U16,
            AttrValue::I16(_) => ValueType::I16,
            AttrValue::U32(_) => ValueType::U32,
            AttrValue::I32(_) => ValueType::I32,
            AttrValue::U64(_) => ValueType::U64,
            AttrValue::I64(_) => ValueType::I64,
            AttrValue::Mac(_) => ValueType::Mac,
            AttrValue::Ipv4(_) => ValueType::Ipv4,
            AttrValue::Ipv6(_) => ValueType::Ipv6,
            AttrValue::IpAddress(_) => ValueType::IpAddress,
            AttrValue::IpPrefix(_) => ValueType::IpPrefix,
            AttrValue::Pointer(_) => ValueType::Pointer,
            AttrValue::Oid(_) => ValueType::Oid,
            AttrValue::OidList(_) => ValueType::OidList,
            AttrValue::U8List(_) => ValueType::U8List,
            AttrValue::I8List(_) => ValueType::I8List,
            AttrValue::U16List(_) => ValueType::U16List,
            AttrValue::I16List(_) => ValueType::I16List,
            AttrValue::U32List(_) => ValueType::U32List,
            AttrValue::I32List(_) => ValueType::I32List,
            AttrValue::U32Range(_) => ValueType::U32Range,
            AttrValue::I32Range(_) => ValueType::I32Range,
            AttrValue::VlanList(_) => ValueType::VlanList,
            AttrValue::QosMapList(_) => ValueType::QosMapList,
            AttrValue::TunnelMapList(_) => ValueType::TunnelMapList,
            AttrValue::AclFieldBool(_) => ValueType::AclFieldBool,
            AttrValue::AclFieldU8(_) => ValueType::AclFieldU8,
            AttrValue::AclFieldI8(_) => ValueType::AclFieldI8,
            AttrValue::AclFieldU16(_) => ValueType::AclFieldU16,
            AttrValue::AclFieldI16(_) => ValueType::AclFieldI16,
            AttrValue::AclFieldU32(_) => ValueType::AclFieldU32,
            AttrValue::AclFieldI32(_) => ValueType::AclFieldI32,
            AttrValue::AclFieldMac(_) => ValueType::AclFieldMac,
            AttrValue::AclFieldIpv4(_) => ValueType::AclFieldIpv4,
            AttrValue::AclFieldIpv6(_) => ValueType::AclFieldIpv6,
            AttrValue::AclFieldOid(_) => ValueType::AclFieldOid,
            AttrValue::AclFieldOidList(_) => ValueType::AclFieldOidList,
            AttrValue::AclActionU8(_) => ValueType::AclActionU8,
            AttrValue::AclActionI8(_) => ValueType::AclActionI8,
            AttrValue::AclActionU16(_) => ValueType::AclActionU16,
            AttrValue::AclActionI16(_) => ValueType::AclActionI16,
            AttrValue::AclActionU32(_) => ValueType::AclActionU32,
            AttrValue::AclActionI32(_) => ValueType::AclActionI32,
            AttrValue::AclActionMac(_) => ValueType::AclActionMac,
            AttrValue::AclActionIpv4(_) => ValueType::AclActionIpv4,
            AttrValue::AclActionIpv6(_) => ValueType::AclActionIpv6,
            AttrValue::AclActionOid(_) => ValueType::AclActionOid,
            AttrValue::AclActionOidList(_) => ValueType::AclActionOidList,
            AttrValue::AclCapability(_) => ValueType::AclCapability,
        }
    }

    /// Enum payload, honoring the ACL wrappers the way enum-typed
    /// attributes carry their value.
    pub fn enum_value(&self) -> Option<i32> {
        match self {
            AttrValue::I32(v) => Some(*v),
            AttrValue::AclFieldI32(f) => f.data().copied(),
            AttrValue::AclActionI32(a) => a.data().copied(),
            _ => None,
        }
    }

    /// Plain OID payload, when this value is a single OID.
    pub fn as_oid(&self) -> Option<Oid> {
        match self {
            AttrValue::Oid(oid) => Some(*oid),
            _ => None,
        }
    }
}

/// Attribute: identifier plus value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub id: AttrId,
    pub value: AttrValue,
}

impl Attr {
    pub fn new(id: AttrId, value: AttrValue) -> Attr {
        Attr { id, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chardata_len() {
        assert_eq!(CharData::new(b"eth0").len(), 4);
        assert_eq!(CharData::new(b"").len(), 0);
        assert!(CharData::new(b"").is_empty());
        // 31 bytes max, rest truncated
        assert_eq!(CharData::new(&[b'a'; 40]).len(), 31);
    }

    #[test]
    fn test_value_list_forms() {
        let l = ValueList::new(vec![1u32, 2, 3]);
        assert_eq!(l.count, 3);
        assert!(!l.is_null());

        let n: ValueList<u32> = ValueList::null(7);
        assert_eq!(n.count, 7);
        assert!(n.is_null());
        assert_eq!(n.iter().count(), 0);
    }

    #[test]
    fn test_value_type_tags() {
        assert_eq!(AttrValue::Bool(true).value_type(), ValueType::Bool);
        assert_eq!(
            AttrValue::OidList(ValueList::new(vec![])).value_type(),
            ValueType::OidList
        );
        assert!(ValueType::AclFieldOid.carries_oids());
        assert!(ValueType::AclFieldOid.is_acl_field());
        assert!(!ValueType::AclFieldOid.is_acl_action());
        assert!(!ValueType::U32.carries_oids());
    }

    #[test]
    fn test_enum_value_extraction() {
        assert_eq!(AttrValue::I32(5).enum_value(), Some(5));
        let field = AttrValue::AclFieldI32(AclField::Enabled { data: 3, mask: 0xf });
        assert_eq!(field.enum_value(), Some(3));
        let action = AttrValue::AclActionI32(AclAction::Disabled);
        assert_eq!(action.enum_value(), None);
        assert_eq!(AttrValue::U32(1).enum_value(), None);
    }
}
