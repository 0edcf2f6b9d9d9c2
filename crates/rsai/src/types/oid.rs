// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Opaque 64-bit object identifiers.
//!
//! An OID packs three bit-fields:
//!
//! ```text
//! bits 63..56   switch index
//! bits 55..48   object type
//! bits 47..0    instance counter
//! ```
//!
//! The packing is an internal convention only. Outside the process an OID
//! is opaque and rendered as `oid:0x<hex>`. Call sites never do arithmetic
//! on the raw value; they go through [`Oid::object_type`] and
//! [`Oid::switch_id`].

use crate::types::ObjectType;

const OBJECT_TYPE_SHIFT: u32 = 48;
const SWITCH_INDEX_SHIFT: u32 = 56;
const COUNTER_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

/// Opaque object handle. `Oid::NULL` means "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Oid(u64);

impl Oid {
    /// The distinguished null handle.
    pub const NULL: Oid = Oid(0);

    /// Rebuild an OID from its raw wire value.
    pub const fn from_raw(raw: u64) -> Oid {
        Oid(raw)
    }

    /// Raw 64-bit value, for serialization only.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack switch index, object type and instance counter into a handle.
    pub fn encode(switch_index: u8, object_type: ObjectType, counter: u64) -> Oid {
        Oid(((switch_index as u64) << SWITCH_INDEX_SHIFT)
            | ((object_type as u64) << OBJECT_TYPE_SHIFT)
            | (counter & COUNTER_MASK))
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Object type encoded in the handle.
    ///
    /// Returns [`ObjectType::Null`] for the null handle and for handles
    /// whose type byte is outside the known range. No DB access involved.
    pub fn object_type(self) -> ObjectType {
        if self.is_null() {
            return ObjectType::Null;
        }

        match ObjectType::from_u8(((self.0 >> OBJECT_TYPE_SHIFT) & 0xFF) as u8) {
            Some(ot) => ot,
            None => {
                log::error!("invalid object id {}", self);
                ObjectType::Null
            }
        }
    }

    /// Switch index encoded in the handle.
    pub fn switch_index(self) -> u8 {
        ((self.0 >> SWITCH_INDEX_SHIFT) & 0xFF) as u8
    }

    /// OID of the switch this object belongs to, derived from the handle
    /// alone. A switch handle returns itself; the null handle returns null.
    pub fn switch_id(self) -> Oid {
        if self.is_null() {
            return Oid::NULL;
        }

        if self.object_type() == ObjectType::Switch {
            return self;
        }

        let index = self.switch_index();
        Oid::encode(index, ObjectType::Switch, index as u64)
    }
}

impl std::fmt::Display for Oid {
    /// Wire form: `oid:0x<lowercase hex, no padding>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "oid:0x{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_oid() {
        assert!(Oid::NULL.is_null());
        assert_eq!(Oid::NULL.object_type(), ObjectType::Null);
        assert_eq!(Oid::NULL.switch_id(), Oid::NULL);
    }

    #[test]
    fn test_encode_fields() {
        let oid = Oid::encode(3, ObjectType::Queue, 0x1234);
        assert_eq!(oid.switch_index(), 3);
        assert_eq!(oid.object_type(), ObjectType::Queue);
        assert_eq!(oid.raw() & 0x0000_FFFF_FFFF_FFFF, 0x1234);
    }

    #[test]
    fn test_switch_id_derivation() {
        let switch = Oid::encode(2, ObjectType::Switch, 2);
        let port = Oid::encode(2, ObjectType::Port, 7);
        assert_eq!(port.switch_id(), switch);
        assert_eq!(switch.switch_id(), switch);
    }

    #[test]
    fn test_counter_is_masked() {
        let oid = Oid::encode(0, ObjectType::Port, u64::MAX);
        assert_eq!(oid.object_type(), ObjectType::Port);
        assert_eq!(oid.switch_index(), 0);
    }

    #[test]
    fn test_display() {
        let oid = Oid::encode(0, ObjectType::Switch, 0);
        assert_eq!(oid.to_string(), "oid:0x21000000000000");
        assert_eq!(Oid::NULL.to_string(), "oid:0x0");
    }

    #[test]
    fn test_invalid_type_byte() {
        let oid = Oid::from_raw(0x00FF_0000_0000_0001);
        assert_eq!(oid.object_type(), ObjectType::Null);
    }
}
