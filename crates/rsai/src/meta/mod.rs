// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Metadata registry.
//!
//! A compile-time catalogue describing every object type and attribute the
//! core validates: value types, flag sets, enum membership, allowed
//! referent types, defaults and condition tables. The registry is frozen
//! data; nothing here mutates at runtime.
//!
//! # Lookups
//!
//! - [`object_type_info`] by object type
//! - [`attr_metadata`] by `(object_type, attr_id)`
//! - [`attr_metadata_by_name`] by wire name (lazy index)
//! - [`find_attr`] to pick an attribute out of a call's list

pub mod attr;
pub mod enums;
pub mod object;
pub mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use attr::{AttrFlags, AttrMetadata, Condition, ConditionValue, DefaultValue, EnumMetadata};
pub use object::{ObjectTypeInfo, StructMemberInfo};

use crate::types::{Attr, AttrId, ObjectType};

/// Catalogue entry for an object type.
///
/// Panics on [`ObjectType::Null`]; a null type reaching a registry lookup
/// is a code bug, not an input error.
pub fn object_type_info(object_type: ObjectType) -> &'static ObjectTypeInfo {
    tables::OBJECT_TYPE_INFOS
        .iter()
        .find(|info| info.object_type == object_type)
        .unwrap_or_else(|| panic!("no metadata for object type {}", object_type))
}

/// Attribute metadata by object type and attribute id.
pub fn attr_metadata(object_type: ObjectType, attr_id: AttrId) -> Option<&'static AttrMetadata> {
    object_type_info(object_type).attr(attr_id)
}

/// Attribute metadata by wire name, e.g. `SAI_PORT_ATTR_SPEED`.
pub fn attr_metadata_by_name(name: &str) -> Option<&'static AttrMetadata> {
    static INDEX: OnceLock<HashMap<&'static str, &'static AttrMetadata>> = OnceLock::new();

    let index = INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for info in tables::OBJECT_TYPE_INFOS {
            for md in info.attrs {
                map.insert(md.name, md);
            }
        }
        map
    });

    index.get(name).copied()
}

/// First attribute with the given id in a call's attribute list.
pub fn find_attr(attrs: &[Attr], attr_id: AttrId) -> Option<&Attr> {
    attrs.iter().find(|a| a.id == attr_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ValueType, ALL_OBJECT_TYPES};

    #[test]
    fn test_every_type_has_info() {
        for ot in ALL_OBJECT_TYPES {
            let info = object_type_info(*ot);
            assert_eq!(info.object_type, *ot);
            assert!(!info.attrs.is_empty(), "{} has no attributes", ot);
        }
    }

    #[test]
    fn test_attr_ids_unique_per_type() {
        for info in tables::OBJECT_TYPE_INFOS {
            for md in info.attrs {
                let count = info.attrs.iter().filter(|m| m.attr_id == md.attr_id).count();
                assert_eq!(count, 1, "duplicate attr id {} on {}", md.attr_id, info.object_type);
                assert_eq!(md.object_type, info.object_type);
            }
        }
    }

    #[test]
    fn test_oid_attrs_carry_allowed_types() {
        for info in tables::OBJECT_TYPE_INFOS {
            for md in info.attrs {
                if md.value_type.carries_oids() {
                    assert!(
                        md.is_oid_attr(),
                        "{} is OID-shaped but has no allowed referent types",
                        md.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_object_id_types_have_switch_member() {
        for info in tables::OBJECT_TYPE_INFOS {
            if info.is_non_object_id {
                assert!(info.switch_member().is_some(), "{} lacks switch member", info.object_type);
                // read-only attributes are only defined on OID objects
                for md in info.attrs {
                    assert!(!md.flags.is_read_only(), "{} is read-only on a leaf", md.name);
                }
            } else {
                assert!(info.struct_members.is_empty());
            }
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let md = attr_metadata_by_name("SAI_PORT_ATTR_SPEED").unwrap();
        assert_eq!(md.object_type, ObjectType::Port);
        assert_eq!(md.value_type, ValueType::U32);
        assert!(attr_metadata_by_name("SAI_PORT_ATTR_BOGUS").is_none());
    }

    #[test]
    fn test_conditional_attrs_reference_known_attrs() {
        for info in tables::OBJECT_TYPE_INFOS {
            for md in info.attrs {
                for cond in md.conditions {
                    let cmd = info.attr(cond.attr_id).expect("condition attr exists");
                    match cond.value {
                        ConditionValue::Bool(_) => assert_eq!(cmd.value_type, ValueType::Bool),
                        ConditionValue::Enum(v) => {
                            assert!(cmd.is_allowed_enum_value(v), "{}", cmd.name);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_enum_attrs_have_valid_defaults() {
        for info in tables::OBJECT_TYPE_INFOS {
            for md in info.attrs {
                if let DefaultValue::I32(v) = md.default {
                    if md.is_enum() {
                        assert!(md.is_allowed_enum_value(v), "{} default out of range", md.name);
                    }
                }
            }
        }
    }
}
