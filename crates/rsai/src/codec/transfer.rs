// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Attribute transfer into caller-provided buffers.
//!
//! `get` hands the caller values copied out of the shadow state. Lists
//! respect the caller's declared capacity: a too-small output buffer gets
//! its count updated and the call reports `BUFFER_OVERFLOW` so it can be
//! retried, while the remaining attributes keep being processed.

use crate::types::{AclAction, AclField, Attr, AttrValue, SaiError, SaiResult, ValueList};

fn transfer_list<T: Clone>(
    src: &ValueList<T>,
    dst: &mut ValueList<T>,
    count_only: bool,
) -> SaiResult<()> {
    if count_only || dst.is_null() {
        dst.count = src.count;
        return Ok(());
    }

    if dst.count < src.count {
        dst.count = src.count;
        return Err(SaiError::BufferOverflow);
    }

    if src.count > 0 && src.is_null() {
        panic!("source list is null when count is {}, wrong db insert?", src.count);
    }

    dst.count = src.count;
    dst.items = Some(src.iter().cloned().collect());
    Ok(())
}

fn transfer_acl_field_list<T: Clone>(
    src: &AclField<ValueList<T>>,
    dst: &mut AclField<ValueList<T>>,
    count_only: bool,
) -> SaiResult<()> {
    match (src, dst) {
        (AclField::Enabled { data: s, .. }, AclField::Enabled { data: d, .. }) => {
            transfer_list(s, d, count_only)
        }
        (src, dst) => {
            *dst = src.clone();
            Ok(())
        }
    }
}

fn transfer_acl_action_list<T: Clone>(
    src: &AclAction<ValueList<T>>,
    dst: &mut AclAction<ValueList<T>>,
    count_only: bool,
) -> SaiResult<()> {
    match (src, dst) {
        (AclAction::Enabled { data: s }, AclAction::Enabled { data: d }) => {
            transfer_list(s, d, count_only)
        }
        (src, dst) => {
            *dst = src.clone();
            Ok(())
        }
    }
}

/// Copy one stored value into a caller buffer of the same shape.
pub fn transfer_attribute(
    src: &AttrValue,
    dst: &mut AttrValue,
    count_only: bool,
) -> SaiResult<()> {
    match (src, dst) {
        (AttrValue::OidList(s), AttrValue::OidList(d)) => transfer_list(s, d, count_only),
        (AttrValue::U8List(s), AttrValue::U8List(d)) => transfer_list(s, d, count_only),
        (AttrValue::I8List(s), AttrValue::I8List(d)) => transfer_list(s, d, count_only),
        (AttrValue::U16List(s), AttrValue::U16List(d)) => transfer_list(s, d, count_only),
        (AttrValue::I16List(s), AttrValue::I16List(d)) => transfer_list(s, d, count_only),
        (AttrValue::U32List(s), AttrValue::U32List(d)) => transfer_list(s, d, count_only),
        (AttrValue::I32List(s), AttrValue::I32List(d)) => transfer_list(s, d, count_only),
        (AttrValue::VlanList(s), AttrValue::VlanList(d)) => transfer_list(s, d, count_only),
        (AttrValue::QosMapList(s), AttrValue::QosMapList(d)) => transfer_list(s, d, count_only),
        (AttrValue::TunnelMapList(s), AttrValue::TunnelMapList(d)) => {
            transfer_list(s, d, count_only)
        }
        (AttrValue::AclFieldOidList(s), AttrValue::AclFieldOidList(d)) => {
            transfer_acl_field_list(s, d, count_only)
        }
        (AttrValue::AclActionOidList(s), AttrValue::AclActionOidList(d)) => {
            transfer_acl_action_list(s, d, count_only)
        }
        (AttrValue::AclCapability(s), AttrValue::AclCapability(d)) => {
            d.is_action_list_mandatory = s.is_action_list_mandatory;
            transfer_list(&s.action_list, &mut d.action_list, count_only)
        }
        (src, dst) => {
            if std::mem::discriminant(src) != std::mem::discriminant(dst) {
                log::error!(
                    "transfer shape mismatch: {:?} into {:?}",
                    src.value_type(),
                    dst.value_type()
                );
                return Err(SaiError::InvalidParameter);
            }
            *dst = src.clone();
            Ok(())
        }
    }
}

/// Copy a set of stored attributes into the caller's list.
///
/// Attribute ids must line up pairwise. `BUFFER_OVERFLOW` on one
/// attribute does not stop the remaining transfers; it is returned at the
/// end as the composite status.
pub fn transfer_attributes(
    src_attrs: &[Attr],
    dst_attrs: &mut [Attr],
    count_only: bool,
) -> SaiResult<()> {
    if src_attrs.len() != dst_attrs.len() {
        log::error!("attribute list length mismatch: {} vs {}", src_attrs.len(), dst_attrs.len());
        return Err(SaiError::InvalidParameter);
    }

    let mut final_status = Ok(());

    for (src, dst) in src_attrs.iter().zip(dst_attrs.iter_mut()) {
        if src.id != dst.id {
            log::error!("attribute id mismatch: {} vs {}", src.id, dst.id);
            return Err(SaiError::InvalidParameter);
        }

        match transfer_attribute(&src.value, &mut dst.value, count_only) {
            Ok(()) => {}
            Err(SaiError::BufferOverflow) => final_status = Err(SaiError::BufferOverflow),
            Err(e) => return Err(e),
        }
    }

    final_status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Oid;

    #[test]
    fn test_transfer_scalar() {
        let src = AttrValue::U32(7);
        let mut dst = AttrValue::U32(0);
        transfer_attribute(&src, &mut dst, false).unwrap();
        assert_eq!(dst, AttrValue::U32(7));
    }

    #[test]
    fn test_transfer_shape_mismatch() {
        let src = AttrValue::U32(7);
        let mut dst = AttrValue::U16(0);
        assert_eq!(transfer_attribute(&src, &mut dst, false), Err(SaiError::InvalidParameter));
    }

    #[test]
    fn test_transfer_list_overflow_sets_count() {
        let src = AttrValue::OidList(ValueList::new(vec![Oid::from_raw(1), Oid::from_raw(2)]));
        let mut dst = AttrValue::OidList(ValueList { count: 1, items: Some(Vec::new()) });

        assert_eq!(transfer_attribute(&src, &mut dst, false), Err(SaiError::BufferOverflow));
        match dst {
            AttrValue::OidList(l) => assert_eq!(l.count, 2),
            _ => panic!("wrong shape"),
        }
    }

    #[test]
    fn test_transfer_list_count_query() {
        let src = AttrValue::U32List(ValueList::new(vec![1, 2, 3]));
        let mut dst = AttrValue::U32List(ValueList::null(0));

        transfer_attribute(&src, &mut dst, false).unwrap();
        match dst {
            AttrValue::U32List(l) => {
                assert_eq!(l.count, 3);
                assert!(l.is_null());
            }
            _ => panic!("wrong shape"),
        }
    }

    #[test]
    fn test_transfer_attributes_continues_after_overflow() {
        let src = vec![
            Attr::new(0, AttrValue::OidList(ValueList::new(vec![Oid::from_raw(1), Oid::from_raw(2)]))),
            Attr::new(1, AttrValue::U32(42)),
        ];
        let mut dst = vec![
            Attr::new(0, AttrValue::OidList(ValueList { count: 1, items: Some(Vec::new()) })),
            Attr::new(1, AttrValue::U32(0)),
        ];

        let status = transfer_attributes(&src, &mut dst, false);
        assert_eq!(status, Err(SaiError::BufferOverflow));
        // second attribute still transferred
        assert_eq!(dst[1].value, AttrValue::U32(42));
    }
}
