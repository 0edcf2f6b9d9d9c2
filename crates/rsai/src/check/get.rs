// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Get validation. The pre pass checks the caller's output buffers; the
//! post pass verifies what the driver returned and snoops previously
//! unseen OIDs into the shadow DB, which is how driver-internal children
//! (queues, scheduler groups, default objects) become visible.

use std::collections::HashSet;

use crate::check::common::{extract_switch_id, validate_list_query};
use crate::db::{db_key, MetaDb};
use crate::meta::{object_type_info, AttrMetadata};
use crate::types::{
    AclAction, AclField, Attr, AttrValue, MetaKey, ObjectType, Oid, SaiError, SaiResult,
    MAX_LIST_COUNT,
};

const MAXIMUM_VLAN_NUMBER: u32 = 4094;

pub fn pre_get(db: &MetaDb, meta_key: &MetaKey, attrs: &[Attr]) -> SaiResult<()> {
    if attrs.is_empty() {
        log::error!("expected at least 1 attribute when calling get, zero given");
        return Err(SaiError::InvalidParameter);
    }

    if attrs.len() as u32 > MAX_LIST_COUNT {
        log::error!("get attribute count {} is too large", attrs.len());
        return Err(SaiError::InvalidParameter);
    }

    let info = object_type_info(meta_key.object_type);

    for attr in attrs {
        let Some(md) = info.attr(attr.id) else {
            log::error!(
                "unable to find attribute metadata {}:{}",
                meta_key.object_type,
                attr.id
            );
            return Err(SaiError::Failure);
        };

        if attr.value.value_type() != md.value_type {
            log::error!("{} output buffer has wrong shape", md.name);
            return Err(SaiError::InvalidParameter);
        }

        if md.is_conditional() && db.get_prev_attr(meta_key, attr.id).is_none() {
            log::debug!("get for conditional {}, not found in local db", md.name);
        }

        match &attr.value {
            AttrValue::OidList(l) => validate_list_query(md, l)?,
            AttrValue::U8List(l) => validate_list_query(md, l)?,
            AttrValue::I8List(l) => validate_list_query(md, l)?,
            AttrValue::U16List(l) => validate_list_query(md, l)?,
            AttrValue::I16List(l) => validate_list_query(md, l)?,
            AttrValue::U32List(l) => validate_list_query(md, l)?,
            AttrValue::I32List(l) => validate_list_query(md, l)?,
            AttrValue::QosMapList(l) => validate_list_query(md, l)?,
            AttrValue::TunnelMapList(l) => validate_list_query(md, l)?,
            AttrValue::VlanList(l) => {
                if l.count == 0 && !l.is_null() {
                    log::error!("{} vlan list count is zero, but list is not null", md.name);
                    return Err(SaiError::InvalidParameter);
                }

                if l.count != 0 && l.is_null() {
                    log::error!("{} vlan list count is {}, but list is null", md.name, l.count);
                    return Err(SaiError::InvalidParameter);
                }

                if l.count > MAXIMUM_VLAN_NUMBER {
                    log::error!("{} vlan count {} is too big", md.name, l.count);
                    return Err(SaiError::InvalidParameter);
                }
            }
            AttrValue::AclFieldOidList(AclField::Enabled { data, .. }) => {
                validate_list_query(md, data)?;
            }
            AttrValue::AclActionOidList(AclAction::Enabled { data }) => {
                validate_list_query(md, data)?;
            }
            _ => {}
        }
    }

    if !db.object_exists(meta_key) {
        log::error!("object key {} doesn't exist", db_key(meta_key));
        return Err(SaiError::InvalidParameter);
    }

    if !info.is_non_object_id {
        let oid = meta_key.as_oid().unwrap_or(Oid::NULL);
        let ot = oid.object_type();

        if ot == ObjectType::Null {
            log::error!("oid {} is not valid, has null object type", oid);
            return Err(SaiError::InvalidParameter);
        }

        if ot != meta_key.object_type {
            log::error!("oid {} is {}, expected {}", oid, ot, meta_key.object_type);
            return Err(SaiError::InvalidParameter);
        }
    }

    Ok(())
}

/// Verify returned OIDs, and snoop unknown ones into the DB: a reference
/// entry plus an empty object hash entry. Verification failures here are
/// logged, never propagated; the driver already succeeded.
fn post_get_objlist(
    db: &mut MetaDb,
    md: &AttrMetadata,
    switch_id: Oid,
    oids: &[Oid],
) {
    if oids.len() as u32 > MAX_LIST_COUNT {
        log::error!("{} returned object list count {} is too large", md.name, oids.len());
    }

    let mut seen = HashSet::new();

    for (i, &oid) in oids.iter().enumerate() {
        if !seen.insert(oid) {
            log::error!("{} returned object on list [{}] is duplicated", md.name, i);
            continue;
        }

        if oid.is_null() {
            if !md.allow_null_oid {
                log::error!("{} returned object on list [{}] is NULL", md.name, i);
            }
            continue;
        }

        let ot = oid.object_type();

        if ot == ObjectType::Null {
            log::error!("{} returned object {} has null object type", md.name, oid);
            continue;
        }

        if !md.allows_object_type(ot) {
            log::error!("{} returned object {} type {} is not allowed", md.name, oid, ot);
        }

        if !db.ref_exists(oid) {
            log::info!("{} returned unknown object {} (snoop)", md.name, oid);

            let key = MetaKey::oid(ot, oid);

            db.ref_insert(oid);

            if !db.object_exists(&key) {
                db.create_object(&key);
            }
        }

        let oid_switch = oid.switch_id();

        if !db.ref_exists(oid_switch) {
            log::error!("switch {} doesn't exist", oid_switch);
        }

        if oid_switch != switch_id {
            log::error!("{} is from switch {} but expected {}", oid, oid_switch, switch_id);
        }
    }
}

fn check_returned_count<T>(md: &AttrMetadata, list: &crate::types::ValueList<T>) {
    if list.count > MAX_LIST_COUNT {
        log::error!("{} returned list count {} is too large", md.name, list.count);
    }
}

pub fn post_get(db: &mut MetaDb, meta_key: &MetaKey, switch_id: Oid, attrs: &[Attr]) {
    let switch_id = extract_switch_id(meta_key, switch_id);

    let info = object_type_info(meta_key.object_type);

    for attr in attrs {
        let Some(md) = info.attr(attr.id) else {
            continue;
        };

        match &attr.value {
            AttrValue::Oid(oid) => post_get_objlist(db, md, switch_id, &[*oid]),
            AttrValue::OidList(list) => {
                if let Some(items) = &list.items {
                    post_get_objlist(db, md, switch_id, items);
                } else {
                    check_returned_count(md, list);
                }
            }
            AttrValue::AclFieldOid(AclField::Enabled { data, .. }) => {
                post_get_objlist(db, md, switch_id, &[*data]);
            }
            AttrValue::AclFieldOidList(AclField::Enabled { data, .. }) => {
                if let Some(items) = &data.items {
                    post_get_objlist(db, md, switch_id, items);
                } else {
                    check_returned_count(md, data);
                }
            }
            AttrValue::AclActionOid(AclAction::Enabled { data }) => {
                post_get_objlist(db, md, switch_id, &[*data]);
            }
            AttrValue::AclActionOidList(AclAction::Enabled { data }) => {
                if let Some(items) = &data.items {
                    post_get_objlist(db, md, switch_id, items);
                } else {
                    check_returned_count(md, data);
                }
            }
            AttrValue::VlanList(list) => {
                if list.count > MAXIMUM_VLAN_NUMBER {
                    log::error!("{} too many vlans returned (driver bug?)", md.name);
                }

                for (i, vlan) in list.iter().enumerate() {
                    if *vlan < 1 || u32::from(*vlan) > MAXIMUM_VLAN_NUMBER {
                        log::error!(
                            "{} vlan id {} out of range, returned on list [{}]",
                            md.name,
                            vlan,
                            i
                        );
                    }
                }
            }
            AttrValue::U8List(l) => check_returned_count(md, l),
            AttrValue::I8List(l) => check_returned_count(md, l),
            AttrValue::U16List(l) => check_returned_count(md, l),
            AttrValue::I16List(l) => check_returned_count(md, l),
            AttrValue::U32List(l) => check_returned_count(md, l),
            AttrValue::I32List(l) => check_returned_count(md, l),
            AttrValue::QosMapList(l) => check_returned_count(md, l),
            AttrValue::TunnelMapList(l) => check_returned_count(md, l),
            AttrValue::U32Range(r) => {
                if r.min > r.max {
                    log::error!("{} returned invalid range {} .. {}", md.name, r.min, r.max);
                }
            }
            AttrValue::I32Range(r) => {
                if r.min > r.max {
                    log::error!("{} returned invalid range {} .. {}", md.name, r.min, r.max);
                }
            }
            _ => {}
        }

        if md.is_enum() {
            if let Some(v) = attr.value.enum_value() {
                if !md.is_allowed_enum_value(v) {
                    log::error!("{} returned enum value {} not on allowed list", md.name, v);
                }
            }
        }

        if md.is_enum_list() {
            if let AttrValue::I32List(list) = &attr.value {
                if let Some(items) = &list.items {
                    let count = items.len();
                    // never entered; see the matching note in check::common
                    #[allow(clippy::reversed_empty_ranges)]
                    for i in count..count {
                        if !md.is_allowed_enum_value(items[i]) {
                            log::error!("{} returned enum list value not allowed", md.name);
                        }
                    }
                }
            }
        }
    }
}
