// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Set validation. The post pass swaps reference counts from the previous
//! value to the new one before storing the replacement copy.

use crate::check::common::{extract_switch_id, validate_attr_value};
use crate::db::{db_key, MetaDb};
use crate::meta::object_type_info;
use crate::types::{
    AclAction, AclField, Attr, AttrValue, MetaKey, ObjectType, Oid, SaiError, SaiResult,
};

pub fn pre_set(db: &MetaDb, meta_key: &MetaKey, attr: &Attr) -> SaiResult<()> {
    let info = object_type_info(meta_key.object_type);

    let Some(md) = info.attr(attr.id) else {
        log::error!("unable to find attribute metadata {}:{}", meta_key.object_type, attr.id);
        return Err(SaiError::Failure);
    };

    if md.flags.is_read_only() {
        log::error!("{} is read only and cannot be modified", md.name);
        return Err(SaiError::InvalidParameter);
    }

    if md.flags.is_create_only() {
        log::error!("{} is create only and cannot be modified", md.name);
        return Err(SaiError::InvalidParameter);
    }

    if md.flags.is_key() {
        log::error!("{} is a key and cannot be modified", md.name);
        return Err(SaiError::InvalidParameter);
    }

    let mut switch_id = Oid::NULL;

    if !info.is_non_object_id {
        let oid = meta_key.as_oid().unwrap_or(Oid::NULL);
        switch_id = oid.switch_id();

        if !db.ref_exists(switch_id) {
            log::error!("switch {} doesn't exist", switch_id);
            return Err(SaiError::InvalidParameter);
        }
    }

    let switch_id = extract_switch_id(meta_key, switch_id);

    validate_attr_value(db, md, &attr.value, switch_id, true)?;

    if md.is_conditional() && db.get_prev_attr(meta_key, attr.id).is_none() {
        // conditional attribute with no recorded previous value: the
        // object was probably created inside the switch
        log::warn!("set for conditional {}, not found in local db", md.name);
    }

    if !db.object_exists(meta_key) {
        log::error!("object key {} doesn't exist", db_key(meta_key));
        return Err(SaiError::ItemNotFound);
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

/// Swap outgoing references from the previous value to the new one, then
/// store a deep copy. Setting an attribute to its current value nets out
/// to no reference-count change.
pub fn post_set(db: &mut MetaDb, meta_key: &MetaKey, attr: &Attr) {
    let info = object_type_info(meta_key.object_type);

    let Some(md) = info.attr(attr.id) else {
        panic!("post set on unknown attribute {}:{}", meta_key.object_type, attr.id);
    };

    if md.value_type.carries_oids() {
        let prev = db
            .get_prev_attr(meta_key, attr.id)
            .map(|wrapper| wrapper.attr().value.clone());

        if let Some(prev) = prev {
            match prev {
                AttrValue::Oid(oid) => db.ref_dec(oid),
                AttrValue::OidList(list) => db.ref_dec_list(&list),
                AttrValue::AclFieldOid(AclField::Enabled { data, .. }) => db.ref_dec(data),
                AttrValue::AclFieldOidList(AclField::Enabled { data, .. }) => {
                    db.ref_dec_list(&data)
                }
                AttrValue::AclActionOid(AclAction::Enabled { data }) => db.ref_dec(data),
                AttrValue::AclActionOidList(AclAction::Enabled { data }) => {
                    db.ref_dec_list(&data)
                }
                _ => {}
            }
        }

        match &attr.value {
            AttrValue::Oid(oid) => db.ref_inc(*oid),
            AttrValue::OidList(list) => db.ref_inc_list(list),
            AttrValue::AclFieldOid(AclField::Enabled { data, .. }) => db.ref_inc(*data),
            AttrValue::AclFieldOidList(AclField::Enabled { data, .. }) => db.ref_inc_list(data),
            AttrValue::AclActionOid(AclAction::Enabled { data }) => db.ref_inc(*data),
            AttrValue::AclActionOidList(AclAction::Enabled { data }) => db.ref_inc_list(data),
            _ => {}
        }
    }

    db.set_attr(meta_key, md, attr);
}
