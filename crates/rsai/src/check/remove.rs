// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Remove validation. The pre pass rejects removals that would dangle a
//! reference; the post pass mirrors every increment the create and set
//! passes made.

use crate::db::{db_key, MetaDb};
use crate::meta::object_type_info;
use crate::types::{AclAction, AclField, AttrValue, MetaKey, ObjectType, SaiError, SaiResult};

pub fn pre_remove(db: &MetaDb, meta_key: &MetaKey) -> SaiResult<()> {
    if !db.object_exists(meta_key) {
        log::error!("object key {} doesn't exist", db_key(meta_key));
        return Err(SaiError::ItemNotFound);
    }

    let info = object_type_info(meta_key.object_type);

    if info.is_non_object_id {
        // leaves hold no reverse references and can go at any time
        return Ok(());
    }

    let oid = meta_key.as_oid().unwrap_or_else(|| panic!("oid object without oid key"));

    if oid.is_null() {
        log::error!("can't remove null object id");
        return Err(SaiError::InvalidParameter);
    }

    let ot = oid.object_type();

    if ot == ObjectType::Null {
        log::error!("oid {} is not valid, has null object type", oid);
        return Err(SaiError::InvalidParameter);
    }

    if ot != meta_key.object_type {
        log::error!("oid {} is {}, expected {}", oid, ot, meta_key.object_type);
        return Err(SaiError::InvalidParameter);
    }

    if !db.ref_exists(oid) {
        log::error!("object {} reference doesn't exist", oid);
        return Err(SaiError::InvalidParameter);
    }

    let count = db.ref_count(oid);

    if count != 0 {
        log::error!("object {} reference count is {}, can't remove", oid, count);
        return Err(SaiError::InvalidParameter);
    }

    Ok(())
}

pub fn post_remove(db: &mut MetaDb, meta_key: &MetaKey) {
    // release every outgoing reference held by stored attributes
    let decs: Vec<AttrValue> =
        db.get_attrs(meta_key).iter().map(|w| w.attr().value.clone()).collect();

    for value in decs {
        match value {
            AttrValue::Oid(oid) => db.ref_dec(oid),
            AttrValue::OidList(list) => db.ref_dec_list(&list),
            AttrValue::AclFieldOid(AclField::Enabled { data, .. }) => db.ref_dec(data),
            AttrValue::AclFieldOidList(AclField::Enabled { data, .. }) => db.ref_dec_list(&data),
            AttrValue::AclActionOid(AclAction::Enabled { data }) => db.ref_dec(data),
            AttrValue::AclActionOidList(AclAction::Enabled { data }) => db.ref_dec_list(&data),
            _ => {}
        }
    }

    let info = object_type_info(meta_key.object_type);

    if info.is_non_object_id {
        for member in info.struct_members {
            if let Some(get_oid) = member.get_oid {
                db.ref_dec(get_oid(meta_key));
            }
        }
    } else if let Some(oid) = meta_key.as_oid() {
        db.ref_remove(oid);
    }

    db.remove_object(meta_key);
    db.erase_composite_key(meta_key);
}
