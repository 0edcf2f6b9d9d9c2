// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Create validation: the pre pass gating a create, and the post pass
//! recording its effect in the shadow DB.

use std::collections::HashMap;

use crate::check::common::{
    any_condition_met, construct_key, extract_switch_id, validate_attr_value,
};
use crate::db::{db_key, MetaDb};
use crate::meta::tables::{
    ACL_TABLE_ATTR_FIELD_ACL_RANGE_TYPE, BUFFER_POOL_ATTR_THRESHOLD_MODE,
    BUFFER_PROFILE_ATTR_POOL_ID, BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH,
    BUFFER_PROFILE_ATTR_SHARED_STATIC_TH,
};
use crate::meta::{attr_metadata, enums, find_attr, object_type_info, AttrMetadata};
use crate::types::{
    AclAction, AclField, Attr, AttrValue, MetaKey, ObjectType, Oid, SaiError, SaiResult,
    MAX_LIST_COUNT,
};

/// Shared thresholds on a buffer profile are flagged mandatory, but the
/// real requirement follows the referenced pool's threshold mode (passed
/// or previously stored, defaulting to the metadata default).
fn buffer_profile_threshold_required(
    db: &MetaDb,
    md: &AttrMetadata,
    attrs: &[Attr],
) -> SaiResult<bool> {
    let Some(pool_attr) = find_attr(attrs, BUFFER_PROFILE_ATTR_POOL_ID) else {
        log::error!("{} buffer pool id is not passed, attr is mandatory", md.name);
        return Err(SaiError::MandatoryAttributeMissing);
    };

    let pool_id = pool_attr.value.as_oid().unwrap_or(Oid::NULL);

    if pool_id.is_null() {
        // pool id allows null; no pool, no threshold requirement
        return Ok(false);
    }

    let pool_md = attr_metadata(ObjectType::BufferPool, BUFFER_POOL_ATTR_THRESHOLD_MODE)
        .unwrap_or_else(|| panic!("buffer pool threshold mode metadata missing"));

    let pool_key = MetaKey::oid(ObjectType::BufferPool, pool_id);

    let mode = match db.get_prev_attr(&pool_key, BUFFER_POOL_ATTR_THRESHOLD_MODE) {
        Some(prev) => prev.attr().value.enum_value(),
        None => pool_md.default.enum_value(),
    }
    .unwrap_or(enums::BUFFER_POOL_THRESHOLD_MODE_DYNAMIC);

    let required = (mode == enums::BUFFER_POOL_THRESHOLD_MODE_DYNAMIC
        && md.attr_id == BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH)
        || (mode == enums::BUFFER_POOL_THRESHOLD_MODE_STATIC
            && md.attr_id == BUFFER_PROFILE_ATTR_SHARED_STATIC_TH);

    Ok(required)
}

/// Struct-keyed objects embed OIDs inside the key itself; on create every
/// one of them must be live, of a permitted type, and on the stated
/// switch.
fn validate_non_object_on_create(
    db: &MetaDb,
    meta_key: &MetaKey,
    switch_id: Oid,
) -> SaiResult<()> {
    let info = object_type_info(meta_key.object_type);

    if !info.is_non_object_id {
        return Ok(());
    }

    for member in info.struct_members {
        let Some(get_oid) = member.get_oid else {
            continue;
        };

        let oid = get_oid(meta_key);

        if oid.is_null() {
            if meta_key.object_type == ObjectType::FdbEntry {
                log::warn!("workaround: {} is NULL, REMOVE when using bv_id", member.name);
                continue;
            }

            log::error!(
                "oid on {} struct member {} is NULL",
                meta_key.object_type,
                member.name
            );
            return Err(SaiError::InvalidParameter);
        }

        if !db.ref_exists(oid) {
            log::error!("object {} does not exist ({})", oid, member.name);
            return Err(SaiError::InvalidParameter);
        }

        let ot = oid.object_type();

        if !member.allows_object_type(ot) {
            log::error!("object {} is {}, not allowed on member {}", oid, ot, member.name);
            return Err(SaiError::InvalidParameter);
        }

        let oid_switch = oid.switch_id();

        if !db.ref_exists(oid_switch) {
            log::error!("switch {} does not exist", oid_switch);
            return Err(SaiError::InvalidParameter);
        }

        if oid_switch != switch_id {
            log::error!(
                "oid {} is on switch {} but required switch is {}",
                oid,
                oid_switch,
                switch_id
            );
            return Err(SaiError::InvalidParameter);
        }
    }

    Ok(())
}

/// Generic pre-create pass over a call's attribute list.
pub fn pre_create(
    db: &MetaDb,
    meta_key: &MetaKey,
    switch_id: Oid,
    attrs: &[Attr],
) -> SaiResult<()> {
    if attrs.len() as u32 > MAX_LIST_COUNT {
        log::error!("create attribute count {} is too large", attrs.len());
        return Err(SaiError::InvalidParameter);
    }

    let switch_create = meta_key.object_type == ObjectType::Switch;

    let switch_id = if switch_create {
        Oid::NULL
    } else {
        let switch_id = extract_switch_id(meta_key, switch_id);

        if switch_id.is_null() {
            log::error!("switch id is NULL for {}", meta_key.object_type);
            return Err(SaiError::InvalidParameter);
        }

        if switch_id.object_type() != ObjectType::Switch {
            log::error!("switch id {} is not a switch", switch_id);
            return Err(SaiError::InvalidParameter);
        }

        let switch_key = MetaKey::oid(ObjectType::Switch, switch_id);

        if !db.object_exists(&switch_key) || !db.ref_exists(switch_id) {
            log::error!("switch {} does not exist yet", switch_id);
            return Err(SaiError::InvalidParameter);
        }

        switch_id
    };

    validate_non_object_on_create(db, meta_key, switch_id)?;

    let info = object_type_info(meta_key.object_type);

    let mut passed: HashMap<u32, &Attr> = HashMap::new();
    let mut has_keys = false;

    for attr in attrs {
        let Some(md) = info.attr(attr.id) else {
            log::error!(
                "unable to find attribute metadata {}:{}",
                meta_key.object_type,
                attr.id
            );
            return Err(SaiError::Failure);
        };

        if passed.insert(attr.id, attr).is_some() {
            log::error!("{} is defined on attr list multiple times", md.name);
            return Err(SaiError::InvalidParameter);
        }

        if md.flags.is_read_only() {
            log::error!("{} is read only and cannot be created", md.name);
            return Err(SaiError::InvalidParameter);
        }

        if md.flags.is_key() {
            has_keys = true;
        }

        validate_attr_value(db, md, &attr.value, switch_id, false)?;
    }

    if info.is_non_object_id && db.object_exists(meta_key) {
        log::error!("object key {} already exists", db_key(meta_key));
        return Err(SaiError::ItemAlreadyExists);
    }

    // all plain mandatory attributes must be present

    for md in info.attrs {
        if !md.flags.is_mandatory_on_create() || md.is_conditional() {
            continue;
        }

        if passed.contains_key(&md.attr_id) {
            continue;
        }

        if md.object_type == ObjectType::BufferProfile
            && (md.attr_id == BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH
                || md.attr_id == BUFFER_PROFILE_ATTR_SHARED_STATIC_TH)
        {
            if !buffer_profile_threshold_required(db, md, attrs)? {
                log::info!("{} not mandatory for this pool", md.name);
                continue;
            }
        }

        if md.object_type == ObjectType::AclTable
            && md.attr_id == ACL_TABLE_ATTR_FIELD_ACL_RANGE_TYPE
        {
            // XXX workaround: flagged mandatory by mistake upstream,
            // treat as optional until the headers catch up
            log::warn!("{} is mandatory but not passed, workaround active", md.name);
            continue;
        }

        log::error!("{} is mandatory but not passed in attr list", md.name);
        return Err(SaiError::MandatoryAttributeMissing);
    }

    // conditional attributes: required iff any condition matches the
    // effective values, forbidden otherwise

    for md in info.attrs {
        if !md.is_conditional() {
            continue;
        }

        if any_condition_met(meta_key.object_type, md, attrs) {
            if !passed.contains_key(&md.attr_id) {
                log::error!("{} is conditional and mandatory but not passed", md.name);
                return Err(SaiError::MandatoryAttributeMissing);
            }
        } else if passed.contains_key(&md.attr_id) {
            log::error!("{} passed, but its condition was not met", md.name);
            return Err(SaiError::InvalidParameter);
        }
    }

    if has_keys {
        let composite = scoped_composite_key(meta_key, switch_id, attrs);

        // the new object has no recorded key yet, so any match is a clash
        if db.composite_key_taken(&composite) {
            log::error!("attribute key {} already exists, can't create", composite);
            return Err(SaiError::InvalidParameter);
        }
    }

    Ok(())
}

/// Composite keys are unique per object type within a switch, so the
/// recorded form carries the owning switch in front of the attribute
/// pairs (whose names already embed the object type).
fn scoped_composite_key(meta_key: &MetaKey, switch_id: Oid, attrs: &[Attr]) -> String {
    format!("{}:{}", switch_id, construct_key(meta_key, attrs))
}

/// Record a successful create: object hash entry, reference-count entry,
/// outgoing reference increments, composite key.
pub fn post_create(db: &mut MetaDb, meta_key: &MetaKey, switch_id: Oid, attrs: &[Attr]) {
    db.create_object(meta_key);

    let info = object_type_info(meta_key.object_type);

    if info.is_non_object_id {
        for member in info.struct_members {
            if let Some(get_oid) = member.get_oid {
                db.ref_inc(get_oid(meta_key));
            }
        }
    } else {
        // sanity-check what the driver returned before tracking it
        'check: {
            let Some(oid) = meta_key.as_oid() else {
                break 'check;
            };

            if oid.is_null() {
                log::error!("created oid is null object id (driver bug?)");
                break 'check;
            }

            let ot = oid.object_type();

            if ot == ObjectType::Null {
                log::error!("created oid {} has invalid object type (driver bug?)", oid);
                break 'check;
            }

            if ot != meta_key.object_type {
                log::error!(
                    "created oid {} is {}, expected {} (driver bug?)",
                    oid,
                    ot,
                    meta_key.object_type
                );
                break 'check;
            }

            if ot != ObjectType::Switch {
                let oid_switch = oid.switch_id();

                if !db.ref_exists(oid_switch) {
                    log::error!("switch {} does not exist", oid_switch);
                    break 'check;
                }

                if oid_switch != switch_id {
                    log::error!(
                        "created oid {} is on switch {} but requested {}",
                        oid,
                        oid_switch,
                        switch_id
                    );
                    break 'check;
                }
            }

            db.ref_insert(oid);
        }
    }

    let mut has_keys = false;

    for attr in attrs {
        let Some(md) = info.attr(attr.id) else {
            continue;
        };

        if md.flags.is_key() {
            has_keys = true;
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

        db.set_attr(meta_key, md, attr);
    }

    if has_keys {
        let switch_id = if meta_key.object_type == ObjectType::Switch { Oid::NULL } else { switch_id };
        db.record_composite_key(meta_key, scoped_composite_key(meta_key, switch_id, attrs));
    }
}
