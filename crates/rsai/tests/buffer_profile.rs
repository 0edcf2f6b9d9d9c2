// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::unreadable_literal)] // Large test constants
#![allow(clippy::missing_panics_doc)] // Tests panic on failure
#![allow(clippy::similar_names)] // Test variable naming
#![allow(clippy::too_many_lines)] // Test code

//! Buffer profile integration tests: the shared-threshold requirement
//! follows the referenced pool's threshold mode.

mod common;

use rsai::meta::{enums, tables};
use rsai::types::{Attr, AttrValue, Oid, SaiError};

fn create_pool(sai: &rsai::Sai, switch: Oid, mode: i32) -> Oid {
    sai.create_buffer_pool(
        switch,
        &[
            Attr::new(tables::BUFFER_POOL_ATTR_TYPE, AttrValue::I32(enums::BUFFER_POOL_TYPE_INGRESS)),
            Attr::new(tables::BUFFER_POOL_ATTR_SIZE, AttrValue::U32(0x10000)),
            Attr::new(tables::BUFFER_POOL_ATTR_THRESHOLD_MODE, AttrValue::I32(mode)),
        ],
    )
    .expect("buffer pool")
}

#[test]
fn test_dynamic_pool_requires_dynamic_threshold() {
    let (sai, switch) = common::init_with_switch();
    let pool = create_pool(&sai, switch, enums::BUFFER_POOL_THRESHOLD_MODE_DYNAMIC);

    // no threshold at all
    let status = sai.create_buffer_profile(
        switch,
        &[
            Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(pool)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(1024)),
        ],
    );
    assert_eq!(status, Err(SaiError::MandatoryAttributeMissing));

    // static threshold does not satisfy a dynamic pool
    let status = sai.create_buffer_profile(
        switch,
        &[
            Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(pool)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(1024)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_SHARED_STATIC_TH, AttrValue::U32(100)),
        ],
    );
    assert_eq!(status, Err(SaiError::MandatoryAttributeMissing));

    // dynamic threshold works
    let profile = sai
        .create_buffer_profile(
            switch,
            &[
                Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(pool)),
                Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(1024)),
                Attr::new(tables::BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH, AttrValue::I8(1)),
            ],
        )
        .expect("buffer profile");

    assert_eq!(sai.object_reference_count(pool), Some(1));
    sai.remove_buffer_profile(profile).expect("remove profile");
    assert_eq!(sai.object_reference_count(pool), Some(0));
}

#[test]
fn test_static_pool_requires_static_threshold() {
    let (sai, switch) = common::init_with_switch();
    let pool = create_pool(&sai, switch, enums::BUFFER_POOL_THRESHOLD_MODE_STATIC);

    let status = sai.create_buffer_profile(
        switch,
        &[
            Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(pool)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(1024)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH, AttrValue::I8(1)),
        ],
    );
    assert_eq!(status, Err(SaiError::MandatoryAttributeMissing));

    sai.create_buffer_profile(
        switch,
        &[
            Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(pool)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(1024)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_SHARED_STATIC_TH, AttrValue::U32(100)),
        ],
    )
    .expect("static profile");
}

#[test]
fn test_pool_default_mode_is_dynamic() {
    let (sai, switch) = common::init_with_switch();

    // pool created without an explicit threshold mode
    let pool = sai
        .create_buffer_pool(
            switch,
            &[
                Attr::new(
                    tables::BUFFER_POOL_ATTR_TYPE,
                    AttrValue::I32(enums::BUFFER_POOL_TYPE_EGRESS),
                ),
                Attr::new(tables::BUFFER_POOL_ATTR_SIZE, AttrValue::U32(0x8000)),
            ],
        )
        .expect("pool");

    // the metadata default (dynamic) drives the requirement
    let status = sai.create_buffer_profile(
        switch,
        &[
            Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(pool)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(512)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_SHARED_STATIC_TH, AttrValue::U32(5)),
        ],
    );
    assert_eq!(status, Err(SaiError::MandatoryAttributeMissing));
}

#[test]
fn test_null_pool_waives_thresholds() {
    let (sai, switch) = common::init_with_switch();

    // POOL_ID allows null; with no pool there is no threshold requirement
    sai.create_buffer_profile(
        switch,
        &[
            Attr::new(tables::BUFFER_PROFILE_ATTR_POOL_ID, AttrValue::Oid(Oid::NULL)),
            Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(256)),
        ],
    )
    .expect("profile without pool");
}

#[test]
fn test_pool_id_is_mandatory() {
    let (sai, switch) = common::init_with_switch();

    let status = sai.create_buffer_profile(
        switch,
        &[Attr::new(tables::BUFFER_PROFILE_ATTR_BUFFER_SIZE, AttrValue::U32(256))],
    );
    assert_eq!(status, Err(SaiError::MandatoryAttributeMissing));
}
