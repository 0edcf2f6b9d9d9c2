// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Buffer attribute tables: pool and profile.
//!
//! The profile's shared thresholds are flagged mandatory but their real
//! requirement depends on the referenced pool's threshold mode; the
//! validator carries that exception (see `check::create`).

use crate::meta::attr::{AttrFlags, AttrMetadata, DefaultValue};
use crate::meta::enums;
use crate::types::{AttrId, ObjectType, ValueType};

pub const BUFFER_POOL_ATTR_SHARED_SIZE: AttrId = 0;
pub const BUFFER_POOL_ATTR_TYPE: AttrId = 1;
pub const BUFFER_POOL_ATTR_SIZE: AttrId = 2;
pub const BUFFER_POOL_ATTR_THRESHOLD_MODE: AttrId = 3;

pub static BUFFER_POOL_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::BufferPool,
        BUFFER_POOL_ATTR_SHARED_SIZE,
        "SAI_BUFFER_POOL_ATTR_SHARED_SIZE",
        ValueType::U32,
        AttrFlags::READ_ONLY,
    ),
    AttrMetadata::new(
        ObjectType::BufferPool,
        BUFFER_POOL_ATTR_TYPE,
        "SAI_BUFFER_POOL_ATTR_TYPE",
        ValueType::I32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_enum(&enums::BUFFER_POOL_TYPE),
    AttrMetadata::new(
        ObjectType::BufferPool,
        BUFFER_POOL_ATTR_SIZE,
        "SAI_BUFFER_POOL_ATTR_SIZE",
        ValueType::U32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
    AttrMetadata::new(
        ObjectType::BufferPool,
        BUFFER_POOL_ATTR_THRESHOLD_MODE,
        "SAI_BUFFER_POOL_ATTR_THRESHOLD_MODE",
        ValueType::I32,
        AttrFlags::CREATE_ONLY,
    )
    .with_enum(&enums::BUFFER_POOL_THRESHOLD_MODE)
    .with_default(DefaultValue::I32(enums::BUFFER_POOL_THRESHOLD_MODE_DYNAMIC)),
];

pub const BUFFER_PROFILE_ATTR_POOL_ID: AttrId = 0;
pub const BUFFER_PROFILE_ATTR_BUFFER_SIZE: AttrId = 1;
pub const BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH: AttrId = 2;
pub const BUFFER_PROFILE_ATTR_SHARED_STATIC_TH: AttrId = 3;
pub const BUFFER_PROFILE_ATTR_XOFF_TH: AttrId = 4;
pub const BUFFER_PROFILE_ATTR_XON_TH: AttrId = 5;

pub static BUFFER_PROFILE_ATTRS: &[AttrMetadata] = &[
    AttrMetadata::new(
        ObjectType::BufferProfile,
        BUFFER_PROFILE_ATTR_POOL_ID,
        "SAI_BUFFER_PROFILE_ATTR_POOL_ID",
        ValueType::Oid,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_ONLY),
    )
    .with_allowed(&[ObjectType::BufferPool])
    .allow_null(),
    AttrMetadata::new(
        ObjectType::BufferProfile,
        BUFFER_PROFILE_ATTR_BUFFER_SIZE,
        "SAI_BUFFER_PROFILE_ATTR_BUFFER_SIZE",
        ValueType::U32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
    AttrMetadata::new(
        ObjectType::BufferProfile,
        BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH,
        "SAI_BUFFER_PROFILE_ATTR_SHARED_DYNAMIC_TH",
        ValueType::I8,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
    AttrMetadata::new(
        ObjectType::BufferProfile,
        BUFFER_PROFILE_ATTR_SHARED_STATIC_TH,
        "SAI_BUFFER_PROFILE_ATTR_SHARED_STATIC_TH",
        ValueType::U32,
        AttrFlags::MANDATORY_ON_CREATE.with(AttrFlags::CREATE_AND_SET),
    ),
    AttrMetadata::new(
        ObjectType::BufferProfile,
        BUFFER_PROFILE_ATTR_XOFF_TH,
        "SAI_BUFFER_PROFILE_ATTR_XOFF_TH",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(0)),
    AttrMetadata::new(
        ObjectType::BufferProfile,
        BUFFER_PROFILE_ATTR_XON_TH,
        "SAI_BUFFER_PROFILE_ATTR_XON_TH",
        ValueType::U32,
        AttrFlags::CREATE_AND_SET,
    )
    .with_default(DefaultValue::U32(0)),
];
