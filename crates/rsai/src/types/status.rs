// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Status codes surfaced to API callers.
//!
//! Every entry point returns `SaiResult<T>`; the error side carries the
//! classified failure. Numeric codes stay compatible with the classic SAI
//! signed-integer scheme so that upper layers testing the reserved
//! per-attribute ranges via a mask keep working.

/// Classified failure returned by the validation core or a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaiError {
    /// Driver or internal failure not otherwise classified.
    Failure,
    /// Operation exists but is not supported in this build.
    NotSupported,
    /// Structural violation of the call or an attribute value.
    InvalidParameter,
    /// Create with an existing key (meta-key or composite KEY).
    ItemAlreadyExists,
    /// Mutation on an absent object.
    ItemNotFound,
    /// A `get` list output buffer was too small; the count is updated so
    /// the caller can retry with a larger buffer.
    BufferOverflow,
    /// API used before `api_initialize`.
    Uninitialized,
    /// A MANDATORY_ON_CREATE attribute (or required conditional) is absent.
    MandatoryAttributeMissing,
    /// Requested behavior has no implementation (e.g. a read-only refresh
    /// the active profile does not supply).
    NotImplemented,
    /// Removal of an object that is still referenced.
    ObjectInUse,
    /// Attribute at the given list index is not supported; reserved range
    /// tested by upper layers via `is_attr_not_supported`.
    AttrNotSupported(u32),
    /// Attribute at the given list index is invalid; reserved range.
    InvalidAttribute(u32),
}

/// Result alias used by every fallible operation in this crate.
pub type SaiResult<T> = Result<T, SaiError>;

const ATTR_NOT_SUPPORTED_0: i32 = -0x0005_0000;
const INVALID_ATTRIBUTE_0: i32 = -0x0001_0000;
const RANGE_MASK: i32 = !0xFFFF;

impl SaiError {
    /// Signed integer code, classic SAI numbering.
    pub fn code(self) -> i32 {
        match self {
            SaiError::Failure => -1,
            SaiError::NotSupported => -2,
            SaiError::InvalidParameter => -5,
            SaiError::ItemAlreadyExists => -6,
            SaiError::ItemNotFound => -7,
            SaiError::BufferOverflow => -8,
            SaiError::Uninitialized => -0xC,
            SaiError::MandatoryAttributeMissing => -0xE,
            SaiError::NotImplemented => -0xF,
            SaiError::ObjectInUse => -0x11,
            SaiError::AttrNotSupported(n) => ATTR_NOT_SUPPORTED_0 - (n as i32),
            SaiError::InvalidAttribute(n) => INVALID_ATTRIBUTE_0 - (n as i32),
        }
    }

    /// True when the code falls in the reserved `ATTR_NOT_SUPPORTED_0..`
    /// range, regardless of the attribute index.
    pub fn is_attr_not_supported(self) -> bool {
        self.code() & RANGE_MASK == ATTR_NOT_SUPPORTED_0
    }

    /// True when the code falls in the reserved `INVALID_ATTRIBUTE_0..`
    /// range.
    pub fn is_invalid_attribute(self) -> bool {
        self.code() & RANGE_MASK == INVALID_ATTRIBUTE_0
    }
}

impl std::fmt::Display for SaiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaiError::Failure => write!(f, "FAILURE"),
            SaiError::NotSupported => write!(f, "NOT_SUPPORTED"),
            SaiError::InvalidParameter => write!(f, "INVALID_PARAMETER"),
            SaiError::ItemAlreadyExists => write!(f, "ITEM_ALREADY_EXISTS"),
            SaiError::ItemNotFound => write!(f, "ITEM_NOT_FOUND"),
            SaiError::BufferOverflow => write!(f, "BUFFER_OVERFLOW"),
            SaiError::Uninitialized => write!(f, "UNINITIALIZED"),
            SaiError::MandatoryAttributeMissing => write!(f, "MANDATORY_ATTRIBUTE_MISSING"),
            SaiError::NotImplemented => write!(f, "NOT_IMPLEMENTED"),
            SaiError::ObjectInUse => write!(f, "OBJECT_IN_USE"),
            SaiError::AttrNotSupported(n) => write!(f, "ATTR_NOT_SUPPORTED_{}", n),
            SaiError::InvalidAttribute(n) => write!(f, "INVALID_ATTRIBUTE_{}", n),
        }
    }
}

impl std::error::Error for SaiError {}
