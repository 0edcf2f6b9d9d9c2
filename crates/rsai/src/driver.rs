// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Driver seam.
//!
//! The validated entry points talk to a switch implementation through
//! this fixed surface, uniform over OID and struct-keyed objects. The
//! in-tree implementation is the virtual switch ([`crate::vs`]); a vendor
//! driver would implement the same trait against real hardware.
//!
//! The core assumes drivers are synchronous; a driver call runs with the
//! API lock held.

use crate::types::{Attr, MetaKey, Oid, SaiResult};

pub trait Driver {
    /// Create the keyed object. For OID objects the key arrives with a
    /// null OID and the driver fills in the allocated handle.
    fn create(&mut self, meta_key: &mut MetaKey, switch_id: Oid, attrs: &[Attr]) -> SaiResult<()>;

    fn remove(&mut self, meta_key: &MetaKey) -> SaiResult<()>;

    fn set(&mut self, meta_key: &MetaKey, attr: &Attr) -> SaiResult<()>;

    /// Fill the caller's output attributes. May return `BUFFER_OVERFLOW`
    /// after updating list counts so the caller can retry.
    fn get(&mut self, meta_key: &MetaKey, attrs: &mut [Attr]) -> SaiResult<()>;
}
