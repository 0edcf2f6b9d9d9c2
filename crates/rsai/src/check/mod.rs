// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generic metadata-driven validator.
//!
//! Eight passes, called by the entry wrappers in a fixed order around the
//! driver:
//!
//! ```text
//! pre_create ── driver ── post_create
//! pre_remove ── driver ── post_remove
//! pre_set    ── driver ── post_set
//! pre_get    ── driver ── post_get
//! ```
//!
//! Pre passes reject before the driver ever sees the call. Post passes
//! record the successful driver effect in the shadow DB and never fail;
//! anything suspicious the driver returned is logged instead.
//!
//! Everything here is expressible from metadata alone, plus a small set
//! of named exceptions (buffer-profile threshold modes, the ACL table
//! range-type flag, the FDB bridge-id null skip, the scheduler-group
//! profile null on set).

mod common;
mod create;
mod get;
mod remove;
mod set;

pub use common::{any_condition_met, construct_key, extract_switch_id};
pub use create::{post_create, pre_create};
pub use get::{post_get, pre_get};
pub use remove::{post_remove, pre_remove};
pub use set::{post_set, pre_set};
