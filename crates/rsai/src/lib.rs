// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # RSAI - validated switch abstraction in pure Rust
//!
//! A metadata validation and state-tracking core for a switch abstraction
//! interface: CRUD operations on typed switch objects (ports, VLANs,
//! bridges, routes, FDB, ACLs, tunnels, QoS) are checked against a
//! compile-time attribute schema and mirrored into an authoritative
//! shadow database before they ever reach a driver. A built-in virtual
//! switch driver makes the whole pipeline runnable with no hardware.
//!
//! ## Quick Start
//!
//! ```rust
//! use rsai::api::Sai;
//! use rsai::config::{Profile, SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850};
//! use rsai::meta::tables::SWITCH_ATTR_INIT_SWITCH;
//! use rsai::types::{Attr, AttrValue};
//!
//! let profile = Profile::new();
//! profile.set(SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850);
//!
//! let sai = Sai::new();
//! sai.api_initialize(0, Box::new(profile))?;
//!
//! // creating the switch fabricates the profile's default topology
//! let switch = sai.create_switch(&[
//!     Attr::new(SWITCH_ATTR_INIT_SWITCH, AttrValue::Bool(true)),
//! ])?;
//! assert!(!switch.is_null());
//! # Ok::<(), rsai::types::SaiError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |                        Entry wrappers (api)                      |
//! |    typed create/remove/set/get per family, extra pre-hooks       |
//! +------------------------------------------------------------------+
//! |                     Generic validator (check)                    |
//! |    pre/post x create/remove/set/get from metadata alone          |
//! +---------------------+----------------------+---------------------+
//! | Metadata registry   | Shadow DB (db)       | Codec (codec)       |
//! | (meta, read-only)   | objects, refcounts,  | canonical text      |
//! |                     | composite keys       | wire forms          |
//! +---------------------+----------------------+---------------------+
//! |                    Driver seam (driver)                          |
//! |              virtual switch implementation (vs)                  |
//! +------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`api::Sai`] | World handle; every entry point lives here |
//! | [`types::Oid`] | Opaque 64-bit object handle |
//! | [`types::Attr`] | Attribute id plus tagged-union value |
//! | [`types::SaiError`] | Classified failure with classic numeric codes |
//! | [`config::Profile`] | Service profile handed to initialize |
//!
//! ## Concurrency
//!
//! One process-wide reentrant lock guards all state; entry points and
//! notification delivery acquire it, and the switch profile initializers
//! re-enter the entry points under it. Validation correctness is
//! prioritized over concurrency.

/// Public API surface: the world handle and per-family entry points.
pub mod api;
/// Generic metadata-driven validator (pre/post passes).
pub mod check;
/// Attribute and key codec (canonical textual wire forms).
pub mod codec;
/// Service configuration surface (profiles, switch type selection).
pub mod config;
/// Shadow database (object hash, reference counts, composite keys).
pub mod db;
/// Driver seam between the validated core and a switch implementation.
pub mod driver;
/// Compile-time metadata registry (object types, attributes, enums).
pub mod meta;
/// Core value types (OID, status, attribute values, IP/MAC).
pub mod types;
/// Virtual switch driver and its default-topology profiles.
pub mod vs;

pub use api::{ApiFamily, FdbEventData, Sai};
pub use config::{Profile, ServiceMethodTable, SwitchProfile};
pub use types::{
    Attr, AttrId, AttrValue, FdbEntry, IpAddress, IpPrefix, Mac, MetaKey, NeighborEntry,
    ObjectType, Oid, RouteEntry, SaiError, SaiResult,
};
