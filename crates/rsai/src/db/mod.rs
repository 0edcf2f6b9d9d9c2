// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shadow database.
//!
//! The authoritative in-process record of every live object: which
//! attributes are currently set on it, how many other objects point at
//! it, and which composite uniqueness keys are taken. The validator is
//! the only writer; all access happens under the API lock.
//!
//! # Invariants
//!
//! - An OID is in the reference table iff its object is in the hash.
//! - Reference counts never go negative.
//! - NULL OIDs are never tracked.
//!
//! Breaking one of these is a code bug, not an input error; the accessors
//! panic rather than return a status.

use std::collections::HashMap;

use crate::codec::serialize_object_meta_key;
use crate::meta::AttrMetadata;
use crate::types::{Attr, AttrId, MetaKey, Oid, ValueList};

/// One stored attribute: an owned deep copy of the last-set value plus
/// its metadata.
#[derive(Debug)]
pub struct AttrWrapper {
    meta: &'static AttrMetadata,
    attr: Attr,
}

impl AttrWrapper {
    fn new(meta: &'static AttrMetadata, attr: &Attr) -> AttrWrapper {
        // owned clone so later caller mutations cannot corrupt the DB
        AttrWrapper { meta, attr: attr.clone() }
    }

    pub fn meta(&self) -> &'static AttrMetadata {
        self.meta
    }

    pub fn attr(&self) -> &Attr {
        &self.attr
    }
}

/// Attributes currently set on one object, keyed by attribute id.
pub type AttrHash = HashMap<AttrId, AttrWrapper>;

/// The validator's shadow state: object hash, reference counts and the
/// composite-key index, across all switches.
#[derive(Debug, Default)]
pub struct MetaDb {
    objects: HashMap<String, AttrHash>,
    refs: HashMap<Oid, i32>,
    attr_keys: HashMap<String, String>,
}

/// Serialize a meta-key for use as a hash key. Keys reaching the DB have
/// passed validation, so failure here is fatal.
pub fn db_key(meta_key: &MetaKey) -> String {
    serialize_object_meta_key(meta_key)
        .unwrap_or_else(|e| panic!("unserializable meta key {:?}: {}", meta_key, e))
}

impl MetaDb {
    pub fn new() -> MetaDb {
        MetaDb::default()
    }

    /// Drop everything; used by api initialize/uninitialize.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.refs.clear();
        self.attr_keys.clear();
    }

    // ------------------------------------------------------------------
    // Object hash
    // ------------------------------------------------------------------

    pub fn object_exists_key(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    pub fn object_exists(&self, meta_key: &MetaKey) -> bool {
        self.object_exists_key(&db_key(meta_key))
    }

    /// Insert an empty attribute hash for a new object. An unexpected
    /// existing entry is logged and kept (driver misbehavior must not
    /// abort the recording of a successful create).
    pub fn create_object(&mut self, meta_key: &MetaKey) {
        let key = db_key(meta_key);

        if self.objects.contains_key(&key) {
            log::warn!("object {} already exists (driver bug?)", key);
            return;
        }

        log::debug!("creating object {}", key);
        self.objects.insert(key, AttrHash::new());
    }

    pub fn remove_object(&mut self, meta_key: &MetaKey) {
        let key = db_key(meta_key);

        if self.objects.remove(&key).is_none() {
            panic!("removing object {} which does not exist", key);
        }

        log::debug!("removed object {}", key);
    }

    /// Store a deep copy of an attribute on an existing object.
    pub fn set_attr(&mut self, meta_key: &MetaKey, meta: &'static AttrMetadata, attr: &Attr) {
        let key = db_key(meta_key);

        let hash = self
            .objects
            .get_mut(&key)
            .unwrap_or_else(|| panic!("set attribute on missing object {}", key));

        log::debug!("set {} on {}", meta.name, key);
        hash.insert(attr.id, AttrWrapper::new(meta, attr));
    }

    /// Previously stored value of an attribute, if any.
    pub fn get_prev_attr(&self, meta_key: &MetaKey, attr_id: AttrId) -> Option<&AttrWrapper> {
        let key = db_key(meta_key);

        match self.objects.get(&key) {
            Some(hash) => hash.get(&attr_id),
            None => {
                log::error!("object key {} not found", key);
                None
            }
        }
    }

    /// All attributes stored on an object.
    pub fn get_attrs(&self, meta_key: &MetaKey) -> Vec<&AttrWrapper> {
        let key = db_key(meta_key);

        self.objects
            .get(&key)
            .unwrap_or_else(|| panic!("object {} does not exist", key))
            .values()
            .collect()
    }

    // ------------------------------------------------------------------
    // Reference counts
    // ------------------------------------------------------------------

    pub fn ref_exists(&self, oid: Oid) -> bool {
        self.refs.contains_key(&oid)
    }

    pub fn ref_insert(&mut self, oid: Oid) {
        if self.refs.insert(oid, 0).is_some() {
            panic!("oid {} already in reference map", oid);
        }

        log::debug!("inserted reference on {}", oid);
    }

    /// Remove an entry whose count has dropped to zero.
    pub fn ref_remove(&mut self, oid: Oid) {
        if let Some(count) = self.refs.get(&oid) {
            if *count > 0 {
                panic!("removing oid {} with reference count {}", oid, count);
            }
        }

        self.refs.remove(&oid);
        log::debug!("removed reference entry for {}", oid);
    }

    /// NULL OIDs are never tracked; incrementing one is a no-op.
    pub fn ref_inc(&mut self, oid: Oid) {
        if oid.is_null() {
            return;
        }

        let count = self
            .refs
            .get_mut(&oid)
            .unwrap_or_else(|| panic!("oid {} not in reference map", oid));

        *count += 1;
        log::debug!("increased reference on {} to {}", oid, count);
    }

    pub fn ref_dec(&mut self, oid: Oid) {
        if oid.is_null() {
            return;
        }

        let count = self
            .refs
            .get_mut(&oid)
            .unwrap_or_else(|| panic!("oid {} not in reference map", oid));

        *count -= 1;

        if *count < 0 {
            panic!("reference count on {} went negative", oid);
        }

        log::debug!("decreased reference on {} to {}", oid, count);
    }

    pub fn ref_inc_list(&mut self, list: &ValueList<Oid>) {
        for oid in list.iter() {
            self.ref_inc(*oid);
        }
    }

    pub fn ref_dec_list(&mut self, list: &ValueList<Oid>) {
        for oid in list.iter() {
            self.ref_dec(*oid);
        }
    }

    pub fn ref_count(&self, oid: Oid) -> i32 {
        *self
            .refs
            .get(&oid)
            .unwrap_or_else(|| panic!("oid {} not in reference map", oid))
    }

    // ------------------------------------------------------------------
    // Composite key index
    // ------------------------------------------------------------------

    /// True when any object of any type already holds this composite key.
    pub fn composite_key_taken(&self, composite: &str) -> bool {
        self.attr_keys.values().any(|v| v == composite)
    }

    pub fn record_composite_key(&mut self, meta_key: &MetaKey, composite: String) {
        self.attr_keys.insert(db_key(meta_key), composite);
    }

    pub fn erase_composite_key(&mut self, meta_key: &MetaKey) {
        let key = db_key(meta_key);

        if let Some(composite) = self.attr_keys.remove(&key) {
            log::debug!("erased composite key {}", composite);
        }
    }
}
