// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Virtual switch driver.
//!
//! A reference [`Driver`] implementing the whole entry-point contract as
//! pure state manipulation, so the validation and state-tracking core can
//! be exercised end to end with no hardware. Creating a switch installs a
//! profile-specific default topology (CPU port, logical ports, default
//! VLAN, 1Q bridge and bridge ports, virtual router, STP, trap group,
//! queues, priority groups, scheduler-group tree).
//!
//! # State
//!
//! ```text
//! VirtualSwitch
//! +-- switches: switch OID -> SwitchState
//! |     +-- objects: object type -> serialized key -> attr name -> value
//! +-- switch_slots: used switch indexes
//! +-- counters: per-type instance counters
//! ```

mod init;
mod refresh;
mod switch_bcm56850;
mod switch_mlnx2700;

use std::collections::HashMap;

use crate::codec::{serialize_fdb_entry, serialize_neighbor_entry, serialize_oid,
    serialize_route_entry, transfer_attribute};
use crate::config::SwitchProfile;
use crate::driver::Driver;
use crate::meta::object_type_info;
use crate::types::{
    Attr, AttrValue, MetaKey, ObjectKey, ObjectType, Oid, SaiError, SaiResult,
};

pub use init::InitContext;
pub use switch_bcm56850::init_switch_bcm56850;
pub use switch_mlnx2700::init_switch_mlnx2700;

const MAX_SWITCHES: usize = 0x100;

/// Per-switch object store: object type, then serialized key, then
/// attribute name.
#[derive(Debug, Default)]
pub struct SwitchState {
    objects: HashMap<ObjectType, HashMap<String, HashMap<&'static str, Attr>>>,
}

/// Serialized key body used inside a [`SwitchState`] (the object type is
/// the outer map key, so the body alone suffices).
fn vs_key(meta_key: &MetaKey) -> SaiResult<String> {
    Ok(match &meta_key.key {
        ObjectKey::Oid(oid) => serialize_oid(*oid),
        ObjectKey::Fdb(e) => serialize_fdb_entry(e),
        ObjectKey::Neighbor(e) => serialize_neighbor_entry(e),
        ObjectKey::Route(e) => serialize_route_entry(e)?,
    })
}

/// The virtual switch: profile, per-switch state and the deterministic
/// OID allocator.
pub struct VirtualSwitch {
    profile: SwitchProfile,
    switches: HashMap<Oid, SwitchState>,
    switch_slots: [bool; MAX_SWITCHES],
    counters: HashMap<ObjectType, u64>,
}

impl VirtualSwitch {
    pub fn new(profile: SwitchProfile) -> VirtualSwitch {
        VirtualSwitch {
            profile,
            switches: HashMap::new(),
            switch_slots: [false; MAX_SWITCHES],
            counters: HashMap::new(),
        }
    }

    pub fn profile(&self) -> SwitchProfile {
        self.profile
    }

    /// Forget every switch and reset the allocator.
    pub fn clear(&mut self) {
        self.switches.clear();
        self.switch_slots = [false; MAX_SWITCHES];
        self.counters.clear();
    }

    fn allocate_switch_oid(&mut self) -> SaiResult<Oid> {
        for (index, used) in self.switch_slots.iter_mut().enumerate() {
            if !*used {
                *used = true;
                log::info!("got new switch index 0x{:x}", index);
                return Ok(Oid::encode(index as u8, ObjectType::Switch, index as u64));
            }
        }

        log::error!("no more available switch id indexes");
        Err(SaiError::Failure)
    }

    /// Deterministic handle for a new object: per-type counters, switch
    /// index taken from the owning switch.
    fn allocate_oid(&mut self, object_type: ObjectType, switch_id: Oid) -> SaiResult<Oid> {
        if object_type == ObjectType::Switch {
            return self.allocate_switch_oid();
        }

        if switch_id.object_type() != ObjectType::Switch {
            log::error!("cannot allocate oid, {} is not a switch", switch_id);
            return Err(SaiError::InvalidParameter);
        }

        let counter = self.counters.entry(object_type).or_insert(0);
        *counter += 1;

        Ok(Oid::encode(switch_id.switch_index(), object_type, *counter))
    }

    fn free_switch_slot(&mut self, switch_id: Oid) {
        let index = switch_id.switch_index() as usize;

        if index < MAX_SWITCHES {
            self.switch_slots[index] = false;
            log::debug!("marked switch index 0x{:x} as unused", index);
        }
    }

    fn state_mut(&mut self, switch_id: Oid) -> SaiResult<&mut SwitchState> {
        self.switches.get_mut(&switch_id).ok_or_else(|| {
            log::error!("switch {} does not exist", switch_id);
            SaiError::Failure
        })
    }

    /// Store attributes on an object, creating the entry when absent.
    fn store_object(
        &mut self,
        meta_key: &MetaKey,
        switch_id: Oid,
        attrs: &[Attr],
    ) -> SaiResult<()> {
        let key = vs_key(meta_key)?;
        let object_type = meta_key.object_type;

        let state = self.state_mut(switch_id)?;
        let hash = state.objects.entry(object_type).or_default();

        if object_type != ObjectType::Switch && hash.contains_key(&key) {
            log::error!("create failed, object already exists {}:{}", object_type, key);
            return Err(SaiError::ItemAlreadyExists);
        }

        let entry = hash.entry(key).or_default();

        for attr in attrs {
            let Some(md) = object_type_info(object_type).attr(attr.id) else {
                log::error!("no metadata for {}:{}", object_type, attr.id);
                return Err(SaiError::Failure);
            };

            entry.insert(md.name, attr.clone());
        }

        Ok(())
    }

    /// Driver-internal attribute write. Bypasses validation on purpose:
    /// this is how the profile initializers record derived read-only
    /// attributes (port lists, default object handles, child lists).
    pub(crate) fn set_internal(
        &mut self,
        object_type: ObjectType,
        oid: Oid,
        attr: &Attr,
    ) -> SaiResult<()> {
        let meta_key = MetaKey::oid(object_type, oid);
        self.set_on_key(&meta_key, attr)
    }

    fn set_on_key(&mut self, meta_key: &MetaKey, attr: &Attr) -> SaiResult<()> {
        let key = vs_key(meta_key)?;
        let object_type = meta_key.object_type;
        let switch_id = meta_key.switch_id();

        let Some(md) = object_type_info(object_type).attr(attr.id) else {
            log::error!("no metadata for {}:{}", object_type, attr.id);
            return Err(SaiError::Failure);
        };

        let state = self.state_mut(switch_id)?;

        let Some(entry) = state.objects.entry(object_type).or_default().get_mut(&key) else {
            log::error!("not found {}:{}", object_type, key);
            return Err(SaiError::ItemNotFound);
        };

        entry.insert(md.name, attr.clone());
        Ok(())
    }

    /// Stored value of one attribute, by name, for refresh recalculation.
    pub(crate) fn stored_attr(
        &self,
        switch_id: Oid,
        object_type: ObjectType,
        oid: Oid,
        attr_name: &str,
    ) -> Option<&Attr> {
        self.switches
            .get(&switch_id)?
            .objects
            .get(&object_type)?
            .get(&serialize_oid(oid))?
            .get(attr_name)
    }

    /// All objects of a type on one switch, with their attribute maps.
    pub(crate) fn objects_of_type(
        &self,
        switch_id: Oid,
        object_type: ObjectType,
    ) -> Vec<(&String, &HashMap<&'static str, Attr>)> {
        match self.switches.get(&switch_id).and_then(|s| s.objects.get(&object_type)) {
            Some(hash) => hash.iter().collect(),
            None => Vec::new(),
        }
    }
}

impl Driver for VirtualSwitch {
    fn create(&mut self, meta_key: &mut MetaKey, switch_id: Oid, attrs: &[Attr]) -> SaiResult<()> {
        let switch_id = match &mut meta_key.key {
            ObjectKey::Oid(oid) => {
                *oid = self.allocate_oid(meta_key.object_type, switch_id)?;

                if meta_key.object_type == ObjectType::Switch {
                    let switch_id = *oid;

                    if self.switches.contains_key(&switch_id) {
                        panic!("switch {} already exists", switch_id);
                    }

                    self.switches.insert(switch_id, SwitchState::default());
                    switch_id
                } else {
                    switch_id
                }
            }
            _ => meta_key.switch_id(),
        };

        self.store_object(meta_key, switch_id, attrs)
    }

    fn remove(&mut self, meta_key: &MetaKey) -> SaiResult<()> {
        let key = vs_key(meta_key)?;
        let switch_id = meta_key.switch_id();

        let state = self.state_mut(switch_id)?;

        let removed = state
            .objects
            .get_mut(&meta_key.object_type)
            .and_then(|hash| hash.remove(&key));

        if removed.is_none() {
            log::error!("not found {}:{}", meta_key.object_type, key);
            return Err(SaiError::ItemNotFound);
        }

        if meta_key.object_type == ObjectType::Switch {
            log::info!("removed switch {}", key);
            self.switches.remove(&switch_id);
            self.free_switch_slot(switch_id);
        }

        Ok(())
    }

    fn set(&mut self, meta_key: &MetaKey, attr: &Attr) -> SaiResult<()> {
        self.set_on_key(meta_key, attr)
    }

    fn get(&mut self, meta_key: &MetaKey, attrs: &mut [Attr]) -> SaiResult<()> {
        let key = vs_key(meta_key)?;
        let switch_id = meta_key.switch_id();
        let object_type = meta_key.object_type;
        let info = object_type_info(object_type);

        if !self
            .switches
            .get(&switch_id)
            .and_then(|s| s.objects.get(&object_type))
            .is_some_and(|hash| hash.contains_key(&key))
        {
            log::error!("not found {}:{}", object_type, key);
            return Err(SaiError::ItemNotFound);
        }

        let mut final_status = Ok(());

        for attr in attrs.iter_mut() {
            let Some(md) = info.attr(attr.id) else {
                log::error!("failed to find attribute {} for {}:{}", attr.id, object_type, key);
                return Err(SaiError::Failure);
            };

            if md.flags.is_read_only() {
                // read-only values may require recalculation from other
                // objects before they can be copied out
                let oid = meta_key.as_oid().unwrap_or(Oid::NULL);
                refresh::refresh_read_only(self, md, oid, switch_id)?;
            }

            let stored: Option<AttrValue> = self
                .switches
                .get(&switch_id)
                .and_then(|s| s.objects.get(&object_type))
                .and_then(|hash| hash.get(&key))
                .and_then(|entry| entry.get(md.name))
                .map(|a| a.value.clone());

            let Some(stored) = stored else {
                log::error!("{} not implemented on {}", md.name, key);
                return Err(SaiError::NotImplemented);
            };

            match transfer_attribute(&stored, &mut attr.value, false) {
                Ok(()) => {}
                Err(SaiError::BufferOverflow) => {
                    // partial success: the correct length was written and
                    // the remaining attributes still get processed
                    log::info!("BUFFER_OVERFLOW {}: {}", key, md.name);
                    final_status = Err(SaiError::BufferOverflow);
                }
                Err(e) => {
                    log::error!("get failed {}: {}: {}", key, md.name, e);
                    return Err(e);
                }
            }
        }

        final_status
    }
}
