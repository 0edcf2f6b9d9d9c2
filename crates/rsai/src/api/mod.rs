// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Public API surface.
//!
//! [`Sai`] is the world handle: it owns the shadow DB and the driver,
//! and every entry point runs the same pipeline
//!
//! ```text
//! extra hook (create only)
//!   -> generic pre validation
//!   -> driver call
//!   -> generic post recording
//! ```
//!
//! under one process-wide reentrant lock. Pre failures never reach the
//! driver; driver failures skip the post pass; post passes never fail.
//!
//! Creating a switch additionally runs the active profile's initializer,
//! which re-enters the validated entry points to fabricate the default
//! topology (the lock is reentrant by contract for exactly this reason).

pub mod hooks;
mod notify;

use std::cell::RefCell;

use parking_lot::ReentrantMutex;

use crate::check;
use crate::config::{ServiceMethodTable, SwitchProfile, SAI_KEY_VS_SWITCH_TYPE};
use crate::db::MetaDb;
use crate::driver::Driver;
use crate::meta::object_type_info;
use crate::types::{
    Attr, FdbEntry, MetaKey, NeighborEntry, ObjectKey, ObjectType, Oid, RouteEntry, SaiError,
    SaiResult,
};
use crate::vs::{init_switch_bcm56850, init_switch_mlnx2700, InitContext, VirtualSwitch};

pub use notify::FdbEventData;

// part of the public log_set signature
pub use log::LevelFilter;

/// API families served by [`Sai::api_query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFamily {
    Switch,
    Port,
    Vlan,
    Bridge,
    Fdb,
    VirtualRouter,
    RouterInterface,
    NextHop,
    Neighbor,
    Route,
    Stp,
    HostifTrapGroup,
    Policer,
    Queue,
    Buffer,
    Scheduler,
    SchedulerGroup,
    Wred,
    QosMap,
    Acl,
    Mirror,
    Tunnel,
}

struct SaiState {
    initialized: bool,
    services: Option<Box<dyn ServiceMethodTable>>,
    db: MetaDb,
    vs: Option<VirtualSwitch>,
}

impl SaiState {
    fn ensure_initialized(&self) -> SaiResult<()> {
        if self.initialized {
            Ok(())
        } else {
            log::error!("api not initialized");
            Err(SaiError::Uninitialized)
        }
    }

    fn vs_mut(&mut self) -> &mut VirtualSwitch {
        self.vs.as_mut().unwrap_or_else(|| panic!("driver accessed before initialize"))
    }

    /// Handle checks shared by every OID entry point. On create the
    /// handle does not exist yet and only the object type is checked.
    fn validate_oid(&self, object_type: ObjectType, oid: Oid, create: bool) -> SaiResult<()> {
        let info = object_type_info(object_type);

        if info.is_non_object_id {
            panic!("object type {} is struct-keyed, not valid on the generic api", object_type);
        }

        if create {
            return Ok(());
        }

        if oid.is_null() {
            log::error!("oid is set to null object id");
            return Err(SaiError::InvalidParameter);
        }

        let ot = oid.object_type();

        if ot == ObjectType::Null {
            log::error!("oid {} is not valid, has null object type", oid);
            return Err(SaiError::InvalidParameter);
        }

        if ot != object_type {
            log::error!("oid {} is {}, expected {}", oid, ot, object_type);
            return Err(SaiError::InvalidParameter);
        }

        let meta_key = MetaKey::oid(object_type, oid);

        if !self.db.object_exists(&meta_key) {
            log::error!("object key {} doesn't exist", crate::db::db_key(&meta_key));
            return Err(SaiError::InvalidParameter);
        }

        Ok(())
    }

    fn create_oid(
        &mut self,
        object_type: ObjectType,
        switch_id: Oid,
        attrs: &[Attr],
    ) -> SaiResult<Oid> {
        self.validate_oid(object_type, Oid::NULL, true)?;

        hooks::pre_create_hook(object_type, attrs)?;

        let mut meta_key = MetaKey::oid(object_type, Oid::NULL);

        check::pre_create(&self.db, &meta_key, switch_id, attrs)?;

        self.vs_mut().create(&mut meta_key, switch_id, attrs)?;

        let oid = meta_key.as_oid().unwrap_or(Oid::NULL);

        // the switch being created is its own switch id
        let switch_id = if object_type == ObjectType::Switch { oid } else { switch_id };

        check::post_create(&mut self.db, &meta_key, switch_id, attrs);

        if object_type == ObjectType::Switch {
            let result = match self.vs_mut().profile() {
                SwitchProfile::Bcm56850 => init_switch_bcm56850(self, oid),
                SwitchProfile::Mlnx2700 => init_switch_mlnx2700(self, oid),
            };

            if let Err(e) = result {
                panic!("unable to init switch {}: {}", oid, e);
            }
        }

        Ok(oid)
    }

    fn remove_oid(&mut self, object_type: ObjectType, oid: Oid) -> SaiResult<()> {
        self.validate_oid(object_type, oid, false)?;

        let meta_key = MetaKey::oid(object_type, oid);

        check::pre_remove(&self.db, &meta_key)?;

        self.vs_mut().remove(&meta_key)?;

        check::post_remove(&mut self.db, &meta_key);

        Ok(())
    }

    fn set_oid(&mut self, object_type: ObjectType, oid: Oid, attr: &Attr) -> SaiResult<()> {
        self.validate_oid(object_type, oid, false)?;

        let meta_key = MetaKey::oid(object_type, oid);

        check::pre_set(&self.db, &meta_key, attr)?;

        self.vs_mut().set(&meta_key, attr)?;

        check::post_set(&mut self.db, &meta_key, attr);

        Ok(())
    }

    fn get_oid(
        &mut self,
        object_type: ObjectType,
        oid: Oid,
        attrs: &mut [Attr],
    ) -> SaiResult<()> {
        self.validate_oid(object_type, oid, false)?;

        let meta_key = MetaKey::oid(object_type, oid);

        check::pre_get(&self.db, &meta_key, attrs)?;

        self.vs_mut().get(&meta_key, attrs)?;

        let switch_id = oid.switch_id();

        if !self.db.ref_exists(switch_id) {
            log::error!("switch {} doesn't exist", switch_id);
        }

        check::post_get(&mut self.db, &meta_key, switch_id, attrs);

        Ok(())
    }

    /// Entry-level key checks for the struct-keyed families. A route
    /// destination whose mask is not contiguous never reaches the DB.
    fn validate_entry(&self, meta_key: &MetaKey, create: bool, get: bool) -> SaiResult<()> {
        if let ObjectKey::Route(entry) = &meta_key.key {
            if !entry.destination.is_mask_contiguous() {
                log::error!("route destination mask is not contiguous");
                return Err(SaiError::InvalidParameter);
            }
        }

        if create {
            if self.db.object_exists(meta_key) {
                log::error!("object key {} already exists", crate::db::db_key(meta_key));
                return Err(SaiError::ItemAlreadyExists);
            }

            return Ok(());
        }

        if !get && !self.db.object_exists(meta_key) {
            log::error!("object key {} doesn't exist", crate::db::db_key(meta_key));
            return Err(SaiError::ItemNotFound);
        }

        Ok(())
    }

    fn create_entry(&mut self, meta_key: MetaKey, attrs: &[Attr]) -> SaiResult<()> {
        self.validate_entry(&meta_key, true, false)?;

        let switch_id = meta_key.switch_id();

        check::pre_create(&self.db, &meta_key, switch_id, attrs)?;

        let mut key = meta_key;
        self.vs_mut().create(&mut key, switch_id, attrs)?;

        check::post_create(&mut self.db, &key, switch_id, attrs);

        Ok(())
    }

    fn remove_entry(&mut self, meta_key: MetaKey) -> SaiResult<()> {
        self.validate_entry(&meta_key, false, false)?;

        check::pre_remove(&self.db, &meta_key)?;

        self.vs_mut().remove(&meta_key)?;

        check::post_remove(&mut self.db, &meta_key);

        Ok(())
    }

    fn set_entry(&mut self, meta_key: MetaKey, attr: &Attr) -> SaiResult<()> {
        self.validate_entry(&meta_key, false, false)?;

        check::pre_set(&self.db, &meta_key, attr)?;

        self.vs_mut().set(&meta_key, attr)?;

        check::post_set(&mut self.db, &meta_key, attr);

        Ok(())
    }

    fn get_entry(&mut self, meta_key: MetaKey, attrs: &mut [Attr]) -> SaiResult<()> {
        self.validate_entry(&meta_key, false, true)?;

        check::pre_get(&self.db, &meta_key, attrs)?;

        self.vs_mut().get(&meta_key, attrs)?;

        let switch_id = meta_key.switch_id();
        check::post_get(&mut self.db, &meta_key, switch_id, attrs);

        Ok(())
    }
}

/// The profile initializers drive the same validated pipeline a client
/// does; only derived read-only attributes go through the internal write.
impl InitContext for SaiState {
    fn create(&mut self, object_type: ObjectType, switch_id: Oid, attrs: &[Attr])
        -> SaiResult<Oid> {
        self.create_oid(object_type, switch_id, attrs)
    }

    fn set(&mut self, object_type: ObjectType, oid: Oid, attr: &Attr) -> SaiResult<()> {
        self.set_oid(object_type, oid, attr)
    }

    fn get(&mut self, object_type: ObjectType, oid: Oid, attrs: &mut [Attr]) -> SaiResult<()> {
        self.get_oid(object_type, oid, attrs)
    }

    fn set_internal(&mut self, object_type: ObjectType, oid: Oid, attr: &Attr) -> SaiResult<()> {
        self.vs_mut().set_internal(object_type, oid, attr)
    }
}

/// Generates the create/remove/set/get quadruple for one OID family.
macro_rules! oid_object_api {
    ($family:literal, $ot:expr, $create:ident, $remove:ident, $set:ident, $get:ident) => {
        #[doc = concat!("Create a ", $family, " on the given switch.")]
        pub fn $create(&self, switch_id: Oid, attrs: &[Attr]) -> SaiResult<Oid> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.create_oid($ot, switch_id, attrs)
        }

        #[doc = concat!("Remove a ", $family, ".")]
        pub fn $remove(&self, oid: Oid) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.remove_oid($ot, oid)
        }

        #[doc = concat!("Set one attribute on a ", $family, ".")]
        pub fn $set(&self, oid: Oid, attr: &Attr) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.set_oid($ot, oid, attr)
        }

        #[doc = concat!("Get attributes of a ", $family, ".")]
        pub fn $get(&self, oid: Oid, attrs: &mut [Attr]) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.get_oid($ot, oid, attrs)
        }
    };
}

/// Generates the quartet for one struct-keyed family.
macro_rules! entry_object_api {
    ($family:literal, $entry:ty, $make:expr, $create:ident, $remove:ident, $set:ident, $get:ident) => {
        #[doc = concat!("Create a ", $family, ".")]
        pub fn $create(&self, entry: &$entry, attrs: &[Attr]) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.create_entry($make(*entry), attrs)
        }

        #[doc = concat!("Remove a ", $family, ".")]
        pub fn $remove(&self, entry: &$entry) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.remove_entry($make(*entry))
        }

        #[doc = concat!("Set one attribute on a ", $family, ".")]
        pub fn $set(&self, entry: &$entry, attr: &Attr) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.set_entry($make(*entry), attr)
        }

        #[doc = concat!("Get attributes of a ", $family, ".")]
        pub fn $get(&self, entry: &$entry, attrs: &mut [Attr]) -> SaiResult<()> {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            state.ensure_initialized()?;
            state.get_entry($make(*entry), attrs)
        }
    };
}

/// The validated API: metadata validation, shadow DB tracking and the
/// virtual switch behind one handle.
///
/// # Example
///
/// ```
/// use rsai::api::Sai;
/// use rsai::config::{Profile, SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850};
/// use rsai::meta::tables::SWITCH_ATTR_INIT_SWITCH;
/// use rsai::types::{Attr, AttrValue};
///
/// let profile = Profile::new();
/// profile.set(SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850);
///
/// let sai = Sai::new();
/// sai.api_initialize(0, Box::new(profile))?;
///
/// let switch =
///     sai.create_switch(&[Attr::new(SWITCH_ATTR_INIT_SWITCH, AttrValue::Bool(true))])?;
/// assert!(!switch.is_null());
/// # Ok::<(), rsai::types::SaiError>(())
/// ```
pub struct Sai {
    state: ReentrantMutex<RefCell<SaiState>>,
}

impl Default for Sai {
    fn default() -> Sai {
        Sai::new()
    }
}

impl Sai {
    /// A fresh, uninitialized handle. Call [`Sai::api_initialize`] first.
    pub fn new() -> Sai {
        Sai {
            state: ReentrantMutex::new(RefCell::new(SaiState {
                initialized: false,
                services: None,
                db: MetaDb::new(),
                vs: None,
            })),
        }
    }

    /// Initialize the API with the host's service method table.
    ///
    /// Reads `SAI_VS_SWITCH_TYPE` from the profile and resets all local
    /// state. Fails when already initialized, when flags are non-zero, or
    /// when the switch type is missing or unknown.
    pub fn api_initialize(
        &self,
        flags: u64,
        services: Box<dyn ServiceMethodTable>,
    ) -> SaiResult<()> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();

        if state.initialized {
            log::error!("api already initialized");
            return Err(SaiError::Failure);
        }

        let Some(switch_type) = services.profile_get_value(0, SAI_KEY_VS_SWITCH_TYPE) else {
            log::error!("failed to obtain profile value: {}", SAI_KEY_VS_SWITCH_TYPE);
            return Err(SaiError::Failure);
        };

        let Some(profile) = SwitchProfile::from_value(&switch_type) else {
            log::error!("unknown switch type: '{}'", switch_type);
            return Err(SaiError::Failure);
        };

        if flags != 0 {
            log::error!("invalid flags passed to api initialize");
            return Err(SaiError::InvalidParameter);
        }

        log::info!("clearing local state");

        state.db.clear();
        state.vs = Some(VirtualSwitch::new(profile));
        state.services = Some(services);
        state.initialized = true;

        Ok(())
    }

    /// Tear down the API, dropping all local state.
    pub fn api_uninitialize(&self) -> SaiResult<()> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();

        state.ensure_initialized().map_err(|_| SaiError::Failure)?;

        log::info!("clearing local state");

        state.db.clear();
        state.vs = None;
        state.services = None;
        state.initialized = false;

        Ok(())
    }

    /// Check whether a family is served. The typed methods on this handle
    /// are the function table.
    pub fn api_query(&self, _api: ApiFamily) -> SaiResult<()> {
        let guard = self.state.lock();
        let result = guard.borrow().ensure_initialized();
        result
    }

    /// Accepted but not implemented.
    pub fn log_set(&self, _api: ApiFamily, _level: log::LevelFilter) -> SaiResult<()> {
        Err(SaiError::NotImplemented)
    }

    /// Object type packed in a handle; no DB access involved.
    pub fn object_type_query(&self, oid: Oid) -> ObjectType {
        oid.object_type()
    }

    /// Owning switch packed in a handle; no DB access involved.
    pub fn switch_id_query(&self, oid: Oid) -> Oid {
        oid.switch_id()
    }

    /// Deliver FDB events from the driver; learned entries enter the
    /// shadow DB through the same validation as a client create.
    pub fn on_fdb_event(&self, events: &[FdbEventData]) {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();

        if state.ensure_initialized().is_err() {
            log::warn!("dropping {} fdb events, api not initialized", events.len());
            return;
        }

        for event in events {
            notify::on_fdb_event_single(&mut state.db, event);
        }
    }

    /// Reference count currently recorded for a handle, for tests and
    /// introspection.
    pub fn object_reference_count(&self, oid: Oid) -> Option<i32> {
        let guard = self.state.lock();
        let state = guard.borrow();

        if state.db.ref_exists(oid) {
            Some(state.db.ref_count(oid))
        } else {
            None
        }
    }

    // ------------------------------------------------------------------
    // Switch (the root object; create takes no switch id)
    // ------------------------------------------------------------------

    /// Create a switch and fabricate the active profile's default
    /// topology.
    pub fn create_switch(&self, attrs: &[Attr]) -> SaiResult<Oid> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        state.ensure_initialized()?;
        state.create_oid(ObjectType::Switch, Oid::NULL, attrs)
    }

    /// Remove a switch, dropping its entire driver-side state.
    pub fn remove_switch(&self, oid: Oid) -> SaiResult<()> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        state.ensure_initialized()?;
        state.remove_oid(ObjectType::Switch, oid)
    }

    /// Set one attribute on a switch.
    pub fn set_switch_attribute(&self, oid: Oid, attr: &Attr) -> SaiResult<()> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        state.ensure_initialized()?;
        state.set_oid(ObjectType::Switch, oid, attr)
    }

    /// Get attributes of a switch.
    pub fn get_switch_attribute(&self, oid: Oid, attrs: &mut [Attr]) -> SaiResult<()> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        state.ensure_initialized()?;
        state.get_oid(ObjectType::Switch, oid, attrs)
    }

    // ------------------------------------------------------------------
    // OID object families
    // ------------------------------------------------------------------

    oid_object_api!("port", ObjectType::Port, create_port, remove_port, set_port_attribute, get_port_attribute);
    oid_object_api!("vlan", ObjectType::Vlan, create_vlan, remove_vlan, set_vlan_attribute, get_vlan_attribute);
    oid_object_api!("vlan member", ObjectType::VlanMember, create_vlan_member, remove_vlan_member, set_vlan_member_attribute, get_vlan_member_attribute);
    oid_object_api!("bridge", ObjectType::Bridge, create_bridge, remove_bridge, set_bridge_attribute, get_bridge_attribute);
    oid_object_api!("bridge port", ObjectType::BridgePort, create_bridge_port, remove_bridge_port, set_bridge_port_attribute, get_bridge_port_attribute);
    oid_object_api!("virtual router", ObjectType::VirtualRouter, create_virtual_router, remove_virtual_router, set_virtual_router_attribute, get_virtual_router_attribute);
    oid_object_api!("router interface", ObjectType::RouterInterface, create_router_interface, remove_router_interface, set_router_interface_attribute, get_router_interface_attribute);
    oid_object_api!("next hop", ObjectType::NextHop, create_next_hop, remove_next_hop, set_next_hop_attribute, get_next_hop_attribute);
    oid_object_api!("stp instance", ObjectType::Stp, create_stp, remove_stp, set_stp_attribute, get_stp_attribute);
    oid_object_api!("hostif trap group", ObjectType::HostifTrapGroup, create_hostif_trap_group, remove_hostif_trap_group, set_hostif_trap_group_attribute, get_hostif_trap_group_attribute);
    oid_object_api!("policer", ObjectType::Policer, create_policer, remove_policer, set_policer_attribute, get_policer_attribute);
    oid_object_api!("queue", ObjectType::Queue, create_queue, remove_queue, set_queue_attribute, get_queue_attribute);
    oid_object_api!("ingress priority group", ObjectType::IngressPriorityGroup, create_ingress_priority_group, remove_ingress_priority_group, set_ingress_priority_group_attribute, get_ingress_priority_group_attribute);
    oid_object_api!("scheduler", ObjectType::Scheduler, create_scheduler, remove_scheduler, set_scheduler_attribute, get_scheduler_attribute);
    oid_object_api!("scheduler group", ObjectType::SchedulerGroup, create_scheduler_group, remove_scheduler_group, set_scheduler_group_attribute, get_scheduler_group_attribute);
    oid_object_api!("buffer pool", ObjectType::BufferPool, create_buffer_pool, remove_buffer_pool, set_buffer_pool_attribute, get_buffer_pool_attribute);
    oid_object_api!("buffer profile", ObjectType::BufferProfile, create_buffer_profile, remove_buffer_profile, set_buffer_profile_attribute, get_buffer_profile_attribute);
    oid_object_api!("wred profile", ObjectType::Wred, create_wred, remove_wred, set_wred_attribute, get_wred_attribute);
    oid_object_api!("qos map", ObjectType::QosMap, create_qos_map, remove_qos_map, set_qos_map_attribute, get_qos_map_attribute);
    oid_object_api!("acl table", ObjectType::AclTable, create_acl_table, remove_acl_table, set_acl_table_attribute, get_acl_table_attribute);
    oid_object_api!("acl entry", ObjectType::AclEntry, create_acl_entry, remove_acl_entry, set_acl_entry_attribute, get_acl_entry_attribute);
    oid_object_api!("acl range", ObjectType::AclRange, create_acl_range, remove_acl_range, set_acl_range_attribute, get_acl_range_attribute);
    oid_object_api!("mirror session", ObjectType::MirrorSession, create_mirror_session, remove_mirror_session, set_mirror_session_attribute, get_mirror_session_attribute);
    oid_object_api!("tunnel", ObjectType::Tunnel, create_tunnel, remove_tunnel, set_tunnel_attribute, get_tunnel_attribute);
    oid_object_api!("tunnel map", ObjectType::TunnelMap, create_tunnel_map, remove_tunnel_map, set_tunnel_map_attribute, get_tunnel_map_attribute);

    // ------------------------------------------------------------------
    // Struct-keyed families
    // ------------------------------------------------------------------

    entry_object_api!("fdb entry", FdbEntry, MetaKey::fdb, create_fdb_entry, remove_fdb_entry, set_fdb_entry_attribute, get_fdb_entry_attribute);
    entry_object_api!("neighbor entry", NeighborEntry, MetaKey::neighbor, create_neighbor_entry, remove_neighbor_entry, set_neighbor_entry_attribute, get_neighbor_entry_attribute);
    entry_object_api!("route entry", RouteEntry, MetaKey::route, create_route_entry, remove_route_entry, set_route_entry_attribute, get_route_entry_attribute);
}
