// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Service configuration surface.
//!
//! The host passes a service method table at initialize time; the only
//! key the virtual switch consumes is the switch type. Keys it does not
//! understand are ignored.
//!
//! # Example
//!
//! ```
//! use rsai::config::{Profile, SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850};
//!
//! let profile = Profile::new();
//! profile.set(SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850);
//! ```

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

/// Profile key selecting the virtual switch type.
pub const SAI_KEY_VS_SWITCH_TYPE: &str = "SAI_VS_SWITCH_TYPE";

/// Profile value for the Broadcom-like default topology.
pub const SAI_VALUE_VS_SWITCH_TYPE_BCM56850: &str = "SAI_VS_SWITCH_TYPE_BCM56850";

/// Profile value for the Mellanox-like default topology.
pub const SAI_VALUE_VS_SWITCH_TYPE_MLNX2700: &str = "SAI_VS_SWITCH_TYPE_MLNX2700";

/// Switch-wide preset dictating the default topology fabricated when the
/// switch object is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchProfile {
    Bcm56850,
    Mlnx2700,
}

impl SwitchProfile {
    /// Parse the profile value; unknown values fail initialization.
    pub fn from_value(value: &str) -> Option<SwitchProfile> {
        match value {
            SAI_VALUE_VS_SWITCH_TYPE_BCM56850 => Some(SwitchProfile::Bcm56850),
            SAI_VALUE_VS_SWITCH_TYPE_MLNX2700 => Some(SwitchProfile::Mlnx2700),
            _ => None,
        }
    }
}

/// Host-supplied profile accessors handed to `api_initialize`.
///
/// `profile_get_next_value` iterates the key/value pairs; calling
/// [`ServiceMethodTable::profile_reset`] rewinds the iterator (the
/// classic contract resets when the caller passes a null value slot).
pub trait ServiceMethodTable: Send {
    fn profile_get_value(&self, profile_id: u32, key: &str) -> Option<String>;

    fn profile_get_next_value(&self, profile_id: u32) -> Option<(String, String)>;

    fn profile_reset(&self, profile_id: u32);
}

/// In-memory profile store backing the default service method table.
///
/// Lock-free reads through the shared map; the iteration cursor is its
/// own small lock since iteration is a cold path used only at
/// initialize time.
#[derive(Default)]
pub struct Profile {
    entries: DashMap<Arc<str>, Arc<str>>,
    cursor: Mutex<usize>,
}

impl Profile {
    pub fn new() -> Profile {
        Profile::default()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.entries.insert(Arc::from(key), Arc::from(value));
    }

    fn sorted_keys(&self) -> Vec<Arc<str>> {
        let mut keys: Vec<Arc<str>> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl ServiceMethodTable for Profile {
    fn profile_get_value(&self, _profile_id: u32, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().to_string())
    }

    fn profile_get_next_value(&self, _profile_id: u32) -> Option<(String, String)> {
        let keys = self.sorted_keys();
        let mut cursor = self.cursor.lock();

        let key = keys.get(*cursor)?.clone();
        *cursor += 1;

        let value = self.entries.get(&key)?.value().to_string();
        Some((key.to_string(), value))
    }

    fn profile_reset(&self, _profile_id: u32) {
        *self.cursor.lock() = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_profile_values() {
        assert_eq!(
            SwitchProfile::from_value(SAI_VALUE_VS_SWITCH_TYPE_BCM56850),
            Some(SwitchProfile::Bcm56850)
        );
        assert_eq!(
            SwitchProfile::from_value(SAI_VALUE_VS_SWITCH_TYPE_MLNX2700),
            Some(SwitchProfile::Mlnx2700)
        );
        assert_eq!(SwitchProfile::from_value("SAI_VS_SWITCH_TYPE_UNKNOWN"), None);
    }

    #[test]
    fn test_profile_lookup() {
        let profile = Profile::new();
        profile.set(SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850);

        assert_eq!(
            profile.profile_get_value(0, SAI_KEY_VS_SWITCH_TYPE).as_deref(),
            Some(SAI_VALUE_VS_SWITCH_TYPE_BCM56850)
        );
        assert_eq!(profile.profile_get_value(0, "NO_SUCH_KEY"), None);
    }

    #[test]
    fn test_profile_iteration_with_reset() {
        let profile = Profile::new();
        profile.set("KEY_A", "1");
        profile.set("KEY_B", "2");

        let first = profile.profile_get_next_value(0).unwrap();
        let second = profile.profile_get_next_value(0).unwrap();
        assert!(profile.profile_get_next_value(0).is_none());
        assert_ne!(first.0, second.0);

        profile.profile_reset(0);
        assert_eq!(profile.profile_get_next_value(0).unwrap(), first);
    }
}
