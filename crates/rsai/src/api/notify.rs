// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! FDB event notifications.
//!
//! Learn/age events delivered by a driver mutate the shadow DB through
//! the same validation passes a client create or remove would use, so the
//! DB stays consistent with what the switch believes.

use crate::check;
use crate::db::{db_key, MetaDb};
use crate::meta::{enums, find_attr, tables};
use crate::types::{Attr, AttrValue, FdbEntry, MetaKey};

/// One FDB event as delivered by a driver.
#[derive(Debug, Clone)]
pub struct FdbEventData {
    /// `sai_fdb_event_t` value.
    pub event_type: i32,
    pub fdb_entry: FdbEntry,
    pub attrs: Vec<Attr>,
}

pub(crate) fn on_fdb_event_single(db: &mut MetaDb, data: &FdbEventData) {
    let meta_key = MetaKey::fdb(data.fdb_entry);
    let key = db_key(&meta_key);

    match data.event_type {
        enums::FDB_EVENT_LEARNED => {
            if db.object_exists(&meta_key) {
                log::warn!("object key {} already exists, but received LEARNED event", key);
                return;
            }

            let mut attrs = data.attrs.clone();

            // learned entries are dynamic unless the event says otherwise
            if find_attr(&attrs, tables::FDB_ENTRY_ATTR_TYPE).is_none() {
                attrs.push(Attr::new(
                    tables::FDB_ENTRY_ATTR_TYPE,
                    AttrValue::I32(enums::FDB_ENTRY_TYPE_DYNAMIC),
                ));
            }

            match check::pre_create(db, &meta_key, data.fdb_entry.switch_id, &attrs) {
                Ok(()) => {
                    check::post_create(db, &meta_key, data.fdb_entry.switch_id, &attrs);
                }
                Err(e) => {
                    log::error!("failed to insert {} received in notification: {}", key, e);
                }
            }
        }

        enums::FDB_EVENT_AGED | enums::FDB_EVENT_FLUSHED => {
            if !db.object_exists(&meta_key) {
                log::warn!(
                    "object key {} doesn't exist, but received AGED/FLUSHED event",
                    key
                );
                return;
            }

            check::post_remove(db, &meta_key);
        }

        other => {
            log::error!("got FDB_ENTRY notification with unknown event_type {}, bug?", other);
        }
    }
}
