// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared helpers for the integration tests.

// not every test binary uses every helper
#![allow(dead_code)]

use rsai::api::Sai;
use rsai::config::{Profile, SAI_KEY_VS_SWITCH_TYPE, SAI_VALUE_VS_SWITCH_TYPE_BCM56850};
use rsai::meta::tables;
use rsai::types::{Attr, AttrId, AttrValue, Oid, ValueList};

/// Initialized handle with the given switch type.
pub fn init_sai(switch_type: &str) -> Sai {
    let profile = Profile::new();
    profile.set(SAI_KEY_VS_SWITCH_TYPE, switch_type);

    let sai = Sai::new();
    sai.api_initialize(0, Box::new(profile)).expect("initialize");
    sai
}

/// Initialized handle plus a created switch (BCM profile).
pub fn init_with_switch() -> (Sai, Oid) {
    let sai = init_sai(SAI_VALUE_VS_SWITCH_TYPE_BCM56850);
    let switch = sai
        .create_switch(&[Attr::new(tables::SWITCH_ATTR_INIT_SWITCH, AttrValue::Bool(true))])
        .expect("create switch");
    (sai, switch)
}

/// Read a single OID-valued switch attribute.
pub fn switch_oid_attr(sai: &Sai, switch: Oid, attr_id: AttrId) -> Oid {
    let mut attrs = vec![Attr::new(attr_id, AttrValue::Oid(Oid::NULL))];
    sai.get_switch_attribute(switch, &mut attrs).expect("get switch attribute");
    attrs[0].value.as_oid().expect("oid attribute")
}

/// Read the switch port list: length query first, then the full fetch.
pub fn port_list(sai: &Sai, switch: Oid) -> Vec<Oid> {
    let mut attrs = vec![Attr::new(
        tables::SWITCH_ATTR_PORT_LIST,
        AttrValue::OidList(ValueList::null(0)),
    )];

    let count = match sai.get_switch_attribute(switch, &mut attrs) {
        Ok(()) => match &attrs[0].value {
            AttrValue::OidList(list) => list.count,
            _ => panic!("wrong shape"),
        },
        Err(e) => panic!("length query failed: {}", e),
    };

    let mut attrs = vec![Attr::new(
        tables::SWITCH_ATTR_PORT_LIST,
        AttrValue::OidList(ValueList { count, items: Some(Vec::new()) }),
    )];
    sai.get_switch_attribute(switch, &mut attrs).expect("port list fetch");

    match &attrs[0].value {
        AttrValue::OidList(list) => list.iter().copied().collect(),
        _ => panic!("wrong shape"),
    }
}

/// Read an OID list attribute from any object through the given getter.
pub fn oid_list_attr(
    get: impl Fn(&mut [Attr]) -> rsai::types::SaiResult<()>,
    attr_id: AttrId,
    capacity: u32,
) -> Vec<Oid> {
    let mut attrs = vec![Attr::new(
        attr_id,
        AttrValue::OidList(ValueList { count: capacity, items: Some(Vec::new()) }),
    )];
    get(&mut attrs).expect("oid list fetch");

    match &attrs[0].value {
        AttrValue::OidList(list) => list.iter().copied().collect(),
        _ => panic!("wrong shape"),
    }
}
