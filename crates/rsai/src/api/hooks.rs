// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-object-type pre-create hooks.
//!
//! Domain constraints that metadata alone cannot express, layered above
//! the generic validator. The entry wrappers run the matching hook before
//! the generic pre-create pass.

use crate::meta::tables;
use crate::meta::{enums, find_attr};
use crate::types::{Attr, AttrId, AttrValue, ObjectType, SaiError, SaiResult};

fn passed_bool(attrs: &[Attr], attr_id: AttrId) -> Option<bool> {
    match find_attr(attrs, attr_id)?.value {
        AttrValue::Bool(v) => Some(v),
        _ => None,
    }
}

fn passed_u8(attrs: &[Attr], attr_id: AttrId) -> Option<u8> {
    match find_attr(attrs, attr_id)?.value {
        AttrValue::U8(v) => Some(v),
        _ => None,
    }
}

fn passed_u16(attrs: &[Attr], attr_id: AttrId) -> Option<u16> {
    match find_attr(attrs, attr_id)?.value {
        AttrValue::U16(v) => Some(v),
        _ => None,
    }
}

fn passed_u32(attrs: &[Attr], attr_id: AttrId) -> Option<u32> {
    match find_attr(attrs, attr_id)?.value {
        AttrValue::U32(v) => Some(v),
        _ => None,
    }
}

fn passed_enum(attrs: &[Attr], attr_id: AttrId) -> Option<i32> {
    find_attr(attrs, attr_id)?.value.enum_value()
}

// upper bound on WRED thresholds until the total buffer size is queried
const MAX_BUFFER_SIZE: u32 = 0x10000;

struct WredColor {
    name: &'static str,
    enable: AttrId,
    min_threshold: AttrId,
    max_threshold: AttrId,
    drop_probability: AttrId,
    ecn_modes: &'static [i32],
}

static WRED_COLORS: &[WredColor] = &[
    WredColor {
        name: "green",
        enable: tables::WRED_ATTR_GREEN_ENABLE,
        min_threshold: tables::WRED_ATTR_GREEN_MIN_THRESHOLD,
        max_threshold: tables::WRED_ATTR_GREEN_MAX_THRESHOLD,
        drop_probability: tables::WRED_ATTR_GREEN_DROP_PROBABILITY,
        ecn_modes: &[
            enums::ECN_MARK_MODE_GREEN,
            enums::ECN_MARK_MODE_GREEN_YELLOW,
            enums::ECN_MARK_MODE_GREEN_RED,
            enums::ECN_MARK_MODE_ALL,
        ],
    },
    WredColor {
        name: "yellow",
        enable: tables::WRED_ATTR_YELLOW_ENABLE,
        min_threshold: tables::WRED_ATTR_YELLOW_MIN_THRESHOLD,
        max_threshold: tables::WRED_ATTR_YELLOW_MAX_THRESHOLD,
        drop_probability: tables::WRED_ATTR_YELLOW_DROP_PROBABILITY,
        ecn_modes: &[
            enums::ECN_MARK_MODE_YELLOW,
            enums::ECN_MARK_MODE_GREEN_YELLOW,
            enums::ECN_MARK_MODE_YELLOW_RED,
            enums::ECN_MARK_MODE_ALL,
        ],
    },
    WredColor {
        name: "red",
        enable: tables::WRED_ATTR_RED_ENABLE,
        min_threshold: tables::WRED_ATTR_RED_MIN_THRESHOLD,
        max_threshold: tables::WRED_ATTR_RED_MAX_THRESHOLD,
        drop_probability: tables::WRED_ATTR_RED_DROP_PROBABILITY,
        ecn_modes: &[
            enums::ECN_MARK_MODE_RED,
            enums::ECN_MARK_MODE_GREEN_RED,
            enums::ECN_MARK_MODE_YELLOW_RED,
            enums::ECN_MARK_MODE_ALL,
        ],
    },
];

/// A color whose marking or dropping is active needs both thresholds,
/// within buffer bounds; drop probabilities are percentages.
fn pre_create_wred(attrs: &[Attr]) -> SaiResult<()> {
    let ecn_mark_mode =
        passed_enum(attrs, tables::WRED_ATTR_ECN_MARK_MODE).unwrap_or(enums::ECN_MARK_MODE_NONE);

    for color in WRED_COLORS {
        let enabled = passed_bool(attrs, color.enable).unwrap_or(false);
        let active = enabled || color.ecn_modes.contains(&ecn_mark_mode);

        if active {
            for (what, attr_id) in
                [("min", color.min_threshold), ("max", color.max_threshold)]
            {
                let Some(threshold) = passed_u32(attrs, attr_id) else {
                    log::error!("missing {} {} threshold attribute", color.name, what);
                    return Err(SaiError::MandatoryAttributeMissing);
                };

                if threshold < 1 || threshold > MAX_BUFFER_SIZE {
                    log::error!(
                        "invalid {} {} threshold value: {} <1..{}>",
                        color.name,
                        what,
                        threshold,
                        MAX_BUFFER_SIZE
                    );
                    return Err(SaiError::InvalidParameter);
                }
            }
        }

        if let Some(prob) = passed_u32(attrs, color.drop_probability) {
            if prob > 100 {
                log::error!("invalid {} drop probability: {} <0..100>", color.name, prob);
                return Err(SaiError::InvalidParameter);
            }
        }
    }

    Ok(())
}

fn pre_create_scheduler(attrs: &[Attr]) -> SaiResult<()> {
    if let Some(weight) = passed_u8(attrs, tables::SCHEDULER_ATTR_SCHEDULING_WEIGHT) {
        if !(1..=100).contains(&weight) {
            log::error!("invalid scheduling weight: {} <1..100>", weight);
            return Err(SaiError::InvalidParameter);
        }
    }

    Ok(())
}

fn pre_create_queue(attrs: &[Attr]) -> SaiResult<()> {
    if let Some(index) = passed_u8(attrs, tables::QUEUE_ATTR_INDEX) {
        if index > 16 {
            log::error!("invalid queue index: {} <0..16>", index);
            return Err(SaiError::InvalidParameter);
        }
    }

    Ok(())
}

fn pre_create_mirror_session(attrs: &[Attr]) -> SaiResult<()> {
    if let Some(version) = passed_u8(attrs, tables::MIRROR_SESSION_ATTR_IPHDR_VERSION) {
        if version != 4 && version != 6 {
            log::error!("invalid ip header version: {}", version);
            return Err(SaiError::InvalidParameter);
        }
    }

    if let Some(vlan) = passed_u16(attrs, tables::MIRROR_SESSION_ATTR_VLAN_ID) {
        if vlan > 4094 {
            log::error!("invalid mirror vlan id: {}", vlan);
            return Err(SaiError::InvalidParameter);
        }
    }

    Ok(())
}

fn pre_create_acl_range(attrs: &[Attr]) -> SaiResult<()> {
    let range_type = passed_enum(attrs, tables::ACL_RANGE_ATTR_TYPE);

    let limit = match find_attr(attrs, tables::ACL_RANGE_ATTR_LIMIT) {
        Some(Attr { value: AttrValue::U32Range(r), .. }) => *r,
        _ => return Ok(()),
    };

    match range_type {
        Some(enums::ACL_RANGE_TYPE_L4_SRC_PORT_RANGE)
        | Some(enums::ACL_RANGE_TYPE_L4_DST_PORT_RANGE) => {
            if limit.max > u32::from(u16::MAX) {
                log::error!("l4 port range limit {} exceeds 65535", limit.max);
                return Err(SaiError::InvalidParameter);
            }
        }
        Some(enums::ACL_RANGE_TYPE_OUTER_VLAN) | Some(enums::ACL_RANGE_TYPE_INNER_VLAN) => {
            if limit.min < 1 || limit.max > 4094 {
                log::error!("vlan range limit {}..{} out of <1..4094>", limit.min, limit.max);
                return Err(SaiError::InvalidParameter);
            }
        }
        _ => {}
    }

    Ok(())
}

fn map_list_non_empty(attrs: &[Attr], attr_id: AttrId, what: &str) -> SaiResult<()> {
    match find_attr(attrs, attr_id) {
        Some(Attr { value: AttrValue::TunnelMapList(list), .. }) if !list.is_null() && list.count > 0 => Ok(()),
        Some(Attr { value: AttrValue::QosMapList(list), .. }) if !list.is_null() && list.count > 0 => Ok(()),
        Some(_) => {
            log::error!("{} map list must not be empty", what);
            Err(SaiError::InvalidParameter)
        }
        // absence is the generic validator's call
        None => Ok(()),
    }
}

/// Dispatch the extra constraints for one object type; types without a
/// hook pass through.
pub fn pre_create_hook(object_type: ObjectType, attrs: &[Attr]) -> SaiResult<()> {
    match object_type {
        ObjectType::Wred => pre_create_wred(attrs),
        ObjectType::Scheduler => pre_create_scheduler(attrs),
        ObjectType::Queue => pre_create_queue(attrs),
        ObjectType::MirrorSession => pre_create_mirror_session(attrs),
        ObjectType::AclRange => pre_create_acl_range(attrs),
        ObjectType::TunnelMap => {
            map_list_non_empty(attrs, tables::TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST, "tunnel")
        }
        ObjectType::QosMap => {
            map_list_non_empty(attrs, tables::QOS_MAP_ATTR_MAP_TO_VALUE_LIST, "qos")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QosMap, TunnelMap, U32Range, ValueList};

    #[test]
    fn test_scheduler_weight_bounds() {
        let ok = vec![Attr::new(tables::SCHEDULER_ATTR_SCHEDULING_WEIGHT, AttrValue::U8(100))];
        assert!(pre_create_hook(ObjectType::Scheduler, &ok).is_ok());

        let zero = vec![Attr::new(tables::SCHEDULER_ATTR_SCHEDULING_WEIGHT, AttrValue::U8(0))];
        assert_eq!(
            pre_create_hook(ObjectType::Scheduler, &zero),
            Err(SaiError::InvalidParameter)
        );

        let big = vec![Attr::new(tables::SCHEDULER_ATTR_SCHEDULING_WEIGHT, AttrValue::U8(101))];
        assert_eq!(
            pre_create_hook(ObjectType::Scheduler, &big),
            Err(SaiError::InvalidParameter)
        );
    }

    #[test]
    fn test_queue_index_bound() {
        let ok = vec![Attr::new(tables::QUEUE_ATTR_INDEX, AttrValue::U8(16))];
        assert!(pre_create_hook(ObjectType::Queue, &ok).is_ok());

        let bad = vec![Attr::new(tables::QUEUE_ATTR_INDEX, AttrValue::U8(17))];
        assert_eq!(pre_create_hook(ObjectType::Queue, &bad), Err(SaiError::InvalidParameter));
    }

    #[test]
    fn test_mirror_iphdr_version() {
        for version in [4u8, 6] {
            let attrs =
                vec![Attr::new(tables::MIRROR_SESSION_ATTR_IPHDR_VERSION, AttrValue::U8(version))];
            assert!(pre_create_hook(ObjectType::MirrorSession, &attrs).is_ok());
        }

        let bad = vec![Attr::new(tables::MIRROR_SESSION_ATTR_IPHDR_VERSION, AttrValue::U8(5))];
        assert_eq!(
            pre_create_hook(ObjectType::MirrorSession, &bad),
            Err(SaiError::InvalidParameter)
        );
    }

    #[test]
    fn test_wred_ecn_requires_thresholds() {
        // green marking active but no thresholds
        let attrs = vec![Attr::new(
            tables::WRED_ATTR_ECN_MARK_MODE,
            AttrValue::I32(enums::ECN_MARK_MODE_GREEN),
        )];
        assert_eq!(
            pre_create_hook(ObjectType::Wred, &attrs),
            Err(SaiError::MandatoryAttributeMissing)
        );

        let attrs = vec![
            Attr::new(tables::WRED_ATTR_ECN_MARK_MODE, AttrValue::I32(enums::ECN_MARK_MODE_GREEN)),
            Attr::new(tables::WRED_ATTR_GREEN_MIN_THRESHOLD, AttrValue::U32(100)),
            Attr::new(tables::WRED_ATTR_GREEN_MAX_THRESHOLD, AttrValue::U32(1000)),
        ];
        assert!(pre_create_hook(ObjectType::Wred, &attrs).is_ok());
    }

    #[test]
    fn test_wred_drop_probability_percentage() {
        let attrs =
            vec![Attr::new(tables::WRED_ATTR_RED_DROP_PROBABILITY, AttrValue::U32(101))];
        assert_eq!(pre_create_hook(ObjectType::Wred, &attrs), Err(SaiError::InvalidParameter));
    }

    #[test]
    fn test_acl_range_bounds() {
        let ok = vec![
            Attr::new(
                tables::ACL_RANGE_ATTR_TYPE,
                AttrValue::I32(enums::ACL_RANGE_TYPE_L4_SRC_PORT_RANGE),
            ),
            Attr::new(
                tables::ACL_RANGE_ATTR_LIMIT,
                AttrValue::U32Range(U32Range { min: 1000, max: 2000 }),
            ),
        ];
        assert!(pre_create_hook(ObjectType::AclRange, &ok).is_ok());

        let too_big = vec![
            Attr::new(
                tables::ACL_RANGE_ATTR_TYPE,
                AttrValue::I32(enums::ACL_RANGE_TYPE_L4_DST_PORT_RANGE),
            ),
            Attr::new(
                tables::ACL_RANGE_ATTR_LIMIT,
                AttrValue::U32Range(U32Range { min: 0, max: 70_000 }),
            ),
        ];
        assert_eq!(
            pre_create_hook(ObjectType::AclRange, &too_big),
            Err(SaiError::InvalidParameter)
        );

        let vlan_zero = vec![
            Attr::new(
                tables::ACL_RANGE_ATTR_TYPE,
                AttrValue::I32(enums::ACL_RANGE_TYPE_OUTER_VLAN),
            ),
            Attr::new(
                tables::ACL_RANGE_ATTR_LIMIT,
                AttrValue::U32Range(U32Range { min: 0, max: 100 }),
            ),
        ];
        assert_eq!(
            pre_create_hook(ObjectType::AclRange, &vlan_zero),
            Err(SaiError::InvalidParameter)
        );
    }

    #[test]
    fn test_map_lists_must_not_be_empty() {
        let empty = vec![Attr::new(
            tables::TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST,
            AttrValue::TunnelMapList(ValueList::null(0)),
        )];
        assert_eq!(
            pre_create_hook(ObjectType::TunnelMap, &empty),
            Err(SaiError::InvalidParameter)
        );

        let full = vec![Attr::new(
            tables::TUNNEL_MAP_ATTR_MAP_TO_VALUE_LIST,
            AttrValue::TunnelMapList(ValueList::new(vec![TunnelMap::default()])),
        )];
        assert!(pre_create_hook(ObjectType::TunnelMap, &full).is_ok());

        let qos_empty = vec![Attr::new(
            tables::QOS_MAP_ATTR_MAP_TO_VALUE_LIST,
            AttrValue::QosMapList(ValueList::null(0)),
        )];
        assert_eq!(
            pre_create_hook(ObjectType::QosMap, &qos_empty),
            Err(SaiError::InvalidParameter)
        );

        let qos_full = vec![Attr::new(
            tables::QOS_MAP_ATTR_MAP_TO_VALUE_LIST,
            AttrValue::QosMapList(ValueList::new(vec![QosMap::default()])),
        )];
        assert!(pre_create_hook(ObjectType::QosMap, &qos_full).is_ok());
    }
}
