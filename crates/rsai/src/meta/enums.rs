// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum tables referenced by attribute metadata.
//!
//! Wire names keep the `SAI_*` convention; numeric values follow the
//! classic headers. Value constants for code that needs to talk about a
//! specific member (profiles, hooks, tests) sit next to each table.

use crate::meta::attr::EnumMetadata;

// =======================================================================
// Packet forwarding
// =======================================================================

pub const PACKET_COLOR_GREEN: i32 = 0;
pub const PACKET_COLOR_YELLOW: i32 = 1;
pub const PACKET_COLOR_RED: i32 = 2;

pub static PACKET_COLOR: EnumMetadata = EnumMetadata {
    name: "sai_packet_color_t",
    values: &[
        (PACKET_COLOR_GREEN, "SAI_PACKET_COLOR_GREEN"),
        (PACKET_COLOR_YELLOW, "SAI_PACKET_COLOR_YELLOW"),
        (PACKET_COLOR_RED, "SAI_PACKET_COLOR_RED"),
    ],
};

pub const PACKET_ACTION_DROP: i32 = 0;
pub const PACKET_ACTION_FORWARD: i32 = 1;
pub const PACKET_ACTION_COPY: i32 = 2;
pub const PACKET_ACTION_COPY_CANCEL: i32 = 3;
pub const PACKET_ACTION_TRAP: i32 = 4;
pub const PACKET_ACTION_LOG: i32 = 5;
pub const PACKET_ACTION_DENY: i32 = 6;
pub const PACKET_ACTION_TRANSIT: i32 = 7;

pub static PACKET_ACTION: EnumMetadata = EnumMetadata {
    name: "sai_packet_action_t",
    values: &[
        (PACKET_ACTION_DROP, "SAI_PACKET_ACTION_DROP"),
        (PACKET_ACTION_FORWARD, "SAI_PACKET_ACTION_FORWARD"),
        (PACKET_ACTION_COPY, "SAI_PACKET_ACTION_COPY"),
        (PACKET_ACTION_COPY_CANCEL, "SAI_PACKET_ACTION_COPY_CANCEL"),
        (PACKET_ACTION_TRAP, "SAI_PACKET_ACTION_TRAP"),
        (PACKET_ACTION_LOG, "SAI_PACKET_ACTION_LOG"),
        (PACKET_ACTION_DENY, "SAI_PACKET_ACTION_DENY"),
        (PACKET_ACTION_TRANSIT, "SAI_PACKET_ACTION_TRANSIT"),
    ],
};

// =======================================================================
// Ports and L2
// =======================================================================

pub const PORT_TYPE_LOGICAL: i32 = 0;
pub const PORT_TYPE_CPU: i32 = 1;
pub const PORT_TYPE_FABRIC: i32 = 2;

pub static PORT_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_port_type_t",
    values: &[
        (PORT_TYPE_LOGICAL, "SAI_PORT_TYPE_LOGICAL"),
        (PORT_TYPE_CPU, "SAI_PORT_TYPE_CPU"),
        (PORT_TYPE_FABRIC, "SAI_PORT_TYPE_FABRIC"),
    ],
};

pub const BRIDGE_TYPE_1Q: i32 = 0;
pub const BRIDGE_TYPE_1D: i32 = 1;

pub static BRIDGE_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_bridge_type_t",
    values: &[
        (BRIDGE_TYPE_1Q, "SAI_BRIDGE_TYPE_1Q"),
        (BRIDGE_TYPE_1D, "SAI_BRIDGE_TYPE_1D"),
    ],
};

pub const BRIDGE_PORT_TYPE_PORT: i32 = 0;
pub const BRIDGE_PORT_TYPE_SUB_PORT: i32 = 1;
pub const BRIDGE_PORT_TYPE_1Q_ROUTER: i32 = 2;
pub const BRIDGE_PORT_TYPE_1D_ROUTER: i32 = 3;
pub const BRIDGE_PORT_TYPE_TUNNEL: i32 = 4;

pub static BRIDGE_PORT_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_bridge_port_type_t",
    values: &[
        (BRIDGE_PORT_TYPE_PORT, "SAI_BRIDGE_PORT_TYPE_PORT"),
        (BRIDGE_PORT_TYPE_SUB_PORT, "SAI_BRIDGE_PORT_TYPE_SUB_PORT"),
        (BRIDGE_PORT_TYPE_1Q_ROUTER, "SAI_BRIDGE_PORT_TYPE_1Q_ROUTER"),
        (BRIDGE_PORT_TYPE_1D_ROUTER, "SAI_BRIDGE_PORT_TYPE_1D_ROUTER"),
        (BRIDGE_PORT_TYPE_TUNNEL, "SAI_BRIDGE_PORT_TYPE_TUNNEL"),
    ],
};

pub const BRIDGE_PORT_FDB_LEARNING_MODE_DROP: i32 = 0;
pub const BRIDGE_PORT_FDB_LEARNING_MODE_DISABLE: i32 = 1;
pub const BRIDGE_PORT_FDB_LEARNING_MODE_HW: i32 = 2;
pub const BRIDGE_PORT_FDB_LEARNING_MODE_CPU_TRAP: i32 = 3;
pub const BRIDGE_PORT_FDB_LEARNING_MODE_CPU_LOG: i32 = 4;

pub static BRIDGE_PORT_FDB_LEARNING_MODE: EnumMetadata = EnumMetadata {
    name: "sai_bridge_port_fdb_learning_mode_t",
    values: &[
        (BRIDGE_PORT_FDB_LEARNING_MODE_DROP, "SAI_BRIDGE_PORT_FDB_LEARNING_MODE_DROP"),
        (BRIDGE_PORT_FDB_LEARNING_MODE_DISABLE, "SAI_BRIDGE_PORT_FDB_LEARNING_MODE_DISABLE"),
        (BRIDGE_PORT_FDB_LEARNING_MODE_HW, "SAI_BRIDGE_PORT_FDB_LEARNING_MODE_HW"),
        (BRIDGE_PORT_FDB_LEARNING_MODE_CPU_TRAP, "SAI_BRIDGE_PORT_FDB_LEARNING_MODE_CPU_TRAP"),
        (BRIDGE_PORT_FDB_LEARNING_MODE_CPU_LOG, "SAI_BRIDGE_PORT_FDB_LEARNING_MODE_CPU_LOG"),
    ],
};

pub const VLAN_TAGGING_MODE_UNTAGGED: i32 = 0;
pub const VLAN_TAGGING_MODE_TAGGED: i32 = 1;
pub const VLAN_TAGGING_MODE_PRIORITY_TAGGED: i32 = 2;

pub static VLAN_TAGGING_MODE: EnumMetadata = EnumMetadata {
    name: "sai_vlan_tagging_mode_t",
    values: &[
        (VLAN_TAGGING_MODE_UNTAGGED, "SAI_VLAN_TAGGING_MODE_UNTAGGED"),
        (VLAN_TAGGING_MODE_TAGGED, "SAI_VLAN_TAGGING_MODE_TAGGED"),
        (VLAN_TAGGING_MODE_PRIORITY_TAGGED, "SAI_VLAN_TAGGING_MODE_PRIORITY_TAGGED"),
    ],
};

pub const FDB_ENTRY_TYPE_DYNAMIC: i32 = 0;
pub const FDB_ENTRY_TYPE_STATIC: i32 = 1;

pub static FDB_ENTRY_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_fdb_entry_type_t",
    values: &[
        (FDB_ENTRY_TYPE_DYNAMIC, "SAI_FDB_ENTRY_TYPE_DYNAMIC"),
        (FDB_ENTRY_TYPE_STATIC, "SAI_FDB_ENTRY_TYPE_STATIC"),
    ],
};

pub const FDB_ENTRY_BRIDGE_TYPE_1Q: i32 = 0;
pub const FDB_ENTRY_BRIDGE_TYPE_1D: i32 = 1;

pub static FDB_ENTRY_BRIDGE_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_fdb_entry_bridge_type_t",
    values: &[
        (FDB_ENTRY_BRIDGE_TYPE_1Q, "SAI_FDB_ENTRY_BRIDGE_TYPE_1Q"),
        (FDB_ENTRY_BRIDGE_TYPE_1D, "SAI_FDB_ENTRY_BRIDGE_TYPE_1D"),
    ],
};

pub const FDB_EVENT_LEARNED: i32 = 0;
pub const FDB_EVENT_AGED: i32 = 1;
pub const FDB_EVENT_FLUSHED: i32 = 2;

pub static FDB_EVENT: EnumMetadata = EnumMetadata {
    name: "sai_fdb_event_t",
    values: &[
        (FDB_EVENT_LEARNED, "SAI_FDB_EVENT_LEARNED"),
        (FDB_EVENT_AGED, "SAI_FDB_EVENT_AGED"),
        (FDB_EVENT_FLUSHED, "SAI_FDB_EVENT_FLUSHED"),
    ],
};

// =======================================================================
// L3
// =======================================================================

pub const ROUTER_INTERFACE_TYPE_PORT: i32 = 0;
pub const ROUTER_INTERFACE_TYPE_VLAN: i32 = 1;
pub const ROUTER_INTERFACE_TYPE_LOOPBACK: i32 = 2;

pub static ROUTER_INTERFACE_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_router_interface_type_t",
    values: &[
        (ROUTER_INTERFACE_TYPE_PORT, "SAI_ROUTER_INTERFACE_TYPE_PORT"),
        (ROUTER_INTERFACE_TYPE_VLAN, "SAI_ROUTER_INTERFACE_TYPE_VLAN"),
        (ROUTER_INTERFACE_TYPE_LOOPBACK, "SAI_ROUTER_INTERFACE_TYPE_LOOPBACK"),
    ],
};

pub const NEXT_HOP_TYPE_IP: i32 = 0;
pub const NEXT_HOP_TYPE_TUNNEL_ENCAP: i32 = 1;

pub static NEXT_HOP_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_next_hop_type_t",
    values: &[
        (NEXT_HOP_TYPE_IP, "SAI_NEXT_HOP_TYPE_IP"),
        (NEXT_HOP_TYPE_TUNNEL_ENCAP, "SAI_NEXT_HOP_TYPE_TUNNEL_ENCAP"),
    ],
};

// =======================================================================
// Buffers and QoS
// =======================================================================

pub const BUFFER_POOL_TYPE_INGRESS: i32 = 0;
pub const BUFFER_POOL_TYPE_EGRESS: i32 = 1;

pub static BUFFER_POOL_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_buffer_pool_type_t",
    values: &[
        (BUFFER_POOL_TYPE_INGRESS, "SAI_BUFFER_POOL_TYPE_INGRESS"),
        (BUFFER_POOL_TYPE_EGRESS, "SAI_BUFFER_POOL_TYPE_EGRESS"),
    ],
};

pub const BUFFER_POOL_THRESHOLD_MODE_STATIC: i32 = 0;
pub const BUFFER_POOL_THRESHOLD_MODE_DYNAMIC: i32 = 1;

pub static BUFFER_POOL_THRESHOLD_MODE: EnumMetadata = EnumMetadata {
    name: "sai_buffer_pool_threshold_mode_t",
    values: &[
        (BUFFER_POOL_THRESHOLD_MODE_STATIC, "SAI_BUFFER_POOL_THRESHOLD_MODE_STATIC"),
        (BUFFER_POOL_THRESHOLD_MODE_DYNAMIC, "SAI_BUFFER_POOL_THRESHOLD_MODE_DYNAMIC"),
    ],
};

pub const SCHEDULING_TYPE_STRICT: i32 = 0;
pub const SCHEDULING_TYPE_WRR: i32 = 1;
pub const SCHEDULING_TYPE_DWRR: i32 = 2;

pub static SCHEDULING_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_scheduling_type_t",
    values: &[
        (SCHEDULING_TYPE_STRICT, "SAI_SCHEDULING_TYPE_STRICT"),
        (SCHEDULING_TYPE_WRR, "SAI_SCHEDULING_TYPE_WRR"),
        (SCHEDULING_TYPE_DWRR, "SAI_SCHEDULING_TYPE_DWRR"),
    ],
};

pub const QUEUE_TYPE_ALL: i32 = 0;
pub const QUEUE_TYPE_UNICAST: i32 = 1;
pub const QUEUE_TYPE_MULTICAST: i32 = 2;

pub static QUEUE_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_queue_type_t",
    values: &[
        (QUEUE_TYPE_ALL, "SAI_QUEUE_TYPE_ALL"),
        (QUEUE_TYPE_UNICAST, "SAI_QUEUE_TYPE_UNICAST"),
        (QUEUE_TYPE_MULTICAST, "SAI_QUEUE_TYPE_MULTICAST"),
    ],
};

pub const METER_TYPE_PACKETS: i32 = 0;
pub const METER_TYPE_BYTES: i32 = 1;

pub static METER_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_meter_type_t",
    values: &[
        (METER_TYPE_PACKETS, "SAI_METER_TYPE_PACKETS"),
        (METER_TYPE_BYTES, "SAI_METER_TYPE_BYTES"),
    ],
};

pub const POLICER_MODE_SR_TCM: i32 = 0;
pub const POLICER_MODE_TR_TCM: i32 = 1;
pub const POLICER_MODE_STORM_CONTROL: i32 = 2;

pub static POLICER_MODE: EnumMetadata = EnumMetadata {
    name: "sai_policer_mode_t",
    values: &[
        (POLICER_MODE_SR_TCM, "SAI_POLICER_MODE_SR_TCM"),
        (POLICER_MODE_TR_TCM, "SAI_POLICER_MODE_TR_TCM"),
        (POLICER_MODE_STORM_CONTROL, "SAI_POLICER_MODE_STORM_CONTROL"),
    ],
};

pub const QOS_MAP_TYPE_DOT1P_TO_TC: i32 = 0;
pub const QOS_MAP_TYPE_DOT1P_TO_COLOR: i32 = 1;
pub const QOS_MAP_TYPE_DSCP_TO_TC: i32 = 2;
pub const QOS_MAP_TYPE_DSCP_TO_COLOR: i32 = 3;
pub const QOS_MAP_TYPE_TC_TO_QUEUE: i32 = 4;
pub const QOS_MAP_TYPE_TC_AND_COLOR_TO_DSCP: i32 = 5;
pub const QOS_MAP_TYPE_TC_AND_COLOR_TO_DOT1P: i32 = 6;
pub const QOS_MAP_TYPE_TC_TO_PRIORITY_GROUP: i32 = 7;
pub const QOS_MAP_TYPE_PFC_PRIORITY_TO_PRIORITY_GROUP: i32 = 8;
pub const QOS_MAP_TYPE_PFC_PRIORITY_TO_QUEUE: i32 = 9;

pub static QOS_MAP_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_qos_map_type_t",
    values: &[
        (QOS_MAP_TYPE_DOT1P_TO_TC, "SAI_QOS_MAP_TYPE_DOT1P_TO_TC"),
        (QOS_MAP_TYPE_DOT1P_TO_COLOR, "SAI_QOS_MAP_TYPE_DOT1P_TO_COLOR"),
        (QOS_MAP_TYPE_DSCP_TO_TC, "SAI_QOS_MAP_TYPE_DSCP_TO_TC"),
        (QOS_MAP_TYPE_DSCP_TO_COLOR, "SAI_QOS_MAP_TYPE_DSCP_TO_COLOR"),
        (QOS_MAP_TYPE_TC_TO_QUEUE, "SAI_QOS_MAP_TYPE_TC_TO_QUEUE"),
        (QOS_MAP_TYPE_TC_AND_COLOR_TO_DSCP, "SAI_QOS_MAP_TYPE_TC_AND_COLOR_TO_DSCP"),
        (QOS_MAP_TYPE_TC_AND_COLOR_TO_DOT1P, "SAI_QOS_MAP_TYPE_TC_AND_COLOR_TO_DOT1P"),
        (QOS_MAP_TYPE_TC_TO_PRIORITY_GROUP, "SAI_QOS_MAP_TYPE_TC_TO_PRIORITY_GROUP"),
        (
            QOS_MAP_TYPE_PFC_PRIORITY_TO_PRIORITY_GROUP,
            "SAI_QOS_MAP_TYPE_PFC_PRIORITY_TO_PRIORITY_GROUP",
        ),
        (QOS_MAP_TYPE_PFC_PRIORITY_TO_QUEUE, "SAI_QOS_MAP_TYPE_PFC_PRIORITY_TO_QUEUE"),
    ],
};

pub const ECN_MARK_MODE_NONE: i32 = 0;
pub const ECN_MARK_MODE_GREEN: i32 = 1;
pub const ECN_MARK_MODE_YELLOW: i32 = 2;
pub const ECN_MARK_MODE_RED: i32 = 3;
pub const ECN_MARK_MODE_GREEN_YELLOW: i32 = 4;
pub const ECN_MARK_MODE_GREEN_RED: i32 = 5;
pub const ECN_MARK_MODE_YELLOW_RED: i32 = 6;
pub const ECN_MARK_MODE_ALL: i32 = 7;

pub static ECN_MARK_MODE: EnumMetadata = EnumMetadata {
    name: "sai_ecn_mark_mode_t",
    values: &[
        (ECN_MARK_MODE_NONE, "SAI_ECN_MARK_MODE_NONE"),
        (ECN_MARK_MODE_GREEN, "SAI_ECN_MARK_MODE_GREEN"),
        (ECN_MARK_MODE_YELLOW, "SAI_ECN_MARK_MODE_YELLOW"),
        (ECN_MARK_MODE_RED, "SAI_ECN_MARK_MODE_RED"),
        (ECN_MARK_MODE_GREEN_YELLOW, "SAI_ECN_MARK_MODE_GREEN_YELLOW"),
        (ECN_MARK_MODE_GREEN_RED, "SAI_ECN_MARK_MODE_GREEN_RED"),
        (ECN_MARK_MODE_YELLOW_RED, "SAI_ECN_MARK_MODE_YELLOW_RED"),
        (ECN_MARK_MODE_ALL, "SAI_ECN_MARK_MODE_ALL"),
    ],
};

// =======================================================================
// ACL
// =======================================================================

pub const ACL_STAGE_INGRESS: i32 = 0;
pub const ACL_STAGE_EGRESS: i32 = 1;

pub static ACL_STAGE: EnumMetadata = EnumMetadata {
    name: "sai_acl_stage_t",
    values: &[
        (ACL_STAGE_INGRESS, "SAI_ACL_STAGE_INGRESS"),
        (ACL_STAGE_EGRESS, "SAI_ACL_STAGE_EGRESS"),
    ],
};

pub const ACL_RANGE_TYPE_L4_SRC_PORT_RANGE: i32 = 0;
pub const ACL_RANGE_TYPE_L4_DST_PORT_RANGE: i32 = 1;
pub const ACL_RANGE_TYPE_OUTER_VLAN: i32 = 2;
pub const ACL_RANGE_TYPE_INNER_VLAN: i32 = 3;
pub const ACL_RANGE_TYPE_PACKET_LENGTH: i32 = 4;

pub static ACL_RANGE_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_acl_range_type_t",
    values: &[
        (ACL_RANGE_TYPE_L4_SRC_PORT_RANGE, "SAI_ACL_RANGE_TYPE_L4_SRC_PORT_RANGE"),
        (ACL_RANGE_TYPE_L4_DST_PORT_RANGE, "SAI_ACL_RANGE_TYPE_L4_DST_PORT_RANGE"),
        (ACL_RANGE_TYPE_OUTER_VLAN, "SAI_ACL_RANGE_TYPE_OUTER_VLAN"),
        (ACL_RANGE_TYPE_INNER_VLAN, "SAI_ACL_RANGE_TYPE_INNER_VLAN"),
        (ACL_RANGE_TYPE_PACKET_LENGTH, "SAI_ACL_RANGE_TYPE_PACKET_LENGTH"),
    ],
};

pub const ACL_ACTION_TYPE_REDIRECT: i32 = 0;
pub const ACL_ACTION_TYPE_PACKET_ACTION: i32 = 1;
pub const ACL_ACTION_TYPE_COUNTER: i32 = 2;
pub const ACL_ACTION_TYPE_MIRROR_INGRESS: i32 = 3;
pub const ACL_ACTION_TYPE_MIRROR_EGRESS: i32 = 4;
pub const ACL_ACTION_TYPE_SET_TC: i32 = 5;

pub static ACL_ACTION_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_acl_action_type_t",
    values: &[
        (ACL_ACTION_TYPE_REDIRECT, "SAI_ACL_ACTION_TYPE_REDIRECT"),
        (ACL_ACTION_TYPE_PACKET_ACTION, "SAI_ACL_ACTION_TYPE_PACKET_ACTION"),
        (ACL_ACTION_TYPE_COUNTER, "SAI_ACL_ACTION_TYPE_COUNTER"),
        (ACL_ACTION_TYPE_MIRROR_INGRESS, "SAI_ACL_ACTION_TYPE_MIRROR_INGRESS"),
        (ACL_ACTION_TYPE_MIRROR_EGRESS, "SAI_ACL_ACTION_TYPE_MIRROR_EGRESS"),
        (ACL_ACTION_TYPE_SET_TC, "SAI_ACL_ACTION_TYPE_SET_TC"),
    ],
};

pub const ACL_IP_TYPE_ANY: i32 = 0;
pub const ACL_IP_TYPE_IP: i32 = 1;
pub const ACL_IP_TYPE_NON_IP: i32 = 2;
pub const ACL_IP_TYPE_IPV4ANY: i32 = 3;
pub const ACL_IP_TYPE_NON_IPV4: i32 = 4;
pub const ACL_IP_TYPE_IPV6ANY: i32 = 5;
pub const ACL_IP_TYPE_NON_IPV6: i32 = 6;
pub const ACL_IP_TYPE_ARP: i32 = 7;

pub static ACL_IP_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_acl_ip_type_t",
    values: &[
        (ACL_IP_TYPE_ANY, "SAI_ACL_IP_TYPE_ANY"),
        (ACL_IP_TYPE_IP, "SAI_ACL_IP_TYPE_IP"),
        (ACL_IP_TYPE_NON_IP, "SAI_ACL_IP_TYPE_NON_IP"),
        (ACL_IP_TYPE_IPV4ANY, "SAI_ACL_IP_TYPE_IPV4ANY"),
        (ACL_IP_TYPE_NON_IPV4, "SAI_ACL_IP_TYPE_NON_IPV4"),
        (ACL_IP_TYPE_IPV6ANY, "SAI_ACL_IP_TYPE_IPV6ANY"),
        (ACL_IP_TYPE_NON_IPV6, "SAI_ACL_IP_TYPE_NON_IPV6"),
        (ACL_IP_TYPE_ARP, "SAI_ACL_IP_TYPE_ARP"),
    ],
};

// =======================================================================
// Mirroring and tunnels
// =======================================================================

pub const MIRROR_SESSION_TYPE_LOCAL: i32 = 0;
pub const MIRROR_SESSION_TYPE_REMOTE: i32 = 1;
pub const MIRROR_SESSION_TYPE_ENHANCED_REMOTE: i32 = 2;

pub static MIRROR_SESSION_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_mirror_session_type_t",
    values: &[
        (MIRROR_SESSION_TYPE_LOCAL, "SAI_MIRROR_SESSION_TYPE_LOCAL"),
        (MIRROR_SESSION_TYPE_REMOTE, "SAI_MIRROR_SESSION_TYPE_REMOTE"),
        (MIRROR_SESSION_TYPE_ENHANCED_REMOTE, "SAI_MIRROR_SESSION_TYPE_ENHANCED_REMOTE"),
    ],
};

pub const ERSPAN_ENCAPSULATION_TYPE_MIRROR_L3_GRE_TUNNEL: i32 = 0;

pub static ERSPAN_ENCAPSULATION_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_erspan_encapsulation_type_t",
    values: &[(
        ERSPAN_ENCAPSULATION_TYPE_MIRROR_L3_GRE_TUNNEL,
        "SAI_ERSPAN_ENCAPSULATION_TYPE_MIRROR_L3_GRE_TUNNEL",
    )],
};

pub const TUNNEL_TYPE_IPINIP: i32 = 0;
pub const TUNNEL_TYPE_IPINIP_GRE: i32 = 1;
pub const TUNNEL_TYPE_VXLAN: i32 = 2;

pub static TUNNEL_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_tunnel_type_t",
    values: &[
        (TUNNEL_TYPE_IPINIP, "SAI_TUNNEL_TYPE_IPINIP"),
        (TUNNEL_TYPE_IPINIP_GRE, "SAI_TUNNEL_TYPE_IPINIP_GRE"),
        (TUNNEL_TYPE_VXLAN, "SAI_TUNNEL_TYPE_VXLAN"),
    ],
};

pub const TUNNEL_MAP_TYPE_OECN_TO_UECN: i32 = 0;
pub const TUNNEL_MAP_TYPE_UECN_OECN_TO_OECN: i32 = 1;
pub const TUNNEL_MAP_TYPE_VNI_TO_VLAN_ID: i32 = 2;
pub const TUNNEL_MAP_TYPE_VLAN_ID_TO_VNI: i32 = 3;

pub static TUNNEL_MAP_TYPE: EnumMetadata = EnumMetadata {
    name: "sai_tunnel_map_type_t",
    values: &[
        (TUNNEL_MAP_TYPE_OECN_TO_UECN, "SAI_TUNNEL_MAP_TYPE_OECN_TO_UECN"),
        (TUNNEL_MAP_TYPE_UECN_OECN_TO_OECN, "SAI_TUNNEL_MAP_TYPE_UECN_OECN_TO_OECN"),
        (TUNNEL_MAP_TYPE_VNI_TO_VLAN_ID, "SAI_TUNNEL_MAP_TYPE_VNI_TO_VLAN_ID"),
        (TUNNEL_MAP_TYPE_VLAN_ID_TO_VNI, "SAI_TUNNEL_MAP_TYPE_VLAN_ID_TO_VNI"),
    ],
};
