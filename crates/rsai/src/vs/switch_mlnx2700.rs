// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! MLNX2700 profile.
//!
//! 32 ports with a distinct lane mapping, 16 queues per port (8 in,
//! 8 out), 8 ingress priority groups and a flat 16-node scheduler tree:
//! root 0 over nodes 8..=f (each holding an in/out queue pair), nodes
//! 1..=7 present but empty.

use crate::meta::tables;
use crate::types::{Attr, AttrValue, ObjectType, Oid, SaiResult};
use crate::vs::init::{self, InitContext, Topology};

#[rustfmt::skip]
static LANES: [u32; 128] = [
     64,  65,  66,  67,
     68,  69,  70,  71,
     72,  73,  74,  75,
     76,  77,  78,  79,
     80,  81,  82,  83,
     84,  85,  86,  87,
     88,  89,  90,  91,
     92,  93,  94,  95,
     96,  97,  98,  99,
    100, 101, 102, 103,
    104, 105, 106, 107,
    108, 109, 110, 111,
    112, 113, 114, 115,
    116, 117, 118, 119,
    120, 121, 122, 123,
    124, 125, 126, 127,
     56,  57,  58,  59,
     60,  61,  62,  63,
     48,  49,  50,  51,
     52,  53,  54,  55,
     40,  41,  42,  43,
     44,  45,  46,  47,
     32,  33,  34,  35,
     36,  37,  38,  39,
     24,  25,  26,  27,
     28,  29,  30,  31,
     16,  17,  18,  19,
     20,  21,  22,  23,
      8,   9,  10,  11,
     12,  13,  14,  15,
      0,   1,   2,   3,
      4,   5,   6,   7,
];

const TOPOLOGY: Topology = Topology {
    lanes: &LANES,
    port_count: 32,
    port_speed: 10_000,
    queues_per_port: 16,
    pgs_per_port: 8,
    sgs_per_port: 16,
};

fn set_sg_port(ctx: &mut dyn InitContext, sg: Oid, port: Oid) -> SaiResult<()> {
    ctx.set_internal(
        ObjectType::SchedulerGroup,
        sg,
        &Attr::new(tables::SCHEDULER_GROUP_ATTR_PORT_ID, AttrValue::Oid(port)),
    )
}

/// Two levels: root 0 over nodes 8..=f, queue pairs at the leaves, nodes
/// 1..=7 empty.
fn build_scheduler_tree(ctx: &mut dyn InitContext, sgs: &[Oid], port: Oid) -> SaiResult<()> {
    let queues = init::fetch_port_queues(ctx, port, TOPOLOGY.queues_per_port)?;
    let half = (TOPOLOGY.queues_per_port / 2) as usize;

    set_sg_port(ctx, sgs[0], port)?;
    init::set_sg_children(ctx, sgs[0], sgs[8..0x10].to_vec())?;

    for &sg in &sgs[1..8] {
        set_sg_port(ctx, sg, port)?;
        init::set_sg_children(ctx, sg, Vec::new())?;
    }

    let mut queue_index = 0;

    for &sg in &sgs[8..0x10] {
        // first half are in queues, second half are out queues
        let children = vec![queues[queue_index], queues[queue_index + half]];
        queue_index += 1;

        init::set_sg_children(ctx, sg, children)?;
    }

    Ok(())
}

/// Install the MLNX2700 default topology on a freshly created switch.
pub fn init_switch_mlnx2700(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    init::initialize_default_objects(ctx, switch_id, &TOPOLOGY, &build_scheduler_tree)
}
