// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! BCM56850 profile.
//!
//! 32 logical ports with a fixed 128-lane mapping, 20 queues per port
//! (10 in, 10 out), 8 ingress priority groups and a 13-node three-level
//! scheduler tree per port:
//!
//! ```text
//! 0
//! +-- 1 -- 3 4 5 6 7 8 9 a   (each with an in/out queue pair)
//! +-- 2 -- b c               (each with an in/out queue pair)
//! ```

use crate::vs::init::{self, InitContext, Topology};
use crate::types::{Oid, SaiResult};

#[rustfmt::skip]
static LANES: [u32; 128] = [
     29,  30,  31,  32,
     25,  26,  27,  28,
     37,  38,  39,  40,
     33,  34,  35,  36,
     41,  42,  43,  44,
     45,  46,  47,  48,
      5,   6,   7,   8,
      1,   2,   3,   4,
      9,  10,  11,  12,
     13,  14,  15,  16,
     21,  22,  23,  24,
     17,  18,  19,  20,
     49,  50,  51,  52,
     53,  54,  55,  56,
     61,  62,  63,  64,
     57,  58,  59,  60,
     65,  66,  67,  68,
     69,  70,  71,  72,
     77,  78,  79,  80,
     73,  74,  75,  76,
    105, 106, 107, 108,
    109, 110, 111, 112,
    117, 118, 119, 120,
    113, 114, 115, 116,
    121, 122, 123, 124,
    125, 126, 127, 128,
     85,  86,  87,  88,
     81,  82,  83,  84,
     89,  90,  91,  92,
     93,  94,  95,  96,
     97,  98,  99, 100,
    101, 102, 103, 104,
];

const TOPOLOGY: Topology = Topology {
    lanes: &LANES,
    port_count: 32,
    port_speed: 10_000,
    queues_per_port: 20,
    pgs_per_port: 8,
    sgs_per_port: 13,
};

/// Three-level tree: root 0 over {1, 2}; node 1 over 3..=0xa, node 2 over
/// {0xb, 0xc}; every leaf gets one in-queue and the matching out-queue.
fn build_scheduler_tree(ctx: &mut dyn InitContext, sgs: &[Oid], port: Oid) -> SaiResult<()> {
    let queues = init::fetch_port_queues(ctx, port, TOPOLOGY.queues_per_port)?;
    let half = (TOPOLOGY.queues_per_port / 2) as usize;

    init::set_sg_children(ctx, sgs[0], vec![sgs[1], sgs[2]])?;

    let mut queue_index = 0;

    let level1: Vec<Oid> = sgs[3..=0xa].to_vec();
    init::set_sg_children(ctx, sgs[1], level1.clone())?;

    for sg in level1 {
        // first half are in queues, second half are out queues
        let children = vec![queues[queue_index], queues[queue_index + half]];
        queue_index += 1;

        init::set_sg_children(ctx, sg, children)?;
    }

    let level2: Vec<Oid> = vec![sgs[0xb], sgs[0xc]];
    init::set_sg_children(ctx, sgs[2], level2.clone())?;

    for sg in level2 {
        let children = vec![queues[queue_index], queues[queue_index + half]];
        queue_index += 1;

        init::set_sg_children(ctx, sg, children)?;
    }

    Ok(())
}

/// Install the BCM56850 default topology on a freshly created switch.
pub fn init_switch_bcm56850(ctx: &mut dyn InitContext, switch_id: Oid) -> SaiResult<()> {
    init::initialize_default_objects(ctx, switch_id, &TOPOLOGY, &build_scheduler_tree)
}
