//! Neighbor Notifier (spec §4.2, C3).
//!
//! `notify_neighbors` iterates the four cardinal neighbors and dispatches
//! `on_neighbor_update` on each, synchronously and depth-first, in the
//! fixed cardinal order N, E, S, W (spec §5 ordering guarantee). The call
//! graph is not otherwise bounded — termination depends on every kind's
//! `on_neighbor_update` guarding behind a state-equality check, the
//! canonical behavior (b) spec §4.2 names. A thread-local depth counter
//! backs a debug-only tripwire for the pathological constructions the
//! same section warns about.

use std::cell::Cell;

use redlogic_blocks::{BlockPos, Direction};
use redlogic_world::World;

use crate::on_neighbor_update;

thread_local! {
    static DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Generous ceiling on recursive `notify_neighbors` -> `on_neighbor_update`
/// depth within one externally-triggered edit (spec §9's suggested
/// "10,000 dispatch" bound, reinterpreted as call-stack depth since this
/// engine uses plain recursion rather than an explicit worklist).
const MAX_DEPTH: u32 = 10_000;

pub fn notify_neighbors(world: &mut impl World, pos: BlockPos) {
    let depth = DEPTH.with(|d| {
        d.set(d.get() + 1);
        d.get()
    });
    debug_assert!(
        depth < MAX_DEPTH,
        "notify_neighbors recursion exceeded {MAX_DEPTH} at {pos}; likely a non-convergent feedback loop"
    );

    for dir in Direction::ALL {
        let neighbor_pos = pos.offset(dir);
        if world.block_at(neighbor_pos).is_some() {
            on_neighbor_update(world, neighbor_pos, pos);
        }
    }

    DEPTH.with(|d| d.set(d.get() - 1));
}
