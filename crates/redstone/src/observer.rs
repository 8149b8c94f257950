//! Observer (spec §4.10). `rotation` is the detection (`face`) direction;
//! the observer emits from `back = opposite(face)` only.
//!
//! Represented with a plain `powered: bool` rather than the three-valued
//! `{Idle, PulseOn, PulseOff}` phase spec.md describes: since exactly one
//! kind of scheduled tick ever fires on an observer, `powered` already
//! distinguishes "about to pulse off" (true) from "about to pulse on"
//! (false) without a separate phase tag — matching the teacher's own
//! `observer.rs`, which tracks this with its block state's `powered` flag.

use redlogic_blocks::{BlockPos, LogicState};
use redlogic_world::{TickPriority, World};

use crate::notify;

pub fn on_neighbor_update(world: &mut impl World, pos: BlockPos, from: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let face = block.rotation;
    if from != pos.offset(face) {
        return;
    }
    world.schedule_tick(pos, 2, TickPriority::Normal);
}

pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let powered = match block.logic {
        LogicState::Observer { powered } => powered,
        _ => return,
    };

    let new_powered = !powered;
    if let Some(block) = world.block_at_mut(pos) {
        block.logic = LogicState::Observer {
            powered: new_powered,
        };
        block.visual.powered = new_powered;
        block.visual.power_level = if new_powered { 15 } else { 0 };
    }
    notify::notify_neighbors(world, pos);

    if new_powered {
        world.schedule_tick(pos, 2, TickPriority::Normal);
    }
}
