//! Lever (spec §4.6). Stateless between `toggle` calls.

use redlogic_blocks::{BlockPos, LogicState};
use redlogic_world::World;

use crate::notify;

pub fn toggle(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at_mut(pos) else {
        return;
    };
    let LogicState::Lever { on } = block.logic else {
        return;
    };
    let new_on = !on;
    block.logic = LogicState::Lever { on: new_on };
    block.visual.powered = new_on;
    block.visual.power_level = if new_on { 15 } else { 0 };
    notify::notify_neighbors(world, pos);
}
