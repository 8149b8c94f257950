//! Repeater (spec §4.8).

use redlogic_blocks::{BlockPos, Direction, LogicState};
use redlogic_world::{TickPriority, World};

use crate::{is_diode, notify, power};

fn is_locked(world: &impl World, pos: BlockPos, facing: Direction) -> bool {
    let left = facing.rotate_ccw();
    let right = facing.rotate();
    [left, right].into_iter().any(|side| {
        let side_pos = pos.offset(side);
        match world.block_at(side_pos) {
            Some(nb) if is_diode(nb.kind) => power::power_output(nb, side.opposite()) > 0,
            _ => false,
        }
    })
}

pub fn on_neighbor_update(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let facing = block.rotation;
    let (delay, powered) = match block.logic {
        LogicState::Repeater { delay, powered, .. } => (delay, powered),
        _ => return,
    };

    // The lock check is re-evaluated on every neighbor update (spec §4.8),
    // independent of whether a rear-input transition also fires below.
    let now_locked = is_locked(world, pos, facing);
    if let Some(block) = world.block_at_mut(pos) {
        if let LogicState::Repeater { locked, .. } = &mut block.logic {
            *locked = now_locked;
        }
    }
    if now_locked {
        return;
    }

    let rear_power = power::get_power(world, pos, facing.opposite());
    let want = rear_power > 0;
    if want != powered {
        world.schedule_tick(pos, delay as u32 * 2, TickPriority::Normal);
    }
}

pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let facing = block.rotation;
    let (powered, locked) = match block.logic {
        LogicState::Repeater { powered, locked, .. } => (powered, locked),
        _ => return,
    };
    if locked {
        return;
    }

    let rear_power = power::get_power(world, pos, facing.opposite());
    let want = rear_power > 0;
    if want == powered {
        return;
    }

    if let Some(block) = world.block_at_mut(pos) {
        if let LogicState::Repeater { powered, .. } = &mut block.logic {
            *powered = want;
        }
        block.visual.powered = want;
        block.visual.power_level = if want { 15 } else { 0 };
    }
    notify::notify_neighbors(world, pos);
}

/// `configureRepeaterDelay` (spec §6): cycles 1 -> 2 -> 3 -> 4 -> 1.
pub fn cycle_delay(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at_mut(pos) else {
        return;
    };
    if let LogicState::Repeater { delay, .. } = &mut block.logic {
        *delay = if *delay >= 4 { 1 } else { *delay + 1 };
    }
}
