//! Comparator (spec §4.9).

use redlogic_blocks::{BlockPos, ComparatorMode, LogicState};
use redlogic_world::{TickPriority, World};

use crate::{notify, power};

pub fn on_neighbor_update(world: &mut impl World, pos: BlockPos) {
    if world.block_at(pos).is_none() {
        return;
    }
    // Spec §4.9: "on any onNeighborUpdate, schedule a tick with delay 0" —
    // unlike the torch/repeater/piston dispatch, there is no
    // not-already-pending guard here; stacked entries are expected and
    // each simply recomputes the output at fire time.
    world.schedule_tick(pos, 0, TickPriority::Normal);
}

pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let facing = block.rotation;
    let (mode, output) = match block.logic {
        LogicState::Comparator { mode, output } => (mode, output),
        _ => return,
    };

    let rear = power::get_power(world, pos, facing.opposite());
    let side = power::get_power(world, pos, facing.rotate())
        .max(power::get_power(world, pos, facing.rotate_ccw()));
    let new_output = match mode {
        ComparatorMode::Compare => {
            if rear >= side {
                rear
            } else {
                0
            }
        }
        ComparatorMode::Subtract => rear.saturating_sub(side),
    };

    if new_output == output {
        return;
    }
    if let Some(block) = world.block_at_mut(pos) {
        if let LogicState::Comparator { output, .. } = &mut block.logic {
            *output = new_output;
        }
        block.visual.powered = new_output > 0;
        block.visual.power_level = new_output;
    }
    notify::notify_neighbors(world, pos);
}

/// `configureComparatorMode` (spec §6): toggles Compare/Subtract.
pub fn toggle_mode(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at_mut(pos) else {
        return;
    };
    if let LogicState::Comparator { mode, .. } = &mut block.logic {
        *mode = mode.toggle();
    }
}
