//! Torch (spec §4.5). `rotation` holds the attachment direction.

use redlogic_blocks::{BlockPos, LogicState};
use redlogic_world::{TickPriority, World};

use crate::{notify, power};

/// Shared by `onPlaced` and `onNeighborUpdate`: both just schedule a
/// reevaluation two game ticks out, guarded against piling up duplicate
/// entries the way the torch dispatch in the teacher's `redstone::update`
/// checks `pending_tick_at` before scheduling.
pub fn schedule_reevaluation(world: &mut impl World, pos: BlockPos) {
    if !world.pending_tick_at(pos) {
        world.schedule_tick(pos, 2, TickPriority::Normal);
    }
}

pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let attach_dir = block.rotation;
    let lit = match block.logic {
        LogicState::Torch { lit } => lit,
        _ => return,
    };
    let input_power = power::get_power(world, pos, attach_dir);
    let should_be_off = input_power > 0;

    // Extinguish when lit and should be off; ignite when off and should
    // be lit. Any other combination is already settled.
    if lit != should_be_off {
        return;
    }

    let new_lit = !lit;
    if let Some(block) = world.block_at_mut(pos) {
        block.logic = LogicState::Torch { lit: new_lit };
        block.visual.powered = new_lit;
        block.visual.power_level = if new_lit { 15 } else { 0 };
    }
    notify::notify_neighbors(world, pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlogic_blocks::{BlockKind, BlockPos, Direction};
    use redlogic_world::GridWorld;

    #[test]
    fn ignites_when_unpowered() {
        let mut world = GridWorld::new(4, 4);
        world
            .create_block(BlockPos::new(1, 1), BlockKind::Solid, Direction::North)
            .unwrap();
        world
            .create_block(BlockPos::new(1, 0), BlockKind::Torch, Direction::South)
            .unwrap();
        on_scheduled_tick(&mut world, BlockPos::new(1, 0));
        let block = world.block_at(BlockPos::new(1, 0)).unwrap();
        assert_eq!(block.logic, LogicState::Torch { lit: true });
    }

    #[test]
    fn extinguishes_when_support_is_powered() {
        let mut world = GridWorld::new(4, 4);
        world
            .create_block(BlockPos::new(1, 1), BlockKind::PowerSource, Direction::North)
            .unwrap();
        let id = world
            .create_block(BlockPos::new(1, 0), BlockKind::Torch, Direction::South)
            .unwrap();
        world.block_mut(id).unwrap().logic = LogicState::Torch { lit: true };
        on_scheduled_tick(&mut world, BlockPos::new(1, 0));
        let block = world.block_at(BlockPos::new(1, 0)).unwrap();
        assert_eq!(block.logic, LogicState::Torch { lit: false });
    }
}
