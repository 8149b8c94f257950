//! Button (spec §4.7). Pulse width is 20 game ticks regardless of re-press
//! attempts while already pressed.

use redlogic_blocks::{BlockPos, LogicState};
use redlogic_world::{TickPriority, World};

use crate::notify;

const PULSE_TICKS: u32 = 20;

pub fn press(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at_mut(pos) else {
        return;
    };
    let LogicState::Button { pressed } = block.logic else {
        return;
    };
    if pressed {
        return;
    }
    block.logic = LogicState::Button { pressed: true };
    block.visual.powered = true;
    block.visual.power_level = 15;
    notify::notify_neighbors(world, pos);
    world.schedule_tick(pos, PULSE_TICKS, TickPriority::Normal);
}

pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at_mut(pos) else {
        return;
    };
    if !matches!(block.logic, LogicState::Button { .. }) {
        return;
    }
    block.logic = LogicState::Button { pressed: false };
    block.visual.powered = false;
    block.visual.power_level = 0;
    notify::notify_neighbors(world, pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlogic_blocks::{BlockKind, Direction};
    use redlogic_world::GridWorld;

    #[test]
    fn press_schedules_a_release() {
        let mut world = GridWorld::new(4, 4);
        world
            .create_block(BlockPos::new(0, 0), BlockKind::Button, Direction::North)
            .unwrap();
        press(&mut world, BlockPos::new(0, 0));
        assert!(world.pending_tick_at(BlockPos::new(0, 0)));
        assert_eq!(
            world.block_at(BlockPos::new(0, 0)).unwrap().logic,
            LogicState::Button { pressed: true }
        );
    }

    #[test]
    fn repress_while_pressed_is_a_no_op() {
        let mut world = GridWorld::new(4, 4);
        world
            .create_block(BlockPos::new(0, 0), BlockKind::Button, Direction::North)
            .unwrap();
        press(&mut world, BlockPos::new(0, 0));
        press(&mut world, BlockPos::new(0, 0));
        assert_eq!(world.advance().len(), 0);
    }
}
