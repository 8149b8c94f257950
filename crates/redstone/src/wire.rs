//! Wire (spec §4.4).

use redlogic_blocks::{BlockPos, Direction, LogicState};
use redlogic_world::World;

use crate::{notify, power};

fn compute_level(world: &impl World, pos: BlockPos) -> u8 {
    let mut level = 0;
    for dir in Direction::ALL {
        let neighbor_pos = pos.offset(dir);
        let Some(neighbor) = world.block_at(neighbor_pos) else {
            continue;
        };
        let contribution = match neighbor.logic {
            // Wire-to-wire transfer attenuates by one; every other source
            // hands over its full output (spec §4.4 rationale).
            LogicState::Wire { power } => power.saturating_sub(1),
            _ => power::power_output(neighbor, dir.opposite()),
        };
        level = level.max(contribution);
    }
    level
}

pub fn on_neighbor_update(world: &mut impl World, pos: BlockPos) {
    let new_level = compute_level(world, pos);
    let changed = match world.block_at_mut(pos) {
        Some(block) => match &mut block.logic {
            LogicState::Wire { power } if *power != new_level => {
                *power = new_level;
                block.visual.power_level = new_level;
                block.visual.powered = new_level > 0;
                true
            }
            _ => false,
        },
        None => false,
    };
    if changed {
        notify::notify_neighbors(world, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlogic_blocks::{BlockKind, Direction};
    use redlogic_world::GridWorld;

    #[test]
    fn attenuates_one_step_per_wire() {
        let mut world = GridWorld::new(8, 1);
        world
            .create_block(BlockPos::new(0, 0), BlockKind::PowerSource, Direction::North)
            .unwrap();
        for x in 1..5 {
            world
                .create_block(BlockPos::new(x, 0), BlockKind::Wire, Direction::North)
                .unwrap();
        }
        for x in 1..5 {
            on_neighbor_update(&mut world, BlockPos::new(x, 0));
        }
        // Settle: a second left-to-right pass propagates the full chain.
        for x in 1..5 {
            on_neighbor_update(&mut world, BlockPos::new(x, 0));
        }
        for (i, x) in (1..5).enumerate() {
            let block = world.block_at(BlockPos::new(x, 0)).unwrap();
            let LogicState::Wire { power } = block.logic else {
                panic!("expected wire")
            };
            // Source -> first wire transfers full strength; every
            // subsequent wire-to-wire hop attenuates by one (spec §4.4).
            assert_eq!(power, 15 - i as u8);
        }
    }
}
