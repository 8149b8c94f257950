//! Power Query (spec §4.3, C4): "power entering cell X from direction D" is
//! answered by asking the neighbor in that direction for its output toward
//! the opposite direction. No weak/strong distinction, no re-transmission
//! through solids — both explicit non-goals (spec §1).

use redlogic_blocks::{Block, Direction, LogicState};
use redlogic_world::World;

/// `getPower(target, fromDir)` (spec §4.3).
pub fn get_power(world: &impl World, target: redlogic_blocks::BlockPos, from_dir: Direction) -> u8 {
    let src_pos = target.offset(from_dir);
    match world.block_at(src_pos) {
        Some(block) => power_output(block, from_dir.opposite()),
        None => 0,
    }
}

/// `maxNeighborPower(pos)` (spec §4.3): max over the four cardinals.
pub fn max_neighbor_power(world: &impl World, pos: redlogic_blocks::BlockPos) -> u8 {
    Direction::ALL
        .into_iter()
        .map(|dir| get_power(world, pos, dir))
        .max()
        .unwrap_or(0)
}

/// `powerOutput(dir)` per kind (spec §4.4-4.11). `to_dir` is the direction
/// from `block`'s own cell toward the querying neighbor.
pub fn power_output(block: &Block, to_dir: Direction) -> u8 {
    match block.logic {
        LogicState::Wire { power } => power,
        LogicState::Torch { lit } => {
            // attachDir == block.rotation; no back-powering the support.
            if to_dir == block.rotation {
                0
            } else if lit {
                15
            } else {
                0
            }
        }
        LogicState::Lever { on } => {
            if on {
                15
            } else {
                0
            }
        }
        LogicState::Button { pressed } => {
            if pressed {
                15
            } else {
                0
            }
        }
        LogicState::Repeater { powered, .. } => {
            if to_dir == block.rotation && powered {
                15
            } else {
                0
            }
        }
        LogicState::Comparator { output, .. } => {
            if to_dir == block.rotation {
                output
            } else {
                0
            }
        }
        LogicState::Observer { powered } => {
            if to_dir == block.rotation.opposite() && powered {
                15
            } else {
                0
            }
        }
        // Solids, piston heads, and pistons themselves never re-emit power.
        LogicState::Piston { .. } | LogicState::PistonHead { .. } | LogicState::Solid { .. } => 0,
        LogicState::PowerSource => 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlogic_blocks::{BlockKind, BlockPos};
    use redlogic_world::GridWorld;

    #[test]
    fn power_source_emits_on_all_sides() {
        let mut world = GridWorld::new(4, 4);
        world
            .create_block(BlockPos::new(1, 1), BlockKind::PowerSource, Direction::North)
            .unwrap();
        for dir in Direction::ALL {
            assert_eq!(get_power(&world, BlockPos::new(1, 1).offset(dir.opposite()), dir), 15);
        }
    }

    #[test]
    fn missing_neighbor_is_zero() {
        let world = GridWorld::new(4, 4);
        assert_eq!(get_power(&world, BlockPos::new(1, 1), Direction::North), 0);
    }
}
