//! Piston & Sticky Piston, and Piston Motion (spec §4.11-4.12).
//!
//! Grounded in the teacher's repeater/comparator two-phase scheduling for
//! the extend/retract decision, and in Pumpkin's piston implementation
//! (`pumpkin-src-block-blocks-piston-piston.rs` in the reference pack) for
//! the shape of the push-chain walk and movability rules, since the
//! teacher's own retrieved sources did not include a piston module.

use redlogic_blocks::{Block, BlockKind, BlockPos, Direction, LogicState};
use redlogic_world::{TickPriority, World};

use crate::{notify, power};

/// Maximum movable blocks in a single extension (spec §4.12, "push limit").
const PUSH_LIMIT: usize = 12;

fn should_extend(world: &impl World, pos: BlockPos) -> bool {
    power::max_neighbor_power(world, pos) > 0 || quasi_connectivity(pos)
}

/// Stubbed hook (spec Non-goals / Glossary "QC"): always false.
fn quasi_connectivity(_pos: BlockPos) -> bool {
    false
}

pub fn on_neighbor_update(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let extended = match block.logic {
        LogicState::Piston { extended, .. } => extended,
        _ => return,
    };
    let want = should_extend(world, pos);
    if want != extended && !world.pending_tick_at(pos) {
        world.schedule_tick(pos, 2, TickPriority::Normal);
    }
}

pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let extended = match block.logic {
        LogicState::Piston { extended, .. } => extended,
        _ => return,
    };
    // Power-only re-check, deliberately not including `quasiConnectivity`
    // (spec §9 Open Question 2: moot while QC is stubbed to false, but the
    // asymmetry with `on_neighbor_update` is intentional and documented).
    let want = power::max_neighbor_power(world, pos) > 0;
    if want && !extended {
        extend(world, pos);
    } else if !want && extended {
        retract(world, pos);
    }
}

fn is_sticky(kind: BlockKind) -> bool {
    kind == BlockKind::StickyPiston
}

/// Walks `push` from `head_cell`, collecting the contiguous movable stack.
/// Returns `None` on overflow or on hitting an immovable block.
fn can_push(world: &impl World, head_cell: BlockPos, push: Direction) -> Option<Vec<BlockPos>> {
    let mut stack = Vec::new();
    let mut cur = head_cell;
    loop {
        match world.block_at(cur) {
            None => return Some(stack),
            Some(block) => {
                if block.is_immovable() {
                    return None;
                }
                stack.push(cur);
                if stack.len() >= PUSH_LIMIT {
                    return None;
                }
                cur = cur.offset(push);
            }
        }
    }
}

fn extend(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let push = block.rotation;
    let sticky = is_sticky(block.kind);
    let piston_id = block.id;
    let head_cell = pos.offset(push);

    let Some(stack) = can_push(world, head_cell, push) else {
        // PushOverflow (spec §7): extension fails, no state change.
        return;
    };

    // Move tail-to-head so every target cell is vacated before it is
    // written into (spec §4.12 "from tail to head").
    for &from in stack.iter().rev() {
        let to = from.offset(push);
        world.relocate_block(from, to);
        notify::notify_neighbors(world, from);
        notify::notify_neighbors(world, to);
    }

    let Ok(head_id) = world.create_block(head_cell, BlockKind::PistonHead, push) else {
        return;
    };
    if let Some(head) = world.block_at_mut(head_cell) {
        head.logic = LogicState::PistonHead {
            source_id: piston_id,
            sticky,
        };
    }

    if let Some(block) = world.block_mut(piston_id) {
        block.logic = LogicState::Piston {
            extended: true,
            head_id: Some(head_id),
        };
        block.visual.extended = true;
    }
    notify::notify_neighbors(world, head_cell);
}

fn retract(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    let push = block.rotation;
    let sticky = is_sticky(block.kind);
    let head_cell = pos.offset(push);

    if let Some(block) = world.block_at_mut(pos) {
        block.logic = LogicState::Piston {
            extended: false,
            head_id: None,
        };
        block.visual.extended = false;
    }
    world.remove_block(head_cell);
    notify::notify_neighbors(world, head_cell);

    if sticky {
        do_pull(world, pos, push);
    }
}

fn do_pull(world: &mut impl World, pos: BlockPos, push: Direction) {
    let pull_from = pos.offset(push).offset(push);
    let pull_to = pos.offset(push);

    let movable = matches!(world.block_at(pull_from), Some(block) if !block.is_immovable());
    if !movable {
        return;
    }
    world.relocate_block(pull_from, pull_to);
    notify::notify_neighbors(world, pull_from);
    notify::notify_neighbors(world, pull_to);
}

/// Removes a piston's orphaned head when the piston itself is deleted
/// while extended (spec §9 Open Question 1: recommended behavior, chosen
/// to preserve Invariant 4).
pub fn remove_orphan_head(world: &mut impl World, removed: &Block) {
    if let LogicState::Piston {
        extended: true,
        head_id: Some(_),
    } = removed.logic
    {
        let head_cell = removed.pos.offset(removed.rotation);
        if matches!(
            world.block_at(head_cell).map(|b| &b.logic),
            Some(LogicState::PistonHead { source_id, .. }) if *source_id == removed.id
        ) {
            world.remove_block(head_cell);
            notify::notify_neighbors(world, head_cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlogic_blocks::BlockKind;
    use redlogic_world::GridWorld;

    #[test]
    fn extends_and_pushes_a_chain() {
        let mut world = GridWorld::new(16, 1);
        world
            .create_block(BlockPos::new(0, 0), BlockKind::Piston, Direction::East)
            .unwrap();
        for x in 1..12 {
            world
                .create_block(BlockPos::new(x, 0), BlockKind::Solid, Direction::North)
                .unwrap();
        }
        extend(&mut world, BlockPos::new(0, 0));

        assert!(world.block_at(BlockPos::new(2, 0)).is_some());
        assert!(world.block_at(BlockPos::new(12, 0)).is_some());
        assert!(world.block_at(BlockPos::new(1, 0)).is_some());
        let LogicState::PistonHead { .. } = world.block_at(BlockPos::new(1, 0)).unwrap().logic
        else {
            panic!("expected a piston head at (1,0)")
        };
        let LogicState::Piston { extended, .. } = world.block_at(BlockPos::new(0, 0)).unwrap().logic
        else {
            panic!("expected piston")
        };
        assert!(extended);
    }

    #[test]
    fn push_overflow_leaves_everything_unchanged() {
        let mut world = GridWorld::new(16, 1);
        world
            .create_block(BlockPos::new(0, 0), BlockKind::Piston, Direction::East)
            .unwrap();
        for x in 1..11 {
            world
                .create_block(BlockPos::new(x, 0), BlockKind::Solid, Direction::North)
                .unwrap();
        }
        world
            .create_block(BlockPos::new(11, 0), BlockKind::Solid, Direction::North)
            .unwrap();
        let obsidian_id = world
            .create_block(BlockPos::new(12, 0), BlockKind::Solid, Direction::North)
            .unwrap();
        world.block_mut(obsidian_id).unwrap().logic = LogicState::Solid {
            variant: redlogic_blocks::SolidVariant::Obsidian,
        };

        extend(&mut world, BlockPos::new(0, 0));

        let LogicState::Piston { extended, .. } = world.block_at(BlockPos::new(0, 0)).unwrap().logic
        else {
            panic!("expected piston")
        };
        assert!(!extended);
        assert!(world.block_at(BlockPos::new(1, 0)).is_none());
    }

    #[test]
    fn sticky_retract_pulls_one_block() {
        let mut world = GridWorld::new(16, 1);
        let piston_id = world
            .create_block(BlockPos::new(0, 0), BlockKind::StickyPiston, Direction::East)
            .unwrap();
        let head_id = world
            .create_block(BlockPos::new(1, 0), BlockKind::PistonHead, Direction::East)
            .unwrap();
        world.block_mut(head_id).unwrap().logic = LogicState::PistonHead {
            source_id: piston_id,
            sticky: true,
        };
        world.block_mut(piston_id).unwrap().logic = LogicState::Piston {
            extended: true,
            head_id: Some(head_id),
        };
        world
            .create_block(BlockPos::new(2, 0), BlockKind::Solid, Direction::North)
            .unwrap();

        retract(&mut world, BlockPos::new(0, 0));

        assert!(world.block_at(BlockPos::new(1, 0)).is_some());
        assert!(world.block_at(BlockPos::new(2, 0)).is_none());
        let LogicState::Piston { extended, .. } = world.block_at(BlockPos::new(0, 0)).unwrap().logic
        else {
            panic!("expected piston")
        };
        assert!(!extended);
    }
}
