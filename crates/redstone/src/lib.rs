//! Per-block-kind state machines and the Neighbor Notifier / Power Query
//! dispatch that ties them together (spec §4, C3-C6). One variant per
//! `BlockKind` is matched here rather than resolved through a dynamic
//! `dyn` dispatch, per the "Dynamic dispatch -> tagged variant" design
//! note: exhaustiveness checking catches a forgotten kind at compile time
//! and there's no indirect call in the hot propagation path.

pub mod button;
pub mod comparator;
pub mod lever;
pub mod notify;
pub mod observer;
pub mod piston;
pub mod power;
pub mod repeater;
pub mod torch;
pub mod wire;

use redlogic_blocks::{Block, BlockKind, BlockPos, LogicState};
use redlogic_world::World;

pub use notify::notify_neighbors;
pub use power::{get_power, max_neighbor_power, power_output};

pub fn is_diode(kind: BlockKind) -> bool {
    matches!(kind, BlockKind::Repeater | BlockKind::Comparator)
}

/// Invoked once by the facade right after a block is inserted (spec §3
/// Lifecycle). Kinds without placement-time behavior just self-notify,
/// matching `rotateBlock`'s own `onNeighborUpdate(self, self)` (spec §6).
pub fn on_placed(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    match block.kind {
        BlockKind::Torch => torch::schedule_reevaluation(world, pos),
        _ => on_neighbor_update(world, pos, pos),
    }
}

/// `onNeighborUpdate(pos, from)` (spec §3, §4.2): dispatched on `pos`'s
/// logic whenever a cardinal neighbor at `from` changed.
pub fn on_neighbor_update(world: &mut impl World, pos: BlockPos, from: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    match block.kind {
        BlockKind::Wire => wire::on_neighbor_update(world, pos),
        BlockKind::Torch => torch::schedule_reevaluation(world, pos),
        BlockKind::Repeater => repeater::on_neighbor_update(world, pos),
        BlockKind::Comparator => comparator::on_neighbor_update(world, pos),
        BlockKind::Observer => observer::on_neighbor_update(world, pos, from),
        BlockKind::Piston | BlockKind::StickyPiston => piston::on_neighbor_update(world, pos),
        // Levers, buttons, power sources, piston heads, and solids don't
        // react to neighbor updates at all (spec §4.6-§4.7, §4.11).
        BlockKind::Lever
        | BlockKind::Button
        | BlockKind::PistonHead
        | BlockKind::PowerSource
        | BlockKind::Solid => {}
    }
}

/// `onScheduledTick(pos, payload)` (spec §4.1 step 4). Called by the
/// facade for every entry `GridWorld::advance` hands back; `OrphanSchedule`
/// (the cell having gone empty) is handled by the caller skipping entries
/// with no block before reaching here.
pub fn on_scheduled_tick(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    match block.kind {
        BlockKind::Torch => torch::on_scheduled_tick(world, pos),
        BlockKind::Repeater => repeater::on_scheduled_tick(world, pos),
        BlockKind::Comparator => comparator::on_scheduled_tick(world, pos),
        BlockKind::Observer => observer::on_scheduled_tick(world, pos),
        BlockKind::Button => button::on_scheduled_tick(world, pos),
        BlockKind::Piston | BlockKind::StickyPiston => piston::on_scheduled_tick(world, pos),
        BlockKind::Wire
        | BlockKind::Lever
        | BlockKind::PistonHead
        | BlockKind::PowerSource
        | BlockKind::Solid => {}
    }
}

/// `interact(x, y)` (spec §6): lever toggles, button presses, everything
/// else no-ops silently (`EmptyInteract`, spec §7).
pub fn interact(world: &mut impl World, pos: BlockPos) {
    let Some(block) = world.block_at(pos) else {
        return;
    };
    match block.logic {
        LogicState::Lever { .. } => lever::toggle(world, pos),
        LogicState::Button { .. } => button::press(world, pos),
        _ => {}
    }
}

/// Called by the facade's `removeBlock` so a deleted extended piston's
/// head doesn't outlive it (spec §9 Open Question 1).
pub fn on_removed(world: &mut impl World, removed: &Block) {
    if matches!(removed.kind, BlockKind::Piston | BlockKind::StickyPiston) {
        piston::remove_orphan_head(world, removed);
    }
}
