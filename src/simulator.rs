//! Simulator Facade (spec §4 dataflow, §6 Engine API, C7).
//!
//! An external edit calls one of these methods, which mutates the grid
//! (`redlogic_world`) and invokes `on_placed`/`on_neighbor_update` on the
//! affected block's logic (`redlogic_redstone`). `tick()` advances the
//! clock by one and drains all due scheduler entries.

use redlogic_blocks::{Block, BlockId, BlockKind, BlockPos, Direction, LogicState};
use redlogic_world::{GridError, GridWorld, World};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SimulatorConfig;

/// Facade-level edit failures (spec §7): the two conditions with a real
/// caller-facing failure mode. `EmptyInteract` and `OrphanSchedule` are
/// silent no-ops per spec and never reach this type; `PushOverflow` is an
/// internal piston outcome, not a caller-facing edit failure (there's no
/// caller awaiting a `Result` for an autonomously scheduled piston tick).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("position is outside the grid bounds")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
}

impl From<GridError> for EditError {
    fn from(err: GridError) -> EditError {
        match err {
            GridError::OutOfBounds => EditError::OutOfBounds,
            GridError::Occupied => EditError::Occupied,
        }
    }
}

/// The circuit engine (spec §2 C7). Owns the grid/entity store and tick
/// clock; all block logic dispatch lives in `redlogic_redstone` and is
/// driven from here. No interior mutability and no locks — a multithreaded
/// host must serialize its own access (spec §5).
pub struct Simulator {
    world: GridWorld,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Simulator {
        debug!(
            width = config.width,
            height = config.height,
            "constructing simulator grid"
        );
        Simulator {
            world: GridWorld::new(config.width, config.height),
        }
    }

    /// `createBlock(kind, x, y)` (spec §6). Placed with rotation North
    /// (index 0); the caller rotates afterward if a different facing is
    /// needed (`rotateBlock`).
    pub fn create_block(&mut self, kind: BlockKind, pos: BlockPos) -> Result<BlockId, EditError> {
        let id = self.world.create_block(pos, kind, Direction::North)?;
        redlogic_redstone::on_placed(&mut self.world, pos);
        Ok(id)
    }

    /// `removeBlock(x, y)` (spec §6): deletes the record immediately and
    /// fires one neighbor notification on the vacated cell. An extended
    /// piston's orphaned head is cleaned up first (spec §9 Open Question 1).
    pub fn remove_block(&mut self, pos: BlockPos) {
        let Some(removed) = self.world.remove_block(pos) else {
            return;
        };
        redlogic_redstone::on_removed(&mut self.world, &removed);
        redlogic_redstone::notify_neighbors(&mut self.world, pos);
    }

    /// `rotateBlock(x, y)` (spec §6): `rotation = (rotation+1) mod 4`,
    /// no-op for extended pistons (rotation is forbidden while extended —
    /// the engine assumes this invariant is enforced by the editor, spec
    /// §4.11, but the facade still guards it defensively at its own
    /// boundary since this is the edit entry point itself).
    pub fn rotate_block(&mut self, pos: BlockPos) {
        let Some(block) = self.world.block_at(pos) else {
            warn!(%pos, "rotateBlock on an empty cell");
            return;
        };
        if matches!(block.logic, LogicState::Piston { extended: true, .. }) {
            return;
        }
        let next = Direction::from_index(block.rotation.as_index() + 1);
        if let Some(block) = self.world.block_at_mut(pos) {
            block.rotation = next;
        }
        redlogic_redstone::on_neighbor_update(&mut self.world, pos, pos);
        redlogic_redstone::notify_neighbors(&mut self.world, pos);
    }

    /// `interact(x, y)` (spec §6): lever toggles, button presses, anything
    /// else is `EmptyInteract` — a silent no-op (spec §7).
    pub fn interact(&mut self, pos: BlockPos) {
        redlogic_redstone::interact(&mut self.world, pos);
    }

    /// `configureRepeaterDelay(x, y)` (spec §6): cycles 1 -> 2 -> 3 -> 4 -> 1.
    pub fn configure_repeater_delay(&mut self, pos: BlockPos) {
        match self.world.block_at(pos).map(|b| b.kind) {
            Some(BlockKind::Repeater) => redlogic_redstone::repeater::cycle_delay(&mut self.world, pos),
            Some(_) => warn!(%pos, "configureRepeaterDelay on a block that is not a repeater"),
            None => {}
        }
    }

    /// `configureComparatorMode(x, y)` (spec §6): toggles Compare/Subtract.
    pub fn configure_comparator_mode(&mut self, pos: BlockPos) {
        match self.world.block_at(pos).map(|b| b.kind) {
            Some(BlockKind::Comparator) => {
                redlogic_redstone::comparator::toggle_mode(&mut self.world, pos)
            }
            Some(_) => warn!(%pos, "configureComparatorMode on a block that is not a comparator"),
            None => {}
        }
    }

    /// `tick()` (spec §4.1, §6): advances the clock by one and dispatches
    /// `onScheduledTick` for every entry due, in the order
    /// `GridWorld::advance` returns them. Entries whose cell has gone
    /// empty are silently dropped (`OrphanSchedule`, spec Invariant 6) by
    /// `on_scheduled_tick` itself, which no-ops on a missing block.
    pub fn tick(&mut self) {
        let due = self.world.advance();
        for entry in due {
            redlogic_redstone::on_scheduled_tick(&mut self.world, entry.pos);
        }
    }

    /// `query(x, y)` (spec §6): read-only snapshot of the block record.
    pub fn query(&self, pos: BlockPos) -> Option<Block> {
        self.world.block_at(pos).copied()
    }

    /// `queryPower(x, y)` (spec §6): `maxNeighborPower` into that cell.
    pub fn query_power(&self, pos: BlockPos) -> u8 {
        redlogic_redstone::max_neighbor_power(&self.world, pos)
    }

    pub fn width(&self) -> i32 {
        self.world.width()
    }

    pub fn height(&self) -> i32 {
        self.world.height()
    }

    pub fn current_tick(&self) -> u64 {
        self.world.current_tick()
    }

    /// Overwrites a placed solid's variant. Not part of the public Engine
    /// API (spec §6's `createBlock` takes no variant argument) — used only
    /// to build the obsidian/bedrock fixtures §8's scenarios need, since
    /// there is no other way to place anything but the default `Stone`.
    pub(crate) fn set_solid_variant(&mut self, id: BlockId, variant: redlogic_blocks::SolidVariant) {
        if let Some(block) = self.world.block_mut(id) {
            if let LogicState::Solid { variant: slot } = &mut block.logic {
                *slot = variant;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_query_roundtrips_kind_and_position() {
        let mut sim = Simulator::new(SimulatorConfig::default());
        let pos = BlockPos::new(2, 2);
        sim.create_block(BlockKind::Lever, pos).unwrap();
        let block = sim.query(pos).unwrap();
        assert_eq!(block.kind, BlockKind::Lever);
        assert_eq!(block.pos, pos);
    }

    #[test]
    fn create_on_occupied_cell_is_an_error() {
        let mut sim = Simulator::new(SimulatorConfig::default());
        let pos = BlockPos::new(0, 0);
        sim.create_block(BlockKind::Solid, pos).unwrap();
        assert_eq!(
            sim.create_block(BlockKind::Wire, pos),
            Err(EditError::Occupied)
        );
    }

    #[test]
    fn lever_toggle_powers_an_adjacent_wire_within_one_tick() {
        let mut sim = Simulator::new(SimulatorConfig::default());
        let lever_pos = BlockPos::new(0, 0);
        let wire_pos = BlockPos::new(1, 0);
        sim.create_block(BlockKind::Lever, lever_pos).unwrap();
        sim.create_block(BlockKind::Wire, wire_pos).unwrap();

        sim.interact(lever_pos);
        let block = sim.query(wire_pos).unwrap();
        assert_eq!(block.logic, LogicState::Wire { power: 15 });
    }

    #[test]
    fn remove_extended_piston_cleans_up_its_head() {
        let mut sim = Simulator::new(SimulatorConfig::default());
        let piston_pos = BlockPos::new(0, 0);
        let piston_id = sim.create_block(BlockKind::Piston, piston_pos).unwrap();
        let head_pos = piston_pos.offset(Direction::North);
        let head_id = sim.create_block(BlockKind::PistonHead, head_pos).unwrap();

        // Force the piston into an already-extended state referencing the
        // head, bypassing the 2-tick extension delay to isolate removal.
        let piston = sim.world.block_mut(piston_id).unwrap();
        piston.logic = LogicState::Piston {
            extended: true,
            head_id: Some(head_id),
        };
        let head = sim.world.block_mut(head_id).unwrap();
        head.logic = LogicState::PistonHead {
            source_id: piston_id,
            sticky: false,
        };

        sim.remove_block(piston_pos);
        assert!(sim.query(head_pos).is_none(), "orphaned head must be removed");
    }
}
