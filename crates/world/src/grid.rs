//! The spatial entity/block model (spec §3, C1).
//!
//! The teacher keeps a chunked 3D world and finds a block's entity by a
//! linear scan over `get_block_entity(x, y, z)` (see DESIGN.md). Spec §9
//! calls that out as "a performance foot-gun for non-trivial grids" and
//! recommends a dense 2D array of `Option<BlockId>` instead — that's what
//! `GridWorld` is.

use redlogic_blocks::{Block, BlockId, BlockKind, BlockPos, Direction};
use thiserror::Error;

use crate::schedule::{ScheduledTick, TickPriority, TickQueue};

/// Failure modes for edits that spec §7 treats as real, typed errors
/// rather than silent no-ops (`OutOfBounds`, `Occupied`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("position is outside the grid bounds")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
}

/// Dense grid + arena entity store (spec §3 C1), plus the tick clock and
/// queue (C2) that the engine's single `tick()` call advances together.
pub struct GridWorld {
    width: i32,
    height: i32,
    cells: Vec<Option<BlockId>>,
    entities: Vec<Option<Block>>,
    clock: u64,
    queue: TickQueue,
}

/// Shared read/write surface other crates dispatch logic against. One real
/// implementor (`GridWorld`) today; kept as a trait, the way the teacher's
/// `World` abstracts over its real and test worlds, so `redlogic_redstone`
/// never depends on the concrete grid/arena layout.
pub trait World {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn in_bounds(&self, pos: BlockPos) -> bool {
        pos.in_bounds(self.width(), self.height())
    }

    fn id_at(&self, pos: BlockPos) -> Option<BlockId>;
    fn block(&self, id: BlockId) -> Option<&Block>;
    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block>;

    fn block_at(&self, pos: BlockPos) -> Option<&Block> {
        self.id_at(pos).and_then(|id| self.block(id))
    }

    fn block_at_mut(&mut self, pos: BlockPos) -> Option<&mut Block> {
        let id = self.id_at(pos)?;
        self.block_mut(id)
    }

    /// Allocates a new block record at `pos`. Does not invoke `onPlaced`;
    /// that's the facade's job (spec §3 Lifecycle).
    fn create_block(
        &mut self,
        pos: BlockPos,
        kind: BlockKind,
        rotation: Direction,
    ) -> Result<BlockId, GridError>;

    /// Deletes the record at `pos` and returns it, if any.
    fn remove_block(&mut self, pos: BlockPos) -> Option<Block>;

    /// Moves the block at `from` to `to`, updating only its `pos` field —
    /// id and logic state are carried unchanged (spec §4.12 piston motion:
    /// "updating only its pos field"). Fails if `from` is empty, `to` is
    /// out of bounds, or `to` is already occupied.
    fn relocate_block(&mut self, from: BlockPos, to: BlockPos) -> bool;

    fn schedule_tick(&mut self, pos: BlockPos, delay: u32, priority: TickPriority);
    fn pending_tick_at(&self, pos: BlockPos) -> bool;

    fn current_tick(&self) -> u64;
}

impl GridWorld {
    pub fn new(width: i32, height: i32) -> GridWorld {
        GridWorld {
            width,
            height,
            cells: vec![None; (width * height) as usize],
            entities: Vec::new(),
            clock: 0,
            queue: TickQueue::new(),
        }
    }

    fn index(&self, pos: BlockPos) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    /// Advances the clock by one game tick and returns every scheduled
    /// entry now due, in insertion order (spec §4.1 steps 1-3). The caller
    /// (the `Simulator` facade, which owns `redlogic_redstone`'s dispatch
    /// table) is responsible for step 4 — looking up the block and
    /// invoking `onScheduledTick`, silently dropping entries whose cell
    /// has gone empty (spec Invariant 6 / `OrphanSchedule`).
    pub fn advance(&mut self) -> Vec<ScheduledTick> {
        self.clock += 1;
        self.queue.drain_due(self.clock)
    }
}

impl World for GridWorld {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn id_at(&self, pos: BlockPos) -> Option<BlockId> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    fn block(&self, id: BlockId) -> Option<&Block> {
        self.entities.get(id.0 as usize)?.as_ref()
    }

    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.entities.get_mut(id.0 as usize)?.as_mut()
    }

    fn create_block(
        &mut self,
        pos: BlockPos,
        kind: BlockKind,
        rotation: Direction,
    ) -> Result<BlockId, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds);
        }
        let idx = self.index(pos);
        if self.cells[idx].is_some() {
            return Err(GridError::Occupied);
        }
        let id = BlockId(self.entities.len() as u32);
        self.entities.push(Some(Block::new(id, pos, kind, rotation)));
        self.cells[idx] = Some(id);
        Ok(id)
    }

    fn remove_block(&mut self, pos: BlockPos) -> Option<Block> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        let id = self.cells[idx].take()?;
        self.entities[id.0 as usize].take()
    }

    fn relocate_block(&mut self, from: BlockPos, to: BlockPos) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return false;
        }
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        if self.cells[to_idx].is_some() {
            return false;
        }
        let Some(id) = self.cells[from_idx].take() else {
            return false;
        };
        self.cells[to_idx] = Some(id);
        if let Some(block) = self.entities[id.0 as usize].as_mut() {
            block.pos = to;
        }
        true
    }

    fn schedule_tick(&mut self, pos: BlockPos, delay: u32, priority: TickPriority) {
        self.queue.schedule(pos, self.clock, delay, priority);
    }

    fn pending_tick_at(&self, pos: BlockPos) -> bool {
        self.queue.pending_at(pos)
    }

    fn current_tick(&self) -> u64 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redlogic_blocks::BlockKind;

    #[test]
    fn create_then_remove_frees_the_cell_but_not_the_id() {
        let mut world = GridWorld::new(4, 4);
        let pos = BlockPos::new(1, 1);
        let id = world
            .create_block(pos, BlockKind::Wire, Direction::North)
            .unwrap();
        assert_eq!(world.id_at(pos), Some(id));

        let removed = world.remove_block(pos).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(world.id_at(pos), None);

        let id2 = world
            .create_block(pos, BlockKind::Wire, Direction::North)
            .unwrap();
        assert_ne!(id, id2, "ids must never be reused");
    }

    #[test]
    fn create_on_occupied_cell_fails() {
        let mut world = GridWorld::new(4, 4);
        let pos = BlockPos::new(0, 0);
        world
            .create_block(pos, BlockKind::Solid, Direction::North)
            .unwrap();
        assert_eq!(
            world.create_block(pos, BlockKind::Wire, Direction::North),
            Err(GridError::Occupied)
        );
    }

    #[test]
    fn create_out_of_bounds_fails() {
        let mut world = GridWorld::new(4, 4);
        assert_eq!(
            world.create_block(BlockPos::new(-1, 0), BlockKind::Wire, Direction::North),
            Err(GridError::OutOfBounds)
        );
        assert_eq!(
            world.create_block(BlockPos::new(4, 0), BlockKind::Wire, Direction::North),
            Err(GridError::OutOfBounds)
        );
    }

    #[test]
    fn advance_drains_only_due_entries() {
        let mut world = GridWorld::new(4, 4);
        world.schedule_tick(BlockPos::new(0, 0), 2, TickPriority::Normal);
        assert!(world.advance().is_empty());
        let due = world.advance();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].pos, BlockPos::new(0, 0));
    }
}
