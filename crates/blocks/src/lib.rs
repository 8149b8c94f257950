pub mod blocks;
pub mod catalog;

pub use blocks::{Block, BlockKind, ComparatorMode, LogicState, SolidVariant, VisualState};

use serde::{Deserialize, Serialize};

/// A cell coordinate on the simulation grid. The engine is strictly
/// 2D (see spec Non-goals: no vertical stacking), so there is no `z`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32) -> BlockPos {
        BlockPos { x, y }
    }

    /// The neighboring cell one step in `dir`.
    pub fn offset(self, dir: Direction) -> BlockPos {
        let (dx, dy) = dir.vector();
        BlockPos::new(self.x + dx, self.y + dy)
    }

    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Opaque, monotonically assigned handle to a block record. Never reused
/// for the lifetime of the simulator (Invariant 2).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct BlockId(pub u32);

/// One of the four cardinal directions. The engine never needs `Up`/`Down`
/// (there is no vertical axis), so unlike the teacher's six-variant
/// `BlockFace`, this type simply doesn't have them.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset vector per spec §3: N=(0,-1), E=(1,0), S=(0,1), W=(-1,0).
    pub fn vector(self) -> (i32, i32) {
        use Direction::*;
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// Clockwise neighbor: the `right` side relative to this facing.
    pub fn rotate(self) -> Direction {
        use Direction::*;
        match self {
            North => East,
            East => South,
            South => West,
            West => North,
        }
    }

    /// Counter-clockwise neighbor: the `left` side relative to this facing.
    pub fn rotate_ccw(self) -> Direction {
        use Direction::*;
        match self {
            North => West,
            West => South,
            South => East,
            East => North,
        }
    }

    pub fn as_index(self) -> u8 {
        use Direction::*;
        match self {
            North => 0,
            East => 1,
            South => 2,
            West => 3,
        }
    }

    pub fn from_index(i: u8) -> Direction {
        use Direction::*;
        match i % 4 {
            0 => North,
            1 => East,
            2 => South,
            _ => West,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_its_own_inverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn rotate_and_rotate_ccw_are_inverses() {
        for dir in Direction::ALL {
            assert_eq!(dir.rotate().rotate_ccw(), dir);
            assert_eq!(dir.rotate_ccw().rotate(), dir);
        }
    }

    #[test]
    fn four_rotations_return_to_start() {
        let mut dir = Direction::North;
        for _ in 0..4 {
            dir = dir.rotate();
        }
        assert_eq!(dir, Direction::North);
    }

    #[test]
    fn index_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_index(dir.as_index()), dir);
        }
    }

    #[test]
    fn offset_matches_vector() {
        let pos = BlockPos::new(3, 3);
        let (dx, dy) = Direction::East.vector();
        assert_eq!(pos.offset(Direction::East), BlockPos::new(3 + dx, 3 + dy));
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        assert!(BlockPos::new(0, 0).in_bounds(4, 4));
        assert!(BlockPos::new(3, 3).in_bounds(4, 4));
        assert!(!BlockPos::new(4, 0).in_bounds(4, 4));
        assert!(!BlockPos::new(0, -1).in_bounds(4, 4));
    }
}
