mod props;

pub use props::{ComparatorMode, SolidVariant};

use crate::{BlockId, BlockPos, Direction};
use serde::{Deserialize, Serialize};

/// The closed catalog of block kinds the engine understands (spec §3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum BlockKind {
    Wire,
    Torch,
    Lever,
    Button,
    Repeater,
    Comparator,
    Observer,
    Piston,
    StickyPiston,
    PistonHead,
    PowerSource,
    Solid,
}

/// The externally observable half of a block record (spec §3). The source
/// of truth for power decisions is always `LogicState`; this is kept in
/// sync with it on every change (Invariant 5).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, Hash)]
pub struct VisualState {
    pub powered: bool,
    pub power_level: u8,
    pub extended: bool,
}

/// Kind-tagged logic state (spec §4). One variant per `BlockKind`,
/// dispatched by `match` in `redlogic_redstone` rather than through
/// dynamic dispatch — see SPEC_FULL.md's "Dynamic dispatch → tagged
/// variant" note.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum LogicState {
    Wire { power: u8 },
    Torch { lit: bool },
    Lever { on: bool },
    Button { pressed: bool },
    Repeater { delay: u8, powered: bool, locked: bool },
    Comparator { mode: ComparatorMode, output: u8 },
    Observer { powered: bool },
    Piston { extended: bool, head_id: Option<BlockId> },
    PistonHead { source_id: BlockId, sticky: bool },
    PowerSource,
    Solid { variant: SolidVariant },
}

impl LogicState {
    pub fn default_for(kind: BlockKind) -> LogicState {
        match kind {
            BlockKind::Wire => LogicState::Wire { power: 0 },
            BlockKind::Torch => LogicState::Torch { lit: false },
            BlockKind::Lever => LogicState::Lever { on: false },
            BlockKind::Button => LogicState::Button { pressed: false },
            BlockKind::Repeater => LogicState::Repeater {
                delay: 1,
                powered: false,
                locked: false,
            },
            BlockKind::Comparator => LogicState::Comparator {
                mode: ComparatorMode::default(),
                output: 0,
            },
            BlockKind::Observer => LogicState::Observer { powered: false },
            BlockKind::Piston | BlockKind::StickyPiston => LogicState::Piston {
                extended: false,
                head_id: None,
            },
            // Never placed directly through `Simulator::create_block`; piston
            // extension constructs this variant itself (spec §4.12).
            BlockKind::PistonHead => LogicState::PistonHead {
                source_id: BlockId(0),
                sticky: false,
            },
            BlockKind::PowerSource => LogicState::PowerSource,
            BlockKind::Solid => LogicState::Solid {
                variant: SolidVariant::default(),
            },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            LogicState::Wire { .. } => BlockKind::Wire,
            LogicState::Torch { .. } => BlockKind::Torch,
            LogicState::Lever { .. } => BlockKind::Lever,
            LogicState::Button { .. } => BlockKind::Button,
            LogicState::Repeater { .. } => BlockKind::Repeater,
            LogicState::Comparator { .. } => BlockKind::Comparator,
            LogicState::Observer { .. } => BlockKind::Observer,
            LogicState::Piston { .. } => BlockKind::Piston,
            LogicState::PistonHead { .. } => BlockKind::PistonHead,
            LogicState::PowerSource => BlockKind::PowerSource,
            LogicState::Solid { .. } => BlockKind::Solid,
        }
    }
}

/// A single cell's full record (spec §3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Block {
    pub id: BlockId,
    pub pos: BlockPos,
    pub kind: BlockKind,
    pub rotation: Direction,
    pub visual: VisualState,
    pub logic: LogicState,
}

impl Block {
    pub fn new(id: BlockId, pos: BlockPos, kind: BlockKind, rotation: Direction) -> Block {
        Block {
            id,
            pos,
            kind,
            rotation,
            visual: VisualState::default(),
            logic: LogicState::default_for(kind),
        }
    }

    /// True for the two blocks piston motion can never push or pull
    /// through, regardless of chain length (spec §4.12).
    pub fn is_immovable(&self) -> bool {
        match self.logic {
            LogicState::Solid { variant } => variant.is_immovable(),
            LogicState::PistonHead { .. } => true,
            LogicState::Piston { extended, .. } => extended,
            _ => false,
        }
    }
}
