//! Simulator Facade crate (spec §6, C7): the root of the workspace, tying
//! `redlogic_blocks`/`redlogic_world`/`redlogic_redstone` together behind
//! the single `Simulator` entry point an external driver (renderer, input
//! layer, save format, CLI harness) calls into.

pub mod config;
pub mod fixtures;
pub mod simulator;

pub use config::SimulatorConfig;
pub use simulator::{EditError, Simulator};

pub use redlogic_blocks::{
    Block, BlockId, BlockKind, BlockPos, ComparatorMode, Direction, LogicState, SolidVariant,
    VisualState,
};
