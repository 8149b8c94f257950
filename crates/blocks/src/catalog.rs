//! The string-identifier boundary described in spec §6: a closed set of
//! `minecraft:<kind>`-style names external callers (a renderer, a save
//! format, a protocol) can match on, kept to exactly one function so
//! nothing else in the engine does string matching on block identity.

use crate::blocks::{Block, LogicState, SolidVariant};

/// Returns the bare identifier (without the `minecraft:` prefix) for the
/// given block's current observable state.
pub fn identifier(block: &Block) -> &'static str {
    match block.logic {
        LogicState::Wire { .. } => "redstone_dust",
        LogicState::Torch { lit } => {
            if lit {
                "redstone_torch"
            } else {
                "redstone_torch_off"
            }
        }
        LogicState::Lever { .. } => "lever",
        LogicState::Button { .. } => "button",
        LogicState::Repeater { powered, .. } => {
            if powered {
                "repeater_on"
            } else {
                "repeater"
            }
        }
        LogicState::Comparator { output, .. } => {
            if output > 0 {
                "comparator_on"
            } else {
                "comparator"
            }
        }
        LogicState::Observer { powered } => {
            if powered {
                "observer_on"
            } else {
                "observer"
            }
        }
        LogicState::Piston { extended, .. } => {
            if block.kind == crate::BlockKind::StickyPiston {
                "sticky_piston"
            } else if extended {
                "piston_inner"
            } else {
                "piston"
            }
        }
        LogicState::PistonHead { .. } => "piston_head",
        LogicState::PowerSource => "redstone_block",
        LogicState::Solid { variant } => match variant {
            SolidVariant::Stone => "stone",
            SolidVariant::Obsidian => "obsidian",
            SolidVariant::Bedrock => "bedrock",
        },
    }
}

/// Prefixes `identifier` with the `minecraft:` namespace used at the
/// external boundary (spec §6).
pub fn qualified_identifier(block: &Block) -> String {
    format!("minecraft:{}", identifier(block))
}
