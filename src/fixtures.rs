//! Canonical circuit constructions, shared between the CLI harness
//! (`main.rs`) and the scenario tests (`tests/components.rs`) so both
//! exercise the exact same topology.

use redlogic_blocks::{BlockKind, BlockPos, Direction, SolidVariant};

use crate::{Simulator, SimulatorConfig};

fn rotate_to(sim: &mut Simulator, pos: BlockPos, target: Direction) {
    for _ in 0..target.as_index() {
        sim.rotate_block(pos);
    }
}

/// A single-torch self-feedback ring: the torch's own output loops back,
/// through two wires, into its own support cell. Oscillates with a 4-tick
/// period (state changes every 2 ticks) — see DESIGN.md for why this
/// topology stands in for spec.md's literal two-torch "attached to stone"
/// description, which cannot actually oscillate in this engine.
pub struct TorchClock {
    pub sim: Simulator,
    pub torch: BlockPos,
}

pub fn torch_clock() -> TorchClock {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let torch = BlockPos::new(1, 0);
    let support = BlockPos::new(1, 1);
    let wire1 = BlockPos::new(2, 0);
    let wire2 = BlockPos::new(2, 1);

    sim.create_block(BlockKind::Torch, torch).unwrap();
    rotate_to(&mut sim, torch, Direction::South);
    sim.create_block(BlockKind::Wire, support).unwrap();
    sim.create_block(BlockKind::Wire, wire1).unwrap();
    sim.create_block(BlockKind::Wire, wire2).unwrap();

    TorchClock { sim, torch }
}

/// `lever(0,0) -> wire(1,0) -> repeater(2,0, east, delay=3) -> wire(3,0)`
/// (spec §8 S2), to observe the probe wire's power level transition
/// exactly 6 game ticks after the lever is toggled on.
pub struct RepeaterDelayChain {
    pub sim: Simulator,
    pub lever: BlockPos,
    pub probe: BlockPos,
}

pub fn repeater_delay_chain() -> RepeaterDelayChain {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let lever = BlockPos::new(0, 0);
    let wire_in = BlockPos::new(1, 0);
    let repeater = BlockPos::new(2, 0);
    let probe = BlockPos::new(3, 0);

    sim.create_block(BlockKind::Lever, lever).unwrap();
    sim.create_block(BlockKind::Wire, wire_in).unwrap();
    sim.create_block(BlockKind::Repeater, repeater).unwrap();
    rotate_to(&mut sim, repeater, Direction::East);
    sim.configure_repeater_delay(repeater);
    sim.configure_repeater_delay(repeater);
    sim.create_block(BlockKind::Wire, probe).unwrap();

    RepeaterDelayChain { sim, lever, probe }
}

/// A comparator in Subtract mode with a rear input of 15 (a `PowerSource`)
/// and a side input of 4, built from an 11-hop wire attenuation chain off
/// a second source (spec §8 S3 reads "fed by a repeater chain", but a
/// repeater's output is binary — 0 or 15 — and cannot produce an
/// intermediate level on its own; an attenuating wire run is the only way
/// to land on exactly 4). Expected output: 15 - 4 = 11.
pub struct ComparatorSubtract {
    pub sim: Simulator,
    pub comparator: BlockPos,
}

pub fn comparator_subtract() -> ComparatorSubtract {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let comparator = BlockPos::new(5, 2);
    let rear_source = BlockPos::new(4, 2);
    let side_source = BlockPos::new(5, 15);

    // Build the side chain from its source outward so each wire sees an
    // already-settled neighbor and needs no extra settling pass.
    sim.create_block(BlockKind::PowerSource, side_source).unwrap();
    for y in (3..=14).rev() {
        sim.create_block(BlockKind::Wire, BlockPos::new(5, y)).unwrap();
    }
    sim.create_block(BlockKind::PowerSource, rear_source).unwrap();

    sim.create_block(BlockKind::Comparator, comparator).unwrap();
    rotate_to(&mut sim, comparator, Direction::East);
    sim.configure_comparator_mode(comparator);

    ComparatorSubtract { sim, comparator }
}

/// Piston at (0,0) facing east, 11 stones at (1..=11, 0), empty at
/// (12,0), lever at (0,1) (spec §8 S4).
pub struct PistonPushChain {
    pub sim: Simulator,
    pub piston: BlockPos,
    pub lever: BlockPos,
}

pub fn piston_push_chain() -> PistonPushChain {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let piston = BlockPos::new(0, 0);
    let lever = BlockPos::new(0, 1);

    sim.create_block(BlockKind::Piston, piston).unwrap();
    rotate_to(&mut sim, piston, Direction::East);
    sim.create_block(BlockKind::Lever, lever).unwrap();
    for x in 1..=11 {
        sim.create_block(BlockKind::Solid, BlockPos::new(x, 0)).unwrap();
    }

    PistonPushChain { sim, piston, lever }
}

/// The S4 layout with an obsidian at (12,0): the push can never reach
/// past it, so the piston stays retracted (spec §8 S5).
pub struct PistonPushOverflow {
    pub sim: Simulator,
    pub piston: BlockPos,
    pub lever: BlockPos,
}

pub fn piston_push_overflow() -> PistonPushOverflow {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let piston = BlockPos::new(0, 0);
    let lever = BlockPos::new(0, 1);

    sim.create_block(BlockKind::Piston, piston).unwrap();
    rotate_to(&mut sim, piston, Direction::East);
    sim.create_block(BlockKind::Lever, lever).unwrap();
    for x in 1..=11 {
        sim.create_block(BlockKind::Solid, BlockPos::new(x, 0)).unwrap();
    }
    let obsidian_pos = BlockPos::new(12, 0);
    let obsidian_id = sim.create_block(BlockKind::Solid, obsidian_pos).unwrap();
    sim.set_solid_variant(obsidian_id, SolidVariant::Obsidian);

    PistonPushOverflow { sim, piston, lever }
}

/// A sticky piston with a lever on its flank and a lone stone two cells
/// ahead, driven through a full extend-then-retract cycle so the retract
/// side pulls the stone in behind the head (spec §8 S6).
pub struct StickyPistonPull {
    pub sim: Simulator,
    pub piston: BlockPos,
    pub lever: BlockPos,
    pub head_cell: BlockPos,
    pub stone: BlockPos,
}

pub fn sticky_piston_pull() -> StickyPistonPull {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let piston = BlockPos::new(0, 0);
    let lever = BlockPos::new(0, 1);
    let stone = BlockPos::new(2, 0);

    sim.create_block(BlockKind::StickyPiston, piston).unwrap();
    rotate_to(&mut sim, piston, Direction::East);
    sim.create_block(BlockKind::Lever, lever).unwrap();
    sim.create_block(BlockKind::Solid, stone).unwrap();

    StickyPistonPull {
        sim,
        piston,
        lever,
        head_cell: BlockPos::new(1, 0),
        stone,
    }
}

/// Repeater B feeds into repeater A's left (north) side. Once B is
/// powered and outputting, A locks and stops reacting to its own rear
/// input (spec §8 S7; B is built facing toward A rather than literally
/// "facing north" as S7's prose has it, since a repeater facing away
/// from A could never power it — see DESIGN.md).
pub struct RepeaterLock {
    pub sim: Simulator,
    pub repeater_a: BlockPos,
    pub repeater_b: BlockPos,
    pub lever_a: BlockPos,
    pub lever_b: BlockPos,
}

pub fn repeater_lock() -> RepeaterLock {
    let mut sim = Simulator::new(SimulatorConfig::default());
    let repeater_b = BlockPos::new(1, 1);
    let repeater_a = BlockPos::new(1, 2);
    let lever_b = BlockPos::new(1, 0);
    let lever_a = BlockPos::new(0, 2);

    sim.create_block(BlockKind::Repeater, repeater_b).unwrap();
    rotate_to(&mut sim, repeater_b, Direction::South);
    sim.create_block(BlockKind::Repeater, repeater_a).unwrap();
    rotate_to(&mut sim, repeater_a, Direction::East);
    sim.create_block(BlockKind::Lever, lever_b).unwrap();
    sim.create_block(BlockKind::Lever, lever_a).unwrap();

    RepeaterLock {
        sim,
        repeater_a,
        repeater_b,
        lever_a,
        lever_b,
    }
}
