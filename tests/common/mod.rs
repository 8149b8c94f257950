//! Shared test helpers (mirrors the teacher's own `tests/common/mod.rs` —
//! a small set of world-advancing/assertion helpers every scenario test
//! reuses), trimmed to this engine's single execution path: there is no
//! compiled-vs-interpreted backend pair to run scenarios through twice.

#![allow(dead_code)]

use redlogic::{BlockPos, LogicState, Simulator};

pub fn tick_n(sim: &mut Simulator, n: u32) {
    for _ in 0..n {
        sim.tick();
    }
}

pub fn power_at(sim: &Simulator, pos: BlockPos) -> u8 {
    match sim.query(pos).map(|b| b.logic) {
        Some(LogicState::Wire { power }) => power,
        Some(LogicState::Comparator { output, .. }) => output,
        other => panic!("power_at({pos}) called on unexpected state: {other:?}"),
    }
}

pub fn is_lit(sim: &Simulator, pos: BlockPos) -> bool {
    match sim.query(pos).map(|b| b.logic) {
        Some(LogicState::Torch { lit }) => lit,
        other => panic!("is_lit({pos}) called on a non-torch state: {other:?}"),
    }
}
