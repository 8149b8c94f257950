//! Headless demo harness: builds one of the canonical fixtures
//! (`redlogic::fixtures`) and runs it for a fixed number of game ticks,
//! printing the probe cell's observable state each tick — the offline
//! analogue of the teacher's `MinecraftServer::run` accepting connections.

use clap::{Parser, ValueEnum};
use redlogic::fixtures;
use redlogic::LogicState;
use tracing::info;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fixture {
    TorchClock,
    RepeaterDelay,
    ComparatorSubtract,
    PistonPushChain,
    StickyPistonPull,
    RepeaterLock,
}

#[derive(Parser, Debug)]
#[command(about = "Run a canonical redlogic circuit fixture and print its probe cell each tick")]
struct Args {
    #[arg(value_enum, default_value_t = Fixture::TorchClock)]
    fixture: Fixture,

    #[arg(short, long, default_value_t = 20)]
    ticks: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!(fixture = ?args.fixture, ticks = args.ticks, "starting fixture run");

    match args.fixture {
        Fixture::TorchClock => {
            let mut fx = fixtures::torch_clock();
            for t in 1..=args.ticks {
                fx.sim.tick();
                let LogicState::Torch { lit } = fx.sim.query(fx.torch).unwrap().logic else {
                    unreachable!()
                };
                println!("tick {t}: torch lit = {lit}");
            }
        }
        Fixture::RepeaterDelay => {
            let mut fx = fixtures::repeater_delay_chain();
            fx.sim.interact(fx.lever);
            for t in 1..=args.ticks {
                fx.sim.tick();
                let power = match fx.sim.query(fx.probe).unwrap().logic {
                    LogicState::Wire { power } => power,
                    _ => unreachable!(),
                };
                println!("tick {t}: probe power = {power}");
            }
        }
        Fixture::ComparatorSubtract => {
            let mut fx = fixtures::comparator_subtract();
            for t in 1..=args.ticks {
                fx.sim.tick();
                let output = match fx.sim.query(fx.comparator).unwrap().logic {
                    LogicState::Comparator { output, .. } => output,
                    _ => unreachable!(),
                };
                println!("tick {t}: comparator output = {output}");
            }
        }
        Fixture::PistonPushChain => {
            let mut fx = fixtures::piston_push_chain();
            fx.sim.interact(fx.lever);
            for t in 1..=args.ticks {
                fx.sim.tick();
                let extended = match fx.sim.query(fx.piston).unwrap().logic {
                    LogicState::Piston { extended, .. } => extended,
                    _ => unreachable!(),
                };
                println!("tick {t}: piston extended = {extended}");
            }
        }
        Fixture::StickyPistonPull => {
            let mut fx = fixtures::sticky_piston_pull();
            fx.sim.interact(fx.lever);
            for t in 1..=args.ticks {
                fx.sim.tick();
                let extended = match fx.sim.query(fx.piston).unwrap().logic {
                    LogicState::Piston { extended, .. } => extended,
                    _ => unreachable!(),
                };
                println!("tick {t}: piston extended = {extended}");
            }
        }
        Fixture::RepeaterLock => {
            let mut fx = fixtures::repeater_lock();
            fx.sim.interact(fx.lever_b);
            for t in 1..=args.ticks {
                fx.sim.tick();
                let (locked, powered) = match fx.sim.query(fx.repeater_a).unwrap().logic {
                    LogicState::Repeater { locked, powered, .. } => (locked, powered),
                    _ => unreachable!(),
                };
                println!("tick {t}: repeater A locked = {locked}, powered = {powered}");
            }
        }
    }
}
