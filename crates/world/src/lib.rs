pub mod grid;
pub mod schedule;

pub use grid::{GridWorld, World};
pub use schedule::{ScheduledTick, TickPriority};
