mod brush;
mod simulation;

pub use brush::Brush;
pub use simulation::{MenuAction, RunState, Simulation};
