mod cell;
mod engine;
mod error;
mod grid;

pub use cell::Cell;
pub use engine::{DEFAULT_PROBABILITY, LifeEngine, check_probability};
pub use error::{LifeError, Result};
pub use grid::Grid;
