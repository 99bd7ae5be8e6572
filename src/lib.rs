// Domain layer - grid, rule and the engine contract
pub mod domain;

// Application layer - run state, timing and pointer gestures
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeEngine, LifeError};
pub use application::{Brush, MenuAction, RunState, Simulation};
pub use config::LifeConfig;
