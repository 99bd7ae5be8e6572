//! Construction-time parameters for the board and the shell.
//! Nothing here is adjustable while the program runs.

use std::time::Duration;

use crate::domain::DEFAULT_PROBABILITY;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    /// Pixel width of the board area
    pub window_width: u32,
    /// Pixel height of the board area (menu bar excluded)
    pub window_height: u32,
    /// Edge of one square cell in pixels
    pub cell_size: u32,
    /// Interval between generations while running
    pub tick_period_ms: u64,
    /// Per-cell live probability for "Random generation"
    pub random_probability: f64,
}

impl LifeConfig {
    pub const fn rows(&self) -> usize {
        (self.window_height / self.cell_size) as usize
    }

    pub const fn cols(&self) -> usize {
        (self.window_width / self.cell_size) as usize
    }

    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            window_width: 720,
            window_height: 720,
            cell_size: 20,
            tick_period_ms: 100,
            random_probability: DEFAULT_PROBABILITY,
        }
    }
}
