use std::ops::ControlFlow;
use std::time::Duration;

use crate::config::LifeConfig;
use crate::domain::{LifeEngine, Result, check_probability};

/// Upper bound on generations replayed in a single frame after a stall
const MAX_CATCH_UP_STEPS: u32 = 5;

/// Whether the periodic step trigger is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Entries of the menu bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Stop,
    Reset,
    Randomize,
    Exit,
}

impl MenuAction {
    pub fn all() -> [MenuAction; 5] {
        [
            MenuAction::Start,
            MenuAction::Stop,
            MenuAction::Reset,
            MenuAction::Randomize,
            MenuAction::Exit,
        ]
    }

    /// Label shown on the menu bar
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Start => "Start",
            MenuAction::Stop => "Stop",
            MenuAction::Reset => "Reset",
            MenuAction::Randomize => "Random generation",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Simulation is the shell-side owner of the engine.
/// It holds the Stopped/Running machine and turns frame time into generations.
pub struct Simulation {
    engine: LifeEngine,
    run_state: RunState,
    tick_period: Duration,
    since_last_step: Duration,
    random_probability: f64,
    generation: u64,
}

impl Simulation {
    /// Fails on a bad board extent or random probability before any window opens
    pub fn new(config: &LifeConfig) -> Result<Self> {
        check_probability(config.random_probability)?;
        Ok(Self {
            engine: LifeEngine::new(config.rows(), config.cols())?,
            run_state: RunState::Stopped,
            tick_period: config.tick_period(),
            since_last_step: Duration::ZERO,
            random_probability: config.random_probability,
            generation: 0,
        })
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Generations advanced since the last reset or randomize
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Arm the step trigger; no effect when already running
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.run_state = RunState::Running;
        self.since_last_step = Duration::ZERO;
        log::info!("simulation started at generation {}", self.generation);
    }

    /// Disarm the step trigger; no effect when already stopped
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_state = RunState::Stopped;
        log::info!("simulation stopped at generation {}", self.generation);
    }

    /// Kill every cell and restart the generation count
    pub fn reset(&mut self) {
        self.engine.clear();
        self.generation = 0;
        log::info!("grid reset");
    }

    /// Reseed the grid with the configured probability
    pub fn randomize(&mut self) -> Result<()> {
        self.engine.randomize(self.random_probability)?;
        self.generation = 0;
        log::info!(
            "grid randomized with p={}, population {}",
            self.random_probability,
            self.engine.population()
        );
        Ok(())
    }

    pub fn toggle(&mut self, row: i32, col: i32) -> Result<()> {
        self.engine.toggle(row, col)
    }

    pub fn paint(&mut self, row: i32, col: i32) -> Result<()> {
        self.engine.set_alive(row, col, true)
    }

    /// Dispatch a menu entry; `Break` means the shell should close
    pub fn apply(&mut self, action: MenuAction) -> Result<ControlFlow<()>> {
        match action {
            MenuAction::Start => self.start(),
            MenuAction::Stop => self.stop(),
            MenuAction::Reset => self.reset(),
            MenuAction::Randomize => self.randomize()?,
            MenuAction::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Feed elapsed frame time; returns how many generations were advanced.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }

        self.since_last_step += delta;
        let mut steps = 0;
        while self.since_last_step >= self.tick_period && steps < MAX_CATCH_UP_STEPS {
            self.engine.step();
            self.since_last_step -= self.tick_period;
            steps += 1;
        }
        if steps == MAX_CATCH_UP_STEPS {
            self.since_last_step = Duration::ZERO;
        }

        self.generation += u64::from(steps);
        steps
    }
}
