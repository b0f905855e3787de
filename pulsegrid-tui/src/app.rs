// Application state for the TUI: the backend plus a tick counter.

use crate::backend::GridBackend;

/// The grid is laid out row-major at a fixed width; the core itself has no
/// notion of 2D layout.
pub const GRID_WIDTH: usize = 128;

pub struct App<B: GridBackend> {
    pub backend: B,
    pub tick: u64,
    pub running: bool,
}

impl<B: GridBackend> App<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tick: 0,
            running: false,
        }
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Advance simulation by one tick.
    pub fn step(&mut self) {
        self.backend.step();
        self.tick = self.tick.saturating_add(1);
    }

    /// Grid height implied by the fixed width.
    pub fn rows(&self) -> usize {
        self.backend.neurons().div_ceil(GRID_WIDTH)
    }
}
