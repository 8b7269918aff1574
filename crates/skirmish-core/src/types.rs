//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking. Advanced once per tick by the externally
/// supplied elapsed time, so the engine follows whatever clock drives it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
