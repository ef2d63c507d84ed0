//! Frame timing
//!
//! Steps are driven by display refresh, not a fixed timestep: each step
//! receives the wall-clock time since the previous frame callback.

use super::state::GameState;
use super::tick::{TickInput, tick};

/// Tracks frame callback timestamps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first frame and any backwards
    /// jump in the timestamp yield zero.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

/// Run one frame's simulation: measure elapsed time and step the game.
/// Returns the elapsed seconds handed to the step.
pub fn advance_frame(state: &mut GameState, clock: &mut FrameClock, input: &TickInput, now_ms: f64) -> f32 {
    let dt = clock.delta(now_ms);
    tick(state, input, dt);
    dt
}
