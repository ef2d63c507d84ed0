//! Autopilot
//!
//! Produces the key input a player would hold to fly at the current target
//! waypoint. Drives the native demo and the playthrough tests.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Boost while further than this many connection radii from the target
const BOOST_RADII: f32 = 4.0;

/// Input for the next step (no keys outside of PLAYING)
pub fn steer(state: &GameState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput::default();
    }
    let Some(target) = state.level.target() else {
        return TickInput::default();
    };

    let delta = target.pos - state.ship.pos;
    // Dead zone keeps an axis from jittering once it's lined up
    let slack = state.tuning.ship.base_speed * 0.5;

    TickInput {
        up: delta.y < -slack,
        down: delta.y > slack,
        left: delta.x < -slack,
        right: delta.x > slack,
        boost: delta.length() > state.tuning.connection_radius * BOOST_RADII,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::start_game;
    use glam::Vec2;

    #[test]
    fn test_idle_outside_playing() {
        let state = GameState::default();
        assert_eq!(steer(&state), TickInput::default());
    }

    #[test]
    fn test_heads_for_target() {
        let mut state = GameState::default();
        start_game(&mut state);
        // Aries starts at (160, 300), up and left of the start point
        let input = steer(&state);
        assert!(input.up && input.left);
        assert!(!input.down && !input.right);
        assert!(input.boost);

        state.ship.pos = Vec2::new(161.0, 320.0);
        let input = steer(&state);
        assert!(input.up);
        assert!(!input.left && !input.right);
        assert!(!input.boost);
    }
}
