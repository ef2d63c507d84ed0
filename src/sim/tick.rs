//! Simulation step
//!
//! One call to [`tick`] per displayed frame. Commands are handled first;
//! countdown, ship movement and waypoint connection only run while playing.

use glam::Vec2;

use super::connect::{Connection, check_connection};
use super::state::{GameEvent, GamePhase, GameState, Thrust};

/// Input snapshot for a single step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held directions
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Held modifiers (boost wins if both are held)
    pub boost: bool,
    pub brake: bool,
    /// Start / restart (one-shot)
    pub confirm: bool,
    /// Complete the current level without flying it (debug, one-shot)
    pub skip_level: bool,
}

impl TickInput {
    /// Raw direction with components in {-1, 0, 1} (y grows downward).
    ///
    /// Opposite keys on one axis resolve to the positive direction:
    /// down beats up, right beats left.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn thrust(&self) -> Thrust {
        Thrust::from_modifiers(self.boost, self.brake)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    if positive {
        1.0
    } else if negative {
        -1.0
    } else {
        0.0
    }
}

/// Advance the game by one step of `dt` real seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.confirm {
        match state.phase {
            GamePhase::Start => {
                start_game(state);
                return;
            }
            GamePhase::Fail | GamePhase::Win => {
                restart(state);
                return;
            }
            GamePhase::Playing => {}
        }
    }

    // Only reachable while playing
    match state.phase {
        GamePhase::Start | GamePhase::Fail | GamePhase::Win => return,
        GamePhase::Playing => {}
    }

    // Debug: skip the rest of the level
    if input.skip_level {
        complete_level(state);
        return;
    }

    state.steps += 1;

    // Countdown first; an expiring step moves nothing
    state.level.time_remaining -= dt.max(0.0);
    if state.level.time_remaining <= 0.0 {
        fail(state);
        return;
    }

    let step_scale = state.tuning.movement.step_scale(dt);
    state
        .ship
        .integrate(input.direction(), input.thrust(), &state.tuning, step_scale);

    let connection = check_connection(state.ship.pos, &mut state.level, state.tuning.connection_radius);
    if let Connection::Connected { index, .. } = connection {
        let level = state.level.level_index;
        log::debug!("Connected waypoint {} of level {}", index + 1, level + 1);
        state.push_event(GameEvent::WaypointConnected { level, index });
    }
    if connection.completes_level() {
        complete_level(state);
    }
}

/// START -> PLAYING on level 0
pub fn start_game(state: &mut GameState) {
    log::info!("Starting game");
    state.set_phase(GamePhase::Playing);
    state.start_level(0);
}

/// FAIL/WIN -> PLAYING from level 0 with a fresh attempt
pub fn restart(state: &mut GameState) {
    log::info!("Restarting from level 1");
    start_game(state);
}

/// Finish the active level: advance to the next one, or win after the last.
///
/// Also the target of the debug skip, so it does not look at waypoints.
/// Ignored outside of PLAYING.
pub fn complete_level(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        log::debug!("complete_level ignored in {:?}", state.phase);
        return;
    }

    let index = state.level.level_index;
    log::info!("Level {} complete", index + 1);
    state.push_event(GameEvent::LevelCompleted { index });

    if state.catalog.is_last(index) {
        log::info!("All {} levels complete", state.catalog.len());
        state.set_phase(GamePhase::Win);
    } else {
        state.start_level(index + 1);
    }
}

fn fail(state: &mut GameState) {
    log::info!(
        "Out of time on level {} ({}/{} connected)",
        state.level.level_index + 1,
        state.level.connected_count(),
        state.level.waypoints.len()
    );
    state.set_phase(GamePhase::Fail);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::levels::{LevelCatalog, LevelDefinition};
    use crate::tuning::{MovementTiming, Tuning};

    fn one_dot_level() -> GameState {
        let catalog =
            LevelCatalog::new(vec![LevelDefinition::new("Dot", 30.0, vec![Vec2::new(0.5, 0.5)])])
                .unwrap();
        GameState::new(catalog, Tuning::default())
    }

    fn two_levels() -> GameState {
        let catalog = LevelCatalog::new(vec![
            LevelDefinition::new("First", 30.0, vec![Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.25)]),
            LevelDefinition::new("Second", 20.0, vec![Vec2::new(0.1, 0.1)]),
        ])
        .unwrap();
        GameState::new(catalog, Tuning::default())
    }

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn playing(mut state: GameState) -> GameState {
        tick(&mut state, &confirm(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        state.drain_events();
        state
    }

    #[test]
    fn test_tick_start_to_playing() {
        let mut state = one_dot_level();

        // Idle on the start screen
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.level.time_remaining, 30.0);

        tick(&mut state, &confirm(), 1.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.time_remaining, 30.0);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::PhaseChanged {
                    from: GamePhase::Start,
                    to: GamePhase::Playing
                },
                GameEvent::LevelStarted { index: 0 },
            ]
        );
    }

    #[test]
    fn test_direction_precedence() {
        let input = TickInput {
            up: true,
            down: true,
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(1.0, 1.0));

        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(-1.0, -1.0));
        assert_eq!(TickInput::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_timer_expiry_fails_without_moving() {
        let mut state = playing(one_dot_level());
        let input = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut state, &input, 29.0);
        assert_eq!(state.phase, GamePhase::Playing);
        let pos = state.ship.pos;

        tick(&mut state, &input, 1.0);
        assert_eq!(state.phase, GamePhase::Fail);
        assert_eq!(state.ship.pos, pos);
    }

    #[test]
    fn test_expiring_step_does_not_connect() {
        let mut state = playing(one_dot_level());
        state.ship.pos = Vec2::new(400.0, 300.0);
        tick(&mut state, &TickInput::default(), 30.0);

        assert_eq!(state.phase, GamePhase::Fail);
        assert_eq!(state.level.next_required, 0);
        assert!(!state.level.waypoints[0].connected);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Playing,
                to: GamePhase::Fail
            }]
        );
    }

    #[test]
    fn test_unmoved_ship_fails_after_time_limit() {
        let mut state = playing(one_dot_level());
        for _ in 0..59 {
            tick(&mut state, &TickInput::default(), 0.5);
            assert_eq!(state.phase, GamePhase::Playing);
        }
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.phase, GamePhase::Fail);
        assert_eq!(state.steps, 60);

        // Nothing runs after failing
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.steps, 60);
    }

    #[test]
    fn test_reaching_only_waypoint_wins_same_step() {
        let mut state = playing(one_dot_level());
        // Waypoint sits at (400, 300); first step ends at distance 31, second at 26
        state.ship.pos = Vec2::new(400.0, 336.0);
        let up = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut state, &up, 1.0 / 60.0);
        assert_eq!(state.phase, GamePhase::Playing);
        tick(&mut state, &up, 1.0 / 60.0);
        assert_eq!(state.level.next_required, 1);
        assert!(state.level.waypoints[0].connected);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::WaypointConnected { level: 0, index: 0 },
                GameEvent::LevelCompleted { index: 0 },
                GameEvent::PhaseChanged {
                    from: GamePhase::Playing,
                    to: GamePhase::Win
                },
            ]
        );
    }

    #[test]
    fn test_completing_level_progresses() {
        let mut state = playing(two_levels());
        state.level.time_remaining = 4.0;
        state.ship.pos = Vec2::new(400.0, 300.0);
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.level.next_required, 1);

        state.ship.pos = Vec2::new(400.0, 150.0);
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.level_index, 1);
        assert_eq!(state.level.time_remaining, 20.0);
        assert_eq!(state.level.next_required, 0);
        assert_eq!(state.level.waypoints[0].pos, Vec2::new(80.0, 60.0));
        assert_eq!(state.ship.pos, Vec2::new(400.0, 550.0));
    }

    #[test]
    fn test_restart_from_fail_returns_to_first_level() {
        let mut state = playing(two_levels());
        complete_level(&mut state);
        assert_eq!(state.level.level_index, 1);

        tick(&mut state, &TickInput::default(), 25.0);
        assert_eq!(state.phase, GamePhase::Fail);

        tick(&mut state, &confirm(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.level_index, 0);
        assert_eq!(state.level.time_remaining, 30.0);
        assert!(state.level.waypoints.iter().all(|w| !w.connected));
    }

    #[test]
    fn test_restart_from_win() {
        let mut state = playing(one_dot_level());
        complete_level(&mut state);
        assert_eq!(state.phase, GamePhase::Win);

        tick(&mut state, &confirm(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.level_index, 0);
    }

    #[test]
    fn test_skip_level_ignores_proximity() {
        let mut state = playing(two_levels());
        let skip = TickInput {
            skip_level: true,
            ..Default::default()
        };
        tick(&mut state, &skip, 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.level_index, 1);
        // Countdown untouched by the skipping step
        assert_eq!(state.level.time_remaining, 20.0);

        tick(&mut state, &skip, 0.1);
        assert_eq!(state.phase, GamePhase::Win);
    }

    #[test]
    fn test_skip_level_ignored_outside_playing() {
        let mut state = one_dot_level();
        let skip = TickInput {
            skip_level: true,
            ..Default::default()
        };
        tick(&mut state, &skip, 0.1);
        assert_eq!(state.phase, GamePhase::Start);
        complete_level(&mut state);
        assert_eq!(state.phase, GamePhase::Start);
    }

    #[test]
    fn test_confirm_while_playing_is_ignored() {
        let mut state = playing(two_levels());
        complete_level(&mut state);
        tick(&mut state, &confirm(), 1.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.level_index, 1);
        assert_eq!(state.level.time_remaining, 19.0);
    }

    #[test]
    fn test_empty_level_completes_on_first_step() {
        let catalog = LevelCatalog::new(vec![
            LevelDefinition::new("Void", 10.0, Vec::new()),
            LevelDefinition::new("Dot", 10.0, vec![Vec2::splat(0.5)]),
        ])
        .unwrap();
        let mut state = playing(GameState::new(catalog, Tuning::default()));
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.level.level_index, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_boost_and_brake_speeds() {
        let mut state = playing(one_dot_level());
        let both = TickInput {
            left: true,
            boost: true,
            brake: true,
            ..Default::default()
        };
        tick(&mut state, &both, 0.1);
        assert_eq!(state.ship.pos, Vec2::new(392.5, 550.0));

        let brake = TickInput {
            left: true,
            brake: true,
            ..Default::default()
        };
        tick(&mut state, &brake, 0.1);
        assert_eq!(state.ship.pos, Vec2::new(390.0, 550.0));
    }

    #[test]
    fn test_movement_is_frame_locked_by_default() {
        let mut state = playing(one_dot_level());
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, 0.25);
        assert_eq!(state.ship.pos.x, 405.0);
        tick(&mut state, &right, 0.01);
        assert_eq!(state.ship.pos.x, 410.0);
    }

    #[test]
    fn test_movement_per_second_scales_with_dt() {
        let catalog = LevelCatalog::zodiac();
        let mut tuning = Tuning::default();
        tuning.movement = MovementTiming::PerSecond { reference_hz: 60.0 };
        let mut state = playing(GameState::new(catalog, tuning));
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, 0.5);
        assert!((state.ship.pos.x - 550.0).abs() < 1e-3);
    }
}
