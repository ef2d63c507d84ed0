//! Game state and core simulation types
//!
//! Everything the per-step update mutates lives in [`GameState`]. The
//! presentation layer only reads it (and drains its event queue).

use glam::Vec2;

use super::levels::{LevelCatalog, LevelDefinition};
use crate::tuning::{ShipTuning, Tuning};
use crate::{clamp_to_field, scale_to_field};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Playing,
    /// Countdown ran out
    Fail,
    /// Final level completed
    Win,
}

/// Speed modifier selected for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thrust {
    #[default]
    Cruise,
    Boost,
    Brake,
}

impl Thrust {
    /// Boost wins when both modifiers are held
    pub fn from_modifiers(boost: bool, brake: bool) -> Self {
        if boost {
            Thrust::Boost
        } else if brake {
            Thrust::Brake
        } else {
            Thrust::Cruise
        }
    }

    pub fn speed(&self, tuning: &ShipTuning) -> f32 {
        match self {
            Thrust::Cruise => tuning.base_speed,
            Thrust::Boost => tuning.base_speed * tuning.boost_multiplier,
            Thrust::Brake => tuning.base_speed * tuning.brake_multiplier,
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Position in field units, always inside the field
    pub pos: Vec2,
    /// Displacement applied on the last step
    pub vel: Vec2,
    /// Facing (radians, 0 = +x); only changes while steering
    pub heading: f32,
    /// Modifier used on the last step
    pub thrust: Thrust,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            thrust: Thrust::Cruise,
        }
    }

    /// Move to the attempt start point and drop any motion. Heading is kept.
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
        self.vel = Vec2::ZERO;
        self.thrust = Thrust::Cruise;
    }

    /// Apply one step of movement.
    ///
    /// `direction` is the raw per-axis input (components in {-1, 0, 1}).
    /// Diagonals are normalized so they are no faster than straight moves.
    pub fn integrate(&mut self, direction: Vec2, thrust: Thrust, tuning: &Tuning, step_scale: f32) {
        let direction = if direction.x != 0.0 && direction.y != 0.0 {
            direction.normalize()
        } else {
            direction
        };

        if direction != Vec2::ZERO {
            self.heading = direction.y.atan2(direction.x);
        }

        let speed = thrust.speed(&tuning.ship);
        self.thrust = thrust;
        self.vel = direction * speed * step_scale;
        self.pos = clamp_to_field(self.pos + self.vel, tuning.field_size());
    }
}

/// A target point of the active level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Position in field units
    pub pos: Vec2,
    pub connected: bool,
}

/// Per-attempt state of the active level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRuntime {
    /// Index into the catalog
    pub level_index: usize,
    /// Seconds left; may dip below zero on the step that fails the attempt
    pub time_remaining: f32,
    pub waypoints: Vec<Waypoint>,
    /// Next waypoint to connect; everything before it is connected
    pub next_required: usize,
}

impl LevelRuntime {
    /// Fresh attempt: full countdown, nothing connected
    pub fn new(level_index: usize, def: &LevelDefinition, field_size: Vec2) -> Self {
        Self {
            level_index,
            time_remaining: def.time_limit,
            waypoints: def
                .waypoints
                .iter()
                .map(|&p| Waypoint {
                    pos: scale_to_field(p, field_size),
                    connected: false,
                })
                .collect(),
            next_required: 0,
        }
    }

    /// Waypoint the ship must reach next, if any remain
    pub fn target(&self) -> Option<&Waypoint> {
        self.waypoints.get(self.next_required)
    }

    pub fn is_complete(&self) -> bool {
        self.next_required >= self.waypoints.len()
    }

    pub fn connected_count(&self) -> usize {
        self.next_required.min(self.waypoints.len())
    }
}

/// Things that happened during a step, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A new attempt began (first start, progression or restart)
    LevelStarted { index: usize },
    WaypointConnected { level: usize, index: usize },
    LevelCompleted { index: usize },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Shared, read-only level data
    pub catalog: LevelCatalog,
    /// Parameters fixed for this game
    pub tuning: Tuning,
    /// Player craft
    pub ship: Ship,
    /// Active level attempt
    pub level: LevelRuntime,
    /// Simulation steps run while playing
    pub steps: u64,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game waiting on the start screen.
    ///
    /// Level 0 is prepared up front so there is always a valid runtime to
    /// read; confirming from the start screen re-initializes it anyway.
    pub fn new(catalog: LevelCatalog, tuning: Tuning) -> Self {
        let start = tuning.start_point();
        let level = LevelRuntime::new(0, first_level(&catalog), tuning.field_size());
        Self {
            phase: GamePhase::Start,
            catalog,
            tuning,
            ship: Ship::new(start),
            level,
            steps: 0,
            events: Vec::new(),
        }
    }

    /// Definition of the active level
    ///
    /// # Panics
    /// If the runtime points outside the catalog, which only a bypassed
    /// [`GameState::start_level`] can cause.
    pub fn level_def(&self) -> &LevelDefinition {
        let index = self.level.level_index;
        match self.catalog.get(index) {
            Some(def) => def,
            None => panic!(
                "active level {} out of range (catalog has {})",
                index,
                self.catalog.len()
            ),
        }
    }

    /// (Re)initialize the attempt for `index` and put the ship on the start point.
    ///
    /// # Panics
    /// If `index` is not a catalog index. Callers guard with
    /// [`LevelCatalog::is_last`].
    pub fn start_level(&mut self, index: usize) {
        let Some(def) = self.catalog.get(index) else {
            panic!(
                "level index {} out of range (catalog has {})",
                index,
                self.catalog.len()
            );
        };
        self.level = LevelRuntime::new(index, def, self.tuning.field_size());
        self.ship.reset(self.tuning.start_point());
        log::info!("Level {}: {} ({}s)", index + 1, def.name, def.time_limit);
        self.push_event(GameEvent::LevelStarted { index });
    }

    /// Switch phase, recording the edge. No-op if already in `to`.
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            self.push_event(GameEvent::PhaseChanged { from, to });
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(LevelCatalog::zodiac(), Tuning::default())
    }
}

fn first_level(catalog: &LevelCatalog) -> &LevelDefinition {
    match catalog.get(0) {
        Some(def) => def,
        None => unreachable!("catalogs are never empty"),
    }
}
