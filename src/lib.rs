//! Starhopper - trace zodiac constellations against the clock
//!
//! Core modules:
//! - `sim`: Level simulation (phases, ship integration, waypoint connection)
//! - `renderer`: Scene building and Canvas2D drawing
//! - `ui`: HUD text and phase overlays
//! - `input`: Key state to per-step input snapshots
//! - `tuning`: Data-driven movement and field parameters
//! - `settings`: App-level configuration

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::Error;
pub use settings::Settings;
pub use tuning::{MovementTiming, ShipTuning, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions (field units, one unit per canvas pixel)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ship must come closer than this to connect the target waypoint
    pub const CONNECTION_RADIUS: f32 = 30.0;

    /// Ship displacement per simulation step at base speed
    pub const SHIP_BASE_SPEED: f32 = 5.0;
    pub const SHIP_BOOST_MULTIPLIER: f32 = 1.5;
    pub const SHIP_BRAKE_MULTIPLIER: f32 = 0.5;
    /// Distance of the attempt start point above the bottom edge
    pub const SHIP_START_OFFSET: f32 = 50.0;

    /// Countdown turns to warning color at or below this many seconds
    pub const LOW_TIME_WARNING: f32 = 5.0;
}

/// Clamp a point into the rectangle [0, size.x] x [0, size.y]
#[inline]
pub fn clamp_to_field(pos: Vec2, size: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, size)
}

/// Scale a normalized [0, 1] coordinate into field space
#[inline]
pub fn scale_to_field(normalized: Vec2, size: Vec2) -> Vec2 {
    normalized * size
}
