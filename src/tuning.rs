//! Data-driven game balance
//!
//! Field size, connection radius and ship handling. Defaults reproduce the
//! arcade feel; everything can be overridden through [`crate::Settings`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Error;

/// How ship displacement relates to elapsed time.
///
/// The countdown always decays in real seconds. Movement does not: by
/// default the ship moves a fixed distance every simulation step, so it
/// travels further per second on faster displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum MovementTiming {
    /// Fixed distance per step, independent of frame time
    #[default]
    PerStep,
    /// Distance scaled by `dt * reference_hz`, matching `PerStep` at that rate
    PerSecond { reference_hz: f32 },
}

impl MovementTiming {
    /// Factor applied to the per-step displacement for a step of `dt` seconds
    pub fn step_scale(&self, dt: f32) -> f32 {
        match *self {
            MovementTiming::PerStep => 1.0,
            MovementTiming::PerSecond { reference_hz } => dt * reference_hz,
        }
    }
}

/// Ship handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Displacement per step with no modifier held
    pub base_speed: f32,
    /// Speed multiplier while boosting (> 1)
    pub boost_multiplier: f32,
    /// Speed multiplier while braking (< 1)
    pub brake_multiplier: f32,
    /// Attempt start point height above the bottom edge
    pub start_offset: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            base_speed: SHIP_BASE_SPEED,
            boost_multiplier: SHIP_BOOST_MULTIPLIER,
            brake_multiplier: SHIP_BRAKE_MULTIPLIER,
            start_offset: SHIP_START_OFFSET,
        }
    }
}

/// Simulation parameters fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub connection_radius: f32,
    pub ship: ShipTuning,
    pub movement: MovementTiming,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            connection_radius: CONNECTION_RADIUS,
            ship: ShipTuning::default(),
            movement: MovementTiming::PerStep,
        }
    }
}

impl Tuning {
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Bottom-center start point for every attempt
    pub fn start_point(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0,
            (self.field_height - self.ship.start_offset).max(0.0),
        )
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), Error> {
        fn check(name: &'static str, value: f32, ok: bool, expected: &'static str) -> Result<(), Error> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(Error::InvalidTuning {
                    name,
                    value,
                    expected,
                })
            }
        }

        check("field_width", self.field_width, self.field_width > 0.0, "> 0")?;
        check("field_height", self.field_height, self.field_height > 0.0, "> 0")?;
        check(
            "connection_radius",
            self.connection_radius,
            self.connection_radius > 0.0,
            "> 0",
        )?;
        check("base_speed", self.ship.base_speed, self.ship.base_speed >= 0.0, ">= 0")?;
        check(
            "boost_multiplier",
            self.ship.boost_multiplier,
            self.ship.boost_multiplier > 1.0,
            "> 1",
        )?;
        check(
            "brake_multiplier",
            self.ship.brake_multiplier,
            self.ship.brake_multiplier > 0.0 && self.ship.brake_multiplier < 1.0,
            "between 0 and 1",
        )?;
        if let MovementTiming::PerSecond { reference_hz } = self.movement {
            check("reference_hz", reference_hz, reference_hz > 0.0, "> 0")?;
        }
        Ok(())
    }
}
