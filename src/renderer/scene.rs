//! Scene building for 2D drawing
//!
//! Turns a [`GameState`] into positioned, styled primitives in field units.
//! No drawing API here, so everything is testable off the web.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::FRAC_PI_2;

use crate::sim::{GamePhase, GameState, Thrust};

pub const BACKGROUND: &str = "#000033";
pub const STAR_IDLE: &str = "#ffffff";
pub const STAR_CONNECTED: &str = "#ff00bb";
pub const STAR_TARGET: &str = "#ffff00";
pub const LINE_GUIDE: &str = "rgba(255, 255, 255, 0.2)";
pub const LINE_LIT: &str = "#ff00bb";
pub const SHIP_COLOR: &str = "#00ffff";
pub const ENGINE_GLOW: &str = "orange";

/// Waypoint dot radius
pub const STAR_RADIUS: f32 = 6.0;
/// Ship half-length
pub const SHIP_SIZE: f32 = 15.0;
/// Background dust specks
pub const DUST_COUNT: usize = 120;

/// How a waypoint is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarStyle {
    Idle,
    /// The waypoint the ship must reach next
    Target,
    Connected,
}

impl StarStyle {
    pub fn color(&self) -> &'static str {
        match self {
            StarStyle::Idle => STAR_IDLE,
            StarStyle::Target => STAR_TARGET,
            StarStyle::Connected => STAR_CONNECTED,
        }
    }

    /// Idle stars don't glow
    pub fn glows(&self) -> bool {
        !matches!(self, StarStyle::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    pub pos: Vec2,
    pub style: StarStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipSprite {
    pub pos: Vec2,
    pub heading: f32,
    pub engine_glow: bool,
}

impl ShipSprite {
    /// Model space points "up" (-y); rotate so the nose follows the heading
    fn to_field(&self, local: Vec2) -> Vec2 {
        self.pos + Vec2::from_angle(self.heading + FRAC_PI_2).rotate(local)
    }

    /// Hull triangle: nose, right tail, left tail
    pub fn hull(&self) -> [Vec2; 3] {
        [
            self.to_field(Vec2::new(0.0, -SHIP_SIZE)),
            self.to_field(Vec2::new(SHIP_SIZE / 2.0, SHIP_SIZE)),
            self.to_field(Vec2::new(-SHIP_SIZE / 2.0, SHIP_SIZE)),
        ]
    }

    /// Exhaust flame behind the hull while boosting
    pub fn flame(&self) -> Option<[Vec2; 3]> {
        self.engine_glow.then(|| {
            [
                self.to_field(Vec2::new(0.0, SHIP_SIZE)),
                self.to_field(Vec2::new(5.0, SHIP_SIZE + 10.0)),
                self.to_field(Vec2::new(-5.0, SHIP_SIZE + 10.0)),
            ]
        })
    }
}

/// A background speck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dust {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Static background, generated once per seed
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    pub dust: Vec<Dust>,
}

impl Backdrop {
    pub fn new(seed: u64, size: Vec2, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let dust = (0..count)
            .map(|_| Dust {
                pos: Vec2::new(
                    rng.random_range(0.0..=size.x),
                    rng.random_range(0.0..=size.y),
                ),
                radius: rng.random_range(0.4..1.4),
                alpha: rng.random_range(0.15..0.6),
            })
            .collect();
        Self { dust }
    }
}

/// Everything drawn over the backdrop for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Vec2,
    /// Dotted guide through every waypoint in order
    pub guide: Vec<Vec2>,
    /// Solid line through the connected waypoints
    pub lit: Vec<Vec2>,
    pub stars: Vec<StarSprite>,
    pub ship: Option<ShipSprite>,
}

impl Scene {
    /// Only the playing phase draws the level; other phases show the backdrop
    pub fn build(state: &GameState) -> Self {
        let size = state.tuning.field_size();
        if state.phase != GamePhase::Playing {
            return Self {
                size,
                guide: Vec::new(),
                lit: Vec::new(),
                stars: Vec::new(),
                ship: None,
            };
        }

        let level = &state.level;
        let positions: Vec<Vec2> = level.waypoints.iter().map(|w| w.pos).collect();
        let lit = positions[..level.connected_count()].to_vec();

        let stars = level
            .waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| StarSprite {
                pos: w.pos,
                style: if w.connected {
                    StarStyle::Connected
                } else if i == level.next_required {
                    StarStyle::Target
                } else {
                    StarStyle::Idle
                },
            })
            .collect();

        Self {
            size,
            guide: positions,
            lit,
            stars,
            ship: Some(ShipSprite {
                pos: state.ship.pos,
                heading: state.ship.heading,
                engine_glow: state.ship.thrust == Thrust::Boost,
            }),
        }
    }
}
