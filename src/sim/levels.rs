//! Level catalog
//!
//! Each level is a constellation: a name, a countdown and the waypoints to
//! visit, in order. Coordinates are normalized to the unit square and scaled
//! to the field when an attempt starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One level of the catalog (immutable once loaded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    /// Countdown in seconds
    pub time_limit: f32,
    /// Normalized waypoint positions in required visiting order
    pub waypoints: Vec<Vec2>,
}

impl LevelDefinition {
    pub fn new(name: impl Into<String>, time_limit: f32, waypoints: Vec<Vec2>) -> Self {
        Self {
            name: name.into(),
            time_limit,
            waypoints,
        }
    }
}

/// Ordered list of levels, played front to back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelDefinition>", into = "Vec<LevelDefinition>")]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Build a catalog, checking time limits and waypoint bounds
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, Error> {
        if levels.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        for (level, def) in levels.iter().enumerate() {
            if !(def.time_limit > 0.0 && def.time_limit.is_finite()) {
                return Err(Error::InvalidTimeLimit {
                    level,
                    value: def.time_limit,
                });
            }
            let in_unit_square = |p: &Vec2| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y);
            if let Some(index) = def.waypoints.iter().position(|p| !in_unit_square(p)) {
                return Err(Error::WaypointOutOfBounds { level, index });
            }
            if def.waypoints.is_empty() {
                log::warn!("Level {} ({}) has no waypoints and completes on its first step", level, def.name);
            }
        }

        Ok(Self { levels })
    }

    /// Parse a JSON array of level definitions
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let levels: Vec<LevelDefinition> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.levels)?)
    }

    /// The twelve zodiac constellations
    pub fn zodiac() -> Self {
        let levels = ZODIAC
            .iter()
            .map(|(name, time_limit, stars)| {
                LevelDefinition::new(
                    *name,
                    *time_limit,
                    stars.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
                )
            })
            .collect();
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDefinition> {
        self.levels.get(index)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }
}

impl TryFrom<Vec<LevelDefinition>> for LevelCatalog {
    type Error = Error;

    fn try_from(levels: Vec<LevelDefinition>) -> Result<Self, Error> {
        Self::new(levels)
    }
}

impl From<LevelCatalog> for Vec<LevelDefinition> {
    fn from(catalog: LevelCatalog) -> Self {
        catalog.levels
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::zodiac()
    }
}

/// (name, seconds, normalized stars)
type LevelRow = (&'static str, f32, &'static [(f32, f32)]);

// Approximate zodiac shapes; Gemini is reduced to two joined parallel lines.
const ZODIAC: &[LevelRow] = &[
    ("Aries", 30.0, &[(0.2, 0.5), (0.4, 0.4), (0.6, 0.45), (0.7, 0.6)]),
    (
        "Taurus",
        28.0,
        &[(0.3, 0.7), (0.4, 0.5), (0.35, 0.3), (0.5, 0.35), (0.7, 0.3), (0.8, 0.4)],
    ),
    (
        "Gemini",
        26.0,
        &[(0.3, 0.2), (0.3, 0.8), (0.4, 0.8), (0.4, 0.2), (0.35, 0.5), (0.5, 0.5)],
    ),
    ("Cancer", 24.0, &[(0.5, 0.5), (0.4, 0.3), (0.6, 0.3), (0.5, 0.7), (0.4, 0.8)]),
    (
        "Leo",
        22.0,
        &[(0.6, 0.3), (0.5, 0.2), (0.4, 0.25), (0.35, 0.4), (0.4, 0.6), (0.6, 0.6), (0.7, 0.5)],
    ),
    (
        "Virgo",
        20.0,
        &[(0.2, 0.5), (0.4, 0.5), (0.5, 0.3), (0.5, 0.7), (0.7, 0.4), (0.8, 0.8)],
    ),
    (
        "Libra",
        19.0,
        &[(0.3, 0.7), (0.5, 0.8), (0.7, 0.7), (0.5, 0.4), (0.3, 0.4), (0.7, 0.4)],
    ),
    (
        "Scorpio",
        18.0,
        &[
            (0.2, 0.3),
            (0.3, 0.4),
            (0.4, 0.5),
            (0.5, 0.6),
            (0.6, 0.5),
            (0.6, 0.3),
            (0.7, 0.3),
            (0.75, 0.4),
        ],
    ),
    (
        "Sagittarius",
        17.0,
        &[(0.3, 0.6), (0.5, 0.6), (0.5, 0.3), (0.6, 0.5), (0.7, 0.4), (0.4, 0.4), (0.4, 0.7)],
    ),
    ("Capricorn", 16.0, &[(0.3, 0.3), (0.5, 0.4), (0.7, 0.3), (0.6, 0.7), (0.4, 0.7)]),
    (
        "Aquarius",
        15.0,
        &[(0.2, 0.2), (0.3, 0.4), (0.4, 0.2), (0.5, 0.4), (0.6, 0.2), (0.7, 0.4)],
    ),
    (
        "Pisces",
        14.0,
        &[(0.3, 0.5), (0.4, 0.3), (0.5, 0.3), (0.6, 0.5), (0.5, 0.7), (0.4, 0.7)],
    ),
];
